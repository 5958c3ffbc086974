//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod memory;
pub mod tui;
pub mod worker;

pub use memory::InMemorySearchSlot;
pub use worker::{SearchController, SearchEvent, SearchState};
