//! Memory Layer - In-Memory State Management
//!
//! 实现 SearchSlot，登记当前唯一的检索任务

mod search_slot;

pub use search_slot::InMemorySearchSlot;
