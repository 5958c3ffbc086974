//! Worker Layer - Background Task Processing
//!
//! 实现 SearchController，调度检索任务

mod search_worker;

pub use search_worker::{SearchController, SearchEvent, SearchState};
