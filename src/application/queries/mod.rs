//! 应用层 - 查询（读操作）

mod search_queries;

pub mod handlers;

pub use search_queries::*;
