//! Query Handlers 实现

mod search_handlers;

pub use search_handlers::*;
