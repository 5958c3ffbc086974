//! Domain Layer - 领域层
//!
//! - Search Context: 关键词、排序、API 字段、检索结果

pub mod search;

// あらすじ链接改写
mod link_rewriter;

pub use link_rewriter::rewrite_links;
