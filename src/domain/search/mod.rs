//! Search Context - 小説検索限界上下文
//!
//! 职责:
//! - 检索请求（关键词 + 排序）
//! - API 字段与排序代码表
//! - 检索结果记录

mod attribute;
mod entities;
mod errors;
mod order;
mod value_objects;

pub use attribute::{output_fields, Attribute, DISPLAY_ATTRIBUTES};
pub use entities::{Genre, NovelRecord, SearchResult};
pub use errors::SearchError;
pub use order::SortOrder;
pub use value_objects::{Keyword, PageRequest, SearchQuery, PAGE_SIZE};
