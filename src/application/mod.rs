//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（NovelSearchPort、SearchSlotPort）
//! - queries: 查询及处理器
//! - formatter: 检索结果排版
//! - error: 应用层错误定义

pub mod error;
pub mod formatter;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use formatter::{Document, NovelSection, ResultFormatter, ResultsDocument, ERROR_MESSAGE};

pub use ports::{NarouApiError, NovelSearchPort, SearchId, SearchSlotPort};

pub use queries::{handlers::SearchNovelsHandler, SearchNovels};
