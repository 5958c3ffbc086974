//! narou-search - 小説家になろう検索クライアント
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Search Context: 关键词、排序、API 字段、检索结果
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NovelSearchPort, SearchSlotPort）
//! - Queries: SearchNovels 查询处理器
//! - Formatter: 结果排版
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: なろう API HTTP 客户端
//! - Memory: 单槽任务登记
//! - Worker: SearchController
//! - TUI: 终端界面

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
