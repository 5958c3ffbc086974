//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod novel_search;
mod search_slot;

pub use novel_search::{NarouApiError, NovelSearchPort};
pub use search_slot::{SearchId, SearchSlotPort};
