//! TUI Layer - 终端界面
//!
//! 关键词输入、排序选择、结果滚动显示

mod app;
mod input;
mod ui;

pub use app::{run, App, Focus};
pub use input::KeywordInput;
