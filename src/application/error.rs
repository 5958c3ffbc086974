//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::NarouApiError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 总件数查询失败，检索终止
    #[error("Count lookup failed: {0}")]
    CountFailed(#[source] NarouApiError),

    /// 结果页无法解码
    #[error("Page lookup failed: {0}")]
    PageFailed(#[source] NarouApiError),
}
