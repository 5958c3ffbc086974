//! Novel Search Port - 小説検索 API 抽象
//!
//! 定义检索 API 的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::search::{NovelRecord, PageRequest, SearchQuery};

/// 检索 API 错误
#[derive(Debug, Error)]
pub enum NarouApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NarouApiError {
    /// 传输层失败（连接失败或非 2xx）
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError(_) | Self::ServiceError(_))
    }
}

/// Novel Search Port
///
/// 两个调用失败策略不同：
/// - `count_for_keyword` 传输失败时返回错误，整个检索终止
/// - `fetch_page` 传输失败时返回空列表，按「0 件」继续渲染
#[async_trait]
pub trait NovelSearchPort: Send + Sync {
    /// 只取总件数（`lim=1`）
    async fn count_for_keyword(&self, query: &SearchQuery) -> Result<u64, NarouApiError>;

    /// 取一页记录
    ///
    /// 传输失败返回 `Ok(vec![])`；只有响应体无法解码时才返回错误
    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<Vec<NovelRecord>, NarouApiError>;
}
