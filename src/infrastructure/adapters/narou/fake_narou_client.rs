//! Fake Narou Client - 用于测试的检索客户端
//!
//! 不发出网络请求，返回配置好的固定结果

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{NarouApiError, NovelSearchPort};
use crate::domain::search::{NovelRecord, PageRequest, SearchQuery};

/// Fake Narou Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeNarouClientConfig {
    /// 总件数
    pub total_count: u64,
    /// 每次返回的记录（超出页大小的部分被截断）
    pub records: Vec<NovelRecord>,
    /// 每次调用前的延迟
    pub delay: Duration,
    /// 按关键词覆盖延迟
    pub keyword_delays: HashMap<String, Duration>,
    /// 模拟总件数请求的传输失败
    pub fail_count: bool,
    /// 模拟结果页请求的传输失败
    pub fail_page: bool,
}

impl FakeNarouClientConfig {
    pub fn with_delay_for(mut self, keyword: impl Into<String>, delay: Duration) -> Self {
        self.keyword_delays.insert(keyword.into(), delay);
        self
    }
}

/// Fake Narou Client
pub struct FakeNarouClient {
    config: FakeNarouClientConfig,
    count_calls: AtomicUsize,
    page_calls: AtomicUsize,
}

impl FakeNarouClient {
    pub fn new(config: FakeNarouClientConfig) -> Self {
        Self {
            config,
            count_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        }
    }

    /// 已发起的总件数请求数
    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    /// 已发起的结果页请求数
    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self, query: &SearchQuery) {
        let delay = self
            .config
            .keyword_delays
            .get(query.keyword().as_str())
            .copied()
            .unwrap_or(self.config.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl NovelSearchPort for FakeNarouClient {
    async fn count_for_keyword(&self, query: &SearchQuery) -> Result<u64, NarouApiError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(query).await;

        if self.config.fail_count {
            return Err(NarouApiError::ServiceError("HTTP 503 Service Unavailable".to_string()));
        }
        Ok(self.config.total_count)
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<Vec<NovelRecord>, NarouApiError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(query).await;

        if self.config.fail_page {
            tracing::debug!(keyword = %query.keyword(), "FakeNarouClient: page failure, returning empty");
            return Ok(Vec::new());
        }
        Ok(self
            .config
            .records
            .iter()
            .take(page.size() as usize)
            .cloned()
            .collect())
    }
}
