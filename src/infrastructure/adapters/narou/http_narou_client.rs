//! HTTP Narou Client - 调用なろう小説 API
//!
//! 实现 NovelSearchPort trait
//!
//! 外部 API:
//! GET https://api.syosetu.com/novelapi/api/?gzip=5&out=json&lim=..&order=..&keyword=1&word=..
//! Response: gzip 压缩的 JSON 数组，首元素为 `{"allcount": N}`

use async_trait::async_trait;
use reqwest::Client;

use super::codec::{decode_count, decode_records};
use crate::application::ports::{NarouApiError, NovelSearchPort};
use crate::domain::search::{output_fields, NovelRecord, PageRequest, SearchQuery, DISPLAY_ATTRIBUTES};

/// `gzip` 参数（压缩级别），固定值
const GZIP_LEVEL: u32 = 5;

/// HTTP 客户端配置
#[derive(Debug, Clone)]
pub struct HttpNarouClientConfig {
    /// API 端点
    pub base_url: String,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpNarouClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.syosetu.com/novelapi/api/".to_string(),
            user_agent: concat!("narou-search/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpNarouClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// 查询参数
type Params = Vec<(&'static str, String)>;

fn base_params(query: &SearchQuery, limit: u32) -> Params {
    vec![
        ("gzip", GZIP_LEVEL.to_string()),
        ("out", "json".to_string()),
        ("lim", limit.to_string()),
        ("order", query.order().code().to_string()),
        ("keyword", "1".to_string()),
        ("word", query.keyword().as_str().to_string()),
    ]
}

/// 总件数请求：`lim=1`，不带 `st` 和 `of`
fn count_params(query: &SearchQuery) -> Params {
    base_params(query, 1)
}

/// 结果页请求
fn page_params(query: &SearchQuery, page: PageRequest) -> Params {
    let mut params = base_params(query, page.size());
    params.push(("st", page.start_offset().to_string()));
    params.push(("of", output_fields(&DISPLAY_ATTRIBUTES)));
    params
}

/// HTTP Narou 客户端
///
/// 每次调用只尝试一次，不重试，超时沿用 reqwest 默认值
pub struct HttpNarouClient {
    client: Client,
    config: HttpNarouClientConfig,
}

impl HttpNarouClient {
    /// 创建新的客户端
    pub fn new(config: HttpNarouClientConfig) -> Result<Self, NarouApiError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NarouApiError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 发送 GET，返回原始响应体
    async fn get(&self, params: &Params) -> Result<Vec<u8>, NarouApiError> {
        tracing::debug!(url = %self.config.base_url, params = ?params, "Sending search request");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NarouApiError::NetworkError("Request timeout".to_string())
                } else if e.is_connect() {
                    NarouApiError::NetworkError(format!("Cannot connect to search API: {}", e))
                } else {
                    NarouApiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NarouApiError::ServiceError(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NarouApiError::NetworkError(format!("Failed to read body: {}", e)))?;

        Ok(body.to_vec())
    }
}

#[async_trait]
impl NovelSearchPort for HttpNarouClient {
    async fn count_for_keyword(&self, query: &SearchQuery) -> Result<u64, NarouApiError> {
        let body = self.get(&count_params(query)).await?;
        let count = decode_count(&body)?;

        tracing::info!(
            keyword = %query.keyword(),
            order = %query.order(),
            count = count,
            "Count lookup completed"
        );
        Ok(count)
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<Vec<NovelRecord>, NarouApiError> {
        let body = match self.get(&page_params(query, page)).await {
            Ok(body) => body,
            Err(e) if e.is_transport() => {
                tracing::warn!(
                    keyword = %query.keyword(),
                    page = page.number(),
                    error = %e,
                    "Page lookup failed, treating as zero results"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let records = decode_records(&body)?;
        tracing::info!(
            keyword = %query.keyword(),
            page = page.number(),
            records = records.len(),
            "Page lookup completed"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SortOrder;

    fn value<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_config_default() {
        let config = HttpNarouClientConfig::default();
        assert_eq!(config.base_url, "https://api.syosetu.com/novelapi/api/");
        assert!(config.user_agent.starts_with("narou-search/"));
    }

    #[test]
    fn test_config_builder() {
        let config = HttpNarouClientConfig::new("http://127.0.0.1:9000/api/").with_user_agent("test");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/");
        assert_eq!(config.user_agent, "test");
    }

    #[test]
    fn test_count_params() {
        let query = SearchQuery::new("悪役令嬢", SortOrder::FavNovelCnt).unwrap();
        let params = count_params(&query);
        assert_eq!(value(&params, "gzip"), Some("5"));
        assert_eq!(value(&params, "out"), Some("json"));
        assert_eq!(value(&params, "lim"), Some("1"));
        assert_eq!(value(&params, "order"), Some("favnovelcnt"));
        assert_eq!(value(&params, "keyword"), Some("1"));
        assert_eq!(value(&params, "word"), Some("悪役令嬢"));
        assert_eq!(value(&params, "st"), None);
        assert_eq!(value(&params, "of"), None);
    }

    #[test]
    fn test_page_params() {
        let query = SearchQuery::new("剣", SortOrder::Old).unwrap();
        let params = page_params(&query, PageRequest::first());
        assert_eq!(value(&params, "lim"), Some("30"));
        assert_eq!(value(&params, "st"), Some("1"));
        assert_eq!(value(&params, "of"), Some("t-w-s-g-n-l"));
        assert_eq!(value(&params, "order"), Some("old"));
    }
}
