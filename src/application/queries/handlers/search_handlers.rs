//! Search Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::formatter::{Document, ResultFormatter};
use crate::application::ports::NovelSearchPort;
use crate::application::queries::SearchNovels;
use crate::domain::search::{PageRequest, SearchQuery, SearchResult};

/// SearchNovels Handler
///
/// 顺序执行：总件数 → 第一页 → 排版
pub struct SearchNovelsHandler {
    search_api: Arc<dyn NovelSearchPort>,
}

impl SearchNovelsHandler {
    pub fn new(search_api: Arc<dyn NovelSearchPort>) -> Self {
        Self { search_api }
    }

    /// 执行检索，不排版
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, ApplicationError> {
        let total_count = self
            .search_api
            .count_for_keyword(query)
            .await
            .map_err(ApplicationError::CountFailed)?;

        // 页大小固定，与总件数无关
        let records = self
            .search_api
            .fetch_page(query, PageRequest::first())
            .await
            .map_err(ApplicationError::PageFailed)?;

        tracing::debug!(
            keyword = %query.keyword(),
            order = %query.order(),
            total_count = total_count,
            records = records.len(),
            "Search completed"
        );

        Ok(SearchResult {
            total_count,
            records,
        })
    }

    /// 执行检索并排版
    ///
    /// 关键词为空时直接返回空文档，不发请求
    pub async fn handle(&self, query: SearchNovels) -> Document {
        let query = match SearchQuery::new(query.keyword, query.order) {
            Ok(q) => q,
            Err(_) => return Document::Empty,
        };

        match self.search(&query).await {
            Ok(result) => {
                ResultFormatter::render(&query, Some(result.total_count), &result.records)
            }
            Err(e) => {
                tracing::warn!(
                    keyword = %query.keyword(),
                    order = %query.order(),
                    error = %e,
                    "Search failed"
                );
                ResultFormatter::render(&query, None, &[])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::formatter::ERROR_MESSAGE;
    use crate::domain::search::{NovelRecord, SortOrder};
    use crate::infrastructure::adapters::{FakeNarouClient, FakeNarouClientConfig};

    fn records(n: usize) -> Vec<NovelRecord> {
        (0..n)
            .map(|i| NovelRecord {
                title: format!("title-{}", i),
                ncode: format!("N{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_success_renders_every_record() {
        let fake = Arc::new(FakeNarouClient::new(FakeNarouClientConfig {
            total_count: 500,
            records: records(4),
            ..Default::default()
        }));
        let handler = SearchNovelsHandler::new(fake.clone());

        let doc = handler.handle(SearchNovels::new("魔法", SortOrder::Hyoka)).await;
        assert_eq!(doc.section_count(), 4);
        assert_eq!(fake.count_calls(), 1);
        assert_eq!(fake.page_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_keyword_skips_network() {
        let fake = Arc::new(FakeNarouClient::new(FakeNarouClientConfig::default()));
        let handler = SearchNovelsHandler::new(fake.clone());

        let doc = handler.handle(SearchNovels::new("", SortOrder::New)).await;
        assert!(doc.is_empty());
        assert_eq!(fake.count_calls(), 0);
        assert_eq!(fake.page_calls(), 0);
    }

    #[tokio::test]
    async fn test_count_failure_yields_error_document_for_any_order() {
        let fake = Arc::new(FakeNarouClient::new(FakeNarouClientConfig {
            fail_count: true,
            records: records(3),
            ..Default::default()
        }));
        let handler = SearchNovelsHandler::new(fake.clone());

        for order in [SortOrder::New, SortOrder::Old, SortOrder::Weekly] {
            let doc = handler.handle(SearchNovels::new("[x](y) 特殊", order)).await;
            assert_eq!(doc, Document::Message(ERROR_MESSAGE.to_string()));
        }
        // 总件数失败后不再请求结果页
        assert_eq!(fake.page_calls(), 0);
    }

    #[tokio::test]
    async fn test_page_failure_yields_header_only() {
        let fake = Arc::new(FakeNarouClient::new(FakeNarouClientConfig {
            total_count: 42,
            records: records(3),
            fail_page: true,
            ..Default::default()
        }));
        let handler = SearchNovelsHandler::new(fake);

        let doc = handler.handle(SearchNovels::new("剣", SortOrder::New)).await;
        assert_eq!(doc.section_count(), 0);
        assert!(doc.to_markdown().contains("剣の検索結果（全42件）"));
    }
}
