//! Search Controller - 检索任务调度
//!
//! 状态机: Idle → Searching → Displaying
//!
//! 任一时刻最多一个检索任务。新的提交会先中止旧任务；
//! 结果只有在编号仍为最新时才会被采用（最后提交者胜出）。

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::ports::{SearchId, SearchSlotPort};
use crate::application::{Document, SearchNovels, SearchNovelsHandler};
use crate::domain::search::SortOrder;

/// 检索任务发回的事件
#[derive(Debug, Clone)]
pub enum SearchEvent {
    Completed { id: SearchId, document: Document },
}

/// 控制器状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching {
        id: SearchId,
    },
    Displaying {
        id: SearchId,
        document: Document,
    },
}

/// 检索控制器
///
/// 由 UI 线程持有；检索本身在 tokio 任务中执行
pub struct SearchController {
    handler: Arc<SearchNovelsHandler>,
    slot: Arc<dyn SearchSlotPort>,
    event_tx: mpsc::UnboundedSender<SearchEvent>,
    event_rx: mpsc::UnboundedReceiver<SearchEvent>,
    state: SearchState,
}

impl SearchController {
    pub fn new(handler: Arc<SearchNovelsHandler>, slot: Arc<dyn SearchSlotPort>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            handler,
            slot,
            event_tx,
            event_rx,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, SearchState::Searching { .. })
    }

    /// 当前显示的文档
    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            SearchState::Displaying { document, .. } => Some(document),
            _ => None,
        }
    }

    /// 提交一次检索
    ///
    /// 必须在 tokio 运行时内调用。空关键词直接显示空文档，不发请求。
    pub fn submit(&mut self, keyword: &str, order: SortOrder) -> SearchId {
        let id = self.slot.begin();

        if keyword.trim().is_empty() {
            tracing::debug!(search_id = id, "Empty keyword, clearing results");
            self.state = SearchState::Displaying {
                id,
                document: Document::Empty,
            };
            return id;
        }

        tracing::info!(search_id = id, keyword = %keyword, order = %order, "Search submitted");

        let handler = self.handler.clone();
        let slot = self.slot.clone();
        let event_tx = self.event_tx.clone();
        let query = SearchNovels::new(keyword, order);

        let task = tokio::spawn(async move {
            let document = handler.handle(query).await;

            if slot.is_current(id) {
                let _ = event_tx.send(SearchEvent::Completed { id, document });
            } else {
                tracing::debug!(search_id = id, "Search superseded, dropping result");
            }
            slot.release(id);
        });
        self.slot.attach(id, task.abort_handle());

        self.state = SearchState::Searching { id };
        id
    }

    /// 处理所有已到达的事件（非阻塞），返回状态是否改变
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// 等待当前检索结束并返回文档
    ///
    /// Idle 状态下返回 `None`
    pub async fn wait(&mut self) -> Option<&Document> {
        while self.is_searching() {
            match self.event_rx.recv().await {
                Some(event) => {
                    self.apply(event);
                }
                None => break,
            }
        }
        self.document()
    }

    /// 中止正在进行的检索，回到 Idle
    pub fn cancel(&mut self) {
        if self.slot.cancel_current() {
            tracing::info!("Search cancelled");
        }
        if self.is_searching() {
            self.state = SearchState::Idle;
        }
    }

    fn apply(&mut self, event: SearchEvent) -> bool {
        match event {
            SearchEvent::Completed { id, document } => {
                let expected = matches!(self.state, SearchState::Searching { id: current } if current == id);
                if !expected || !self.slot.is_current(id) {
                    tracing::debug!(search_id = id, "Stale search result ignored");
                    return false;
                }

                tracing::debug!(
                    search_id = id,
                    sections = document.section_count(),
                    "Search result displayed"
                );
                self.state = SearchState::Displaying { id, document };
                true
            }
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.slot.cancel_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ERROR_MESSAGE;
    use crate::domain::search::NovelRecord;
    use crate::infrastructure::adapters::{FakeNarouClient, FakeNarouClientConfig};
    use crate::infrastructure::memory::InMemorySearchSlot;
    use std::time::Duration;

    fn controller(config: FakeNarouClientConfig) -> (SearchController, Arc<FakeNarouClient>) {
        let fake = Arc::new(FakeNarouClient::new(config));
        let handler = Arc::new(SearchNovelsHandler::new(fake.clone()));
        let slot = Arc::new(InMemorySearchSlot::new());
        (SearchController::new(handler, slot), fake)
    }

    fn header(document: &Document) -> String {
        match document {
            Document::Results(results) => results.header(),
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_keyword_displays_empty_document() {
        let (mut controller, fake) = controller(FakeNarouClientConfig::default());

        controller.submit("   ", SortOrder::New);
        assert!(matches!(
            controller.state(),
            SearchState::Displaying { document: Document::Empty, .. }
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(fake.count_calls(), 0);
        assert_eq!(fake.page_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_moves_to_displaying() {
        let records = vec![NovelRecord::default(), NovelRecord::default()];
        let (mut controller, _) = controller(FakeNarouClientConfig {
            total_count: 2,
            records,
            ..Default::default()
        });

        assert_eq!(controller.state(), &SearchState::Idle);
        let id = controller.submit("冒険", SortOrder::New);
        assert_eq!(controller.state(), &SearchState::Searching { id });

        let document = controller.wait().await.unwrap();
        assert_eq!(document.section_count(), 2);
    }

    #[tokio::test]
    async fn test_count_failure_ends_with_error_document() {
        let (mut controller, _) = controller(FakeNarouClientConfig {
            fail_count: true,
            ..Default::default()
        });

        controller.submit("冒険", SortOrder::Hyoka);
        let document = controller.wait().await.unwrap();
        assert_eq!(document, &Document::Message(ERROR_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_latest_submission_wins() {
        let config = FakeNarouClientConfig::default()
            .with_delay_for("A", Duration::from_millis(200))
            .with_delay_for("B", Duration::from_millis(10));
        let (mut controller, _) = controller(config);

        controller.submit("A", SortOrder::New);
        controller.submit("B", SortOrder::New);

        let document = controller.wait().await.unwrap().clone();
        assert_eq!(header(&document), "Bの検索結果（全0件）");

        // A 即使晚到也不能覆盖
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!controller.poll());
        assert_eq!(controller.document(), Some(&document));
    }

    #[tokio::test]
    async fn test_stale_event_is_ignored() {
        let (mut controller, _) = controller(FakeNarouClientConfig {
            delay: Duration::from_millis(100),
            ..Default::default()
        });

        let old = controller.submit("A", SortOrder::New);
        controller.submit("B", SortOrder::New);

        // 模拟取消与完成重叠时旧任务送达的结果
        controller
            .event_tx
            .send(SearchEvent::Completed {
                id: old,
                document: Document::Message("stale".to_string()),
            })
            .unwrap();
        assert!(!controller.poll());
        assert!(controller.is_searching());

        let document = controller.wait().await.unwrap();
        assert_eq!(header(document), "Bの検索結果（全0件）");
    }

    #[tokio::test]
    async fn test_empty_keyword_cancels_running_search() {
        let (mut controller, _) = controller(FakeNarouClientConfig {
            delay: Duration::from_millis(50),
            total_count: 9,
            ..Default::default()
        });

        controller.submit("A", SortOrder::New);
        controller.submit("", SortOrder::New);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!controller.poll());
        assert_eq!(controller.document(), Some(&Document::Empty));
    }

    #[tokio::test]
    async fn test_cancel_returns_to_idle() {
        let (mut controller, _) = controller(FakeNarouClientConfig {
            delay: Duration::from_millis(50),
            ..Default::default()
        });

        controller.submit("A", SortOrder::New);
        controller.cancel();
        assert_eq!(controller.state(), &SearchState::Idle);
        assert!(controller.wait().await.is_none());
    }
}
