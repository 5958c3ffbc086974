//! In-Memory Search Slot Implementation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tokio::task::AbortHandle;

use crate::application::ports::{SearchId, SearchSlotPort};

/// 内存单槽登记
///
/// 编号的递增与句柄的挂载都在同一把锁内完成
pub struct InMemorySearchSlot {
    /// 最新编号（0 表示尚未检索）
    current: AtomicU64,
    /// 正在运行的任务
    running: Mutex<Option<(SearchId, AbortHandle)>>,
}

impl InMemorySearchSlot {
    pub fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
            running: Mutex::new(None),
        }
    }

    fn running(&self) -> MutexGuard<'_, Option<(SearchId, AbortHandle)>> {
        self.running.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemorySearchSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSlotPort for InMemorySearchSlot {
    fn begin(&self) -> SearchId {
        let mut running = self.running();
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some((old_id, handle)) = running.take() {
            handle.abort();
            tracing::debug!(search_id = old_id, superseded_by = id, "Search task aborted");
        }
        id
    }

    fn attach(&self, id: SearchId, handle: AbortHandle) {
        let mut running = self.running();
        if self.current.load(Ordering::SeqCst) != id {
            handle.abort();
            tracing::debug!(search_id = id, "Stale search task aborted on attach");
            return;
        }
        // 任务可能在挂载前就已结束并 release
        if handle.is_finished() {
            return;
        }
        *running = Some((id, handle));
    }

    fn current(&self) -> SearchId {
        self.current.load(Ordering::SeqCst)
    }

    fn release(&self, id: SearchId) {
        let mut running = self.running();
        if matches!(running.as_ref(), Some((running_id, _)) if *running_id == id) {
            running.take();
        }
    }

    fn cancel_current(&self) -> bool {
        match self.running().take() {
            Some((id, handle)) => {
                handle.abort();
                tracing::debug!(search_id = id, "Search task cancelled");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;

    #[test]
    fn test_ids_increase() {
        let slot = InMemorySearchSlot::new();
        assert_eq!(slot.current(), 0);
        assert_eq!(slot.begin(), 1);
        assert_eq!(slot.begin(), 2);
        assert!(slot.is_current(2));
        assert!(!slot.is_current(1));
    }

    #[tokio::test]
    async fn test_begin_aborts_previous_task() {
        let slot = InMemorySearchSlot::new();
        let first = slot.begin();
        let task = tokio::spawn(pending::<()>());
        slot.attach(first, task.abort_handle());

        slot.begin();
        let err = task.await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_attach_stale_id_aborts_immediately() {
        let slot = InMemorySearchSlot::new();
        let stale = slot.begin();
        slot.begin();

        let task = tokio::spawn(pending::<()>());
        slot.attach(stale, task.abort_handle());
        assert!(task.await.unwrap_err().is_cancelled());
        assert!(!slot.cancel_current());
    }

    #[tokio::test]
    async fn test_release_keeps_newer_task() {
        let slot = InMemorySearchSlot::new();
        let id = slot.begin();
        let task = tokio::spawn(pending::<()>());
        slot.attach(id, task.abort_handle());

        // 旧编号的释放不影响当前任务
        slot.release(id - 1);
        assert!(slot.cancel_current());
        assert!(task.await.unwrap_err().is_cancelled());
    }
}
