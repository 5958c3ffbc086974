//! Search Slot Port - 单槽检索任务登记
//!
//! 只保留「最新一次检索」的任务，具体实现在 infrastructure/memory 层

use tokio::task::AbortHandle;

/// 检索编号，单调递增
pub type SearchId = u64;

/// Search Slot Port
pub trait SearchSlotPort: Send + Sync {
    /// 开始新一轮检索：编号加一，并中止上一轮任务
    fn begin(&self) -> SearchId;

    /// 把任务句柄挂到编号上；编号已过期时立即中止该任务
    fn attach(&self, id: SearchId, handle: AbortHandle);

    /// 当前编号
    fn current(&self) -> SearchId;

    fn is_current(&self, id: SearchId) -> bool {
        self.current() == id
    }

    /// 任务结束后释放句柄（编号不变）
    fn release(&self, id: SearchId);

    /// 中止当前任务，返回是否确实中止了任务
    fn cancel_current(&self) -> bool;
}
