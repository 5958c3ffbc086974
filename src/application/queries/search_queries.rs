//! Search Queries

use crate::domain::search::SortOrder;

/// 小説検索查询
///
/// `keyword` 保持用户原始输入，可能为空
#[derive(Debug, Clone)]
pub struct SearchNovels {
    pub keyword: String,
    pub order: SortOrder,
}

impl SearchNovels {
    pub fn new(keyword: impl Into<String>, order: SortOrder) -> Self {
        Self {
            keyword: keyword.into(),
            order,
        }
    }
}
