//! Search Context - Value Objects

use serde::{Deserialize, Serialize};

use super::{SearchError, SortOrder};

/// 每页条数上限（API 仅取第一页）
pub const PAGE_SIZE: u32 = 30;

/// 检索关键词
///
/// 不变量: 去掉首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(keyword: impl Into<String>) -> Result<Self, SearchError> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(SearchError::EmptyKeyword);
        }
        Ok(Self(keyword))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一次检索请求，构造后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: Keyword,
    order: SortOrder,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, order: SortOrder) -> Result<Self, SearchError> {
        Ok(Self {
            keyword: Keyword::new(keyword)?,
            order,
        })
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// 分页参数（页号从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Result<Self, SearchError> {
        if number == 0 {
            return Err(SearchError::InvalidPage("page number starts at 1".to_string()));
        }
        if size == 0 || size > PAGE_SIZE {
            return Err(SearchError::InvalidPage(format!(
                "page size must be within 1..={}",
                PAGE_SIZE
            )));
        }
        Ok(Self { number, size })
    }

    /// 第一页，固定 30 条
    pub fn first() -> Self {
        Self {
            number: 1,
            size: PAGE_SIZE,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// API 的 `st` 参数，1 起始
    pub fn start_offset(&self) -> u32 {
        (self.number - 1) * self.size + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}
