//! Search Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("キーワードが空です")]
    EmptyKeyword,

    #[error("不明な並べ順: {0}")]
    UnknownOrder(String),

    #[error("無効なページ指定: {0}")]
    InvalidPage(String),
}
