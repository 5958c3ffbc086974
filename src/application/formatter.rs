//! Result Formatter - 检索结果排版
//!
//! 把 API 记录转换成显示层使用的 `Document`。
//! 同一个 `Document` 既可输出为 markdown 文本（CLI），也可由 TUI 转成带样式的行。

use crate::domain::rewrite_links;
use crate::domain::search::{NovelRecord, SearchQuery};

/// 总件数查询失败时显示的固定消息
pub const ERROR_MESSAGE: &str = "エラーが発生しました。やり直してください。";

/// 区块分隔线
pub const RULE: &str = "---";

/// 一部小说的显示块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelSection {
    pub title: String,
    pub writer: String,
    pub ncode: String,
    pub url: String,
    /// 链接已改写的あらすじ
    pub story: String,
    pub genre: String,
    pub length: u64,
}

impl NovelSection {
    fn from_record(record: &NovelRecord) -> Self {
        Self {
            title: record.title.clone(),
            writer: record.writer.clone(),
            ncode: record.ncode.clone(),
            url: record.url(),
            story: rewrite_links(&record.story).into_owned(),
            genre: record.genre.to_string(),
            length: record.length,
        }
    }

    /// 可点击的作品标识，如 `N1234AB(https://ncode.syosetu.com/N1234AB/)`
    pub fn link(&self) -> String {
        format!("{}({})", self.ncode, self.url)
    }

    pub fn trailer(&self) -> String {
        format!("ジャンル：{} 文章量：{}字", self.genre, self.length)
    }
}

/// 检索结果文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsDocument {
    pub keyword: String,
    pub total_count: u64,
    pub sections: Vec<NovelSection>,
}

impl ResultsDocument {
    pub fn header(&self) -> String {
        format!("{}の検索結果（全{}件）", self.keyword, self.total_count)
    }
}

/// 交给显示层的最终输出
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Document {
    #[default]
    Empty,
    /// 单条面向用户的消息（非结构化）
    Message(String),
    Results(ResultsDocument),
}

impl Document {
    pub fn error() -> Self {
        Document::Message(ERROR_MESSAGE.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Document::Empty)
    }

    pub fn section_count(&self) -> usize {
        match self {
            Document::Results(results) => results.sections.len(),
            _ => 0,
        }
    }

    /// markdown 文本形式
    pub fn to_markdown(&self) -> String {
        match self {
            Document::Empty => String::new(),
            Document::Message(message) => message.clone(),
            Document::Results(results) => {
                // 标题下方固定两条分隔线，之后每部作品以一条分隔线结尾
                let mut lines = vec![
                    RULE.to_string(),
                    results.header(),
                    RULE.to_string(),
                    RULE.to_string(),
                ];
                for section in &results.sections {
                    lines.push(format!("# {}\n", section.title));
                    lines.push(format!("###### {}\n", section.writer));
                    lines.push(format!("###### {}\n", section.link()));
                    lines.push(format!("##### {}", section.story));
                    lines.push(format!("\n###### {}", section.trailer()));
                    lines.push(RULE.to_string());
                }
                lines.join("\n")
            }
        }
    }
}

/// ResultFormatter
pub struct ResultFormatter;

impl ResultFormatter {
    /// 渲染检索结果
    ///
    /// `count` 为 `None` 表示总件数查询失败，只返回固定错误消息
    pub fn render(query: &SearchQuery, count: Option<u64>, records: &[NovelRecord]) -> Document {
        let Some(total_count) = count else {
            return Document::error();
        };

        Document::Results(ResultsDocument {
            keyword: query.keyword().to_string(),
            total_count,
            sections: records.iter().map(NovelSection::from_record).collect(),
        })
    }
}
