//! Search Context - Entities

use serde::{Deserialize, Serialize};

/// ジャンル
///
/// API 返回数字代码；兼容直接给出字符串的情况
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Genre {
    Code(u32),
    Name(String),
}

impl Genre {
    /// 已知代码对应的名称
    pub fn label(&self) -> Option<&str> {
        match self {
            Genre::Code(code) => genre_label(*code),
            Genre::Name(name) => Some(name.as_str()),
        }
    }
}

impl Default for Genre {
    fn default() -> Self {
        Genre::Name(String::new())
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Code(code) => match genre_label(*code) {
                Some(label) => write!(f, "{}({})", label, code),
                None => write!(f, "{}", code),
            },
            Genre::Name(name) => write!(f, "{}", name),
        }
    }
}

fn genre_label(code: u32) -> Option<&'static str> {
    let label = match code {
        101 => "異世界〔恋愛〕",
        102 => "現実世界〔恋愛〕",
        201 => "ハイファンタジー〔ファンタジー〕",
        202 => "ローファンタジー〔ファンタジー〕",
        301 => "純文学〔文芸〕",
        302 => "ヒューマンドラマ〔文芸〕",
        303 => "歴史〔文芸〕",
        304 => "推理〔文芸〕",
        305 => "ホラー〔文芸〕",
        306 => "アクション〔文芸〕",
        307 => "コメディー〔文芸〕",
        401 => "VRゲーム〔SF〕",
        402 => "宇宙〔SF〕",
        403 => "空想科学〔SF〕",
        404 => "パニック〔SF〕",
        9901 => "童話〔その他〕",
        9902 => "詩〔その他〕",
        9903 => "エッセイ〔その他〕",
        9904 => "リプレイ〔その他〕",
        9999 => "その他〔その他〕",
        9801 => "ノンジャンル〔ノンジャンル〕",
        _ => return None,
    };
    Some(label)
}

/// 检索结果中的一部小说
///
/// 只由 API 适配器生成，下游只读
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NovelRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub writer: String,
    /// あらすじ，可能含有 `[text](url)` 形式的链接
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub genre: Genre,
    /// 作品唯一标识（Nコード）
    #[serde(default)]
    pub ncode: String,
    /// 本文字数
    #[serde(default)]
    pub length: u64,
}

impl NovelRecord {
    /// 作品页面 URL
    pub fn url(&self) -> String {
        format!("https://ncode.syosetu.com/{}/", self.ncode)
    }
}

/// 一次检索的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub total_count: u64,
    pub records: Vec<NovelRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_api_json() {
        let json = r#"{"title":"t","ncode":"N1234AB","writer":"w","story":"s","genre":201,"length":12345}"#;
        let record: NovelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.genre, Genre::Code(201));
        assert_eq!(record.length, 12345);
        assert_eq!(record.url(), "https://ncode.syosetu.com/N1234AB/");
    }

    #[test]
    fn test_missing_fields_default() {
        let record: NovelRecord = serde_json::from_str(r#"{"title":"only"}"#).unwrap();
        assert_eq!(record.title, "only");
        assert_eq!(record.length, 0);
        assert_eq!(record.genre, Genre::default());
    }

    #[test]
    fn test_genre_display() {
        assert_eq!(Genre::Code(101).to_string(), "異世界〔恋愛〕(101)");
        assert_eq!(Genre::Code(12).to_string(), "12");
        assert_eq!(Genre::Name("詩".to_string()).to_string(), "詩");
    }
}
