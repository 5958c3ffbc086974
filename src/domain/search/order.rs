//! Search Context - 排序方式
//!
//! API 支持的 18 种固定排序，(标签, 代码) 一一对应

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::SearchError;

/// 排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    New,
    FavNovelCnt,
    ReviewCnt,
    Hyoka,
    HyokaAsc,
    DailyPoint,
    WeeklyPoint,
    MonthlyPoint,
    QuarterPoint,
    YearlyPoint,
    ImpressionCnt,
    HyokaCnt,
    HyokaCntAsc,
    Weekly,
    LengthDesc,
    LengthAsc,
    NcodeDesc,
    Old,
}

impl SortOrder {
    /// 选择器中的显示顺序
    pub const ALL: [SortOrder; 18] = [
        SortOrder::New,
        SortOrder::FavNovelCnt,
        SortOrder::ReviewCnt,
        SortOrder::Hyoka,
        SortOrder::HyokaAsc,
        SortOrder::DailyPoint,
        SortOrder::WeeklyPoint,
        SortOrder::MonthlyPoint,
        SortOrder::QuarterPoint,
        SortOrder::YearlyPoint,
        SortOrder::ImpressionCnt,
        SortOrder::HyokaCnt,
        SortOrder::HyokaCntAsc,
        SortOrder::Weekly,
        SortOrder::LengthDesc,
        SortOrder::LengthAsc,
        SortOrder::NcodeDesc,
        SortOrder::Old,
    ];

    /// `order` 查询参数的值
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::New => "new",
            SortOrder::FavNovelCnt => "favnovelcnt",
            SortOrder::ReviewCnt => "reviewcnt",
            SortOrder::Hyoka => "hyoka",
            SortOrder::HyokaAsc => "hyokaasc",
            SortOrder::DailyPoint => "dailypoint",
            SortOrder::WeeklyPoint => "weeklypoint",
            SortOrder::MonthlyPoint => "monthlypoint",
            SortOrder::QuarterPoint => "quarterpoint",
            SortOrder::YearlyPoint => "yearlypoint",
            SortOrder::ImpressionCnt => "impressioncnt",
            SortOrder::HyokaCnt => "hyokacnt",
            SortOrder::HyokaCntAsc => "hyokacntasc",
            SortOrder::Weekly => "weekly",
            SortOrder::LengthDesc => "lengthdesc",
            SortOrder::LengthAsc => "lengthasc",
            SortOrder::NcodeDesc => "ncodedesc",
            SortOrder::Old => "old",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::New => "新着更新順",
            SortOrder::FavNovelCnt => "ブックマーク数の多い順",
            SortOrder::ReviewCnt => "レビュー数の多い順",
            SortOrder::Hyoka => "総合ポイントの高い順",
            SortOrder::HyokaAsc => "総合ポイントの低い順",
            SortOrder::DailyPoint => "日間ポイントの高い順",
            SortOrder::WeeklyPoint => "週間ポイントの高い順",
            SortOrder::MonthlyPoint => "月間ポイントの高い順",
            SortOrder::QuarterPoint => "四半期ポイントの高い順",
            SortOrder::YearlyPoint => "年間ポイントの高い順",
            SortOrder::ImpressionCnt => "感想の多い順",
            SortOrder::HyokaCnt => "評価者数の多い順",
            SortOrder::HyokaCntAsc => "評価者数の少ない順",
            SortOrder::Weekly => "週間ユニークユーザの多い順",
            SortOrder::LengthDesc => "作品本文の文字数が多い順",
            SortOrder::LengthAsc => "作品本文の文字数が少ない順",
            SortOrder::NcodeDesc => "新着投稿順",
            SortOrder::Old => "更新が古い順",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.code() == code)
    }

    /// 在 ALL 中的位置
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|o| o == self).unwrap_or(0)
    }

    /// 循环切换到下一个排序
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 循环切换到上一个排序
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl FromStr for SortOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| SearchError::UnknownOrder(s.to_string()))
    }
}

impl TryFrom<String> for SortOrder {
    type Error = SearchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.code().to_string()
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_and_labels_are_unique() {
        let codes: HashSet<_> = SortOrder::ALL.iter().map(|o| o.code()).collect();
        let labels: HashSet<_> = SortOrder::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(codes.len(), 18);
        assert_eq!(labels.len(), 18);
    }

    #[test]
    fn test_from_code_round_trips_every_order() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_code(order.code()), Some(order));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!("popular".parse::<SortOrder>().is_err());
        assert!(SortOrder::from_code("新着更新順").is_none());
    }

    #[test]
    fn test_next_and_prev_wrap_around() {
        assert_eq!(SortOrder::Old.next(), SortOrder::New);
        assert_eq!(SortOrder::New.prev(), SortOrder::Old);
        assert_eq!(SortOrder::New.next(), SortOrder::FavNovelCnt);
    }

    #[test]
    fn test_deserialize_from_code() {
        let order: SortOrder = serde_json::from_str("\"favnovelcnt\"").unwrap();
        assert_eq!(order, SortOrder::FavNovelCnt);
        assert!(serde_json::from_str::<SortOrder>("\"nope\"").is_err());
    }
}
