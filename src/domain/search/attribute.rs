//! Search Context - 出力属性
//!
//! API 字段名到 `of` 参数短代码的静态映射

/// API 可输出的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Title,
    Ncode,
    UserId,
    Writer,
    Story,
    BigGenre,
    Genre,
    Keyword,
    GeneralFirstup,
    GeneralLastup,
    NovelType,
    End,
    GeneralAllNo,
    Length,
    Time,
    IsStop,
    IsR15,
    IsBl,
    IsGl,
    IsZankoku,
    IsTensei,
    IsTenni,
    PcOrK,
    GlobalPoint,
    DailyPoint,
    WeeklyPoint,
    MonthlyPoint,
    QuarterPoint,
    YearlyPoint,
    FavNovelCnt,
    ImpressionCnt,
    ReviewCnt,
    AllPoint,
    AllHyokaCnt,
    SasieCnt,
    Kaiwaritu,
    NovelUpdatedAt,
    UpdatedAt,
}

/// 结果文档需要的字段
pub const DISPLAY_ATTRIBUTES: [Attribute; 6] = [
    Attribute::Title,
    Attribute::Writer,
    Attribute::Story,
    Attribute::Genre,
    Attribute::Ncode,
    Attribute::Length,
];

impl Attribute {
    /// 响应 JSON 中的字段名
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Title => "title",
            Attribute::Ncode => "ncode",
            Attribute::UserId => "userid",
            Attribute::Writer => "writer",
            Attribute::Story => "story",
            Attribute::BigGenre => "biggenre",
            Attribute::Genre => "genre",
            Attribute::Keyword => "keyword",
            Attribute::GeneralFirstup => "general_firstup",
            Attribute::GeneralLastup => "general_lastup",
            Attribute::NovelType => "noveltype",
            Attribute::End => "end",
            Attribute::GeneralAllNo => "general_all_no",
            Attribute::Length => "length",
            Attribute::Time => "time",
            Attribute::IsStop => "isstop",
            Attribute::IsR15 => "isr15",
            Attribute::IsBl => "isbl",
            Attribute::IsGl => "isgl",
            Attribute::IsZankoku => "iszankoku",
            Attribute::IsTensei => "istensei",
            Attribute::IsTenni => "istenni",
            Attribute::PcOrK => "pc_or_k",
            Attribute::GlobalPoint => "global_point",
            Attribute::DailyPoint => "daily_point",
            Attribute::WeeklyPoint => "weekly_point",
            Attribute::MonthlyPoint => "monthly_point",
            Attribute::QuarterPoint => "quarter_point",
            Attribute::YearlyPoint => "yearly_point",
            Attribute::FavNovelCnt => "fav_novel_cnt",
            Attribute::ImpressionCnt => "impression_cnt",
            Attribute::ReviewCnt => "review_cnt",
            Attribute::AllPoint => "all_point",
            Attribute::AllHyokaCnt => "all_hyoka_cnt",
            Attribute::SasieCnt => "sasie_cnt",
            Attribute::Kaiwaritu => "kaiwaritu",
            Attribute::NovelUpdatedAt => "novelupdated_at",
            Attribute::UpdatedAt => "updated_at",
        }
    }

    /// `of` 参数使用的短代码
    pub fn code(&self) -> &'static str {
        match self {
            Attribute::Title => "t",
            Attribute::Ncode => "n",
            Attribute::UserId => "u",
            Attribute::Writer => "w",
            Attribute::Story => "s",
            Attribute::BigGenre => "bg",
            Attribute::Genre => "g",
            Attribute::Keyword => "k",
            Attribute::GeneralFirstup => "gf",
            Attribute::GeneralLastup => "gl",
            Attribute::NovelType => "nt",
            Attribute::End => "e",
            Attribute::GeneralAllNo => "ga",
            Attribute::Length => "l",
            Attribute::Time => "ti",
            Attribute::IsStop => "i",
            Attribute::IsR15 => "ir",
            Attribute::IsBl => "ibl",
            Attribute::IsGl => "igl",
            Attribute::IsZankoku => "izk",
            Attribute::IsTensei => "its",
            Attribute::IsTenni => "iti",
            Attribute::PcOrK => "p",
            Attribute::GlobalPoint => "gp",
            Attribute::DailyPoint => "dp",
            Attribute::WeeklyPoint => "wp",
            Attribute::MonthlyPoint => "mp",
            Attribute::QuarterPoint => "qp",
            Attribute::YearlyPoint => "yp",
            Attribute::FavNovelCnt => "f",
            Attribute::ImpressionCnt => "imp",
            Attribute::ReviewCnt => "r",
            Attribute::AllPoint => "a",
            Attribute::AllHyokaCnt => "ah",
            Attribute::SasieCnt => "sa",
            Attribute::Kaiwaritu => "ka",
            Attribute::NovelUpdatedAt => "nu",
            Attribute::UpdatedAt => "ua",
        }
    }
}

/// 拼接 `of` 参数，如 `t-w-s-g-n-l`
pub fn output_fields(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(|a| a.code())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_attributes_of_param() {
        assert_eq!(output_fields(&DISPLAY_ATTRIBUTES), "t-w-s-g-n-l");
    }

    #[test]
    fn test_multi_letter_codes() {
        assert_eq!(Attribute::FavNovelCnt.code(), "f");
        assert_eq!(Attribute::IsZankoku.code(), "izk");
        assert_eq!(Attribute::NovelUpdatedAt.name(), "novelupdated_at");
    }

    #[test]
    fn test_empty_attribute_list() {
        assert_eq!(output_fields(&[]), "");
    }
}
