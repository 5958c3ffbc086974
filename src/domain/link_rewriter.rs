//! 链接改写
//!
//! あらすじ中的 `[text](url)` 改写成 `text (url)`，保留文字和地址

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// 改写所有 markdown 形式的链接
///
/// 两个捕获组都是非贪婪的；没有链接时原样返回（不分配）
pub fn rewrite_links(text: &str) -> Cow<'_, str> {
    MARKDOWN_LINK.replace_all(text, "${1} (${2})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_link() {
        assert_eq!(rewrite_links("[見る](http://x/y) 続き"), "見る (http://x/y) 続き");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "勇者は (本当に) [注意] 旅立った。";
        let rewritten = rewrite_links(text);
        assert!(matches!(rewritten, Cow::Borrowed(_)));
        assert_eq!(rewritten, text);
    }

    #[test]
    fn test_repeated_links_are_non_greedy() {
        let text = "[a](http://1) と [b](http://2)";
        assert_eq!(rewrite_links(text), "a (http://1) と b (http://2)");
    }

    #[test]
    fn test_empty_groups() {
        assert_eq!(rewrite_links("[]()"), " ()");
    }

    #[test]
    fn test_link_does_not_span_lines() {
        let text = "[a\n](http://1)";
        assert_eq!(rewrite_links(text), text);
    }
}
