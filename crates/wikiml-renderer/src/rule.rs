//! Horizontal rules.

use std::sync::LazyLock;

use regex::Regex;

static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^-{4,}[ \t]*$").unwrap());

/// Replace every line of four or more dashes with `<hr>`.
#[must_use]
pub fn transform_rules(text: &str) -> String {
    RULE.replace_all(text, "<hr>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lines() {
        assert_eq!(transform_rules("a\n----\nb"), "a\n<hr>\nb");
        assert_eq!(transform_rules("--------  "), "<hr>");
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(transform_rules("a\r\n----\r\nb"), "a\r\n<hr>\r\nb");
    }

    #[test]
    fn test_short_or_inline_dashes_kept() {
        assert_eq!(transform_rules("---"), "---");
        assert_eq!(transform_rules("a ----"), "a ----");
        assert_eq!(transform_rules("---- a"), "---- a");
    }
}
