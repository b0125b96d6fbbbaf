//! Helpers for the HTML list markup used in the `appeal` field.

use regex::Regex;
use std::sync::LazyLock;

static LIST_CONTAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:ul|ol)\b[^>]*>").expect("valid list regex"));

static ITEM_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("valid item regex"));

static ITEM_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</li\s*>").expect("valid item close regex"));

/// Bullet glyph used for plain-text list items.
pub const BULLET: &str = "\u{2022}";

/// Removes wrapping `<ul>`/`<ol>` tags, leaving the `<li>` items untouched.
pub fn strip_list_wrapper(appeal: &str) -> String {
    LIST_CONTAINER.replace_all(appeal, "").trim().to_string()
}

/// Number of `<li>` items in `appeal`.
pub fn count_list_items(appeal: &str) -> usize {
    ITEM_OPEN.find_iter(appeal).count()
}

/// Renders list items as plain-text bullet lines.
///
/// Every `<li>` starts a line with [`BULLET`] and every `</li>` ends one, so
/// unclosed items and text between items are kept. Lines are trimmed and
/// blank lines dropped. No list markup survives.
pub fn appeal_to_plain_text(appeal: &str) -> String {
    let text = LIST_CONTAINER.replace_all(appeal, "\n");
    let text = ITEM_OPEN.replace_all(&text, format!("\n{BULLET} "));
    let text = ITEM_CLOSE.replace_all(&text, "\n");

    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            match line.strip_prefix(BULLET) {
                Some(item) => {
                    let item = item.trim();
                    (!item.is_empty()).then(|| format!("{BULLET} {item}"))
                }
                None => (!line.is_empty()).then(|| line.to_string()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_list_wrapper() {
        let appeal = "<ul>\n<li>A</li>\n<li>B</li>\n</ul>";
        assert_eq!(strip_list_wrapper(appeal), "<li>A</li>\n<li>B</li>");
    }

    #[test]
    fn test_strip_list_wrapper_with_attributes() {
        let appeal = r#"<UL class="reasons"><li>A</li></UL>"#;
        assert_eq!(strip_list_wrapper(appeal), "<li>A</li>");
    }

    #[test]
    fn test_strip_list_wrapper_leaves_items_alone() {
        let appeal = "<li>A</li><li>B</li>";
        assert_eq!(strip_list_wrapper(appeal), appeal);
    }

    #[test]
    fn test_appeal_to_plain_text() {
        let text = appeal_to_plain_text("<li>A</li><li>B</li>");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "\u{2022} A");
        assert_eq!(lines[1], "\u{2022} B");
        assert!(!text.contains("<li>"));
        assert!(!text.contains("</li>"));
    }

    #[test]
    fn test_appeal_to_plain_text_trims_items() {
        let text = appeal_to_plain_text("<li>  Great team \n</li>\n\n<li>\tFast growth</li>\n");
        assert_eq!(text, "\u{2022} Great team\n\u{2022} Fast growth");
    }

    #[test]
    fn test_appeal_to_plain_text_keeps_unclosed_last_item() {
        assert_eq!(
            appeal_to_plain_text("<li>A</li><li>B"),
            "\u{2022} A\n\u{2022} B"
        );
    }

    #[test]
    fn test_appeal_to_plain_text_splits_missing_close_tag() {
        let text = appeal_to_plain_text("<li>A<li>B</li>");

        assert_eq!(text, "\u{2022} A\n\u{2022} B");
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_appeal_to_plain_text_keeps_text_outside_items() {
        assert_eq!(
            appeal_to_plain_text("Intro <li>A</li>"),
            "Intro\n\u{2022} A"
        );
    }

    #[test]
    fn test_appeal_to_plain_text_drops_wrapper_and_empty_items() {
        let text = appeal_to_plain_text("<ul><li class=\"x\">A</LI><li> </li></ul>");
        assert_eq!(text, "\u{2022} A");
    }

    #[test]
    fn test_appeal_to_plain_text_without_items() {
        assert_eq!(appeal_to_plain_text("  just text  "), "just text");
    }

    #[test]
    fn test_count_list_items() {
        let appeal = "<li>1</li><li>2</li><li>3</li><li>4</li><li>5</li>";
        assert_eq!(count_list_items(appeal), 5);
        assert_eq!(count_list_items("no items"), 0);
    }
}
