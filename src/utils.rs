use unicode_width::UnicodeWidthChar;

/// Truncate `s` to at most `max_width` terminal columns, appending "..."
/// when anything was cut. Width-aware so CJK and other wide glyphs do not
/// overflow the summary rows.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);
        if used + char_width > budget {
            break;
        }
        out.push(c);
        used += char_width;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_no_truncation() {
        assert_eq!(truncate_to_width("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_with_truncation() {
        let result = truncate_to_width("This is a very long string that should be cut", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.chars().count() <= 20);
    }

    #[test]
    fn test_truncate_exact_width() {
        assert_eq!(truncate_to_width("Exactly twenty!!", 20), "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_to_width("", 20), "");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each ideograph is two columns wide.
        let result = truncate_to_width("日本語のテキストです", 10);
        assert_eq!(result, "日本語...");
    }

    #[test]
    fn test_truncate_wide_characters_fit() {
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
    }

    #[test]
    fn test_truncate_tiny_budget() {
        assert_eq!(truncate_to_width("hello world", 3), "...");
    }
}
