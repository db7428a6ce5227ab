//! Text helpers

/// Collapse runs of whitespace to a single space and trim both ends.
/// The ASCII file, group, record and unit separators count as whitespace.
pub fn normalize_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in value.split(is_space).filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_inner_runs() {
        assert_eq!(normalize_whitespace("  Example \t\n  Site "), "Example Site");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["a  b", "  lead", "trail  ", "x\u{3000}y", "中文   标题", "single"];
        for sample in samples {
            let once = normalize_whitespace(sample);
            assert_eq!(normalize_whitespace(&once), once, "input {sample:?}");
        }
    }

    #[test]
    fn test_separator_controls_are_whitespace() {
        assert_eq!(normalize_whitespace("a\u{1f}b\u{1c}\u{1d} c\u{1e}"), "a b c");
    }

    #[test]
    fn test_keeps_non_ascii() {
        assert_eq!(normalize_whitespace(" Café  Crème "), "Café Crème");
    }
}
