//! Crawl Text Utilities

/// Paragraph separator used by the data source
const PARAGRAPH_BREAK: &str = "\r\n\r\n";
const LINE_BREAK: &str = "\r\n";

/// Remove forced line breaks from crawl text.
///
/// `\r\n\r\n` separates paragraphs and is kept; any other `\r\n` is a
/// hard wrap from the source and becomes a single space.
pub fn normalize_text(raw: &str) -> String {
    if !raw.contains(LINE_BREAK) {
        return raw.to_string();
    }

    raw.split(PARAGRAPH_BREAK)
        .map(|paragraph| paragraph.replace(LINE_BREAK, " "))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_breaks_become_spaces() {
        let raw = "It is a period of civil war.\r\nRebel spaceships, striking\r\nfrom a hidden base";
        assert_eq!(
            normalize_text(raw),
            "It is a period of civil war. Rebel spaceships, striking from a hidden base"
        );
    }

    #[test]
    fn test_paragraphs_are_preserved() {
        assert_eq!(normalize_text("A\r\n\r\nB\r\nC"), "A\r\n\r\nB C");
    }

    #[test]
    fn test_no_breaks_unchanged() {
        assert_eq!(normalize_text("Episode IV"), "Episode IV");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_only_separators_unchanged() {
        assert_eq!(normalize_text("\r\n\r\n"), "\r\n\r\n");
        assert_eq!(normalize_text("\r\n\r\n\r\n\r\n"), "\r\n\r\n\r\n\r\n");
    }

    #[test]
    fn test_odd_run_leaves_trailing_space() {
        // Three breaks: first pair is a paragraph, the leftover one collapses.
        assert_eq!(normalize_text("A\r\n\r\n\r\nB"), "A\r\n\r\n B");
    }

    #[test]
    fn test_bare_newlines_are_not_line_breaks() {
        assert_eq!(normalize_text("A\nB"), "A\nB");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "A\r\n\r\nB\r\nC",
            "one\r\ntwo\r\nthree",
            "p1 line\r\nwrap\r\n\r\np2\r\n\r\np3",
        ];
        for raw in inputs {
            let once = normalize_text(raw);
            assert_eq!(normalize_text(&once), once, "input: {:?}", raw);
        }
    }
}
