//! Line Classifier: tags each line of generated resume text as heading, bullet, or paragraph.
//!
//! Both renderers consume the same classified sequence, so the formatting rules live here
//! and nowhere else. Classification looks at one line's leading characters only: no
//! lookahead, no state carried between lines.

use serde::{Deserialize, Serialize};

/// Structural role of a line in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Heading,
    Bullet,
    Paragraph,
}

/// A single line of resume text with its marker already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub content: String,
}

impl ClassifiedLine {
    pub fn heading(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Heading,
            content: content.into(),
        }
    }

    pub fn bullet(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Bullet,
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Paragraph,
            content: content.into(),
        }
    }
}

const HEADING_MARKER: char = '#';

/// Bullet markers. `*` only counts when followed by whitespace, otherwise `**Bold**`
/// lines would be swallowed as bullets.
const BULLET_MARKERS: &[char] = &['-', '•'];
const STAR_BULLET: char = '*';

/// Classifies raw text into one `ClassifiedLine` per input line.
///
/// Empty lines are kept as empty paragraphs; the renderers still give them vertical space.
/// The empty string yields exactly one empty paragraph.
pub fn classify(raw: &str) -> Vec<ClassifiedLine> {
    raw.split('\n').map(classify_line).collect()
}

/// Classifies a single line. Precedence: heading, then bullet, then paragraph.
pub fn classify_line(line: &str) -> ClassifiedLine {
    let trimmed = line.trim();

    if trimmed.starts_with(HEADING_MARKER) {
        return ClassifiedLine::heading(trimmed.trim_start_matches(HEADING_MARKER).trim());
    }

    if let Some(rest) = strip_bullet_marker(trimmed) {
        return ClassifiedLine::bullet(rest);
    }

    ClassifiedLine::paragraph(trimmed)
}

/// Returns the text after a bullet marker and one following separator, if `line` is a bullet.
fn strip_bullet_marker(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let marker = chars.next()?;
    let rest = chars.as_str();

    if BULLET_MARKERS.contains(&marker) {
        return Some(strip_one_separator(rest));
    }

    if marker == STAR_BULLET && rest.starts_with(char::is_whitespace) {
        return Some(strip_one_separator(rest));
    }

    None
}

fn strip_one_separator(s: &str) -> &str {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_heading_bullet_paragraph() {
        let lines = classify("### Summary\n- Did X\nPlain text");
        assert_eq!(
            lines,
            vec![
                ClassifiedLine::heading("Summary"),
                ClassifiedLine::bullet("Did X"),
                ClassifiedLine::paragraph("Plain text"),
            ]
        );
    }

    #[test]
    fn test_classify_empty_string_is_one_empty_paragraph() {
        assert_eq!(classify(""), vec![ClassifiedLine::paragraph("")]);
    }

    #[test]
    fn test_classify_preserves_line_count() {
        let inputs = [
            "",
            "\n",
            "a\nb\nc",
            "### A\n\n\n- b\n",
            "trailing newline\n",
            "\r\n\r\n",
        ];
        for input in inputs {
            assert_eq!(
                classify(input).len(),
                input.split('\n').count(),
                "line count mismatch for {input:?}"
            );
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let text = "### Experience\n  - Built things\n* Shipped\n**Bold line**\n\nDone";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_empty_lines_become_empty_paragraphs() {
        let lines = classify("A\n\nB");
        assert_eq!(lines[1], ClassifiedLine::paragraph(""));
    }

    #[test]
    fn test_heading_strips_all_hashes_and_whitespace() {
        assert_eq!(classify_line("##   Skills  "), ClassifiedLine::heading("Skills"));
        assert_eq!(classify_line("  ### Education"), ClassifiedLine::heading("Education"));
        assert_eq!(classify_line("#"), ClassifiedLine::heading(""));
    }

    #[test]
    fn test_heading_takes_precedence_over_bullet() {
        assert_eq!(classify_line("### - x"), ClassifiedLine::heading("- x"));
    }

    #[test]
    fn test_indented_bullet_is_bullet() {
        assert_eq!(
            classify_line("  - Problems Solved: latency"),
            ClassifiedLine::bullet("Problems Solved: latency")
        );
    }

    #[test]
    fn test_bullet_strips_only_one_separator() {
        assert_eq!(classify_line("-   spaced"), ClassifiedLine::bullet("  spaced"));
        assert_eq!(classify_line("-tight"), ClassifiedLine::bullet("tight"));
    }

    #[test]
    fn test_unicode_bullet_marker() {
        assert_eq!(classify_line("• Led team"), ClassifiedLine::bullet("Led team"));
    }

    #[test]
    fn test_star_bullet_requires_whitespace() {
        assert_eq!(classify_line("* Rust"), ClassifiedLine::bullet("Rust"));
        assert_eq!(
            classify_line("**Software Engineer** at ABC"),
            ClassifiedLine::paragraph("**Software Engineer** at ABC")
        );
    }

    #[test]
    fn test_paragraph_is_trimmed_including_carriage_return() {
        assert_eq!(
            classify_line("  Jane Doe | jane.doe@email.com \r"),
            ClassifiedLine::paragraph("Jane Doe | jane.doe@email.com")
        );
    }

    #[test]
    fn test_classification_ignores_neighbours() {
        let alone = classify_line("- item");
        let in_context = classify("### Heading\n- item\nparagraph");
        assert_eq!(in_context[1], alone);
    }
}
