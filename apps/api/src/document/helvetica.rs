//! Advance widths for the standard Helvetica faces and greedy word wrapping.
//!
//! Widths are the AFM values in 1/1000 em for printable ASCII. Other characters use a
//! wide fallback so a measured line never underestimates what is drawn.

use crate::document::paginated::Face;

const FIRST_CHAR: u32 = 0x20;
const FALLBACK_WIDTH: u16 = 667;
const BULLET_WIDTH: u16 = 350;

#[rustfmt::skip]
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(ch: char, face: Face) -> u16 {
    let table = match face {
        Face::Regular => &REGULAR_WIDTHS,
        Face::Bold => &BOLD_WIDTHS,
    };
    match ch {
        '\t' => table[0],
        '•' => BULLET_WIDTH,
        c => (c as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or(FALLBACK_WIDTH),
    }
}

/// Width of `text` in points when set in `face` at `size`.
pub fn text_width(text: &str, face: Face, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, face))).sum();
    units as f32 * size / 1000.0
}

/// Breaks `text` into rows no wider than `max_width`.
///
/// Text that already fits is returned untouched, inner spacing included. Otherwise rows
/// break between words, and a single word wider than a row is split by characters.
/// Always returns at least one row.
pub fn wrap_text(text: &str, face: Face, size: f32, max_width: f32) -> Vec<String> {
    if text_width(text, face, size) <= max_width {
        return vec![text.to_string()];
    }

    let fits = |s: &str| text_width(s, face, size) <= max_width;
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        current = word.to_string();
        while !fits(&current) {
            let (head, tail) = split_to_fit(&current, face, size, max_width);
            rows.push(head.to_string());
            current = tail.to_string();
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Splits off the longest prefix that fits, keeping at least one character per row.
fn split_to_fit(word: &str, face: Face, size: f32, max_width: f32) -> (&str, &str) {
    let mut width = 0.0;
    let mut end = 0;
    for (i, ch) in word.char_indices() {
        width += f32::from(char_width(ch, face)) * size / 1000.0;
        if width > max_width && i > 0 {
            break;
        }
        end = i + ch.len_utf8();
    }
    word.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_uses_face_metrics() {
        assert_eq!(text_width("", Face::Regular, 12.0), 0.0);
        assert!((text_width("W", Face::Regular, 10.0) - 9.44).abs() < 1e-4);
        assert!(text_width("bold", Face::Bold, 12.0) > text_width("bold", Face::Regular, 12.0));
    }

    #[test]
    fn test_unknown_characters_use_fallback_width() {
        assert!((text_width("日", Face::Regular, 1000.0) - 667.0).abs() < 1e-3);
        assert!((text_width("•", Face::Regular, 1000.0) - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_short_text_is_one_untouched_row() {
        assert_eq!(
            wrap_text("-  keep  spacing", Face::Regular, 12.0, 500.0),
            vec!["-  keep  spacing"]
        );
        assert_eq!(wrap_text("", Face::Regular, 12.0, 500.0), vec![""]);
    }

    #[test]
    fn test_long_text_wraps_between_words() {
        let text = "Reduced query latency across the reporting service by rewriting the \
                    hottest joins and adding covering indexes for the nightly export jobs";
        let rows = wrap_text(text, Face::Regular, 12.0, 200.0);

        assert!(rows.len() > 1);
        for row in &rows {
            assert!(text_width(row, Face::Regular, 12.0) <= 200.0, "{row:?} too wide");
        }
        assert_eq!(rows.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_unbreakable_word_is_split_by_characters() {
        let word = "x".repeat(200);
        let rows = wrap_text(&word, Face::Bold, 14.0, 100.0);

        assert!(rows.len() > 1);
        assert!(rows.iter().all(|r| text_width(r, Face::Bold, 14.0) <= 100.0));
        assert_eq!(rows.concat(), word);
    }

    #[test]
    fn test_row_narrower_than_one_character_still_progresses() {
        let rows = wrap_text("WW", Face::Regular, 12.0, 1.0);
        assert_eq!(rows, vec!["W", "W"]);
    }
}
