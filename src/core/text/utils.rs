//! Grapheme classification and width-bounded truncation.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::extract_ansi_code;
use super::width::{grapheme_width, visible_width};

const ANSI_RESET: &str = "\x1b[0m";

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

pub fn is_whitespace_segment(segment: &str) -> bool {
    segment.chars().any(char::is_whitespace)
}

pub fn is_punctuation_segment(segment: &str) -> bool {
    segment.chars().any(|ch| ch.is_ascii_punctuation())
}

/// Truncates `text` to `max_width` columns, keeping ANSI codes intact.
///
/// When truncation happens a reset is emitted before `ellipsis` so styles do not leak past the
/// cut. With `pad`, the result is space-filled to exactly `max_width`.
pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str, pad: bool) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = visible_width(text);
    if text_width <= max_width {
        if pad {
            return format!("{text}{}", " ".repeat(max_width - text_width));
        }
        return text.to_string();
    }

    let target_width = max_width.saturating_sub(visible_width(ellipsis));
    let mut result = String::with_capacity(text.len());
    let mut current_width = 0;
    let mut idx = 0;
    'outer: while idx < text.len() {
        if let Some(ansi) = extract_ansi_code(text, idx) {
            result.push_str(&ansi.code);
            idx += ansi.length;
            continue;
        }
        let run_end = next_ansi_or_end(text, idx);
        for grapheme in grapheme_segments(&text[idx..run_end]) {
            let width = grapheme_width(grapheme);
            if current_width + width > target_width {
                break 'outer;
            }
            result.push_str(grapheme);
            current_width += width;
        }
        idx = run_end;
    }

    result.push_str(ANSI_RESET);
    result.push_str(ellipsis);
    if pad {
        let result_width = visible_width(&result);
        result.push_str(&" ".repeat(max_width.saturating_sub(result_width)));
    }
    result
}

/// Pads `text` with spaces up to `width` visible columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text));
    format!("{text}{}", " ".repeat(padding))
}

fn next_ansi_or_end(input: &str, mut idx: usize) -> usize {
    while idx < input.len() {
        if extract_ansi_code(input, idx).is_some() {
            break;
        }
        idx += input[idx..].chars().next().map_or(1, char::len_utf8);
    }
    idx
}
