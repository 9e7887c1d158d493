//! Grapheme width and visible width helpers.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::extract_ansi_code;

const TAB_WIDTH: usize = 3;

pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }
    if emoji_get(grapheme).is_some() {
        return 2;
    }
    grapheme
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

/// Terminal column count of `input`, ignoring ANSI control sequences.
pub fn visible_width(input: &str) -> usize {
    if input.is_empty() {
        return 0;
    }

    let mut width = 0;
    let mut idx = 0;
    let mut run_start = 0;
    while idx < input.len() {
        if let Some(ansi) = extract_ansi_code(input, idx) {
            width += plain_width(&input[run_start..idx]);
            idx += ansi.length;
            run_start = idx;
            continue;
        }
        idx += input[idx..].chars().next().map_or(1, char::len_utf8);
    }
    width + plain_width(&input[run_start..])
}

fn plain_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}
