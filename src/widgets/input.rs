//! Single-line text field.

use crate::core::component::{Component, Focusable};
use crate::core::cursor::CursorPos;
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{match_actions, KeybindingsHandle, TaskAction};
use crate::core::style::inverse;
use crate::core::text::utils::{
    grapheme_segments, is_punctuation_segment, is_whitespace_segment, pad_to_width,
    truncate_to_width,
};
use crate::core::text::width::{grapheme_width, visible_width};

pub type TextStyleFn = Box<dyn Fn(&str) -> String>;

/// Single-line input with horizontal scrolling.
///
/// Edits are accepted only while the field is editable; the cursor is drawn only while focused.
/// Submit and cancel keys are left to the owner.
pub struct Input {
    value: String,
    cursor: usize,
    focused: bool,
    editable: bool,
    last_cursor_pos: Option<CursorPos>,
    keybindings: KeybindingsHandle,
    text_style: Option<TextStyleFn>,
}

impl Input {
    pub fn new(keybindings: KeybindingsHandle) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            editable: true,
            last_cursor_pos: None,
            keybindings,
            text_style: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Style applied to the visible text (not to the cursor cell or padding).
    pub fn set_text_style(&mut self, style: Option<TextStyleFn>) {
        self.text_style = style;
    }

    fn styled(&self, text: &str) -> String {
        match (&self.text_style, text.is_empty()) {
            (Some(style), false) => style(text),
            _ => text.to_string(),
        }
    }

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn previous_grapheme_len(&self) -> usize {
        grapheme_segments(&self.value[..self.cursor])
            .next_back()
            .map_or(0, str::len)
    }

    fn next_grapheme_len(&self) -> usize {
        grapheme_segments(&self.value[self.cursor..])
            .next()
            .map_or(0, str::len)
    }

    fn word_start_before_cursor(&self) -> usize {
        let mut start = self.cursor;
        let mut segments = grapheme_segments(&self.value[..self.cursor]).rev().peekable();

        while let Some(segment) = segments.next_if(|seg| is_whitespace_segment(seg)) {
            start -= segment.len();
        }
        let punctuation_run = segments.peek().is_some_and(|seg| is_punctuation_segment(seg));
        while let Some(segment) = segments.next_if(|seg| {
            !is_whitespace_segment(seg) && is_punctuation_segment(seg) == punctuation_run
        }) {
            start -= segment.len();
        }
        start
    }

    fn word_end_after_cursor(&self) -> usize {
        let mut end = self.cursor;
        let mut segments = grapheme_segments(&self.value[self.cursor..]).peekable();

        while let Some(segment) = segments.next_if(|seg| is_whitespace_segment(seg)) {
            end += segment.len();
        }
        let punctuation_run = segments.peek().is_some_and(|seg| is_punctuation_segment(seg));
        while let Some(segment) = segments.next_if(|seg| {
            !is_whitespace_segment(seg) && is_punctuation_segment(seg) == punctuation_run
        }) {
            end += segment.len();
        }
        end
    }

    /// Byte range of `value` that fits in `available` columns while keeping the cursor visible.
    /// Only used while focused.
    fn visible_range(&self, available: usize) -> (usize, usize) {
        // One column is reserved for the cursor cell when it sits past the last character.
        let budget = if self.cursor == self.value.len() {
            available.saturating_sub(1)
        } else {
            available
        };
        if visible_width(&self.value) <= budget {
            return (0, self.value.len());
        }

        let mut start = self.cursor;
        let mut used = 0;
        for segment in grapheme_segments(&self.value[..self.cursor]).rev() {
            let width = grapheme_width(segment);
            if used + width > budget / 2 {
                break;
            }
            used += width;
            start -= segment.len();
        }

        let mut end = start;
        used = 0;
        for segment in grapheme_segments(&self.value[start..]) {
            let width = grapheme_width(segment);
            if used + width > budget {
                break;
            }
            used += width;
            end += segment.len();
        }

        // Near the end of the value, spend the leftover columns on earlier text.
        for segment in grapheme_segments(&self.value[..start]).rev() {
            let width = grapheme_width(segment);
            if used + width > budget {
                break;
            }
            used += width;
            start -= segment.len();
        }
        (start, end)
    }
}

impl Component for Input {
    fn render(&mut self, width: usize) -> Vec<String> {
        self.last_cursor_pos = None;
        if width == 0 {
            return vec![String::new()];
        }

        // Without focus the value reads from its start; overflow is cut with an ellipsis.
        if !self.focused {
            return vec![truncate_to_width(&self.styled(&self.value), width, "…", true)];
        }

        let (start, end) = self.visible_range(width);

        let cursor = self.cursor.clamp(start, end);
        let before = &self.value[start..cursor];
        let after_cursor = &self.value[cursor..end];
        let (at_cursor, after) = match grapheme_segments(after_cursor).next() {
            Some(grapheme) => (grapheme, &after_cursor[grapheme.len()..]),
            None => (" ", ""),
        };

        self.last_cursor_pos = Some(CursorPos {
            row: 0,
            col: visible_width(before),
        });

        let line = format!(
            "{}{}{}",
            self.styled(before),
            inverse(at_cursor),
            self.styled(after)
        );
        vec![pad_to_width(&line, width)]
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        self.last_cursor_pos
    }

    fn handle_event(&mut self, event: &InputEvent) {
        if !self.editable {
            return;
        }

        let key_id = match event {
            InputEvent::Text { text, .. } => {
                self.insert_text(text);
                return;
            }
            InputEvent::Paste { text, .. } => {
                let cleaned = text.replace(['\r', '\n'], "");
                self.insert_text(&cleaned);
                return;
            }
            InputEvent::Key { key_id, .. } => key_id.as_str(),
            InputEvent::UnknownRaw { .. } => return,
        };

        let [backspace, delete, delete_word, to_line_start, to_line_end, left, right, home, end, word_left, word_right] =
            match_actions(
                &self.keybindings,
                key_id,
                [
                    TaskAction::DeleteCharBackward,
                    TaskAction::DeleteCharForward,
                    TaskAction::DeleteWordBackward,
                    TaskAction::DeleteToLineStart,
                    TaskAction::DeleteToLineEnd,
                    TaskAction::CursorLeft,
                    TaskAction::CursorRight,
                    TaskAction::CursorLineStart,
                    TaskAction::CursorLineEnd,
                    TaskAction::CursorWordLeft,
                    TaskAction::CursorWordRight,
                ],
            );

        if backspace {
            let start = self.cursor - self.previous_grapheme_len();
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        } else if delete {
            let end = self.cursor + self.next_grapheme_len();
            self.value.replace_range(self.cursor..end, "");
        } else if delete_word {
            let start = self.word_start_before_cursor();
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        } else if to_line_start {
            self.value.replace_range(..self.cursor, "");
            self.cursor = 0;
        } else if to_line_end {
            self.value.truncate(self.cursor);
        } else if left {
            self.cursor -= self.previous_grapheme_len();
        } else if right {
            self.cursor += self.next_grapheme_len();
        } else if home {
            self.cursor = 0;
        } else if end {
            self.cursor = self.value.len();
        } else if word_left {
            self.cursor = self.word_start_before_cursor();
        } else if word_right {
            self.cursor = self.word_end_after_cursor();
        }
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for Input {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
