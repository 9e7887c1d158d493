//! Structured input events decoded from raw terminal bytes.

use crate::core::input::parse_key;

const PASTE_START: &str = "\x1b[200~";
const PASTE_END: &str = "\x1b[201~";

/// Input event delivered to components.
///
/// `raw` is the exact text received from the terminal. Text and paste events carry decoded text
/// so widgets don't have to parse escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key { raw: String, key_id: String },
    Text { raw: String, text: String },
    Paste { raw: String, text: String },
    UnknownRaw { raw: String },
}

impl InputEvent {
    /// Builds a key event from a key id without raw bytes (scripted input).
    pub fn key(key_id: impl Into<String>) -> Self {
        InputEvent::Key {
            raw: String::new(),
            key_id: key_id.into(),
        }
    }

    /// Builds a text event (scripted input).
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        InputEvent::Text {
            raw: text.clone(),
            text,
        }
    }

    /// Key id usable for keybinding lookups.
    ///
    /// Single-character text events count as the key that produced them, so `space` or `e` can be
    /// bound while no text field is accepting input.
    pub fn chord(&self) -> Option<String> {
        match self {
            InputEvent::Key { key_id, .. } => Some(key_id.clone()),
            InputEvent::Text { text, .. } => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(' '), None) => Some("space".to_string()),
                    (Some(ch), None) => Some(ch.to_string()),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Splits a chunk of terminal input into events.
///
/// Runs of printable characters become one `Text` event; each escape sequence or control byte
/// becomes its own `Key` (or `UnknownRaw`) event; bracketed paste is kept whole.
pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut remaining = data;

    while !remaining.is_empty() {
        if let Some(after_start) = remaining.strip_prefix(PASTE_START) {
            let Some(end) = after_start.find(PASTE_END) else {
                events.push(InputEvent::UnknownRaw {
                    raw: remaining.to_string(),
                });
                break;
            };
            let raw_len = PASTE_START.len() + end + PASTE_END.len();
            events.push(InputEvent::Paste {
                raw: remaining[..raw_len].to_string(),
                text: after_start[..end].to_string(),
            });
            remaining = &remaining[raw_len..];
            continue;
        }

        let token_len = next_token_len(remaining);
        let token = &remaining[..token_len];
        remaining = &remaining[token_len..];

        if is_printable(token) {
            events.push(InputEvent::Text {
                raw: token.to_string(),
                text: token.to_string(),
            });
        } else if let Some(key_id) = parse_key(token) {
            events.push(InputEvent::Key {
                raw: token.to_string(),
                key_id,
            });
        } else {
            events.push(InputEvent::UnknownRaw {
                raw: token.to_string(),
            });
        }
    }

    events
}

fn is_printable(token: &str) -> bool {
    token.chars().all(|ch| !ch.is_control())
}

fn next_token_len(data: &str) -> usize {
    let bytes = data.as_bytes();
    match bytes[0] {
        0x1b => escape_len(bytes),
        b if b < 0x20 || b == 0x7f => 1,
        _ => {
            let mut chars = data.char_indices();
            match chars.next() {
                Some((_, first)) if first.is_control() => first.len_utf8(),
                _ => chars
                    .find(|(_, ch)| ch.is_control())
                    .map_or(data.len(), |(idx, _)| idx),
            }
        }
    }
}

fn escape_len(bytes: &[u8]) -> usize {
    match bytes.get(1) {
        None => 1,
        Some(b'[') => bytes[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map_or(bytes.len(), |offset| offset + 3),
        Some(b'O') if bytes.len() >= 3 => 3,
        // A second ESC starts a new sequence; the first is a lone escape key.
        Some(0x1b) => 1,
        Some(b) if b.is_ascii() => 2,
        Some(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_input_events, InputEvent};
    use pretty_assertions::assert_eq;

    #[test]
    fn printable_runs_are_one_text_event() {
        assert_eq!(
            parse_input_events("buy milk"),
            vec![InputEvent::Text {
                raw: "buy milk".to_string(),
                text: "buy milk".to_string(),
            }]
        );
    }

    #[test]
    fn text_and_keys_are_split() {
        let events = parse_input_events("ok\r\x1b[A\x1b");
        assert_eq!(
            events,
            vec![
                InputEvent::Text {
                    raw: "ok".to_string(),
                    text: "ok".to_string(),
                },
                InputEvent::Key {
                    raw: "\r".to_string(),
                    key_id: "enter".to_string(),
                },
                InputEvent::Key {
                    raw: "\x1b[A".to_string(),
                    key_id: "up".to_string(),
                },
                InputEvent::Key {
                    raw: "\x1b".to_string(),
                    key_id: "escape".to_string(),
                },
            ]
        );
    }

    #[test]
    fn bracketed_paste_is_kept_whole() {
        let events = parse_input_events("a\x1b[200~b\nc\x1b[201~d");
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            InputEvent::Paste {
                raw: "\x1b[200~b\nc\x1b[201~".to_string(),
                text: "b\nc".to_string(),
            }
        );
    }

    #[test]
    fn unterminated_paste_is_unknown() {
        let events = parse_input_events("\x1b[200~oops");
        assert!(matches!(events.as_slice(), [InputEvent::UnknownRaw { .. }]));
    }

    #[test]
    fn chord_of_single_characters() {
        assert_eq!(InputEvent::text(" ").chord().as_deref(), Some("space"));
        assert_eq!(InputEvent::text("E").chord().as_deref(), Some("E"));
        assert_eq!(InputEvent::text("ed").chord(), None);
        assert_eq!(InputEvent::key("ctrl+t").chord().as_deref(), Some("ctrl+t"));
    }
}
