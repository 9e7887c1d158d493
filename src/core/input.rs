//! Key parsing for legacy (xterm/VT) terminal input.
//!
//! Key ids are lowercase names joined with modifiers in `shift+ctrl+alt` order, e.g. `enter`,
//! `ctrl+t`, `alt+left`, `shift+tab`, `f2`. Single printable characters keep their case.

const MOD_SHIFT: u8 = 1;
const MOD_ALT: u8 = 2;
const MOD_CTRL: u8 = 4;

/// Parses one complete key sequence into a normalized key id.
pub fn parse_key(data: &str) -> Option<String> {
    let bytes = data.as_bytes();
    match bytes {
        [] => None,
        [b'\r'] | [b'\n'] => Some("enter".to_string()),
        [b'\t'] => Some("tab".to_string()),
        [0x1b] => Some("escape".to_string()),
        [0x7f] | [0x08] => Some("backspace".to_string()),
        [0x00] => Some("ctrl+space".to_string()),
        [b @ 0x01..=0x1a] => Some(format!("ctrl+{}", (b'a' + b - 1) as char)),
        [0x1b, b'[', rest @ ..] => parse_csi(rest),
        [0x1b, b'O', rest @ ..] => parse_ss3(rest),
        [0x1b, b'\r'] => Some("alt+enter".to_string()),
        [0x1b, 0x7f] | [0x1b, 0x08] => Some("alt+backspace".to_string()),
        [0x1b, b] if b.is_ascii_graphic() => Some(format!("alt+{}", (*b as char).to_ascii_lowercase())),
        _ => None,
    }
}

/// Normalizes a user-written key id so config values compare with parsed ids.
pub fn normalize_key_id(key_id: &str) -> String {
    let trimmed = key_id.trim();
    let mut parts: Vec<&str> = trimmed.split('+').collect();
    let Some(key) = parts.pop() else {
        return trimmed.to_string();
    };
    // Single characters keep their case: `D` is a different key from `d`.
    let key = if key.chars().count() > 1 {
        key.to_ascii_lowercase()
    } else {
        key.to_string()
    };
    let key = match key.as_str() {
        "esc" => "escape",
        "return" => "enter",
        "del" => "delete",
        "pgup" | "pageup" => "pageup",
        "pgdn" | "pagedown" => "pagedown",
        " " => "space",
        other => other,
    };

    let mut modifier = 0;
    for part in parts {
        modifier |= match part.to_ascii_lowercase().as_str() {
            "shift" => MOD_SHIFT,
            "alt" | "meta" | "option" => MOD_ALT,
            "ctrl" | "control" => MOD_CTRL,
            _ => 0,
        };
    }
    with_modifiers(key, modifier)
}

/// Returns true when a parsed key id matches a (possibly unnormalized) binding.
pub fn matches_key(key_id: &str, binding: &str) -> bool {
    normalize_key_id(key_id) == normalize_key_id(binding)
}

fn with_modifiers(key: &str, modifier: u8) -> String {
    let mut id = String::new();
    if modifier & MOD_SHIFT != 0 {
        id.push_str("shift+");
    }
    if modifier & MOD_CTRL != 0 {
        id.push_str("ctrl+");
    }
    if modifier & MOD_ALT != 0 {
        id.push_str("alt+");
    }
    id.push_str(key);
    id
}

fn parse_csi(rest: &[u8]) -> Option<String> {
    let (&final_byte, params) = rest.split_last()?;
    let params = std::str::from_utf8(params).ok()?;
    let mut fields = params.split(';');
    let first = fields.next().unwrap_or("");
    // xterm encodes modifiers as 1 + bitmask in the second field.
    let modifier = fields
        .next()
        .and_then(|field| field.parse::<u8>().ok())
        .map_or(0, |value| value.saturating_sub(1));

    let key = match final_byte {
        b'A' => "up",
        b'B' => "down",
        b'C' => "right",
        b'D' => "left",
        b'H' => "home",
        b'F' => "end",
        b'Z' => return Some("shift+tab".to_string()),
        b'~' => match first {
            "1" | "7" => "home",
            "2" => "insert",
            "3" => "delete",
            "4" | "8" => "end",
            "5" => "pageup",
            "6" => "pagedown",
            "11" => "f1",
            "12" => "f2",
            "13" => "f3",
            "14" => "f4",
            _ => return None,
        },
        _ => return None,
    };
    Some(with_modifiers(key, modifier))
}

fn parse_ss3(rest: &[u8]) -> Option<String> {
    let key = match rest {
        [b'A'] => "up",
        [b'B'] => "down",
        [b'C'] => "right",
        [b'D'] => "left",
        [b'H'] => "home",
        [b'F'] => "end",
        [b'M'] => "enter",
        [b'P'] => "f1",
        [b'Q'] => "f2",
        [b'R'] => "f3",
        [b'S'] => "f4",
        _ => return None,
    };
    Some(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::{matches_key, normalize_key_id, parse_key};

    #[test]
    fn control_bytes() {
        assert_eq!(parse_key("\r").as_deref(), Some("enter"));
        assert_eq!(parse_key("\x1b").as_deref(), Some("escape"));
        assert_eq!(parse_key("\x7f").as_deref(), Some("backspace"));
        assert_eq!(parse_key("\x14").as_deref(), Some("ctrl+t"));
        assert_eq!(parse_key("\x17").as_deref(), Some("ctrl+w"));
    }

    #[test]
    fn csi_and_ss3_sequences() {
        assert_eq!(parse_key("\x1b[A").as_deref(), Some("up"));
        assert_eq!(parse_key("\x1bOB").as_deref(), Some("down"));
        assert_eq!(parse_key("\x1b[3~").as_deref(), Some("delete"));
        assert_eq!(parse_key("\x1b[1;5D").as_deref(), Some("ctrl+left"));
        assert_eq!(parse_key("\x1b[1;3C").as_deref(), Some("alt+right"));
        assert_eq!(parse_key("\x1bOQ").as_deref(), Some("f2"));
        assert_eq!(parse_key("\x1b[Z").as_deref(), Some("shift+tab"));
    }

    #[test]
    fn alt_prefixed_characters() {
        assert_eq!(parse_key("\x1bb").as_deref(), Some("alt+b"));
        assert_eq!(parse_key("\x1b\x7f").as_deref(), Some("alt+backspace"));
    }

    #[test]
    fn normalization_orders_modifiers_and_resolves_aliases() {
        assert_eq!(normalize_key_id("Alt+Ctrl+Left"), "ctrl+alt+left");
        assert_eq!(normalize_key_id("esc"), "escape");
        assert!(matches_key("enter", "return"));
        assert!(!matches_key("ctrl+t", "t"));
        assert_eq!(normalize_key_id("Shift+Enter"), "shift+enter");
        assert!(!matches_key("D", "d"));
        assert!(matches_key("Ctrl+t", "ctrl+t"));
    }
}
