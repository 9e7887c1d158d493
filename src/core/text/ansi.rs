//! ANSI escape sequence recognition.
//!
//! Only enough to skip control sequences when measuring or truncating styled text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiCodeKind {
    Csi,
    Osc,
    Apc,
    Ss3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiCode {
    pub code: String,
    pub length: usize,
    pub kind: AnsiCodeKind,
}

/// Returns the escape sequence starting at byte `pos`, if any.
pub fn extract_ansi_code(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&0x1b) {
        return None;
    }

    let (kind, end) = match bytes.get(pos + 1)? {
        b'[' => (AnsiCodeKind::Csi, csi_end(bytes, pos + 2)?),
        b']' => (AnsiCodeKind::Osc, string_terminator_end(bytes, pos + 2)?),
        b'_' => (AnsiCodeKind::Apc, string_terminator_end(bytes, pos + 2)?),
        b'O' if pos + 2 < bytes.len() => (AnsiCodeKind::Ss3, pos + 3),
        _ => return None,
    };

    Some(AnsiCode {
        code: input.get(pos..end)?.to_string(),
        length: end - pos,
        kind,
    })
}

fn csi_end(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map(|offset| start + offset + 1)
}

// BEL or ST (ESC \) terminates OSC/APC payloads.
fn string_terminator_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut idx = start;
    while idx < bytes.len() {
        match bytes[idx] {
            0x07 => return Some(idx + 1),
            0x1b if bytes.get(idx + 1) == Some(&b'\\') => return Some(idx + 2),
            _ => idx += 1,
        }
    }
    None
}
