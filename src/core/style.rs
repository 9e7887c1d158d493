//! SGR styling helpers and the task row palette.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const DONE_GREEN: Rgb = Rgb(0x1d, 0xb8, 0x63);
pub const TITLE_GREY: Rgb = Rgb(0x66, 0x66, 0x66);
pub const MUTED_GREY: Rgb = Rgb(0xb2, 0xb2, 0xb2);
pub const DIVIDER_GREY: Rgb = Rgb(0xc4, 0xc4, 0xc4);

pub const STRIKETHROUGH_ON: &str = "\x1b[9m";
pub const DIM_ON: &str = "\x1b[2m";

pub fn fg(text: &str, color: Rgb) -> String {
    let Rgb(r, g, b) = color;
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[39m")
}

pub fn strikethrough(text: &str) -> String {
    format!("{STRIKETHROUGH_ON}{text}\x1b[29m")
}

pub fn dim(text: &str) -> String {
    format!("{DIM_ON}{text}\x1b[22m")
}

pub fn inverse(text: &str) -> String {
    format!("\x1b[7m{text}\x1b[27m")
}
