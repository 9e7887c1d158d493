//! Text helpers (ANSI parsing, width calculations, truncation).
//!
//! These helpers are pure (string in/string out) so widgets can use them without touching any
//! terminal state.

pub mod ansi;
pub mod utils;
pub mod width;
