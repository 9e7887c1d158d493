//! Core interfaces and types.

pub mod component;
pub mod cursor;
pub mod effect;
pub mod input;
pub mod input_event;
pub mod keybindings;
pub mod style;
pub mod text;
