//! Terminal to-do list components.
//!
//! Invariant: a [`TaskItem`] never mutates its [`Task`]; every change travels through
//! [`TaskItemCallbacks`] to whoever owns the collection ([`TaskList`] in this crate).
//!
//! # Public API Overview
//! - Render rows and lists through the [`Component`] trait (`render(width) -> Vec<String>`).
//! - Feed decoded terminal input with [`parse_input_events`] and `handle_event`.
//! - Drive controls deterministically by test id (`button-N`, `marker-N`, `edit-N`, `trash-N`).
//! - Configure glyphs, colours and logging from the environment via [`EnvConfig`].

pub mod config;
pub mod error;
pub mod logging;
pub mod task;

pub mod core;
pub mod widgets;

/// Built-in UI components.
pub use crate::widgets::{
    Control, Input, TaskEvent, TaskItem, TaskItemCallbacks, TaskItemTheme, TaskList,
    TrailingAffordance, CONTROLS,
};

/// Task model.
pub use crate::task::{EditTaskPayload, Task, TaskId, TaskStore};

/// Errors.
pub use crate::error::{LoggingError, TaskError};

/// Environment configuration.
pub use crate::config::EnvConfig;

/// Keybinding configuration and default mappings.
pub use crate::core::keybindings::{
    default_keybindings_handle, KeyBinding, KeyId, KeybindingsConfig, KeybindingsHandle,
    KeybindingsManager, TaskAction, DEFAULT_KEYBINDINGS,
};

/// Keyboard input parsing and matching helpers.
pub use crate::core::input::{matches_key, normalize_key_id, parse_key};
pub use crate::core::input_event::{parse_input_events, InputEvent};

/// Component traits and cursor metadata.
pub use crate::core::component::{Component, Focusable};
pub use crate::core::cursor::CursorPos;

/// Returns whether a component exposes focus behavior via [`Focusable`].
pub fn is_focusable(component: &mut dyn Component) -> bool {
    component.as_focusable().is_some()
}

/// ANSI-aware truncation helper.
pub use crate::core::text::utils::truncate_to_width;
/// Visible width helper that ignores ANSI control sequences.
pub use crate::core::text::width::visible_width;
