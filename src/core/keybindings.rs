//! Task list keybindings.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::core::input::{matches_key, normalize_key_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAction {
    ToggleDone,
    StartEditing,
    CancelEditing,
    Submit,
    Remove,
    SelectUp,
    SelectDown,
    CursorLeft,
    CursorRight,
    CursorWordLeft,
    CursorWordRight,
    CursorLineStart,
    CursorLineEnd,
    DeleteCharBackward,
    DeleteCharForward,
    DeleteWordBackward,
    DeleteToLineStart,
    DeleteToLineEnd,
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(str::to_string).collect())
    }
}

impl KeyBinding {
    fn into_keys(self) -> Vec<KeyId> {
        match self {
            KeyBinding::Single(key) => vec![key],
            KeyBinding::Multiple(keys) => keys,
        }
    }
}

/// User overrides layered on top of [`DEFAULT_KEYBINDINGS`].
#[derive(Debug, Clone, Default)]
pub struct KeybindingsConfig {
    entries: HashMap<TaskAction, KeyBinding>,
}

impl KeybindingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<KeyBinding>>(&mut self, action: TaskAction, keys: K) {
        self.entries.insert(action, keys.into());
    }
}

pub static DEFAULT_KEYBINDINGS: Lazy<HashMap<TaskAction, Vec<KeyId>>> = Lazy::new(|| {
    use TaskAction::*;

    let table: [(TaskAction, &[&str]); 18] = [
        (ToggleDone, &["space", "ctrl+t"]),
        (StartEditing, &["e", "f2"]),
        (CancelEditing, &["escape"]),
        (Submit, &["enter"]),
        (Remove, &["d", "delete"]),
        (SelectUp, &["up", "k"]),
        (SelectDown, &["down", "j"]),
        (CursorLeft, &["left", "ctrl+b"]),
        (CursorRight, &["right", "ctrl+f"]),
        (CursorWordLeft, &["alt+left", "ctrl+left", "alt+b"]),
        (CursorWordRight, &["alt+right", "ctrl+right", "alt+f"]),
        (CursorLineStart, &["home", "ctrl+a"]),
        (CursorLineEnd, &["end", "ctrl+e"]),
        (DeleteCharBackward, &["backspace"]),
        (DeleteCharForward, &["delete", "ctrl+d"]),
        (DeleteWordBackward, &["ctrl+w", "alt+backspace"]),
        (DeleteToLineStart, &["ctrl+u"]),
        (DeleteToLineEnd, &["ctrl+k"]),
    ];

    table
        .into_iter()
        .map(|(action, keys)| (action, keys.iter().map(|key| key.to_string()).collect()))
        .collect()
});

#[derive(Debug)]
pub struct KeybindingsManager {
    action_to_keys: HashMap<TaskAction, Vec<KeyId>>,
}

impl KeybindingsManager {
    pub fn new(config: KeybindingsConfig) -> Self {
        let mut manager = Self {
            action_to_keys: HashMap::new(),
        };
        manager.set_config(config);
        manager
    }

    pub fn set_config(&mut self, config: KeybindingsConfig) {
        self.action_to_keys = DEFAULT_KEYBINDINGS.clone();
        for (action, binding) in config.entries {
            let keys = binding
                .into_keys()
                .iter()
                .map(|key| normalize_key_id(key))
                .collect();
            self.action_to_keys.insert(action, keys);
        }
    }

    pub fn matches(&self, key_id: &str, action: TaskAction) -> bool {
        self.action_to_keys
            .get(&action)
            .is_some_and(|keys| keys.iter().any(|key| matches_key(key_id, key)))
    }

    pub fn get_keys(&self, action: TaskAction) -> Vec<KeyId> {
        self.action_to_keys.get(&action).cloned().unwrap_or_default()
    }
}

impl Default for KeybindingsManager {
    fn default() -> Self {
        Self::new(KeybindingsConfig::default())
    }
}

/// Shared keybindings, handed to every widget that interprets keys.
pub type KeybindingsHandle = Arc<Mutex<KeybindingsManager>>;

pub fn default_keybindings_handle() -> KeybindingsHandle {
    Arc::new(Mutex::new(KeybindingsManager::default()))
}

/// Resolves each of `actions` against `key_id` under a single lock.
pub fn match_actions<const N: usize>(
    handle: &KeybindingsHandle,
    key_id: &str,
    actions: [TaskAction; N],
) -> [bool; N] {
    let manager = handle.lock().unwrap_or_else(PoisonError::into_inner);
    actions.map(|action| manager.matches(key_id, action))
}

#[cfg(test)]
mod tests {
    use super::{
        default_keybindings_handle, match_actions, KeybindingsConfig, KeybindingsManager,
        TaskAction,
    };

    #[test]
    fn defaults_match_expected_keys() {
        let manager = KeybindingsManager::default();
        assert!(manager.matches("space", TaskAction::ToggleDone));
        assert!(manager.matches("enter", TaskAction::Submit));
        assert!(manager.matches("escape", TaskAction::CancelEditing));
        assert!(manager.matches("e", TaskAction::StartEditing));
        assert!(!manager.matches("e", TaskAction::Remove));
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut config = KeybindingsConfig::default();
        config.set(TaskAction::Remove, vec!["Ctrl+X", "del"]);
        let manager = KeybindingsManager::new(config);
        assert!(manager.matches("ctrl+x", TaskAction::Remove));
        assert!(manager.matches("delete", TaskAction::Remove));
        assert!(!manager.matches("d", TaskAction::Remove));
        assert_eq!(manager.get_keys(TaskAction::Remove), vec!["ctrl+x", "delete"]);
    }

    #[test]
    fn match_actions_resolves_in_order() {
        let handle = default_keybindings_handle();
        let [submit, cancel] =
            match_actions(&handle, "escape", [TaskAction::Submit, TaskAction::CancelEditing]);
        assert!(!submit);
        assert!(cancel);
    }
}
