//! Environment configuration.

use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// `TASKS_TUI_DEBUG=1`: raise the default log level to `debug`.
    pub debug: bool,
    /// `TASKS_TUI_LOG_FILE`: append logs to this file instead of stderr.
    pub log_file: Option<String>,
    /// `TASKS_TUI_LOG_FILTER`: explicit `tracing` filter directive.
    pub log_filter: Option<String>,
    /// `TASKS_TUI_ASCII=1`: ASCII glyphs for the marker and controls.
    pub ascii_glyphs: bool,
    /// `TASKS_TUI_NO_COLOR=1`: emit no colour. Strikethrough on done titles is kept.
    pub no_color: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag("TASKS_TUI_DEBUG"),
            log_file: env_string_opt("TASKS_TUI_LOG_FILE"),
            log_filter: env_string_opt("TASKS_TUI_LOG_FILTER"),
            ascii_glyphs: env_flag("TASKS_TUI_ASCII"),
            no_color: env_flag("TASKS_TUI_NO_COLOR"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::EnvConfig;
    use std::env;
    use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

    const KEYS: [&str; 5] = [
        "TASKS_TUI_DEBUG",
        "TASKS_TUI_LOG_FILE",
        "TASKS_TUI_LOG_FILTER",
        "TASKS_TUI_ASCII",
        "TASKS_TUI_NO_COLOR",
    ];

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn env_defaults_are_off() {
        let _lock = env_lock();
        let _guards: Vec<EnvGuard> = KEYS.into_iter().map(|key| set_env_guard(key, None)).collect();

        assert_eq!(EnvConfig::from_env(), EnvConfig::default());
    }

    #[test]
    fn env_values_are_read() {
        let _lock = env_lock();
        let _guards = [
            set_env_guard("TASKS_TUI_DEBUG", Some("1")),
            set_env_guard("TASKS_TUI_LOG_FILE", Some("/tmp/tasks.log")),
            set_env_guard("TASKS_TUI_LOG_FILTER", Some("tasks_tui=trace")),
            set_env_guard("TASKS_TUI_ASCII", Some("1")),
            set_env_guard("TASKS_TUI_NO_COLOR", Some("true")),
        ];

        let config = EnvConfig::from_env();
        assert!(config.debug);
        assert_eq!(config.log_file.as_deref(), Some("/tmp/tasks.log"));
        assert_eq!(config.log_filter.as_deref(), Some("tasks_tui=trace"));
        assert!(config.ascii_glyphs);
        // Only the literal "1" enables a flag.
        assert!(!config.no_color);
    }

    #[test]
    fn blank_strings_are_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard("TASKS_TUI_LOG_FILE", Some("  "));
        let _g2 = set_env_guard("TASKS_TUI_LOG_FILTER", Some(""));
        let config = EnvConfig::from_env();
        assert!(config.log_file.is_none());
        assert!(config.log_filter.is_none());
    }
}
