//! Post-render effects keyed on a dependency value.

/// Runs an effect after render only when its dependency changed since the last run.
///
/// The first call always runs, matching a mount.
#[derive(Debug, Clone)]
pub struct TransitionEffect<T> {
    applied: Option<T>,
}

impl<T> Default for TransitionEffect<T> {
    fn default() -> Self {
        Self { applied: None }
    }
}

impl<T: PartialEq + Clone> TransitionEffect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `effect` ran.
    pub fn run(&mut self, current: &T, effect: impl FnOnce(&T)) -> bool {
        if self.applied.as_ref() == Some(current) {
            return false;
        }
        effect(current);
        self.applied = Some(current.clone());
        true
    }

    pub fn last_applied(&self) -> Option<&T> {
        self.applied.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::TransitionEffect;

    #[test]
    fn runs_on_mount_and_on_change_only() {
        let mut effect = TransitionEffect::new();
        let mut runs = Vec::new();

        assert!(effect.run(&false, |value| runs.push(*value)));
        assert!(!effect.run(&false, |value| runs.push(*value)));
        assert!(effect.run(&true, |value| runs.push(*value)));
        assert!(!effect.run(&true, |value| runs.push(*value)));
        assert!(effect.run(&false, |value| runs.push(*value)));

        assert_eq!(runs, vec![false, true, false]);
        assert_eq!(effect.last_applied(), Some(&false));
    }
}
