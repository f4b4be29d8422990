//! Action hook registry.
//!
//! Feature components register behavior here during the `hooks` phase; the
//! host later invokes it by hook name.

/// Priority used when a component does not ask for one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// One callback registered on a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRegistration {
    pub hook: String,
    pub callback: String,
    pub priority: i32,
}

/// Ordered action registrations.
#[derive(Debug, Default)]
pub struct HookRegistry {
    registrations: Vec<ActionRegistration>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` on `hook`.
    pub fn add_action(&mut self, hook: &str, callback: &str, priority: i32) {
        self.registrations.push(ActionRegistration {
            hook: hook.to_string(),
            callback: callback.to_string(),
            priority,
        });
    }

    pub fn has_action(&self, hook: &str, callback: &str) -> bool {
        self.registrations
            .iter()
            .any(|entry| entry.hook == hook && entry.callback == callback)
    }

    /// Returns callbacks on `hook`, lowest priority first, then in
    /// registration order.
    pub fn actions(&self, hook: &str) -> Vec<&ActionRegistration> {
        let mut actions: Vec<&ActionRegistration> = self
            .registrations
            .iter()
            .filter(|entry| entry.hook == hook)
            .collect();
        actions.sort_by_key(|entry| entry.priority);
        actions
    }

    /// Returns every registration in registration order.
    pub fn registrations(&self) -> &[ActionRegistration] {
        &self.registrations
    }

    /// Invokes `run` for each callback on `hook`; returns how many ran.
    pub fn do_action(&self, hook: &str, mut run: impl FnMut(&ActionRegistration)) -> usize {
        let actions = self.actions(hook);
        for action in &actions {
            run(action);
        }
        actions.len()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{HookRegistry, DEFAULT_PRIORITY};

    #[test]
    fn orders_by_priority_then_registration() {
        let mut hooks = HookRegistry::new();
        hooks.add_action("init", "timeline.init", DEFAULT_PRIORITY);
        hooks.add_action("init", "cursors.init", 5);
        hooks.add_action("init", "shared.init", DEFAULT_PRIORITY);

        let callbacks: Vec<&str> = hooks
            .actions("init")
            .into_iter()
            .map(|entry| entry.callback.as_str())
            .collect();
        assert_eq!(callbacks, vec!["cursors.init", "timeline.init", "shared.init"]);
    }

    #[test]
    fn do_action_runs_only_matching_hook() {
        let mut hooks = HookRegistry::new();
        hooks.add_action("init", "cursors.init", DEFAULT_PRIORITY);
        hooks.add_action("admin_footer", "timeline.render", DEFAULT_PRIORITY);

        let mut ran = Vec::new();
        let count = hooks.do_action("init", |entry| ran.push(entry.callback.clone()));
        assert_eq!(count, 1);
        assert_eq!(ran, vec!["cursors.init".to_string()]);
        assert_eq!(hooks.do_action("shutdown", |_| {}), 0);
        assert!(hooks.has_action("admin_footer", "timeline.render"));
    }
}
