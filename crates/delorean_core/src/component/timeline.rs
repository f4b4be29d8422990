//! Revision timeline feature.

use super::{Component, ComponentContext};
use crate::hooks::{HookRegistry, DEFAULT_PRIORITY};
use crate::host::{Host, HostResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    resource_source: String,
}

impl Timeline {
    pub fn from_context(ctx: &ComponentContext) -> Self {
        Self {
            resource_source: ctx.resource_source.clone(),
        }
    }

    pub fn resource_source(&self) -> &str {
        &self.resource_source
    }
}

impl Component for Timeline {
    fn name(&self) -> &str {
        "timeline"
    }

    fn hooks(&mut self, hooks: &mut HookRegistry) {
        hooks.add_action("init", "delorean.timeline.register", DEFAULT_PRIORITY);
        // Render after other footer output.
        hooks.add_action("admin_footer", "delorean.timeline.render", DEFAULT_PRIORITY + 10);
    }
}

pub(super) fn build(ctx: &ComponentContext, _host: &mut Host) -> HostResult<Box<dyn Component>> {
    Ok(Box::new(Timeline::from_context(ctx)))
}

#[cfg(test)]
mod tests {
    use super::Timeline;
    use crate::component::{Component, ComponentContext, TIMELINE};
    use crate::hooks::HookRegistry;
    use std::path::PathBuf;

    #[test]
    fn keeps_resource_source_and_registers_actions() {
        let mut timeline = Timeline::from_context(&ComponentContext {
            symbol: TIMELINE.to_string(),
            resource_path: PathBuf::from("/plugins/delorean/includes/class-timeline.inc"),
            resource_source: "timeline feature".to_string(),
            debug: false,
        });
        assert_eq!(timeline.resource_source(), "timeline feature");

        let mut hooks = HookRegistry::new();
        timeline.hooks(&mut hooks);
        let callbacks: Vec<&str> = hooks
            .registrations()
            .iter()
            .map(|entry| entry.callback.as_str())
            .collect();
        assert_eq!(callbacks, vec!["delorean.timeline.register", "delorean.timeline.render"]);
    }
}
