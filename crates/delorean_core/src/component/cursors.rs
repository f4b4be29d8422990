//! Revision cursors feature.

use super::{Component, ComponentContext};
use crate::hooks::{HookRegistry, DEFAULT_PRIORITY};
use crate::host::{Host, HostResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursors {
    resource_source: String,
}

impl Cursors {
    pub fn from_context(ctx: &ComponentContext) -> Self {
        Self {
            resource_source: ctx.resource_source.clone(),
        }
    }

    pub fn resource_source(&self) -> &str {
        &self.resource_source
    }
}

impl Component for Cursors {
    fn name(&self) -> &str {
        "cursors"
    }

    fn hooks(&mut self, hooks: &mut HookRegistry) {
        hooks.add_action("init", "delorean.cursors.register", DEFAULT_PRIORITY);
        hooks.add_action("admin_bar_menu", "delorean.cursors.admin_bar", DEFAULT_PRIORITY);
    }
}

pub(super) fn build(ctx: &ComponentContext, _host: &mut Host) -> HostResult<Box<dyn Component>> {
    Ok(Box::new(Cursors::from_context(ctx)))
}
