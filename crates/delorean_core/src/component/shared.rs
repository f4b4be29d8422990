//! Passive shared state consumed by the feature components.

use super::{Component, ComponentContext};
use crate::host::{Host, HostResult};
use std::path::{Path, PathBuf};

/// State shared across features. Registers no hooks of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shared {
    resource_path: PathBuf,
    debug: bool,
}

impl Shared {
    pub fn from_context(ctx: &ComponentContext) -> Self {
        Self {
            resource_path: ctx.resource_path.clone(),
            debug: ctx.debug,
        }
    }

    pub fn resource_path(&self) -> &Path {
        &self.resource_path
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl Component for Shared {
    fn name(&self) -> &str {
        "shared"
    }
}

pub(super) fn build(ctx: &ComponentContext, _host: &mut Host) -> HostResult<Box<dyn Component>> {
    Ok(Box::new(Shared::from_context(ctx)))
}

#[cfg(test)]
mod tests {
    use super::Shared;
    use crate::component::{Component, ComponentContext, SHARED};
    use crate::hooks::HookRegistry;
    use std::path::{Path, PathBuf};

    #[test]
    fn keeps_resource_path_and_debug_flag() {
        let mut shared = Shared::from_context(&ComponentContext {
            symbol: SHARED.to_string(),
            resource_path: PathBuf::from("/plugins/delorean/includes/class-shared.inc"),
            resource_source: "shared state".to_string(),
            debug: true,
        });
        assert_eq!(
            shared.resource_path(),
            Path::new("/plugins/delorean/includes/class-shared.inc")
        );
        assert!(shared.debug());

        let mut hooks = HookRegistry::new();
        shared.hooks(&mut hooks);
        assert!(hooks.is_empty());
    }
}
