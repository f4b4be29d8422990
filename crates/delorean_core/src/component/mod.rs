//! Subordinate components and the catalog the host builds them from.
//!
//! # Responsibility
//! - Define the contract every attached component implements.
//! - Map symbolic names to factories at startup, so a name can only be
//!   instantiated once its resource file has been included.
//!
//! # Invariants
//! - The catalog is fixed before the first `attach`; lookups never mutate it.

use crate::hooks::HookRegistry;
use crate::host::{Host, HostResult};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

mod cursors;
mod shared;
mod timeline;

pub use cursors::Cursors;
pub use shared::Shared;
pub use timeline::Timeline;

/// Symbolic name of the passive shared-state component.
pub const SHARED: &str = "delorean::Shared";
/// Symbolic name of the cursors feature component.
pub const CURSORS: &str = "delorean::Cursors";
/// Symbolic name of the timeline feature component.
pub const TIMELINE: &str = "delorean::Timeline";

/// Behavior attached to the application.
pub trait Component {
    /// Short stable name, used in logs and hook callback ids.
    fn name(&self) -> &str;

    /// Registers this component's behavior. Passive components keep the
    /// default no-op.
    fn hooks(&mut self, _hooks: &mut HookRegistry) {}
}

/// Inputs handed to a factory when its component is instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentContext {
    pub symbol: String,
    pub resource_path: PathBuf,
    pub resource_source: String,
    pub debug: bool,
}

/// Builds one component. The host is passed so a factory can instantiate the
/// components it depends on.
pub type ComponentFactory = fn(&ComponentContext, &mut Host) -> HostResult<Box<dyn Component>>;

/// Symbolic name to factory table.
#[derive(Clone, Default)]
pub struct ComponentCatalog {
    factories: BTreeMap<String, ComponentFactory>,
}

impl fmt::Debug for ComponentCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the components this plugin ships.
    pub fn delorean() -> Self {
        let mut catalog = Self::new();
        catalog.define(SHARED, shared::build);
        catalog.define(CURSORS, cursors::build);
        catalog.define(TIMELINE, timeline::build);
        catalog
    }

    /// Declares `symbol`; a later definition replaces an earlier one.
    pub fn define(&mut self, symbol: &str, factory: ComponentFactory) {
        self.factories.insert(symbol.to_string(), factory);
    }

    pub fn get(&self, symbol: &str) -> Option<ComponentFactory> {
        self.factories.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.factories.contains_key(symbol)
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentCatalog, CURSORS, SHARED, TIMELINE};

    #[test]
    fn shipped_catalog_defines_the_three_components() {
        let catalog = ComponentCatalog::delorean();
        assert_eq!(catalog.symbols(), vec![CURSORS, SHARED, TIMELINE]);
        assert!(catalog.get("delorean::Missing").is_none());
    }
}
