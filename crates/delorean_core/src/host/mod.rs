//! Host symbol-resolution machinery.
//!
//! # Responsibility
//! - Keep the ordered autoloader stack and consult it when a symbol is missed.
//! - Own the include table, the component catalog and the hook registry.
//! - Forward text domain loading to the localization collaborator.
//!
//! # Invariants
//! - A symbol is available only when it is cataloged and its resource file
//!   has been included.
//! - Autoloaders run in registration order and only for unavailable symbols.
//! - An autoloader whose id is already on the stack is not added again.

use crate::component::{Component, ComponentCatalog, ComponentContext, ComponentFactory};
use crate::config::HostConfig;
use crate::hooks::HookRegistry;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod include;
mod l10n;

pub use include::{IncludeTable, IncludedResource};
pub use l10n::{DirectoryLocalization, Localization};

pub type HostResult<T> = Result<T, HostError>;

/// Callback consulted when the host misses a symbol.
pub trait Autoload {
    /// Identity used to ignore repeated registrations of the same loader.
    fn id(&self) -> String;

    /// Attempts to make `symbol` available by including its resource.
    ///
    /// Must be a silent no-op for symbols the loader does not own.
    fn autoload(&self, symbol: &str, includes: &mut IncludeTable);
}

/// Process-level host state: autoloaders, includes, catalog and hooks.
pub struct Host {
    config: HostConfig,
    autoloaders: Vec<Box<dyn Autoload>>,
    includes: IncludeTable,
    catalog: ComponentCatalog,
    localization: Box<dyn Localization>,
    hooks: HookRegistry,
}

impl Host {
    /// Creates a host with the shipped catalog and on-disk localization.
    pub fn new(config: HostConfig) -> Self {
        let localization = Box::new(DirectoryLocalization::new(config.plugins_dir.clone()));
        Self::with_localization(config, localization)
    }

    pub fn with_localization(config: HostConfig, localization: Box<dyn Localization>) -> Self {
        Self {
            config,
            autoloaders: Vec::new(),
            includes: IncludeTable::new(),
            catalog: ComponentCatalog::delorean(),
            localization,
            hooks: HookRegistry::new(),
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Pushes `loader` onto the autoloader stack.
    ///
    /// Returns `false` when a loader with the same id is already registered.
    pub fn register_autoloader(&mut self, loader: Box<dyn Autoload>) -> bool {
        let id = loader.id();
        if self.autoloaders.iter().any(|existing| existing.id() == id) {
            warn!(
                "event=autoload_register module=host status=skip reason=duplicate id={}",
                id
            );
            return false;
        }

        info!(
            "event=autoload_register module=host status=ok id={} position={}",
            id,
            self.autoloaders.len()
        );
        self.autoloaders.push(loader);
        true
    }

    pub fn autoloader_count(&self) -> usize {
        self.autoloaders.len()
    }

    /// Declares a component type; it becomes available once included.
    pub fn define(&mut self, symbol: &str, factory: ComponentFactory) {
        self.catalog.define(symbol, factory);
    }

    pub fn is_available(&self, symbol: &str) -> bool {
        self.catalog.contains(symbol) && self.includes.provider_of(symbol).is_some()
    }

    /// Makes `symbol` available if any registered autoloader can.
    pub fn resolve(&mut self, symbol: &str) -> bool {
        if self.is_available(symbol) {
            return true;
        }

        for loader in &self.autoloaders {
            loader.autoload(symbol, &mut self.includes);
            if self.is_available(symbol) {
                return true;
            }
        }
        false
    }

    /// Resolves and builds the component registered under `symbol`.
    ///
    /// # Errors
    /// - Returns [`HostError::UndefinedComponent`] when no autoloader made the
    ///   symbol available.
    /// - Propagates factory errors.
    pub fn instantiate(&mut self, symbol: &str) -> HostResult<Box<dyn Component>> {
        if !self.resolve(symbol) {
            error!(
                "event=component_instantiate module=host status=error error_code=undefined_component symbol={}",
                symbol
            );
            return Err(HostError::UndefinedComponent(symbol.to_string()));
        }

        let (factory, ctx) = match (self.catalog.get(symbol), self.includes.provider_of(symbol)) {
            (Some(factory), Some(resource)) => (
                factory,
                ComponentContext {
                    symbol: symbol.to_string(),
                    resource_path: resource.path.clone(),
                    resource_source: resource.source.clone(),
                    debug: self.config.debug,
                },
            ),
            _ => return Err(HostError::UndefinedComponent(symbol.to_string())),
        };

        let component = factory(&ctx, self)?;
        info!(
            "event=component_instantiate module=host status=ok symbol={} name={}",
            symbol,
            component.name()
        );
        Ok(component)
    }

    pub fn includes(&self) -> &IncludeTable {
        &self.includes
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    pub fn load_text_domain(&mut self, domain: &str, relative_dir: &str) -> bool {
        self.localization.load_text_domain(domain, relative_dir)
    }
}

/// Host resolution and instantiation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    UndefinedComponent(String),
    ComponentInit { symbol: String, reason: String },
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedComponent(symbol) => write!(f, "component is undefined: {symbol}"),
            Self::ComponentInit { symbol, reason } => {
                write!(f, "component `{symbol}` failed to initialize: {reason}")
            }
        }
    }
}

impl Error for HostError {}
