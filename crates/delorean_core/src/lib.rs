//! Bootstrap core for the Delorean plugin.
//! Validates the entry file, reads its headers, resolves components by naming
//! convention and drives the attach/hooks lifecycle.

pub mod app;
pub mod component;
pub mod config;
pub mod header;
pub mod hooks;
pub mod host;
pub mod logging;
pub mod resolver;

pub use app::{App, AppError, AppResult, EntryDescriptor, Phase};
pub use component::{Component, ComponentCatalog, ComponentContext, ComponentFactory};
pub use config::{HostConfig, LoaderConfig};
pub use header::{extract_headers, extract_headers_from_str, HeaderRecord, HeaderSchema};
pub use hooks::{ActionRegistration, HookRegistry};
pub use host::{Autoload, DirectoryLocalization, Host, HostError, HostResult, Localization};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use resolver::ComponentResolver;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
