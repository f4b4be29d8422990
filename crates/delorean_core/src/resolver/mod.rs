//! Convention-based component resolver.
//!
//! # Responsibility
//! - Map symbols in the plugin's namespace onto resource files under the
//!   plugin's includes directory.
//! - Include a resource on first reference; never scan the directory.
//!
//! # Invariants
//! - Symbols outside the namespace cause no filesystem access.
//! - A missing resource file is silently skipped.
//! - Deduplication of repeated loads belongs to the include table.

use crate::config::LoaderConfig;
use crate::host::{Autoload, IncludeTable};
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub mod naming;

/// Autoloader bound to one plugin's base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentResolver {
    namespace: String,
    includes_dir: PathBuf,
    file_tag: String,
    extension: String,
}

impl ComponentResolver {
    /// Creates a resolver for the plugin rooted at `base_dir`.
    pub fn new(base_dir: &Path, config: &LoaderConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            includes_dir: base_dir.join(&config.includes_dir),
            file_tag: config.file_tag.clone(),
            extension: config.extension.clone(),
        }
    }

    pub fn includes_dir(&self) -> &Path {
        &self.includes_dir
    }

    /// Returns whether `symbol` belongs to this resolver's namespace.
    pub fn owns(&self, symbol: &str) -> bool {
        symbol.starts_with(self.namespace.as_str())
    }

    /// Computes the resource location for an owned `symbol`.
    ///
    /// Pure: does not touch the filesystem.
    pub fn resource_path(&self, symbol: &str) -> Option<PathBuf> {
        if !self.owns(symbol) {
            return None;
        }
        let file_name = naming::resource_file_name(symbol, &self.file_tag, &self.extension)?;
        Some(self.includes_dir.join(file_name))
    }
}

impl Autoload for ComponentResolver {
    fn id(&self) -> String {
        format!("{}@{}", self.namespace, self.includes_dir.display())
    }

    fn autoload(&self, symbol: &str, includes: &mut IncludeTable) {
        let Some(path) = self.resource_path(symbol) else {
            return;
        };
        if !path.is_file() {
            debug!(
                "event=autoload module=resolver status=skip reason=missing_resource symbol={} path={}",
                symbol,
                path.display()
            );
            return;
        }

        if let Err(err) = includes.require_once(symbol, &path) {
            warn!(
                "event=autoload module=resolver status=error error_code=include_failed symbol={} path={} error={}",
                symbol,
                path.display(),
                err
            );
        }
    }
}
