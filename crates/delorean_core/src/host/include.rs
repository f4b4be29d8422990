//! Require-once include table.
//!
//! # Invariants
//! - A physical file (by canonical path) is read at most once per table.
//! - Every symbol bound to a file stays bound for the table's lifetime.

use log::{debug, info};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// One resource file loaded into the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedResource {
    pub path: PathBuf,
    pub source: String,
    /// Times the file was actually read; stays at 1.
    pub load_count: usize,
    /// Times the file was requested, including deduplicated requests.
    pub request_count: usize,
}

/// Loaded resources and the symbols each of them provides.
#[derive(Debug, Default)]
pub struct IncludeTable {
    resources: BTreeMap<PathBuf, IncludedResource>,
    order: Vec<PathBuf>,
    providers: BTreeMap<String, PathBuf>,
}

impl IncludeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` unless already loaded and binds `symbol` to it.
    ///
    /// Returns `Ok(true)` when the file was read by this call, `Ok(false)`
    /// when an earlier call already loaded it.
    ///
    /// # Errors
    /// - Returns the I/O error when the file cannot be canonicalized or read.
    pub fn require_once(&mut self, symbol: &str, path: &Path) -> io::Result<bool> {
        let canonical = path.canonicalize()?;

        if let Some(resource) = self.resources.get_mut(&canonical) {
            resource.request_count += 1;
            self.providers.insert(symbol.to_string(), canonical.clone());
            debug!(
                "event=include module=host status=skip reason=already_loaded symbol={} path={}",
                symbol,
                canonical.display()
            );
            return Ok(false);
        }

        let bytes = std::fs::read(&canonical)?;
        let source = String::from_utf8_lossy(&bytes).into_owned();
        info!(
            "event=include module=host status=ok symbol={} path={} bytes={}",
            symbol,
            canonical.display(),
            bytes.len()
        );

        self.resources.insert(
            canonical.clone(),
            IncludedResource {
                path: canonical.clone(),
                source,
                load_count: 1,
                request_count: 1,
            },
        );
        self.order.push(canonical.clone());
        self.providers.insert(symbol.to_string(), canonical);
        Ok(true)
    }

    pub fn is_included(&self, path: &Path) -> bool {
        self.lookup(path).is_some()
    }

    /// Returns how many times `path` was actually read (0 or 1).
    pub fn load_count(&self, path: &Path) -> usize {
        self.lookup(path).map_or(0, |resource| resource.load_count)
    }

    /// Returns how many times `path` was requested.
    pub fn request_count(&self, path: &Path) -> usize {
        self.lookup(path).map_or(0, |resource| resource.request_count)
    }

    /// Returns the resource that provides `symbol`, if one was loaded.
    pub fn provider_of(&self, symbol: &str) -> Option<&IncludedResource> {
        self.providers
            .get(symbol)
            .and_then(|path| self.resources.get(path))
    }

    /// Returns loaded paths in load order.
    pub fn loaded_paths(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn lookup(&self, path: &Path) -> Option<&IncludedResource> {
        let canonical = path.canonicalize().ok()?;
        self.resources.get(&canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::IncludeTable;

    #[test]
    fn loads_each_file_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("class-cursors.inc");
        std::fs::write(&path, "cursors").expect("write fixture");

        let mut table = IncludeTable::new();
        assert!(table.require_once("delorean::Cursors", &path).expect("first load"));
        assert!(!table.require_once("delorean::Cursors", &path).expect("second load"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.load_count(&path), 1);
        assert_eq!(table.request_count(&path), 2);
        assert_eq!(
            table
                .provider_of("delorean::Cursors")
                .expect("provider bound")
                .source,
            "cursors"
        );
    }

    #[test]
    fn binds_alias_symbols_to_the_same_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("class-shared.inc");
        std::fs::write(&path, "shared").expect("write fixture");

        let mut table = IncludeTable::new();
        table.require_once("delorean::Shared", &path).expect("load");
        table
            .require_once("delorean.Shared", &dir.path().join(".").join("class-shared.inc"))
            .expect("alias load");

        assert_eq!(table.load_count(&path), 1);
        assert!(table.provider_of("delorean.Shared").is_some());
    }

    #[test]
    fn missing_file_is_an_error_and_leaves_table_untouched() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut table = IncludeTable::new();
        table
            .require_once("delorean::Ghost", &dir.path().join("class-ghost.inc"))
            .expect_err("missing file must fail");
        assert!(table.is_empty());
        assert!(table.provider_of("delorean::Ghost").is_none());
    }
}
