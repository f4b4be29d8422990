//! Localization collaborator seam.

use log::{debug, info};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Loads translated text resources for a text domain.
pub trait Localization {
    /// Loads `domain` from `relative_dir` under the host's plugins directory.
    ///
    /// Returns whether any translation resources were found.
    fn load_text_domain(&mut self, domain: &str, relative_dir: &str) -> bool;
}

/// Localization that resolves text domains to directories on disk.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLocalization {
    plugins_dir: PathBuf,
    loaded: BTreeMap<String, PathBuf>,
}

impl DirectoryLocalization {
    pub fn new(plugins_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugins_dir: plugins_dir.into(),
            loaded: BTreeMap::new(),
        }
    }

    /// Returns the directory a loaded domain was read from.
    pub fn domain_dir(&self, domain: &str) -> Option<&PathBuf> {
        self.loaded.get(domain)
    }
}

impl Localization for DirectoryLocalization {
    fn load_text_domain(&mut self, domain: &str, relative_dir: &str) -> bool {
        let dir = self.plugins_dir.join(relative_dir);
        if !dir.is_dir() {
            debug!(
                "event=text_domain module=l10n status=skip reason=missing_dir domain={} dir={}",
                domain,
                dir.display()
            );
            return false;
        }

        info!(
            "event=text_domain module=l10n status=ok domain={} dir={}",
            domain,
            dir.display()
        );
        self.loaded.insert(domain.to_string(), dir);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectoryLocalization, Localization};

    #[test]
    fn records_domain_when_directory_exists() {
        let root = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir_all(root.path().join("delorean/languages")).expect("mkdir");

        let mut l10n = DirectoryLocalization::new(root.path());
        assert!(l10n.load_text_domain("delorean", "delorean/languages"));
        assert_eq!(
            l10n.domain_dir("delorean"),
            Some(&root.path().join("delorean/languages"))
        );
    }

    #[test]
    fn missing_directory_is_not_fatal() {
        let root = tempfile::tempdir().expect("temp dir");
        let mut l10n = DirectoryLocalization::new(root.path());
        assert!(!l10n.load_text_domain("delorean", "delorean/languages"));
        assert!(l10n.domain_dir("delorean").is_none());
    }
}
