//! Loader and host configuration.
//!
//! # Responsibility
//! - Describe where the host keeps plugins and how they are addressed by URL.
//! - Describe the naming convention the component resolver applies.
//!
//! # Invariants
//! - Defaults reproduce the shipped plugin layout; callers only override what
//!   differs in their deployment.

use serde::Deserialize;
use std::path::PathBuf;

/// Namespace prefix owned by this plugin's resolver.
pub const DEFAULT_NAMESPACE: &str = "delorean::";
/// Subdirectory of the plugin directory holding component resources.
pub const DEFAULT_INCLUDES_DIR: &str = "includes";
/// Literal tag every component resource file name starts with.
pub const DEFAULT_FILE_TAG: &str = "class-";
/// Extension of component resource files (without the dot).
pub const DEFAULT_EXTENSION: &str = "inc";
/// Text domain loaded during bootstrap.
pub const DEFAULT_TEXT_DOMAIN: &str = "delorean";
/// Directory, relative to the plugin directory, holding translations.
pub const DEFAULT_LANGUAGES_DIR: &str = "languages";

/// Host environment settings shared by every plugin it boots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Directory plugins are installed under; basenames are relative to it.
    pub plugins_dir: PathBuf,
    /// Public URL that maps onto `plugins_dir`.
    pub plugins_url: String,
    /// Host-wide debug flag exposed to plugins.
    pub debug: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            plugins_dir: PathBuf::from("/var/www/wp-content/plugins"),
            plugins_url: "http://localhost/wp-content/plugins".to_string(),
            debug: false,
        }
    }
}

/// Per-plugin loader settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub namespace: String,
    pub includes_dir: String,
    pub file_tag: String,
    pub extension: String,
    pub text_domain: String,
    pub languages_dir: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            includes_dir: DEFAULT_INCLUDES_DIR.to_string(),
            file_tag: DEFAULT_FILE_TAG.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            text_domain: DEFAULT_TEXT_DOMAIN.to_string(),
            languages_dir: DEFAULT_LANGUAGES_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HostConfig, LoaderConfig, DEFAULT_NAMESPACE};
    use std::path::PathBuf;

    #[test]
    fn loader_defaults_match_shipped_layout() {
        let config = LoaderConfig::default();
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.includes_dir, "includes");
        assert_eq!(config.file_tag, "class-");
        assert_eq!(config.text_domain, "delorean");
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: HostConfig = serde_json::from_str(
            r#"{ "plugins_dir": "/srv/plugins", "debug": true }"#,
        )
        .expect("host config should deserialize");
        assert_eq!(config.plugins_dir, PathBuf::from("/srv/plugins"));
        assert!(config.debug);
        assert_eq!(config.plugins_url, HostConfig::default().plugins_url);

        let loader: LoaderConfig = serde_json::from_str(r#"{ "extension": "tpl" }"#)
            .expect("loader config should deserialize");
        assert_eq!(loader.extension, "tpl");
        assert_eq!(loader.file_tag, "class-");
    }
}
