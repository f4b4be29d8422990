#![allow(dead_code)]

use delorean_core::{Host, HostConfig, Localization};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

pub const PLUGINS_URL: &str = "https://example.test/wp-content/plugins";

pub const ENTRY_SOURCE: &str = "<?php\n/**\n * Plugin Name: Delorean\n * Description: Step through post revisions.\n * Version:     1.0.0 \n * Author:      Aubrey Portwood\n * Text Domain: delorean\n * License:     GPL-2.0+\n */\n";

/// Plugin tree laid out under a temporary plugins directory.
pub struct PluginFixture {
    pub root: TempDir,
}

impl PluginFixture {
    /// Creates `delorean/delorean.php`, `languages/` and every shipped
    /// component resource.
    pub fn new() -> Self {
        let fixture = Self::bare();
        fixture.write_include("class-shared.inc", "shared state");
        fixture.write_include("class-cursors.inc", "cursors feature");
        fixture.write_include("class-timeline.inc", "timeline feature");
        fixture
    }

    /// Creates the entry file only, without component resources.
    pub fn bare() -> Self {
        let root = tempfile::tempdir().expect("temp plugins dir");
        let plugin_dir = root.path().join("delorean");
        std::fs::create_dir_all(plugin_dir.join("includes")).expect("create includes dir");
        std::fs::create_dir_all(plugin_dir.join("languages")).expect("create languages dir");
        std::fs::write(plugin_dir.join("delorean.php"), ENTRY_SOURCE).expect("write entry");
        Self { root }
    }

    pub fn plugin_dir(&self) -> PathBuf {
        self.root.path().join("delorean")
    }

    pub fn entry(&self) -> String {
        self.plugin_dir()
            .join("delorean.php")
            .to_str()
            .expect("temp path should be valid UTF-8")
            .to_string()
    }

    pub fn include_path(&self, file_name: &str) -> PathBuf {
        self.plugin_dir().join("includes").join(file_name)
    }

    pub fn write_include(&self, file_name: &str, contents: &str) {
        std::fs::write(self.include_path(file_name), contents).expect("write include");
    }

    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            plugins_dir: self.root.path().to_path_buf(),
            plugins_url: PLUGINS_URL.to_string(),
            debug: true,
        }
    }

    pub fn host(&self) -> Host {
        Host::new(self.host_config())
    }
}

/// Localization double that records every call.
#[derive(Clone, Default)]
pub struct RecordingLocalization {
    pub calls: Rc<RefCell<Vec<(String, String)>>>,
}

impl Localization for RecordingLocalization {
    fn load_text_domain(&mut self, domain: &str, relative_dir: &str) -> bool {
        self.calls
            .borrow_mut()
            .push((domain.to_string(), relative_dir.to_string()));
        true
    }
}

pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().expect("path should canonicalize")
}
