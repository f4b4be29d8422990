//! Application bootstrap and lifecycle.
//!
//! # Responsibility
//! - Validate the entry file and derive its descriptor.
//! - Extract plugin headers and load the text domain.
//! - Register the component resolver, then drive `attach` and `hooks`.
//!
//! # Invariants
//! - Construction either yields a fully initialized `App` or an error.
//! - Lifecycle moves `Constructed -> Attached -> Active`, one step per call.
//! - Hook registration follows [`HOOK_ORDER`]; the shared component is never
//!   asked to register hooks.

use crate::component::{Component, CURSORS, SHARED, TIMELINE};
use crate::config::LoaderConfig;
use crate::header::{extract_headers, HeaderError, HeaderRecord, HeaderSchema};
use crate::host::{Host, HostError};
use crate::resolver::ComponentResolver;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::path::{Path, PathBuf};

pub type AppResult<T> = Result<T, AppError>;

/// Components attached by [`App::attach`], as `(slot, symbol)` in
/// instantiation order.
pub const ATTACHMENTS: &[(&str, &str)] = &[
    ("shared", SHARED),
    ("cursors", CURSORS),
    ("timeline", TIMELINE),
];

/// Slots whose hooks run during [`App::hooks`], in order.
pub const HOOK_ORDER: &[&str] = &["cursors", "timeline"];

/// Lifecycle phase of a constructed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Constructed,
    Attached,
    Active,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Constructed => "constructed",
            Self::Attached => "attached",
            Self::Active => "active",
        };
        f.write_str(value)
    }
}

/// Paths and addresses derived from the entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    /// Canonical path of the entry file.
    pub file: PathBuf,
    /// Directory containing the entry file.
    pub path: PathBuf,
    /// Public URL of `path`, with a trailing `/`.
    pub url: String,
    /// Entry file relative to the plugins directory, e.g. `delorean/delorean.php`.
    pub basename: String,
}

/// Bootstrapped plugin instance.
pub struct App {
    entry: EntryDescriptor,
    headers: HeaderRecord,
    debug: bool,
    phase: Phase,
    components: Vec<(&'static str, Box<dyn Component>)>,
}

impl App {
    /// Bootstraps the plugin at `entry_file` with the default loader config.
    pub fn new(entry_file: &str, host: &mut Host) -> AppResult<Self> {
        Self::with_config(entry_file, host, &LoaderConfig::default())
    }

    /// Bootstraps the plugin at `entry_file`.
    ///
    /// # Errors
    /// - [`AppError::InvalidEntryFile`] when the path is empty or does not
    ///   resolve to a readable file.
    /// - [`AppError::Headers`] when the validated file cannot be read back.
    pub fn with_config(
        entry_file: &str,
        host: &mut Host,
        config: &LoaderConfig,
    ) -> AppResult<Self> {
        let file = match validate_entry_file(entry_file) {
            Ok(file) => file,
            Err(err) => {
                error!(
                    "event=app_construct module=app status=error error_code=invalid_entry_file error={}",
                    err
                );
                return Err(err);
            }
        };

        let entry = describe_entry(
            file,
            host.config().plugins_dir.as_path(),
            &host.config().plugins_url,
        );
        let headers =
            extract_headers(&entry.file, &HeaderSchema::plugin()).map_err(AppError::Headers)?;

        let languages = format!("{}/{}", dir_name(&entry.path), config.languages_dir);
        host.load_text_domain(&config.text_domain, &languages);

        host.register_autoloader(Box::new(ComponentResolver::new(&entry.path, config)));

        info!(
            "event=app_construct module=app status=ok basename={} version={}",
            entry.basename,
            headers.get("Version")
        );

        Ok(Self {
            entry,
            headers,
            debug: host.config().debug,
            phase: Phase::Constructed,
            components: Vec::new(),
        })
    }

    pub fn entry(&self) -> &EntryDescriptor {
        &self.entry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Host-wide debug flag captured at construction.
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn version(&self) -> &str {
        self.header("Version")
    }

    /// Returns the header value for `name`, or `""` when absent.
    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name)
    }

    /// Returns the plugin URL, optionally joined with `suffix`.
    ///
    /// Exactly one `/` separates the base URL from `suffix`.
    pub fn url(&self, suffix: &str) -> String {
        let base = trailing_slash(&self.entry.url);
        let suffix = suffix.trim_start_matches(['/', '\\']);
        if suffix.is_empty() {
            base
        } else {
            format!("{base}{suffix}")
        }
    }

    /// Instantiates the attached components through the host.
    ///
    /// # Errors
    /// - [`AppError::OutOfOrder`] unless the app is `Constructed`.
    /// - [`AppError::Component`] when a component cannot be resolved or built;
    ///   the app then stays `Constructed`.
    pub fn attach(&mut self, host: &mut Host) -> AppResult<()> {
        self.expect_phase("attach", Phase::Constructed)?;

        let mut components = Vec::with_capacity(ATTACHMENTS.len());
        for (slot, symbol) in ATTACHMENTS {
            let component = host.instantiate(symbol).map_err(|err| {
                error!(
                    "event=app_attach module=app status=error slot={} symbol={} error={}",
                    slot, symbol, err
                );
                AppError::Component(err)
            })?;
            components.push((*slot, component));
        }

        self.components = components;
        self.phase = Phase::Attached;
        info!(
            "event=app_attach module=app status=ok components={}",
            self.components.len()
        );
        Ok(())
    }

    /// Lets each feature component register its hooks, in [`HOOK_ORDER`].
    ///
    /// # Errors
    /// - [`AppError::OutOfOrder`] unless the app is `Attached`.
    pub fn hooks(&mut self, host: &mut Host) -> AppResult<()> {
        self.expect_phase("hooks", Phase::Attached)?;

        for slot in HOOK_ORDER {
            if let Some((_, component)) = self
                .components
                .iter_mut()
                .find(|(attached, _)| attached == slot)
            {
                component.hooks(host.hooks_mut());
            }
        }

        self.phase = Phase::Active;
        info!(
            "event=app_hooks module=app status=ok actions={}",
            host.hooks().len()
        );
        Ok(())
    }

    /// Returns the component attached under `slot`.
    pub fn component(&self, slot: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|(attached, _)| *attached == slot)
            .map(|(_, component)| &**component)
    }

    /// Runs when the plugin is deactivated. Nothing to clean up yet.
    pub fn deactivate(&self) {
        info!(
            "event=app_deactivate module=app status=ok basename={}",
            self.entry.basename
        );
    }

    fn expect_phase(&self, operation: &'static str, expected: Phase) -> AppResult<()> {
        if self.phase == expected {
            return Ok(());
        }
        error!(
            "event=app_{} module=app status=error error_code=out_of_order phase={}",
            operation, self.phase
        );
        Err(AppError::OutOfOrder {
            operation,
            phase: self.phase,
        })
    }
}

fn validate_entry_file(entry_file: &str) -> AppResult<PathBuf> {
    let invalid = |reason: String| AppError::InvalidEntryFile {
        path: entry_file.to_string(),
        reason,
    };

    if entry_file.trim().is_empty() {
        return Err(invalid("path is empty".to_string()));
    }
    let file = Path::new(entry_file)
        .canonicalize()
        .map_err(|err| invalid(err.to_string()))?;
    if !file.is_file() {
        return Err(invalid("not a regular file".to_string()));
    }
    File::open(&file).map_err(|err| invalid(err.to_string()))?;
    Ok(file)
}

fn describe_entry(file: PathBuf, plugins_dir: &Path, plugins_url: &str) -> EntryDescriptor {
    let path = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));
    let plugins_dir = plugins_dir
        .canonicalize()
        .unwrap_or_else(|_| plugins_dir.to_path_buf());

    let (basename, relative_dir) = match file.strip_prefix(&plugins_dir) {
        Ok(relative) => {
            let relative_dir = relative
                .parent()
                .map(slash_join)
                .unwrap_or_default();
            (slash_join(relative), relative_dir)
        }
        Err(_) => (
            file.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            dir_name(&path),
        ),
    };

    let base = plugins_url.trim_end_matches(['/', '\\']);
    let url = if relative_dir.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{relative_dir}/")
    };

    EntryDescriptor {
        file,
        path,
        url,
        basename,
    }
}

fn slash_join(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn trailing_slash(value: &str) -> String {
    format!("{}/", value.trim_end_matches(['/', '\\']))
}

/// Bootstrap and lifecycle errors.
#[derive(Debug)]
pub enum AppError {
    InvalidEntryFile { path: String, reason: String },
    Headers(HeaderError),
    OutOfOrder { operation: &'static str, phase: Phase },
    Component(HostError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntryFile { path, reason } => {
                write!(f, "invalid plugin file `{path}` supplied to App: {reason}")
            }
            Self::Headers(err) => write!(f, "plugin headers unreadable after validation: {err}"),
            Self::OutOfOrder { operation, phase } => {
                write!(f, "`{operation}` is not allowed while the app is {phase}")
            }
            Self::Component(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Headers(err) => Some(err),
            Self::Component(err) => Some(err),
            Self::InvalidEntryFile { .. } | Self::OutOfOrder { .. } => None,
        }
    }
}
