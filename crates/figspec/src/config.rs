//! Configuration system for figspec.
//!
//! Loads config from:
//! 1. Global: ~/.config/figspec/config.toml
//! 2. Per-project: .figspec/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [generate]
//! type_name = "Fig.Spec"   # declared type of the exported constant
//! skip_help = false        # drop --help flags from generated specs
//!
//! [log]
//! level = "warn"           # default log filter (RUST_LOG overrides)
//! ```

use crate::merge::Merge;
use figspec_schema::DEFAULT_TYPE_NAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Script generation defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Declared type of the exported constant. Default: Fig.Spec
    pub type_name: Option<String>,
    /// Drop the parser's --help flag from every command. Default: false
    pub skip_help: Option<bool>,
}

impl GenerateConfig {
    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or(DEFAULT_TYPE_NAME)
    }

    pub fn skip_help(&self) -> bool {
        self.skip_help.unwrap_or(false)
    }
}

impl Merge for GenerateConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            type_name: self.type_name.merge(other.type_name),
            skip_help: self.skip_help.merge(other.skip_help),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log filter directive. Default: warn
    pub level: Option<String>,
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }
}

impl Merge for LogConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            level: self.level.merge(other.level),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FigspecConfig {
    pub generate: GenerateConfig,
    pub log: LogConfig,
}

impl Merge for FigspecConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            generate: self.generate.merge(other.generate),
            log: self.log.merge(other.log),
        }
    }
}

impl FigspecConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/figspec/config.toml,
    /// then merges with per-project config from .figspec/config.toml.
    pub fn load(root: &Path) -> Self {
        Self::load_layers(Self::global_config_path().as_deref(), root)
    }

    /// Load from an explicit global config path (if any) plus the project at `root`.
    pub fn load_layers(global_path: Option<&Path>, root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global_path.and_then(Self::load_file) {
            config = config.merge(global);
        }

        let project_path = root.join(".figspec").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("figspec").join("config.toml"))
    }

    /// Load config from a file path. Missing files are silently skipped.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }
}
