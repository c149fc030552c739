//! # CLI Configuration
//!
//! Optional YAML file supplying default normalization options and the
//! output format:
//!
//! ```yaml
//! defaults:
//!   remove_formatters: true
//!   pad: false
//! format: json
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use brdoc_validator::ValidationOptions;

/// How verdicts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per verdict.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Normalization options applied unless overridden by flags.
    #[serde(default)]
    pub defaults: ValidationOptions,
    /// Output format applied unless `--format` is given.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Load the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Load `path` if given, otherwise use built-in defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

/// Normalization flags shared by the validation subcommands.
///
/// Each option has a flag pair so either direction of a configured default
/// can be reversed. When both flags of a pair are given, the last one wins.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct NormalizeFlags {
    /// Do not strip formatting characters such as `.`, `/` and `-`.
    #[arg(long, overrides_with = "strip_formatters")]
    pub keep_formatters: bool,

    /// Strip formatting characters before validating.
    #[arg(long, overrides_with = "keep_formatters")]
    pub strip_formatters: bool,

    /// Left-pad short input with zeros before validating.
    #[arg(long, overrides_with = "no_pad")]
    pub pad: bool,

    /// Do not pad short input.
    #[arg(long, overrides_with = "pad")]
    pub no_pad: bool,
}

impl NormalizeFlags {
    /// Requested `remove_formatters`, or `None` when neither flag was given.
    pub fn remove_formatters(self) -> Option<bool> {
        resolve_pair(self.strip_formatters, self.keep_formatters)
    }

    /// Requested `pad`, or `None` when neither flag was given.
    pub fn pad(self) -> Option<bool> {
        resolve_pair(self.pad, self.no_pad)
    }

    /// Apply these flags over the configured defaults.
    pub fn apply(self, defaults: ValidationOptions) -> ValidationOptions {
        let mut options = defaults;
        if let Some(remove) = self.remove_formatters() {
            options = options.with_remove_formatters(remove);
        }
        if let Some(pad) = self.pad() {
            options = options.with_pad(pad);
        }
        options
    }
}

fn resolve_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Configured normalization defaults, before per-command flags.
    pub defaults: ValidationOptions,
    /// Output format.
    pub format: OutputFormat,
}

impl Settings {
    /// Merge the configuration file with the global `--format` flag.
    pub fn resolve(config: CliConfig, format: Option<OutputFormat>) -> Self {
        Self {
            defaults: config.defaults,
            format: format.or(config.format).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = CliConfig::load_optional(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.defaults.remove_formatters);
        assert!(!config.defaults.pad);
    }

    #[test]
    fn full_config_parses() {
        let file =
            write_config("defaults:\n  remove_formatters: false\n  pad: true\nformat: json\n");
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.defaults, ValidationOptions::new(false, true));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn partial_config_keeps_field_defaults() {
        let file = write_config("defaults:\n  pad: true\n");
        let config = CliConfig::load(file.path()).unwrap();
        assert!(config.defaults.remove_formatters);
        assert!(config.defaults.pad);
        assert_eq!(config.format, None);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config("format: text\ncolour: true\n");
        assert!(CliConfig::load(file.path()).is_err());
    }

    #[test]
    fn unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn flags_override_defaults() {
        let defaults = ValidationOptions::new(true, false);
        let none = NormalizeFlags::default();
        assert_eq!(none.remove_formatters(), None);
        assert_eq!(none.pad(), None);
        assert_eq!(none.apply(defaults), defaults);

        let flags = NormalizeFlags {
            keep_formatters: true,
            pad: true,
            ..NormalizeFlags::default()
        };
        assert_eq!(flags.apply(defaults), ValidationOptions::new(false, true));
    }

    #[test]
    fn flags_reverse_config_in_both_directions() {
        let configured = ValidationOptions::new(false, true);
        let flags = NormalizeFlags {
            strip_formatters: true,
            no_pad: true,
            ..NormalizeFlags::default()
        };
        assert_eq!(flags.remove_formatters(), Some(true));
        assert_eq!(flags.pad(), Some(false));
        assert_eq!(flags.apply(configured), ValidationOptions::new(true, false));
    }

    #[test]
    fn config_file_value_reversed_by_flag() {
        let file = write_config("defaults:\n  remove_formatters: false\n  pad: true\n");
        let settings = Settings::resolve(CliConfig::load(file.path()).unwrap(), None);
        assert_eq!(settings.defaults, ValidationOptions::new(false, true));

        let no_pad = NormalizeFlags {
            no_pad: true,
            ..NormalizeFlags::default()
        };
        assert_eq!(no_pad.apply(settings.defaults), ValidationOptions::new(false, false));

        let strip = NormalizeFlags {
            strip_formatters: true,
            ..NormalizeFlags::default()
        };
        assert_eq!(strip.apply(settings.defaults), ValidationOptions::new(true, true));
    }

    #[test]
    fn format_flag_beats_config() {
        let config = CliConfig {
            format: Some(OutputFormat::Json),
            ..CliConfig::default()
        };
        assert_eq!(Settings::resolve(config.clone(), None).format, OutputFormat::Json);
        assert_eq!(
            Settings::resolve(config, Some(OutputFormat::Text)).format,
            OutputFormat::Text
        );
        assert_eq!(
            Settings::resolve(CliConfig::default(), None).format,
            OutputFormat::Text
        );
    }
}
