//! Generator configuration
//!
//! An optional `widgetforge.toml` next to the answers file (or passed with
//! `--config`) customises templates and output defaults:
//!
//! ```toml
//! [templates]
//! dir = "my-templates"     # overrides, relative to this file
//!
//! [output]
//! dir = "dist"             # where files or the archive go
//! archive = true           # write a .zip instead of a directory
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::generator::TemplateRegistry;

/// File name looked up next to the answers file
pub const CONFIG_FILE_NAME: &str = "widgetforge.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub templates: TemplatesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory of template overrides
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory used when `--output` is not given
    pub dir: Option<PathBuf>,
    /// Write a zip archive instead of a directory tree
    pub archive: bool,
}

impl GeneratorConfig {
    /// Built-in templates with any configured overrides applied
    pub fn template_registry(&self) -> anyhow::Result<TemplateRegistry> {
        let registry = TemplateRegistry::builtin();
        match &self.templates.dir {
            Some(dir) => registry.with_override_dir(dir),
            None => Ok(registry),
        }
    }

    /// Resolve relative paths against `base`, the directory of the config file
    fn rebase(mut self, base: &Path) -> Self {
        if let Some(dir) = self.templates.dir.take() {
            self.templates.dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
        }
        if let Some(dir) = self.output.dir.take() {
            self.output.dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
        }
        self
    }
}

/// Load a configuration file
///
/// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
/// can't be read or parsed.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    Ok(Some(config.rebase(base)))
}

/// Look for `widgetforge.toml` in the same directory as the answers file
pub fn auto_detect_config_path(answers_path: &Path) -> Option<PathBuf> {
    let config_path = answers_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected alongside the answers file
/// 3. None (defaults)
pub fn resolve_config_path(explicit_path: Option<&Path>, answers_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    auto_detect_config_path(answers_path)
}

/// Load the resolved config, falling back to defaults when there is none.
///
/// An explicitly given config path must exist.
pub fn load_resolved_config(
    explicit_path: Option<&Path>,
    answers_path: &Path,
) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = resolve_config_path(explicit_path, answers_path) else {
        return Ok(GeneratorConfig::default());
    };
    match load_config(&path)? {
        Some(config) => Ok(config),
        None if explicit_path.is_some() => {
            anyhow::bail!("Config file not found: {}", path.display())
        }
        None => Ok(GeneratorConfig::default()),
    }
}
