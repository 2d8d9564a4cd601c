use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::generator::templates::TemplateRegistry;
use crate::generator::tokens::compute_tokens;
use crate::error::GenerateError;
use crate::workflow::WorkflowState;

/// One rendered file of the widget bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path inside the widget folder, `/`-separated
    pub path: String,
    pub contents: String,
}

impl GeneratedFile {
    /// Size of the contents encoded as UTF-8
    pub fn size(&self) -> usize {
        self.contents.len()
    }
}

/// Rendered widget bundle: file path → text, in emission order.
///
/// Produced fresh by every generation request and held only in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFileSet {
    files: Vec<GeneratedFile>,
}

impl GeneratedFileSet {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.contents.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeneratedFileSet {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Render the widget bundle for `state`.
///
/// The file list comes from [`TemplateRegistry::file_list`]; the settings
/// panel is rendered iff the widget has settings. Any unresolved placeholder
/// or empty template fails the whole render.
pub fn render_widget(
    state: &WorkflowState,
    registry: &TemplateRegistry,
) -> Result<GeneratedFileSet, GenerateError> {
    let tokens = compute_tokens(state);
    let has_settings = state.requirements.settings_config.has_settings;

    let mut files = Vec::new();
    for kind in TemplateRegistry::file_list(has_settings) {
        let path = kind.path();
        let template = registry
            .get(kind)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GenerateError::EmptyTemplate {
                file: path.to_string(),
            })?;
        let contents = template.render(path, &tokens)?;
        files.push(GeneratedFile {
            path: path.to_string(),
            contents,
        });
    }

    info!(
        widget = %state.brief.name,
        files = files.len(),
        has_settings,
        "rendered widget"
    );
    Ok(GeneratedFileSet { files })
}

/// Outcome of writing a file set to disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// Existing files left untouched because `force` was not set
    pub skipped: Vec<PathBuf>,
}

/// Write every file under `base_dir`, creating subdirectories as needed.
///
/// Existing files are skipped unless `force` is set. With `dry_run` nothing
/// is written and the report lists what would have been.
pub fn write_file_set(
    files: &GeneratedFileSet,
    base_dir: &Path,
    force: bool,
    dry_run: bool,
) -> anyhow::Result<WriteReport> {
    let mut report = WriteReport::default();
    for file in files {
        let target = base_dir.join(&file.path);
        if target.exists() && !force {
            warn!(path = %target.display(), "skipping existing file (use --force to overwrite)");
            report.skipped.push(target);
            continue;
        }
        if dry_run {
            info!(path = %target.display(), bytes = file.size(), "would write");
            report.written.push(target);
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&target, &file.contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        info!(path = %target.display(), bytes = file.size(), "generated file");
        report.written.push(target);
    }
    Ok(report)
}
