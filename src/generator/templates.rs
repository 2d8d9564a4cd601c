use anyhow::Context;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::info;

use super::placeholder::Template;

/// The files a widget bundle can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateKind {
    /// Widget manifest descriptor
    Manifest,
    /// Setting types and defaults
    Config,
    /// Main runtime component
    Widget,
    /// Translation strings for the default locale
    Translation,
    /// Settings panel, only emitted when the widget has settings
    Setting,
}

impl TemplateKind {
    /// All kinds in emission order
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Manifest,
        TemplateKind::Config,
        TemplateKind::Widget,
        TemplateKind::Translation,
        TemplateKind::Setting,
    ];

    /// Path of the generated file inside the widget folder
    pub fn path(self) -> &'static str {
        match self {
            TemplateKind::Manifest => "manifest.json",
            TemplateKind::Config => "config.ts",
            TemplateKind::Widget => "runtime/widget.tsx",
            TemplateKind::Translation => "translations/default.ts",
            TemplateKind::Setting => "setting/setting.tsx",
        }
    }

    /// File name of the template in the `templates/` directory and in
    /// override directories
    pub fn template_file_name(self) -> &'static str {
        match self {
            TemplateKind::Manifest => "manifest.json.txt",
            TemplateKind::Config => "config.ts.txt",
            TemplateKind::Widget => "widget.tsx.txt",
            TemplateKind::Translation => "translation.ts.txt",
            TemplateKind::Setting => "setting.tsx.txt",
        }
    }

    fn builtin_source(self) -> &'static str {
        match self {
            TemplateKind::Manifest => include_str!("../../templates/manifest.json.txt"),
            TemplateKind::Config => include_str!("../../templates/config.ts.txt"),
            TemplateKind::Widget => include_str!("../../templates/widget.tsx.txt"),
            TemplateKind::Translation => include_str!("../../templates/translation.ts.txt"),
            TemplateKind::Setting => include_str!("../../templates/setting.tsx.txt"),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Fixed set of parsed widget templates.
///
/// Built-in templates are compiled into the binary. Individual templates can
/// be replaced with [`with_override`](Self::with_override) or loaded from a
/// directory with [`with_override_dir`](Self::with_override_dir).
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<TemplateKind, Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    pub fn builtin() -> Self {
        let templates = TemplateKind::ALL
            .into_iter()
            .map(|kind| (kind, Template::parse(kind.builtin_source())))
            .collect();
        Self { templates }
    }

    /// Files emitted for a widget, in order. The settings panel is included
    /// iff `has_settings`.
    pub fn file_list(has_settings: bool) -> Vec<TemplateKind> {
        TemplateKind::ALL
            .into_iter()
            .filter(|kind| has_settings || *kind != TemplateKind::Setting)
            .collect()
    }

    pub fn get(&self, kind: TemplateKind) -> Option<&Template> {
        self.templates.get(&kind)
    }

    /// Replace one template with `source`
    pub fn with_override(mut self, kind: TemplateKind, source: &str) -> Self {
        self.templates.insert(kind, Template::parse(source));
        self
    }

    /// Replace every template that has a file of the same name in `dir`.
    ///
    /// Templates without a matching file keep their current body. A missing
    /// directory is an error; a missing individual file is not.
    pub fn with_override_dir(mut self, dir: &Path) -> anyhow::Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!("Template override directory not found: {}", dir.display());
        }
        for kind in TemplateKind::ALL {
            let path = dir.join(kind.template_file_name());
            if !path.exists() {
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template override: {}", path.display()))?;
            info!(template = %kind, path = %path.display(), "using template override");
            self.templates.insert(kind, Template::parse(&source));
        }
        Ok(self)
    }
}
