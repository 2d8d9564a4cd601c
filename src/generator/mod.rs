//! # Generator Module
//!
//! Turns a finished workflow snapshot into the files of an Experience Builder
//! widget.
//!
//! ## Overview
//!
//! ```text
//! WorkflowState → Token Table → Template Rendering → GeneratedFileSet
//! ```
//!
//! 1. **Token Table** - [`compute_tokens`] derives every placeholder value from
//!    the snapshot
//! 2. **Template Rendering** - each template in the [`TemplateRegistry`] is
//!    parsed once into literal and placeholder segments and rendered by lookup
//! 3. **File Set** - [`render_widget`] collects the rendered files in emission
//!    order; [`write_file_set`] writes them to disk
//!
//! ## Generated Structure
//!
//! ```text
//! incident-summary/
//! ├── manifest.json           # Widget descriptor
//! ├── config.ts               # Setting types and defaults
//! ├── runtime/
//! │   └── widget.tsx          # Main component
//! ├── setting/
//! │   └── setting.tsx         # Settings panel (only when the widget has settings)
//! └── translations/
//!     └── default.ts          # Label translations
//! ```
//!
//! ## Placeholders
//!
//! Templates reference values as `{{UPPER_CASE}}`. A placeholder without a
//! value, or a stray `{{` left in template text, fails generation with
//! [`GenerateError::UnresolvedPlaceholder`](crate::error::GenerateError).
//! Substituted values are never re-scanned.
//!
//! ## Template Customization
//!
//! Built-in templates live in `templates/` and are compiled in:
//!
//! - `manifest.json.txt`
//! - `config.ts.txt`
//! - `widget.tsx.txt`
//! - `setting.tsx.txt`
//! - `translation.ts.txt`
//!
//! A directory holding files with the same names overrides them, see
//! [`TemplateRegistry::with_override_dir`].

mod placeholder;
mod project;
mod templates;
mod tokens;
#[cfg(test)]
mod tests;

pub use placeholder::{Segment, Template, TokenTable, OPEN_DELIMITER};
pub use project::*;
pub use templates::{TemplateKind, TemplateRegistry};
pub use tokens::{compute_tokens, default_literal, dependency_list, setting_key, setting_keys};
