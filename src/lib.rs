//! # widgetforge
//!
//! **widgetforge** turns the answers of a four-phase questionnaire into the
//! source files of an ArcGIS Experience Builder custom widget, and packages
//! them as a zip archive ready to drop into `client/your-extensions/widgets/`.
//!
//! ## Architecture
//!
//! - **[`workflow`]** - phase state machine, questionnaire records, derived
//!   defaults and the answers-file replay
//! - **[`generator`]** - `{{TOKEN}}` templates, token computation and the
//!   file-set renderer
//! - **[`package`]** - zip packaging and the single-run packaging gate
//! - **[`session`]** - one store + its latest render + packaging
//! - **[`config`]** - optional `widgetforge.toml` (template overrides, output)
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - typed render and packaging errors
//! - **[`cli`]** - the `widgetforge` command line
//!
//! ### Generation Flow
//!
//! ```text
//! answers.yaml ──► Answers::replay ──► WorkflowStore (phase = Generate)
//!                                            │
//!                    compute_tokens ◄────────┘
//!                          │
//!  TemplateRegistry ──► render_widget ──► GeneratedFileSet ──► ZipPackager ──► <name>.zip
//!                                                │
//!                                                └──► write_file_set ──► <output>/<name>/
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use widgetforge::generator::{render_widget, TemplateRegistry};
//! use widgetforge::workflow::{BriefPatch, WorkflowStore};
//!
//! let mut store = WorkflowStore::new();
//! store.update_brief(BriefPatch {
//!     name: Some("incident-summary".into()),
//!     ..Default::default()
//! });
//! let files = render_widget(store.state(), &TemplateRegistry::builtin())?;
//! assert!(files.contains("manifest.json"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod package;
pub mod session;
pub mod workflow;

pub use error::{GenerateError, PackageError};
pub use session::{Archive, Session};
