//! # Workflow Module
//!
//! Ordered questionnaire state and the rules that derive defaults from it.
//!
//! ## Overview
//!
//! A widget is described in four phases:
//!
//! ```text
//! Analyze → Specify → Architect → Generate
//! ```
//!
//! - **Analyze** fills the [`Brief`]
//! - **Specify** fills the [`RequirementsDoc`]; entering it offers suggested
//!   requirements once
//! - **Architect** fills the [`Architecture`]; entering it derives the main
//!   component name, integration flags and required modules
//! - **Generate** hands a [`WorkflowState`] snapshot to the generator
//!
//! [`WorkflowStore`] owns the state. Derivation lives in [`derive`] as pure
//! functions the store calls at well-defined points.

mod answers;
pub mod derive;
mod model;
mod patch;
mod phase;
mod store;

pub use answers::{load_answers, Answers};
pub use model::*;
pub use patch::*;
pub use phase::WorkflowPhase;
pub use store::WorkflowStore;
