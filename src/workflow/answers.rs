//! Questionnaire answers read from a file and replayed through the workflow.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::patch::{ArchitecturePatch, BriefPatch, RequirementsPatch};
use super::store::WorkflowStore;

/// Answers for all three questionnaire pages.
///
/// Each section is applied while its phase is current, so derivations see the
/// same ordering as an interactive session: requirements are suggested from
/// the brief before the requirements answers are merged, and architecture
/// defaults are derived before the architecture answers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    pub brief: BriefPatch,
    pub requirements: RequirementsPatch,
    pub architecture: ArchitecturePatch,
}

impl Answers {
    /// Parse answers as YAML
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parse answers as JSON
    pub fn from_json(source: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Walk Analyze → Specify → Architect → Generate, merging each section
    /// while its phase is current.
    pub fn replay(self) -> WorkflowStore {
        let mut store = WorkflowStore::new();
        store.update_brief(self.brief);
        store.advance();
        store.update_requirements(self.requirements);
        store.advance();
        store.update_architecture(self.architecture);
        store.advance();
        store
    }
}

/// Load an answers file; `.yaml`/`.yml` are read as YAML, anything else as JSON.
pub fn load_answers(path: &Path) -> anyhow::Result<Answers> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let answers = if is_yaml {
        Answers::from_yaml(&content)
    } else {
        Answers::from_json(&content)
    }
    .with_context(|| format!("Failed to parse answers file: {}", path.display()))?;
    info!(path = %path.display(), "loaded answers");
    Ok(answers)
}
