use crate::generator::templates::TemplateRegistry;
use crate::workflow::derive::integration_summary;
use crate::workflow::WorkflowState;

/// Overview of what a generation request will produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Display label, or `Untitled Widget`
    pub label: String,
    /// Widget folder name, or `-` when blank
    pub folder_name: String,
    pub files_to_generate: Vec<&'static str>,
    pub integrations: Vec<&'static str>,
}

impl GenerationSummary {
    pub fn from_state(state: &WorkflowState) -> Self {
        let brief = &state.brief;
        Self {
            label: non_blank_or(&brief.display_label, "Untitled Widget"),
            folder_name: non_blank_or(&brief.name, "-"),
            files_to_generate: TemplateRegistry::file_list(
                state.requirements.settings_config.has_settings,
            )
            .into_iter()
            .map(|kind| kind.path())
            .collect(),
            integrations: integration_summary(&state.architecture),
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
