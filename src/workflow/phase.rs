use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the four-stage widget workflow.
///
/// Phases are strictly ordered. Interactive navigation only ever moves to the
/// adjacent phase; see [`WorkflowPhase::next`] and [`WorkflowPhase::previous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum WorkflowPhase {
    /// Capture the widget goal, audience and data sources
    #[default]
    Analyze,
    /// Define detailed requirements and configuration options
    Specify,
    /// Plan the component structure and state management
    Architect,
    /// Produce the widget code bundle
    Generate,
}

impl WorkflowPhase {
    /// All phases in workflow order
    pub const ALL: [WorkflowPhase; 4] = [
        WorkflowPhase::Analyze,
        WorkflowPhase::Specify,
        WorkflowPhase::Architect,
        WorkflowPhase::Generate,
    ];

    /// Zero-based position of the phase in the workflow
    pub fn index(self) -> usize {
        match self {
            WorkflowPhase::Analyze => 0,
            WorkflowPhase::Specify => 1,
            WorkflowPhase::Architect => 2,
            WorkflowPhase::Generate => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkflowPhase::Analyze => "Analyze",
            WorkflowPhase::Specify => "Specify",
            WorkflowPhase::Architect => "Architect",
            WorkflowPhase::Generate => "Generate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WorkflowPhase::Analyze => "Capture the widget goal, audience, and data sources.",
            WorkflowPhase::Specify => "Define detailed requirements and configuration options.",
            WorkflowPhase::Architect => "Plan the component structure and state management.",
            WorkflowPhase::Generate => "Produce the widget code and implementation assets.",
        }
    }

    /// The phase after this one, or `None` from `Generate`
    pub fn next(self) -> Option<WorkflowPhase> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The phase before this one, or `None` from `Analyze`
    pub fn previous(self) -> Option<WorkflowPhase> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Whether `other` is exactly one step away from `self`
    pub fn is_adjacent(self, other: WorkflowPhase) -> bool {
        self.index().abs_diff(other.index()) == 1
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
