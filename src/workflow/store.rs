use tracing::{debug, warn};

use super::derive;
use super::model::{
    FunctionalRequirement, MessageType, SubComponent, TargetUser, UiComponent, WidgetSetting,
    WorkflowState,
};
use super::patch::{ArchitecturePatch, BriefPatch, RequirementsPatch};
use super::phase::WorkflowPhase;

/// Owner of the workflow session state.
///
/// Mutators replace whole records: each update clones the record, merges the
/// change and stores the result. Derived fields are recomputed at two explicit
/// points only: when a phase is entered and when the brief's
/// `map_interaction` is patched.
#[derive(Debug, Clone, Default)]
pub struct WorkflowStore {
    state: WorkflowState,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot handed to derivation and rendering
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn phase(&self) -> WorkflowPhase {
        self.state.phase
    }

    /// Replace the current phase and run its entry hooks.
    ///
    /// Jumps to a non-adjacent phase are applied but logged; callers that want
    /// strict navigation use [`advance`](Self::advance) and
    /// [`retreat`](Self::retreat).
    pub fn set_phase(&mut self, phase: WorkflowPhase) {
        let from = self.state.phase;
        if from != phase && !from.is_adjacent(phase) {
            warn!(%from, to = %phase, "non-adjacent phase change");
        }
        self.state.phase = phase;
        debug!(%from, to = %phase, "phase changed");
        self.on_enter(phase);
    }

    /// Move one phase forward. Returns `false` when already at the last phase.
    pub fn advance(&mut self) -> bool {
        match self.state.phase.next() {
            Some(next) => {
                self.set_phase(next);
                true
            }
            None => false,
        }
    }

    /// Move one phase back. Returns `false` when already at the first phase.
    pub fn retreat(&mut self) -> bool {
        match self.state.phase.previous() {
            Some(previous) => {
                self.set_phase(previous);
                true
            }
            None => false,
        }
    }

    fn on_enter(&mut self, phase: WorkflowPhase) {
        match phase {
            WorkflowPhase::Specify => {
                self.state.requirements =
                    derive::fill_requirements_once(&self.state.brief, &self.state.requirements);
            }
            WorkflowPhase::Architect => {
                let arch =
                    derive::initialize_architecture_once(&self.state.brief, &self.state.architecture);
                self.state.architecture = derive::refresh_required_modules(&self.state.brief, &arch);
            }
            WorkflowPhase::Analyze | WorkflowPhase::Generate => {}
        }
    }

    pub fn update_brief(&mut self, patch: BriefPatch) {
        let refresh_modules = patch.touches_map_interaction();
        let mut brief = self.state.brief.clone();
        patch.apply(&mut brief);
        self.state.brief = brief;
        if refresh_modules {
            self.state.architecture =
                derive::refresh_required_modules(&self.state.brief, &self.state.architecture);
        }
    }

    pub fn update_requirements(&mut self, patch: RequirementsPatch) {
        let mut doc = self.state.requirements.clone();
        patch.apply(&mut doc);
        self.state.requirements = doc;
    }

    pub fn update_architecture(&mut self, patch: ArchitecturePatch) {
        let mut arch = self.state.architecture.clone();
        patch.apply(&mut arch);
        self.state.architecture = arch;
    }

    /// Turn the settings page on or off. Turning it off discards the settings.
    pub fn set_has_settings(&mut self, enabled: bool) {
        let mut doc = self.state.requirements.clone();
        doc.settings_config.has_settings = enabled;
        if !enabled {
            doc.settings_config.settings.clear();
        }
        self.state.requirements = doc;
    }

    pub fn add_requirement(&mut self, requirement: FunctionalRequirement) {
        let mut doc = self.state.requirements.clone();
        doc.functional_requirements.push(requirement);
        self.state.requirements = doc;
    }

    /// Replace the requirement at `index`. Returns `false` if out of range.
    pub fn update_requirement(&mut self, index: usize, requirement: FunctionalRequirement) -> bool {
        let mut doc = self.state.requirements.clone();
        if !replace_at(&mut doc.functional_requirements, index, requirement) {
            return false;
        }
        self.state.requirements = doc;
        true
    }

    pub fn remove_requirement(&mut self, index: usize) -> bool {
        let mut doc = self.state.requirements.clone();
        if !remove_at(&mut doc.functional_requirements, index) {
            return false;
        }
        self.state.requirements = doc;
        true
    }

    pub fn add_setting(&mut self, setting: WidgetSetting) {
        let mut doc = self.state.requirements.clone();
        doc.settings_config.settings.push(setting);
        self.state.requirements = doc;
    }

    pub fn update_setting(&mut self, index: usize, setting: WidgetSetting) -> bool {
        let mut doc = self.state.requirements.clone();
        if !replace_at(&mut doc.settings_config.settings, index, setting) {
            return false;
        }
        self.state.requirements = doc;
        true
    }

    pub fn remove_setting(&mut self, index: usize) -> bool {
        let mut doc = self.state.requirements.clone();
        if !remove_at(&mut doc.settings_config.settings, index) {
            return false;
        }
        self.state.requirements = doc;
        true
    }

    pub fn add_sub_component(&mut self, component: SubComponent) {
        let mut arch = self.state.architecture.clone();
        arch.sub_components.push(component);
        self.state.architecture = arch;
    }

    pub fn update_sub_component(&mut self, index: usize, component: SubComponent) -> bool {
        let mut arch = self.state.architecture.clone();
        if !replace_at(&mut arch.sub_components, index, component) {
            return false;
        }
        self.state.architecture = arch;
        true
    }

    pub fn remove_sub_component(&mut self, index: usize) -> bool {
        let mut arch = self.state.architecture.clone();
        if !remove_at(&mut arch.sub_components, index) {
            return false;
        }
        self.state.architecture = arch;
        true
    }

    pub fn toggle_target_user(&mut self, user: TargetUser) {
        let mut brief = self.state.brief.clone();
        toggle(&mut brief.target_users, user);
        self.state.brief = brief;
    }

    pub fn toggle_preferred_component(&mut self, component: UiComponent) {
        let mut doc = self.state.requirements.clone();
        toggle(&mut doc.ui_requirements.preferred_components, component);
        self.state.requirements = doc;
    }

    pub fn toggle_message_type(&mut self, message: MessageType) {
        let mut arch = self.state.architecture.clone();
        toggle(&mut arch.jimu_integration.message_types, message);
        self.state.architecture = arch;
    }

    pub fn toggle_additional_module(&mut self, module: impl Into<String>) {
        let mut arch = self.state.architecture.clone();
        toggle(&mut arch.dependencies.additional_modules, module.into());
        self.state.architecture = arch;
    }
}

fn replace_at<T>(items: &mut [T], index: usize, value: T) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

/// Remove `value` if present, otherwise append it
fn toggle<T: PartialEq>(items: &mut Vec<T>, value: T) {
    if let Some(pos) = items.iter().position(|item| *item == value) {
        items.remove(pos);
    } else {
        items.push(value);
    }
}
