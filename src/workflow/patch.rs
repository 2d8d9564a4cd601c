//! Partial updates merged into the workflow records.
//!
//! Every field is optional: `None` leaves the stored value untouched. Nested
//! groups merge one level deep, so patching `jimu_integration.uses_map_view`
//! keeps the other integration flags as they were.
//!
//! `Option<Option<T>>` fields distinguish "leave alone" (`None`) from "set"
//! (`Some(value)`), where `Some(None)` clears an optional answer. Answers files
//! can only set such fields; a YAML `null` reads as "leave alone".

use serde::Deserialize;

use super::model::{
    Architecture, Brief, DataBindings, DataSource, Dependencies, FunctionalRequirement,
    JimuIntegration, MapInteraction, MessageType, RequirementsDoc, SettingsConfig,
    StateManagement, SubComponent, TargetUser, UiComponent, UiRequirements, WidgetSetting,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BriefPatch {
    pub name: Option<String>,
    pub display_label: Option<String>,
    pub description: Option<String>,
    pub purpose: Option<String>,
    pub target_users: Option<Vec<TargetUser>>,
    pub map_interaction: Option<Option<MapInteraction>>,
    pub data_source: Option<Option<DataSource>>,
    pub key_features: Option<String>,
}

impl BriefPatch {
    /// Whether applying this patch may change `map_interaction`
    pub fn touches_map_interaction(&self) -> bool {
        self.map_interaction.is_some()
    }

    pub fn apply(self, brief: &mut Brief) {
        if let Some(v) = self.name {
            brief.name = v;
        }
        if let Some(v) = self.display_label {
            brief.display_label = v;
        }
        if let Some(v) = self.description {
            brief.description = v;
        }
        if let Some(v) = self.purpose {
            brief.purpose = v;
        }
        if let Some(v) = self.target_users {
            brief.target_users = dedup_first_seen(v);
        }
        if let Some(v) = self.map_interaction {
            brief.map_interaction = v;
        }
        if let Some(v) = self.data_source {
            brief.data_source = v;
        }
        if let Some(v) = self.key_features {
            brief.key_features = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfigPatch {
    pub has_settings: Option<bool>,
    pub settings: Option<Vec<WidgetSetting>>,
}

impl SettingsConfigPatch {
    fn apply(self, config: &mut SettingsConfig) {
        if let Some(v) = self.has_settings {
            config.has_settings = v;
        }
        if let Some(v) = self.settings {
            config.settings = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataBindingsPatch {
    pub requires_layer_selection: Option<bool>,
    pub requires_field_selection: Option<bool>,
    pub supports_multiple_sources: Option<bool>,
}

impl DataBindingsPatch {
    fn apply(self, bindings: &mut DataBindings) {
        if let Some(v) = self.requires_layer_selection {
            bindings.requires_layer_selection = v;
        }
        if let Some(v) = self.requires_field_selection {
            bindings.requires_field_selection = v;
        }
        if let Some(v) = self.supports_multiple_sources {
            bindings.supports_multiple_sources = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiRequirementsPatch {
    pub preferred_components: Option<Vec<UiComponent>>,
    pub custom_styling: Option<bool>,
}

impl UiRequirementsPatch {
    fn apply(self, ui: &mut UiRequirements) {
        if let Some(v) = self.preferred_components {
            ui.preferred_components = dedup_first_seen(v);
        }
        if let Some(v) = self.custom_styling {
            ui.custom_styling = v;
        }
    }
}

/// Partial update of the requirements doc.
///
/// `requirements_initialized` is deliberately absent: only the derivation
/// hook sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequirementsPatch {
    pub functional_requirements: Option<Vec<FunctionalRequirement>>,
    pub settings_config: Option<SettingsConfigPatch>,
    pub data_bindings: Option<DataBindingsPatch>,
    pub ui_requirements: Option<UiRequirementsPatch>,
}

impl RequirementsPatch {
    pub fn apply(self, doc: &mut RequirementsDoc) {
        if let Some(v) = self.functional_requirements {
            doc.functional_requirements = v;
        }
        if let Some(p) = self.settings_config {
            p.apply(&mut doc.settings_config);
        }
        if let Some(p) = self.data_bindings {
            p.apply(&mut doc.data_bindings);
        }
        if let Some(p) = self.ui_requirements {
            p.apply(&mut doc.ui_requirements);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JimuIntegrationPatch {
    pub uses_map_view: Option<bool>,
    pub uses_data_source_component: Option<bool>,
    pub publishes_messages: Option<bool>,
    pub subscribes_messages: Option<bool>,
    pub message_types: Option<Vec<MessageType>>,
}

impl JimuIntegrationPatch {
    fn apply(self, integration: &mut JimuIntegration) {
        if let Some(v) = self.uses_map_view {
            integration.uses_map_view = v;
        }
        if let Some(v) = self.uses_data_source_component {
            integration.uses_data_source_component = v;
        }
        if let Some(v) = self.publishes_messages {
            integration.publishes_messages = v;
        }
        if let Some(v) = self.subscribes_messages {
            integration.subscribes_messages = v;
        }
        if let Some(v) = self.message_types {
            integration.message_types = dedup_first_seen(v);
        }
    }
}

/// Only the user-chosen extras are patchable; required modules are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependenciesPatch {
    pub additional_modules: Option<Vec<String>>,
}

impl DependenciesPatch {
    fn apply(self, deps: &mut Dependencies) {
        if let Some(v) = self.additional_modules {
            deps.additional_modules = dedup_first_seen(v);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchitecturePatch {
    pub main_component_name: Option<String>,
    pub state_management: Option<StateManagement>,
    pub sub_components: Option<Vec<SubComponent>>,
    pub jimu_integration: Option<JimuIntegrationPatch>,
    pub dependencies: Option<DependenciesPatch>,
}

impl ArchitecturePatch {
    pub fn apply(self, arch: &mut Architecture) {
        if let Some(v) = self.main_component_name {
            arch.main_component_name = v;
        }
        if let Some(v) = self.state_management {
            arch.state_management = v;
        }
        if let Some(v) = self.sub_components {
            arch.sub_components = v;
        }
        if let Some(p) = self.jimu_integration {
            p.apply(&mut arch.jimu_integration);
        }
        if let Some(p) = self.dependencies {
            p.apply(&mut arch.dependencies);
        }
    }
}

/// Multi-select answers are sets; keep the first occurrence of each value.
fn dedup_first_seen<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}
