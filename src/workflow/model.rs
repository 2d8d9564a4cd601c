//! Questionnaire records owned by the workflow store.
//!
//! Closed answer sets are modelled as enums that serialize to the exact labels
//! shown in the questionnaire, so answers files can use the human wording.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::derive;
use super::phase::WorkflowPhase;

/// Declares a closed answer set whose variants serialize as display labels.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $label)] $variant,)+
        }

        impl $name {
            /// Every value in questionnaire order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The label shown to users and used in answers files
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Look a value up by its label, ignoring surrounding whitespace
            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum! {
    /// Audience the widget is built for
    pub enum TargetUser {
        GisAnalysts => "GIS Analysts",
        FieldWorkers => "Field Workers",
        PublicCitizens => "Public/Citizens",
        ManagersExecutives => "Managers/Executives",
        Developers => "Developers",
    }
}

labelled_enum! {
    /// How users interact with the map through the widget
    pub enum MapInteraction {
        ClickToSelect => "Click to select features",
        DrawGeometry => "Draw geometry",
        ViewOnly => "View only (no interaction)",
        HoverToHighlight => "Hover to highlight",
        FilterByExtent => "Filter by map extent",
    }
}

labelled_enum! {
    pub enum DataSource {
        FeatureLayer => "Feature Layer",
        WebMap => "Web Map",
        CsvGeoJson => "CSV/GeoJSON",
        NoDataSource => "No data source",
    }
}

labelled_enum! {
    #[derive(Default)]
    pub enum RequirementPriority {
        High => "High",
        #[default]
        Medium => "Medium",
        Low => "Low",
    }
}

labelled_enum! {
    /// Value type of a configurable widget setting
    #[derive(Default)]
    pub enum SettingType {
        #[default]
        Text => "text",
        Number => "number",
        Boolean => "boolean",
        LayerSelector => "layer-selector",
        FieldSelector => "field-selector",
    }
}

labelled_enum! {
    /// UI building blocks the widget should prefer
    pub enum UiComponent {
        Card => "Card",
        Panel => "Panel",
        List => "List",
        Table => "Table",
        Button => "Button",
        Modal => "Modal",
        Tabs => "Tabs",
    }
}

labelled_enum! {
    #[derive(Default)]
    pub enum StateManagement {
        #[default]
        LocalState => "Local React state (useState/useReducer)",
        ZustandStore => "Zustand store",
        Redux => "Redux (jimu-core)",
    }
}

labelled_enum! {
    /// Framework message kinds a widget can publish or subscribe to
    pub enum MessageType {
        ExtentChange => "EXTENT_CHANGE",
        DataRecordsSelectionChange => "DATA_RECORDS_SELECTION_CHANGE",
        DataRecordSetChange => "DATA_RECORD_SET_CHANGE",
        MapClick => "MAP_CLICK",
        WidgetStateChange => "WIDGET_STATE_CHANGE",
    }
}

/// Initial descriptive record of the desired widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brief {
    /// Folder name of the widget, e.g. `incident-summary`
    pub name: String,
    pub display_label: String,
    pub description: String,
    pub purpose: String,
    pub target_users: Vec<TargetUser>,
    pub map_interaction: Option<MapInteraction>,
    pub data_source: Option<DataSource>,
    pub key_features: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionalRequirement {
    pub description: String,
    pub priority: RequirementPriority,
}

impl FunctionalRequirement {
    pub fn new(description: impl Into<String>, priority: RequirementPriority) -> Self {
        Self {
            description: description.into(),
            priority,
        }
    }
}

/// One configurable value exposed on the widget's settings page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSetting {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SettingType,
    /// Literal default; blank means "use the type's default"
    pub default_value: String,
}

impl WidgetSetting {
    pub fn new(name: impl Into<String>, kind: SettingType, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            default_value: default_value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub has_settings: bool,
    pub settings: Vec<WidgetSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBindings {
    pub requires_layer_selection: bool,
    pub requires_field_selection: bool,
    pub supports_multiple_sources: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiRequirements {
    pub preferred_components: Vec<UiComponent>,
    pub custom_styling: bool,
}

/// Detailed requirements derived from the brief.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsDoc {
    pub functional_requirements: Vec<FunctionalRequirement>,
    pub settings_config: SettingsConfig,
    pub data_bindings: DataBindings,
    pub ui_requirements: UiRequirements,
    /// Set once the suggested requirements have been offered; never reset
    pub requirements_initialized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubComponent {
    pub name: String,
    pub purpose: String,
}

impl SubComponent {
    pub fn new(name: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JimuIntegration {
    pub uses_map_view: bool,
    pub uses_data_source_component: bool,
    pub publishes_messages: bool,
    pub subscribes_messages: bool,
    pub message_types: Vec<MessageType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependencies {
    /// Always derived from the brief; see [`derive::required_modules`]
    pub required_modules: Vec<String>,
    /// User-chosen extras, merged after the required modules at render time
    pub additional_modules: Vec<String>,
}

impl Default for Dependencies {
    fn default() -> Self {
        Self {
            required_modules: derive::required_modules(false),
            additional_modules: Vec::new(),
        }
    }
}

/// Structural and integration plan of the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Architecture {
    pub main_component_name: String,
    pub state_management: StateManagement,
    pub sub_components: Vec<SubComponent>,
    pub jimu_integration: JimuIntegration,
    pub dependencies: Dependencies,
    /// Set once the architecture defaults have been derived from the brief
    pub architecture_initialized: bool,
}

/// Snapshot of one workflow session, handed to the pure derivation and
/// rendering functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowState {
    pub phase: WorkflowPhase,
    pub brief: Brief,
    pub requirements: RequirementsDoc,
    pub architecture: Architecture,
}
