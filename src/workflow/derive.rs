//! Derivation rules: suggested and derived values computed from earlier answers.
//!
//! Everything here is a pure function over a snapshot. The store decides when
//! to call them (phase entry, `map_interaction` edits) and stores the results
//! as whole-record replacements.

use tracing::debug;

use super::model::{
    Architecture, Brief, DataSource, FunctionalRequirement, MapInteraction, RequirementPriority,
    RequirementsDoc,
};

/// Framework core module, always required
pub const CORE_MODULE: &str = "core-module";
/// Framework UI module, always required
pub const UI_MODULE: &str = "ui-module";
/// Map integration module, required when the widget interacts with a map
pub const INTEGRATION_MODULE: &str = "integration-module";

/// Component name used when neither the name nor the label yields one
pub const FALLBACK_COMPONENT_NAME: &str = "Widget";

/// Requirements suggested for a map interaction style.
///
/// Unknown or missing interactions get the two-entry generic fallback.
pub fn suggested_requirements(map_interaction: Option<MapInteraction>) -> Vec<FunctionalRequirement> {
    use RequirementPriority::{High, Low, Medium};

    let table: &[(&str, RequirementPriority)] = match map_interaction {
        Some(MapInteraction::ClickToSelect) => &[
            ("Allow users to click map features to view details.", High),
            ("Show selected feature attributes in a summary panel.", Medium),
            ("Provide a clear selection state on the map.", Medium),
        ],
        Some(MapInteraction::DrawGeometry) => &[
            ("Enable drawing polygons or lines on the map.", High),
            ("Use drawn geometry to query intersecting features.", High),
            ("Offer tools to clear or edit drawn geometry.", Medium),
        ],
        Some(MapInteraction::HoverToHighlight) => &[
            ("Highlight features on hover without selection.", High),
            ("Display lightweight tooltip details on hover.", Medium),
        ],
        Some(MapInteraction::ViewOnly) => &[
            ("Present map layers and widget content in a read-only view.", High),
            ("Explain data sources and context without interactions.", Low),
        ],
        Some(MapInteraction::FilterByExtent) => &[
            ("Limit widget content to features inside the current map extent.", High),
            ("Refresh results whenever the map extent changes.", Medium),
        ],
        None => &[
            ("Define the core user flow for the widget.", High),
            ("List data inputs required for the widget to operate.", Medium),
        ],
    };

    table
        .iter()
        .map(|(description, priority)| FunctionalRequirement::new(*description, *priority))
        .collect()
}

/// Framework modules the widget depends on.
pub fn required_modules(has_map_interaction: bool) -> Vec<String> {
    let mut modules = vec![CORE_MODULE.to_string(), UI_MODULE.to_string()];
    if has_map_interaction {
        modules.push(INTEGRATION_MODULE.to_string());
    }
    modules
}

/// Whether the brief names a real data source
pub fn has_data_source(brief: &Brief) -> bool {
    matches!(brief.data_source, Some(source) if source != DataSource::NoDataSource)
}

/// PascalCase of `value`, splitting on anything that is not ASCII alphanumeric.
pub fn to_pascal_case(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// camelCase of `value`; the first word is lowercased entirely.
pub fn to_camel_case(value: &str) -> String {
    let mut out = String::new();
    for (i, segment) in value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(&segment.to_ascii_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Default main component name: the name, else the display label, else `Widget`
pub fn default_component_name(brief: &Brief) -> String {
    let base = if !brief.name.is_empty() {
        &brief.name
    } else {
        &brief.display_label
    };
    let name = to_pascal_case(base);
    if name.is_empty() {
        FALLBACK_COMPONENT_NAME.to_string()
    } else {
        name
    }
}

/// Offer the suggested requirements the first time the list is seen.
///
/// The list is filled only while `requirements_initialized` is unset and the
/// list is empty. The flag is set either way, so a list the user later empties
/// stays empty.
pub fn fill_requirements_once(brief: &Brief, doc: &RequirementsDoc) -> RequirementsDoc {
    let mut next = doc.clone();
    if next.requirements_initialized {
        return next;
    }
    if next.functional_requirements.is_empty() {
        next.functional_requirements = suggested_requirements(brief.map_interaction);
        debug!(
            count = next.functional_requirements.len(),
            map_interaction = ?brief.map_interaction,
            "filled suggested requirements"
        );
    }
    next.requirements_initialized = true;
    next
}

/// Apply the architecture defaults implied by the brief, once.
///
/// A blank main component name gets [`default_component_name`]; the map view
/// and data source integrations are switched on when the brief calls for
/// them, never switched off.
pub fn initialize_architecture_once(brief: &Brief, arch: &Architecture) -> Architecture {
    let mut next = arch.clone();
    if next.architecture_initialized {
        return next;
    }
    if next.main_component_name.is_empty() {
        next.main_component_name = default_component_name(brief);
    }
    next.jimu_integration.uses_map_view |= brief.map_interaction.is_some();
    next.jimu_integration.uses_data_source_component |= has_data_source(brief);
    next.architecture_initialized = true;
    debug!(
        component = %next.main_component_name,
        uses_map_view = next.jimu_integration.uses_map_view,
        uses_data_source = next.jimu_integration.uses_data_source_component,
        "initialized architecture defaults"
    );
    next
}

/// Replace the required modules with the list derived from the brief
pub fn refresh_required_modules(brief: &Brief, arch: &Architecture) -> Architecture {
    let mut next = arch.clone();
    next.dependencies.required_modules = required_modules(brief.map_interaction.is_some());
    next
}

/// Labels of the framework integrations the architecture enables
pub fn integration_summary(arch: &Architecture) -> Vec<&'static str> {
    let integration = &arch.jimu_integration;
    [
        (integration.uses_map_view, "JimuMapView"),
        (integration.uses_data_source_component, "DataSourceComponent"),
        (integration.publishes_messages, "Publishes messages"),
        (integration.subscribes_messages, "Subscribes to messages"),
    ]
    .into_iter()
    .filter_map(|(enabled, label)| enabled.then_some(label))
    .collect()
}
