//! Token table computed from a workflow snapshot.

use super::placeholder::TokenTable;
use crate::workflow::derive::{to_camel_case, INTEGRATION_MODULE};
use crate::workflow::{SettingType, WidgetSetting, WorkflowState};

pub const WIDGET_NAME: &str = "WIDGET_NAME";
pub const WIDGET_LABEL: &str = "WIDGET_LABEL";
pub const WIDGET_DESCRIPTION: &str = "WIDGET_DESCRIPTION";
pub const COMPONENT_NAME: &str = "COMPONENT_NAME";
pub const JIMU_DEPENDENCIES: &str = "JIMU_DEPENDENCIES";
pub const HAS_SETTINGS: &str = "HAS_SETTINGS";
pub const SETTINGS_INTERFACE: &str = "SETTINGS_INTERFACE";
pub const SETTINGS_DEFAULTS: &str = "SETTINGS_DEFAULTS";
pub const JIMU_ARCGIS_IMPORT: &str = "JIMU_ARCGIS_IMPORT";
pub const DATA_SOURCE_IMPORT: &str = "DATA_SOURCE_IMPORT";
pub const MAP_VIEW_PLACEHOLDER: &str = "MAP_VIEW_PLACEHOLDER";
pub const DATA_SOURCE_PLACEHOLDER: &str = "DATA_SOURCE_PLACEHOLDER";

const MAP_VIEW_SNIPPET: &str = "<JimuMapViewComponent useMapWidgetId={props.useMapWidgetIds?.[0]} onActiveViewChange={(view: JimuMapView) => view} />";
const DATA_SOURCE_SNIPPET: &str =
    "<DataSourceComponent useDataSource={props.useDataSources?.[0]} widgetId={props.id} />";
const DATA_SOURCE_IMPORT_LINE: &str = "import { DataSourceComponent } from \"core-module\";";

fn map_view_import_line() -> String {
    format!("import {{ JimuMapViewComponent, type JimuMapView }} from \"{INTEGRATION_MODULE}\";")
}

/// Compute every token the built-in templates reference.
///
/// Identifier-like values (name, label, description, component name) are
/// stored as typed; rendering applies the brace escape.
pub fn compute_tokens(state: &WorkflowState) -> TokenTable {
    let brief = &state.brief;
    let settings = &state.requirements.settings_config;
    let arch = &state.architecture;
    let integration = &arch.jimu_integration;

    let mut table = TokenTable::new();
    table.insert(WIDGET_NAME, brief.name.as_str());
    table.insert(WIDGET_LABEL, brief.display_label.as_str());
    table.insert(WIDGET_DESCRIPTION, brief.description.as_str());
    table.insert(COMPONENT_NAME, arch.main_component_name.as_str());
    table.insert(
        JIMU_DEPENDENCIES,
        dependency_list(&arch.dependencies.required_modules, &arch.dependencies.additional_modules),
    );
    table.insert(HAS_SETTINGS, settings.has_settings.to_string());
    table.insert(SETTINGS_INTERFACE, settings_interface(&settings.settings));
    table.insert(SETTINGS_DEFAULTS, settings_defaults(&settings.settings));

    let (map_import, map_view) = if integration.uses_map_view {
        (map_view_import_line(), MAP_VIEW_SNIPPET)
    } else {
        (String::new(), "")
    };
    table.insert(JIMU_ARCGIS_IMPORT, map_import);
    table.insert(MAP_VIEW_PLACEHOLDER, map_view);

    let (ds_import, ds_view) = if integration.uses_data_source_component {
        (DATA_SOURCE_IMPORT_LINE, DATA_SOURCE_SNIPPET)
    } else {
        ("", "")
    };
    table.insert(DATA_SOURCE_IMPORT, ds_import);
    table.insert(DATA_SOURCE_PLACEHOLDER, ds_view);

    table
}

/// Quoted, comma-joined module list: required first, then additional,
/// duplicates dropped at their later occurrence.
pub fn dependency_list(required: &[String], additional: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for module in required.iter().chain(additional) {
        if !seen.contains(&module.as_str()) {
            seen.push(module);
        }
    }
    seen.iter()
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Property key used for a setting in `config.ts`
pub fn setting_key(setting: &WidgetSetting, index: usize) -> String {
    let key = to_camel_case(&setting.name);
    match key.chars().next() {
        None => format!("setting{}", index + 1),
        Some(c) if c.is_ascii_digit() => format!("_{key}"),
        Some(_) => key,
    }
}

/// Property keys for every setting, in order and unique within the list.
///
/// A key already taken by an earlier setting gets the smallest numeric suffix
/// (`2`, `3`, ...) that makes it unique.
pub fn setting_keys(settings: &[WidgetSetting]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(settings.len());
    for (index, setting) in settings.iter().enumerate() {
        let base = setting_key(setting, index);
        let mut key = base.clone();
        let mut suffix = 2;
        while keys.contains(&key) {
            key = format!("{base}{suffix}");
            suffix += 1;
        }
        keys.push(key);
    }
    keys
}

fn ts_type(kind: SettingType) -> &'static str {
    match kind {
        SettingType::Text => "string",
        SettingType::Number => "number",
        SettingType::Boolean => "boolean",
        SettingType::LayerSelector | SettingType::FieldSelector => "string | null",
    }
}

fn type_default(kind: SettingType) -> &'static str {
    match kind {
        SettingType::Text => "\"\"",
        SettingType::Number => "0",
        SettingType::Boolean => "false",
        SettingType::LayerSelector | SettingType::FieldSelector => "null",
    }
}

fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Literal default of a setting.
///
/// Blank values use the type's default. Otherwise the given value wins:
/// numbers and booleans that parse as such are emitted raw, everything else
/// as a quoted string.
pub fn default_literal(setting: &WidgetSetting) -> String {
    let value = setting.default_value.trim();
    if value.is_empty() {
        return type_default(setting.kind).to_string();
    }
    match setting.kind {
        SettingType::Number if value.parse::<f64>().is_ok_and(f64::is_finite) => value.to_string(),
        SettingType::Boolean if value.eq_ignore_ascii_case("true") => "true".to_string(),
        SettingType::Boolean if value.eq_ignore_ascii_case("false") => "false".to_string(),
        _ => quoted(&setting.default_value),
    }
}

fn settings_interface(settings: &[WidgetSetting]) -> String {
    settings
        .iter()
        .zip(setting_keys(settings))
        .map(|(s, key)| format!("  {key}: {};", ts_type(s.kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn settings_defaults(settings: &[WidgetSetting]) -> String {
    settings
        .iter()
        .zip(setting_keys(settings))
        .map(|(s, key)| format!("  {key}: {},", default_literal(s)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dependency_list_dedupes_in_first_seen_order() {
        let out = dependency_list(
            &strings(&["core-module", "ui-module"]),
            &strings(&["Query", "ui-module", "Graphic", "Query"]),
        );
        assert_eq!(out, r#""core-module", "ui-module", "Query", "Graphic""#);
        assert_eq!(dependency_list(&[], &[]), "");
    }

    #[test]
    fn test_type_defaults_when_blank() {
        let cases = [
            (SettingType::Text, "\"\""),
            (SettingType::Number, "0"),
            (SettingType::Boolean, "false"),
            (SettingType::LayerSelector, "null"),
            (SettingType::FieldSelector, "null"),
        ];
        for (kind, expected) in cases {
            let setting = WidgetSetting::new("x", kind, "  ");
            assert_eq!(default_literal(&setting), expected, "{kind}");
        }
    }

    #[test]
    fn test_given_default_wins() {
        assert_eq!(
            default_literal(&WidgetSetting::new("x", SettingType::Text, "Parcels")),
            "\"Parcels\""
        );
        assert_eq!(
            default_literal(&WidgetSetting::new("x", SettingType::Number, "12.5")),
            "12.5"
        );
        assert_eq!(
            default_literal(&WidgetSetting::new("x", SettingType::Number, "lots")),
            "\"lots\""
        );
        assert_eq!(
            default_literal(&WidgetSetting::new("x", SettingType::Boolean, "TRUE")),
            "true"
        );
        assert_eq!(
            default_literal(&WidgetSetting::new("x", SettingType::LayerSelector, "Parcels")),
            "\"Parcels\""
        );
        assert_eq!(
            default_literal(&WidgetSetting::new("x", SettingType::Text, "say \"hi\"")),
            r#""say \"hi\"""#
        );
    }

    #[test]
    fn test_setting_keys() {
        let named = WidgetSetting::new("Default layer", SettingType::Text, "");
        let blank = WidgetSetting::new("", SettingType::Text, "");
        let digit = WidgetSetting::new("3d view", SettingType::Boolean, "");
        assert_eq!(setting_key(&named, 0), "defaultLayer");
        assert_eq!(setting_key(&blank, 1), "setting2");
        assert_eq!(setting_key(&digit, 0), "_3dView");
    }

    #[test]
    fn test_colliding_setting_keys_get_suffixes() {
        let settings = vec![
            WidgetSetting::new("Default layer", SettingType::Text, ""),
            WidgetSetting::new("default-layer", SettingType::Number, ""),
            WidgetSetting::new("DEFAULT layer", SettingType::Boolean, ""),
            WidgetSetting::new("defaultLayer2", SettingType::Text, ""),
        ];
        assert_eq!(
            setting_keys(&settings),
            vec!["defaultLayer", "defaultLayer2", "defaultLayer3", "defaultlayer2"]
        );

        let mut state = WorkflowState::default();
        state.requirements.settings_config.has_settings = true;
        state.requirements.settings_config.settings = settings[..2].to_vec();
        let tokens = compute_tokens(&state);
        assert_eq!(
            tokens.get(SETTINGS_INTERFACE),
            Some("  defaultLayer: string;\n  defaultLayer2: number;")
        );
        assert_eq!(
            tokens.get(SETTINGS_DEFAULTS),
            Some("  defaultLayer: \"\",\n  defaultLayer2: 0,")
        );
    }

    #[test]
    fn test_integration_snippets_follow_flags() {
        let mut state = WorkflowState::default();
        let off = compute_tokens(&state);
        assert_eq!(off.get(JIMU_ARCGIS_IMPORT), Some(""));
        assert_eq!(off.get(MAP_VIEW_PLACEHOLDER), Some(""));
        assert_eq!(off.get(DATA_SOURCE_PLACEHOLDER), Some(""));

        state.architecture.jimu_integration.uses_map_view = true;
        state.architecture.jimu_integration.uses_data_source_component = true;
        let on = compute_tokens(&state);
        assert!(on.get(JIMU_ARCGIS_IMPORT).unwrap().contains("integration-module"));
        assert!(on.get(MAP_VIEW_PLACEHOLDER).unwrap().contains("JimuMapViewComponent"));
        assert!(on.get(DATA_SOURCE_IMPORT).unwrap().contains("DataSourceComponent"));
        assert!(on.get(DATA_SOURCE_PLACEHOLDER).unwrap().contains("DataSourceComponent"));
    }

    #[test]
    fn test_has_settings_literal() {
        let mut state = WorkflowState::default();
        assert_eq!(compute_tokens(&state).get(HAS_SETTINGS), Some("false"));
        state.requirements.settings_config.has_settings = true;
        assert_eq!(compute_tokens(&state).get(HAS_SETTINGS), Some("true"));
    }
}
