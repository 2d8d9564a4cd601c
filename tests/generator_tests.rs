#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeSet;
use widgetforge::generator::{render_widget, GeneratedFileSet, TemplateRegistry, OPEN_DELIMITER};
use widgetforge::workflow::{
    BriefPatch, MapInteraction, SettingType, WidgetSetting, WorkflowPhase, WorkflowStore,
};

fn incident_summary_store() -> WorkflowStore {
    let mut store = WorkflowStore::new();
    store.update_brief(BriefPatch {
        name: Some("incident-summary".into()),
        display_label: Some("Incident Summary".into()),
        map_interaction: Some(Some(MapInteraction::ClickToSelect)),
        ..Default::default()
    });
    store.set_phase(WorkflowPhase::Specify);
    store.set_phase(WorkflowPhase::Architect);
    store.set_phase(WorkflowPhase::Generate);
    store
}

fn render(store: &WorkflowStore) -> GeneratedFileSet {
    render_widget(store.state(), &TemplateRegistry::builtin()).unwrap()
}

#[test]
fn test_incident_summary_without_settings() {
    let store = incident_summary_store();
    let files = render(&store);

    assert_eq!(
        files.paths().collect::<Vec<_>>(),
        vec![
            "manifest.json",
            "config.ts",
            "runtime/widget.tsx",
            "translations/default.ts"
        ]
    );

    let raw = files.get("manifest.json").unwrap();
    assert!(raw.contains("\"name\": \"incident-summary\""));
    let manifest: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(
        manifest["dependency"],
        serde_json::json!(["core-module", "ui-module", "integration-module"])
    );
    assert_eq!(manifest["properties"]["hasSettingPage"], false);
}

#[test]
fn test_adding_a_setting_adds_the_settings_panel() {
    let mut store = incident_summary_store();
    let without = render(&store);

    store.set_has_settings(true);
    store.add_setting(WidgetSetting::new("Default layer", SettingType::Text, "Parcels"));
    let with = render(&store);

    assert!(with.get("config.ts").unwrap().contains("defaultLayer: \"Parcels\","));
    assert!(with.contains("setting/setting.tsx"));

    let before: BTreeSet<_> = without.paths().collect();
    let after: BTreeSet<_> = with.paths().collect();
    let diff: Vec<_> = after.symmetric_difference(&before).collect();
    assert_eq!(diff, vec![&"setting/setting.tsx"]);

    let manifest: serde_json::Value =
        serde_json::from_str(with.get("manifest.json").unwrap()).unwrap();
    assert_eq!(manifest["properties"]["hasSettingPage"], true);
}

#[test]
fn test_no_rendered_file_keeps_an_open_delimiter() {
    for interaction in MapInteraction::ALL.iter().copied().map(Some).chain([None]) {
        for has_settings in [false, true] {
            let mut store = WorkflowStore::new();
            store.update_brief(BriefPatch {
                name: Some("sweep".into()),
                map_interaction: Some(interaction),
                ..Default::default()
            });
            store.set_phase(WorkflowPhase::Specify);
            store.set_has_settings(has_settings);
            if has_settings {
                store.add_setting(WidgetSetting::new("", SettingType::Boolean, "yes"));
                store.add_setting(WidgetSetting::new("3 layers", SettingType::FieldSelector, ""));
            }
            store.set_phase(WorkflowPhase::Architect);

            for file in &render(&store) {
                assert!(
                    !file.contents.contains(OPEN_DELIMITER),
                    "{} ({interaction:?}, settings={has_settings})",
                    file.path
                );
            }
        }
    }
}

#[test]
fn test_blank_brief_still_generates() {
    let mut store = WorkflowStore::new();
    store.set_phase(WorkflowPhase::Generate);
    let files = render(&store);
    assert_eq!(files.len(), 4);
    let manifest: serde_json::Value =
        serde_json::from_str(files.get("manifest.json").unwrap()).unwrap();
    assert_eq!(manifest["name"], "");
    assert_eq!(manifest["label"], "");
}
