#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::error::GenerateError;
use crate::workflow::{
    BriefPatch, MapInteraction, SettingType, WidgetSetting, WorkflowState, WorkflowStore,
};

fn state_with_brief(name: &str, label: &str, description: &str) -> WorkflowState {
    let mut store = WorkflowStore::new();
    store.update_brief(BriefPatch {
        name: Some(name.into()),
        display_label: Some(label.into()),
        description: Some(description.into()),
        ..Default::default()
    });
    store.advance();
    store.advance();
    store.advance();
    store.state().clone()
}

#[test]
fn test_render_emits_base_files_in_order() {
    let state = state_with_brief("w", "W", "d");
    let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();
    assert_eq!(
        files.paths().collect::<Vec<_>>(),
        vec![
            "manifest.json",
            "config.ts",
            "runtime/widget.tsx",
            "translations/default.ts"
        ]
    );
}

#[test]
fn test_render_keys_match_file_list() {
    for has_settings in [false, true] {
        let mut state = state_with_brief("w", "W", "d");
        state.requirements.settings_config.has_settings = has_settings;
        let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();
        let expected: Vec<_> = TemplateRegistry::file_list(has_settings)
            .into_iter()
            .map(|k| k.path())
            .collect();
        assert_eq!(files.paths().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_manifest_is_valid_json_for_plain_names() {
    let state = state_with_brief("incident-summary", "Incident Summary", "Summaries");
    let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();
    let manifest: serde_json::Value =
        serde_json::from_str(files.get("manifest.json").unwrap()).unwrap();
    assert_eq!(manifest["name"], "incident-summary");
    assert_eq!(manifest["label"], "Incident Summary");
    assert_eq!(manifest["type"], "widget");
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["exbVersion"], "1.14.0");
    assert_eq!(manifest["author"], "BMAD Generator");
    assert_eq!(manifest["translatedLocales"], serde_json::json!(["default"]));
    assert_eq!(manifest["dependency"], serde_json::json!(["core-module", "ui-module"]));
}

#[test]
fn test_empty_fields_render_as_empty_strings() {
    let state = state_with_brief("", "", "");
    let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();
    let manifest = files.get("manifest.json").unwrap();
    assert!(manifest.contains("\"name\": \"\""));
    let translation = files.get("translations/default.ts").unwrap();
    assert!(translation.contains("_widgetLabel: \"\""));
    let widget = files.get("runtime/widget.tsx").unwrap();
    assert!(widget.contains("const Widget = "));
}

#[test]
fn test_no_output_contains_open_delimiter() {
    let mut store = WorkflowStore::new();
    store.update_brief(BriefPatch {
        name: Some("full".into()),
        map_interaction: Some(Some(MapInteraction::DrawGeometry)),
        ..Default::default()
    });
    store.set_has_settings(true);
    store.add_setting(WidgetSetting::new("Layer", SettingType::LayerSelector, ""));
    store.add_setting(WidgetSetting::new("Zoom", SettingType::Number, "7"));
    store.set_phase(crate::workflow::WorkflowPhase::Architect);
    store.update_architecture(crate::workflow::ArchitecturePatch {
        jimu_integration: Some(crate::workflow::JimuIntegrationPatch {
            uses_data_source_component: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    });

    let files = render_widget(store.state(), &TemplateRegistry::builtin()).unwrap();
    assert_eq!(files.len(), 5);
    for file in &files {
        assert!(
            !file.contents.contains(OPEN_DELIMITER),
            "{} contains an open delimiter",
            file.path
        );
    }
}

#[test]
fn test_placeholder_text_in_free_text_is_escaped() {
    let state = state_with_brief("w", "{{WIDGET_NAME}}", "see {{WIDGET_NAME}} and {{ODD");
    let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();

    let leaked: Vec<_> = files
        .iter()
        .filter(|f| f.contents.contains(OPEN_DELIMITER))
        .map(|f| f.path.as_str())
        .collect();
    assert!(leaked.is_empty(), "open delimiter in {leaked:?}");

    let manifest: serde_json::Value =
        serde_json::from_str(files.get("manifest.json").unwrap()).unwrap();
    assert_eq!(manifest["label"], "{{WIDGET_NAME}}");
    assert_eq!(manifest["description"], "see {{WIDGET_NAME}} and {{ODD");

    let widget = files.get("runtime/widget.tsx").unwrap();
    assert!(widget.contains(r#"<h3>{"{\u007bWIDGET_NAME}}"}</h3>"#));
    assert!(widget.contains(r#"<p>{"see {\u007bWIDGET_NAME}} and {\u007bODD"}</p>"#));
    assert!(widget.contains(r#"className={"w"}"#));
}

#[test]
fn test_unknown_token_in_override_fails_with_file_and_token() {
    let registry = TemplateRegistry::builtin()
        .with_override(TemplateKind::Translation, "export default { x: \"{{NOT_A_TOKEN}}\" };\n");
    let state = state_with_brief("w", "W", "d");
    let err = render_widget(&state, &registry).unwrap_err();
    assert_eq!(
        err,
        GenerateError::UnresolvedPlaceholder {
            file: "translations/default.ts".into(),
            token: "NOT_A_TOKEN".into(),
        }
    );
}

#[test]
fn test_empty_template_is_fatal() {
    let registry = TemplateRegistry::builtin().with_override(TemplateKind::Config, "");
    let state = state_with_brief("w", "W", "d");
    let err = render_widget(&state, &registry).unwrap_err();
    assert_eq!(
        err,
        GenerateError::EmptyTemplate {
            file: "config.ts".into()
        }
    );
}

#[test]
fn test_empty_settings_template_ignored_without_settings() {
    let registry = TemplateRegistry::builtin().with_override(TemplateKind::Setting, "");
    let state = state_with_brief("w", "W", "d");
    assert!(render_widget(&state, &registry).is_ok());
}

#[test]
fn test_render_is_deterministic() {
    let state = state_with_brief("same", "Same", "again");
    let registry = TemplateRegistry::builtin();
    let a = render_widget(&state, &registry).unwrap();
    let b = render_widget(&state, &registry).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_write_file_set_creates_subdirectories_and_skips_existing() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with_brief("w", "W", "d");
    let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();

    let report = write_file_set(&files, dir.path(), false, false).unwrap();
    assert_eq!(report.written.len(), 4);
    assert!(dir.path().join("runtime").join("widget.tsx").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("translations/default.ts")).unwrap(),
        files.get("translations/default.ts").unwrap()
    );

    let again = write_file_set(&files, dir.path(), false, false).unwrap();
    assert!(again.written.is_empty());
    assert_eq!(again.skipped.len(), 4);

    let forced = write_file_set(&files, dir.path(), true, false).unwrap();
    assert_eq!(forced.written.len(), 4);
}

#[test]
fn test_write_file_set_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with_brief("w", "W", "d");
    let files = render_widget(&state, &TemplateRegistry::builtin()).unwrap();
    let report = write_file_set(&files, dir.path(), false, true).unwrap();
    assert_eq!(report.written.len(), 4);
    assert!(!dir.path().join("manifest.json").exists());
}

#[test]
fn test_summary_reports_files_and_integrations() {
    let mut state = state_with_brief("", "", "");
    state.requirements.settings_config.has_settings = true;
    state.architecture.jimu_integration.publishes_messages = true;
    let summary = GenerationSummary::from_state(&state);
    assert_eq!(summary.label, "Untitled Widget");
    assert_eq!(summary.folder_name, "-");
    assert_eq!(summary.files_to_generate.len(), 5);
    assert_eq!(summary.integrations, vec!["Publishes messages"]);
}
