//! Unit tests for CLI commands

use crate::cli::{run, Cli, Commands};
use clap::Parser;

fn run_to_string(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_generate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "widgetforge",
        "generate",
        "--answers",
        "answers.yaml",
        "--output",
        "dist",
        "--archive",
        "--force",
        "--dry-run",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            answers,
            output,
            archive,
            force,
            dry_run,
            config,
        } => {
            assert_eq!(answers.to_string_lossy(), "answers.yaml");
            assert_eq!(output.unwrap().to_string_lossy(), "dist");
            assert!(archive);
            assert!(force);
            assert!(dry_run);
            assert!(config.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_requires_answers() {
    assert!(Cli::try_parse_from(["widgetforge", "generate"]).is_err());
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["widgetforge", "generate", "--answers", "a.yaml"],
        vec!["widgetforge", "preview", "--answers", "a.json", "--file", "config.ts"],
        vec!["widgetforge", "suggest"],
        vec!["widgetforge", "suggest", "--map-interaction", "Draw geometry"],
        vec!["widgetforge", "phases"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_phases_lists_all_four_in_order() {
    let output = run_to_string(&["widgetforge", "phases"]);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("1. Analyze"));
    assert!(lines[3].starts_with("4. Generate"));
}

#[test]
fn test_suggest_for_known_and_unknown_interactions() {
    let output = run_to_string(&[
        "widgetforge",
        "suggest",
        "--map-interaction",
        "Click to select features",
    ]);
    assert!(output.contains("[High] Allow users to click map features to view details."));

    let fallback = run_to_string(&["widgetforge", "suggest", "--map-interaction", "Juggle"]);
    assert_eq!(fallback, run_to_string(&["widgetforge", "suggest"]));
    assert!(fallback.contains("[High] Define the core user flow for the widget."));
}

#[test]
fn test_preview_single_file_and_unknown_file() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.yaml");
    std::fs::write(&answers, "brief:\n  name: demo\n  display_label: Demo\n").unwrap();
    let answers = answers.to_string_lossy().into_owned();

    let manifest = run_to_string(&[
        "widgetforge",
        "preview",
        "--answers",
        &answers,
        "--file",
        "manifest.json",
    ]);
    assert!(manifest.contains("\"name\": \"demo\""));

    let cli = Cli::try_parse_from([
        "widgetforge",
        "preview",
        "--answers",
        &answers,
        "--file",
        "nope.ts",
    ])
    .unwrap();
    let err = run(&cli, &mut Vec::new()).unwrap_err();
    assert!(format!("{err}").contains("manifest.json"));
}
