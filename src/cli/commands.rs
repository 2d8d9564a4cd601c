use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{load_resolved_config, GeneratorConfig};
use crate::generator::GenerationSummary;
use crate::package::{archive_file_name, bundle_stem, ZipPackager};
use crate::session::Session;
use crate::workflow::derive::suggested_requirements;
use crate::workflow::{load_answers, MapInteraction, WorkflowPhase};

/// Command-line interface for widgetforge
///
/// Turns questionnaire answers into an Experience Builder widget bundle.
#[derive(Parser, Debug)]
#[command(name = "widgetforge")]
#[command(about = "Experience Builder widget generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a widget bundle from an answers file
    Generate {
        /// Path to the answers file (YAML or JSON)
        #[arg(short, long)]
        answers: PathBuf,

        /// Output directory (default: `[output] dir` from config, else the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a `<name>.zip` archive instead of a widget folder
        #[arg(long, default_value_t = false)]
        archive: bool,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Path to widgetforge.toml
        /// If not provided, will auto-detect alongside the answers file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the generated files without writing them
    Preview {
        /// Path to the answers file (YAML or JSON)
        #[arg(short, long)]
        answers: PathBuf,

        /// Print only this file (e.g. `runtime/widget.tsx`)
        #[arg(long)]
        file: Option<String>,

        /// Path to widgetforge.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the functional requirements suggested for a map interaction
    Suggest {
        /// Map interaction label, e.g. "Click to select features"
        #[arg(short, long)]
        map_interaction: Option<String>,
    },
    /// List the workflow phases in order
    Phases,
}

/// Parse process arguments and execute the command, printing to stdout
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

/// Execute a parsed command, writing user-facing output to `out`
///
/// # Errors
///
/// Returns an error if:
/// - The answers or config file cannot be read or parsed
/// - A template override directory cannot be read
/// - Rendering fails (unresolved placeholder, empty template)
/// - Packaging or writing the output fails
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            answers,
            output,
            archive,
            force,
            dry_run,
            config,
        } => {
            let (mut session, config) = prepare_session(answers, config.as_deref())?;
            session.generate()?;
            let output_dir = output
                .clone()
                .or_else(|| config.output.dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let archive = *archive || config.output.archive;

            print_summary(&session.summary(), out)?;
            if let Some(files) = session.generated() {
                for file in files {
                    writeln!(out, "  {:<26} {:>6} bytes", file.path, file.size())?;
                }
            }
            if archive {
                write_archive(&session, &output_dir, *force, *dry_run, out)?;
            } else {
                write_folder(&session, &output_dir, *force, *dry_run, out)?;
            }
            if !*dry_run {
                print_install_steps(out)?;
            }
            Ok(())
        }
        Commands::Preview {
            answers,
            file,
            config,
        } => {
            let (mut session, _config) = prepare_session(answers, config.as_deref())?;
            let files = session.generate()?;
            match file {
                Some(path) => {
                    let Some(contents) = files.get(path) else {
                        bail!(
                            "No generated file named '{path}' (available: {})",
                            files.paths().collect::<Vec<_>>().join(", ")
                        );
                    };
                    write!(out, "{contents}")?;
                }
                None => {
                    for file in files {
                        writeln!(out, "=== {} ===", file.path)?;
                        writeln!(out, "{}", file.contents)?;
                    }
                }
            }
            Ok(())
        }
        Commands::Suggest { map_interaction } => {
            let interaction = map_interaction.as_deref().and_then(|label| {
                let parsed = MapInteraction::from_label(label);
                if parsed.is_none() {
                    warn!(label, "unknown map interaction, using generic suggestions");
                }
                parsed
            });
            for requirement in suggested_requirements(interaction) {
                writeln!(
                    out,
                    "[{}] {}",
                    requirement.priority, requirement.description
                )?;
            }
            Ok(())
        }
        Commands::Phases => {
            for phase in WorkflowPhase::ALL {
                writeln!(
                    out,
                    "{}. {} - {}",
                    phase.index() + 1,
                    phase.label(),
                    phase.description()
                )?;
            }
            Ok(())
        }
    }
}

fn prepare_session(
    answers_path: &Path,
    explicit_config: Option<&Path>,
) -> anyhow::Result<(Session, GeneratorConfig)> {
    let config = load_resolved_config(explicit_config, answers_path)?;
    let registry = config.template_registry()?;
    let store = load_answers(answers_path)?.replay();
    Ok((Session::with_store(store, registry), config))
}

fn print_summary(summary: &GenerationSummary, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Widget:      {}", summary.label)?;
    writeln!(out, "Folder:      {}", summary.folder_name)?;
    writeln!(out, "Files:       {}", summary.files_to_generate.join(", "))?;
    if !summary.integrations.is_empty() {
        writeln!(out, "Integration: {}", summary.integrations.join(", "))?;
    }
    Ok(())
}

fn write_folder(
    session: &Session,
    output_dir: &Path,
    force: bool,
    dry_run: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(files) = session.generated() else {
        bail!("Nothing has been generated yet");
    };
    let folder = bundle_stem(&session.store().state().brief)?;
    let widget_dir = output_dir.join(folder);
    let report = crate::generator::write_file_set(files, &widget_dir, force, dry_run)?;

    let verb = if dry_run { "Would write" } else { "Wrote" };
    for path in &report.written {
        writeln!(out, "{verb} {}", path.display())?;
    }
    for path in &report.skipped {
        writeln!(out, "Skipped {} (exists, use --force)", path.display())?;
    }
    Ok(())
}

fn write_archive(
    session: &Session,
    output_dir: &Path,
    force: bool,
    dry_run: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let file_name = archive_file_name(&session.store().state().brief, "zip")?;
    let target = output_dir.join(&file_name);
    if target.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }
    if dry_run {
        writeln!(out, "Would write {}", target.display())?;
        return Ok(());
    }

    let archive = session.package(&ZipPackager)?;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;
    std::fs::write(&target, &archive.bytes)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    info!(path = %target.display(), bytes = archive.bytes.len(), "wrote archive");
    writeln!(out, "Wrote {}", target.display())?;
    Ok(())
}

fn print_install_steps(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "Installation:")?;
    writeln!(out, "  1. Extract to client/your-extensions/widgets/")?;
    writeln!(out, "  2. Run npm run build:prod")?;
    writeln!(out, "  3. Widget appears in the Custom section")?;
    Ok(())
}
