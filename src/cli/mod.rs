//! # CLI Module
//!
//! Command-line front end for the widget generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Replay an answers file through the workflow and write the widget:
//!
//! ```bash
//! widgetforge generate --answers answers.yaml --output dist
//! ```
//!
//! Options:
//! - `--answers <FILE>` - YAML or JSON answers (required)
//! - `--output <DIR>` - Output directory (default: config, else `.`)
//! - `--archive` - Write `<name>.zip` instead of a widget folder
//! - `--force` - Overwrite existing files
//! - `--dry-run` - List what would be written
//! - `--config <FILE>` - `widgetforge.toml` (auto-detected next to the answers)
//!
//! ### `preview`
//!
//! Print the rendered files, or a single one with `--file runtime/widget.tsx`.
//!
//! ### `suggest`
//!
//! Print the requirements suggested for a map interaction:
//!
//! ```bash
//! widgetforge suggest --map-interaction "Click to select features"
//! ```
//!
//! ### `phases`
//!
//! List the four workflow phases.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use widgetforge::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli, &mut std::io::stdout())?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run, run_cli, Cli, Commands};
