use widgetforge::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    widgetforge::cli::run_cli()
}
