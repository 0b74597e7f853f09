use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seikaku::cli::{Cli, Commands};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
        } => seikaku::commands::analyze_submission(input.as_deref(), format, output.as_ref()),
        Commands::Serve { host, port, config } => {
            seikaku::commands::serve_api(host, port, config.as_ref())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
