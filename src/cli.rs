use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "seikaku")]
#[command(
    about = "Personality assessment engine combining temperament typing with Eastern divination",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the assessment pipeline over a JSON submission
    Analyze {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the HTTP assessment API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long, env = "SEIKAKU_PORT")]
        port: Option<u16>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
