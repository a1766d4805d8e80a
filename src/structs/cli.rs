use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "insightflow", version)]
#[clap(about = "AI-powered survey analysis: summaries, insights, personas and service design", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: ~/.insightflow/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
