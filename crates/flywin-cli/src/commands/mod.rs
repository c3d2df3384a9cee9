//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod audit;
pub mod serve;

/// Flywin - Opportunity Audit Dashboard
#[derive(Parser)]
#[command(name = "flywin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the audit web server
    Serve(serve::ServeArgs),

    /// Audit a company or opportunity through a running server
    Audit(audit::AuditArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Audit(args) => audit::execute(args, self.verbose).await,
        }
    }
}
