//! CLI module

pub mod serve;

use clap::{Parser, Subcommand};

/// Fraud Verdict - web form scoring transactions with a pre-trained model
#[derive(Parser)]
#[command(name = "fraud-verdict")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server (default)
    Serve,
}
