//! Command line interface for the norm-config tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve and validate normalization settings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve individual placement / algorithm literals
    Resolve(ResolveCommand),

    /// Load and validate a model config file
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct ResolveCommand {
    /// Placement literal (pre_layernorm, post_layernorm)
    #[arg(long, allow_hyphen_values = true)]
    pub layernorm_type: Option<String>,

    /// Algorithm literal (layernorm, rmsnorm, alphanorm)
    #[arg(long, allow_hyphen_values = true)]
    pub norm_type: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to a JSON model config
    pub config: PathBuf,
}
