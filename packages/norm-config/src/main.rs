//! norm-config CLI binary.
//! Resolves normalization literals and model configs, exiting on unsupported values.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CheckCommand, Cli, Commands, ResolveCommand};

use norm_config::{NormConfig, NormConfigError, get_layernorm_type, get_norm_type};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Resolve(cmd) => resolve(cmd),
        Commands::Check(cmd) => check(cmd),
    };

    if let Err(err) = outcome {
        if let Some(norm_err) = err
            .downcast_ref::<NormConfigError>()
            .filter(|e| e.is_unsupported_value())
        {
            error!("{norm_err}");
            // The log filter may be off; the diagnostic must still reach stderr.
            eprintln!("{norm_err}");
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}

fn resolve(cmd: ResolveCommand) -> Result<()> {
    if let Some(raw) = cmd.layernorm_type.as_deref() {
        let resolved = get_layernorm_type(raw)?;
        println!("layernorm_type: {resolved}");
    }
    if let Some(raw) = cmd.norm_type.as_deref() {
        let resolved = get_norm_type(raw)?;
        println!("norm_type: {resolved}");
    }
    Ok(())
}

fn check(cmd: CheckCommand) -> Result<()> {
    let config = NormConfig::from_file(&cmd.config)
        .with_context(|| format!("failed to load {}", cmd.config.display()))?;
    info!(
        layernorm_type = %config.layernorm_type,
        norm_type = %config.norm_type,
        "norm config ok"
    );
    println!("{}", config.to_json_string()?);
    Ok(())
}
