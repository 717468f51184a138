//! CLI entrypoint for cascade-relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod provider;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use provider::GeminiProvider;
use relay_application::GenerateTextInput;
use relay_domain::{CascadeOutcome, ConfigIssue, Model, Prompt};
use relay_infrastructure::{ConfigLoader, FileConfig, RuntimeConfig};
use relay_presentation::{
    Cli, Command, ProgressReporter, RelayState, UseCaseProvider, create_router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let (config, issues) = RuntimeConfig::from_file(&file_config);
    log_config_issues(&issues);

    match cli.command {
        Some(Command::Serve { bind }) => serve(config, bind).await,
        Some(Command::Ask { prompt, model }) => ask(config, prompt, model, cli.quiet).await,
        None => bail!("A subcommand is required. Run with --help for usage."),
    }
}

fn log_config_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        if issue.is_error() {
            error!("config: {}", issue.message);
        } else {
            warn!("config: {}", issue.message);
        }
    }
}

async fn serve(config: RuntimeConfig, bind: Option<String>) -> Result<()> {
    let addr: SocketAddr = match bind {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid --bind address '{}'", raw))?,
        None => config.bind,
    };

    // === Dependency Injection ===
    let provider = Arc::new(GeminiProvider::new(&config)?);
    if let Err(e) = config.credentials.resolve() {
        warn!("{} Requests will fail until it is set.", e);
    }

    let router = create_router(RelayState::new(provider));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        models = ?config.cascade.models.iter().map(Model::as_str).collect::<Vec<_>>(),
        "Relay listening on {}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {}", e);
    }
}

async fn ask(
    config: RuntimeConfig,
    prompt: String,
    model: Option<String>,
    quiet: bool,
) -> Result<()> {
    let prompt = Prompt::new(prompt)?;
    let mut input = GenerateTextInput::new(prompt);
    if let Some(name) = model.filter(|m| !m.trim().is_empty()) {
        input = input.with_requested_model(name.parse::<Model>()?);
    }

    let provider = GeminiProvider::new(&config)?;
    let use_case = match provider.provide() {
        Ok(use_case) => use_case,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let outcome = if quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    match outcome {
        CascadeOutcome::Success(text) => {
            println!("{}", text);
            Ok(())
        }
        CascadeOutcome::Exhausted(detail) => {
            eprintln!("{} {}", "MODEL_OVERLOADED:".red().bold(), detail);
            std::process::exit(1);
        }
    }
}
