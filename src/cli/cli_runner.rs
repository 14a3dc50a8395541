use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::process::ExitCode;

use crate::cli::{CliArgs, OutputFormat, OutputFormatter, COPYRIGHT_INFO};
use crate::engine::{ProviderRegistry, StatusEngine};
use crate::utils::{config::AppConfig, error::TpspResult, logging::init_logging};

/// Main CLI runner that handles command execution
pub struct CliRunner {
    engine: StatusEngine,
}

impl CliRunner {
    /// Create a new CLI runner fetching over HTTP
    pub fn new(config: AppConfig) -> TpspResult<Self> {
        Ok(Self::with_engine(StatusEngine::from_config(config)?))
    }

    pub fn with_engine(engine: StatusEngine) -> Self {
        Self { engine }
    }

    /// Fetch a service's line statuses and format them
    pub async fn show_status(&self, service: &str, format: &OutputFormat) -> TpspResult<String> {
        let records = self.engine.fetch(service).await?;
        OutputFormatter::format_result(&records, format)
    }

    /// List available services
    pub fn list_services(&self) -> String {
        OutputFormatter::format_providers(&self.engine.registry().describe())
    }
}

/// Main entry point for CLI execution
pub async fn run_cli() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    if args.copyright {
        println!("{}", COPYRIGHT_INFO);
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(args.verbose);

    match execute(&args).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{}", OutputFormatter::format_error(&e));
            if e.is_user_error() {
                Ok(ExitCode::from(2))
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Validate the service name, then build the runner and produce the output.
/// The runner and its HTTP client are dropped before this returns.
async fn execute(args: &CliArgs) -> TpspResult<String> {
    let service = if args.list {
        None
    } else {
        match args.service.as_deref() {
            Some(service) => {
                ProviderRegistry::with_builtin().ensure_registered(service)?;
                Some(service)
            }
            None => CliArgs::command()
                .error(clap::error::ErrorKind::MissingRequiredArgument, "a SERVICE is required")
                .exit(),
        }
    };

    let runner = CliRunner::new(AppConfig::load(args.config.as_deref())?)?;

    match service {
        Some(service) => runner
            .show_status(service, &args.output_format())
            .await
            .map(|output| format!("\n{}", output)),
        None => Ok(runner.list_services()),
    }
}
