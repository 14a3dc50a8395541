use std::process::ExitCode;

use tpsp::cli::run_cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    run_cli().await
}
