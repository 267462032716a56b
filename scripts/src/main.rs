use std::process::ExitCode;

use auction_scripts::{
    cli::{usage_exit_code, Cli},
    commands::{report_outcome, run},
};
use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout, errors to stderr
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    // Logs go to stderr, stdout only carries the deployment result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.into_config() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    ExitCode::from(report_outcome(&result, &mut std::io::stderr()))
}
