use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use token_topup::core::config::Config;
use token_topup::core::pipeline::{self, failure_lines, success_line};
use token_topup::core::tracing_init;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    let config_path = args.get(1).map(PathBuf::from);

    // Load and validate configuration
    let config = Config::resolve(config_path.as_deref())
        .context(match &config_path {
            Some(path) => format!("Failed to load configuration from '{}'", path.display()),
            None => "Failed to load default configuration".to_string(),
        })?;

    tracing_init::init_tracing(&config.logging);

    info!(
        config_path = ?config_path,
        users = %config.input.users.display(),
        companies = %config.input.companies.display(),
        output = %config.output.path.display(),
        "Token top-up starting"
    );

    match pipeline::run(&config) {
        Ok(summary) => {
            println!("{}", success_line(&summary));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            for line in failure_lines(&e) {
                println!("{}", line);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
