use mpesa_sandbox::cli::Args;
use mpesa_sandbox::demos::Profile;
use mpesa_sandbox::error::SandboxError;
use mpesa_sandbox::logger::initialize as LoggerInitialize;

use mpesa_client::{ClientSettings, Credentials, MpesaClient};

use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

const APP_DIR_NAME: &str = "mpesa-sandbox";

#[tokio::main]
async fn main() -> ExitCode {
    // Exits on --help, --version and bad arguments before any log file exists
    let args = Args::parse();

    match run(args).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            error!("{failures} demo(s) failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            // The logger may not be up yet
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<usize, SandboxError> {
    let log_dir = app_dir(dirs::data_local_dir()).join("logs");
    create_dir_all(&log_dir)
        .map_err(|e| SandboxError::sandbox(format!("Failed to create log directory: {e}")))?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("M-Pesa sandbox starting");
    info!("Log directory: {}", log_dir.display());

    let demos = args.selected_demos();
    let settings = ClientSettings::load(&app_dir(dirs::config_dir()))?;
    let credentials = Credentials::from_env()?;
    let profile = Profile::from_env();

    let client = MpesaClient::builder(credentials)
        .with_settings(&settings)
        .build()?;

    let mut failures = 0;
    for demo in demos {
        if let Err(e) = demo.run(&client, &profile).await {
            error!("{demo} failed: {e}");
            failures += 1;
        }
    }

    Ok(failures)
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(env::temp_dir).join(APP_DIR_NAME)
}
