// src/main.rs
use clap::Parser;
use vexinfo::cli::{Args, is_config_operation};
use vexinfo::config::Config;
use vexinfo::error::AppError;
use vexinfo::{app, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations before setting up logging
    if is_config_operation(&args) {
        if args.list_config {
            Config::display().await?;
            return Ok(());
        }

        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_domain) = args.new_api_domain {
            config.api_domain = new_domain;
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(&args).await
}
