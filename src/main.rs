//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Running one audit (printing the report as JSON) or serving the API
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_audit::initialization::init_logger_with;
use page_audit::{
    run_audit_with_deadline, AuditContext, AuditRequest, Config, ServerState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let ctx = AuditContext::from_config(&config).context("Failed to initialize HTTP clients")?;

    if config.serve {
        let state = ServerState::new(ctx);
        page_audit::serve(config.port, state).await?;
        return Ok(());
    }

    let Some(url) = config.url.clone() else {
        eprintln!("error: a URL argument is required unless --serve is given");
        process::exit(2);
    };

    let request = AuditRequest {
        url,
        keywords: config.keywords.clone(),
        include_screenshot: config.include_screenshot,
    };

    match run_audit_with_deadline(&request, &ctx).await {
        Ok(report) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .context("Failed to serialize audit report")?
            );
            Ok(())
        }
        Err(error) => {
            eprintln!("page_audit error: {error}");
            process::exit(1);
        }
    }
}
