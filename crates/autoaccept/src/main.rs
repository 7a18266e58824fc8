use std::{process::ExitCode, sync::Arc};

use autoaccept_core::{config::Config, Error, Result};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be up yet (config errors), so report on stderr too.
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = Arc::new(Config::load()?);
    autoaccept_core::logging::init("autoaccept", cfg.log_level)?;

    autoaccept_telegram::router::run(cfg)
        .await
        .map_err(|e| Error::Platform(format!("telegram bot failed: {e}")))?;

    tracing::info!("bot stopped");
    Ok(())
}
