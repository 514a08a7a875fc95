//! PulseCinema server binary.
//!
//! Boots in three phases: configuration, logging, then the API crate's
//! server runner against a migrated database.

use tracing_subscriber::{EnvFilter, fmt};

use cinema_core::config::AppConfig;
use cinema_core::config::logging::{LogFormat, LoggingConfig};
use cinema_core::result::AppResult;

#[tokio::main]
async fn main() {
    let env = std::env::var("CINEMA_ENV").unwrap_or_else(|_| "development".into());
    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration ({env}): {err}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), %env, "Starting PulseCinema");

    if let Err(err) = run(config).await {
        tracing::error!(error = %err, "Server exited with error");
        std::process::exit(1);
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// configured level when set.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = fmt().with_env_filter(filter).with_target(true);

    match config.format {
        LogFormat::Json => builder.json().with_thread_ids(true).init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    let db_pool = cinema_database::connect(&config.database).await?;
    cinema_database::run_migrations(&db_pool).await?;

    cinema_api::run_server(config, db_pool).await
}
