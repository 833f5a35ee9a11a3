use std::env;
use std::path::PathBuf;

/// Environment-derived settings for the command-line front end.
///
/// File paths given on the command line win over these; the built-in sample
/// data is the final fallback, so the tool runs with no setup at all.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) telemetry: TelemetryConfig,
    pub(crate) inventory_path: Option<PathBuf>,
    pub(crate) dealer_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub(crate) struct TelemetryConfig {
    pub(crate) log_level: String,
}

impl AppConfig {
    pub(crate) fn load() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("ADVISOR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let inventory_path = env::var("ADVISOR_INVENTORY").ok().map(PathBuf::from);
        let dealer_path = env::var("ADVISOR_DEALER_FILE").ok().map(PathBuf::from);

        Self {
            telemetry: TelemetryConfig { log_level },
            inventory_path,
            dealer_path,
        }
    }
}
