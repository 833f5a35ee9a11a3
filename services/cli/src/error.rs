use std::path::PathBuf;

use crate::telemetry::TelemetryError;

/// Failures the command-line front end can surface. The quoting and matching
/// engines themselves are total; everything here comes from the boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no inventory item with id '{0}'")]
    UnknownItem(String),
    #[error("no add-on with code '{0}'")]
    UnknownAddOn(String),
    #[error("inventory is empty; nothing to rank or quote")]
    EmptyInventory,
}
