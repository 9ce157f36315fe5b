// tolerance-core/src/infrastructure/config/snapshot.rs

use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::tolerance::StatisticsSnapshot;
use crate::infrastructure::error::InfrastructureError;

/// Reads a collector dump. The format follows the file extension.
#[instrument]
pub fn load_snapshot(path: &Path) -> Result<StatisticsSnapshot, InfrastructureError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let snapshot: StatisticsSnapshot = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        _ => {
            return Err(InfrastructureError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }
    };

    debug!(?snapshot, "Statistics snapshot loaded");
    Ok(snapshot)
}
