use std::path::Path;

use rolekeeper_core::{AppError, AppResult};
use rolekeeper_domain::{RoleStore, RoleWithDetails};
use tracing::info;

/// Parses a JSON array of nested roles into a validated store.
pub fn parse_role_fixture(raw: &str) -> AppResult<RoleStore> {
    let details: Vec<RoleWithDetails> = serde_json::from_str(raw)
        .map_err(|error| AppError::Validation(format!("invalid role fixture: {error}")))?;

    RoleStore::from_details(details)
}

/// Reads and validates a role fixture file.
pub async fn load_role_fixture(path: &Path) -> AppResult<RoleStore> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|error| {
        AppError::Internal(format!(
            "failed to read role fixture '{}': {error}",
            path.display()
        ))
    })?;

    let store = parse_role_fixture(raw.as_str())?;
    info!(path = %path.display(), roles = store.len(), "loaded role fixture");

    Ok(store)
}
