use std::path::{Path, PathBuf};

use boxoffice_catalog::CatalogStore;
use boxoffice_core::CatalogError;
use boxoffice_shared::CatalogSnapshot;
use tracing::info;

/// Startup data could not be turned into a catalog. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Inconsistent catalog snapshot: {0}")]
    Invalid(#[from] CatalogError),
}

pub async fn read_snapshot(path: impl AsRef<Path>) -> Result<CatalogSnapshot, SnapshotError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Reads, decodes and validates the snapshot at `path`.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogStore, SnapshotError> {
    let path = path.as_ref();
    let snapshot = read_snapshot(path).await?;
    let (events, spots) = (snapshot.events.len(), snapshot.spots.len());

    let store = CatalogStore::from_snapshot(snapshot)?;
    info!(path = %path.display(), events, spots, "Catalog loaded");

    Ok(store)
}
