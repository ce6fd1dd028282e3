pub mod app_config;
pub mod snapshot;

pub use app_config::Config;
pub use snapshot::{load_catalog, read_snapshot, SnapshotError};
