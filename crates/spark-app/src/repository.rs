//! Repository adapters for persistence layer

use std::path::PathBuf;

use spark_infra::persistence::FileTripLogRepository;
use spark_types::Result;

use crate::config::Config;

/// Open the file-based trip log in the configured data directory
pub fn open_trip_log(config: &Config) -> Result<FileTripLogRepository> {
    let data_dir = config.data_dir()?;
    FileTripLogRepository::open(data_dir)
}

/// Open the file-based trip log at a custom directory
pub fn open_trip_log_at(data_dir: PathBuf) -> Result<FileTripLogRepository> {
    FileTripLogRepository::open(data_dir)
}
