//! Repository trait definitions for data persistence

use spark_types::Error;

use crate::model::TripRecord;

/// Repository for the driver's trip log
pub trait TripLogRepository {
    /// Save a trip, replacing any trip with the same id
    fn save(&self, record: &TripRecord) -> Result<(), Error>;

    /// Find a trip by its id
    fn find_by_id(&self, id: &str) -> Result<Option<TripRecord>, Error>;

    /// Find all trips, newest first
    fn find_all(&self) -> Result<Vec<TripRecord>, Error>;

    /// Delete a trip; returns whether it existed
    fn delete(&self, id: &str) -> Result<bool, Error>;
}
