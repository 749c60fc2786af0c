//! File-based trip log repository implementation

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use spark_domain::model::TripRecord;
use spark_domain::repository::TripLogRepository;
use spark_types::{Error, Result};

/// File-based implementation of TripLogRepository
///
/// Stores trips keyed by id in a single JSON file on disk.
pub struct FileTripLogRepository {
    store_path: PathBuf,
    trips: RefCell<HashMap<String, TripRecord>>,
}

impl FileTripLogRepository {
    /// Create or load a trip log
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("trips.json");

        let trips = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)?
        } else {
            HashMap::new()
        };

        log::debug!("opened trip log at {}", store_path.display());

        Ok(Self {
            store_path,
            trips: RefCell::new(trips),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn count(&self) -> usize {
        self.trips.borrow().len()
    }

    fn temp_path(&self) -> PathBuf {
        self.store_path.with_extension("json.tmp")
    }

    /// Save store to disk
    ///
    /// Writes a sibling temp file and renames it over `trips.json`, so the
    /// log on disk is either the old or the new version.
    fn persist(&self) -> Result<()> {
        let temp_path = self.temp_path();
        let result = self.write_to(&temp_path);
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;
        fs::rename(&temp_path, &self.store_path)?;
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &*self.trips.borrow())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    /// Get all trips sorted by date (newest first)
    pub fn all_trips(&self) -> Vec<TripRecord> {
        let mut trips: Vec<_> = self.trips.borrow().values().cloned().collect();
        trips.sort_by(|a, b| b.date.cmp(&a.date).then(b.logged_at.cmp(&a.logged_at)));
        trips
    }
}

impl TripLogRepository for FileTripLogRepository {
    fn save(&self, record: &TripRecord) -> std::result::Result<(), Error> {
        let previous = self
            .trips
            .borrow_mut()
            .insert(record.id.clone(), record.clone());

        if let Err(e) = self.persist() {
            let mut trips = self.trips.borrow_mut();
            match previous {
                Some(old) => trips.insert(record.id.clone(), old),
                None => trips.remove(&record.id),
            };
            log::warn!("failed to save trip {}: {}", record.id, e);
            return Err(e);
        }
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<TripRecord>, Error> {
        Ok(self.trips.borrow().get(id).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<TripRecord>, Error> {
        Ok(self.all_trips())
    }

    fn delete(&self, id: &str) -> std::result::Result<bool, Error> {
        let Some(removed) = self.trips.borrow_mut().remove(id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist() {
            self.trips.borrow_mut().insert(id.to_string(), removed);
            log::warn!("failed to delete trip {}: {}", id, e);
            return Err(e);
        }
        Ok(true)
    }
}
