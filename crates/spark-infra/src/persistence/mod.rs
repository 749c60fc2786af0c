//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_trip_log_repo;

pub use file_trip_log_repo::FileTripLogRepository;
