//! Application use cases

mod trip_service;

pub use trip_service::{evaluate_trip, LogTripRequest, TripEvaluation, TripService};
