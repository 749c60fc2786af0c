//! Domain model types

pub mod trip;
pub mod trip_record;
pub mod vehicle;

pub use trip::{DealRating, TripEconomics, TripInput, TripRating, DEFAULT_FUEL_PRICE};
pub use trip_record::{IncentiveGoal, ShoppingSession, TripRecord};
pub use vehicle::{BodyClass, EngineClass, FuelClass, VehicleConfiguration};
