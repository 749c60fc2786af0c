//! Domain services

pub mod earnings;
pub mod fuel_economy;
pub mod rating;
pub mod summary;

pub use earnings::{
    compute_net_earnings, net_per_hour, round_trip_miles, DEPRECIATION_PER_MILE,
};
pub use fuel_economy::{estimate_fuel_economy, tabulated_mpg, vehicle_mpg};
pub use rating::{rate_trip, EXCELLENT_THRESHOLD, GOOD_THRESHOLD};
pub use summary::{trips_in_week, week_start, within_retention, EarningsSummary};
