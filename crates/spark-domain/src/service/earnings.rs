//! Net earnings after fuel and wear
//!
//! Every trip is assumed to return to its origin, so one-way miles are
//! doubled before any cost is applied.

use crate::model::{TripEconomics, VehicleConfiguration};
use crate::service::fuel_economy::vehicle_mpg;

/// Depreciation charged against every mile driven ($/mi)
pub const DEPRECIATION_PER_MILE: f64 = 0.10;

pub fn round_trip_miles(one_way_miles: f64) -> f64 {
    one_way_miles * 2.0
}

/// Break a trip's gross pay down into fuel, wear and net
///
/// Net is not clamped; a trip can lose money.
pub fn compute_net_earnings(
    gross_pay: f64,
    one_way_miles: f64,
    vehicle: &VehicleConfiguration,
    fuel_price_per_gallon: f64,
) -> TripEconomics {
    let total_miles = round_trip_miles(one_way_miles);
    let mpg = vehicle_mpg(vehicle);
    let gallons = if mpg > 0.0 { total_miles / mpg } else { 0.0 };
    let gas_cost = gallons * fuel_price_per_gallon;
    let wear_tear = total_miles * DEPRECIATION_PER_MILE;
    let net = gross_pay - gas_cost - wear_tear;

    log::debug!(
        "earnings: {total_miles:.1} mi at {mpg} mpg, gas ${gas_cost:.2}, wear ${wear_tear:.2}"
    );

    TripEconomics {
        gross: gross_pay,
        gallons,
        gas_cost,
        wear_tear,
        net,
        mpg,
    }
}

/// Net earnings per hour on the clock; zero when no time was logged
pub fn net_per_hour(net: f64, duration_minutes: u32) -> f64 {
    if duration_minutes == 0 {
        return 0.0;
    }
    net / duration_minutes as f64 * 60.0
}
