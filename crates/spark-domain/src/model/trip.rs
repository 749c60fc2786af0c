//! Trip inputs and the values the engine derives from them

use serde::{Deserialize, Serialize};
use spark_types::{Error, Result};

/// Fuel price used when the driver has not entered a local one ($/gal)
pub const DEFAULT_FUEL_PRICE: f64 = 3.50;

fn default_fuel_price() -> f64 {
    DEFAULT_FUEL_PRICE
}

/// One delivery offer as entered by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    /// Total pay offered ($)
    pub gross_pay: f64,
    /// Distance to the last drop-off; the engine doubles it for the return leg
    pub one_way_miles: f64,
    pub duration_minutes: u32,
    /// Pickup plus drop-offs, at least 1
    pub stop_count: u32,
    /// Local price per gallon ($)
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_gallon: f64,
}

impl TripInput {
    pub fn new(
        gross_pay: f64,
        one_way_miles: f64,
        duration_minutes: u32,
        stop_count: u32,
    ) -> Self {
        Self {
            gross_pay,
            one_way_miles,
            duration_minutes,
            stop_count,
            fuel_price_per_gallon: DEFAULT_FUEL_PRICE,
        }
    }

    pub fn with_fuel_price(mut self, fuel_price_per_gallon: f64) -> Self {
        self.fuel_price_per_gallon = fuel_price_per_gallon;
        self
    }

    /// Check the documented input domain
    ///
    /// The engine itself never validates; callers that take input from a user
    /// run this first.
    pub fn validate(&self) -> Result<()> {
        if !self.gross_pay.is_finite() || self.gross_pay < 0.0 {
            return Err(Error::InvalidInput(format!(
                "pay must be a non-negative amount, got {}",
                self.gross_pay
            )));
        }
        if !self.one_way_miles.is_finite() || self.one_way_miles <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "one-way miles must be positive, got {}",
                self.one_way_miles
            )));
        }
        if self.duration_minutes == 0 {
            return Err(Error::InvalidInput("duration must be at least 1 minute".to_string()));
        }
        if self.stop_count == 0 {
            return Err(Error::InvalidInput("a trip has at least 1 stop".to_string()));
        }
        if !self.fuel_price_per_gallon.is_finite() || self.fuel_price_per_gallon < 0.0 {
            return Err(Error::InvalidInput(format!(
                "fuel price must be a non-negative amount, got {}",
                self.fuel_price_per_gallon
            )));
        }
        Ok(())
    }
}

/// Cost breakdown of a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripEconomics {
    pub gross: f64,
    pub gallons: f64,
    pub gas_cost: f64,
    pub wear_tear: f64,
    /// Gross minus gas and wear; negative for money-losing trips
    pub net: f64,
    /// Miles per gallon (or MPGe) used for the estimate
    pub mpg: f64,
}

impl TripEconomics {
    pub fn expenses(&self) -> f64 {
        self.gas_cost + self.wear_tear
    }
}

/// Qualitative verdict on an offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealRating {
    Excellent,
    Good,
    Shit,
}

impl DealRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealRating::Excellent => "excellent",
            DealRating::Good => "good",
            DealRating::Shit => "shit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealRating::Excellent => "🔥 EXCELLENT DEAL! 🔥",
            DealRating::Good => "👍 Good Deal",
            DealRating::Shit => "💩 Shit Deal - Decline!",
        }
    }

    /// Styling key a front end can map to its own look
    pub fn style_key(&self) -> &'static str {
        match self {
            DealRating::Excellent => "excellent-deal",
            DealRating::Good => "good-deal",
            DealRating::Shit => "shit-deal",
        }
    }
}

impl std::fmt::Display for DealRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rating together with the metrics that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripRating {
    pub rating: DealRating,
    pub score: f64,
    pub pay_per_mile: f64,
    pub pay_per_hour: f64,
    pub pay_per_stop: f64,
}

impl TripRating {
    pub fn label(&self) -> &'static str {
        self.rating.label()
    }

    pub fn style_key(&self) -> &'static str {
        self.rating.style_key()
    }
}
