//! Logged trips and the optional shopping and incentive details kept with them

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::trip::{DealRating, TripEconomics, TripInput};
use super::vehicle::VehicleConfiguration;

/// In-store shopping done before the drive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSession {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub items: u32,
}

impl ShoppingSession {
    /// Minutes spent shopping. An end before the start wraps past midnight.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        if minutes < 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}

/// Platform incentive the driver is working toward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncentiveGoal {
    pub goal_trips: u32,
    pub completed_trips: u32,
    pub bonus: f64,
}

impl IncentiveGoal {
    pub fn progress(&self) -> f64 {
        if self.goal_trips == 0 {
            return 1.0;
        }
        (self.completed_trips as f64 / self.goal_trips as f64).min(1.0)
    }

    pub fn remaining_trips(&self) -> u32 {
        self.goal_trips.saturating_sub(self.completed_trips)
    }

    pub fn is_reached(&self) -> bool {
        self.remaining_trips() == 0
    }
}

/// A trip saved to the driver's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Unique identifier
    pub id: String,
    /// Day the trip was driven
    pub date: NaiveDate,
    pub input: TripInput,
    pub vehicle: VehicleConfiguration,
    /// `None` for unpaid trips, which are logged unrated
    #[serde(default)]
    pub economics: Option<TripEconomics>,
    #[serde(default)]
    pub rating: Option<DealRating>,
    #[serde(default)]
    pub shopping: Option<ShoppingSession>,
    #[serde(default)]
    pub incentive: Option<IncentiveGoal>,
    #[serde(default)]
    pub notes: Option<String>,
    /// When the trip was written to the log
    pub logged_at: DateTime<Utc>,
}

impl TripRecord {
    pub fn new(date: NaiveDate, input: TripInput, vehicle: VehicleConfiguration) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            input,
            vehicle,
            economics: None,
            rating: None,
            shopping: None,
            incentive: None,
            notes: None,
            logged_at: Utc::now(),
        }
    }

    pub fn with_evaluation(mut self, economics: TripEconomics, rating: DealRating) -> Self {
        self.economics = Some(economics);
        self.rating = Some(rating);
        self
    }

    pub fn with_shopping(mut self, shopping: ShoppingSession) -> Self {
        self.shopping = Some(shopping);
        self
    }

    pub fn with_incentive(mut self, incentive: IncentiveGoal) -> Self {
        self.incentive = Some(incentive);
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn gross(&self) -> f64 {
        self.input.gross_pay
    }

    /// Net earnings; exactly zero for unrated trips
    pub fn net(&self) -> f64 {
        self.economics.map(|e| e.net).unwrap_or(0.0)
    }

    pub fn round_trip_miles(&self) -> f64 {
        self.input.one_way_miles * 2.0
    }
}
