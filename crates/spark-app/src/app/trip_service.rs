//! Trip Service - evaluating offers and keeping the trip log
//!
//! Wraps the pure economics engine with the parts that need state:
//! 1. Validate the driver's input
//! 2. Rate the offer and break down its earnings
//! 3. Enforce the tier's weekly trip allowance
//! 4. Save the trip and serve history, totals and reports

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spark_domain::model::{
    IncentiveGoal, ShoppingSession, TripEconomics, TripInput, TripRating, TripRecord,
    VehicleConfiguration,
};
use spark_domain::repository::TripLogRepository;
use spark_domain::service::{
    compute_net_earnings, net_per_hour, rate_trip, trips_in_week, within_retention,
    EarningsSummary,
};
use spark_infra::report_csv::export_trips_csv;
use spark_types::{Error, Feature, Result, Tier};

/// Rating and earnings breakdown for one offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEvaluation {
    pub input: TripInput,
    pub vehicle: VehicleConfiguration,
    /// `None` when the offer pays nothing
    pub rating: Option<TripRating>,
    pub economics: Option<TripEconomics>,
    pub net_per_hour: f64,
}

impl TripEvaluation {
    pub fn net(&self) -> f64 {
        self.economics.map(|e| e.net).unwrap_or(0.0)
    }
}

/// Evaluate an offer without saving it
///
/// Unpaid offers come back unrated with zero net.
pub fn evaluate_trip(
    input: &TripInput,
    vehicle: &VehicleConfiguration,
) -> Result<TripEvaluation> {
    input.validate()?;

    if input.gross_pay <= 0.0 {
        return Ok(TripEvaluation {
            input: *input,
            vehicle: *vehicle,
            rating: None,
            economics: None,
            net_per_hour: 0.0,
        });
    }

    let rating = rate_trip(
        input.gross_pay,
        input.one_way_miles,
        input.duration_minutes,
        input.stop_count,
    );
    let economics = compute_net_earnings(
        input.gross_pay,
        input.one_way_miles,
        vehicle,
        input.fuel_price_per_gallon,
    );

    Ok(TripEvaluation {
        input: *input,
        vehicle: *vehicle,
        rating: Some(rating),
        economics: Some(economics),
        net_per_hour: net_per_hour(economics.net, input.duration_minutes),
    })
}

/// Everything needed to log a trip
#[derive(Debug, Clone)]
pub struct LogTripRequest {
    pub date: NaiveDate,
    pub input: TripInput,
    pub vehicle: VehicleConfiguration,
    pub shopping: Option<ShoppingSession>,
    pub incentive: Option<IncentiveGoal>,
    pub notes: Option<String>,
}

impl LogTripRequest {
    pub fn new(date: NaiveDate, input: TripInput, vehicle: VehicleConfiguration) -> Self {
        Self {
            date,
            input,
            vehicle,
            shopping: None,
            incentive: None,
            notes: None,
        }
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
        self.notes = Some(notes).filter(|n| !n.trim().is_empty());
        self
    }
}

/// Trip logging use cases over any trip log repository
pub struct TripService<R: TripLogRepository> {
    repo: R,
    tier: Tier,
}

impl<R: TripLogRepository> TripService<R> {
    pub fn new(repo: R, tier: Tier) -> Self {
        Self { repo, tier }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Trips still allowed in the week of `date`; `None` means unlimited
    pub fn remaining_this_week(&self, date: NaiveDate) -> Result<Option<usize>> {
        let Some(limit) = self.tier.weekly_trip_limit() else {
            return Ok(None);
        };
        let used = trips_in_week(&self.repo.find_all()?, date);
        Ok(Some(limit.saturating_sub(used)))
    }

    /// Evaluate and save a trip
    pub fn log_trip(&self, request: LogTripRequest) -> Result<TripRecord> {
        let evaluation = evaluate_trip(&request.input, &request.vehicle)?;

        if let Some(limit) = self.tier.weekly_trip_limit() {
            let used = trips_in_week(&self.repo.find_all()?, request.date);
            if used >= limit {
                log::warn!(
                    "{} tier weekly allowance used up ({used}/{limit}) for week of {}",
                    self.tier,
                    request.date
                );
                return Err(Error::TierLimitReached {
                    tier: self.tier,
                    limit,
                });
            }
        }

        let mut record = TripRecord::new(request.date, request.input, request.vehicle);
        if let (Some(economics), Some(rating)) = (evaluation.economics, evaluation.rating) {
            record = record.with_evaluation(economics, rating.rating);
        }
        if let Some(shopping) = request.shopping {
            record = record.with_shopping(shopping);
        }
        if let Some(incentive) = request.incentive {
            record = record.with_incentive(incentive);
        }
        if let Some(notes) = request.notes {
            record = record.with_notes(notes);
        }

        self.repo.save(&record)?;
        log::info!(
            "logged trip {} on {}: ${:.2} gross, ${:.2} net ({})",
            record.id,
            record.date,
            record.gross(),
            record.net(),
            record.rating.map(|r| r.as_str()).unwrap_or("unrated")
        );
        Ok(record)
    }

    /// Trips visible under the tier's retention window, newest first
    pub fn history(&self, today: NaiveDate) -> Result<Vec<TripRecord>> {
        let all = self.repo.find_all()?;
        Ok(within_retention(all, self.tier.retention_days(), today))
    }

    /// Dashboard totals over the visible history
    pub fn summary(&self, today: NaiveDate) -> Result<EarningsSummary> {
        Ok(EarningsSummary::from_records(&self.history(today)?))
    }

    /// Write the visible history as a CSV report; returns the number of trips
    pub fn export_report(&self, path: &Path, today: NaiveDate) -> Result<usize> {
        if !self.tier.allows(Feature::ReportExport) {
            log::warn!("report export refused for {} tier", self.tier);
            return Err(Error::FeatureLocked {
                feature: Feature::ReportExport,
                tier: self.tier,
            });
        }

        let trips = self.history(today)?;
        export_trips_csv(path, &trips)?;
        Ok(trips.len())
    }

    /// Full id for an exact id or a unique id prefix as printed by history
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        if self.repo.find_by_id(prefix)?.is_some() {
            return Ok(prefix.to_string());
        }

        let mut matches = self
            .repo
            .find_all()?
            .into_iter()
            .filter(|t| !prefix.is_empty() && t.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(trip), None) => Ok(trip.id),
            (Some(_), Some(_)) => Err(Error::InvalidInput(format!(
                "trip id prefix '{prefix}' matches more than one trip"
            ))),
            (None, _) => Err(Error::TripNotFound(prefix.to_string())),
        }
    }

    pub fn remove_trip(&self, id: &str) -> Result<()> {
        if self.repo.delete(id)? {
            log::info!("removed trip {id}");
            Ok(())
        } else {
            Err(Error::TripNotFound(id.to_string()))
        }
    }
}
