//! Subscription tiers and the features they unlock

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Subscription tier of the driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Basic,
    Pro,
}

/// Features gated behind a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Logging more than the weekly free allowance
    UnlimitedTrips,
    /// CSV tax report export
    ReportExport,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::UnlimitedTrips => "Unlimited trips",
            Feature::ReportExport => "Report export",
        }
    }
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Basic => "Basic",
            Tier::Pro => "Pro",
        }
    }

    /// Trips that may be logged per ISO week. `None` means unlimited.
    pub fn weekly_trip_limit(&self) -> Option<usize> {
        match self {
            Tier::Free => Some(10),
            Tier::Basic | Tier::Pro => None,
        }
    }

    /// Days of trip history kept visible. `None` means everything.
    pub fn retention_days(&self) -> Option<i64> {
        match self {
            Tier::Free => Some(7),
            Tier::Basic => Some(548),
            Tier::Pro => None,
        }
    }

    /// List price in cents per month (display only)
    pub fn monthly_price_cents(&self) -> u32 {
        match self {
            Tier::Free => 0,
            Tier::Basic => 599,
            Tier::Pro => 999,
        }
    }

    pub fn allows(&self, feature: Feature) -> bool {
        match feature {
            Feature::UnlimitedTrips => self.weekly_trip_limit().is_none(),
            Feature::ReportExport => *self == Tier::Pro,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_tier_is_capped() {
        assert_eq!(Tier::Free.weekly_trip_limit(), Some(10));
        assert!(!Tier::Free.allows(Feature::UnlimitedTrips));
        assert!(!Tier::Free.allows(Feature::ReportExport));
    }

    #[test]
    fn test_basic_tier_unlimited_but_no_export() {
        assert!(Tier::Basic.allows(Feature::UnlimitedTrips));
        assert!(!Tier::Basic.allows(Feature::ReportExport));
        assert_eq!(Tier::Basic.retention_days(), Some(548));
    }

    #[test]
    fn test_pro_tier_unlocks_everything() {
        assert!(Tier::Pro.allows(Feature::UnlimitedTrips));
        assert!(Tier::Pro.allows(Feature::ReportExport));
        assert_eq!(Tier::Pro.retention_days(), None);
    }

    #[test]
    fn test_tier_serde_lowercase() {
        let json = serde_json::to_string(&Tier::Basic).unwrap();
        assert_eq!(json, "\"basic\"");
        let tier: Tier = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(tier, Tier::Pro);
    }
}
