//! Deal rating for an offer

use crate::model::{DealRating, TripRating};

pub const PAY_PER_MILE_WEIGHT: f64 = 10.0;
pub const PAY_PER_HOUR_WEIGHT: f64 = 0.5;
pub const PAY_PER_STOP_WEIGHT: f64 = 2.0;

/// Lowest composite score rated excellent
pub const EXCELLENT_THRESHOLD: f64 = 30.0;
/// Lowest composite score rated good
pub const GOOD_THRESHOLD: f64 = 15.0;

impl DealRating {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            DealRating::Excellent
        } else if score >= GOOD_THRESHOLD {
            DealRating::Good
        } else {
            DealRating::Shit
        }
    }
}

/// Score an offer on pay per round-trip mile, per hour and per stop
///
/// Zero miles, minutes or stops contribute nothing rather than dividing by
/// zero.
pub fn rate_trip(
    pay: f64,
    one_way_miles: f64,
    duration_minutes: u32,
    stop_count: u32,
) -> TripRating {
    let pay_per_mile = if one_way_miles > 0.0 {
        pay / (one_way_miles * 2.0)
    } else {
        0.0
    };
    let pay_per_hour = if duration_minutes > 0 {
        pay / duration_minutes as f64 * 60.0
    } else {
        0.0
    };
    let pay_per_stop = if stop_count > 0 {
        pay / stop_count as f64
    } else {
        0.0
    };

    let score = pay_per_mile * PAY_PER_MILE_WEIGHT
        + pay_per_hour * PAY_PER_HOUR_WEIGHT
        + pay_per_stop * PAY_PER_STOP_WEIGHT;
    let rating = DealRating::from_score(score);

    log::debug!("rating: score {score:.2} -> {rating}");

    TripRating {
        rating,
        score,
        pay_per_mile,
        pay_per_hour,
        pay_per_stop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_offer_is_good() {
        // 16/24 = 0.667/mi, 21.33/hr, 5.33/stop -> 6.67 + 10.67 + 10.67 = 28.0
        let r = rate_trip(16.0, 12.0, 45, 3);
        assert!((r.pay_per_mile - 0.6667).abs() < 0.001);
        assert!((r.pay_per_hour - 21.333).abs() < 0.001);
        assert!((r.pay_per_stop - 5.333).abs() < 0.001);
        assert!((r.score - 28.0).abs() < 0.01);
        assert_eq!(r.rating, DealRating::Good);
        assert_eq!(r.style_key(), "good-deal");
    }

    #[test]
    fn test_single_stop_outweighs_poor_mileage() {
        // 8/45 = 0.178/mi, 8/hr, 8/stop -> 1.78 + 4 + 16 = 21.78
        let r = rate_trip(8.0, 22.5, 60, 1);
        assert!((r.pay_per_mile - 0.1778).abs() < 0.001);
        assert!((r.score - 21.78).abs() < 0.01);
        assert_eq!(r.rating, DealRating::Good);
    }

    #[test]
    fn test_excellent_and_shit() {
        assert_eq!(rate_trip(40.0, 5.0, 30, 1).rating, DealRating::Excellent);
        assert_eq!(rate_trip(4.0, 20.0, 90, 4).rating, DealRating::Shit);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(DealRating::from_score(30.0), DealRating::Excellent);
        assert_eq!(DealRating::from_score(29.999), DealRating::Good);
        assert_eq!(DealRating::from_score(15.0), DealRating::Good);
        assert_eq!(DealRating::from_score(14.999), DealRating::Shit);
    }

    #[test]
    fn test_zero_guards() {
        let r = rate_trip(10.0, 0.0, 0, 0);
        assert_eq!(r.pay_per_mile, 0.0);
        assert_eq!(r.pay_per_hour, 0.0);
        assert_eq!(r.pay_per_stop, 0.0);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.rating, DealRating::Shit);
    }

    #[test]
    fn test_monotonic_in_pay() {
        let mut last_score = f64::MIN;
        let mut last_rank = 0;
        for cents in (0..6000).step_by(25) {
            let r = rate_trip(cents as f64 / 100.0, 12.0, 45, 3);
            let rank = match r.rating {
                DealRating::Shit => 0,
                DealRating::Good => 1,
                DealRating::Excellent => 2,
            };
            assert!(r.score >= last_score);
            assert!(rank >= last_rank);
            last_score = r.score;
            last_rank = rank;
        }
    }

    #[test]
    fn test_idempotent() {
        let a = rate_trip(16.0, 12.0, 45, 3);
        let b = rate_trip(16.0, 12.0, 45, 3);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a, b);
    }
}
