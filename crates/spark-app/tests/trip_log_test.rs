//! Trip log use cases against an on-disk store

use std::path::Path;

use chrono::{Duration, NaiveDate};
use spark_app::app::{LogTripRequest, TripService};
use spark_app::config::Config;
use spark_app::repository::{open_trip_log, open_trip_log_at};
use spark_domain::model::{DealRating, IncentiveGoal, TripInput, VehicleConfiguration};
use spark_infra::persistence::FileTripLogRepository;
use spark_types::{Error, Feature, Tier};
use tempfile::tempdir;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn request(date: NaiveDate, pay: f64) -> LogTripRequest {
    let input = TripInput::new(pay, 12.0, 45, 3);
    LogTripRequest::new(date, input, VehicleConfiguration::default())
}

fn open_service(dir: &Path, tier: Tier) -> TripService<FileTripLogRepository> {
    let repo = open_trip_log_at(dir.to_path_buf()).unwrap();
    TripService::new(repo, tier)
}

#[test]
fn test_log_trip_persists_rated_record() {
    let dir = tempdir().unwrap();
    let service = open_service(dir.path(), Tier::Pro);

    let incentive = IncentiveGoal {
        goal_trips: 3,
        completed_trips: 2,
        bonus: 15.0,
    };
    let record = service
        .log_trip(
            request(monday(), 16.0)
                .with_notes("Walmart + 2".to_string())
                .with_incentive(incentive),
        )
        .unwrap();
    assert_eq!(record.rating, Some(DealRating::Good));
    assert!((record.net() - 10.37).abs() < 0.01);

    // Reopen from disk
    let reopened = open_service(dir.path(), Tier::Pro);
    let history = reopened.history(monday()).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, record.id);
    assert_eq!(history[0].rating, Some(DealRating::Good));
    assert_eq!(history[0].notes.as_deref(), Some("Walmart + 2"));
    assert_eq!(history[0].incentive.map(|i| i.remaining_trips()), Some(1));
    assert!((history[0].net() - record.net()).abs() < 1e-9);
}

#[test]
fn test_zero_pay_trip_logged_unrated() {
    let dir = tempdir().unwrap();
    let service = open_service(dir.path(), Tier::Basic);

    let record = service.log_trip(request(monday(), 0.0)).unwrap();
    assert!(record.rating.is_none());
    assert!(record.economics.is_none());
    assert_eq!(record.net(), 0.0);

    let summary = service.summary(monday()).unwrap();
    assert_eq!(summary.unrated_count, 1);
    assert_eq!(summary.total_net, 0.0);
}

#[test]
fn test_free_tier_weekly_limit() {
    let dir = tempdir().unwrap();
    let service = open_service(dir.path(), Tier::Free);

    for i in 0..10 {
        let date = monday() + Duration::days(i % 7);
        service.log_trip(request(date, 12.0)).unwrap();
    }
    assert_eq!(service.remaining_this_week(monday()).unwrap(), Some(0));

    let result = service.log_trip(request(monday() + Duration::days(3), 12.0));
    match result {
        Err(Error::TierLimitReached { tier, limit }) => {
            assert_eq!(tier, Tier::Free);
            assert_eq!(limit, 10);
        }
        other => panic!("expected tier limit, got {:?}", other),
    }

    // Next week starts a fresh allowance
    let next_week = monday() + Duration::days(7);
    assert_eq!(service.remaining_this_week(next_week).unwrap(), Some(10));
    service.log_trip(request(next_week, 12.0)).unwrap();
}

#[test]
fn test_paid_tiers_unlimited() {
    let dir = tempdir().unwrap();
    let service = open_service(dir.path(), Tier::Basic);
    for _ in 0..15 {
        service.log_trip(request(monday(), 12.0)).unwrap();
    }
    assert_eq!(service.remaining_this_week(monday()).unwrap(), None);
}

#[test]
fn test_free_history_limited_to_seven_days() {
    let dir = tempdir().unwrap();
    let pro = open_service(dir.path(), Tier::Pro);
    pro.log_trip(request(monday() - Duration::days(30), 20.0))
        .unwrap();
    pro.log_trip(request(monday(), 20.0)).unwrap();

    let free = open_service(dir.path(), Tier::Free);
    assert_eq!(free.history(monday()).unwrap().len(), 1);
    assert_eq!(pro.history(monday()).unwrap().len(), 2);
}

#[test]
fn test_export_requires_pro() {
    let dir = tempdir().unwrap();
    let service = open_service(&dir.path().join("data"), Tier::Basic);
    service.log_trip(request(monday(), 16.0)).unwrap();

    let result = service.export_report(&dir.path().join("report.csv"), monday());
    assert!(matches!(
        result,
        Err(Error::FeatureLocked {
            feature: Feature::ReportExport,
            tier: Tier::Basic
        })
    ));
    assert!(!dir.path().join("report.csv").exists());
}

#[test]
fn test_pro_export_writes_csv() {
    let dir = tempdir().unwrap();
    let service = open_service(&dir.path().join("data"), Tier::Pro);
    service.log_trip(request(monday(), 16.0)).unwrap();
    service.log_trip(request(monday(), 40.0)).unwrap();

    let report = dir.path().join("report.csv");
    let count = service.export_report(&report, monday()).unwrap();
    assert_eq!(count, 2);

    let text = std::fs::read_to_string(&report).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().next().unwrap().starts_with("date,pay"));
}

#[test]
fn test_pro_export_with_no_trips_writes_header() {
    let dir = tempdir().unwrap();
    let service = open_service(&dir.path().join("data"), Tier::Pro);

    let report = dir.path().join("report.csv");
    assert_eq!(service.export_report(&report, monday()).unwrap(), 0);

    let text = std::fs::read_to_string(&report).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("date,pay"));
}

#[test]
fn test_remove_trip() {
    let dir = tempdir().unwrap();
    let service = open_service(dir.path(), Tier::Pro);
    let record = service.log_trip(request(monday(), 16.0)).unwrap();

    service.remove_trip(&record.id).unwrap();
    assert!(service.history(monday()).unwrap().is_empty());
    assert!(matches!(
        service.remove_trip(&record.id),
        Err(Error::TripNotFound(_))
    ));
}

#[test]
fn test_resolve_id_by_prefix() {
    let dir = tempdir().unwrap();
    let service = open_service(dir.path(), Tier::Pro);
    let record = service.log_trip(request(monday(), 16.0)).unwrap();

    assert_eq!(service.resolve_id(&record.id).unwrap(), record.id);
    assert_eq!(service.resolve_id(&record.id[..8]).unwrap(), record.id);
    assert!(matches!(
        service.resolve_id("not-a-trip"),
        Err(Error::TripNotFound(_))
    ));
}

#[test]
fn test_open_trip_log_uses_config_data_dir() {
    let dir = tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().join("spark")),
        ..Config::default()
    };
    let repo = open_trip_log(&config).unwrap();
    let expected = dir.path().join("spark").join("trips.json");
    assert_eq!(repo.store_path(), expected);
}
