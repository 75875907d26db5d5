//! Day fee integration tests against the reference tariff document.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use toll_calculator::{AppConfig, DomainError, TollCalculator, VehicleCategory, DAILY_CAP};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tariffs.json")
}

fn calculator() -> TollCalculator {
    TollCalculator::from_file(fixture(), chrono_tz::UTC).expect("Failed to load fixture tariffs")
}

fn at(m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, m, d, h, min, 0).unwrap()
}

fn car_fee(passages: &[DateTime<Utc>]) -> u32 {
    calculator()
        .compute_day_fee(VehicleCategory::Car, passages)
        .expect("Fee computation failed")
}

#[test]
fn fixture_loads() {
    let calc = calculator();
    assert_eq!(calc.tariffs().len(), 9);
    assert_eq!(calc.exemptions().len(), 7);
    assert_eq!(calc.daily_cap(), DAILY_CAP);
}

#[test]
fn car_passing_at_11_30() {
    assert_eq!(car_fee(&[at(10, 1, 11, 30)]), 8);
}

#[test]
fn car_passing_at_12_00() {
    assert_eq!(car_fee(&[at(10, 1, 12, 0)]), 0);
}

#[test]
fn car_passing_through_the_morning() {
    let passages = [
        at(10, 1, 5, 30),
        at(10, 1, 6, 5),
        at(10, 1, 7, 4),
        at(10, 1, 7, 6),
        at(10, 1, 8, 6),
        at(10, 1, 11, 0),
        at(10, 1, 11, 30),
    ];
    assert_eq!(car_fee(&passages), 44);
}

#[test]
fn car_hitting_max_fee() {
    let passages = [
        at(10, 1, 6, 30),
        at(10, 1, 7, 31),
        at(10, 1, 8, 32),
        at(10, 1, 9, 33),
        at(10, 1, 10, 34),
        at(10, 1, 11, 35),
    ];
    assert_eq!(car_fee(&passages), 60);
}

#[test]
fn car_morning_and_afternoon() {
    let passages = [
        at(10, 1, 6, 0),
        at(10, 1, 6, 30),
        at(10, 1, 14, 30),
        at(10, 1, 15, 30),
        at(10, 1, 17, 0),
    ];
    assert_eq!(car_fee(&passages), 13 + 18 + 13);
}

#[test]
fn motorbike_passing_at_6_00() {
    let fee = calculator()
        .compute_day_fee(VehicleCategory::Motorbike, &[at(10, 1, 6, 0)])
        .unwrap();
    assert_eq!(fee, 0);
}

#[test]
fn every_exempt_category_pays_nothing() {
    let calc = calculator();
    let passages = [at(10, 1, 7, 0), at(10, 1, 15, 45)];
    for vehicle in [
        VehicleCategory::Motorbike,
        VehicleCategory::Emergency,
        VehicleCategory::Diplomat,
        VehicleCategory::Foreign,
        VehicleCategory::Military,
    ] {
        assert_eq!(calc.compute_day_fee(vehicle, &passages).unwrap(), 0, "{vehicle}");
    }
    assert_eq!(calc.compute_day_fee(VehicleCategory::Tractor, &passages).unwrap(), 36);
}

#[test]
fn car_passing_on_may_first() {
    assert_eq!(car_fee(&[at(5, 1, 6, 0)]), 0);
}

#[test]
fn car_passing_on_good_friday() {
    assert_eq!(car_fee(&[at(4, 19, 6, 0)]), 0);
}

#[test]
fn car_passing_on_a_saturday() {
    assert_eq!(car_fee(&[at(10, 5, 7, 30)]), 0);
}

#[test]
fn window_edges() {
    let calc = calculator();
    assert_eq!(calc.match_fee(at(10, 1, 6, 0)), 8);
    assert_eq!(calc.match_fee(at(10, 1, 6, 30)), 13);
    assert_eq!(calc.match_fee(at(10, 1, 18, 30)), 0);
}

#[test]
fn out_of_order_passages_are_rejected() {
    let err = calculator()
        .compute_day_fee(VehicleCategory::Car, &[at(10, 1, 8, 0), at(10, 1, 7, 0)])
        .unwrap_err();
    assert!(matches!(err, DomainError::PassagesOutOfOrder { index: 1 }));
}

#[test]
fn loads_through_app_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(fixture(), dir.path().join("tariffs.json")).unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[tolls]\ntariff_file = \"tariffs.json\"\nreference_zone = \"UTC\"\n",
    )
    .unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    let calc = TollCalculator::from_file(&config.tolls.tariff_file, config.tolls.zone().unwrap())
        .unwrap();

    assert_eq!(calc.compute_day_fee(VehicleCategory::Car, &[at(10, 1, 7, 30)]).unwrap(), 18);
}
