use chrono::{Duration, Utc};

use super::billing::{elapsed_units, total_charge, MINIMUM_CHARGE};
use super::*;
use crate::config::LotConfig;
use crate::models::SlotSize;

#[test]
fn three_units_costs_the_minimum() {
    // Remainder of 3 is fully inside the free window.
    assert_eq!(total_charge(SlotSize::Small, 3), 40);
}

#[test]
fn five_units_in_a_medium_slot() {
    // 2 chargeable units at 60.
    assert_eq!(total_charge(SlotSize::Medium, 5), 120);
}

#[test]
fn full_day_plus_remainder_in_a_large_slot() {
    // One full day (5000) plus 1 chargeable unit of the 4-unit remainder.
    assert_eq!(total_charge(SlotSize::Large, 28), 5100);
}

#[test]
fn zero_units_still_pays_the_minimum() {
    assert_eq!(total_charge(SlotSize::Small, 0), MINIMUM_CHARGE);
    assert_eq!(total_charge(SlotSize::Large, 0), MINIMUM_CHARGE);
}

#[test]
fn exact_full_days_have_no_remainder_charge() {
    assert_eq!(total_charge(SlotSize::Medium, 24), 5000);
    assert_eq!(total_charge(SlotSize::Large, 48), 10000);
}

#[test]
fn remainder_free_window_applies_after_full_days() {
    // 27 = 1 day + 3 free units.
    assert_eq!(total_charge(SlotSize::Large, 27), 5000);
    // 58 = 2 days + 10 units, 7 chargeable at 100.
    assert_eq!(total_charge(SlotSize::Large, 58), 10700);
}

#[test]
fn elapsed_units_round_up_to_whole_minutes() {
    let t0 = Utc::now();
    assert_eq!(elapsed_units(t0, t0), 0);
    assert_eq!(elapsed_units(t0, t0 + Duration::milliseconds(1)), 1);
    assert_eq!(elapsed_units(t0, t0 + Duration::seconds(60)), 1);
    assert_eq!(elapsed_units(t0, t0 + Duration::seconds(61)), 2);
    assert_eq!(elapsed_units(t0, t0 + Duration::seconds(90)), 2);
    assert_eq!(elapsed_units(t0, t0 + Duration::minutes(5)), 5);
}

#[test]
fn elapsed_units_clamp_negative_spans_to_zero() {
    let t0 = Utc::now();
    assert_eq!(elapsed_units(t0, t0 - Duration::minutes(2)), 0);
}

#[test]
fn immediate_unpark_pays_the_minimum() {
    let mut engine = ParkingEngine::new(&LotConfig::default()).unwrap();
    let now = Utc::now();

    engine.park_vehicle_at("s", "MIN-1", now).unwrap();
    let receipt = engine.unpark_vehicle_at("MIN-1", now).unwrap();

    assert_eq!(receipt.total_charge, MINIMUM_CHARGE);
    assert_eq!(
        receipt.message(),
        "Vehicle with plate number MIN-1 unparked. Total charge: 40 pesos."
    );
}

#[test]
fn unpark_charges_by_assigned_slot_size() {
    // Single medium slot; a five-unit stay yields 2 chargeable units at 60.
    let config = LotConfig {
        entry_points: 1,
        distances: vec![vec![2]],
        sizes: vec![SlotSize::Medium],
    };
    let mut engine = ParkingEngine::new(&config).unwrap();
    let t0 = Utc::now();

    engine.park_vehicle_at("m", "CHG-1", t0).unwrap();
    let receipt = engine
        .unpark_vehicle_at("CHG-1", t0 + Duration::minutes(5))
        .unwrap();

    assert_eq!(receipt.total_charge, 120);
}

#[test]
fn small_vehicle_in_large_slot_pays_large_rate() {
    // Rates follow the slot, not the vehicle.
    let config = LotConfig {
        entry_points: 1,
        distances: vec![vec![1]],
        sizes: vec![SlotSize::Large],
    };
    let mut engine = ParkingEngine::new(&config).unwrap();
    let t0 = Utc::now();

    engine.park_vehicle_at("s", "SIL-1", t0).unwrap();
    let receipt = engine
        .unpark_vehicle_at("SIL-1", t0 + Duration::minutes(10))
        .unwrap();

    // 7 chargeable units at 100.
    assert_eq!(receipt.total_charge, 700);
}

#[test]
fn long_stay_accumulates_full_day_charges() {
    let config = LotConfig {
        entry_points: 1,
        distances: vec![vec![1]],
        sizes: vec![SlotSize::Large],
    };
    let mut engine = ParkingEngine::new(&config).unwrap();
    let t0 = Utc::now();

    engine.park_vehicle_at("l", "DAY-1", t0).unwrap();
    // 28 whole minutes elapse; billing counts them as 28 units.
    let receipt = engine
        .unpark_vehicle_at("DAY-1", t0 + Duration::minutes(28))
        .unwrap();

    assert_eq!(receipt.total_charge, 5100);
}
