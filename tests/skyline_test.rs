//! Tests for the skyline accumulator on realistic scenes

use itertools::Itertools;

use skyline::application::services::SAMPLE_BUILDINGS;
use skyline::domain::{Building, DomainError, Skyline};
use skyline::util::testing;

fn b(start: f64, end: f64, height: f64) -> Building {
    Building::new(start, end, height)
}

fn sample_skyline() -> Vec<Building> {
    vec![
        b(1.0, 2.0, 1.0),
        b(2.0, 3.0, 2.0),
        b(3.0, 3.5, 1.0),
        b(3.5, 5.0, 1.5),
        b(5.0, 7.0, 3.0),
        b(7.0, 8.0, 1.5),
        b(8.0, 9.0, 0.5),
    ]
}

#[test]
fn given_sample_scene_when_flattening_then_classic_outline() {
    testing::init_test_setup();

    let skyline: Skyline = SAMPLE_BUILDINGS.into_iter().collect();

    assert_eq!(skyline.flatten(), sample_skyline());
}

#[test]
fn given_flattened_skyline_when_reinserted_then_unchanged() {
    let first: Skyline = SAMPLE_BUILDINGS.into_iter().collect();

    let second: Skyline = first.flatten().into_iter().collect();

    assert_eq!(second.flatten(), first.flatten());
}

#[test]
fn given_every_insertion_order_when_flattening_then_same_outline() {
    let expected = sample_skyline();

    let mut orders = 0;
    for order in SAMPLE_BUILDINGS
        .iter()
        .copied()
        .permutations(SAMPLE_BUILDINGS.len())
    {
        let skyline: Skyline = order.iter().copied().collect();
        assert_eq!(skyline.flatten(), expected, "order: {order:?}");
        orders += 1;
    }

    assert_eq!(orders, 5040);
}

#[test]
fn given_empty_buildings_when_inserting_then_outline_unchanged() {
    let mut skyline: Skyline = SAMPLE_BUILDINGS.into_iter().collect();
    let before = skyline.flatten();

    skyline
        .insert(Building::EMPTY)
        .insert(b(4.0, 4.0, 9.0))
        .insert(Building::EMPTY);

    assert_eq!(skyline.flatten(), before);
}

#[test]
fn given_lower_building_inside_taller_when_inserting_then_hidden() {
    let mut skyline = Skyline::new();

    skyline.insert(b(0.0, 10.0, 5.0)).insert(b(2.0, 4.0, 1.0));

    assert_eq!(skyline.flatten(), vec![b(0.0, 10.0, 5.0)]);
}

#[test]
fn given_chain_of_touching_equal_buildings_when_flattening_then_single_segment() {
    let skyline: Skyline = (0..20)
        .map(|i| b(f64::from(i), f64::from(i + 1), 2.0))
        .collect();

    assert_eq!(skyline.flatten(), vec![b(0.0, 20.0, 2.0)]);
    assert_eq!(skyline.len(), 20);
}

#[test]
fn given_disjoint_buildings_when_flattening_then_kept_apart() {
    let skyline: Skyline = [b(5.0, 6.0, 1.0), b(1.0, 2.0, 1.0), b(3.0, 4.0, 1.0)]
        .into_iter()
        .collect();

    assert_eq!(
        skyline.flatten(),
        vec![b(1.0, 2.0, 1.0), b(3.0, 4.0, 1.0), b(5.0, 6.0, 1.0)]
    );
}

#[test]
fn given_sample_skyline_when_balancing_then_not_implemented() {
    let skyline: Skyline = SAMPLE_BUILDINGS.into_iter().collect();

    let err = skyline.balance().unwrap_err();

    assert_eq!(err, DomainError::BalancingNotImplemented);
}
