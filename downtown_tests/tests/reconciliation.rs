//! Snapshot routing and remote-pose reconciliation through the arbiter.

mod support;

use downtown_client::input::InputSample;
use support::{car_record, controller_at, id, init_tracing, open_road, person_record, DELTA_MS};

#[test]
fn first_record_spawns_entity_at_record_pose() -> anyhow::Result<()> {
    init_tracing();
    let mut controller = controller_at(0.0, 0.0);
    controller.apply_snapshot(
        vec![
            car_record("car-1", 300.0, 400.0),
            person_record("bob", "bob", 50.0, 60.0),
        ],
        0.0,
        DELTA_MS,
    );

    let car = controller
        .entity(&id("car-1"))
        .ok_or_else(|| anyhow::anyhow!("car not spawned"))?;
    assert_eq!(car.sprite().position().x, 300.0);
    assert_eq!(car.sprite().position().y, 400.0);
    assert!(controller.entity(&id("bob")).is_some());
    Ok(())
}

#[test]
fn full_window_elapsed_snaps_to_record() {
    let mut controller = controller_at(0.0, 0.0);
    controller.apply_record(car_record("car-1", 0.0, 0.0), 0.0, DELTA_MS);

    // Exactly one expected interval (64 ms) since the last record: the
    // lerp factor saturates at 1 and the pose snaps in a single step.
    controller.apply_record(car_record("car-1", 200.0, 120.0), 64.0, DELTA_MS);

    let sprite = controller.entity(&id("car-1")).unwrap().sprite();
    assert_eq!(sprite.x, 200.0);
    assert_eq!(sprite.y, 120.0);
}

#[test]
fn half_window_elapsed_moves_halfway() {
    let mut controller = controller_at(0.0, 0.0);
    controller.apply_record(car_record("car-1", 0.0, 0.0), 0.0, DELTA_MS);
    controller.apply_record(car_record("car-1", 100.0, 40.0), 32.0, DELTA_MS);

    let sprite = controller.entity(&id("car-1")).unwrap().sprite();
    assert_eq!(sprite.x, 50.0);
    assert_eq!(sprite.y, 20.0);
}

#[test]
fn repeated_full_window_steps_do_not_overshoot() {
    let mut controller = controller_at(0.0, 0.0);
    controller.apply_record(car_record("car-1", 0.0, 0.0), 0.0, DELTA_MS);

    controller.apply_record(car_record("car-1", 80.0, 0.0), 64.0, DELTA_MS);
    controller.apply_record(car_record("car-1", 80.0, 0.0), 128.0, DELTA_MS);
    controller.apply_record(car_record("car-1", 80.0, 0.0), 192.0, DELTA_MS);

    let sprite = controller.entity(&id("car-1")).unwrap().sprite();
    assert_eq!(sprite.x, 80.0);
    assert_eq!(sprite.y, 0.0);
}

#[test]
fn heading_reconciles_across_the_wraparound() {
    let mut controller = controller_at(0.0, 0.0);
    let mut spawn = car_record("car-1", 0.0, 0.0);
    spawn.rotation = 3.0;
    controller.apply_record(spawn, 0.0, DELTA_MS);

    let mut target = car_record("car-1", 0.0, 0.0);
    target.rotation = -3.0;
    // Large delta so the angular step bound is not the limiter.
    controller.apply_record(target, 64.0, 1000.0);

    let rotation = controller.entity(&id("car-1")).unwrap().sprite().rotation;
    // Short way from 3.0 to -3.0 is upward through PI, never back through 0.
    assert!(rotation > 3.0);
}

#[test]
fn remote_person_adopts_record_animation() {
    let mut controller = controller_at(0.0, 0.0);
    controller.apply_record(person_record("bob", "bob", 10.0, 10.0), 0.0, DELTA_MS);

    let mut walking = person_record("bob", "bob", 30.0, 10.0);
    walking.animation = Some("walk".to_string());
    controller.apply_record(walking, 64.0, DELTA_MS);

    let sprite = controller.entity(&id("bob")).unwrap().sprite();
    assert_eq!(sprite.animation.as_deref(), Some("walk"));
}

#[test]
fn locally_driven_car_ignores_server_pose() {
    let surface = open_road();
    let mut controller = controller_at(100.0, 100.0);
    controller.apply_record(car_record("car-1", 100.0, 100.0), 0.0, DELTA_MS);
    controller.action(&[id("car-1")]);
    assert_eq!(controller.controlled_id(), &id("car-1"));

    // Drive a bit, then receive a contradicting record: local prediction
    // stays authoritative while we are the driver.
    controller.update(&InputSample::forward(), 500.0, 500.0, &surface);
    let predicted = controller.entity(&id("car-1")).unwrap().sprite().position();

    controller.apply_record(car_record("car-1", 500.0, 500.0), 564.0, DELTA_MS);
    let after = controller.entity(&id("car-1")).unwrap().sprite().position();
    assert_eq!(after, predicted);
}

#[test]
fn own_avatar_record_is_bookkept_not_applied() {
    let mut controller = controller_at(100.0, 100.0);

    // The server's record for our own person must never yank the avatar.
    controller.apply_record(person_record("tim", "tim", 400.0, 400.0), 64.0, DELTA_MS);
    let sprite = controller.entity(&id("tim")).unwrap().sprite();
    assert_eq!(sprite.position().x, 100.0);
    assert_eq!(sprite.position().y, 100.0);

    // But the record itself is stored for upstream consumers.
    match controller.entity(&id("tim")).unwrap() {
        downtown_client::entity::Entity::Person(person) => {
            assert!(person.state().is_some());
        }
        _ => unreachable!(),
    }
}

#[test]
fn unpossessed_remote_car_reconciles_while_we_walk() {
    let surface = open_road();
    let mut controller = controller_at(100.0, 100.0);
    controller.apply_record(car_record("car-1", 500.0, 500.0), 0.0, DELTA_MS);

    // Frames advance only the avatar; the remote car moves solely on
    // snapshot arrival.
    controller.update(&InputSample::forward(), 16.0, DELTA_MS, &surface);
    controller.update(&InputSample::forward(), 32.0, DELTA_MS, &surface);
    let parked = controller.entity(&id("car-1")).unwrap().sprite().position();
    assert_eq!((parked.x, parked.y), (500.0, 500.0));

    controller.apply_record(car_record("car-1", 600.0, 500.0), 64.0, DELTA_MS);
    let moved = controller.entity(&id("car-1")).unwrap().sprite().position();
    assert_eq!((moved.x, moved.y), (600.0, 500.0));
}
