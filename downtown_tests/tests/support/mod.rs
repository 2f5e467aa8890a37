//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use downtown_client::person::Person;
use downtown_client::PlayerController;
use downtown_shared::config::ClientConfig;
use downtown_shared::state::{
    ActionTrigger, ActionTriggerType, CarDetails, CarSkin, EntityDetails, EntityId,
    EntityStateRecord, PersonDetails, PersonSkin, UserId,
};
use downtown_shared::surface::TileSurface;

/// Frame cadence used by the scripted tests.
pub const DELTA_MS: f32 = 16.0;

/// Test-writer tracing so `RUST_LOG`-style filtering works under the
/// harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

/// A large fully walkable surface so movement tests never hit a wall.
pub fn open_road() -> TileSurface {
    let row = ".".repeat(64);
    let rows: Vec<&str> = (0..64).map(|_| row.as_str()).collect();
    TileSurface::from_rows(32.0, &rows)
}

pub fn car_record(id: &str, x: f32, y: f32) -> EntityStateRecord {
    EntityStateRecord {
        id: EntityId::new(id),
        x,
        y,
        rotation: 0.0,
        velocity: None,
        owner_user_id: UserId::new("city"),
        controller_user_id: None,
        details: EntityDetails::Car(CarDetails {
            skin: CarSkin::Sedan,
            max_speed: 100.0,
            acceleration: 100.0,
            rotation_speed: 3.0,
            max_passengers: 4,
            passenger_user_ids: vec![],
            driver_user_id: None,
        }),
        action: Some(ActionTrigger {
            trigger_type: ActionTriggerType::ActionKeyPressed(32.0),
        }),
        animation: None,
    }
}

pub fn person_record(id: &str, user: &str, x: f32, y: f32) -> EntityStateRecord {
    EntityStateRecord {
        id: EntityId::new(id),
        x,
        y,
        rotation: 0.0,
        velocity: None,
        owner_user_id: UserId::new(user),
        controller_user_id: Some(UserId::new(user)),
        details: EntityDetails::Person(PersonDetails {
            user_id: UserId::new(user),
            skin: PersonSkin::Default,
        }),
        action: None,
        animation: None,
    }
}

/// A controller for user `tim` whose avatar stands at the given position.
pub fn controller_at(x: f32, y: f32) -> PlayerController {
    let user = UserId::new("tim");
    let avatar = Person::new_local(EntityId::new("tim"), user.clone(), x, y, 80.0);
    PlayerController::new(user, ClientConfig::default(), avatar)
}

pub fn id(raw: &str) -> EntityId {
    EntityId::new(raw)
}
