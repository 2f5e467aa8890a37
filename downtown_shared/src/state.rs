//! Authoritative state records.
//!
//! Goals:
//! - Mirror the server's snapshot shape exactly (serde, externally tagged
//!   details variant).
//! - Keep ids as opaque newtypes so entity and user identity never mix.
//! - Records are immutable once received; a newer record replaces the old
//!   one wholesale.

use serde::{Deserialize, Serialize};

use crate::math::{round3, Vec2};

/// Stable identity of one simulated object, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarSkin {
    Sedan,
    Police,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonSkin {
    Default,
}

/// Vehicle parameters and occupancy, as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub skin: CarSkin,
    pub max_speed: f32,
    pub acceleration: f32,
    pub rotation_speed: f32,
    pub max_passengers: u8,
    #[serde(default)]
    pub passenger_user_ids: Vec<UserId>,
    pub driver_user_id: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub user_id: UserId,
    pub skin: PersonSkin,
}

/// Per-kind payload. Externally tagged so the wire form is
/// `{"Car": {...}}` or `{"Person": {...}}`; consumers discriminate by tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityDetails {
    Car(CarDetails),
    Person(PersonDetails),
}

impl EntityDetails {
    /// The user currently driving/embodying this entity, if any.
    pub fn driven_by(&self) -> Option<&UserId> {
        match self {
            EntityDetails::Car(car) => car.driver_user_id.as_ref(),
            EntityDetails::Person(person) => Some(&person.user_id),
        }
    }
}

/// How an action on this entity is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionTriggerType {
    /// Action key pressed within the given radius (world pixels).
    ActionKeyPressed(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionTrigger {
    pub trigger_type: ActionTriggerType,
}

impl ActionTrigger {
    pub fn radius(&self) -> f32 {
        match self.trigger_type {
            ActionTriggerType::ActionKeyPressed(radius) => radius,
        }
    }
}

/// One authoritative snapshot of one entity, as pushed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStateRecord {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    /// Heading in radians, raw (unnormalized).
    pub rotation: f32,
    /// Informational only; the client never integrates it.
    pub velocity: Option<Vec2>,
    pub owner_user_id: UserId,
    /// `None` while nobody is driving the entity.
    pub controller_user_id: Option<UserId>,
    pub details: EntityDetails,
    /// Present iff the entity can be targeted by a possession action.
    pub action: Option<ActionTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

impl EntityStateRecord {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Rounded local-pose report sent back to the server.
///
/// Rotation is rounded to three decimals and position to whole pixels; a
/// deliberate bandwidth/precision contract, not cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseReport {
    pub rotation: f32,
    pub x: i32,
    pub y: i32,
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

impl PoseReport {
    pub fn from_pose(x: f32, y: f32, rotation: f32, hidden: bool, animation: Option<String>) -> Self {
        Self {
            rotation: round3(rotation),
            x: x.round() as i32,
            y: y.round() as i32,
            hidden,
            animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car_record() -> EntityStateRecord {
        EntityStateRecord {
            id: EntityId::new("car-1"),
            x: 608.0,
            y: 800.0,
            rotation: 1.5708,
            velocity: Some(Vec2::ZERO),
            owner_user_id: UserId::new("npc"),
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

    #[test]
    fn details_serialize_externally_tagged() {
        let json = serde_json::to_value(&car_record()).unwrap();
        assert!(json["details"]["Car"].is_object());
        assert!(json["details"].get("Person").is_none());
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = car_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: EntityStateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn pose_report_rounds() {
        let report = PoseReport::from_pose(100.4, 99.6, 1.23456, false, None);
        assert_eq!(report.x, 100);
        assert_eq!(report.y, 100);
        assert_eq!(report.rotation, 1.235);
    }

    #[test]
    fn driven_by_discriminates_by_kind() {
        let record = car_record();
        assert_eq!(record.details.driven_by(), None);

        let person = EntityDetails::Person(PersonDetails {
            user_id: UserId::new("tim"),
            skin: PersonSkin::Default,
        });
        assert_eq!(person.driven_by(), Some(&UserId::new("tim")));
    }
}
