//! Drivable entity sum type.
//!
//! The entity-kind set is small and closed, so the capability contract
//! (actionability, control hand-off, local prediction, server updates,
//! pose reporting) is dispatched over an enum rather than trait objects.

use downtown_shared::config::ClientConfig;
use downtown_shared::render::Sprite;
use downtown_shared::state::{
    ActionTrigger, EntityDetails, EntityId, EntityStateRecord, PoseReport, UserId,
};

use crate::car::Car;
use crate::frame::FrameCtx;
use crate::input::InputSample;
use crate::person::Person;

/// What selecting this entity as an action target should do, given whether
/// it is currently the possessed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Transfer possession to this entity.
    Possess,
    /// Hand possession back to the main avatar.
    ReturnToMain,
    /// Nothing to do.
    Ignore,
}

pub enum Entity {
    Car(Car),
    Person(Person),
}

impl Entity {
    /// Creates the right entity kind for a record first seen in a snapshot.
    pub fn from_record(record: EntityStateRecord, config: &ClientConfig, time_ms: f32) -> Self {
        match record.details {
            EntityDetails::Car(_) => {
                Entity::Car(Car::from_record(record, time_ms).expect("details tag checked"))
            }
            EntityDetails::Person(_) => Entity::Person(
                Person::from_record(record, config.walk_speed, time_ms)
                    .expect("details tag checked"),
            ),
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Car(car) => car.id(),
            Entity::Person(person) => person.id(),
        }
    }

    pub fn sprite(&self) -> &Sprite {
        match self {
            Entity::Car(car) => &car.sprite,
            Entity::Person(person) => &person.sprite,
        }
    }

    pub fn sprite_mut(&mut self) -> &mut Sprite {
        match self {
            Entity::Car(car) => &mut car.sprite,
            Entity::Person(person) => &mut person.sprite,
        }
    }

    /// The action descriptor from the last consumed record, if any.
    pub fn action_trigger(&self) -> Option<ActionTrigger> {
        match self {
            Entity::Car(car) => car.state().action,
            Entity::Person(person) => person.state().and_then(|record| record.action),
        }
    }

    pub fn is_actionable(&self, user: &UserId) -> bool {
        match self {
            Entity::Car(car) => car.is_actionable(user),
            Entity::Person(person) => person.is_actionable(user),
        }
    }

    /// Decides the possession consequence of an action on this entity.
    /// Pure: the arbiter applies the outcome.
    pub fn on_action(&self, currently_possessed: bool) -> ActionOutcome {
        match self {
            Entity::Car(car) => {
                if !currently_possessed {
                    ActionOutcome::Possess
                } else if car.is_stopped() {
                    ActionOutcome::ReturnToMain
                } else {
                    // Can't leave a moving car.
                    ActionOutcome::Ignore
                }
            }
            // Reserved; acting on a person does nothing yet.
            Entity::Person(_) => ActionOutcome::Ignore,
        }
    }

    pub fn is_possessed(&self) -> bool {
        match self {
            Entity::Car(car) => car.is_possessed(),
            Entity::Person(person) => person.is_possessed(),
        }
    }

    pub fn take_control(&mut self) {
        match self {
            Entity::Car(car) => car.take_control(),
            Entity::Person(person) => person.take_control(),
        }
    }

    pub fn remove_control(&mut self) {
        match self {
            Entity::Car(car) => car.remove_control(),
            Entity::Person(person) => person.remove_control(),
        }
    }

    pub fn is_bumping(&self) -> bool {
        match self {
            Entity::Car(car) => car.is_bumping(),
            Entity::Person(person) => person.is_bumping(),
        }
    }

    pub fn set_bumping(&mut self, bumping: bool) {
        match self {
            Entity::Car(car) => car.set_bumping(bumping),
            Entity::Person(person) => person.set_bumping(bumping),
        }
    }

    pub fn update_input(&mut self, input: &InputSample, ctx: &mut FrameCtx<'_>) {
        match self {
            Entity::Car(car) => car.update_input(input, ctx),
            Entity::Person(person) => person.update_input(input, ctx),
        }
    }

    pub fn update_from_server(
        &mut self,
        record: EntityStateRecord,
        time_ms: f32,
        delta_ms: f32,
        local_user: &UserId,
        config: &ClientConfig,
    ) {
        match self {
            Entity::Car(car) => car.update_from_server(record, time_ms, delta_ms, local_user, config),
            Entity::Person(person) => {
                person.update_from_server(record, time_ms, delta_ms, local_user, config)
            }
        }
    }

    pub fn pose_report(&self) -> PoseReport {
        match self {
            Entity::Car(car) => car.pose_report(),
            Entity::Person(person) => person.pose_report(),
        }
    }
}
