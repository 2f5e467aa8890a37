//! Possession arbiter.
//!
//! Owns every drivable entity in an id-keyed arena and the single
//! `controlled` id that receives local input. Possession moves only
//! through [`PlayerController::set_controlled`], which fires the control
//! hand-off hooks exactly once per side and announces the change on the
//! event queue for the camera/HUD to drain once per frame.

use std::collections::HashMap;

use downtown_shared::config::ClientConfig;
use downtown_shared::event::{ClientEvent, EventQueue};
use downtown_shared::state::{EntityId, EntityStateRecord, PoseReport, UserId};
use downtown_shared::surface::TileSurface;
use downtown_shared::timer::{FrameScheduler, TimerEvent};
use tracing::{debug, warn};

use crate::entity::{ActionOutcome, Entity};
use crate::frame::FrameCtx;
use crate::input::InputSample;
use crate::person::Person;

pub struct PlayerController {
    user_id: UserId,
    config: ClientConfig,
    entities: HashMap<EntityId, Entity>,
    /// The one entity receiving local input.
    controlled: EntityId,
    /// Fixed fallback: the player's own avatar.
    main: EntityId,
    scheduler: FrameScheduler,
    events: EventQueue,
}

impl PlayerController {
    /// Creates the arbiter possessing the player's own avatar.
    pub fn new(user_id: UserId, config: ClientConfig, mut main: Person) -> Self {
        let main_id = main.id().clone();
        main.take_control();

        let mut entities = HashMap::new();
        entities.insert(main_id.clone(), Entity::Person(main));

        Self {
            user_id,
            config,
            entities,
            controlled: main_id.clone(),
            main: main_id,
            scheduler: FrameScheduler::new(),
            events: EventQueue::new(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn controlled_id(&self) -> &EntityId {
        &self.controlled
    }

    pub fn main_id(&self) -> &EntityId {
        &self.main
    }

    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Per-frame update: deliver due timers, then forward input to the
    /// possessed entity only. Non-possessed entities advance solely via
    /// [`Self::apply_snapshot`].
    pub fn update(&mut self, input: &InputSample, time_ms: f32, delta_ms: f32, surface: &TileSurface) {
        self.pump_timers(time_ms);

        let Some(entity) = self.entities.get_mut(&self.controlled) else {
            warn!(entity = %self.controlled, "controlled entity missing from arena");
            return;
        };
        let mut ctx = FrameCtx {
            time_ms,
            delta_ms,
            surface,
            scheduler: &mut self.scheduler,
            events: &mut self.events,
            config: &self.config,
        };
        entity.update_input(input, &mut ctx);
    }

    /// Handles a press of the action key against a candidate list.
    ///
    /// The first candidate (in list order, deliberately not
    /// nearest-of-many) that carries an action descriptor, is actionable by
    /// the local user, and lies within its trigger radius of the possessed
    /// entity gets to decide the outcome. The possessed entity itself is a
    /// valid target; that is how a stopped car hands control back.
    pub fn action(&mut self, candidates: &[EntityId]) {
        let Some(current) = self.entities.get(&self.controlled) else {
            return;
        };
        let origin = current.sprite().position();

        for id in candidates {
            let Some(entity) = self.entities.get(id) else {
                continue;
            };
            let Some(trigger) = entity.action_trigger() else {
                continue;
            };
            if !entity.is_actionable(&self.user_id) {
                continue;
            }
            if origin.distance(entity.sprite().position()) > trigger.radius() {
                continue;
            }

            let outcome = entity.on_action(*id == self.controlled);
            match outcome {
                ActionOutcome::Possess => {
                    self.set_controlled(id.clone());
                }
                ActionOutcome::ReturnToMain => {
                    self.reset_to_main();
                }
                ActionOutcome::Ignore => {
                    debug!(entity = %id, "action target ignored the action");
                }
            }
            return;
        }
    }

    /// Swaps possession to `next`: `remove_control` on the outgoing entity,
    /// `take_control` on the incoming one, and a possession-changed event.
    /// Returns the previous entity id, or `None` when no swap happened.
    pub fn set_controlled(&mut self, next: EntityId) -> Option<EntityId> {
        if next == self.controlled {
            return None;
        }
        if !self.entities.contains_key(&next) {
            warn!(entity = %next, "cannot possess unknown entity");
            return None;
        }

        let previous = self.controlled.clone();
        if let Some(outgoing) = self.entities.get_mut(&previous) {
            outgoing.remove_control();
        }
        self.controlled = next.clone();
        self.entities
            .get_mut(&self.controlled)
            .expect("presence checked above")
            .take_control();

        self.events.push(ClientEvent::PossessionChanged {
            previous: previous.clone(),
            current: next,
        });
        Some(previous)
    }

    /// Returns possession to the main avatar, reappearing it where the
    /// currently possessed entity stands.
    pub fn reset_to_main(&mut self) {
        if self.controlled == self.main {
            return;
        }
        let position = self
            .entities
            .get(&self.controlled)
            .map(|entity| entity.sprite().position());
        if let (Some(position), Some(main)) = (position, self.entities.get_mut(&self.main)) {
            main.sprite_mut().set_position(position);
        }
        let main = self.main.clone();
        self.set_controlled(main);
    }

    /// Routes a batch of server records: known ids reconcile, unknown ids
    /// spawn a new entity of the record's kind.
    pub fn apply_snapshot(
        &mut self,
        records: impl IntoIterator<Item = EntityStateRecord>,
        time_ms: f32,
        delta_ms: f32,
    ) {
        for record in records {
            self.apply_record(record, time_ms, delta_ms);
        }
    }

    pub fn apply_record(&mut self, record: EntityStateRecord, time_ms: f32, delta_ms: f32) {
        match self.entities.get_mut(&record.id) {
            Some(entity) => {
                entity.update_from_server(record, time_ms, delta_ms, &self.user_id, &self.config);
            }
            None => {
                debug!(entity = %record.id, "first record for entity, spawning");
                let entity = Entity::from_record(record, &self.config, time_ms);
                self.entities.insert(entity.id().clone(), entity);
            }
        }
    }

    /// Removes an entity that left the authoritative world. Possession
    /// falls back to the main avatar first; the main avatar itself is
    /// never removed.
    pub fn remove(&mut self, id: &EntityId) {
        if *id == self.main {
            warn!(entity = %id, "refusing to remove the main avatar");
            return;
        }
        if *id == self.controlled {
            self.reset_to_main();
        }
        self.entities.remove(id);
    }

    /// Rounded pose of the possessed entity, for outbound reports.
    pub fn pose_report(&self) -> Option<PoseReport> {
        self.entities.get(&self.controlled).map(Entity::pose_report)
    }

    /// Events accumulated since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<ClientEvent> {
        self.events.drain()
    }

    /// Delivers due one-shot timers. Events whose entity has since been
    /// removed are dropped here, so a destroyed entity cannot leak a live
    /// callback.
    fn pump_timers(&mut self, time_ms: f32) {
        for event in self.scheduler.due(time_ms) {
            match event {
                TimerEvent::BumpRecovered(id) => {
                    if let Some(entity) = self.entities.get_mut(&id) {
                        entity.set_bumping(false);
                    }
                }
                TimerEvent::TintClear(id) => {
                    if let Some(entity) = self.entities.get_mut(&id) {
                        entity.sprite_mut().tint = None;
                    }
                }
            }
        }
    }
}
