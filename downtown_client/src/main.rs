//! Headless demo client.
//!
//! Usage:
//!   cargo run -p downtown_client -- [--frames 300] [--fps 60]
//!
//! Runs a scripted session against an in-memory world: the avatar walks to
//! a parked car, takes it over, drives until it bumps the edge of the road,
//! and steps back out. Pose reports and possession changes are logged the
//! way the real transport layer would consume them.

use std::env;
use std::time::Duration;

use downtown_client::input::InputSample;
use downtown_client::person::Person;
use downtown_client::PlayerController;
use downtown_shared::config::ClientConfig;
use downtown_shared::state::{
    ActionTrigger, ActionTriggerType, CarDetails, CarSkin, EntityDetails, EntityId,
    EntityStateRecord, UserId,
};
use downtown_shared::surface::TileSurface;
use tracing::info;

struct DemoArgs {
    frames: u32,
    fps: u32,
}

fn parse_args() -> DemoArgs {
    let mut out = DemoArgs { frames: 300, fps: 60 };
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" if i + 1 < args.len() => {
                out.frames = args[i + 1].parse().unwrap_or(out.frames);
                i += 2;
            }
            "--fps" if i + 1 < args.len() => {
                out.fps = args[i + 1].parse().unwrap_or(out.fps);
                i += 2;
            }
            _ => i += 1,
        }
    }
    out
}

fn parked_car(id: &str, x: f32, y: f32) -> EntityStateRecord {
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args();
    let delta_ms = 1000.0 / args.fps as f32;
    info!(frames = args.frames, fps = args.fps, "Starting demo session");

    // A small block: a few walkable road rows surrounded by nothing.
    let surface = TileSurface::from_rows(
        32.0,
        &[
            "##########",
            "#........#",
            "#........#",
            "#........#",
            "#........#",
            "##########",
        ],
    );

    let user = UserId::new("tim");
    let avatar = Person::new_local(EntityId::new("tim"), user.clone(), 100.0, 100.0, 80.0);
    let mut controller = PlayerController::new(user, ClientConfig::default(), avatar);

    let car_id = EntityId::new("car-1");
    controller.apply_record(parked_car("car-1", 100.0, 64.0), 0.0, delta_ms);

    let mut time_ms = 0.0;
    for frame in 0..args.frames {
        time_ms += delta_ms;

        // Scripted input: walk up to the car, grab it, floor it, bail out.
        let input = match frame {
            0..=40 => InputSample::forward(),
            41 => {
                controller.action(&[car_id.clone()]);
                InputSample::NONE
            }
            42..=160 => InputSample::forward(),
            161..=220 => InputSample::reverse(),
            221 => {
                controller.action(&[car_id.clone()]);
                InputSample::NONE
            }
            _ => InputSample::NONE,
        };

        controller.update(&input, time_ms, delta_ms, &surface);

        for event in controller.drain_events() {
            info!(?event, frame, "client event");
        }
        if frame % 60 == 0 {
            if let Some(report) = controller.pose_report() {
                info!(
                    frame,
                    controlled = %controller.controlled_id(),
                    x = report.x,
                    y = report.y,
                    rotation = report.rotation,
                    "pose report"
                );
            }
        }

        tokio::time::sleep(Duration::from_secs_f32(delta_ms / 1000.0)).await;
    }

    info!("Demo finished");
    Ok(())
}
