//! field-run: headless asteroid-field driver for the kessler simulation.
//!
//! Usage:
//!   field-run run --seed 7 --ticks 3000 --asteroids 12 --snapshot
//!   field-run run --config field.json
//!   field-run config > field.json

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use glam::DVec2;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use kessler_core::constants::DT;
use kessler_core::enums::{BoundaryMode, Fate};
use kessler_core::types::rotated_offset;
use kessler_core::SimConfig;
use kessler_sim::{
    Contact, EndReason, Entity, EntityKind, LifeEvent, Reaction, Registry, SimulationEngine, Spawn,
};

const DEFAULT_TICKS: u64 = 3_000;
const DEFAULT_ASTEROIDS: usize = 10;

const SHIP_WIDTH: f64 = 30.0;
const SHIP_TURN_RATE: f64 = 45.0;
/// Clear space kept around the ship when the field is seeded.
const SHIP_CLEARANCE: f64 = 100.0;

const ASTEROID_WIDTH: f64 = 60.0;
const ASTEROID_SPEED: f64 = 80.0;
const ASTEROID_SPIN: f64 = 30.0;

const BULLET_WIDTH: f64 = 4.0;
const BULLET_SPEED: f64 = 600.0;
/// Ticks between shots.
const FIRE_INTERVAL: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Ship,
    Asteroid,
    Bullet,
}

impl EntityKind for Kind {
    fn collided_with(me: &mut Reaction<'_, Self>, other: &Contact<Self>) {
        let hit = match me.kind() {
            Kind::Ship | Kind::Bullet => other.kind == Kind::Asteroid,
            Kind::Asteroid => matches!(other.kind, Kind::Ship | Kind::Bullet),
        };
        if hit {
            me.kill(EndReason::Collision(other.entity));
        }
    }
}

/// Running totals of how bodies ended.
#[derive(Debug, Default, Serialize)]
struct Tally {
    shots: u64,
    asteroids_destroyed: u64,
    bullets_hit: u64,
    bullets_expired: u64,
    collisions: u64,
}

impl Tally {
    fn record(&mut self, event: &LifeEvent<Kind>) {
        match (event.kind, event.fate) {
            (Kind::Asteroid, Fate::Killed) => self.asteroids_destroyed += 1,
            (Kind::Bullet, Fate::Killed) => self.bullets_hit += 1,
            (Kind::Bullet, Fate::Deceased) => self.bullets_expired += 1,
            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "field-run: kessler headless field simulator\n\
         \n\
         Commands:\n\
         \n\
         run       Seed an asteroid field around a turning ship and simulate it\n\
         \n\
           --config <path>    JSON simulation config (default: built-in)\n\
           --seed <N>         Override the config seed\n\
           --ticks <N>        Ticks to simulate (default: {DEFAULT_TICKS})\n\
           --asteroids <N>    Asteroids to place (default: {DEFAULT_ASTEROIDS})\n\
           --snapshot         Print the final field snapshot as JSON\n\
         \n\
         config    Print the default simulation config as JSON\n\
         \n\
         Set RUST_LOG=debug or trace for per-tick detail.\n"
    );
}

fn parse_value<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let mut config = match parse_value::<PathBuf>(args, "--config") {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: cannot load {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_value(args, "--seed") {
        config.seed = seed;
    }
    let ticks: u64 = parse_value(args, "--ticks").unwrap_or(DEFAULT_TICKS);
    let asteroids: usize = parse_value(args, "--asteroids").unwrap_or(DEFAULT_ASTEROIDS);

    info!(
        "seed {}, field {}x{}, default boundary {}",
        config.seed, config.field.width, config.field.height, config.field.default_boundary
    );

    let mut engine: SimulationEngine<Kind> = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let ship = seed_field(engine.registry_mut(), asteroids);
    let mut tally = Tally::default();

    for tick in 0..ticks {
        if tick % FIRE_INTERVAL == 0 && fire(engine.registry_mut(), ship) {
            tally.shots += 1;
        }

        let report = engine.tick(DT);
        if report.pairs_skipped > 0 {
            debug!("tick {tick}: skipped {} stale pairs", report.pairs_skipped);
        }
        tally.collisions += engine.drain_collision_events().len() as u64;
        for event in engine.drain_life_events() {
            tally.record(&event);
        }

        if !engine.registry().is_live(ship) {
            info!("ship destroyed at tick {tick}");
            break;
        }
        if engine.registry().live_of_kind(Kind::Asteroid).is_empty() {
            info!("field cleared at tick {tick}");
            break;
        }
    }

    let time = engine.time();
    info!(
        "{} ticks, {:.2}s simulated, {} bodies live",
        time.tick,
        time.elapsed_secs,
        engine.registry().len()
    );
    match serde_json::to_string_pretty(&tally) {
        Ok(json) => println!("{json}"),
        Err(e) => warn!("cannot serialise tally: {e}"),
    }

    if has_flag(args, "--snapshot") {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: cannot serialise snapshot: {e}");
                process::exit(1);
            }
        }
    }
}

/// Place the ship in the centre and scatter asteroids around it.
fn seed_field(registry: &mut Registry<Kind>, asteroids: usize) -> Entity {
    let centre = registry
        .playfield()
        .map(|field| {
            DVec2::new(
                (field.x_min + field.x_max) / 2.0,
                (field.y_min + field.y_max) / 2.0,
            )
        })
        .unwrap_or_default();

    let ship = registry.spawn(
        Spawn::new(Kind::Ship, centre, SHIP_WIDTH)
            .rotation(-90.0)
            .cruise_rotation_speed(SHIP_TURN_RATE)
            .boundary(BoundaryMode::Stop)
            .on_kill(|entity, reason| info!("ship {entity:?} lost: {reason:?}")),
    );
    let keep_clear = match registry.body_mut(ship) {
        Some(mut body) => {
            body.cruise_rotation(true);
            vec![body.avoid_rect(SHIP_CLEARANCE)]
        }
        None => Vec::new(),
    };
    for _ in 0..asteroids {
        let rock = registry.spawn(
            Spawn::new(Kind::Asteroid, centre, ASTEROID_WIDTH)
                .speed(ASTEROID_SPEED)
                .rotation_speed(ASTEROID_SPIN),
        );
        if let Some(mut body) = registry.body_mut(rock) {
            body.rotate_randomly();
            if !body.position_randomly(&keep_clear) {
                body.decease(EndReason::Requested);
            }
        }
    }
    info!(
        "placed {} of {asteroids} asteroids",
        registry.live_of_kind(Kind::Asteroid).len()
    );
    ship
}

/// Fire a bullet from the ship's nose. Returns whether a shot was fired.
fn fire(registry: &mut Registry<Kind>, ship: Entity) -> bool {
    let Some(contact) = registry.contact(ship) else {
        return false;
    };
    let rotation = contact.transform.rotation;
    let nose = contact.position()
        + rotated_offset(DVec2::new(contact.width / 2.0 + BULLET_WIDTH, 0.0), rotation);
    registry.spawn(
        Spawn::new(Kind::Bullet, nose, BULLET_WIDTH)
            .rotation(rotation)
            .speed(BULLET_SPEED)
            .boundary(BoundaryMode::Die),
    );
    true
}

// --- Config command ---

fn cmd_config() {
    match SimConfig::default().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
