//! Property tests over the public simulation API.

use glam::DVec2;
use proptest::prelude::*;

use kessler_sim::collision::footprints_overlap;
use kessler_sim::core::types::velocity_for;
use kessler_sim::core::{BoundaryMode, FieldSettings, SimConfig};
use kessler_sim::{EntityKind, Registry, SimulationEngine, Spare, Spawn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rock {
    Large,
    Small,
}

impl EntityKind for Rock {}

fn registry(mode: BoundaryMode) -> Registry<Rock> {
    Registry::with_config(&SimConfig {
        seed: 99,
        field: FieldSettings::new(400.0, 300.0, mode),
    })
    .unwrap()
}

proptest! {
    #[test]
    fn velocity_tracks_speed_and_rotation(
        speed in 0.0f64..500.0,
        rotation in -720.0f64..720.0,
        rotation_speed in -400.0f64..400.0,
        steps in prop::collection::vec(0.001f64..0.05, 1..40),
    ) {
        let mut registry = registry(BoundaryMode::Wrap);
        let e = registry.spawn(
            Spawn::new(Rock::Large, DVec2::new(200.0, 150.0), 20.0)
                .speed(speed)
                .rotation(rotation)
                .rotation_speed(rotation_speed),
        );
        let mut body = registry.body_mut(e).unwrap();
        for dt in steps {
            body.advance(dt);
            let expected = velocity_for(body.speed(), body.rotation());
            prop_assert!(body.velocity().abs_diff_eq(expected, 1e-9));
        }
    }

    #[test]
    fn bounce_keeps_bodies_inside(
        x in 1.0f64..399.0,
        y in 1.0f64..299.0,
        speed in 0.0f64..2000.0,
        rotation in 0.0f64..360.0,
        rotation_speed in -200.0f64..200.0,
    ) {
        let mut registry = registry(BoundaryMode::Bounce);
        let field = registry.playfield().unwrap();
        let e = registry.spawn(
            Spawn::new(Rock::Small, DVec2::new(x, y), 8.0)
                .speed(speed)
                .rotation(rotation)
                .rotation_speed(rotation_speed),
        );
        for _ in 0..300 {
            registry.advance_all(0.01);
            prop_assert!(field.contains(registry.position(e).unwrap()));
        }
    }

    #[test]
    fn overlap_is_symmetric(
        ax in -100.0f64..100.0, ay in -100.0f64..100.0, aw in 0.0f64..80.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0, bw in 0.0f64..80.0,
    ) {
        let a = DVec2::new(ax, ay);
        let b = DVec2::new(bx, by);
        prop_assert_eq!(footprints_overlap(a, aw, b, bw), footprints_overlap(b, bw, a, aw));
    }

    #[test]
    fn collision_pairs_never_repeat(
        positions in prop::collection::vec((10.0f64..390.0, 10.0f64..290.0), 2..25),
    ) {
        let mut registry = registry(BoundaryMode::Wrap);
        for (x, y) in positions {
            registry.spawn(Spawn::new(Rock::Large, DVec2::new(x, y), 60.0));
        }
        let pairs = registry.evaluate_collisions();
        for (i, (a, b)) in pairs.iter().enumerate() {
            prop_assert_ne!(a, b);
            for (c, d) in &pairs[i + 1..] {
                prop_assert!(!((a == c && b == d) || (a == d && b == c)));
            }
        }
    }

    #[test]
    fn end_all_except_spares_exactly_the_spared(
        kinds in prop::collection::vec(any::<bool>(), 0..30),
        kill in any::<bool>(),
    ) {
        let mut registry = registry(BoundaryMode::Wrap);
        for (i, &large) in kinds.iter().enumerate() {
            let kind = if large { Rock::Large } else { Rock::Small };
            registry.spawn(Spawn::new(kind, DVec2::new(10.0 + i as f64, 10.0), 4.0));
        }
        let large_before = registry.live_of_kind(Rock::Large);

        registry.end_all_except(&[Spare::Kind(Rock::Large)], kill);

        prop_assert_eq!(registry.live(), large_before.as_slice());
        let ended = registry.drain_life_events();
        prop_assert_eq!(ended.len(), kinds.len() - large_before.len());
        prop_assert!(ended.iter().all(|event| event.kind == Rock::Small));
    }

    #[test]
    fn run_for_never_exceeds_the_substep_cap(
        frames in prop::collection::vec(0.0f64..0.5, 1..30),
    ) {
        let mut engine: SimulationEngine<Rock> = SimulationEngine::new(SimConfig::default()).unwrap();
        let mut total = 0u64;
        for elapsed in frames {
            let ticks = engine.run_for(elapsed);
            prop_assert!(ticks <= kessler_sim::core::constants::MAX_SUBSTEPS);
            total += u64::from(ticks);
        }
        prop_assert_eq!(engine.time().tick, total);
    }
}
