//! Per-frame simulation tick
//!
//! Order within a tick is fixed: velocity, motion, spawning, collisions,
//! cleanup. A hazard strike resets the session and ends the tick there.

use super::cleanup::prune_offscreen;
use super::collision::resolve_collisions;
use super::input::{DirectionInput, player_velocity};
use super::motion::integrate;
use super::spawn::run_spawners;
use super::state::Session;
use crate::consts::MS_PER_SECOND;

/// Input for a single tick, as delivered by the host frame driver
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute host time (ms); informational only
    pub time_ms: f64,
    /// Elapsed time since the previous tick (ms)
    pub delta_ms: f32,
    /// Held directions
    pub directions: DirectionInput,
}

/// How a tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Steady state; carries the number of orbs collected
    Running { orbs_collected: u32 },
    /// The player hit a hazard and the session restarted
    Reset,
}

/// Clamp malformed host deltas (negative, NaN, infinite) to zero
pub fn sanitize_delta(delta_ms: f32) -> f32 {
    if delta_ms.is_finite() && delta_ms >= 0.0 {
        delta_ms
    } else {
        log::warn!("ignoring invalid frame delta {}", delta_ms);
        0.0
    }
}

/// Advance the session by one host frame
pub fn tick(session: &mut Session, input: &TickInput) -> TickOutcome {
    let dt_ms = sanitize_delta(input.delta_ms);
    let dt = dt_ms / MS_PER_SECOND;

    session.time_ticks += 1;
    let now = session.time_ticks;

    session.player.vel = player_velocity(input.directions, session.config.player_speed);

    integrate(session, dt);

    run_spawners(session, dt_ms);

    let collisions = resolve_collisions(session, now);
    if collisions.hazard_hit {
        return TickOutcome::Reset;
    }

    prune_offscreen(session);

    TickOutcome::Running {
        orbs_collected: collisions.orbs_collected,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::state::FallingKind;
    use proptest::prelude::*;

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (0.0f32..120.0, any::<[bool; 4]>()).prop_map(|(delta_ms, [left, right, up, down])| {
            TickInput {
                time_ms: 0.0,
                delta_ms,
                directions: DirectionInput {
                    left,
                    right,
                    up,
                    down,
                },
            }
        })
    }

    proptest! {
        #[test]
        fn score_only_drops_on_reset(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..300),
        ) {
            let mut session = Session::with_seed(seed);
            for input in &inputs {
                let before = session.score();
                match tick(&mut session, input) {
                    TickOutcome::Reset => prop_assert_eq!(session.score(), 0),
                    TickOutcome::Running { orbs_collected } => {
                        prop_assert_eq!(session.score(), before + 10 * orbs_collected);
                    }
                }
            }
        }

        #[test]
        fn player_stays_in_arena(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..300),
        ) {
            let mut session = Session::with_seed(seed);
            for input in &inputs {
                tick(&mut session, input);
                let pos = session.player().pos;
                prop_assert!(pos.x >= 0.0 && pos.x <= 800.0);
                prop_assert!(pos.y >= 0.0 && pos.y <= 600.0);
            }
        }

        #[test]
        fn nothing_lingers_below_cleanup_line(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..400),
        ) {
            let mut session = Session::with_seed(seed);
            for input in &inputs {
                tick(&mut session, input);
                let limit = session.config().cleanup_y();
                prop_assert!(session.orbs().iter().all(|o| o.pos.y <= limit));
                prop_assert!(session.hazards().iter().all(|h| h.pos.y <= limit));
            }
        }

        #[test]
        fn falling_motion_is_exact(
            seed in any::<u64>(),
            warmup in prop::collection::vec(arb_input(), 1..100),
            delta_ms in 0.0f32..50.0,
        ) {
            let mut session = Session::with_seed(seed);
            for input in &warmup {
                tick(&mut session, input);
            }
            // Player parked in a corner, well away from the falling entities
            session.player.pos = glam::Vec2::ZERO;
            session.player.radius = 0.0;

            let before: Vec<_> = session
                .orbs()
                .iter()
                .chain(session.hazards())
                .map(|f| (f.id, f.kind, f.pos, f.vel))
                .collect();
            let outcome = tick(&mut session, &TickInput { delta_ms, ..Default::default() });
            prop_assert_eq!(outcome, TickOutcome::Running { orbs_collected: 0 });

            let dt = delta_ms / MS_PER_SECOND;
            let limit = session.config().cleanup_y();
            for (id, kind, pos, vel) in before {
                let expected = pos + vel * dt;
                let live = match kind {
                    FallingKind::Orb => session.orbs(),
                    FallingKind::Hazard => session.hazards(),
                };
                match live.iter().find(|f| f.id == id) {
                    Some(f) => {
                        prop_assert!((f.pos.y - expected.y).abs() < 1e-3);
                        prop_assert_eq!(f.pos.x, pos.x);
                    }
                    None => prop_assert!(expected.y > limit),
                }
            }
        }

        #[test]
        fn player_motion_is_exact(
            seed in any::<u64>(),
            directions in any::<[bool; 4]>(),
            delta_ms in 0.0f32..50.0,
        ) {
            // Fresh session: nothing to hit, and at most 21 units of travel
            // from the start position can't reach an edge
            let mut session = Session::with_seed(seed);
            let start = session.player().pos;
            let [left, right, up, down] = directions;
            let directions = DirectionInput { left, right, up, down };
            let input = TickInput { delta_ms, directions, ..Default::default() };

            tick(&mut session, &input);

            let vel = player_velocity(directions, session.config().player_speed);
            let expected = start + vel * (delta_ms / MS_PER_SECOND);
            prop_assert_eq!(session.player().vel, vel);
            prop_assert!((session.player().pos - expected).length() < 1e-3);
        }
    }
}
