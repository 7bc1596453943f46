//! Timed spawning of orbs and hazards
//!
//! Each falling type has its own accumulator. When it reaches the interval,
//! one entity spawns and the accumulator restarts from zero; the overflow is
//! dropped, so cadence is only approximately periodic under uneven frames.

use glam::Vec2;
use rand::Rng;

use super::state::{Falling, FallingKind, Session};
use crate::config::SpawnConfig;

/// Accumulates elapsed time toward the next spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    elapsed_ms: f32,
    interval_ms: f32,
}

impl SpawnTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            interval_ms,
        }
    }

    /// Add `dt_ms`; returns true (and restarts from 0) when the interval is reached
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn interval(&self) -> f32 {
        self.interval_ms
    }
}

/// Advance both timers and spawn whatever fired. Returns the number spawned.
pub fn run_spawners(session: &mut Session, dt_ms: f32) -> usize {
    let mut spawned = 0;

    if session.orb_timer.advance(dt_ms) {
        let orb = spawn_falling(session, FallingKind::Orb);
        session.orbs.push(orb);
        spawned += 1;
    }

    if session.hazard_timer.advance(dt_ms) {
        let hazard = spawn_falling(session, FallingKind::Hazard);
        session.hazards.push(hazard);
        spawned += 1;
    }

    spawned
}

/// Build one falling entity above the arena at a random x
pub fn spawn_falling(session: &mut Session, kind: FallingKind) -> Falling {
    let params: SpawnConfig = match kind {
        FallingKind::Orb => session.config.orb,
        FallingKind::Hazard => session.config.hazard,
    };
    let (min_x, max_x) = session.config.spawn_x_range();

    // Whole-unit x, like the radius
    let x = session.rng.random_range(min_x..=max_x) as f32;
    let radius = if params.min_radius == params.max_radius {
        params.min_radius as f32
    } else {
        session
            .rng
            .random_range(params.min_radius..=params.max_radius) as f32
    };

    let falling = Falling {
        id: session.next_entity_id(),
        kind,
        pos: Vec2::new(x, params.spawn_y),
        vel: Vec2::new(0.0, params.speed),
        radius,
        spawned_tick: session.time_ticks,
    };
    log::debug!(
        "spawned {:?} #{} at x={:.1} r={}",
        kind,
        falling.id,
        x,
        radius
    );
    falling
}
