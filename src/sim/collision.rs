//! Player overlap tests against orbs and hazards
//!
//! Removal is by swap, so the scan index only advances when nothing was
//! removed at it. A hazard hit resets the session and ends the scan.

use glam::Vec2;

use super::state::Session;

/// What the collision pass did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub orbs_collected: u32,
    /// A hazard was hit and the session has been reset
    pub hazard_hit: bool,
}

/// Circle-circle overlap (strict: touching edges don't count)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Resolve pickups, then hazard strikes. Entities spawned on `tick` are skipped.
pub fn resolve_collisions(session: &mut Session, tick: u64) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let player_pos = session.player.pos;
    let player_radius = session.player.radius;

    let mut i = 0;
    while i < session.orbs.len() {
        let orb = &session.orbs[i];
        if orb.spawned_tick != tick
            && circles_overlap(player_pos, player_radius, orb.pos, orb.radius)
        {
            session.orbs.swap_remove(i);
            session.award_orb();
            outcome.orbs_collected += 1;
        } else {
            i += 1;
        }
    }

    let struck = session.hazards.iter().any(|hazard| {
        hazard.spawned_tick != tick
            && circles_overlap(player_pos, player_radius, hazard.pos, hazard.radius)
    });
    if struck {
        session.reset();
        outcome.hazard_hit = true;
    }

    outcome
}
