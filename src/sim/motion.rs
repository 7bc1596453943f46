//! Movement integration and world bounds

use glam::Vec2;

use super::state::Session;

/// Advance the player and every falling entity by `vel * dt`, then keep the
/// player inside the arena. Falling entities are never clamped.
pub fn integrate(session: &mut Session, dt: f32) {
    let bounds = Vec2::new(session.config.arena_width, session.config.arena_height);

    let player = &mut session.player;
    player.pos += player.vel * dt;
    player.pos = player.pos.clamp(Vec2::ZERO, bounds);

    for entity in session.orbs.iter_mut().chain(session.hazards.iter_mut()) {
        entity.pos += entity.vel * dt;
    }
}
