//! Pruning of entities that fell out of the arena

use super::state::Session;

/// Remove orbs and hazards below the cleanup line. Returns how many were removed.
pub fn prune_offscreen(session: &mut Session) -> usize {
    let limit = session.config.cleanup_y();
    let before = session.orbs.len() + session.hazards.len();
    session.orbs.retain(|o| o.pos.y <= limit);
    session.hazards.retain(|h| h.pos.y <= limit);
    before - (session.orbs.len() + session.hazards.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Falling, FallingKind};
    use glam::Vec2;

    fn at_y(kind: FallingKind, y: f32) -> Falling {
        Falling {
            id: 0,
            kind,
            pos: Vec2::new(100.0, y),
            vel: Vec2::new(0.0, 220.0),
            radius: 10.0,
            spawned_tick: 0,
        }
    }

    #[test]
    fn test_prunes_below_slack_line() {
        let mut session = Session::with_seed(1);
        session.orbs.push(at_y(FallingKind::Orb, 680.0));
        session.orbs.push(at_y(FallingKind::Orb, 680.5));
        session.hazards.push(at_y(FallingKind::Hazard, 650.0));
        session.hazards.push(at_y(FallingKind::Hazard, 900.0));

        assert_eq!(prune_offscreen(&mut session), 2);
        assert_eq!(session.orbs.len(), 1);
        assert_eq!(session.orbs[0].pos.y, 680.0);
        assert_eq!(session.hazards.len(), 1);
        assert_eq!(session.hazards[0].pos.y, 650.0);
    }

    #[test]
    fn test_keeps_entities_above_top() {
        let mut session = Session::with_seed(1);
        session.orbs.push(at_y(FallingKind::Orb, -500.0));
        assert_eq!(prune_offscreen(&mut session), 0);
        assert_eq!(session.orbs.len(), 1);
    }
}
