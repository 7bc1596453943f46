//! Orb Dash - A falling-orb arcade minigame
//!
//! Core modules:
//! - `sim`: Simulation core (spawning, motion, collisions, session reset)
//! - `config`: Data-driven game tuning
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;

/// Game configuration constants (defaults for [`SimConfig`])
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Horizontal inset for spawn positions
    pub const SPAWN_MARGIN: f32 = 30.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 420.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Player starts this far above the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 80.0;

    /// Orb defaults
    pub const ORB_INTERVAL_MS: f32 = 700.0;
    pub const ORB_SPAWN_Y: f32 = -10.0;
    pub const ORB_SPEED: f32 = 220.0;
    pub const ORB_RADIUS: f32 = 10.0;
    pub const ORB_SCORE: u32 = 10;

    /// Hazard defaults
    pub const HAZARD_INTERVAL_MS: f32 = 900.0;
    pub const HAZARD_SPAWN_Y: f32 = -20.0;
    pub const HAZARD_SPEED: f32 = 320.0;
    pub const HAZARD_MIN_RADIUS: u32 = 14;
    pub const HAZARD_MAX_RADIUS: u32 = 24;

    /// Slack below the bottom edge before falling entities are pruned
    pub const CLEANUP_MARGIN: f32 = 80.0;

    /// Host time unit (milliseconds) per simulation time unit (seconds)
    pub const MS_PER_SECOND: f32 = 1000.0;
}

/// Format the score for the HUD text element
pub fn score_label(score: u32) -> String {
    format!("score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0), "score: 0");
        assert_eq!(score_label(120), "score: 120");
    }
}
