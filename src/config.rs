//! Game tuning
//!
//! Every gameplay constant lives here so the host can load alternative
//! tuning from JSON. Defaults match [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Spawn parameters for one falling entity type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Milliseconds between spawns
    pub interval_ms: f32,
    /// Vertical spawn position (above the visible arena)
    pub spawn_y: f32,
    /// Downward speed (units/sec)
    pub speed: f32,
    /// Inclusive integer radius range; min == max gives a fixed radius
    pub min_radius: u32,
    pub max_radius: u32,
}

impl SpawnConfig {
    pub fn orb() -> Self {
        Self {
            interval_ms: ORB_INTERVAL_MS,
            spawn_y: ORB_SPAWN_Y,
            speed: ORB_SPEED,
            min_radius: ORB_RADIUS as u32,
            max_radius: ORB_RADIUS as u32,
        }
    }

    pub fn hazard() -> Self {
        Self {
            interval_ms: HAZARD_INTERVAL_MS,
            spawn_y: HAZARD_SPAWN_Y,
            speed: HAZARD_SPEED,
            min_radius: HAZARD_MIN_RADIUS,
            max_radius: HAZARD_MAX_RADIUS,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.interval_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{} interval must be positive, got {}",
                name, self.interval_ms
            )));
        }
        if !(self.speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{} speed must be non-negative, got {}",
                name, self.speed
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::Invalid(format!(
                "{} radius range is empty ({}..={})",
                name, self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Horizontal inset for spawn x positions
    pub spawn_margin: f32,

    // === Player ===
    pub player_speed: f32,
    /// Side of the square footprint; the collision circle has half this radius
    pub player_size: f32,
    /// Distance of the start position above the bottom edge
    pub player_start_offset: f32,

    // === Falling entities ===
    pub orb: SpawnConfig,
    pub hazard: SpawnConfig,
    /// Points per orb pickup
    pub orb_score: u32,
    /// Entities are pruned once y > arena_height + cleanup_margin
    pub cleanup_margin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            spawn_margin: SPAWN_MARGIN,

            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            player_start_offset: PLAYER_START_OFFSET,

            orb: SpawnConfig::orb(),
            hazard: SpawnConfig::hazard(),
            orb_score: ORB_SCORE,
            cleanup_margin: CLEANUP_MARGIN,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject tuning the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !(self.spawn_margin >= 0.0 && self.spawn_margin * 2.0 <= self.arena_width) {
            return Err(ConfigError::Invalid(format!(
                "spawn margin {} does not fit arena width {}",
                self.spawn_margin, self.arena_width
            )));
        }
        let (min_x, max_x) = self.spawn_x_range();
        if min_x > max_x {
            return Err(ConfigError::Invalid(format!(
                "no whole-unit spawn x between margin {} and arena width {}",
                self.spawn_margin, self.arena_width
            )));
        }
        if !(self.player_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "player speed must be non-negative, got {}",
                self.player_speed
            )));
        }
        if !(self.player_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "player size must be positive, got {}",
                self.player_size
            )));
        }
        if !(self.cleanup_margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cleanup margin must be non-negative, got {}",
                self.cleanup_margin
            )));
        }
        self.orb.validate("orb")?;
        self.hazard.validate("hazard")?;
        Ok(())
    }

    /// Collision radius of the player's square footprint
    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Inclusive whole-unit range for spawn x positions
    pub fn spawn_x_range(&self) -> (i32, i32) {
        (
            self.spawn_margin.ceil() as i32,
            (self.arena_width - self.spawn_margin).floor() as i32,
        )
    }

    /// y beyond which falling entities are removed
    pub fn cleanup_y(&self) -> f32 {
        self.arena_height + self.cleanup_margin
    }
}
