//! Session state and core simulation types
//!
//! A session is the unit of reset: a hazard strike discards everything here
//! except the RNG and the id counter.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnTimer;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Undrained score notifications kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 64;

/// Falling entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallingKind {
    /// Collect for score
    Orb,
    /// Touching one restarts the session
    Hazard,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision circle standing in for the square footprint
    pub radius: f32,
}

impl Player {
    /// Player at the start position (horizontal center, offset up from the bottom)
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.arena_width / 2.0,
                config.arena_height - config.player_start_offset,
            ),
            vel: Vec2::ZERO,
            radius: config.player_radius(),
        }
    }
}

/// An orb or hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Falling {
    pub id: u32,
    pub kind: FallingKind,
    pub pos: Vec2,
    /// Fixed at creation, vertical only
    pub vel: Vec2,
    pub radius: f32,
    /// Tick the entity was created on (skipped by collisions that tick)
    pub spawned_tick: u64,
}

/// Notifications for the score display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed (pickup, or reset to zero)
    ScoreChanged { score: u32 },
}

/// Read-only view of one frame for the display collaborator
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub player: Vec2,
    pub player_radius: f32,
    pub orbs: Vec<(Vec2, f32)>,
    pub hazards: Vec<(Vec2, f32)>,
    pub score: u32,
}

/// Complete mutable state of one play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: SimConfig,
    pub(crate) rng: Pcg32,
    pub(crate) player: Player,
    /// Live orbs (insertion order irrelevant, removed by swap)
    pub(crate) orbs: Vec<Falling>,
    /// Live hazards
    pub(crate) hazards: Vec<Falling>,
    pub(crate) orb_timer: SpawnTimer,
    pub(crate) hazard_timer: SpawnTimer,
    pub(crate) score: u32,
    /// Ticks since the session value was created (not reset by restarts)
    pub(crate) time_ticks: u64,
    /// Number of hazard restarts so far
    pub(crate) resets: u32,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl Session {
    /// Create a new session with the given tuning and seed.
    ///
    /// Tuning is validated first so spawning can never hit an empty range.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, seed))
    }

    /// Session with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid_config(SimConfig::default(), seed)
    }

    fn from_valid_config(config: SimConfig, seed: u64) -> Self {
        let mut session = Self {
            rng: Pcg32::seed_from_u64(seed),
            player: Player::spawn(&config),
            orbs: Vec::new(),
            hazards: Vec::new(),
            orb_timer: SpawnTimer::new(config.orb.interval_ms),
            hazard_timer: SpawnTimer::new(config.hazard.interval_ms),
            score: 0,
            time_ticks: 0,
            resets: 0,
            events: Vec::new(),
            next_id: 1,
            config,
        };
        // Display starts from a known score
        session.set_score(0);
        session
    }

    /// Restart: discard entities, timer progress and score; respawn the player
    pub fn reset(&mut self) {
        log::debug!(
            "session reset at tick {} (score {}, {} orbs, {} hazards)",
            self.time_ticks,
            self.score,
            self.orbs.len(),
            self.hazards.len()
        );
        self.orbs.clear();
        self.hazards.clear();
        self.orb_timer.reset();
        self.hazard_timer.reset();
        self.player = Player::spawn(&self.config);
        self.resets += 1;
        self.set_score(0);
    }

    /// Add points for one orb pickup
    pub(crate) fn award_orb(&mut self) {
        let score = self.score.saturating_add(self.config.orb_score);
        self.set_score(score);
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(GameEvent::ScoreChanged { score });
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn orbs(&self) -> &[Falling] {
        &self.orbs
    }

    pub fn hazards(&self) -> &[Falling] {
        &self.hazards
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// Accumulated time toward the next (orb, hazard) spawn, in ms
    pub fn spawn_progress(&self) -> (f32, f32) {
        (self.orb_timer.elapsed(), self.hazard_timer.elapsed())
    }

    /// Take pending score notifications (oldest first).
    ///
    /// Hosts drain once per frame; an undrained queue keeps only the newest
    /// [`MAX_PENDING_EVENTS`] entries.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Copy out what the display needs for this frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player: self.player.pos,
            player_radius: self.player.radius,
            orbs: self.orbs.iter().map(|o| (o.pos, o.radius)).collect(),
            hazards: self.hazards.iter().map(|h| (h.pos, h.radius)).collect(),
            score: self.score,
        }
    }
}
