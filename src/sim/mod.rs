//! Simulation module
//!
//! All gameplay logic lives here. This module is pure:
//! - Host supplies elapsed time and held directions per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod cleanup;
pub mod collision;
pub mod input;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use cleanup::prune_offscreen;
pub use collision::{CollisionOutcome, circles_overlap, resolve_collisions};
pub use input::{DirectionInput, player_velocity};
pub use motion::integrate;
pub use spawn::{SpawnTimer, run_spawners, spawn_falling};
pub use state::{Falling, FallingKind, FrameSnapshot, GameEvent, Player, Session};
pub use tick::{TickInput, TickOutcome, sanitize_delta, tick};
