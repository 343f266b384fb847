//! tessera-engine - 2048 game logic and simulation engine.
//!
//! Provides board rotation, directional shifts with merge semantics,
//! random tile spawning, and the game session state machine.

pub mod session;
pub mod spawn;
pub mod transform;

pub use session::{Session, Status};
pub use spawn::{spawn_tile, SpawnConfig};
pub use transform::{is_terminal, rotate_ccw, shift, shift_left, shift_row_left};
