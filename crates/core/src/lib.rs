//! Tessera core crate - fundamental types for the 2048 board game.

mod board;
mod direction;

pub use board::Board;
pub use direction::Direction;
