//! Side-scrolling gap game simulation.
//!
//! The player falls under gravity and jumps on demand while obstacle columns
//! scroll in from the right. Passing through a gap scores a point; touching a
//! solid cell or the floor ends the game.

pub mod collision;
pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
