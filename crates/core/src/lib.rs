//! Core scoring module - pure, deterministic, and testable
//!
//! This crate holds the ten-pin rules: roll validation, frame state, and
//! strike/spare bonus scoring. It has **zero dependencies** on terminal
//! rendering or input handling.
//!
//! # Module Structure
//!
//! - [`roll`]: validated pin counts and conversion from caller input
//! - [`frame`]: one frame's rolls, completion, strike and spare rules
//! - [`chain`]: arena of linked frames with lazy successors and lookahead
//! - [`game`]: routes rolls to frames and detects the end of the game
//! - [`snapshot`]: serializable view for rendering and JSON output
//! - [`error`]: roll validation errors
//!
//! # Scoring Rules
//!
//! - An open frame scores its pins
//! - A **strike** scores 10 plus the next two rolls, wherever they fall
//! - A **spare** scores 10 plus the next roll
//! - The tenth frame hosts its own bonus rolls (up to three rolls)
//!
//! A score that depends on rolls not yet bowled is `None`, not an error.
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let game = Game::with_rolls([10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1])
//!     .unwrap();
//! assert!(game.is_game_over());
//! assert_eq!(game.final_score(), 167);
//! ```
//!
//! # Threading
//!
//! A [`Game`] is plain data with no interior mutability. Score queries take
//! `&self`; bowling needs `&mut self`, so sharing one game between threads
//! takes a single external lock.

pub mod chain;
pub mod error;
pub mod frame;
pub mod game;
pub mod roll;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use chain::FrameChain;
pub use error::RollError;
pub use frame::{Frame, FrameId};
pub use game::{FrameScores, Game};
pub use roll::{IntoRoll, Roll};
pub use snapshot::{FrameSnapshot, GameSnapshot};
