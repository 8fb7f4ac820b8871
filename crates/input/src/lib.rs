//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Text
//! tokens (command-line rolls) go through
//! [`GameAction::from_str`](crate::types::GameAction::from_str) instead.

pub mod map;

pub use tenpin_types as types;

pub use map::{handle_key_event, should_quit};
