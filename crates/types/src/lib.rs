//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring logic, terminal rendering, input mapping).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `FRAME_COUNT` | 10 | Scored frames per game |
//! | `STANDARD_ROLLS` | 2 | Roll slots in frames 1-9 |
//! | `FINAL_ROLLS` | 3 | Roll slots in the tenth frame |
//! | `MAX_SCORE` | 300 | Perfect game |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{FrameKind, GameAction, Mark, FRAME_COUNT, PIN_COUNT};
//!
//! assert_eq!(FrameKind::for_number(1), FrameKind::Standard);
//! assert_eq!(FrameKind::for_number(FRAME_COUNT), FrameKind::Final);
//!
//! assert_eq!(Mark::Strike.symbol(), 'X');
//! assert_eq!(Mark::Pins(7).symbol(), '7');
//!
//! assert_eq!(GameAction::from_str("x"), Some(GameAction::Strike));
//! assert_eq!(GameAction::from_str("7"), Some(GameAction::Bowl(7)));
//! assert_eq!(PIN_COUNT, 10);
//! ```

/// Pins in a full rack.
pub const PIN_COUNT: u8 = 10;

/// Scored frames in a game.
pub const FRAME_COUNT: u8 = 10;

/// Roll slots in frames 1 through 9.
pub const STANDARD_ROLLS: usize = 2;

/// Roll slots in the tenth frame (two plus one bonus).
pub const FINAL_ROLLS: usize = 3;

/// Score of a perfect game.
pub const MAX_SCORE: u16 = 300;

/// Extra rolls credited to a strike.
pub const STRIKE_BONUS_ROLLS: usize = 2;

/// Extra rolls credited to a spare.
pub const SPARE_BONUS_ROLLS: usize = 1;

/// Frame classification
///
/// - **Standard**: frames 1-9, at most two rolls summing to 10
/// - **Final**: frame 10, hosts its own bonus rolls (up to three)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Standard,
    Final,
}

impl FrameKind {
    /// Kind of the frame with the given 1-based number.
    ///
    /// Numbers past the tenth frame are never created by a game; they are
    /// classified as `Standard` and never scored.
    pub fn for_number(number: u8) -> Self {
        if number == FRAME_COUNT {
            FrameKind::Final
        } else {
            FrameKind::Standard
        }
    }

    /// Maximum number of roll slots.
    pub fn max_rolls(&self) -> usize {
        match self {
            FrameKind::Standard => STANDARD_ROLLS,
            FrameKind::Final => FINAL_ROLLS,
        }
    }
}

/// What a roll slot shows on a scorecard
///
/// - **Pins**: an ordinary count (`0`..`9`)
/// - **Strike**: all ten pins on a fresh rack (`X`)
/// - **Spare**: the roll that cleared the rack (`/`)
/// - **Pending**: a slot that can still be bowled (`_`)
/// - **Blank**: a slot that will never be bowled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Pins(u8),
    Strike,
    Spare,
    Pending,
    Blank,
}

impl Mark {
    /// Single-character scorecard symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::Mark;
    ///
    /// assert_eq!(Mark::Spare.symbol(), '/');
    /// assert_eq!(Mark::Pending.symbol(), '_');
    /// assert_eq!(Mark::Pins(0).symbol(), '0');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Mark::Pins(n) => char::from_digit(u32::from(*n), 10).unwrap_or('?'),
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Pending => '_',
            Mark::Blank => ' ',
        }
    }
}

/// Player actions that can be applied to a game
///
/// Both the command line and the interactive key map produce these.
/// `Strike`, `Spare` and `Gutter` are shorthands resolved against the pins
/// standing at the time they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Knock down this many pins
    Bowl(u8),
    /// Knock down every standing pin on a fresh rack
    Strike,
    /// Knock down every pin left standing
    Spare,
    /// Knock down nothing
    Gutter,
    /// Discard the game and start over
    Restart,
}

impl GameAction {
    /// Parse action from a scorecard-style token (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("10"), Some(GameAction::Bowl(10)));
    /// assert_eq!(GameAction::from_str("/"), Some(GameAction::Spare));
    /// assert_eq!(GameAction::from_str("-"), Some(GameAction::Gutter));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("11"), None);
    /// assert_eq!(GameAction::from_str("pins"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" => Some(GameAction::Strike),
            "/" => Some(GameAction::Spare),
            "-" => Some(GameAction::Gutter),
            "r" | "restart" => Some(GameAction::Restart),
            other => match other.parse::<u8>() {
                Ok(n) if n <= PIN_COUNT => Some(GameAction::Bowl(n)),
                _ => None,
            },
        }
    }

    /// Pins this action knocks down, given how many are standing.
    ///
    /// `Restart` knocks down nothing and returns `None`.
    pub fn pins(&self, standing: u8) -> Option<u8> {
        match self {
            GameAction::Bowl(n) => Some(*n),
            GameAction::Strike => Some(PIN_COUNT),
            GameAction::Spare => Some(standing),
            GameAction::Gutter => Some(0),
            GameAction::Restart => None,
        }
    }
}
