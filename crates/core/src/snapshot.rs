//! Serializable view of a game, shared by the terminal view and JSON output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub number: u8,
    pub rolls: Vec<u8>,
    /// One scorecard symbol per roll slot (`X`, `/`, digit, `_` or blank).
    pub marks: Vec<char>,
    pub score: Option<u16>,
    pub running_total: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Frames created so far, at most ten.
    pub frames: Vec<FrameSnapshot>,
    pub current_frame: u8,
    pub pins_standing: u8,
    pub game_over: bool,
    pub final_score: u16,
}

impl GameSnapshot {
    /// Snapshot of the frame with this 1-based number, if created.
    pub fn frame(&self, number: u8) -> Option<&FrameSnapshot> {
        self.frames.iter().find(|frame| frame.number == number)
    }

    /// Highest running total known so far.
    pub fn latest_total(&self) -> Option<u16> {
        self.frames.iter().rev().find_map(|frame| frame.running_total)
    }

    /// Whether rolls still count (false once the game is over).
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
