//! Game module - routes rolls through the frame chain
//!
//! A [`Game`] is either in progress or over. Rolls bowled after the game is
//! over are discarded without error, so callers can feed a longer roll
//! sequence than the game needs.

use std::fmt;

use tracing::{debug, info};

use crate::chain::FrameChain;
use crate::error::RollError;
use crate::frame::{Frame, FrameId};
use crate::roll::IntoRoll;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{FRAME_COUNT, PIN_COUNT};

/// Per-frame values for the ten scored frames.
pub type FrameScores = [Option<u16>; FRAME_COUNT as usize];

/// A single player's ten-pin game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    chain: FrameChain,
    current: FrameId,
    game_over: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game waiting for its first roll.
    pub fn new() -> Self {
        let chain = FrameChain::new();
        let current = chain.first();
        Self {
            chain,
            current,
            game_over: false,
        }
    }

    /// Start a game and bowl each roll in order.
    ///
    /// # Errors
    ///
    /// The first rejected roll aborts construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_core::Game;
    ///
    /// let game = Game::with_rolls([10; 12]).unwrap();
    /// assert!(game.is_game_over());
    /// assert_eq!(game.final_score(), 300);
    ///
    /// assert!(Game::with_rolls([10, 7, 4]).is_err());
    /// ```
    pub fn with_rolls<I>(rolls: I) -> Result<Self, RollError>
    where
        I: IntoIterator,
        I::Item: IntoRoll,
    {
        let mut game = Self::new();
        for roll in rolls {
            game.bowl(roll)?;
        }
        Ok(game)
    }

    /// Throw away every frame and start over.
    pub fn new_game(&mut self) {
        debug!("starting new game");
        *self = Self::new();
    }

    /// Record a roll.
    ///
    /// Does nothing once the game is over. Returns the game so calls can be
    /// chained.
    ///
    /// # Errors
    ///
    /// Conversion and range errors from the roll; the game is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_core::Game;
    ///
    /// let mut game = Game::new();
    /// game.bowl(7)?.bowl(3)?.bowl(4)?;
    /// assert_eq!(game.score()[0], Some(14));
    /// assert!(game.bowl(1.5).is_err());
    /// # Ok::<(), tenpin_core::RollError>(())
    /// ```
    pub fn bowl<R: IntoRoll>(&mut self, roll: R) -> Result<&mut Self, RollError> {
        if self.game_over {
            debug!("game over, roll discarded");
            return Ok(self);
        }
        let roll = roll.into_roll()?;

        let mut target = self.current;
        if self.current_frame().is_complete() {
            match self.chain.next_frame(self.current) {
                Some(next) => target = next,
                // Only the final frame has no successor, and a complete
                // final frame means the game is already over.
                None => return Ok(self),
            }
        }

        // `target` is either `current` or a successor just linked by the chain.
        let frame = &mut self.chain.frames_mut()[target.index()];
        frame.bowl(roll)?;
        debug!(
            frame = frame.number(),
            pins = roll.pins(),
            standing = frame.pins_standing(),
            "roll recorded"
        );
        self.current = target;
        self.check_game_over();
        Ok(self)
    }

    /// Re-evaluate whether the game is over.
    ///
    /// The game is over once ten frames exist and each of them has a
    /// determined score. Once set the flag stays set until
    /// [`new_game`](Self::new_game).
    pub fn check_game_over(&mut self) -> bool {
        if !self.game_over
            && self.chain.len() >= FRAME_COUNT as usize
            && self.score().iter().all(Option::is_some)
        {
            self.game_over = true;
            info!(final_score = self.final_score(), "game over");
        }
        self.game_over
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Scores of frames 1 to 10; `None` where not yet determined.
    pub fn score(&self) -> FrameScores {
        let mut scores = [None; FRAME_COUNT as usize];
        for ((id, _), slot) in self.chain.iter().zip(scores.iter_mut()) {
            *slot = self.chain.score(id);
        }
        scores
    }

    /// Cumulative totals as written on a scorecard.
    ///
    /// An entry is `None` when it or any earlier frame is undetermined.
    pub fn running_totals(&self) -> FrameScores {
        let mut totals = [None; FRAME_COUNT as usize];
        let mut running = Some(0u16);
        for (score, slot) in self.score().into_iter().zip(totals.iter_mut()) {
            running = running.zip(score).map(|(total, score)| total + score);
            *slot = running;
        }
        totals
    }

    /// Sum of the determined frame scores.
    ///
    /// Final once [`is_game_over`](Self::is_game_over) is true; before that
    /// it is a partial total that leaves out undetermined frames.
    pub fn final_score(&self) -> u16 {
        self.score().iter().flatten().sum()
    }

    /// Pins available to the next roll.
    ///
    /// A full rack when the current frame is complete, and none once the
    /// game is over.
    pub fn pins_standing(&self) -> u8 {
        if self.game_over {
            return 0;
        }
        let frame = self.current_frame();
        if frame.is_complete() {
            PIN_COUNT
        } else {
            frame.pins_standing()
        }
    }

    /// Whether the next roll is the first ball at a full rack.
    ///
    /// False once the game is over.
    pub fn rack_is_fresh(&self) -> bool {
        if self.game_over {
            return false;
        }
        let frame = self.current_frame();
        frame.is_complete() || frame.rack_is_fresh()
    }

    /// The frame that received the latest roll (frame 1 before any roll).
    pub fn current_frame(&self) -> &Frame {
        // `current` always points into the chain.
        &self.chain.frames()[self.current.index()]
    }

    /// Frame by 1-based number, if it has been created.
    pub fn frame(&self, number: u8) -> Option<&Frame> {
        self.frames().find(|frame| frame.number() == number)
    }

    /// Frames created so far, in order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.chain.frames().iter()
    }

    pub fn chain(&self) -> &FrameChain {
        &self.chain
    }

    /// Capture a serializable view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        let scores = self.score();
        let totals = self.running_totals();
        let frames = self
            .frames()
            .take(FRAME_COUNT as usize)
            .enumerate()
            .map(|(i, frame)| FrameSnapshot {
                number: frame.number(),
                rolls: frame.rolls().to_vec(),
                marks: frame.marks().iter().map(|mark| mark.symbol()).collect(),
                score: scores[i],
                running_total: totals[i],
            })
            .collect();

        GameSnapshot {
            frames,
            current_frame: self.current_frame().number(),
            pins_standing: self.pins_standing(),
            game_over: self.game_over,
            final_score: self.final_score(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = self.running_totals();
        for (frame, total) in self.frames().zip(totals) {
            write!(f, "{frame}")?;
            if let Some(total) = total {
                write!(f, " {total}")?;
            }
            writeln!(f)?;
        }
        if self.game_over {
            write!(f, "Total: {}", self.final_score())?;
        }
        Ok(())
    }
}
