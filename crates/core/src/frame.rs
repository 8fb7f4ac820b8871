//! Frame module - one frame's rolls, completion and strike/spare rules
//!
//! A frame knows nothing about its neighbours beyond their ids; anything
//! that needs to look past the frame (bonus scoring) lives in
//! [`FrameChain`](crate::FrameChain).
//!
//! Frames 1-9 are [`FrameKind::Standard`]: at most two rolls, never more
//! than ten pins in total. Frame 10 is [`FrameKind::Final`]: the rack is
//! reset after a strike or spare, and the frame holds its bonus rolls
//! itself (up to three rolls).

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::RollError;
use crate::roll::Roll;
use crate::types::{FrameKind, Mark, FINAL_ROLLS, PIN_COUNT, STANDARD_ROLLS};

/// Index of a frame inside a [`FrameChain`](crate::FrameChain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub(crate) usize);

impl FrameId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One frame of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: u8,
    kind: FrameKind,
    rolls: ArrayVec<u8, FINAL_ROLLS>,
    pub(crate) previous: Option<FrameId>,
    pub(crate) next: Option<FrameId>,
}

impl Frame {
    /// Create an empty, unlinked frame with the given 1-based number.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            kind: FrameKind::for_number(number),
            rolls: ArrayVec::new(),
            previous: None,
            next: None,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Pins knocked down by each roll so far, in order.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn previous(&self) -> Option<FrameId> {
        self.previous
    }

    pub fn next(&self) -> Option<FrameId> {
        self.next
    }

    /// Sum of the pins knocked down in this frame.
    pub fn pin_total(&self) -> u16 {
        self.rolls.iter().map(|&pins| u16::from(pins)).sum()
    }

    /// Record a roll.
    ///
    /// # Errors
    ///
    /// [`RollError::Range`] if the roll knocks down more pins than are
    /// standing. A complete frame has no pins standing. The frame is left
    /// unchanged on error.
    pub fn bowl(&mut self, roll: Roll) -> Result<(), RollError> {
        let standing = self.pins_standing();
        if self.is_complete() || roll.pins() > standing {
            return Err(RollError::Range {
                pins: i64::from(roll.pins()),
                standing,
            });
        }
        self.rolls.push(roll.pins());
        Ok(())
    }

    /// Pins available to the next roll of this frame.
    pub fn pins_standing(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        match self.kind {
            FrameKind::Standard => PIN_COUNT - self.rolls.iter().sum::<u8>(),
            // The rack is reset whenever it has been cleared.
            FrameKind::Final => match self.rolls.as_slice() {
                [] => PIN_COUNT,
                [first] if *first == PIN_COUNT => PIN_COUNT,
                [first] => PIN_COUNT - first,
                [first, second] if *first == PIN_COUNT && *second < PIN_COUNT => {
                    PIN_COUNT - second
                }
                _ => PIN_COUNT,
            },
        }
    }

    /// Whether this frame's next roll is the first ball at a full rack.
    ///
    /// False once the frame is complete. In the final frame this is true
    /// again after a strike or spare resets the rack.
    pub fn rack_is_fresh(&self) -> bool {
        if self.is_complete() {
            return false;
        }
        match self.kind {
            FrameKind::Standard => self.rolls.is_empty(),
            FrameKind::Final => match self.rolls.as_slice() {
                [] | [PIN_COUNT] | [PIN_COUNT, PIN_COUNT] => true,
                [first, second] => first + second == PIN_COUNT,
                _ => false,
            },
        }
    }

    /// Whether the frame takes no more rolls.
    pub fn is_complete(&self) -> bool {
        match self.kind {
            FrameKind::Standard => {
                self.rolls.len() == STANDARD_ROLLS || self.pin_total() == u16::from(PIN_COUNT)
            }
            FrameKind::Final => match self.rolls.as_slice() {
                // Open after two: no bonus roll earned.
                [first, second] => u16::from(*first) + u16::from(*second) < u16::from(PIN_COUNT),
                rolls => rolls.len() == FINAL_ROLLS,
            },
        }
    }

    /// All ten pins on the frame's first roll.
    pub fn is_strike(&self) -> bool {
        match self.kind {
            FrameKind::Standard => self.rolls.as_slice() == [PIN_COUNT],
            FrameKind::Final => self.rolls.first() == Some(&PIN_COUNT),
        }
    }

    /// All ten pins across the frame's first two rolls, but not on the first.
    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first < PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Scorecard marks, one per roll slot.
    ///
    /// Standard frames always have two slots, the final frame three.
    pub fn marks(&self) -> ArrayVec<Mark, FINAL_ROLLS> {
        let mut marks = ArrayVec::new();

        if self.kind == FrameKind::Standard && self.is_strike() {
            marks.push(Mark::Blank);
            marks.push(Mark::Strike);
            return marks;
        }

        // First roll of the rack in play, if one has been thrown at it.
        let mut rack_first: Option<u8> = None;
        for &pins in &self.rolls {
            let mark = match rack_first {
                None if pins == PIN_COUNT => Mark::Strike,
                None => {
                    rack_first = Some(pins);
                    Mark::Pins(pins)
                }
                Some(first) => {
                    rack_first = None;
                    if first + pins == PIN_COUNT {
                        Mark::Spare
                    } else {
                        Mark::Pins(pins)
                    }
                }
            };
            marks.push(mark);
        }

        let complete = self.is_complete();
        let bonus_earned = self.is_strike() || self.is_spare();
        for slot in marks.len()..self.kind.max_rolls() {
            let mark = if complete {
                Mark::Blank
            } else if slot < STANDARD_ROLLS || bonus_earned {
                Mark::Pending
            } else {
                Mark::Blank
            };
            marks.push(mark);
        }
        marks
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}: [", self.number)?;
        for (i, mark) in self.marks().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", mark.symbol())?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(number: u8, rolls: &[u8]) -> Frame {
        let mut frame = Frame::new(number);
        for &pins in rolls {
            frame.bowl(Roll::new(i64::from(pins)).unwrap()).unwrap();
        }
        frame
    }

    #[test]
    fn frame_is_complete_after_two_rolls_or_a_strike() {
        let mut f1 = Frame::new(1);
        assert!(!f1.is_complete());
        f1.bowl(Roll::new(6).unwrap()).unwrap();
        assert!(!f1.is_complete());
        f1.bowl(Roll::new(2).unwrap()).unwrap();
        assert!(f1.is_complete());

        assert!(frame_with(2, &[10]).is_complete());
    }

    #[test]
    fn frame_recognizes_spare() {
        let mut f1 = frame_with(1, &[8]);
        assert!(!f1.is_spare());
        f1.bowl(Roll::new(2).unwrap()).unwrap();
        assert!(f1.is_spare());

        assert!(!frame_with(2, &[10]).is_spare());
        assert!(!frame_with(3, &[0, 10]).is_strike());
        assert!(frame_with(3, &[0, 10]).is_spare());
    }

    #[test]
    fn frame_recognizes_strike() {
        let f1 = frame_with(1, &[10]);
        assert!(f1.is_strike());
        assert!(!f1.is_spare());

        let f2 = frame_with(2, &[8, 2]);
        assert!(!f2.is_strike());
        assert!(!Frame::new(3).is_strike());
    }

    #[test]
    fn roll_above_standing_pins_is_rejected_and_frame_unchanged() {
        let mut frame = frame_with(1, &[4]);
        let err = frame.bowl(Roll::new(7).unwrap()).unwrap_err();
        assert_eq!(
            err,
            RollError::Range {
                pins: 7,
                standing: 6
            }
        );
        assert_eq!(frame.rolls(), &[4]);
        assert_eq!(frame.pins_standing(), 6);
    }

    #[test]
    fn complete_frame_rejects_any_roll() {
        let mut frame = frame_with(1, &[3, 4]);
        assert_eq!(frame.pins_standing(), 0);
        assert!(frame.bowl(Roll::GUTTER).unwrap_err().is_range());
        assert_eq!(frame.rolls(), &[3, 4]);
    }

    #[test]
    fn final_frame_resets_rack_after_strike() {
        let mut frame = frame_with(10, &[10]);
        assert_eq!(frame.kind(), FrameKind::Final);
        assert_eq!(frame.pins_standing(), 10);
        frame.bowl(Roll::new(7).unwrap()).unwrap();
        assert!(!frame.is_complete());
        assert_eq!(frame.pins_standing(), 3);
        assert!(frame.bowl(Roll::new(4).unwrap()).unwrap_err().is_range());
        frame.bowl(Roll::new(3).unwrap()).unwrap();
        assert!(frame.is_complete());
        assert!(frame.is_strike());
    }

    #[test]
    fn final_frame_takes_bonus_roll_after_spare() {
        let mut frame = frame_with(10, &[6, 4]);
        assert!(frame.is_spare());
        assert!(!frame.is_complete());
        assert_eq!(frame.pins_standing(), 10);
        frame.bowl(Roll::STRIKE).unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.pin_total(), 20);
    }

    #[test]
    fn final_frame_open_after_two_rolls_is_complete() {
        let frame = frame_with(10, &[6, 3]);
        assert!(frame.is_complete());
        assert!(!frame.is_spare());
        assert_eq!(frame.pins_standing(), 0);
    }

    #[test]
    fn final_frame_three_strikes() {
        let frame = frame_with(10, &[10, 10, 10]);
        assert!(frame.is_complete());
        assert_eq!(
            frame.marks().as_slice(),
            &[Mark::Strike, Mark::Strike, Mark::Strike]
        );
    }

    #[test]
    fn marks_show_strike_spare_and_placeholders() {
        assert_eq!(
            frame_with(1, &[10]).marks().as_slice(),
            &[Mark::Blank, Mark::Strike]
        );
        assert_eq!(
            frame_with(1, &[7, 3]).marks().as_slice(),
            &[Mark::Pins(7), Mark::Spare]
        );
        assert_eq!(
            frame_with(1, &[4]).marks().as_slice(),
            &[Mark::Pins(4), Mark::Pending]
        );
        assert_eq!(
            frame_with(10, &[4]).marks().as_slice(),
            &[Mark::Pins(4), Mark::Pending, Mark::Blank]
        );
        assert_eq!(
            frame_with(10, &[10, 4]).marks().as_slice(),
            &[Mark::Strike, Mark::Pins(4), Mark::Pending]
        );
        assert_eq!(
            frame_with(10, &[10, 4, 6]).marks().as_slice(),
            &[Mark::Strike, Mark::Pins(4), Mark::Spare]
        );
        assert_eq!(
            frame_with(10, &[3, 4]).marks().as_slice(),
            &[Mark::Pins(3), Mark::Pins(4), Mark::Blank]
        );
    }

    #[test]
    fn display_matches_scorecard_layout() {
        assert_eq!(frame_with(1, &[10]).to_string(), "Frame 1: [  X]");
        assert_eq!(frame_with(2, &[7, 3]).to_string(), "Frame 2: [7 /]");
        assert_eq!(frame_with(3, &[4]).to_string(), "Frame 3: [4 _]");
        assert_eq!(Frame::new(4).to_string(), "Frame 4: [_ _]");
        assert_eq!(frame_with(10, &[9, 1, 10]).to_string(), "Frame 10: [9 / X]");
    }

    #[test]
    fn fresh_rack_tracks_rack_resets() {
        assert!(Frame::new(1).rack_is_fresh());
        assert!(!frame_with(1, &[0]).rack_is_fresh());
        assert!(!frame_with(1, &[10]).rack_is_fresh());

        assert!(frame_with(10, &[10]).rack_is_fresh());
        assert!(frame_with(10, &[10, 10]).rack_is_fresh());
        assert!(!frame_with(10, &[10, 4]).rack_is_fresh());
        assert!(frame_with(10, &[0, 10]).rack_is_fresh());
        assert!(!frame_with(10, &[3, 4]).rack_is_fresh());
    }
}
