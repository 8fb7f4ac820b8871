//! Frame chain - arena of linked frames and lookahead scoring
//!
//! Frames are stored in bowling order and address each other through
//! [`FrameId`] links. A successor is appended only when the game asks for
//! it with [`FrameChain::next_frame`]; every score query takes `&self` and
//! never grows the arena, so a missing successor simply means the bonus
//! rolls have not been bowled yet.

use crate::frame::{Frame, FrameId};
use crate::types::{FrameKind, FRAME_COUNT, SPARE_BONUS_ROLLS, STRIKE_BONUS_ROLLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameChain {
    frames: Vec<Frame>,
}

impl Default for FrameChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameChain {
    /// A chain holding a single empty frame 1.
    pub fn new() -> Self {
        let mut frames = Vec::with_capacity(FRAME_COUNT as usize);
        frames.push(Frame::new(1));
        Self { frames }
    }

    /// Id of the first frame.
    pub fn first(&self) -> FrameId {
        FrameId(0)
    }

    /// Id of the most recently created frame.
    pub fn last(&self) -> FrameId {
        FrameId(self.frames.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Every frame, in bowling order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(id.0)
    }

    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.frames.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.frames.iter().enumerate().map(|(i, f)| (FrameId(i), f))
    }

    /// Successor of `id`, created and linked on first request.
    ///
    /// Returns `None` for the final frame (it hosts its own bonus rolls) or
    /// an unknown id.
    pub fn next_frame(&mut self, id: FrameId) -> Option<FrameId> {
        let frame = self.frames.get(id.0)?;
        if let Some(next) = frame.next {
            return Some(next);
        }
        if frame.kind() == FrameKind::Final {
            return None;
        }

        let mut successor = Frame::new(frame.number() + 1);
        successor.previous = Some(id);
        let next = FrameId(self.frames.len());
        self.frames.push(successor);
        self.frames[id.0].next = Some(next);
        Some(next)
    }

    /// Score of a single frame, bonus included.
    ///
    /// `None` until the frame is complete and every bonus roll it is owed
    /// has been bowled. Frames numbered past the tenth are never scored.
    pub fn score(&self, id: FrameId) -> Option<u16> {
        let frame = self.get(id)?;
        if !frame.is_complete() || frame.number() > FRAME_COUNT {
            return None;
        }

        let base = frame.pin_total();
        if frame.kind() == FrameKind::Final {
            return Some(base);
        }

        let bonus_rolls = if frame.is_strike() {
            STRIKE_BONUS_ROLLS
        } else if frame.is_spare() {
            SPARE_BONUS_ROLLS
        } else {
            return Some(base);
        };

        let bonus = self.sum_of_next_rolls(frame.next()?, bonus_rolls)?;
        Some(base + bonus)
    }

    /// Sum of the first `n` rolls starting at frame `id` and continuing
    /// into its successors.
    ///
    /// `None` when fewer than `n` rolls are known yet.
    pub fn sum_of_next_rolls(&self, id: FrameId, n: usize) -> Option<u16> {
        let frame = self.get(id)?;
        let rolls = frame.rolls();
        if rolls.len() >= n {
            return Some(rolls[..n].iter().map(|&pins| u16::from(pins)).sum());
        }
        if !frame.is_complete() {
            return None;
        }
        let rest = self.sum_of_next_rolls(frame.next()?, n - rolls.len())?;
        Some(frame.pin_total() + rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::Roll;

    fn chain_with(frames: &[&[u8]]) -> FrameChain {
        let mut chain = FrameChain::new();
        let mut id = chain.first();
        for (i, rolls) in frames.iter().enumerate() {
            if i > 0 {
                id = chain.next_frame(id).unwrap();
            }
            for &pins in *rolls {
                chain
                    .get_mut(id)
                    .unwrap()
                    .bowl(Roll::new(i64::from(pins)).unwrap())
                    .unwrap();
            }
        }
        chain
    }

    #[test]
    fn next_frame_is_created_once_and_linked_both_ways() {
        let mut chain = FrameChain::new();
        let first = chain.first();
        let second = chain.next_frame(first).unwrap();
        assert_eq!(chain.next_frame(first), Some(second));
        assert_eq!(chain.len(), 2);

        let frame = chain.get(second).unwrap();
        assert_eq!(frame.number(), 2);
        assert_eq!(frame.previous(), Some(first));
        assert_eq!(chain.get(first).unwrap().next(), Some(second));
    }

    #[test]
    fn final_frame_has_no_successor() {
        let mut chain = FrameChain::new();
        let mut id = chain.first();
        for _ in 1..FRAME_COUNT {
            id = chain.next_frame(id).unwrap();
        }
        assert_eq!(chain.get(id).unwrap().kind(), FrameKind::Final);
        assert_eq!(chain.next_frame(id), None);
        assert_eq!(chain.len(), FRAME_COUNT as usize);
    }

    #[test]
    fn open_frame_scores_its_pins() {
        let chain = chain_with(&[&[3, 4]]);
        assert_eq!(chain.score(chain.first()), Some(7));
    }

    #[test]
    fn incomplete_frame_has_no_score() {
        let chain = chain_with(&[&[3]]);
        assert_eq!(chain.score(chain.first()), None);
    }

    #[test]
    fn spare_waits_for_one_roll() {
        let chain = chain_with(&[&[7, 3]]);
        assert_eq!(chain.score(chain.first()), None);

        let chain = chain_with(&[&[7, 3], &[4]]);
        assert_eq!(chain.score(chain.first()), Some(14));
    }

    #[test]
    fn strike_looks_across_frames() {
        let chain = chain_with(&[&[10], &[10]]);
        assert_eq!(chain.score(chain.first()), None);

        let chain = chain_with(&[&[10], &[10], &[6]]);
        assert_eq!(chain.score(chain.first()), Some(26));
        assert_eq!(chain.score(FrameId(1)), None);

        let chain = chain_with(&[&[10], &[2, 5]]);
        assert_eq!(chain.score(chain.first()), Some(17));
    }

    #[test]
    fn sum_of_next_rolls_stops_at_incomplete_frame() {
        let chain = chain_with(&[&[4]]);
        assert_eq!(chain.sum_of_next_rolls(chain.first(), 1), Some(4));
        assert_eq!(chain.sum_of_next_rolls(chain.first(), 2), None);

        let chain = chain_with(&[&[10], &[3]]);
        assert_eq!(chain.sum_of_next_rolls(chain.first(), 2), Some(13));
        assert_eq!(chain.sum_of_next_rolls(chain.first(), 3), None);
    }

    #[test]
    fn queries_never_grow_the_chain() {
        let chain = chain_with(&[&[10]]);
        assert_eq!(chain.score(chain.first()), None);
        assert_eq!(chain.sum_of_next_rolls(chain.first(), 3), None);
        assert_eq!(chain.len(), 1);
    }
}
