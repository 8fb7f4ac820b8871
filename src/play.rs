//! Applying player actions and text tokens to a game.

use thiserror::Error;

use crate::core::{Game, RollError};
use crate::types::GameAction;

/// Why an action could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Roll(#[from] RollError),

    /// `/` entered before any ball was thrown at the rack.
    #[error("a spare needs a ball already thrown at this rack")]
    SpareOnFreshRack,
}

impl PlayError {
    /// The underlying roll error, if the game rejected the roll.
    pub fn roll_error(&self) -> Option<&RollError> {
        match self {
            PlayError::Roll(err) => Some(err),
            PlayError::SpareOnFreshRack => None,
        }
    }
}

/// Apply one action, resolving strike/spare/gutter against the pins
/// standing right now.
///
/// # Errors
///
/// [`PlayError::SpareOnFreshRack`] for a spare on an untouched rack, and
/// any [`RollError`] from the game. The game is unchanged on error.
pub fn apply(game: &mut Game, action: GameAction) -> Result<(), PlayError> {
    if action == GameAction::Spare && game.rack_is_fresh() {
        return Err(PlayError::SpareOnFreshRack);
    }
    match action.pins(game.pins_standing()) {
        Some(pins) => {
            game.bowl(pins)?;
            Ok(())
        }
        None => {
            game.new_game();
            Ok(())
        }
    }
}

/// Apply a command-line token such as `7`, `x`, `/` or `-`.
///
/// Tokens that are not scorecard notation are handed to the game as-is so
/// that non-integer and out-of-range input surfaces as the matching
/// [`RollError`].
pub fn apply_token(game: &mut Game, token: &str) -> Result<(), PlayError> {
    match GameAction::from_str(token) {
        Some(action) => apply(game, action),
        None => {
            game.bowl(token)?;
            Ok(())
        }
    }
}

/// Score a whole sequence of tokens, stopping at the first bad one.
pub fn score_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Game, PlayError> {
    let mut game = Game::new();
    for token in tokens {
        apply_token(&mut game, token)?;
    }
    Ok(game)
}
