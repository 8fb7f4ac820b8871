//! Scoring rules end to end through the public game API

use tenpin::core::{Game, RollError};

#[test]
fn test_perfect_game_scores_300() {
    let game = Game::with_rolls([10; 12]).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.score(), [Some(30); 10]);
    assert_eq!(game.final_score(), 300);
}

#[test]
fn test_mixed_game_scores_167() {
    let game =
        Game::with_rolls([10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]).unwrap();
    assert!(game.is_game_over());
    assert_eq!(
        game.running_totals(),
        [
            Some(20),
            Some(39),
            Some(48),
            Some(66),
            Some(74),
            Some(84),
            Some(90),
            Some(120),
            Some(148),
            Some(167)
        ]
    );
    assert_eq!(game.final_score(), 167);
}

#[test]
fn test_gutter_game_scores_zero() {
    let game = Game::with_rolls([0; 20]).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.final_score(), 0);
}

#[test]
fn test_all_spares_with_five_pins() {
    let game = Game::with_rolls([5; 21]).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.final_score(), 150);
}

#[test]
fn test_over_bowled_frame_fails_construction() {
    let err = Game::with_rolls([10, 7, 4]).unwrap_err();
    assert_eq!(
        err,
        RollError::Range {
            pins: 4,
            standing: 3
        }
    );
}

#[test]
fn test_invalid_rolls_on_empty_frame() {
    let mut game = Game::new();
    assert!(matches!(game.bowl(1.2), Err(RollError::InvalidType(_))));
    assert!(matches!(game.bowl(-2), Err(RollError::Range { .. })));
    assert!(matches!(game.bowl(11), Err(RollError::Range { .. })));
    assert!(game.frames().all(|frame| frame.rolls().is_empty()));
}

#[test]
fn test_invalid_type_regardless_of_frame_state() {
    let mut game = Game::with_rolls([10, 3]).unwrap();
    assert!(game.bowl(2.5).unwrap_err().is_invalid_type());
    assert!(game.bowl(f64::NAN).unwrap_err().is_invalid_type());
    assert!(game.bowl("7.0.1").unwrap_err().is_invalid_type());
}

#[test]
fn test_four_then_seven_is_range_error() {
    let mut game = Game::new();
    game.bowl(4).unwrap();
    assert!(game.bowl(7).unwrap_err().is_range());
    // The frame still accepts a legal roll afterwards.
    game.bowl(6).unwrap();
    assert!(game.current_frame().is_spare());
}

#[test]
fn test_score_unavailable_until_frame_complete() {
    let mut game = Game::new();
    game.bowl(3).unwrap();
    assert_eq!(game.score()[0], None);
    game.bowl(4).unwrap();
    assert_eq!(game.score()[0], Some(7));
}

#[test]
fn test_strike_waits_for_two_following_rolls() {
    let mut game = Game::new();
    game.bowl(10).unwrap();
    assert_eq!(game.score()[0], None);
    game.bowl(10).unwrap();
    assert_eq!(game.score()[0], None);
    game.bowl(4).unwrap();
    assert_eq!(game.score()[0], Some(24));
    assert_eq!(game.score()[1], None);
    game.bowl(2).unwrap();
    assert_eq!(game.score()[1], Some(16));
    assert_eq!(game.score()[2], Some(6));
}

#[test]
fn test_spare_waits_for_one_following_roll() {
    let mut game = Game::with_rolls([6, 4]).unwrap();
    assert_eq!(game.score()[0], None);
    game.bowl(8).unwrap();
    assert_eq!(game.score()[0], Some(18));
}

#[test]
fn test_game_over_exactly_when_tenth_frame_is_scored() {
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let mut game = Game::new();
    for (i, &pins) in rolls.iter().enumerate() {
        assert!(!game.is_game_over(), "game over before roll {i}");
        game.bowl(pins).unwrap();
    }
    assert!(game.is_game_over());
    assert_eq!(game.score()[9], Some(19));
}

#[test]
fn test_extra_rolls_after_game_over_are_ignored() {
    let mut game = Game::with_rolls([10; 12]).unwrap();
    let before = game.clone();
    game.bowl(10).unwrap().bowl(3).unwrap();
    // Even input that would otherwise be rejected is discarded.
    game.bowl(99).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game, before);
    assert_eq!(game.final_score(), 300);
}

#[test]
fn test_tenth_frame_open_ends_after_two_rolls() {
    let mut rolls = vec![0; 18];
    rolls.extend([3, 4]);
    let game = Game::with_rolls(rolls).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.frame(10).map(|f| f.rolls().len()), Some(2));
    assert_eq!(game.final_score(), 7);
}

#[test]
fn test_tenth_frame_bonus_bounds() {
    let mut game = Game::with_rolls([0; 18]).unwrap();
    game.bowl(10).unwrap().bowl(6).unwrap();
    assert!(!game.is_game_over());
    assert_eq!(game.pins_standing(), 4);
    assert!(game.bowl(5).unwrap_err().is_range());
    game.bowl(4).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.final_score(), 20);
}

#[test]
fn test_only_ten_frames_exist() {
    let game = Game::with_rolls([10; 15]).unwrap();
    assert_eq!(game.frames().count(), 10);
    assert!(game.frame(11).is_none());
}

#[test]
fn test_partial_final_score_before_game_over() {
    let game = Game::with_rolls([3, 4, 10, 5]).unwrap();
    assert!(!game.is_game_over());
    // Only the determined frame counts.
    assert_eq!(game.final_score(), 7);
}

#[test]
fn test_chained_bowls() -> Result<(), RollError> {
    let mut game = Game::new();
    game.bowl(9)?.bowl(1)?.bowl(10)?.bowl(0)?.bowl(0)?;
    assert_eq!(game.running_totals()[2], Some(30));
    Ok(())
}
