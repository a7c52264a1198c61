//! Tests for the rock-paper-scissors match state.

use pocket_rps::{Choice, HISTORY_LIMIT, RpsMatch, judge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_streak_survives_draws_and_resets_on_loss() {
    let mut game = RpsMatch::new();
    game.play_against(Choice::Rock, Choice::Scissors);
    game.play_against(Choice::Paper, Choice::Rock);
    game.play_against(Choice::Paper, Choice::Paper);
    assert_eq!(game.scores().streak, 2);

    game.play_against(Choice::Rock, Choice::Paper);
    assert_eq!(game.scores().streak, 0);
    assert_eq!(game.scores().best_streak, 2);

    game.play_against(Choice::Scissors, Choice::Paper);
    assert_eq!(game.scores().streak, 1);
    assert_eq!(game.scores().best_streak, 2);

    let scores = game.scores();
    assert_eq!((scores.wins, scores.losses, scores.draws), (3, 1, 1));
    assert_eq!(scores.total(), 5);
    assert!((scores.win_rate() - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_history_is_bounded() {
    let mut game = RpsMatch::new();
    for _ in 0..(HISTORY_LIMIT + 3) {
        game.play_against(Choice::Rock, Choice::Rock);
    }
    assert_eq!(game.history().count(), HISTORY_LIMIT);
    assert_eq!(game.history().next().map(|r| r.number), Some(4));
    assert_eq!(game.last().map(|r| r.number), Some(13));
}

#[test]
fn test_random_play_is_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut game = RpsMatch::new();
    for _ in 0..50 {
        let round = game.play(Choice::Paper, &mut rng);
        assert_eq!(round.result, judge(Choice::Paper, round.computer));
    }
    let scores = game.scores();
    assert_eq!(scores.total(), 50);
    assert!(scores.best_streak >= scores.streak);
    // Fifty uniform draws essentially always include every outcome.
    assert!(scores.wins > 0 && scores.losses > 0 && scores.draws > 0);
}

#[test]
fn test_reset_clears_everything() {
    let mut game = RpsMatch::new();
    game.play_against(Choice::Rock, Choice::Scissors);
    game.reset();
    assert_eq!(game.scores().total(), 0);
    assert!(game.last().is_none());
    assert_eq!(game.scores().win_rate(), 0.0);
}
