//! Session behavior across the three games.

use pocket_arcade::{ArcadeConfig, ArcadeSession, Overrides};
use pocket_rps::Choice;
use pocket_snake::{Direction, Status, Tick};
use pocket_tictactoe::{GameMode, Outcome, Position};

fn config(seed: u64, mode: GameMode) -> ArcadeConfig {
    ArcadeConfig::default()
        .with_overrides(Overrides {
            seed: Some(seed),
            mode: Some(mode),
            ..Default::default()
        })
        .unwrap()
}

#[test]
fn test_same_seed_same_games() {
    let mut a = ArcadeSession::new(&config(42, GameMode::VsComputer));
    let mut b = ArcadeSession::new(&config(42, GameMode::VsComputer));
    assert_eq!(a.seed(), 42);
    assert_eq!(a.snake().food(), b.snake().food());

    for choice in [Choice::Rock, Choice::Paper, Choice::Scissors, Choice::Rock] {
        assert_eq!(a.play_rps(choice), b.play_rps(choice));
    }

    assert!(a.play_square(Position::TopCenter));
    assert!(b.play_square(Position::TopCenter));
    assert_eq!(a.computer_turn(), b.computer_turn());
}

#[test]
fn test_computer_blocks_and_wins() {
    let mut session = ArcadeSession::new(&config(1, GameMode::VsComputer));

    assert!(session.play_square(Position::TopLeft));
    assert_eq!(session.computer_turn(), Some(Position::Center));
    assert!(!session.play_square(Position::Center), "occupied square is a no-op");

    assert!(session.play_square(Position::TopCenter));
    assert_eq!(session.computer_turn(), Some(Position::TopRight), "blocks the top row");

    assert!(session.play_square(Position::MiddleLeft));
    // O holds Center and TopRight; BottomLeft completes the anti-diagonal.
    assert_eq!(session.computer_turn(), Some(Position::BottomLeft));

    let table = session.table();
    assert_eq!(table.phase().outcome(), Some(Outcome::Winner(pocket_tictactoe::Player::O)));
    assert_eq!(table.scores().o_wins, 1);
    assert_eq!(table.scores().games(), 1);
    assert!(!session.play_square(Position::BottomRight), "finished board takes no moves");
}

#[test]
fn test_two_player_never_calls_computer() {
    let mut session = ArcadeSession::new(&config(3, GameMode::TwoPlayer));
    assert!(session.play_square(Position::Center));
    assert!(!session.table().computer_pending());
    assert_eq!(session.computer_turn(), None);
    assert!(session.play_square(Position::TopLeft));
    assert_eq!(session.table().board().mark_count(), 2);
}

#[test]
fn test_snake_runs_into_wall_and_restarts() {
    let mut session = ArcadeSession::new(&config(5, GameMode::VsComputer));
    assert_eq!(session.snake().status(), Status::Ready);
    assert!(session.turn_snake(Direction::Up));

    let mut crashed = None;
    for _ in 0..20 {
        if let Tick::Crashed(collision) = session.tick_snake() {
            crashed = Some(collision);
            break;
        }
    }
    assert_eq!(crashed, Some(pocket_snake::Collision::Wall));
    assert_eq!(session.tick_snake(), Tick::Idle);

    let high = session.snake().high_score();
    session.restart_snake();
    assert_eq!(session.snake().status(), Status::Ready);
    assert_eq!(session.snake().score(), 0);
    assert_eq!(session.snake().high_score(), high);
}

#[test]
fn test_rps_reset_clears_match() {
    let mut session = ArcadeSession::new(&config(8, GameMode::VsComputer));
    session.play_rps(Choice::Paper);
    session.play_rps(Choice::Scissors);
    assert_eq!(session.rps().scores().total(), 2);

    session.reset_rps();
    assert_eq!(session.rps().scores().total(), 0);
    assert!(session.rps().last().is_none());
}
