//! One-ply heuristic computer opponent.
//!
//! Priority: win now, block the opponent's immediate win, take the
//! center, take a random free corner, otherwise any random free square.

use super::rules::check_winner;
use super::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a move for `me`. Returns `None` only when the board is full.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn best_move<R: Rng + ?Sized>(board: &Board, me: Player, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completing_move(board, me) {
        debug!(position = %pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = completing_move(board, me.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = corners.choose(rng) {
        return Some(*pos);
    }

    Position::valid_moves(board).choose(rng).copied()
}

/// First empty square (row-major) where `player` would complete a line.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    Position::valid_moves(board).into_iter().find(|pos| {
        let mut trial = board.clone();
        trial.set(*pos, Square::Occupied(player));
        check_winner(&trial).is_some_and(|win| win.player == player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_takes_win_over_block() {
        // O can win on the middle row; X threatens the top row.
        let board: Board = "XX_/OO_/X__".parse().unwrap();
        assert_eq!(
            best_move(&board, Player::O, &mut rng()),
            Some(Position::MiddleRight)
        );
    }

    #[test]
    fn test_blocks_opponent() {
        let board: Board = "XX_/_O_/___".parse().unwrap();
        assert_eq!(
            best_move(&board, Player::O, &mut rng()),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_takes_center_when_free() {
        let board: Board = "X__/___/___".parse().unwrap();
        assert_eq!(
            best_move(&board, Player::O, &mut rng()),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_takes_corner_when_center_gone() {
        let board: Board = "___/_X_/___".parse().unwrap();
        let pos = best_move(&board, Player::O, &mut rng()).unwrap();
        assert!(pos.is_corner());
    }

    #[test]
    fn test_falls_back_to_free_edge() {
        // Center and corners taken, no line threatened through the last square.
        let board: Board = "XOX/_OX/OXO".parse().unwrap();
        assert_eq!(
            best_move(&board, Player::X, &mut rng()),
            Some(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(best_move(&board, Player::O, &mut rng()), None);
    }
}
