use crate::game::{Board, Cell, Player, Window};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: sums [`evaluate_window`] over every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        score_position(board, player)
    }
}

/// Score a single window for `player`.
///
/// | window                        | score |
/// |-------------------------------|-------|
/// | 4 own                         | +100  |
/// | 3 own, 1 empty                | +5    |
/// | 2 own, 2 empty                | +2    |
/// | 3 opponent, 1 empty           | -4    |
/// | anything else                 | 0     |
pub fn evaluate_window(window: &Window, player: Player) -> i64 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();
    let count = |target: Cell| window.iter().filter(|&&c| c == target).count();
    let (own, opp, empty) = (count(own_cell), count(opp_cell), count(Cell::Empty));

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }

    if opp == 3 && empty == 1 {
        score -= 4;
    }

    score
}

/// Heuristic value of `board` for `player`: horizontal, vertical and both
/// diagonal windows, summed.
pub fn score_position(board: &Board, player: Player) -> i64 {
    board
        .windows()
        .map(|window| evaluate_window(&window, player))
        .sum()
}
