use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a position the maximizing side has won; its negation is a loss.
pub const WIN_SCORE: i64 = 1_000_000_000;

/// Plies searched when nothing else is configured.
pub const DEFAULT_DEPTH: usize = 2;

/// How the root picks among equally scored columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Pre-select a uniformly random legal column and keep it unless another
    /// column scores strictly better.
    #[default]
    Random,
    /// Keep the lowest-index column among the best.
    Leftmost,
}

/// Search parameters, loadable as the `[search]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub depth: usize,
    pub tie_break: TieBreak,
    /// Alpha-beta cutoffs; disabling them yields plain minimax with the same
    /// score.
    pub pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_DEPTH,
            tie_break: TieBreak::default(),
            pruning: true,
        }
    }
}

/// Column picked at a node and its score from the root side's perspective.
/// `column` is `None` for leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// One minimax traversal over a single board, mutated and restored in place.
pub struct Search<'h> {
    maximizer: Player,
    heuristic: &'h dyn Heuristic,
    pruning: bool,
    stats: SearchStats,
}

impl<'h> Search<'h> {
    pub fn new(maximizer: Player, heuristic: &'h dyn Heuristic, pruning: bool) -> Self {
        Search {
            maximizer,
            heuristic,
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax with alpha-beta pruning over valid columns in ascending order.
    ///
    /// `first` moves one column to the front of the root's move order; since
    /// replacement needs a strictly better score, that column wins any tie
    /// it is part of. `board` is restored before returning.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        first: Option<usize>,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if board.has_four_in_a_row(self.maximizer.to_cell()) {
            return SearchResult::leaf(WIN_SCORE);
        }
        if board.has_four_in_a_row(self.maximizer.other().to_cell()) {
            return SearchResult::leaf(-WIN_SCORE);
        }
        if board.is_full() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, self.maximizer));
        }

        let mut moves = board.valid_moves();
        if let Some(pos) = first.and_then(|col| moves.iter().position(|&c| c == col)) {
            let col = moves.remove(pos);
            moves.insert(0, col);
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.other()
        };
        let mut best = SearchResult {
            column: None,
            score: if maximizing { i64::MIN } else { i64::MAX },
        };

        for col in moves {
            if board.drop_piece(col, mover.to_cell()).is_err() {
                unreachable!("valid_moves yielded full column {col}");
            }
            let score = self
                .minimax(board, depth - 1, alpha, beta, !maximizing, None)
                .score;
            board.lift_piece(col);

            let improved = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improved {
                best = SearchResult {
                    column: Some(col),
                    score,
                };
            }

            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Plain entry point: alpha-beta minimax for `maximizer` with the window
/// heuristic and leftmost tie-breaking. `board` is not modified.
pub fn minimax(
    board: &Board,
    depth: usize,
    alpha: i64,
    beta: i64,
    maximizing: bool,
    maximizer: Player,
) -> SearchResult {
    let mut scratch = *board;
    Search::new(maximizer, &WindowHeuristic, true).minimax(
        &mut scratch,
        depth,
        alpha,
        beta,
        maximizing,
        None,
    )
}

/// Best column for `computer` searching `depth` plies, with a random
/// tie-break. `None` when the board has no open column.
pub fn choose_move_minimax(board: &Board, depth: usize, computer: Player) -> Option<usize> {
    let options = SearchOptions {
        depth,
        ..SearchOptions::default()
    };
    MinimaxAgent::with_options(options, StdRng::from_os_rng()).search(board, computer).column
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    options: SearchOptions,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_options(
            SearchOptions {
                depth,
                ..SearchOptions::default()
            },
            StdRng::from_os_rng(),
        )
    }

    pub fn with_options(options: SearchOptions, rng: StdRng) -> Self {
        MinimaxAgent {
            options,
            heuristic: Box::new(WindowHeuristic),
            rng,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Run the configured search with `computer` as the maximizing side.
    pub fn search(&mut self, board: &Board, computer: Player) -> SearchResult {
        let first = match self.options.tie_break {
            TieBreak::Random => {
                let moves = board.valid_moves();
                (!moves.is_empty()).then(|| moves[self.rng.random_range(0..moves.len())])
            }
            TieBreak::Leftmost => None,
        };

        let mut scratch = *board;
        let mut search = Search::new(computer, self.heuristic.as_ref(), self.options.pruning);
        let result = search.minimax(
            &mut scratch,
            self.options.depth,
            i64::MIN,
            i64::MAX,
            true,
            first,
        );
        let stats = search.stats();
        tracing::debug!(
            player = computer.name(),
            depth = self.options.depth,
            column = ?result.column,
            score = result.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "minimax search finished"
        );
        result
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");

        self.search(state.board(), state.current_player())
            .column
            .unwrap_or(legal[0])
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
