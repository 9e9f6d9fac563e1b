//! Turn sequencing between the human and the computer opponent.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{Agent, Difficulty, SearchOptions};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Phase, Player};

/// Owns the authoritative game and the computer opponent.
///
/// The human plays [`Player::HUMAN`], the computer [`Player::COMPUTER`]. Each
/// game's first player is a coin flip. The controller never moves on its own:
/// callers drive it with [`human_move`](Self::human_move) and
/// [`take_computer_turn`](Self::take_computer_turn).
pub struct GameController {
    state: GameState,
    difficulty: Difficulty,
    opponent: Box<dyn Agent>,
    rng: StdRng,
}

impl GameController {
    /// Start a game against `difficulty`. A `seed` makes both the coin flip
    /// and the opponent reproducible.
    pub fn new(difficulty: Difficulty, search: SearchOptions, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let first = Player::coin_flip(&mut rng);
        let opponent = difficulty.agent(search, seed.map(|s| s.wrapping_add(1)));
        Self::with_opponent(difficulty, opponent, first, rng)
    }

    /// Start a game with an explicit opponent and first player.
    pub fn with_opponent(
        difficulty: Difficulty,
        opponent: Box<dyn Agent>,
        first: Player,
        rng: StdRng,
    ) -> Self {
        tracing::info!(
            difficulty = difficulty.name(),
            opponent = opponent.name(),
            first = first.name(),
            "new game"
        );
        GameController {
            state: GameState::new(first),
            difficulty,
            opponent,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// True when the computer should be asked for a move.
    pub fn is_computer_turn(&self) -> bool {
        self.phase() == Phase::AwaitingMove(Player::COMPUTER)
    }

    /// Apply the human's drop into `column`. On error nothing changes.
    pub fn human_move(&mut self, column: usize) -> Result<Phase, MoveError> {
        match self.phase() {
            Phase::Over(_) => return Err(MoveError::GameOver),
            Phase::AwaitingMove(player) if player != Player::HUMAN => {
                return Err(MoveError::OutOfTurn(player));
            }
            Phase::AwaitingMove(_) => {}
        }

        self.state.apply_move_mut(column).inspect_err(|err| {
            tracing::debug!(column, %err, "human move rejected");
        })?;
        Ok(self.after_move(Player::HUMAN, column))
    }

    /// Ask the opponent for a column and apply it. Returns the column played.
    ///
    /// # Panics
    ///
    /// Panics if the opponent picks a column that cannot be played; agents
    /// only choose from legal columns.
    pub fn take_computer_turn(&mut self) -> Result<usize, MoveError> {
        match self.phase() {
            Phase::Over(_) => return Err(MoveError::GameOver),
            Phase::AwaitingMove(player) if player != Player::COMPUTER => {
                return Err(MoveError::OutOfTurn(player));
            }
            Phase::AwaitingMove(_) => {}
        }

        let column = self.opponent.select_action(&self.state);
        if let Err(err) = self.state.apply_move_mut(column) {
            panic!("{} picked unplayable column {column}: {err}", self.opponent.name());
        }
        self.after_move(Player::COMPUTER, column);
        Ok(column)
    }

    /// Empty the board and flip a coin for the next first player.
    pub fn reset(&mut self) {
        let first = Player::coin_flip(&mut self.rng);
        self.state = GameState::new(first);
        tracing::info!(first = first.name(), "game reset");
    }

    fn after_move(&self, mover: Player, column: usize) -> Phase {
        let phase = self.phase();
        tracing::debug!(player = mover.name(), column, "move applied");
        match phase {
            Phase::Over(GameOutcome::Winner(winner)) => {
                tracing::info!(winner = winner.name(), "game over");
            }
            Phase::Over(_) => tracing::info!("game over: draw"),
            Phase::AwaitingMove(_) => {}
        }
        phase
    }
}
