use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// Uniformly random column from `valid_moves`, or `None` if there are none.
pub fn choose_move_random<R: Rng + ?Sized>(valid_moves: &[usize], rng: &mut R) -> Option<usize> {
    if valid_moves.is_empty() {
        return None;
    }
    Some(valid_moves[rng.random_range(0..valid_moves.len())])
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let actions = state.legal_actions();
        choose_move_random(&actions, &mut self.rng).expect("No legal actions available")
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_choose_move_random_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_move_random(&[], &mut rng), None);
        assert_eq!(choose_move_random(&[4], &mut rng), Some(4));
    }

    #[test]
    fn test_choose_move_random_covers_all_columns() {
        let mut rng = StdRng::seed_from_u64(5);
        let moves = [1, 3, 6];
        let mut seen = [0usize; 7];
        for _ in 0..300 {
            seen[choose_move_random(&moves, &mut rng).unwrap()] += 1;
        }
        assert_eq!(seen[0] + seen[2] + seen[4] + seen[5], 0);
        assert!(moves.iter().all(|&c| seen[c] > 50), "skewed picks: {seen:?}");
    }

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::with_seed(9);
        let state = GameState::initial();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state);
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut state = GameState::new(Player::Yellow);

        while !state.is_terminal() {
            let action = if state.current_player() == Player::Yellow {
                agent1.select_action(&state)
            } else {
                agent2.select_action(&state)
            };
            state = state.apply_move(action).unwrap();
        }

        assert!(state.is_terminal());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
