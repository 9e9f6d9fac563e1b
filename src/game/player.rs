use rand::Rng;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The human's side.
    pub const HUMAN: Player = Player::Yellow;
    /// The computer's side; the search maximizes for this player.
    pub const COMPUTER: Player = Player::Red;

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }

    /// Unbiased coin flip between the two players.
    pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Player {
        if rng.random_bool(0.5) {
            Player::Red
        } else {
            Player::Yellow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
        assert_eq!(Player::HUMAN.other(), Player::COMPUTER);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Red.to_cell(), Cell::Red);
        assert_eq!(Player::Yellow.to_cell(), Cell::Yellow);
    }

    #[test]
    fn test_coin_flip_yields_both_players() {
        let mut rng = StdRng::seed_from_u64(11);
        let reds = (0..1000)
            .filter(|_| Player::coin_flip(&mut rng) == Player::Red)
            .count();
        assert!((400..600).contains(&reds), "biased coin: {reds}/1000 Red");
    }
}
