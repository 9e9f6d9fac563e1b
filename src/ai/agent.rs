use crate::game::GameState;

/// Anything that can pick a column for the player to move.
pub trait Agent: Send {
    /// Select an action (column) given the current game state.
    ///
    /// # Panics
    ///
    /// Implementations panic if the state has no legal action.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
