use crate::game::GameState;

/// Interface for anything that can pick a column to play.
pub trait Agent {
    /// Select a column given the current game state. Callers must not
    /// invoke this on a terminal or full board.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
