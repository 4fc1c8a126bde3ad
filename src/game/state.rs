use tracing::debug;

use super::{Board, Player};
use crate::error::MoveError;

/// Terminal verdict of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner {
        player: Player,
        /// The four cells of the winning run, in board scan order.
        line: [(usize, usize); 4],
    },
    Draw,
}

/// Winner's leaderboard entry inputs, derived once per completed game.
/// Faster wins score higher: `score = max(1, 100 - moves)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub winner: Player,
    pub moves: u32,
    pub score: u32,
}

/// The caller-owned game state machine: whose turn it is, the board, and
/// the outcome once the game ends. Transitions happen only through
/// [`GameState::apply_move`] (or the in-place variant); the engine keeps
/// no state of its own between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves_played: u32,
}

impl GameState {
    /// Create an initial state with a standard 6x7 board.
    /// Which player starts is a caller decision.
    pub fn new(starting_player: Player) -> Self {
        Self::with_board(Board::new(), starting_player)
    }

    /// Create an initial state on a custom board.
    pub fn with_board(board: Board, starting_player: Player) -> Self {
        GameState {
            board,
            current_player: starting_player,
            outcome: None,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Total tokens placed so far.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. The state is unchanged on error.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.drop_piece(column, mover.to_cell())?;
        self.moves_played += 1;

        if let Some(line) = self.board.find_winning_line(mover.to_cell()) {
            debug!(player = mover.name(), column, row, "winning move");
            self.outcome = Some(GameOutcome::Winner {
                player: mover,
                line,
            });
        } else if self.board.is_full() {
            debug!("board full, game drawn");
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = mover.other();
        }

        Ok(())
    }

    /// Inputs for score submission, available exactly when the game has a
    /// winner. Submitting (and submitting only once) is the caller's job.
    pub fn score_report(&self) -> Option<ScoreReport> {
        match self.outcome {
            Some(GameOutcome::Winner { player, .. }) => Some(ScoreReport {
                winner: player,
                moves: self.moves_played,
                score: 100u32.saturating_sub(self.moves_played).max(1),
            }),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::Red)
    }
}
