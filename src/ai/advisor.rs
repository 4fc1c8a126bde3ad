use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::game::{Board, Cell, GameState, Player};

use super::agent::Agent;

/// Probe directions for run scoring, matching the board's line-detection
/// order: horizontal, vertical, diagonal down-right, diagonal up-right.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// One-ply lookahead move recommender.
///
/// For each candidate column the advisor simulates its own drop, takes any
/// immediate win on the spot, and otherwise scores the resulting position
/// minus the best the opponent can answer with. A small uniform jitter is
/// added so near-equal candidates do not always resolve the same way; exact
/// ties are broken by a uniform random pick.
pub struct MoveAdvisor {
    config: AdvisorConfig,
    rng: StdRng,
}

impl MoveAdvisor {
    pub fn new() -> Self {
        Self::with_config(AdvisorConfig::default())
    }

    pub fn with_config(config: AdvisorConfig) -> Self {
        MoveAdvisor {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Advisor with a fixed seed, for reproducible behavior under test.
    pub fn seeded(seed: u64) -> Self {
        MoveAdvisor {
            config: AdvisorConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seeded_with_config(seed: u64, config: AdvisorConfig) -> Self {
        MoveAdvisor {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Recommend a column for `ai` to play on `board`.
    ///
    /// Always returns a playable column as long as one exists; on a full
    /// board (which callers must not pass) it degenerates to column 0.
    pub fn recommend(&mut self, board: &Board, ai: Player, opponent: Player) -> usize {
        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves: Vec<usize> = Vec::new();

        for col in 0..board.cols() {
            if board.available_row(col).is_none() {
                continue;
            }

            // Simulate our move.
            let mut sim = board.clone();
            sim.drop_piece(col, ai.to_cell())
                .expect("column checked non-full");

            // An immediate win is taken unconditionally, before any
            // heuristic or jitter can interfere.
            if sim.has_winning_line(ai.to_cell()) {
                debug!(column = col, "immediate winning move");
                return col;
            }

            let mut score = position_score(&sim, ai.to_cell(), &self.config);

            // Worst case among the opponent's replies. A reply that wins
            // outright is scored with the dominant penalty and ends the
            // scan; otherwise the opponent's best position score counts.
            let mut opp_score: f64 = 0.0;
            for opp_col in 0..sim.cols() {
                if sim.available_row(opp_col).is_none() {
                    continue;
                }
                let mut reply = sim.clone();
                reply
                    .drop_piece(opp_col, opponent.to_cell())
                    .expect("column checked non-full");
                if reply.has_winning_line(opponent.to_cell()) {
                    opp_score = self.config.loss_penalty;
                    break;
                }
                opp_score = opp_score.max(position_score(&reply, opponent.to_cell(), &self.config));
            }

            score -= opp_score;
            score += self.rng.random_range(0.0..self.config.jitter);

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(col);
            } else if score == best_score {
                best_moves.push(col);
            }
        }

        if best_moves.is_empty() {
            // No candidate at all: the board was full. Stay graceful.
            return (0..board.cols())
                .find(|&col| board.available_row(col).is_some())
                .unwrap_or(0);
        }

        let choice = best_moves[self.rng.random_range(0..best_moves.len())];
        debug!(column = choice, score = best_score, "recommended move");
        choice
    }
}

impl Default for MoveAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MoveAdvisor {
    fn select_action(&mut self, state: &GameState) -> usize {
        let me = state.current_player();
        self.recommend(state.board(), me, me.other())
    }

    fn name(&self) -> &str {
        "Advisor"
    }
}

/// Heuristic position score for `owner`: +`pair_score` per open 2-run and
/// +`triple_score` per open 3-run.
///
/// Runs are counted from every owned cell, probing only in the increasing
/// direction; overlapping runs all count. A probe ending on an opponent
/// token marks the run blocked (worth 0), while an empty cell or the board
/// edge ends the run without blocking it. The single-ended probe means a
/// run shut off on its low side still scores from its first cell; changing
/// that would change playing strength, so it is kept as is.
fn position_score(board: &Board, owner: Cell, config: &AdvisorConfig) -> f64 {
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;
    let mut score = 0.0;

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != owner {
                continue;
            }

            for &(dr, dc) in &DIRECTIONS {
                let mut count = 1;
                let mut blocked = false;

                for i in 1..4 {
                    let r = row as i32 + dr * i;
                    let c = col as i32 + dc * i;
                    if r < 0 || r >= rows || c < 0 || c >= cols {
                        break;
                    }
                    match board.get(r as usize, c as usize) {
                        cell if cell == owner => count += 1,
                        Cell::Empty => break,
                        _ => {
                            blocked = true;
                            break;
                        }
                    }
                }

                if !blocked {
                    if count == 2 {
                        score += config.pair_score;
                    } else if count == 3 {
                        score += config.triple_score;
                    }
                }
            }
        }
    }

    score
}
