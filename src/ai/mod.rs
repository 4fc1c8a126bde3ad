//! AI opponents: the heuristic move advisor and a random baseline,
//! both behind the [`Agent`] trait.

mod advisor;
mod agent;
mod random;

pub use advisor::MoveAdvisor;
pub use agent::Agent;
pub use random::RandomAgent;
