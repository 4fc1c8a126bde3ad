use std::path::Path;

use crate::error::ConfigError;

/// Board dimensions.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: crate::game::ROWS,
            cols: crate::game::COLS,
        }
    }
}

/// Heuristic weights for the move advisor.
///
/// `loss_penalty` must dominate any achievable run-score sum so that a move
/// handing the opponent an immediate win always ranks below one that does
/// not. `jitter` is the upper bound of the uniform noise added to each
/// candidate score; it diversifies play among near-equal moves and makes
/// exact score ties rare rather than impossible.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub pair_score: f64,
    pub triple_score: f64,
    pub loss_penalty: f64,
    pub jitter: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            pair_score: 10.0,
            triple_score: 50.0,
            loss_penalty: 1000.0,
            jitter: 5.0,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < 4 {
            return Err(ConfigError::Validation("board.rows must be >= 4".into()));
        }
        if self.board.cols < 4 {
            return Err(ConfigError::Validation("board.cols must be >= 4".into()));
        }
        if self.advisor.pair_score < 0.0 {
            return Err(ConfigError::Validation(
                "advisor.pair_score must be >= 0".into(),
            ));
        }
        if self.advisor.triple_score < 0.0 {
            return Err(ConfigError::Validation(
                "advisor.triple_score must be >= 0".into(),
            ));
        }
        if self.advisor.jitter <= 0.0 {
            return Err(ConfigError::Validation(
                "advisor.jitter must be > 0".into(),
            ));
        }

        // The penalty must outweigh typical run-score sums (a handful of
        // pairs and triples), or blocking stops dominating move choice.
        let run_scale = self.advisor.triple_score.max(self.advisor.pair_score);
        if self.advisor.loss_penalty <= 10.0 * run_scale {
            return Err(ConfigError::Validation(
                "advisor.loss_penalty must dominate the run scores".into(),
            ));
        }

        Ok(())
    }
}
