//! Runtime configuration passed in from JS as JSON.
//!
//! Every field has a default, so `{}` (or no config at all) starts the game with
//! the classic 1024x768 layout and ten questions per round.

use serde::Deserialize;

use crate::error::GameError;

pub const BASE_WIDTH: f64 = 1024.0;
pub const BASE_HEIGHT: f64 = 768.0;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Id of the canvas to reuse or create.
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
    /// Track the window's inner size every frame.
    pub fit_to_window: bool,
    pub questions_per_round: u32,
    /// Draw passages uniformly with replacement instead of from a shuffled deck.
    pub allow_repeats: bool,
    /// Fixed RNG seed; entropy from the browser when absent.
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "fq-canvas".to_string(),
            width: BASE_WIDTH as u32,
            height: BASE_HEIGHT as u32,
            fit_to_window: true,
            questions_per_round: 10,
            allow_repeats: false,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: GameConfig = if json.trim().is_empty() {
            GameConfig::default()
        } else {
            serde_json::from_str(json)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.questions_per_round == 0 {
            return Err(GameError::ConfigInvalid(
                "questions_per_round must be at least 1".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GameError::ConfigInvalid(format!(
                "canvas size {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.canvas_id.is_empty() {
            return Err(GameError::ConfigInvalid("canvas_id is empty".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, GameError> {
        self.log_level
            .parse()
            .map_err(|_| GameError::ConfigInvalid(format!("unknown log level '{}'", self.log_level)))
    }
}
