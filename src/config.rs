use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Size of the post-survey candidate pool and cap on the final ranking
pub const CANDIDATE_COUNT: usize = 8;

/// Number of top entries highlighted on the result card
pub const RESULT_COUNT: usize = 3;

/// Battle rounds played before the final ranking
pub const BATTLE_ROUNDS: usize = 10;

pub const DEFAULT_SITE_URL: &str = "https://oshichecker.example.com";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub candidate_count: usize,
    pub result_count: usize,
    pub battle_rounds: usize,
    pub site_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            candidate_count: CANDIDATE_COUNT,
            result_count: RESULT_COUNT,
            battle_rounds: BATTLE_ROUNDS,
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `OSHI_CANDIDATE_COUNT`, `OSHI_RESULT_COUNT`,
    /// `OSHI_BATTLE_ROUNDS` and `OSHI_SITE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("OSHI_CANDIDATE_COUNT") {
            config.candidate_count = parse_count("OSHI_CANDIDATE_COUNT", &value)?;
        }
        if let Some(value) = lookup("OSHI_RESULT_COUNT") {
            config.result_count = parse_count("OSHI_RESULT_COUNT", &value)?;
        }
        if let Some(value) = lookup("OSHI_BATTLE_ROUNDS") {
            config.battle_rounds = parse_count("OSHI_BATTLE_ROUNDS", &value)?;
        }
        if let Some(value) = lookup("OSHI_SITE_URL") {
            if !value.trim().is_empty() {
                config.site_url = value.trim().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.candidate_count == 0 {
            return Err(EngineError::Config("candidate_count must be positive".into()));
        }
        if self.result_count == 0 {
            return Err(EngineError::Config("result_count must be positive".into()));
        }
        if self.result_count > self.candidate_count {
            return Err(EngineError::Config(format!(
                "result_count ({}) exceeds candidate_count ({})",
                self.result_count, self.candidate_count
            )));
        }
        Ok(())
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| EngineError::Config(format!("{}={:?}: {}", name, value, e)))
}
