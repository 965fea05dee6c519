//! # Oshi Checker Engine
//!
//! Scoring and ranking engine for the Oshi Checker idol quiz:
//! - Attribute catalog with localized labels and category colors
//! - Survey scoring and candidate pool selection
//! - Pairwise battle session over the pool
//! - Deterministic final ranking with a Japanese-support language bonus
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use oshi_checker_engine::{DataCatalog, EngineConfig, LanguagePreference, Locale, OshiEngine, SurveyScores};
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = DataCatalog::from_paths("data/members.json", "data/groups.json")?;
//!     let engine = OshiEngine::new(catalog, EngineConfig::from_env()?)?;
//!
//!     let mut scores = SurveyScores::new();
//!     scores.add("cute", 2.0);
//!     scores.add("dance", 1.0);
//!
//!     let mut session = engine.start_battle(engine.survey_candidates(&scores));
//!     while let Some((a, b)) = session.next_pair() {
//!         let (winner, loser) = (a.id().to_string(), b.id().to_string());
//!         session.record(&winner, &loser)?;
//!     }
//!
//!     let result = engine.final_ranking(&session.finish(), LanguagePreference::default());
//!     println!("{}", engine.share_text(&result, Locale::Ja));
//!     Ok(())
//! }
//! ```

pub mod attributes;
pub mod battle;
pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod share;

// Re-export primary types
pub use attributes::{AttributeCatalog, AttributeCategory, AttributeDefinition};
pub use battle::{BattleOutcome, BattleSession};
pub use catalog::DataCatalog;
pub use config::{EngineConfig, BATTLE_ROUNDS, CANDIDATE_COUNT, RESULT_COUNT};
pub use core::{
    BattleRecord, CandidateMember, Group, JpSupportLevel, KoreanLevel, Locale, LocalizedText, Member,
    Question, QuestionOption, SurveyScores,
};
pub use engine::OshiEngine;
pub use error::{EngineError, Result};
pub use ranking::{FinalRanker, LanguagePreference, Ranker, RankingResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
