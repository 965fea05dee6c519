pub mod final_rank;
pub mod language;
pub mod survey;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::RESULT_COUNT;
use crate::core::{BattleRecord, CandidateMember, KoreanLevel, Locale};

pub use final_rank::{compare_candidates, FinalRanker};
pub use language::{language_bonus, language_bonus_str};
pub use survey::{score_members, top_candidates};

/// Trait for final ranking implementations
pub trait Ranker: Send + Sync {
    /// Rank candidates best-first with preference, bonus and final scores filled in
    fn rank(
        &self,
        candidates: &[CandidateMember],
        battle_records: &[BattleRecord],
        preference: LanguagePreference,
    ) -> Vec<CandidateMember>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// User language settings that drive the language bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguagePreference {
    pub korean_level: KoreanLevel,
    pub prefer_japanese_support: bool,
}

impl LanguagePreference {
    pub fn new(korean_level: KoreanLevel, prefer_japanese_support: bool) -> Self {
        Self {
            korean_level,
            prefer_japanese_support,
        }
    }
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::new(KoreanLevel::None, true)
    }
}

/// Final ranking split into the highlighted top entries and the finalists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub ranked: Vec<CandidateMember>,
    pub result_count: usize,
    /// Ranking method used
    pub ranking_method: String,
}

impl RankingResult {
    pub fn new(ranked: Vec<CandidateMember>) -> Self {
        Self {
            ranked,
            result_count: RESULT_COUNT,
            ranking_method: String::from("final"),
        }
    }

    pub fn with_result_count(mut self, result_count: usize) -> Self {
        self.result_count = result_count;
        self
    }

    pub fn with_ranking_method(mut self, method: impl Into<String>) -> Self {
        self.ranking_method = method.into();
        self
    }

    pub fn winner(&self) -> Option<&CandidateMember> {
        self.ranked.first()
    }

    /// Highlighted entries
    pub fn top(&self) -> &[CandidateMember] {
        &self.ranked[..self.result_count.min(self.ranked.len())]
    }

    /// Everything ranked after the highlighted entries
    pub fn finalists(&self) -> &[CandidateMember] {
        &self.ranked[self.result_count.min(self.ranked.len())..]
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Get display string for logging
    pub fn display(&self, locale: Locale) -> String {
        self.ranked
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{}. {} ({:.2} = {:.2} + {:.2})",
                    i + 1,
                    c.member.display_name(locale),
                    c.final_score,
                    c.preference_score,
                    c.language_bonus
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Descending order on scores. `-0.0` equals `0.0`; NaN sorts last.
pub(crate) fn compare_desc(a: f64, b: f64) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else if score == 0.0 {
        0.0
    } else {
        score
    }
}
