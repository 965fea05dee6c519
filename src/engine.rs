use std::sync::Arc;

use crate::attributes::AttributeCatalog;
use crate::battle::{BattleOutcome, BattleSession};
use crate::catalog::DataCatalog;
use crate::config::EngineConfig;
use crate::core::{CandidateMember, Group, Locale, SurveyScores};
use crate::error::Result;
use crate::ranking::{score_members, top_candidates, FinalRanker, LanguagePreference, Ranker, RankingResult};
use crate::share::share_text;

/// Main quiz orchestrator: survey -> candidate pool -> battles -> final ranking
pub struct OshiEngine {
    catalog: DataCatalog,
    attributes: Arc<AttributeCatalog>,
    ranker: Box<dyn Ranker>,
    config: EngineConfig,
}

impl OshiEngine {
    /// Create an engine with the built-in attribute catalog and final ranker
    pub fn new(catalog: DataCatalog, config: EngineConfig) -> Result<Self> {
        Self::with_parts(
            catalog,
            Arc::new(AttributeCatalog::builtin()),
            Box::new(FinalRanker::with_limit(config.candidate_count)),
            config,
        )
    }

    pub fn with_parts(
        catalog: DataCatalog,
        attributes: Arc<AttributeCatalog>,
        ranker: Box<dyn Ranker>,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;

        let unknown = catalog.check_attribute_keys(&attributes);
        if unknown > 0 {
            tracing::warn!("{} member scores use keys outside the attribute catalog", unknown);
        }

        tracing::info!(
            "Engine ready: {} members, {} attributes, ranker '{}'",
            catalog.members().len(),
            attributes.len(),
            ranker.name()
        );

        Ok(Self {
            catalog,
            attributes,
            ranker,
            config,
        })
    }

    /// Score all members and keep the candidate pool
    pub fn survey_candidates(&self, scores: &SurveyScores) -> Vec<CandidateMember> {
        let scored = score_members(self.catalog.members(), scores);
        let pool = top_candidates(scored, self.config.candidate_count);
        tracing::debug!(
            "Candidate pool: {}",
            pool.iter().map(|c| c.id()).collect::<Vec<_>>().join(", ")
        );
        pool
    }

    pub fn start_battle(&self, candidates: Vec<CandidateMember>) -> BattleSession {
        BattleSession::new(candidates, self.config.battle_rounds)
    }

    pub fn final_ranking(&self, outcome: &BattleOutcome, preference: LanguagePreference) -> RankingResult {
        let ranked = self
            .ranker
            .rank(outcome.candidates(), outcome.records(), preference);

        if let Some(winner) = ranked.first() {
            tracing::info!(
                "Final ranking winner: {} ({:.2})",
                winner.id(),
                winner.final_score
            );
        }

        let result = RankingResult::new(ranked)
            .with_result_count(self.config.result_count)
            .with_ranking_method(self.ranker.name());
        tracing::debug!("Final ranking:\n{}", result.display(Locale::Ja));
        result
    }

    pub fn share_text(&self, result: &RankingResult, locale: Locale) -> String {
        share_text(result.top(), self.catalog.groups(), locale, &self.config.site_url)
    }

    pub fn label_of<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.attributes.label_of(key, locale)
    }

    pub fn group_of(&self, candidate: &CandidateMember) -> Option<&Group> {
        self.catalog.group(&candidate.member.group_id)
    }

    pub fn attributes(&self) -> &Arc<AttributeCatalog> {
        &self.attributes
    }

    pub fn catalog(&self) -> &DataCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
