use std::cmp::Ordering;

use crate::config::CANDIDATE_COUNT;
use crate::core::{BattleRecord, CandidateMember};
use crate::ranking::{compare_desc, language_bonus, LanguagePreference, Ranker};

/// Final ranking: survey score + battle wins + language bonus, with a
/// tie-break cascade that always ends in a decision for distinct ids.
#[derive(Debug, Clone)]
pub struct FinalRanker {
    max_results: usize,
}

impl FinalRanker {
    pub fn new() -> Self {
        Self::with_limit(CANDIDATE_COUNT)
    }

    /// Cap the ranking at `max_results` entries
    pub fn with_limit(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

impl Default for FinalRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for FinalRanker {
    fn rank(
        &self,
        candidates: &[CandidateMember],
        battle_records: &[BattleRecord],
        preference: LanguagePreference,
    ) -> Vec<CandidateMember> {
        let mut ranked: Vec<CandidateMember> = candidates
            .iter()
            .map(|candidate| with_final_score(candidate, preference))
            .collect();

        insertion_sort_by(&mut ranked, |a, b| compare_candidates(a, b, battle_records));
        ranked.truncate(self.max_results);

        tracing::debug!(
            "Ranked {} of {} candidates using {} battle records",
            ranked.len(),
            candidates.len(),
            battle_records.len()
        );

        ranked
    }

    fn name(&self) -> &str {
        "final"
    }
}

/// Copy of `candidate` with preference, bonus and final score filled in.
pub fn with_final_score(candidate: &CandidateMember, preference: LanguagePreference) -> CandidateMember {
    let preference_score = candidate.survey_score + f64::from(candidate.win_count);
    let language_bonus = if preference.prefer_japanese_support {
        language_bonus(preference.korean_level, candidate.member.jp_support)
    } else {
        0.0
    };

    CandidateMember {
        preference_score,
        language_bonus,
        final_score: preference_score + language_bonus,
        ..candidate.clone()
    }
}

/// Ordering between two scored candidates, `Less` meaning `a` ranks first.
///
/// Cascade: final score, win count, survey score, direct battle, member id.
pub fn compare_candidates(
    a: &CandidateMember,
    b: &CandidateMember,
    battle_records: &[BattleRecord],
) -> Ordering {
    compare_desc(a.final_score, b.final_score)
        .then_with(|| b.win_count.cmp(&a.win_count))
        .then_with(|| compare_desc(a.survey_score, b.survey_score))
        .then_with(|| direct_battle(a.id(), b.id(), battle_records))
        .then_with(|| a.id().cmp(b.id()))
}

/// Only the first record for the pair counts.
fn direct_battle(a: &str, b: &str, battle_records: &[BattleRecord]) -> Ordering {
    match battle_records.iter().find(|record| record.involves_pair(a, b)) {
        Some(record) if record.winner_id == a => Ordering::Less,
        Some(record) if record.winner_id == b => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

// Head-to-head results can be cyclic, so `compare` may be intransitive and
// slice::sort_by is allowed to panic on it. Stable and deterministic.
fn insertion_sort_by<T>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
