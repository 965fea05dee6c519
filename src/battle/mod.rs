use serde::{Deserialize, Serialize};

use crate::config::BATTLE_ROUNDS;
use crate::core::{BattleRecord, CandidateMember};
use crate::error::{EngineError, Result};

/// Owns the candidate pool while the user picks winners between pairs.
///
/// Win and appearance counters only change here. [`BattleSession::finish`]
/// hands the final state to ranking as an immutable [`BattleOutcome`].
#[derive(Debug, Clone)]
pub struct BattleSession {
    candidates: Vec<CandidateMember>,
    records: Vec<BattleRecord>,
    rounds: usize,
}

impl BattleSession {
    pub fn new(candidates: Vec<CandidateMember>, rounds: usize) -> Self {
        tracing::info!(
            "Battle session started: {} candidates, {} rounds",
            candidates.len(),
            rounds
        );
        Self {
            candidates,
            records: Vec::new(),
            rounds,
        }
    }

    /// Rounds played so far
    pub fn round(&self) -> usize {
        self.records.len()
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_finished(&self) -> bool {
        self.round() >= self.rounds || self.candidates.len() < 2
    }

    pub fn candidates(&self) -> &[CandidateMember] {
        &self.candidates
    }

    pub fn records(&self) -> &[BattleRecord] {
        &self.records
    }

    /// Pair to show next, or `None` once the session is over.
    ///
    /// Unplayed pairs come first; among those the pair with the fewest
    /// combined appearances wins, then the earliest pool positions.
    pub fn next_pair(&self) -> Option<(&CandidateMember, &CandidateMember)> {
        if self.is_finished() {
            return None;
        }

        let n = self.candidates.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .min_by_key(|&(i, j)| {
                let a = &self.candidates[i];
                let b = &self.candidates[j];
                let played = self
                    .records
                    .iter()
                    .any(|record| record.involves_pair(a.id(), b.id()));
                (played, a.appearance_count + b.appearance_count, i, j)
            })
            .map(|(i, j)| (&self.candidates[i], &self.candidates[j]))
    }

    /// Apply one round's result.
    pub fn record(&mut self, winner_id: &str, loser_id: &str) -> Result<&BattleRecord> {
        if self.is_finished() {
            return Err(EngineError::BattleFinished(self.round()));
        }
        if winner_id == loser_id {
            return Err(EngineError::InvalidBattle(format!(
                "'{}' cannot battle itself",
                winner_id
            )));
        }

        let winner = self.position(winner_id)?;
        let loser = self.position(loser_id)?;

        self.candidates[winner].win_count += 1;
        self.candidates[winner].appearance_count += 1;
        self.candidates[loser].appearance_count += 1;

        tracing::debug!(
            "Round {}: {} beat {}",
            self.round() + 1,
            winner_id,
            loser_id
        );

        self.records
            .push(BattleRecord::new(winner_id, loser_id, winner_id));
        Ok(&self.records[self.records.len() - 1])
    }

    /// End the session and release the pool.
    pub fn finish(self) -> BattleOutcome {
        tracing::info!("Battle session finished after {} rounds", self.records.len());
        BattleOutcome {
            candidates: self.candidates,
            records: self.records,
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.candidates
            .iter()
            .position(|candidate| candidate.id() == id)
            .ok_or_else(|| EngineError::UnknownCandidate(id.to_string()))
    }
}

impl From<Vec<CandidateMember>> for BattleSession {
    fn from(candidates: Vec<CandidateMember>) -> Self {
        Self::new(candidates, BATTLE_ROUNDS)
    }
}

/// Snapshot of the pool and the recorded results after the battle phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    candidates: Vec<CandidateMember>,
    records: Vec<BattleRecord>,
}

impl BattleOutcome {
    /// Outcome of a tournament run outside [`BattleSession`]
    pub fn new(candidates: Vec<CandidateMember>, records: Vec<BattleRecord>) -> Self {
        Self {
            candidates,
            records,
        }
    }

    pub fn candidates(&self) -> &[CandidateMember] {
        &self.candidates
    }

    pub fn records(&self) -> &[BattleRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Member;

    fn pool(n: usize) -> Vec<CandidateMember> {
        (0..n)
            .map(|i| CandidateMember::new(Member::new(format!("m{}", i), "g1", "x"), (n - i) as f64))
            .collect()
    }

    fn pair_ids(session: &BattleSession) -> Option<(String, String)> {
        session
            .next_pair()
            .map(|(a, b)| (a.id().to_string(), b.id().to_string()))
    }

    #[test]
    fn test_first_pair_is_pool_head() {
        let session = BattleSession::new(pool(4), 10);
        assert_eq!(pair_ids(&session), Some(("m0".into(), "m1".into())));
    }

    #[test]
    fn test_pairs_rotate_by_appearances() {
        let mut session = BattleSession::new(pool(4), 10);
        session.record("m0", "m1").unwrap();

        // m2 and m3 have not appeared yet
        assert_eq!(pair_ids(&session), Some(("m2".into(), "m3".into())));
    }

    #[test]
    fn test_no_repeat_while_unplayed_pairs_remain() {
        let mut session = BattleSession::new(pool(4), 6);
        let mut seen = Vec::new();

        while let Some((a, b)) = pair_ids(&session) {
            let key = if a < b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) };
            assert!(!seen.contains(&key), "pair {:?} repeated", key);
            seen.push(key);
            session.record(&a, &b).unwrap();
        }

        assert_eq!(seen.len(), 6);
        assert!(session.is_finished());
    }

    #[test]
    fn test_repeats_after_all_pairs_played() {
        let mut session = BattleSession::new(pool(2), 3);
        session.record("m0", "m1").unwrap();
        assert_eq!(pair_ids(&session), Some(("m0".into(), "m1".into())));
    }

    #[test]
    fn test_record_updates_counters() {
        let mut session = BattleSession::new(pool(3), 10);
        let record = session.record("m2", "m0").unwrap().clone();

        assert_eq!(record, BattleRecord::new("m2", "m0", "m2"));
        assert_eq!(session.round(), 1);

        let outcome = session.finish();
        let by_id = |id: &str| outcome.candidates().iter().find(|c| c.id() == id).unwrap().clone();
        assert_eq!(by_id("m2").win_count, 1);
        assert_eq!(by_id("m2").appearance_count, 1);
        assert_eq!(by_id("m0").win_count, 0);
        assert_eq!(by_id("m0").appearance_count, 1);
        assert_eq!(by_id("m1").appearance_count, 0);
        assert_eq!(outcome.records().len(), 1);
    }

    #[test]
    fn test_record_errors() {
        let mut session = BattleSession::new(pool(3), 1);

        assert!(matches!(session.record("m0", "m0"), Err(EngineError::InvalidBattle(_))));
        assert!(matches!(session.record("m0", "zz"), Err(EngineError::UnknownCandidate(_))));
        assert_eq!(session.round(), 0);

        session.record("m0", "m1").unwrap();
        assert!(matches!(session.record("m1", "m2"), Err(EngineError::BattleFinished(1))));
        assert!(session.next_pair().is_none());
    }

    #[test]
    fn test_small_pools_finish_immediately() {
        assert!(BattleSession::new(pool(1), 10).is_finished());
        assert!(BattleSession::new(Vec::new(), 10).next_pair().is_none());
    }

    #[test]
    fn test_default_rounds() {
        let session = BattleSession::from(pool(8));
        assert_eq!(session.rounds(), BATTLE_ROUNDS);
    }
}
