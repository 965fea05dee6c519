use serde::{Deserialize, Serialize};

use crate::core::Member;

/// Per-member scoring record carried from the survey through the battle phase
/// into the final ranking.
///
/// `survey_score` is fixed at creation. `appearance_count` and `win_count`
/// change only inside a battle session. `preference_score`, `language_bonus`
/// and `final_score` stay zero until the final ranking fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMember {
    pub member: Member,
    pub survey_score: f64,
    #[serde(default)]
    pub appearance_count: u32,
    #[serde(default)]
    pub win_count: u32,
    #[serde(default)]
    pub preference_score: f64,
    #[serde(default)]
    pub language_bonus: f64,
    #[serde(default)]
    pub final_score: f64,
}

impl CandidateMember {
    pub fn new(member: Member, survey_score: f64) -> Self {
        Self {
            member,
            survey_score,
            appearance_count: 0,
            win_count: 0,
            preference_score: 0.0,
            language_bonus: 0.0,
            final_score: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.member.id
    }
}

/// Pairwise outcome of one battle round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub member_a: String,
    pub member_b: String,
    pub winner_id: String,
}

impl BattleRecord {
    pub fn new(
        member_a: impl Into<String>,
        member_b: impl Into<String>,
        winner_id: impl Into<String>,
    ) -> Self {
        Self {
            member_a: member_a.into(),
            member_b: member_b.into(),
            winner_id: winner_id.into(),
        }
    }

    /// True when this record is about the unordered pair `{a, b}`.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.member_a == a && self.member_b == b) || (self.member_a == b && self.member_b == a)
    }

    pub fn loser_id(&self) -> &str {
        if self.winner_id == self.member_a {
            &self.member_b
        } else {
            &self.member_a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_starts_at_zero() {
        let candidate = CandidateMember::new(Member::new("m1", "g1", "ミナ"), 12.5);
        assert_eq!(candidate.id(), "m1");
        assert_eq!(candidate.survey_score, 12.5);
        assert_eq!(candidate.win_count, 0);
        assert_eq!(candidate.appearance_count, 0);
        assert_eq!(candidate.final_score, 0.0);
    }

    #[test]
    fn test_battle_record_pair_is_unordered() {
        let record = BattleRecord::new("m1", "m2", "m2");
        assert!(record.involves_pair("m1", "m2"));
        assert!(record.involves_pair("m2", "m1"));
        assert!(!record.involves_pair("m1", "m3"));
        assert_eq!(record.loser_id(), "m1");
    }

    #[test]
    fn test_battle_record_json_shape() {
        let record: BattleRecord =
            serde_json::from_str(r#"{"memberA": "a", "memberB": "b", "winnerId": "a"}"#).unwrap();
        assert_eq!(record, BattleRecord::new("a", "b", "a"));
    }
}
