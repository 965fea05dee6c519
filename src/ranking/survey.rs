use crate::core::{CandidateMember, Member, SurveyScores};
use crate::ranking::compare_desc;

/// Score every member against the survey weights, best first.
///
/// Each member's score is the sum over survey keys of `affinity * weight`.
/// Ties keep input order.
pub fn score_members(members: &[Member], survey: &SurveyScores) -> Vec<CandidateMember> {
    let mut scored: Vec<CandidateMember> = members
        .iter()
        .map(|member| {
            let survey_score = survey
                .iter()
                .map(|(key, weight)| member.affinity(key) * weight)
                .sum::<f64>();
            CandidateMember::new(member.clone(), survey_score)
        })
        .collect();

    // stable
    scored.sort_by(|a, b| compare_desc(a.survey_score, b.survey_score));

    tracing::debug!(
        "Scored {} members against {} survey keys",
        scored.len(),
        survey.len()
    );

    scored
}

/// Keep the first `count` entries without re-sorting.
pub fn top_candidates(mut scored: Vec<CandidateMember>, count: usize) -> Vec<CandidateMember> {
    scored.truncate(count);
    scored
}
