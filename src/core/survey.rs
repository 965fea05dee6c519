use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// Accumulated answer weights per attribute key.
///
/// Keys iterate in sorted order so weighted sums over them are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyScores(BTreeMap<String, f64>);

impl SurveyScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, weight: f64) {
        *self.0.entry(key.into()).or_insert(0.0) += weight;
    }

    pub fn merge(&mut self, other: &SurveyScores) {
        for (key, weight) in other.iter() {
            self.add(key, weight);
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, weight)| (key.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply a single-choice answer: only the option's own key and value count.
    pub fn answer_single(&mut self, option: &QuestionOption) {
        self.add(option.score_key.clone(), option.value());
    }

    /// Apply a multi-choice answer after checking the selection against the question.
    pub fn answer_multi(&mut self, question: &Question, selected_ids: &[&str]) -> Result<()> {
        let options = question.select(selected_ids)?;
        let mut merged = SurveyScores::new();
        for option in options {
            merged.merge(&option.weights());
        }
        self.merge(&merged);
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SurveyScores {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut scores = SurveyScores::new();
        for (key, weight) in iter {
            scores.add(key, weight);
        }
        scores
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Single,
    Multi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    #[serde(default)]
    pub id: Option<String>,
    pub score_key: String,
    #[serde(default)]
    pub score_value: Option<f64>,
    /// Overrides `score_key`/`score_value` in multi-choice answers
    #[serde(default)]
    pub scores: Option<BTreeMap<String, f64>>,
}

impl QuestionOption {
    pub fn new(score_key: impl Into<String>) -> Self {
        Self {
            id: None,
            score_key: score_key.into(),
            score_value: None,
            scores: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.score_value.unwrap_or(1.0)
    }

    pub fn weights(&self) -> SurveyScores {
        match &self.scores {
            Some(scores) => scores.iter().map(|(key, weight)| (key.clone(), *weight)).collect(),
            None => std::iter::once((self.score_key.clone(), self.value())).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub min_select: Option<usize>,
    #[serde(default)]
    pub max_select: Option<usize>,
}

impl Question {
    pub fn min_select(&self) -> usize {
        self.min_select.unwrap_or(1)
    }

    pub fn max_select(&self) -> usize {
        self.max_select.unwrap_or(self.options.len())
    }

    /// Identifier used to select an option: its `id`, else its key, else its index.
    pub fn option_id(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|option| {
            option
                .id
                .clone()
                .filter(|id| !id.is_empty())
                .or_else(|| Some(option.score_key.clone()).filter(|key| !key.is_empty()))
                .unwrap_or_else(|| index.to_string())
        })
    }

    /// Resolve a multi-choice selection, in question order.
    ///
    /// Each option may be selected once; repeated ids are rejected.
    pub fn select(&self, selected_ids: &[&str]) -> Result<Vec<&QuestionOption>> {
        if self.kind != QuestionKind::Multi {
            return Err(EngineError::Selection {
                question: self.id.clone(),
                message: "not a multi-choice question".to_string(),
            });
        }

        if let Some((_, repeated)) = selected_ids
            .iter()
            .enumerate()
            .find(|(i, id)| selected_ids[..*i].contains(*id))
        {
            return Err(EngineError::Selection {
                question: self.id.clone(),
                message: format!("option '{}' selected more than once", repeated),
            });
        }

        let count = selected_ids.len();
        if count < self.min_select() || count > self.max_select() {
            return Err(EngineError::Selection {
                question: self.id.clone(),
                message: format!(
                    "expected {}..={} selections, got {}",
                    self.min_select(),
                    self.max_select(),
                    count
                ),
            });
        }

        let ids: Vec<String> = (0..self.options.len())
            .filter_map(|index| self.option_id(index))
            .collect();

        if let Some(unknown) = selected_ids.iter().find(|id| !ids.iter().any(|known| known.as_str() == **id)) {
            return Err(EngineError::Selection {
                question: self.id.clone(),
                message: format!("unknown option '{}'", unknown),
            });
        }

        Ok(self
            .options
            .iter()
            .zip(ids.iter())
            .filter(|(_, id)| selected_ids.contains(&id.as_str()))
            .map(|(option, _)| option)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi_question() -> Question {
        let mut loud = QuestionOption::new("genre_loud");
        loud.id = Some("loud".to_string());
        loud.scores = Some(BTreeMap::from([
            ("genre_loud".to_string(), 2.0),
            ("energy".to_string(), 1.0),
        ]));

        let mut dark = QuestionOption::new("genre_dark");
        dark.score_value = Some(3.0);

        Question {
            id: "q_genre".to_string(),
            kind: QuestionKind::Multi,
            options: vec![loud, dark, QuestionOption::new("energy")],
            min_select: Some(1),
            max_select: Some(2),
        }
    }

    #[test]
    fn test_answer_single_defaults_to_one() {
        let mut scores = SurveyScores::new();
        scores.answer_single(&QuestionOption::new("cute"));
        scores.answer_single(&QuestionOption::new("cute"));
        assert_eq!(scores.get("cute"), Some(2.0));
    }

    #[test]
    fn test_answer_multi_merges_weights() {
        let question = multi_question();
        let mut scores = SurveyScores::new();
        scores.answer_multi(&question, &["loud", "energy"]).unwrap();

        assert_eq!(scores.get("genre_loud"), Some(2.0));
        assert_eq!(scores.get("energy"), Some(2.0));
        assert_eq!(scores.get("genre_dark"), None);
    }

    #[test]
    fn test_answer_multi_rejects_bad_selection() {
        let question = multi_question();
        let mut scores = SurveyScores::new();

        assert!(scores.answer_multi(&question, &[]).is_err());
        assert!(scores
            .answer_multi(&question, &["loud", "genre_dark", "energy"])
            .is_err());
        assert!(scores.answer_multi(&question, &["nope"]).is_err());
        assert!(scores.is_empty());
    }

    #[test]
    fn test_answer_multi_rejects_repeated_ids() {
        let mut question = multi_question();
        question.min_select = Some(2);
        let mut scores = SurveyScores::new();

        let result = scores.answer_multi(&question, &["loud", "loud"]);
        assert!(matches!(result, Err(EngineError::Selection { .. })));
        assert!(scores.is_empty());

        scores.answer_multi(&question, &["loud", "genre_dark"]).unwrap();
        assert_eq!(scores.get("genre_dark"), Some(3.0));
    }

    #[test]
    fn test_answer_multi_rejects_single_question() {
        let mut question = multi_question();
        question.kind = QuestionKind::Single;
        let mut scores = SurveyScores::new();

        assert!(matches!(
            scores.answer_multi(&question, &["loud"]),
            Err(EngineError::Selection { .. })
        ));
        assert!(scores.is_empty());
    }

    #[test]
    fn test_option_id_resolution() {
        let question = multi_question();
        assert_eq!(question.option_id(0).as_deref(), Some("loud"));
        assert_eq!(question.option_id(1).as_deref(), Some("genre_dark"));
        assert_eq!(question.option_id(7), None);
    }

    #[test]
    fn test_question_json_shape() {
        let json = r#"{
            "id": "q1",
            "type": "multi",
            "maxSelect": 3,
            "options": [{"scoreKey": "cute", "scoreValue": 2}]
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, QuestionKind::Multi);
        assert_eq!(question.min_select(), 1);
        assert_eq!(question.max_select(), 3);
        assert_eq!(question.options[0].value(), 2.0);
    }
}
