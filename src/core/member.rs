use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::{JpSupportLevel, Locale, LocalizedText};

/// An idol-group member with per-attribute affinity scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique member ID
    pub id: String,

    /// Owning group ID
    pub group_id: String,

    /// Display name
    pub name: LocalizedText,

    /// Attribute key -> affinity
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,

    /// Secondary "cover/artist" affinities, consulted when `scores` lacks a key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub covers: Option<BTreeMap<String, f64>>,

    /// Japanese-language support
    #[serde(default)]
    pub jp_support: JpSupportLevel,

    /// Free-form attribute keys shown as tags on result cards
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, group_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_id: group_id.into(),
            name: LocalizedText::new(name),
            scores: BTreeMap::new(),
            covers: None,
            jp_support: JpSupportLevel::Unknown,
            tags: Vec::new(),
        }
    }

    pub fn with_score(mut self, key: impl Into<String>, value: f64) -> Self {
        self.scores.insert(key.into(), value);
        self
    }

    pub fn with_cover(mut self, key: impl Into<String>, value: f64) -> Self {
        self.covers
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    pub fn with_jp_support(mut self, level: JpSupportLevel) -> Self {
        self.jp_support = level;
        self
    }

    /// Affinity for `key`: primary scores first, then covers, else 0.
    ///
    /// A present primary entry wins even when it is zero. NaN counts as 0.
    pub fn affinity(&self, key: &str) -> f64 {
        let value = self
            .scores
            .get(key)
            .or_else(|| self.covers.as_ref().and_then(|covers| covers.get(key)))
            .copied()
            .unwrap_or(0.0);

        if value.is_nan() {
            0.0
        } else {
            value
        }
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }
}

/// A group of members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: LocalizedText,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: LocalizedText::new(name),
        }
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }
}
