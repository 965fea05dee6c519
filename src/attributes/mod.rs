mod definitions;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::{Locale, LocalizedText};

/// Color for keys the catalog does not know
pub const NEUTRAL_COLOR: &str = "#9ca3af";

/// Fixed grouping of attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeCategory {
    Genre,
    Vibe,
    Performance,
    Meet,
}

impl AttributeCategory {
    pub const ALL: [AttributeCategory; 4] = [
        AttributeCategory::Genre,
        AttributeCategory::Vibe,
        AttributeCategory::Performance,
        AttributeCategory::Meet,
    ];

    /// Display color shared by every key in the category
    pub fn color(&self) -> &'static str {
        match self {
            AttributeCategory::Genre => "#8b5cf6",
            AttributeCategory::Vibe => "#ec4899",
            AttributeCategory::Performance => "#22c55e",
            AttributeCategory::Meet => "#f59e0b",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeCategory::Genre => "genre",
            AttributeCategory::Vibe => "vibe",
            AttributeCategory::Performance => "performance",
            AttributeCategory::Meet => "meet",
        }
    }
}

/// One scoring dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub key: String,
    pub category: AttributeCategory,
    pub label: LocalizedText,
}

/// Read-only registry of attribute keys, built once and shared.
///
/// Lookups never fail: unknown keys echo back as their own label and get
/// [`NEUTRAL_COLOR`].
#[derive(Debug, Clone)]
pub struct AttributeCatalog {
    definitions: Vec<AttributeDefinition>,
    index: HashMap<String, usize>,
}

impl AttributeCatalog {
    /// Build a catalog; a repeated key keeps its first definition.
    pub fn new(definitions: impl IntoIterator<Item = AttributeDefinition>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();

        for definition in definitions {
            if index.contains_key(&definition.key) {
                tracing::warn!("Duplicate attribute key '{}' ignored", definition.key);
                continue;
            }
            index.insert(definition.key.clone(), kept.len());
            kept.push(definition);
        }

        Self {
            definitions: kept,
            index,
        }
    }

    /// The standard key set used by the quiz
    pub fn builtin() -> Self {
        Self::new(
            definitions::BUILTIN
                .iter()
                .map(|&(key, category, ja, ko, en)| AttributeDefinition {
                    key: key.to_string(),
                    category,
                    label: LocalizedText::new(ja).with_ko(ko).with_en(en),
                }),
        )
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let definitions: Vec<AttributeDefinition> = serde_json::from_str(json)?;
        Ok(Self::new(definitions))
    }

    pub fn get(&self, key: &str) -> Option<&AttributeDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    /// Localized label, falling back to `ja`, or the key itself when unknown.
    pub fn label_of<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        match self.get(key) {
            Some(definition) => definition.label.get(locale),
            None => key,
        }
    }

    pub fn is_valid_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn color_of(&self, key: &str) -> &'static str {
        self.category_of(key)
            .map(|category| category.color())
            .unwrap_or(NEUTRAL_COLOR)
    }

    pub fn category_of(&self, key: &str) -> Option<AttributeCategory> {
        self.get(key).map(|definition| definition.category)
    }

    /// All keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|definition| definition.key.as_str())
    }

    pub fn keys_in(&self, category: AttributeCategory) -> Vec<&str> {
        self.definitions
            .iter()
            .filter(|definition| definition.category == category)
            .map(|definition| definition.key.as_str())
            .collect()
    }

    pub fn definitions(&self) -> &[AttributeDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = AttributeCatalog::builtin();
        assert_eq!(catalog.len(), 49);
        assert_eq!(catalog.keys().next(), Some("genre_orthodox"));
        assert_eq!(catalog.keys_in(AttributeCategory::Genre).len(), 9);
        assert_eq!(catalog.keys_in(AttributeCategory::Vibe).len(), 20);
        assert_eq!(catalog.keys_in(AttributeCategory::Performance).len(), 9);
        assert_eq!(catalog.keys_in(AttributeCategory::Meet).len(), 11);
    }

    #[test]
    fn test_label_of() {
        let catalog = AttributeCatalog::builtin();
        assert_eq!(catalog.label_of("cute", Locale::Ja), "キュート");
        assert_eq!(catalog.label_of("cute", Locale::Ko), "큐트");
        assert_eq!(catalog.label_of("face_fox", Locale::En), "Fox face");
        assert_eq!(catalog.label_of("not_a_key", Locale::En), "not_a_key");
    }

    #[test]
    fn test_label_falls_back_to_ja() {
        let catalog = AttributeCatalog::new(vec![AttributeDefinition {
            key: "stage".to_string(),
            category: AttributeCategory::Performance,
            label: LocalizedText::new("ステージ").with_en("Stage"),
        }]);
        assert_eq!(catalog.label_of("stage", Locale::Ko), "ステージ");
        assert_eq!(catalog.label_of("stage", Locale::En), "Stage");
    }

    #[test]
    fn test_is_valid_key() {
        let catalog = AttributeCatalog::builtin();
        assert!(catalog.is_valid_key("gap"));
        assert!(!catalog.is_valid_key("Gap"));
        assert!(!catalog.is_valid_key(""));
    }

    #[test]
    fn test_color_of() {
        let catalog = AttributeCatalog::builtin();
        assert_eq!(catalog.color_of("genre_loud"), "#8b5cf6");
        assert_eq!(catalog.color_of("cute"), "#ec4899");
        assert_eq!(catalog.color_of("dance"), "#22c55e");
        assert_eq!(catalog.color_of("talk"), "#f59e0b");
        assert_eq!(catalog.color_of("mystery_key"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_duplicate_key_keeps_first() {
        let first = AttributeDefinition {
            key: "cute".to_string(),
            category: AttributeCategory::Vibe,
            label: LocalizedText::new("キュート"),
        };
        let second = AttributeDefinition {
            key: "cute".to_string(),
            category: AttributeCategory::Meet,
            label: LocalizedText::new("かわいい"),
        };
        let catalog = AttributeCatalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.category_of("cute"), Some(AttributeCategory::Vibe));
        assert_eq!(catalog.label_of("cute", Locale::Ja), "キュート");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"key": "cute", "category": "vibe", "label": {"ja": "キュート"}}]"#;
        let catalog = AttributeCatalog::from_json(json).unwrap();
        assert!(catalog.is_valid_key("cute"));
        assert_eq!(catalog.color_of("cute"), "#ec4899");
    }
}
