use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display locales. `Ja` is the primary locale every label has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    Ko,
    En,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ja, Locale::Ko, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// Parse a locale tag, resolving anything unrecognized to the primary locale.
    pub fn parse_or_primary(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Locale::Ja),
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Locale::parse_or_primary(&tag))
    }
}

/// Text with a mandatory Japanese form and optional Korean/English forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ja: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ko: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(ja: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            ko: None,
            en: None,
        }
    }

    pub fn with_ko(mut self, ko: impl Into<String>) -> Self {
        self.ko = Some(ko.into());
        self
    }

    pub fn with_en(mut self, en: impl Into<String>) -> Self {
        self.en = Some(en.into());
        self
    }

    /// Text for `locale`; an absent or empty translation falls back to `ja`.
    pub fn get(&self, locale: Locale) -> &str {
        let translated = match locale {
            Locale::Ja => None,
            Locale::Ko => self.ko.as_deref(),
            Locale::En => self.en.as_deref(),
        };
        match translated {
            Some(text) if !text.is_empty() => text,
            _ => &self.ja,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Ko);
        assert!(" EN ".parse::<Locale>().is_err());
        assert_eq!(Locale::parse_or_primary("EN"), Locale::Ja);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::parse_or_primary("fr"), Locale::Ja);
    }

    #[test]
    fn test_locale_deserialize_unknown_is_primary() {
        let locale: Locale = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(locale, Locale::Ja);
    }

    #[test]
    fn test_localized_text_fallback() {
        let text = LocalizedText::new("キュート").with_en("Cute");
        assert_eq!(text.get(Locale::En), "Cute");
        assert_eq!(text.get(Locale::Ko), "キュート");
        assert_eq!(text.get(Locale::Ja), "キュート");

        let empty_ko = LocalizedText::new("クール").with_ko("");
        assert_eq!(empty_ko.get(Locale::Ko), "クール");
    }
}
