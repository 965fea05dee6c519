use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// User's self-reported Korean proficiency, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KoreanLevel {
    #[default]
    None,
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

impl KoreanLevel {
    pub const ALL: [KoreanLevel; 5] = [
        KoreanLevel::None,
        KoreanLevel::Beginner,
        KoreanLevel::Intermediate,
        KoreanLevel::Advanced,
        KoreanLevel::Native,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KoreanLevel::None => "none",
            KoreanLevel::Beginner => "beginner",
            KoreanLevel::Intermediate => "intermediate",
            KoreanLevel::Advanced => "advanced",
            KoreanLevel::Native => "native",
        }
    }

    /// Unrecognized levels are treated as `None`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for KoreanLevel {
    type Err = String;

    /// Keys match exactly; `"Intermediate"` is not a level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(KoreanLevel::None),
            "beginner" => Ok(KoreanLevel::Beginner),
            "intermediate" => Ok(KoreanLevel::Intermediate),
            "advanced" => Ok(KoreanLevel::Advanced),
            "native" => Ok(KoreanLevel::Native),
            other => Err(format!("Unknown Korean level: {}", other)),
        }
    }
}

impl fmt::Display for KoreanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KoreanLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(KoreanLevel::parse_lenient(&raw))
    }
}

/// How well a member handles Japanese-speaking fans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JpSupportLevel {
    Ok,
    Some,
    #[default]
    Unknown,
    No,
}

impl JpSupportLevel {
    pub const ALL: [JpSupportLevel; 4] = [
        JpSupportLevel::Ok,
        JpSupportLevel::Some,
        JpSupportLevel::Unknown,
        JpSupportLevel::No,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JpSupportLevel::Ok => "ok",
            JpSupportLevel::Some => "some",
            JpSupportLevel::Unknown => "unknown",
            JpSupportLevel::No => "no",
        }
    }

    /// Unrecognized values are read as `Unknown`, which carries no bonus.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "ok" => JpSupportLevel::Ok,
            "some" => JpSupportLevel::Some,
            "no" => JpSupportLevel::No,
            _ => JpSupportLevel::Unknown,
        }
    }
}

impl fmt::Display for JpSupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JpSupportLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(JpSupportLevel::parse_lenient(&raw))
    }
}
