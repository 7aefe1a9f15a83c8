//! Supported assistant languages
//!
//! The set is closed: English plus the four Nigerian languages the assistant
//! speaks. Each language carries the static bits every screen shows next to it
//! (display name, greeting, thanks and the badge flag).

use crate::error::AssistantError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the assistant can answer in
///
/// # Examples
///
/// ```
/// use aba_assistant::Language;
///
/// let lang = Language::Igbo;
/// assert_eq!(lang.code(), "igbo");
/// assert_eq!(lang.greeting(), "Nnọọ");
///
/// let parsed: Language = "pcm".parse().unwrap();
/// assert_eq!(parsed, Language::Pidgin);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Igbo
    Igbo,
    /// Yoruba
    Yoruba,
    /// Hausa
    Hausa,
    /// Nigerian Pidgin
    Pidgin,
}

impl Language {
    /// Every language, in the order the language picker shows them
    pub const ALL: [Language; 5] = [
        Language::Igbo,
        Language::Yoruba,
        Language::Hausa,
        Language::Pidgin,
        Language::English,
    ];

    /// Stable code used in configuration files and on the wire
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Igbo => "igbo",
            Language::Yoruba => "yoruba",
            Language::Hausa => "hausa",
            Language::Pidgin => "pidgin",
        }
    }

    /// ISO 639 style short code
    pub fn short_code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Igbo => "ig",
            Language::Yoruba => "yo",
            Language::Hausa => "ha",
            Language::Pidgin => "pcm",
        }
    }

    /// Language name for display
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Igbo => "Igbo",
            Language::Yoruba => "Yoruba",
            Language::Hausa => "Hausa",
            Language::Pidgin => "Pidgin",
        }
    }

    /// Short localized greeting
    pub fn greeting(self) -> &'static str {
        match self {
            Language::English => "Welcome",
            Language::Igbo => "Nnọọ",
            Language::Yoruba => "Ẹ káàbọ̀",
            Language::Hausa => "Sannu",
            Language::Pidgin => "How far",
        }
    }

    /// Short localized thanks
    pub fn thanks(self) -> &'static str {
        match self {
            Language::English => "Thank you",
            Language::Igbo => "Daalụ",
            Language::Yoruba => "Ẹ ṣeun",
            Language::Hausa => "Na gode",
            Language::Pidgin => "Thank you o",
        }
    }

    /// Badge flag shown next to assistant messages
    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "⚪",
            Language::Igbo => "🟢",
            Language::Yoruba => "🟡",
            Language::Hausa => "🔴",
            Language::Pidgin => "🔵",
        }
    }

    /// Parse from code, short code or display name (case-insensitive)
    pub fn from_code(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|lang| {
            lower == lang.code() || lower == lang.short_code() || lower == lang.name().to_lowercase()
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AssistantError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "english");
        assert_eq!(Language::Pidgin.code(), "pidgin");
        assert_eq!(Language::Yoruba.short_code(), "yo");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("igbo"), Some(Language::Igbo));
        assert_eq!(Language::from_code("IG"), Some(Language::Igbo));
        assert_eq!(Language::from_code("Hausa"), Some(Language::Hausa));
        assert_eq!(Language::from_code(" pcm "), Some(Language::Pidgin));
        assert_eq!(Language::from_code("zh"), None);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, AssistantError::UnknownLanguage(ref code) if code == "klingon"));
    }

    #[test]
    fn test_greeting_and_thanks() {
        assert_eq!(Language::Hausa.greeting(), "Sannu");
        assert_eq!(Language::Hausa.thanks(), "Na gode");
        assert_eq!(Language::Yoruba.thanks(), "Ẹ ṣeun");
    }

    #[test]
    fn test_all_is_complete_and_unique() {
        let mut codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Language::Igbo), "Igbo");
    }

    #[test]
    fn test_default() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Language::Yoruba).unwrap();
        assert_eq!(json, "\"yoruba\"");
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Language::Yoruba);
    }
}
