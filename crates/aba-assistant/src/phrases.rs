//! Phrase bank: per-language UI phrases
//!
//! Sample queries and input placeholders for the search box, plus the
//! analytics sample questions. English is always present and backs every
//! lookup a language does not cover.

use crate::language::Language;
use std::collections::HashMap;

/// Phrases shown for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrases {
    /// Search box placeholder
    pub placeholder: Option<String>,
    /// "Try:" suggestions under the search box
    pub sample_queries: Vec<String>,
}

impl Phrases {
    fn new(placeholder: &str, samples: &[&str]) -> Self {
        Self {
            placeholder: Some(placeholder.to_string()),
            sample_queries: samples.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Static dictionary of per-language phrases
#[derive(Debug, Clone)]
pub struct PhraseBank {
    english: Phrases,
    localized: HashMap<Language, Phrases>,
    analytics_questions: Vec<String>,
}

impl Default for PhraseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PhraseBank {
    /// The phrases authored for the marketplace demo
    pub fn builtin() -> Self {
        let english = Phrases::new(
            "What are you looking for? (e.g., I need wedding shoes size 43...)",
            &[
                "I need wedding shoes size 43",
                "Show me leather bags under ₦20,000",
                "Bulk order 50 palm slippers",
                "Office shoes for men, black",
            ],
        );

        let mut localized = HashMap::new();
        localized.insert(
            Language::Igbo,
            Phrases::new(
                "Gịnị ka ị chọrọ? (e.g., Achọrọ m akpụkpọ ụkwụ...)",
                &[
                    "Achọrọ m akpụkpọ ụkwụ maka agbamakwụkwọ",
                    "Gosi m akpa leather",
                    "Akpụkpọ ụkwụ nwoke size 43",
                    "Akwa maka ọrụ",
                ],
            ),
        );
        localized.insert(
            Language::Yoruba,
            Phrases::new(
                "Kini o n wa? (e.g., Mo nilo bata fun igbeyawo...)",
                &[
                    "Mo nilo bata fun igbeyawo size 43",
                    "Fi bag awọ han mi",
                    "Bata okunrin dudu fun ọfiisi",
                    "Aso ibile fun ayeye",
                ],
            ),
        );
        localized.insert(
            Language::Hausa,
            Phrases::new(
                "Me kake nema? (e.g., Ina bukatar takalmi...)",
                &[
                    "Ina bukatar takalmi na bikin aure size 43",
                    "Nuna mini jaka na fata",
                    "Takalmin maza bakar fata",
                    "Riga na ofis",
                ],
            ),
        );
        localized.insert(
            Language::Pidgin,
            Phrases::new(
                "Wetin you dey find? (e.g., I wan buy shoe...)",
                &[
                    "I wan buy wedding shoe size 43",
                    "Show me leather bag abeg",
                    "I need bulk slippers for my shop",
                    "Black shoe for office work",
                ],
            ),
        );

        let analytics_questions = [
            "Total revenue this month?",
            "How many new traders?",
            "Top selling products?",
            "Show market activity",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

        Self {
            english,
            localized,
            analytics_questions,
        }
    }

    fn entry(&self, lang: Language) -> Option<&Phrases> {
        if lang == Language::English {
            Some(&self.english)
        } else {
            self.localized.get(&lang)
        }
    }

    /// Sample queries for a language, English when none are authored
    pub fn sample_queries(&self, lang: Language) -> &[String] {
        match self.entry(lang) {
            Some(phrases) if !phrases.sample_queries.is_empty() => &phrases.sample_queries,
            _ => &self.english.sample_queries,
        }
    }

    /// Search placeholder for a language, English when none is authored
    pub fn placeholder(&self, lang: Language) -> &str {
        self.entry(lang)
            .and_then(|p| p.placeholder.as_deref())
            .or(self.english.placeholder.as_deref())
            .unwrap_or_default()
    }

    /// Sample questions for the analytics box
    pub fn analytics_questions(&self) -> &[String] {
        &self.analytics_questions
    }

    /// Replace the sample queries of a language
    pub fn set_sample_queries(&mut self, lang: Language, queries: Vec<String>) {
        if lang == Language::English {
            self.english.sample_queries = queries;
        } else {
            self.localized.entry(lang).or_default().sample_queries = queries;
        }
    }

    /// Replace the search placeholder of a language
    pub fn set_placeholder(&mut self, lang: Language, placeholder: String) {
        if lang == Language::English {
            self.english.placeholder = Some(placeholder);
        } else {
            self.localized.entry(lang).or_default().placeholder = Some(placeholder);
        }
    }
}
