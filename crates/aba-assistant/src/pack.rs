//! Language packs
//!
//! A language pack is a JSON document that adds or overrides per-language
//! content on top of the built-in tables:
//!
//! ```json
//! {
//!   "yoruba": {
//!     "placeholder": "Kini o n wa?",
//!     "keywords": { "bags": ["apo"] },
//!     "templates": { "bags": { "understanding": "Mo ye pe o n wa apo awọ." } },
//!     "script_turns": { "trader": [ { "speaker": "user", "message": "...", "time": "10:30 AM" } ] },
//!     "sample_queries": ["Fi apo awọ han mi"]
//!   }
//! }
//! ```
//!
//! Every field is optional; anything a pack leaves out keeps falling back to
//! English. The whole document is validated before any of it is applied.

use crate::chat::{ConversationTurn, Persona, ScriptLibrary};
use crate::error::{AssistantError, Result};
use crate::language::Language;
use crate::phrases::PhraseBank;
use crate::search::{Intent, ShoppingAssistant};
use crate::template::template_variables;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Understanding/suggestion overrides for one intent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateOverride {
    pub understanding: Option<String>,
    pub suggestion: Option<String>,
}

/// Content for a single language, as written in the pack file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguagePack {
    pub placeholder: Option<String>,
    /// Extra classifier keywords, keyed by intent name
    pub keywords: BTreeMap<String, Vec<String>>,
    /// Sentence overrides, keyed by intent name
    pub templates: BTreeMap<String, TemplateOverride>,
    /// Conversation scripts, keyed by persona
    pub script_turns: BTreeMap<String, Vec<ConversationTurn>>,
    pub sample_queries: Vec<String>,
}

fn invalid(language: &str, field: &str, detail: impl std::fmt::Display) -> AssistantError {
    AssistantError::Config(format!("language pack '{language}', {field}: {detail}"))
}

impl LanguagePack {
    fn validate(&self, code: &str) -> Result<()> {
        let language = Language::from_code(code).ok_or_else(|| invalid(code, "language", "unknown language code"))?;

        if self.placeholder.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(invalid(code, "placeholder", "must not be blank"));
        }

        for (name, words) in &self.keywords {
            let field = format!("keywords.{name}");
            let intent: Intent = name.parse().map_err(|e| invalid(code, &field, e))?;
            if intent == Intent::Unknown {
                return Err(invalid(code, &field, "the fallback intent takes no keywords"));
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(invalid(code, &field, "blank keyword"));
            }
        }

        for (name, pair) in &self.templates {
            let intent: Intent = name
                .parse()
                .map_err(|e| invalid(code, &format!("templates.{name}"), e))?;
            for (part, source) in [("understanding", &pair.understanding), ("suggestion", &pair.suggestion)] {
                if let Some(source) = source {
                    let field = format!("templates.{name}.{part}");
                    let vars = template_variables(&field, language, source).map_err(|e| invalid(code, &field, e))?;
                    if intent != Intent::SizedItem && vars.contains("size") {
                        return Err(invalid(code, &field, "only sized_item templates may use {{ size }}"));
                    }
                }
            }
        }

        for (name, turns) in &self.script_turns {
            let field = format!("script_turns.{name}");
            name.parse::<Persona>().map_err(|e| invalid(code, &field, e))?;
            if let Some(idx) = turns.iter().position(|t| t.message.trim().is_empty()) {
                return Err(invalid(code, &format!("{field}[{idx}]"), "empty message"));
            }
        }

        if self.sample_queries.iter().any(|q| q.trim().is_empty()) {
            return Err(invalid(code, "sample_queries", "blank query"));
        }

        Ok(())
    }
}

/// A validated set of language packs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePacks {
    packs: BTreeMap<Language, LanguagePack>,
}

impl LanguagePacks {
    /// Parse and validate a pack document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, LanguagePack> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a pack file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw: BTreeMap<String, LanguagePack> = aba_utils::read_json_file(path)?;
        let packs = Self::from_raw(raw)?;
        info!(path = %path.display(), languages = packs.len(), "Loaded language packs");
        Ok(packs)
    }

    fn from_raw(raw: BTreeMap<String, LanguagePack>) -> Result<Self> {
        for (code, pack) in &raw {
            pack.validate(code)?;
        }

        let mut packs = BTreeMap::new();
        for (code, pack) in raw {
            let language =
                Language::from_code(&code).ok_or_else(|| invalid(&code, "language", "unknown language code"))?;
            if packs.insert(language, pack).is_some() {
                return Err(invalid(&code, "language", "listed more than once"));
            }
        }

        Ok(Self { packs })
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn get(&self, language: Language) -> Option<&LanguagePack> {
        self.packs.get(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.packs.keys().copied()
    }

    /// Merge every pack over the given tables
    pub fn apply(
        &self,
        assistant: &mut ShoppingAssistant,
        library: &mut ScriptLibrary,
        phrases: &mut PhraseBank,
    ) -> Result<()> {
        for (&language, pack) in &self.packs {
            debug!(language = %language.code(), "Applying language pack");

            for (name, words) in &pack.keywords {
                let intent: Intent = name.parse()?;
                assistant.classifier_mut().extend_keywords(intent, words.as_slice());
            }

            for (name, pair) in &pack.templates {
                let intent: Intent = name.parse()?;
                if let Some(source) = &pair.understanding {
                    assistant.composer_mut().set_understanding(intent, language, source)?;
                }
                if let Some(source) = &pair.suggestion {
                    assistant.composer_mut().set_suggestion(intent, language, source)?;
                }
            }

            for (name, turns) in &pack.script_turns {
                let persona: Persona = name.parse()?;
                library.set_script(persona, language, turns.clone())?;
            }

            if !pack.sample_queries.is_empty() {
                phrases.set_sample_queries(language, pack.sample_queries.clone());
            }
            if let Some(placeholder) = &pack.placeholder {
                phrases.set_placeholder(language, placeholder.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YORUBA_PACK: &str = r#"{
        "yo": {
            "placeholder": "Kini o n wa?",
            "keywords": { "bags": ["apo"] },
            "templates": {
                "bags": { "understanding": "Mo ye pe o n wa apo awọ." },
                "sized_item": { "understanding": "Bata iwọn {{ size }}." }
            },
            "script_turns": {
                "buyer": [
                    { "speaker": "user", "message": "Mo nílò bàtà", "time": "2:15 PM" },
                    { "speaker": "assistant", "message": "Ẹ káàbọ̀!", "time": "2:15 PM" }
                ]
            },
            "sample_queries": ["Fi apo awọ han mi"]
        }
    }"#;

    fn tables() -> (ShoppingAssistant, ScriptLibrary, PhraseBank) {
        (
            ShoppingAssistant::builtin().unwrap(),
            ScriptLibrary::builtin(),
            PhraseBank::builtin(),
        )
    }

    #[test]
    fn test_pack_merges_over_builtin() {
        let packs = LanguagePacks::from_json_str(YORUBA_PACK).unwrap();
        assert_eq!(packs.languages().collect::<Vec<_>>(), vec![Language::Yoruba]);

        let (mut assistant, mut library, mut phrases) = tables();
        packs.apply(&mut assistant, &mut library, &mut phrases).unwrap();

        let result = assistant.search("apo dudu", Language::Yoruba);
        assert_eq!(result.intent, Intent::Bags);
        assert_eq!(result.understanding, "Mo ye pe o n wa apo awọ.");

        let sized = assistant.search("bata size 44", Language::Yoruba);
        assert_eq!(sized.understanding, "Bata iwọn 44.");

        let script = library.get_script(Persona::Buyer, Language::Yoruba);
        assert_eq!(script.len(), 2);
        assert_eq!(script.turns[1].language, Some(Language::Yoruba));

        assert_eq!(
            phrases.sample_queries(Language::Yoruba).to_vec(),
            vec!["Fi apo awọ han mi".to_string()]
        );
        assert_eq!(phrases.placeholder(Language::Yoruba), "Kini o n wa?");
    }

    #[test]
    fn test_partial_pack_keeps_english_fallback() {
        let packs = LanguagePacks::from_json_str(YORUBA_PACK).unwrap();
        let (mut assistant, mut library, mut phrases) = tables();
        packs.apply(&mut assistant, &mut library, &mut phrases).unwrap();

        // Suggestion was not overridden
        let english = assistant.search("leather bag", Language::English);
        let yoruba = assistant.search("leather bag", Language::Yoruba);
        assert_eq!(english.suggestion, yoruba.suggestion);
        assert!(!assistant.composer().has_translation(Intent::BulkWholesale, Language::Yoruba));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = LanguagePacks::from_json_str(r#"{ "klingon": {} }"#).unwrap_err();
        assert!(matches!(err, AssistantError::Config(msg) if msg.contains("klingon")));
    }

    #[test]
    fn test_broken_template_rejected() {
        let json = r#"{ "igbo": { "templates": { "bags": { "suggestion": "{{ size" } } } }"#;
        let err = LanguagePacks::from_json_str(json).unwrap_err();
        match err {
            AssistantError::Config(msg) => {
                assert!(msg.contains("igbo"));
                assert!(msg.contains("templates.bags.suggestion"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_size_outside_sized_template_rejected() {
        let json = r#"{ "igbo": { "templates": { "bags": { "understanding": "Akpa nọmba {{ size }}" } } } }"#;
        let err = LanguagePacks::from_json_str(json).unwrap_err();
        assert!(matches!(err, AssistantError::Config(msg) if msg.contains("templates.bags.understanding")));

        let json = r#"{ "igbo": { "templates": { "sized_item": { "suggestion": "Nọmba {{ size }} dị" } } } }"#;
        assert!(LanguagePacks::from_json_str(json).is_ok());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let json = r#"{ "hausa": { "keywords": { "bags": ["jaka", " "] } } }"#;
        let err = LanguagePacks::from_json_str(json).unwrap_err();
        assert!(matches!(err, AssistantError::Config(msg) if msg.contains("keywords.bags")));
    }

    #[test]
    fn test_fallback_intent_keywords_rejected() {
        let json = r#"{ "hausa": { "keywords": { "unknown": ["komai"] } } }"#;
        assert!(LanguagePacks::from_json_str(json).is_err());
    }

    #[test]
    fn test_empty_turn_rejected() {
        let json = r#"{ "pidgin": { "script_turns": { "trader": [
            { "speaker": "user", "message": "", "time": "10:30 AM" }
        ] } } }"#;
        let err = LanguagePacks::from_json_str(json).unwrap_err();
        assert!(matches!(err, AssistantError::Config(msg) if msg.contains("script_turns.trader[0]")));
    }

    #[test]
    fn test_unknown_persona_rejected() {
        let json = r#"{ "pidgin": { "script_turns": { "banker": [] } } }"#;
        assert!(LanguagePacks::from_json_str(json).is_err());
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let json = r#"{ "igbo": {}, "ig": {} }"#;
        assert!(LanguagePacks::from_json_str(json).is_err());
    }

    #[test]
    fn test_unknown_field_is_json_error() {
        let err = LanguagePacks::from_json_str(r#"{ "igbo": { "colour": "green" } }"#).unwrap_err();
        assert!(matches!(err, AssistantError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YORUBA_PACK.as_bytes()).unwrap();

        let packs = LanguagePacks::load(file.path()).unwrap();
        assert!(packs.get(Language::Yoruba).is_some());
        assert!(packs.get(Language::Hausa).is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = LanguagePacks::load("/nonexistent/packs.json").unwrap_err();
        assert!(matches!(err, AssistantError::File(_)));
    }
}
