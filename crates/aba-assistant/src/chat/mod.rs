//! Scripted conversation demo
//!
//! Two personas (a trader listing a product, a buyer shopping for wedding
//! shoes) each have a fixed WhatsApp-style exchange per language. Playback is
//! a lookup: nothing is generated and the same script always comes back in the
//! same order. A pair without an authored script is served the English one.

mod scripts;

use crate::error::AssistantError;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Who the demo conversation is played for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Trader listing a product over chat
    Trader,
    /// Buyer shopping conversationally
    Buyer,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Trader, Persona::Buyer];

    pub fn code(self) -> &'static str {
        match self {
            Persona::Trader => "trader",
            Persona::Buyer => "buyer",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Persona {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trader" | "seller" => Ok(Persona::Trader),
            "buyer" | "customer" => Ok(Persona::Buyer),
            _ => Err(AssistantError::UnknownPersona(s.to_string())),
        }
    }
}

/// Side of the conversation a turn belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single chat bubble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub message: String,
    /// Display time, e.g. `10:30 AM`
    pub time: String,
    /// Language the assistant answered in (assistant turns only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl ConversationTurn {
    /// A user turn
    pub fn user(message: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            message: message.into(),
            time: time.into(),
            language: None,
        }
    }

    /// An assistant turn answered in `language`
    pub fn assistant(message: impl Into<String>, time: impl Into<String>, language: Language) -> Self {
        Self {
            speaker: Speaker::Assistant,
            message: message.into(),
            time: time.into(),
            language: Some(language),
        }
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}

/// The conversation served for a (persona, language) request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationScript {
    pub persona: Persona,
    /// Language the caller asked for
    pub requested: Language,
    /// Language of the script actually served
    pub served: Language,
    pub turns: Vec<ConversationTurn>,
}

impl ConversationScript {
    /// Whether the English script stood in for a missing one
    pub fn is_fallback(&self) -> bool {
        self.requested != self.served
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Turns in playback order
    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }
}

/// Lookup table of authored conversations
#[derive(Debug, Clone)]
pub struct ScriptLibrary {
    scripts: HashMap<(Persona, Language), Vec<ConversationTurn>>,
}

impl Default for ScriptLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ScriptLibrary {
    /// The ten authored demo conversations
    pub fn builtin() -> Self {
        let scripts = scripts::authored()
            .into_iter()
            .map(|(persona, language, turns)| {
                let turns = turns
                    .iter()
                    .map(|&(speaker, message, time)| match speaker {
                        Speaker::User => ConversationTurn::user(message, time),
                        Speaker::Assistant => ConversationTurn::assistant(message, time, language),
                    })
                    .collect();
                ((persona, language), turns)
            })
            .collect();

        Self { scripts }
    }

    /// An empty library (every lookup yields an empty script)
    pub fn empty() -> Self {
        Self {
            scripts: HashMap::new(),
        }
    }

    /// Whether a script is authored for exactly this pair
    pub fn contains(&self, persona: Persona, language: Language) -> bool {
        self.scripts.contains_key(&(persona, language))
    }

    /// Script for a persona and language, falling back to English
    pub fn get_script(&self, persona: Persona, language: Language) -> ConversationScript {
        let (served, turns) = match self.scripts.get(&(persona, language)) {
            Some(turns) => (language, turns.clone()),
            None => {
                debug!(
                    persona = %persona,
                    language = %language.code(),
                    "No script for language, using English"
                );
                let turns = self
                    .scripts
                    .get(&(persona, Language::English))
                    .cloned()
                    .unwrap_or_default();
                (Language::English, turns)
            }
        };

        ConversationScript {
            persona,
            requested: language,
            served,
            turns,
        }
    }

    /// Add or replace the script for a pair
    ///
    /// Assistant turns without a language are tagged with `language`.
    /// Turns with blank text are rejected.
    pub fn set_script(&mut self, persona: Persona, language: Language, turns: Vec<ConversationTurn>) -> crate::Result<()> {
        if let Some(idx) = turns.iter().position(|t| t.message.trim().is_empty()) {
            return Err(AssistantError::Config(format!(
                "{} script for {persona} has an empty turn at index {idx}",
                language.code()
            )));
        }

        let turns = turns
            .into_iter()
            .map(|mut turn| {
                if turn.speaker == Speaker::Assistant && turn.language.is_none() {
                    turn.language = Some(language);
                }
                turn
            })
            .collect();

        self.scripts.insert((persona, language), turns);
        Ok(())
    }
}
