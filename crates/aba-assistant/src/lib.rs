//! Multilingual demo assistant for the Aba digital marketplace
//!
//! The assistant answers shoppers in English, Igbo, Yoruba, Hausa and Nigerian
//! Pidgin. Nothing is generated: queries are routed by keyword rules to
//! authored answers, so every response is predictable and demo-safe.
//!
//! # Features
//!
//! - **Product search**: free text is classified into an [`Intent`] and answered
//!   with a localized [`SearchResult`] and a ranked product list
//! - **Analytics box**: dashboard questions are answered with canned insights
//! - **Scripted chat**: fixed trader/buyer conversations per language
//! - **Sessions**: a [`DemoSession`] adds the "thinking" delay with
//!   last-write-wins submissions
//! - **Language packs**: JSON overrides merged over the built-in tables
//!
//! Missing translations and scripts fall back to English instead of failing.
//!
//! # Quick Start
//!
//! ```
//! use aba_assistant::{Intent, Language, ShoppingAssistant};
//!
//! let assistant = ShoppingAssistant::builtin().unwrap();
//! let result = assistant.search("bulk palm slippers for my store", Language::Pidgin);
//!
//! assert_eq!(result.intent, Intent::BulkWholesale);
//! assert_eq!(result.best_match().unwrap().bulk_minimum, Some(50));
//! ```
//!
//! # Sessions
//!
//! ```
//! use aba_assistant::{Intent, Marketplace};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> aba_assistant::Result<()> {
//! let market = Marketplace::builtin()?;
//! let mut session = market.search_session();
//!
//! session.submit_query("leather bags")?;
//! session.submit_query("I need wedding shoes size 44")?; // replaces the first
//!
//! let result = session.settled().await.unwrap();
//! assert_eq!(result.intent, Intent::SizedItem);
//! assert_eq!(result.size.as_deref(), Some("44"));
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod chat;
pub mod config;
pub mod error;
pub mod language;
pub mod marketplace;
pub mod pack;
pub mod phrases;
pub mod router;
pub mod search;
pub mod session;
pub mod template;

pub use analytics::{AnalyticsDesk, Insight, Topic};
pub use chat::{ConversationScript, ConversationTurn, Persona, ScriptLibrary, Speaker};
pub use config::AssistantConfig;
pub use error::{AssistantError, Result};
pub use language::Language;
pub use marketplace::Marketplace;
pub use pack::LanguagePacks;
pub use phrases::PhraseBank;
pub use search::{Classification, Intent, IntentClassifier, ProductMatch, ResultComposer, SearchResult, ShoppingAssistant};
pub use session::{DemoSession, Phase, Query, Responder, SessionSnapshot};
