//! Natural-language product search
//!
//! [`IntentClassifier`] decides what the shopper is after, [`ResultComposer`]
//! turns that into an authored answer, and [`ShoppingAssistant`] wires the two
//! together as a [`Responder`](crate::session::Responder).

pub(crate) mod catalog;
pub mod classifier;
pub mod composer;

pub use classifier::{Classification, DEFAULT_SIZE, Intent, IntentClassifier};
pub use composer::{ProductMatch, ResultComposer, SearchResult, format_naira};

use crate::error::Result;
use crate::language::Language;
use crate::session::{Query, Responder};
use tracing::debug;

/// Product search: classify, then compose
#[derive(Debug, Clone)]
pub struct ShoppingAssistant {
    classifier: IntentClassifier,
    composer: ResultComposer,
}

impl ShoppingAssistant {
    /// Assistant backed by the built-in keyword tables and catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(IntentClassifier::new()?, ResultComposer::new()?))
    }

    pub fn new(classifier: IntentClassifier, composer: ResultComposer) -> Self {
        Self {
            classifier,
            composer,
        }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut IntentClassifier {
        &mut self.classifier
    }

    pub fn composer(&self) -> &ResultComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ResultComposer {
        &mut self.composer
    }

    /// Answer a search query in `language`
    pub fn search(&self, query: &str, language: Language) -> SearchResult {
        let classification = self.classifier.classify_detailed(query);
        debug!(
            intent = %classification.intent,
            trigger = ?classification.trigger,
            size = ?classification.size,
            "Search classified"
        );
        self.composer.compose(
            classification.intent,
            language,
            classification.size.as_deref(),
        )
    }
}

impl Responder for ShoppingAssistant {
    type Output = SearchResult;

    fn name(&self) -> &'static str {
        "search"
    }

    fn respond(&self, query: &Query) -> SearchResult {
        self.search(&query.text, query.language)
    }
}
