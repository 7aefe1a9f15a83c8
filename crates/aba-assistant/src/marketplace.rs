//! Everything a demo screen needs, built from one [`AssistantConfig`]

use crate::analytics::AnalyticsDesk;
use crate::chat::ScriptLibrary;
use crate::config::AssistantConfig;
use crate::error::Result;
use crate::pack::LanguagePacks;
use crate::phrases::PhraseBank;
use crate::search::ShoppingAssistant;
use crate::session::DemoSession;
use std::sync::Arc;
use tracing::info;

/// Responders and tables for the marketplace demo
#[derive(Debug, Clone)]
pub struct Marketplace {
    config: AssistantConfig,
    search: Arc<ShoppingAssistant>,
    analytics: Arc<AnalyticsDesk>,
    scripts: ScriptLibrary,
    phrases: PhraseBank,
}

impl Marketplace {
    /// Build with default configuration and no language pack
    pub fn builtin() -> Result<Self> {
        Self::from_config(AssistantConfig::default())
    }

    /// Build from configuration, merging the configured language pack
    pub fn from_config(config: AssistantConfig) -> Result<Self> {
        config.validate()?;

        let mut search = ShoppingAssistant::builtin()?;
        let mut scripts = ScriptLibrary::builtin();
        let mut phrases = PhraseBank::builtin();

        if let Some(path) = &config.language_pack_path {
            let packs = LanguagePacks::load(path)?;
            packs.apply(&mut search, &mut scripts, &mut phrases)?;
        }

        info!(
            search_delay_ms = config.search_delay.as_millis(),
            analytics_delay_ms = config.analytics_delay.as_millis(),
            language = %config.default_language.code(),
            "Marketplace assistant ready"
        );

        Ok(Self {
            config,
            search: Arc::new(search),
            analytics: Arc::new(AnalyticsDesk::new()),
            scripts,
            phrases,
        })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn search(&self) -> &ShoppingAssistant {
        &self.search
    }

    pub fn analytics(&self) -> &AnalyticsDesk {
        &self.analytics
    }

    pub fn scripts(&self) -> &ScriptLibrary {
        &self.scripts
    }

    pub fn phrases(&self) -> &PhraseBank {
        &self.phrases
    }

    /// Session for the product search screen
    pub fn search_session(&self) -> DemoSession<ShoppingAssistant> {
        DemoSession::new(
            Arc::clone(&self.search),
            self.config.search_delay,
            self.config.default_language,
        )
    }

    /// Session for the dashboard's analytics box
    pub fn analytics_session(&self) -> DemoSession<AnalyticsDesk> {
        DemoSession::new(
            Arc::clone(&self.analytics),
            self.config.analytics_delay,
            self.config.default_language,
        )
    }

    /// Session for the chat demo, starting in the chat language
    pub fn chat_session(&self) -> DemoSession<ShoppingAssistant> {
        DemoSession::new(
            Arc::clone(&self.search),
            self.config.search_delay,
            self.config.chat_default_language,
        )
    }
}
