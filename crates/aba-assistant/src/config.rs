//! Configuration for the marketplace assistant

use crate::error::{AssistantError, Result};
use crate::language::Language;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest "thinking" delay accepted
pub const MAX_DELAY: Duration = Duration::from_secs(10);

const ENV_SEARCH_DELAY: &str = "ABA_SEARCH_DELAY_MS";
const ENV_ANALYTICS_DELAY: &str = "ABA_ANALYTICS_DELAY_MS";
const ENV_LANGUAGE: &str = "ABA_LANGUAGE";
const ENV_LANGUAGE_PACK: &str = "ABA_LANGUAGE_PACK";

/// Configuration for the demo assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Delay before a product search answers
    pub search_delay: Duration,

    /// Delay before an analytics question answers
    pub analytics_delay: Duration,

    /// Language the search box starts in
    pub default_language: Language,

    /// Language the chat demo starts in
    pub chat_default_language: Language,

    /// Optional language pack merged over the built-in tables
    pub language_pack_path: Option<PathBuf>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(1200),
            analytics_delay: Duration::from_millis(1000),
            default_language: Language::English,
            chat_default_language: Language::Igbo,
            language_pack_path: None,
        }
    }
}

/// On-disk form, every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    search_delay_ms: Option<u64>,
    analytics_delay_ms: Option<u64>,
    default_language: Option<Language>,
    chat_default_language: Option<Language>,
    language_pack: Option<PathBuf>,
}

impl AssistantConfig {
    /// Create a new configuration builder
    pub fn builder() -> AssistantConfigBuilder {
        AssistantConfigBuilder::default()
    }

    /// Load a JSON config file; omitted fields keep their defaults
    ///
    /// A relative `language_pack` path is resolved against the file's
    /// directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file: ConfigFile = aba_utils::read_json_file(path)?;

        let mut builder = Self::builder();
        if let Some(ms) = file.search_delay_ms {
            builder = builder.search_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = file.analytics_delay_ms {
            builder = builder.analytics_delay(Duration::from_millis(ms));
        }
        if let Some(lang) = file.default_language {
            builder = builder.default_language(lang);
        }
        if let Some(lang) = file.chat_default_language {
            builder = builder.chat_default_language(lang);
        }
        if let Some(pack) = file.language_pack {
            let pack = match path.parent() {
                Some(dir) if pack.is_relative() => dir.join(pack),
                _ => pack,
            };
            builder = builder.language_pack_path(pack);
        }
        builder.build()
    }

    /// Apply `ABA_*` environment overrides
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `ABA_*` overrides read through `lookup`
    ///
    /// Unparsable values are logged and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(ms) = aba_utils::parse_var::<u64>(ENV_SEARCH_DELAY, &lookup) {
            self.search_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = aba_utils::parse_var::<u64>(ENV_ANALYTICS_DELAY, &lookup) {
            self.analytics_delay = Duration::from_millis(ms);
        }
        if let Some(lang) = aba_utils::parse_var::<Language>(ENV_LANGUAGE, &lookup) {
            self.default_language = lang;
        }
        if let Some(path) = aba_utils::parse_var::<PathBuf>(ENV_LANGUAGE_PACK, &lookup) {
            self.language_pack_path = Some(path);
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.search_delay > MAX_DELAY {
            return Err(AssistantError::Config(format!(
                "search_delay must not exceed {}s",
                MAX_DELAY.as_secs()
            )));
        }

        if self.analytics_delay > MAX_DELAY {
            return Err(AssistantError::Config(format!(
                "analytics_delay must not exceed {}s",
                MAX_DELAY.as_secs()
            )));
        }

        if self
            .language_pack_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(AssistantError::Config(
                "language_pack_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AssistantConfig
#[derive(Debug, Default)]
pub struct AssistantConfigBuilder {
    search_delay: Option<Duration>,
    analytics_delay: Option<Duration>,
    default_language: Option<Language>,
    chat_default_language: Option<Language>,
    language_pack_path: Option<PathBuf>,
}

impl AssistantConfigBuilder {
    /// Set the product search delay
    pub fn search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = Some(delay);
        self
    }

    /// Set the analytics delay
    pub fn analytics_delay(mut self, delay: Duration) -> Self {
        self.analytics_delay = Some(delay);
        self
    }

    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = Some(language);
        self
    }

    pub fn chat_default_language(mut self, language: Language) -> Self {
        self.chat_default_language = Some(language);
        self
    }

    /// Set the language pack to merge at startup
    pub fn language_pack_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.language_pack_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AssistantConfig> {
        let defaults = AssistantConfig::default();

        let config = AssistantConfig {
            search_delay: self.search_delay.unwrap_or(defaults.search_delay),
            analytics_delay: self.analytics_delay.unwrap_or(defaults.analytics_delay),
            default_language: self.default_language.unwrap_or(defaults.default_language),
            chat_default_language: self
                .chat_default_language
                .unwrap_or(defaults.chat_default_language),
            language_pack_path: self.language_pack_path,
        };

        config.validate()?;
        Ok(config)
    }
}
