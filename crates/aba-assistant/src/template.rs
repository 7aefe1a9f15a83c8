//! Localized MiniJinja templates with English fallback
//!
//! Every assistant sentence is a [`LocalizedTemplate`]: an English source plus
//! optional translations. Rendering in a language without a translation
//! silently uses the English source. Templates are parsed when they are
//! added, so rendering a validated template does not fail in practice.

use crate::error::{AssistantError, Result};
use crate::language::Language;
use minijinja::Environment;
use std::collections::{HashMap, HashSet};

/// Text produced by rendering a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered text
    pub text: String,
    /// Language whose source was used (English when the fallback fired)
    pub language: Language,
}

/// A template with an English source and optional translations
#[derive(Clone, PartialEq, Eq)]
pub struct LocalizedTemplate {
    name: String,
    english: String,
    translations: HashMap<Language, String>,
}

impl LocalizedTemplate {
    /// Create from an English source
    pub fn english(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        Self::builder(name, source).build()
    }

    /// Start a builder from the English source
    pub fn builder(name: impl Into<String>, english: impl Into<String>) -> LocalizedTemplateBuilder {
        LocalizedTemplateBuilder {
            name: name.into(),
            english: english.into(),
            translations: HashMap::new(),
        }
    }

    /// Whether a translation exists for `lang`
    pub fn has_translation(&self, lang: Language) -> bool {
        lang == Language::English || self.translations.contains_key(&lang)
    }

    /// Source text for `lang`, with the language actually used
    pub fn source(&self, lang: Language) -> (&str, Language) {
        match self.translations.get(&lang) {
            Some(text) => (text.as_str(), lang),
            None => (self.english.as_str(), Language::English),
        }
    }

    /// Add or replace a translation after validating it
    pub fn set_translation(&mut self, lang: Language, source: impl Into<String>) -> Result<()> {
        let source = source.into();
        validate_template(&self.name, lang, &source)?;
        if lang == Language::English {
            self.english = source;
        } else {
            self.translations.insert(lang, source);
        }
        Ok(())
    }

    /// Render in `lang`, falling back to English
    pub fn render(&self, lang: Language, vars: &serde_json::Value) -> Rendered {
        let (source, used) = self.source(lang);
        if used != lang {
            tracing::debug!(
                template = %self.name,
                requested = %lang,
                "No translation, using English template"
            );
        }

        let env = Environment::new();
        let value = minijinja::value::Value::from_serialize(vars);
        let text = env.render_str(source, value).unwrap_or_else(|e| {
            tracing::warn!(template = %self.name, error = %e, "Template render failed, using raw text");
            source.to_string()
        });

        Rendered {
            text,
            language: used,
        }
    }
}

impl std::fmt::Debug for LocalizedTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizedTemplate")
            .field("name", &self.name)
            .field("translations", &self.translations.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`LocalizedTemplate`]
pub struct LocalizedTemplateBuilder {
    name: String,
    english: String,
    translations: HashMap<Language, String>,
}

impl LocalizedTemplateBuilder {
    /// Add a translation
    pub fn translation(mut self, lang: Language, source: impl Into<String>) -> Self {
        if lang == Language::English {
            self.english = source.into();
        } else {
            self.translations.insert(lang, source.into());
        }
        self
    }

    /// Validate every source and build the template
    pub fn build(self) -> Result<LocalizedTemplate> {
        validate_template(&self.name, Language::English, &self.english)?;
        for (lang, source) in &self.translations {
            validate_template(&self.name, *lang, source)?;
        }

        Ok(LocalizedTemplate {
            name: self.name,
            english: self.english,
            translations: self.translations,
        })
    }
}

/// Check that `source` parses as a MiniJinja template
pub fn validate_template(name: &str, lang: Language, source: &str) -> Result<()> {
    let mut env = Environment::new();
    env.add_template("check", source)
        .map(|_| ())
        .map_err(|e| AssistantError::Template {
            name: format!("{name} ({})", lang.code()),
            detail: e.to_string(),
        })
}

/// Variables `source` reads that it does not define itself
pub fn template_variables(name: &str, lang: Language, source: &str) -> Result<HashSet<String>> {
    let env = Environment::new();
    let template = env
        .template_from_str(source)
        .map_err(|e| AssistantError::Template {
            name: format!("{name} ({})", lang.code()),
            detail: e.to_string(),
        })?;
    Ok(template.undeclared_variables(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_english() {
        let template = LocalizedTemplate::english("size", "Size {{ size }}").unwrap();
        let rendered = template.render(Language::English, &json!({ "size": "43" }));
        assert_eq!(rendered.text, "Size 43");
        assert_eq!(rendered.language, Language::English);
    }

    #[test]
    fn test_render_translation() {
        let template = LocalizedTemplate::builder("greet", "Welcome!")
            .translation(Language::Pidgin, "How far!")
            .build()
            .unwrap();

        let rendered = template.render(Language::Pidgin, &json!({}));
        assert_eq!(rendered.text, "How far!");
        assert_eq!(rendered.language, Language::Pidgin);
    }

    #[test]
    fn test_missing_translation_falls_back() {
        let template = LocalizedTemplate::builder("greet", "Welcome!")
            .translation(Language::Igbo, "Nnọọ!")
            .build()
            .unwrap();

        let rendered = template.render(Language::Hausa, &json!({}));
        assert_eq!(rendered.text, "Welcome!");
        assert_eq!(rendered.language, Language::English);
        assert!(!template.has_translation(Language::Hausa));
        assert!(template.has_translation(Language::English));
    }

    #[test]
    fn test_invalid_template_rejected() {
        let err = LocalizedTemplate::english("broken", "{{ size").unwrap_err();
        assert!(matches!(err, AssistantError::Template { .. }));

        let mut template = LocalizedTemplate::english("ok", "fine").unwrap();
        assert!(template.set_translation(Language::Yoruba, "{% if %}").is_err());
        assert!(!template.has_translation(Language::Yoruba));
    }

    #[test]
    fn test_template_variables() {
        let vars = template_variables("t", Language::Igbo, "Size {{ size }} for {{ who.name }}").unwrap();
        assert!(vars.contains("size"));
        assert!(vars.contains("who"));
        assert!(template_variables("t", Language::Igbo, "Nnọọ").unwrap().is_empty());
        assert!(template_variables("t", Language::Igbo, "{{ size").is_err());
    }

    #[test]
    fn test_set_translation() {
        let mut template = LocalizedTemplate::english("t", "Hello").unwrap();
        template.set_translation(Language::Hausa, "Sannu").unwrap();
        assert_eq!(template.render(Language::Hausa, &json!({})).text, "Sannu");
    }
}
