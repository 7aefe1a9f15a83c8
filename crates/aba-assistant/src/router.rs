//! Ordered keyword router shared by every assistant call site
//!
//! A router holds an ordered list of rules. Each rule pairs an intent with a
//! matcher (a keyword set or a regex) and can capture a fragment of the query
//! for display substitution. The first matching rule wins; there is no
//! scoring across rules. When nothing matches the router's fallback intent is
//! returned.

use crate::error::{AssistantError, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// How a rule recognises a query
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-insensitive substring match against any keyword
    Keywords(Vec<String>),
    /// Regex over the lower-cased query; capture group 1 is kept when present
    Pattern(Regex),
}

impl Matcher {
    /// Build a keyword matcher, lower-casing every keyword
    pub fn keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        Matcher::Keywords(
            keywords
                .iter()
                .map(|kw| kw.as_ref().to_lowercase())
                .collect(),
        )
    }

    fn find(&self, query: &str) -> Option<Hit> {
        match self {
            Matcher::Keywords(keywords) => keywords
                .iter()
                .find(|kw| query.contains(kw.as_str()))
                .map(|kw| Hit {
                    trigger: kw.clone(),
                    capture: None,
                }),
            Matcher::Pattern(re) => re.captures(query).map(|caps| Hit {
                trigger: caps
                    .get(0)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                capture: caps.get(1).map(|m| m.as_str().to_string()),
            }),
        }
    }
}

struct Hit {
    trigger: String,
    capture: Option<String>,
}

/// One routing rule
#[derive(Debug, Clone)]
pub struct Rule<I> {
    intent: I,
    matcher: Matcher,
    capture: Option<Regex>,
}

impl<I> Rule<I> {
    /// Rule that fires when the query contains any of `keywords`
    pub fn keywords<S: AsRef<str>>(intent: I, keywords: &[S]) -> Self {
        Self {
            intent,
            matcher: Matcher::keywords(keywords),
            capture: None,
        }
    }

    /// Rule that fires when `pattern` matches the lower-cased query
    pub fn pattern(intent: I, pattern: &str) -> Result<Self> {
        Ok(Self {
            intent,
            matcher: Matcher::Pattern(compile(pattern)?),
            capture: None,
        })
    }

    /// Capture the first match of `pattern` whenever this rule fires
    ///
    /// Group 1 is kept when the pattern has one, otherwise the whole match.
    /// Only used when the matcher itself captured nothing.
    pub fn capturing(mut self, pattern: &str) -> Result<Self> {
        self.capture = Some(compile(pattern)?);
        Ok(self)
    }

    fn find(&self, query: &str) -> Option<Hit> {
        let mut hit = self.matcher.find(query)?;
        if hit.capture.is_none() {
            if let Some(re) = &self.capture {
                hit.capture = re
                    .captures(query)
                    .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
                    .map(|m| m.as_str().to_string());
            }
        }
        Some(hit)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| AssistantError::Config(format!("invalid pattern '{pattern}': {e}")))
}

/// Outcome of routing a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Routed<I> {
    /// The resolved intent
    pub intent: I,
    /// Keyword or pattern text that fired, `None` for the fallback
    pub trigger: Option<String>,
    /// Captured fragment, if the rule captures one
    pub capture: Option<String>,
}

/// First-match-wins keyword router
#[derive(Debug, Clone)]
pub struct KeywordRouter<I> {
    name: &'static str,
    rules: Vec<Rule<I>>,
    fallback: I,
}

impl<I: Copy + PartialEq + fmt::Debug> KeywordRouter<I> {
    /// Create an empty router; `name` only shows up in logs
    pub fn new(name: &'static str, fallback: I) -> Self {
        Self {
            name,
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule (lowest priority so far)
    pub fn rule(mut self, rule: Rule<I>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add keywords to the first keyword rule for `intent`
    ///
    /// The extra keywords keep that rule's priority. Returns `false` when the
    /// router has no keyword rule for the intent.
    pub fn extend_keywords<S: AsRef<str>>(&mut self, intent: I, extra: &[S]) -> bool {
        let target = self.rules.iter_mut().find(|rule| {
            rule.intent == intent && matches!(rule.matcher, Matcher::Keywords(_))
        });

        match target {
            Some(Rule {
                matcher: Matcher::Keywords(keywords),
                ..
            }) => {
                for kw in extra {
                    let kw = kw.as_ref().trim().to_lowercase();
                    if !kw.is_empty() && !keywords.contains(&kw) {
                        keywords.push(kw);
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// Route a query to an intent
    pub fn route(&self, query: &str) -> Routed<I> {
        let lowered = query.to_lowercase();

        for rule in &self.rules {
            if let Some(hit) = rule.find(&lowered) {
                tracing::debug!(
                    router = self.name,
                    intent = ?rule.intent,
                    trigger = %hit.trigger,
                    capture = ?hit.capture,
                    "Rule matched"
                );
                return Routed {
                    intent: rule.intent,
                    trigger: Some(hit.trigger),
                    capture: hit.capture,
                };
            }
        }

        tracing::debug!(router = self.name, intent = ?self.fallback, "No rule matched");
        Routed {
            intent: self.fallback,
            trigger: None,
            capture: None,
        }
    }
}
