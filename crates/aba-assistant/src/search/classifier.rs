//! Product search intent classifier
//!
//! Rule order, first match wins:
//!
//! 1. an explicit size phrase (`size 43`) → [`Intent::SizedItem`]
//! 2. wedding tokens in any language → [`Intent::WeddingFootwear`]
//! 3. bag tokens → [`Intent::Bags`]
//! 4. bulk / wholesale / shop / store → [`Intent::BulkWholesale`]
//! 5. a bare size keyword or size token → [`Intent::SizedItem`]
//! 6. otherwise [`Intent::Unknown`]
//!
//! An explicit size phrase outranks wedding tokens, so "wedding shoes size 43"
//! is a sized search. A bare size token does not, so "wedding 43" stays a
//! wedding search.

use crate::error::{AssistantError, Result};
use crate::router::{KeywordRouter, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size used when a sized query names no digits
pub const DEFAULT_SIZE: &str = "43";

/// What a product search query is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Shoes for a wedding
    WeddingFootwear,
    /// Leather bags
    Bags,
    /// Bulk or wholesale orders
    BulkWholesale,
    /// Any item in a specific size
    SizedItem,
    /// Nothing recognised
    Unknown,
}

impl Intent {
    /// Every intent, in rule priority order
    pub const ALL: [Intent; 5] = [
        Intent::WeddingFootwear,
        Intent::Bags,
        Intent::BulkWholesale,
        Intent::SizedItem,
        Intent::Unknown,
    ];

    /// Stable snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Intent::WeddingFootwear => "wedding_footwear",
            Intent::Bags => "bags",
            Intent::BulkWholesale => "bulk_wholesale",
            Intent::SizedItem => "sized_item",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intent {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|intent| intent.name() == lower)
            .ok_or_else(|| AssistantError::UnknownIntent(s.to_string()))
    }
}

/// Keywords for intent classification (English, also used by Pidgin queries)
mod keywords_en {
    pub const WEDDING: &[&str] = &["wedding"];
    pub const BAGS: &[&str] = &["bag", "handbag"];
    pub const BULK: &[&str] = &["bulk", "wholesale", "shop", "store"];
    pub const SIZE: &[&str] = &["size"];
}

/// Keywords for intent classification (Igbo)
mod keywords_ig {
    pub const WEDDING: &[&str] = &["agbamakwụkwọ", "agbamakwukwo"];
    pub const BAGS: &[&str] = &["akpa"];
}

/// Keywords for intent classification (Yoruba)
mod keywords_yo {
    pub const WEDDING: &[&str] = &["igbeyawo", "ìgbéyàwó"];
}

/// Keywords for intent classification (Hausa)
mod keywords_ha {
    pub const WEDDING: &[&str] = &["bikin aure", "takalmin aure", "takalmi na aure"];
    pub const BAGS: &[&str] = &["jaka"];
}

/// Shoe sizes the catalog carries and recognises without the word "size"
const SIZE_TOKENS: &[&str] = &["42", "43", "44"];

/// "size" followed by exactly two digits; a unit may follow directly (`42eu`)
const EXPLICIT_SIZE: &str = r"\bsize\s*(\d{2})(?:\D|$)";

/// First run of exactly two digits, letters allowed on either side
const SIZE_DIGITS: &str = r"(?:^|\D)(\d{2})(?:\D|$)";

/// Result of classifying a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The resolved intent
    pub intent: Intent,
    /// Size digits captured from the query (sized searches only)
    pub size: Option<String>,
    /// Keyword or phrase that decided the intent
    pub trigger: Option<String>,
}

impl Classification {
    /// Captured size, or [`DEFAULT_SIZE`] for a sized search without digits
    pub fn size_or_default(&self) -> Option<&str> {
        match self.intent {
            Intent::SizedItem => Some(self.size.as_deref().unwrap_or(DEFAULT_SIZE)),
            _ => None,
        }
    }
}

/// Maps free-text product searches to an [`Intent`]
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    router: KeywordRouter<Intent>,
}

impl IntentClassifier {
    /// Create the classifier with the built-in keyword tables
    pub fn new() -> Result<Self> {
        let wedding: Vec<&str> = [
            keywords_en::WEDDING,
            keywords_ig::WEDDING,
            keywords_yo::WEDDING,
            keywords_ha::WEDDING,
        ]
        .concat();
        let bags: Vec<&str> = [keywords_en::BAGS, keywords_ig::BAGS, keywords_ha::BAGS].concat();
        let bare_size: Vec<&str> = [keywords_en::SIZE, SIZE_TOKENS].concat();

        let router = KeywordRouter::new("product-search", Intent::Unknown)
            .rule(Rule::pattern(Intent::SizedItem, EXPLICIT_SIZE)?)
            .rule(Rule::keywords(Intent::WeddingFootwear, wedding.as_slice()))
            .rule(Rule::keywords(Intent::Bags, bags.as_slice()))
            .rule(Rule::keywords(Intent::BulkWholesale, keywords_en::BULK))
            .rule(Rule::keywords(Intent::SizedItem, bare_size.as_slice()).capturing(SIZE_DIGITS)?);

        Ok(Self { router })
    }

    /// Classify a query
    pub fn classify(&self, query: &str) -> Intent {
        self.classify_detailed(query).intent
    }

    /// Classify a query, keeping the captured size and the trigger
    pub fn classify_detailed(&self, query: &str) -> Classification {
        let routed = self.router.route(query);
        let size = match routed.intent {
            Intent::SizedItem => routed.capture,
            _ => None,
        };

        Classification {
            intent: routed.intent,
            size,
            trigger: routed.trigger,
        }
    }

    /// Add keywords for an intent, keeping that intent's priority
    ///
    /// Returns `false` for [`Intent::Unknown`], which has no rule.
    pub fn extend_keywords<S: AsRef<str>>(&mut self, intent: Intent, extra: &[S]) -> bool {
        self.router.extend_keywords(intent, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new().unwrap()
    }

    #[test]
    fn test_wedding_in_every_language() {
        let c = classifier();

        assert_eq!(c.classify("I need wedding shoes"), Intent::WeddingFootwear);
        assert_eq!(
            c.classify("Achọrọ m akpụkpọ ụkwụ maka agbamakwụkwọ"),
            Intent::WeddingFootwear
        );
        assert_eq!(c.classify("Mo nílò bàtà fún ìgbéyàwó"), Intent::WeddingFootwear);
        assert_eq!(c.classify("bata fun IGBEYAWO"), Intent::WeddingFootwear);
        assert_eq!(c.classify("Ina bukatar takalmi na aure"), Intent::WeddingFootwear);
        assert_eq!(c.classify("I need shoe for wedding"), Intent::WeddingFootwear);
    }

    #[test]
    fn test_every_wedding_token_alone() {
        let c = classifier();
        for token in [
            "agbamakwụkwọ",
            "agbamakwukwo",
            "igbeyawo",
            "ìgbéyàwó",
            "bikin aure",
            "takalmin aure",
            "takalmi na aure",
        ] {
            let result = c.classify_detailed(&format!("shoes for {token}"));
            assert_eq!(result.intent, Intent::WeddingFootwear, "{token}");
            assert_eq!(result.trigger.as_deref(), Some(token), "{token}");
        }
    }

    #[test]
    fn test_explicit_size_beats_wedding() {
        let result = classifier().classify_detailed("I need wedding shoes size 43");
        assert_eq!(result.intent, Intent::SizedItem);
        assert_eq!(result.size.as_deref(), Some("43"));
        assert_eq!(result.trigger.as_deref(), Some("size 43"));
    }

    #[test]
    fn test_bare_size_token_does_not_beat_wedding() {
        assert_eq!(classifier().classify("wedding 43"), Intent::WeddingFootwear);
    }

    #[test]
    fn test_localized_sized_queries() {
        let c = classifier();
        for query in [
            "Akpụkpọ ụkwụ nwoke size 43",
            "Mo nilo bata fun igbeyawo size 43",
            "Ina bukatar takalmi na bikin aure size 43",
            "I wan buy wedding shoe size 43",
        ] {
            let result = c.classify_detailed(query);
            assert_eq!(result.intent, Intent::SizedItem, "{query}");
            assert_eq!(result.size.as_deref(), Some("43"), "{query}");
        }
    }

    #[test]
    fn test_bags() {
        let c = classifier();
        assert_eq!(c.classify("Show me leather bags under ₦20,000"), Intent::Bags);
        assert_eq!(c.classify("Gosi m akpa leather"), Intent::Bags);
        assert_eq!(c.classify("Nuna mini jaka na fata"), Intent::Bags);
        assert_eq!(c.classify("Ladies HANDBAG"), Intent::Bags);
    }

    #[test]
    fn test_bulk() {
        let c = classifier();
        assert_eq!(c.classify("bulk palm slippers for my store"), Intent::BulkWholesale);
        assert_eq!(c.classify("Bulk order 50 palm slippers"), Intent::BulkWholesale);
        assert_eq!(c.classify("I need bulk slippers for my shop"), Intent::BulkWholesale);
    }

    #[test]
    fn test_bare_size_captures_digits() {
        let c = classifier();

        let result = c.classify_detailed("Men's loafers in 44");
        assert_eq!(result.intent, Intent::SizedItem);
        assert_eq!(result.size.as_deref(), Some("44"));

        let result = c.classify_detailed("what size do you have?");
        assert_eq!(result.intent, Intent::SizedItem);
        assert_eq!(result.size, None);
        assert_eq!(result.size_or_default(), Some(DEFAULT_SIZE));
    }

    #[test]
    fn test_size_written_against_a_unit() {
        let c = classifier();

        let result = c.classify_detailed("loafers 42eu");
        assert_eq!(result.intent, Intent::SizedItem);
        assert_eq!(result.size.as_deref(), Some("42"));

        let result = c.classify_detailed("need 44cm sandals");
        assert_eq!(result.intent, Intent::SizedItem);
        assert_eq!(result.size.as_deref(), Some("44"));

        let result = c.classify_detailed("wedding shoes size 42EU");
        assert_eq!(result.intent, Intent::SizedItem);
        assert_eq!(result.size.as_deref(), Some("42"));
    }

    #[test]
    fn test_three_digit_size_is_not_explicit() {
        let result = classifier().classify_detailed("wedding size 435");
        assert_eq!(result.intent, Intent::WeddingFootwear);
        assert_eq!(result.size, None);
    }

    #[test]
    fn test_unknown() {
        let c = classifier();
        assert_eq!(c.classify("Office shoes for men, black"), Intent::Unknown);
        assert_eq!(c.classify("Akwa maka ọrụ"), Intent::Unknown);
        assert_eq!(classifier().classify_detailed("Riga na ofis").size_or_default(), None);
    }

    #[test]
    fn test_extend_keywords() {
        let mut c = classifier();
        assert_eq!(c.classify("agbada for ceremony"), Intent::Unknown);

        assert!(c.extend_keywords(Intent::WeddingFootwear, &["ceremony"]));
        assert!(!c.extend_keywords(Intent::Unknown, &["anything"]));

        assert_eq!(c.classify("agbada for ceremony"), Intent::WeddingFootwear);
        assert_eq!(c.classify("ceremony shoes size 42"), Intent::SizedItem);
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!("bulk_wholesale".parse::<Intent>().unwrap(), Intent::BulkWholesale);
        assert!("shoes".parse::<Intent>().is_err());
        assert_eq!(
            serde_json::to_string(&Intent::SizedItem).unwrap(),
            "\"sized_item\""
        );
    }
}
