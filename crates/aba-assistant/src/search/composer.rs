//! Result composer: turns an intent into a localized search result

use super::catalog::{self, AuthoredProduct, AuthoredResponse};
use super::classifier::{DEFAULT_SIZE, Intent};
use crate::error::{AssistantError, Result};
use crate::language::Language;
use crate::template::LocalizedTemplate;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A product suggested for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMatch {
    pub name: String,
    /// Price in whole naira
    pub price: u32,
    pub seller: String,
    pub rating: f32,
    pub reviews: u32,
    /// Emoji category tag
    pub icon: String,
    /// Authored match confidence, 0-100
    pub confidence: u8,
    /// Minimum order quantity in pairs, for wholesale listings
    pub bulk_minimum: Option<u32>,
    pub in_stock: bool,
}

impl ProductMatch {
    /// Price formatted as naira, e.g. `₦24,500`
    pub fn price_label(&self) -> String {
        format_naira(self.price)
    }

    /// `98% Match`
    pub fn confidence_label(&self) -> String {
        format!("{}% Match", self.confidence)
    }

    /// `Min: 50 pairs` for wholesale listings
    pub fn bulk_label(&self) -> Option<String> {
        self.bulk_minimum.map(|min| format!("Min: {min} pairs"))
    }
}

/// Format an amount with thousands separators and the naira sign
pub fn format_naira(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    out.push('₦');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The assistant's answer to a product search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub intent: Intent,
    /// Language the result was requested in
    pub language: Language,
    /// Size substituted into the result (sized searches only)
    pub size: Option<String>,
    /// Restatement of what the assistant understood
    pub understanding: String,
    /// Follow-up suggestion
    pub suggestion: String,
    /// Matches in rank order; the first is the best match
    pub matches: Vec<ProductMatch>,
}

impl SearchResult {
    /// The top-ranked match
    pub fn best_match(&self) -> Option<&ProductMatch> {
        self.matches.first()
    }
}

#[derive(Debug, Clone)]
struct ProductTemplate {
    name: LocalizedTemplate,
    price: u32,
    seller: &'static str,
    rating: f32,
    reviews: u32,
    icon: &'static str,
    confidence: u8,
    bulk_minimum: Option<u32>,
    in_stock: bool,
}

#[derive(Debug, Clone)]
struct ResponseTemplate {
    understanding: LocalizedTemplate,
    suggestion: LocalizedTemplate,
    products: Vec<ProductTemplate>,
}

/// Builds [`SearchResult`]s from the authored catalog
#[derive(Debug, Clone)]
pub struct ResultComposer {
    wedding: ResponseTemplate,
    bags: ResponseTemplate,
    bulk: ResponseTemplate,
    sized: ResponseTemplate,
    fallback: ResponseTemplate,
}

impl ResultComposer {
    /// Create the composer from the built-in catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            wedding: load(Intent::WeddingFootwear)?,
            bags: load(Intent::Bags)?,
            bulk: load(Intent::BulkWholesale)?,
            sized: load(Intent::SizedItem)?,
            fallback: load(Intent::Unknown)?,
        })
    }

    fn template(&self, intent: Intent) -> &ResponseTemplate {
        match intent {
            Intent::WeddingFootwear => &self.wedding,
            Intent::Bags => &self.bags,
            Intent::BulkWholesale => &self.bulk,
            Intent::SizedItem => &self.sized,
            Intent::Unknown => &self.fallback,
        }
    }

    fn template_mut(&mut self, intent: Intent) -> &mut ResponseTemplate {
        match intent {
            Intent::WeddingFootwear => &mut self.wedding,
            Intent::Bags => &mut self.bags,
            Intent::BulkWholesale => &mut self.bulk,
            Intent::SizedItem => &mut self.sized,
            Intent::Unknown => &mut self.fallback,
        }
    }

    /// Compose the result for an intent
    ///
    /// `size` only matters for [`Intent::SizedItem`]; it defaults to
    /// [`DEFAULT_SIZE`].
    pub fn compose(&self, intent: Intent, language: Language, size: Option<&str>) -> SearchResult {
        let template = self.template(intent);
        let size = match intent {
            Intent::SizedItem => Some(size.unwrap_or(DEFAULT_SIZE).to_string()),
            _ => None,
        };
        let vars = match &size {
            Some(size) => json!({ "size": size }),
            None => json!({}),
        };

        let understanding = template.understanding.render(language, &vars).text;
        let suggestion = template.suggestion.render(language, &vars).text;
        let matches = template
            .products
            .iter()
            .map(|p| ProductMatch {
                name: p.name.render(Language::English, &vars).text,
                price: p.price,
                seller: p.seller.to_string(),
                rating: p.rating,
                reviews: p.reviews,
                icon: p.icon.to_string(),
                confidence: p.confidence,
                bulk_minimum: p.bulk_minimum,
                in_stock: p.in_stock,
            })
            .collect();

        SearchResult {
            intent,
            language,
            size,
            understanding,
            suggestion,
            matches,
        }
    }

    /// Whether the understanding sentence is translated for `language`
    pub fn has_translation(&self, intent: Intent, language: Language) -> bool {
        self.template(intent).understanding.has_translation(language)
    }

    /// Add or replace the understanding sentence for a language
    pub fn set_understanding(&mut self, intent: Intent, language: Language, source: &str) -> Result<()> {
        self.template_mut(intent)
            .understanding
            .set_translation(language, source)
    }

    /// Add or replace the suggestion sentence for a language
    pub fn set_suggestion(&mut self, intent: Intent, language: Language, source: &str) -> Result<()> {
        self.template_mut(intent)
            .suggestion
            .set_translation(language, source)
    }
}

fn load(intent: Intent) -> Result<ResponseTemplate> {
    let authored: &AuthoredResponse = catalog::authored(intent);
    Ok(ResponseTemplate {
        understanding: localized(&format!("{intent}.understanding"), authored.understanding)?,
        suggestion: localized(&format!("{intent}.suggestion"), authored.suggestion)?,
        products: authored
            .products
            .iter()
            .enumerate()
            .map(|(rank, p)| product(intent, rank, p))
            .collect::<Result<_>>()?,
    })
}

fn localized(name: &str, sources: &[(Language, &str)]) -> Result<LocalizedTemplate> {
    let english = sources
        .iter()
        .find(|(lang, _)| *lang == Language::English)
        .map(|(_, text)| *text)
        .ok_or_else(|| AssistantError::Config(format!("template '{name}' has no English source")))?;

    sources
        .iter()
        .filter(|(lang, _)| *lang != Language::English)
        .fold(LocalizedTemplate::builder(name, english), |builder, (lang, text)| {
            builder.translation(*lang, *text)
        })
        .build()
}

fn product(intent: Intent, rank: usize, p: &AuthoredProduct) -> Result<ProductTemplate> {
    Ok(ProductTemplate {
        name: LocalizedTemplate::english(format!("{intent}.product.{rank}"), p.name)?,
        price: p.price,
        seller: p.seller,
        rating: p.rating,
        reviews: p.reviews,
        icon: p.icon,
        confidence: p.confidence,
        bulk_minimum: p.bulk_minimum,
        in_stock: p.in_stock,
    })
}
