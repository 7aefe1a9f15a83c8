//! "Ask AI" box of the governor's dashboard
//!
//! Questions are routed by keyword to one of four canned insights.

use crate::router::{KeywordRouter, Rule};
use crate::session::{Query, Responder};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What an analytics question is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Revenue,
    Traders,
    Products,
    /// Anything else
    Overview,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Revenue => "revenue",
            Topic::Traders => "traders",
            Topic::Products => "products",
            Topic::Overview => "overview",
        };
        f.write_str(name)
    }
}

mod keywords {
    pub const REVENUE: &[&str] = &["revenue", "money", "income"];
    pub const TRADERS: &[&str] = &["trader", "seller", "vendor"];
    pub const PRODUCTS: &[&str] = &["product", "item", "sell"];
}

/// Answer shown under the analytics box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub topic: Topic,
    pub title: String,
    pub content: String,
}

impl Insight {
    fn authored(topic: Topic) -> Self {
        let (title, content) = match topic {
            Topic::Revenue => (
                "Revenue Analysis",
                "Total platform revenue this month: ₦18.4M. Breakdown: Transaction fees (₦12.1M), \
                 Registration fees (₦4.2M), Premium listings (₦2.1M). Revenue is up 23% from last month.",
            ),
            Topic::Traders => (
                "Trader Statistics",
                "Currently 2,847 verified traders on the platform. 156 new registrations this week. \
                 Top performing zone: A-Line (68% of traders). Verification rate: 94%.",
            ),
            Topic::Products => (
                "Product Insights",
                "Top 3 categories: Footwear (45%), Bags (28%), Fashion (27%). Most searched: \
                 \"wedding shoes\", \"leather bag\", \"palm slippers\". Average price point: ₦12,500.",
            ),
            Topic::Overview => (
                "Market Overview",
                "The Aba Digital Marketplace has 2,847 traders with 12,450 active listings. \
                 Weekly transaction volume: ₦156M. Customer satisfaction: 4.7/5. Platform uptime: 99.8%.",
            ),
        };

        Self {
            topic,
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

/// Routes dashboard questions to insights
#[derive(Debug, Clone)]
pub struct AnalyticsDesk {
    router: KeywordRouter<Topic>,
}

impl Default for AnalyticsDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsDesk {
    pub fn new() -> Self {
        let router = KeywordRouter::new("analytics", Topic::Overview)
            .rule(Rule::keywords(Topic::Revenue, keywords::REVENUE))
            .rule(Rule::keywords(Topic::Traders, keywords::TRADERS))
            .rule(Rule::keywords(Topic::Products, keywords::PRODUCTS));
        Self { router }
    }

    pub fn topic(&self, question: &str) -> Topic {
        self.router.route(question).intent
    }

    /// Answer a question
    pub fn ask(&self, question: &str) -> Insight {
        let topic = self.topic(question);
        debug!(topic = %topic, "Analytics question routed");
        Insight::authored(topic)
    }
}

impl Responder for AnalyticsDesk {
    type Output = Insight;

    fn name(&self) -> &'static str {
        "analytics"
    }

    fn respond(&self, query: &Query) -> Insight {
        self.ask(&query.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::phrases::PhraseBank;
    use crate::session::DemoSession;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_routing() {
        let desk = AnalyticsDesk::new();
        assert_eq!(desk.topic("Total revenue this month?"), Topic::Revenue);
        assert_eq!(desk.topic("How many new traders?"), Topic::Traders);
        assert_eq!(desk.topic("Top selling products?"), Topic::Products);
        assert_eq!(desk.topic("Show market activity"), Topic::Overview);
    }

    #[test]
    fn test_revenue_outranks_sellers() {
        let desk = AnalyticsDesk::new();
        assert_eq!(desk.topic("Income per seller"), Topic::Revenue);
        assert_eq!(desk.topic("Best SELLER this week"), Topic::Traders);
    }

    #[test]
    fn test_sample_questions_cover_every_topic() {
        let desk = AnalyticsDesk::new();
        let topics: Vec<Topic> = PhraseBank::builtin()
            .analytics_questions()
            .iter()
            .map(|q| desk.topic(q))
            .collect();
        assert_eq!(
            topics,
            vec![Topic::Revenue, Topic::Traders, Topic::Products, Topic::Overview]
        );
    }

    #[test]
    fn test_insight_text() {
        let desk = AnalyticsDesk::new();
        let insight = desk.ask("revenue");
        assert_eq!(insight.title, "Revenue Analysis");
        assert!(insight.content.starts_with("Total platform revenue this month: ₦18.4M."));
        assert!(insight.content.contains("Transaction fees (₦12.1M), Registration fees"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_desk_in_session() {
        let desk = Arc::new(AnalyticsDesk::new());
        let mut session = DemoSession::new(desk, Duration::from_millis(1000), Language::English);
        session.submit_query("How many new traders?").unwrap();
        assert!(session.is_processing());

        let insight = session.settled().await.unwrap();
        assert_eq!(insight.topic, Topic::Traders);
        assert_eq!(insight.title, "Trader Statistics");
    }
}
