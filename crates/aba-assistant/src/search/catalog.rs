//! Authored response catalog for product search
//!
//! One entry per intent: the understanding and suggestion sentences (English
//! first, then whatever translations were authored) and three product
//! matches in rank order. `{{ size }}` is substituted for sized searches.

use super::classifier::Intent;
use crate::language::Language;

pub(crate) struct AuthoredProduct {
    pub name: &'static str,
    pub price: u32,
    pub seller: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub icon: &'static str,
    pub confidence: u8,
    pub bulk_minimum: Option<u32>,
    pub in_stock: bool,
}

pub(crate) struct AuthoredResponse {
    pub understanding: &'static [(Language, &'static str)],
    pub suggestion: &'static [(Language, &'static str)],
    pub products: &'static [AuthoredProduct],
}

const fn product(
    name: &'static str,
    price: u32,
    seller: &'static str,
    rating: f32,
    reviews: u32,
    icon: &'static str,
    confidence: u8,
) -> AuthoredProduct {
    AuthoredProduct {
        name,
        price,
        seller,
        rating,
        reviews,
        icon,
        confidence,
        bulk_minimum: None,
        in_stock: false,
    }
}

const fn bulk(mut p: AuthoredProduct, minimum: u32) -> AuthoredProduct {
    p.bulk_minimum = Some(minimum);
    p
}

const fn stocked(mut p: AuthoredProduct) -> AuthoredProduct {
    p.in_stock = true;
    p
}

static WEDDING: AuthoredResponse = AuthoredResponse {
    understanding: &[
        (Language::English, "I understand you're looking for wedding footwear..."),
        (Language::Igbo, "Achọpụtara m na ị chọrọ akpụkpọ ụkwụ maka agbamakwụkwọ..."),
        (Language::Pidgin, "I understand say you dey find shoe for wedding..."),
    ],
    suggestion: &[(
        Language::English,
        "For weddings, I recommend our Executive Oxford - it's our best seller for special occasions. Sizes 39-46 available.",
    )],
    products: &[
        product("Executive Wedding Oxford", 24_500, "Okechukwu Footwear", 5.0, 89, "👞", 98),
        product("Classic Formal Derby", 22_000, "Chisom Leather Works", 4.9, 156, "👞", 95),
        product("Premium Wedding Loafers", 18_000, "Mama Ada Shoes", 4.8, 67, "👞", 92),
    ],
};

static BAGS: AuthoredResponse = AuthoredResponse {
    understanding: &[(Language::English, "I found leather bags matching your request...")],
    suggestion: &[(
        Language::English,
        "All our bags are genuine leather, handcrafted in Aba. Would you like to see more options or filter by price?",
    )],
    products: &[
        product("Executive Leather Bag", 25_000, "Chisom Leather Works", 5.0, 234, "💼", 97),
        product("Ladies Designer Handbag", 15_000, "Chisom Leather Works", 4.9, 178, "👜", 94),
        product("Travel Duffle Bag", 32_000, "Okechukwu Footwear", 4.7, 45, "🧳", 89),
    ],
};

static BULK: AuthoredResponse = AuthoredResponse {
    understanding: &[(Language::English, "I see you're interested in bulk/wholesale orders...")],
    suggestion: &[(
        Language::English,
        "For bulk orders, you get 15-25% discount. I can connect you directly with verified wholesalers. What quantity do you need?",
    )],
    products: &[
        bulk(product("Palm Slippers (Wholesale)", 2_500, "Okechukwu Footwear", 4.8, 312, "🩴", 99), 50),
        bulk(product("Rubber Sandals (Bulk)", 1_800, "Mama Ada Shoes", 4.6, 189, "👡", 96), 100),
        bulk(product("School Shoes (Wholesale)", 4_500, "Chisom Leather Works", 4.9, 567, "👞", 94), 30),
    ],
};

static SIZED: AuthoredResponse = AuthoredResponse {
    understanding: &[(Language::English, "Looking for products in size {{ size }}...")],
    suggestion: &[(
        Language::English,
        "Great news! Size {{ size }} is available from multiple sellers. All items ship within 24-48 hours.",
    )],
    products: &[
        stocked(product("Men's Loafers (Size {{ size }})", 12_500, "Okechukwu Footwear", 4.8, 156, "👞", 100)),
        stocked(product("Oxford Shoes (Size {{ size }})", 18_000, "Chisom Leather Works", 5.0, 234, "👔", 100)),
        stocked(product("Palm Slippers (Size {{ size }})", 2_500, "Mama Ada Shoes", 4.5, 89, "🩴", 100)),
    ],
};

static FALLBACK: AuthoredResponse = AuthoredResponse {
    understanding: &[(Language::English, "Let me find products for you...")],
    suggestion: &[(
        Language::English,
        "Try being more specific! For example: 'I need black wedding shoes size 43' or 'bulk palm slippers for my store'",
    )],
    products: &[
        product("Men's Leather Loafers", 12_500, "Okechukwu Footwear", 4.8, 156, "👞", 85),
        product("Executive Bag", 25_000, "Chisom Leather Works", 5.0, 234, "💼", 82),
        product("Ladies Sandals", 4_500, "Mama Ada Shoes", 4.5, 89, "👡", 80),
    ],
};

pub(crate) fn authored(intent: Intent) -> &'static AuthoredResponse {
    match intent {
        Intent::WeddingFootwear => &WEDDING,
        Intent::Bags => &BAGS,
        Intent::BulkWholesale => &BULK,
        Intent::SizedItem => &SIZED,
        Intent::Unknown => &FALLBACK,
    }
}
