//! Externally supplied display records.

/// Catalog product as the API hands it over.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub image: String,
    /// Base-currency price before any conversion.
    pub price: f64,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<f64>,
    pub rating: f32,
    pub review_count: u32,
    pub brand_id: u64,
    pub category_id: u64,
}

/// Promotional banner slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub image: String,
    pub image_mobile: Option<String>,
    pub button_text_en: String,
    pub is_active: bool,
    pub sort_order: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductReview {
    pub id: u64,
    /// Star rating; widgets clamp to 0..=5 on display.
    pub rating: f32,
    pub review: String,
    /// Unix timestamp, seconds.
    pub created_at: u64,
}

/// Display-currency descriptor: symbol + conversion rate + ISO code.
#[derive(Clone, Debug, PartialEq)]
pub struct Currency {
    pub symbol: String,
    pub exchange_rate: f64,
    pub code: String,
}

impl Currency {
    pub fn new(symbol: &str, exchange_rate: f64, code: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            exchange_rate,
            code: code.to_string(),
        }
    }
}
