//! Product card projection.

use vitrine_catalog::{discount_percentage, format_price, Currency, Product};
use vitrine_ui_graphics::{Color, Theme};

use crate::widgets::review::clamp_stars;

/// Presentation options for a product card.
#[derive(Clone, Debug, Default)]
pub struct ProductCardSpec {
    pub theme: Theme,
    pub currency: Option<Currency>,
    pub show_discount_badge: bool,
}

impl ProductCardSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn show_discount_badge(mut self, show: bool) -> Self {
        self.show_discount_badge = show;
        self
    }
}

/// Render model for one product card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCardModel {
    pub title: String,
    pub image: String,
    pub price_label: String,
    /// Strikethrough original price when the product is on sale.
    pub original_price_label: Option<String>,
    /// Zero means no badge.
    pub discount_percent: u32,
    pub stars_filled: u8,
    pub review_count: u32,
    pub price_color: Color,
    pub original_price_color: Color,
    pub badge_color: Color,
}

/// Project a catalog product into its card model.
pub fn product_card(product: &Product, spec: &ProductCardSpec) -> ProductCardModel {
    let currency = spec.currency.as_ref();
    let colors = &spec.theme.colors;

    let discount = product
        .original_price
        .map(|original| discount_percentage(original, product.price))
        .unwrap_or(0);
    let on_sale = discount > 0;

    ProductCardModel {
        title: product.name.clone(),
        image: product.image.clone(),
        price_label: format_price(Some(product.price), currency),
        original_price_label: if on_sale {
            product
                .original_price
                .map(|original| format_price(Some(original), currency))
        } else {
            None
        },
        discount_percent: if spec.show_discount_badge { discount } else { 0 },
        stars_filled: clamp_stars(product.rating),
        review_count: product.review_count,
        price_color: colors.price,
        original_price_color: colors.price_original,
        badge_color: colors.discount_badge,
    }
}
