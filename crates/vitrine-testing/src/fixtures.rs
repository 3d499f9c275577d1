//! Catalog fixtures shared by widget tests and the demo.

use vitrine_catalog::{Banner, Currency, Product, ProductReview};

pub fn sample_product(id: u64) -> Product {
    Product {
        id,
        name: format!("Court Sneaker {id}"),
        image: format!("https://cdn.example/products/{id}.webp"),
        price: 59.0 + id as f64,
        original_price: None,
        rating: 4.2,
        review_count: 31,
        brand_id: 3,
        category_id: 12,
    }
}

pub fn discounted_product(id: u64, original: f64, price: f64) -> Product {
    Product {
        price,
        original_price: Some(original),
        ..sample_product(id)
    }
}

pub fn sample_products(count: usize) -> Vec<Product> {
    (1..=count as u64).map(sample_product).collect()
}

pub fn sample_banners() -> Vec<Banner> {
    vec![
        Banner {
            image: "https://cdn.example/banners/summer.webp".into(),
            image_mobile: Some("https://cdn.example/banners/summer-m.webp".into()),
            button_text_en: "Summer picks".into(),
            is_active: true,
            sort_order: 2,
        },
        Banner {
            image: "https://cdn.example/banners/archived.webp".into(),
            image_mobile: None,
            button_text_en: "Old promo".into(),
            is_active: false,
            sort_order: 0,
        },
        Banner {
            image: "https://cdn.example/banners/new-in.webp".into(),
            image_mobile: None,
            button_text_en: String::new(),
            is_active: true,
            sort_order: 1,
        },
    ]
}

pub fn sample_reviews(now: u64) -> Vec<ProductReview> {
    vec![
        ProductReview {
            id: 1,
            rating: 5.0,
            review: "Fits perfectly, fast shipping.".into(),
            created_at: now - 90,
        },
        ProductReview {
            id: 2,
            rating: 3.6,
            review: "Decent, sole wears quickly.".into(),
            created_at: now - 5 * 86_400,
        },
    ]
}

pub fn euro() -> Currency {
    Currency::new("€", 0.92, "EUR")
}

pub fn lebanese_pound() -> Currency {
    Currency::new("L.L.", 89_500.0, "LBP")
}
