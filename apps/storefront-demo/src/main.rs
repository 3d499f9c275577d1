//! Headless storefront walkthrough: builds a home screen, scrolls it, and
//! logs the render models each widget produces along the way.

use std::rc::Rc;

use anyhow::Result;

use vitrine_animation::RevealKind;
use vitrine_catalog::{
    load_related_products, ApiError, Banner, CatalogApi, Currency, LocalBoxFuture, Product,
};
use vitrine_core::{MutableState, Runtime};
use vitrine_foundation::{FilterUpdate, ScreenScope, ScrollState};
use vitrine_ui::{
    active_banners, banner_slide, product_card, summary_pair, CarouselState, ProductCardSpec,
    RevealSection, SkeletonClock, SkeletonSpec,
};
use vitrine_ui_graphics::Theme;

struct DemoApi;

impl CatalogApi for DemoApi {
    fn get_related_products(&self, product_id: u64) -> LocalBoxFuture<Result<Vec<Product>, ApiError>> {
        Box::pin(async move {
            if product_id % 2 == 0 {
                Err(ApiError::Transport("demo backend unreachable".into()))
            } else {
                Ok(demo_products())
            }
        })
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Court Sneaker".into(),
            image: "https://cdn.example/products/1.webp".into(),
            price: 89.0,
            original_price: Some(120.0),
            rating: 4.4,
            review_count: 112,
            brand_id: 3,
            category_id: 12,
        },
        Product {
            id: 2,
            name: "Trail Runner".into(),
            image: "https://cdn.example/products/2.webp".into(),
            price: 104.0,
            original_price: None,
            rating: 4.8,
            review_count: 57,
            brand_id: 5,
            category_id: 12,
        },
        Product {
            id: 3,
            name: "Canvas Slip-On".into(),
            image: "https://cdn.example/products/3.webp".into(),
            price: 49.0,
            original_price: Some(60.0),
            rating: 3.9,
            review_count: 203,
            brand_id: 3,
            category_id: 14,
        },
    ]
}

fn demo_banners() -> Vec<Banner> {
    vec![
        Banner {
            image: "https://cdn.example/banners/new-season.webp".into(),
            image_mobile: Some("https://cdn.example/banners/new-season-m.webp".into()),
            button_text_en: "New season".into(),
            is_active: true,
            sort_order: 1,
        },
        Banner {
            image: "https://cdn.example/banners/clearance.webp".into(),
            image_mobile: None,
            button_text_en: String::new(),
            is_active: true,
            sort_order: 2,
        },
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Vitrine Storefront Demo ===");
    println!("Simulates one home-screen session:");
    println!("  - banner strip + hero carousel summary");
    println!("  - product grid revealed by scrolling");
    println!("  - related products fetched through the API seam");
    println!("  - filter drawer interaction and reset");
    println!();

    let runtime = Runtime::default();
    let handle = runtime.handle();
    let scope = ScreenScope::mount();
    let scroll = ScrollState::new(800.0);
    let theme = Theme::dark();
    let euro = Currency::new("€", 0.92, "EUR");

    // Banner strip.
    let banners = demo_banners();
    for banner in active_banners(&banners) {
        if let Some(slide) = banner_slide(banner, true) {
            log::info!("banner: {} [{}]", slide.image, slide.button_label);
        }
    }

    // Hero carousel.
    let products = demo_products();
    let carousel = CarouselState::new(products.len());
    carousel.advance();
    let (current, next) = summary_pair(&products, carousel.active_index());
    log::info!("carousel summary: {} -> {}", current.name, next.name);

    // Skeletons while the related strip loads.
    let shimmer = SkeletonClock::start();
    let placeholder = SkeletonSpec::new().theme(theme).rows(2);
    let skeleton = placeholder.model_at(shimmer.elapsed_millis());
    log::info!(
        "skeleton: {} blocks, phase {:.2}",
        skeleton.blocks.len(),
        skeleton.phase
    );

    let related = MutableState::new(Vec::new());
    load_related_products(&handle, Rc::new(DemoApi), 1, related.clone());
    handle.drain_ui();

    let card_spec = ProductCardSpec::new()
        .theme(theme)
        .currency(euro)
        .show_discount_badge(true);
    for product in related.get() {
        let card = product_card(&product, &card_spec);
        log::info!(
            "related: {} {} (was {:?}, -{}%)",
            card.title,
            card.price_label,
            card.original_price_label,
            card.discount_percent
        );
    }

    // Scroll pass over two revealed sections.
    let grid = RevealSection::new(&scroll, RevealKind::FadeUp);
    grid.on_layout(1600.0, 600.0);
    let reviews = RevealSection::new(&scroll, RevealKind::Reveal);
    reviews.on_layout(2600.0, 400.0);

    for offset in [0.0_f32, 500.0, 900.0, 1400.0, 2100.0] {
        scroll.set_offset(offset);
        let grid_t = grid.transform();
        let reviews_t = reviews.transform();
        log::info!(
            "scroll {:>6}: grid opacity {:.2} ty {:>5.1} | reviews opacity {:.2} rx {:>4.1}",
            offset,
            grid_t.opacity,
            grid_t.translate_y,
            reviews_t.opacity,
            reviews_t.rotate_x_degrees
        );
    }

    // Filter drawer session.
    let filters = scope.filters();
    let drawer = scope.drawer();
    drawer.state().open();
    filters
        .store()
        .update(FilterUpdate::SearchQuery("sneaker".into()));
    filters.store().update(FilterUpdate::PriceRange(40.0, 120.0));
    drawer.state().close();
    log::info!("filters applied: {:?}", filters.store().snapshot());
    filters.store().clear();
    log::info!("filters cleared: {:?}", filters.store().snapshot());

    Ok(())
}
