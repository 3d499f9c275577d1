use crate::widgets::*;

use vitrine_testing::{discounted_product, euro, sample_banners, sample_product, sample_products};
use vitrine_ui_graphics::Theme;

#[test]
fn product_card_formats_the_price_in_the_given_currency() {
    let product = sample_product(1); // base price 60.0
    let spec = ProductCardSpec::new().currency(euro());
    let card = product_card(&product, &spec);
    assert_eq!(card.price_label, "€55.20");
    assert_eq!(card.original_price_label, None);
    assert_eq!(card.discount_percent, 0);
}

#[test]
fn product_card_shows_the_discount_badge_when_asked() {
    let product = discounted_product(2, 100.0, 75.0);
    let spec = ProductCardSpec::new().show_discount_badge(true);
    let card = product_card(&product, &spec);
    assert_eq!(card.discount_percent, 25);
    assert_eq!(card.price_label, "$75.00");
    assert_eq!(card.original_price_label.as_deref(), Some("$100.00"));
}

#[test]
fn product_card_hides_the_badge_when_disabled() {
    let product = discounted_product(2, 100.0, 75.0);
    let card = product_card(&product, &ProductCardSpec::new());
    assert_eq!(card.discount_percent, 0);
    // The strikethrough price still renders; only the badge is suppressed.
    assert_eq!(card.original_price_label.as_deref(), Some("$100.00"));
}

#[test]
fn product_card_uses_theme_colors() {
    let product = sample_product(3);
    let dark = product_card(&product, &ProductCardSpec::new().theme(Theme::dark()));
    let light = product_card(&product, &ProductCardSpec::new().theme(Theme::light()));
    assert_ne!(dark.price_color, light.price_color);
}

#[test]
fn carousel_summary_wraps_at_the_last_slide() {
    let slides = sample_products(3);
    let (current, next) = summary_pair(&slides, 2);
    assert_eq!(current.id, 3);
    assert_eq!(next.id, slides[0].id, "last slide pairs with the first");
}

#[test]
fn carousel_state_advances_with_wraparound() {
    let slides = sample_products(3);
    let carousel = CarouselState::new(slides.len());
    carousel.advance();
    carousel.advance();
    assert_eq!(carousel.active_index(), 2);

    let summary = carousel.summary(&slides);
    assert_eq!(summary.current.id, 3);
    assert_eq!(summary.next.id, 1);

    carousel.advance();
    assert_eq!(carousel.active_index(), 0);
}

#[test]
#[should_panic(expected = "carousel requires at least one slide")]
fn empty_carousel_fails_at_construction() {
    let _ = CarouselState::new(0);
}

#[test]
fn active_banners_filters_and_orders() {
    let banners = sample_banners();
    let active = active_banners(&banners);
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].sort_order, 1);
    assert_eq!(active[1].sort_order, 2);
}

#[test]
fn banner_slide_picks_the_mobile_image_with_fallback() {
    let banners = sample_banners();
    let with_mobile = banner_slide(&banners[0], true).expect("active banner");
    assert!(with_mobile.image.ends_with("summer-m.webp"));
    let without_mobile = banner_slide(&banners[2], true).expect("active banner");
    assert!(without_mobile.image.ends_with("new-in.webp"));
}

#[test]
fn banner_slide_defaults_the_button_label() {
    let banners = sample_banners();
    let slide = banner_slide(&banners[2], false).expect("active banner");
    assert_eq!(slide.button_label, "Shop now");
}

#[test]
fn inactive_banner_renders_nothing() {
    let banners = sample_banners();
    assert_eq!(banner_slide(&banners[1], false), None);
}
