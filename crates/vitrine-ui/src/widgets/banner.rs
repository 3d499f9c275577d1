//! Promotional banner strip.

use vitrine_catalog::Banner;

const DEFAULT_BUTTON_LABEL: &str = "Shop now";

/// Active banners in display order. Inactive entries are dropped with a
/// debug log; absence of any banner is a legal empty strip, not an error.
pub fn active_banners(banners: &[Banner]) -> Vec<&Banner> {
    let mut active: Vec<&Banner> = banners
        .iter()
        .filter(|banner| {
            if !banner.is_active {
                log::debug!("skipping inactive banner {}", banner.image);
            }
            banner.is_active
        })
        .collect();
    active.sort_by_key(|banner| banner.sort_order);
    active
}

#[derive(Clone, Debug, PartialEq)]
pub struct BannerSlideModel {
    pub image: String,
    pub button_label: String,
}

/// Render model for one banner, or `None` for an inactive banner.
pub fn banner_slide(banner: &Banner, mobile: bool) -> Option<BannerSlideModel> {
    if !banner.is_active {
        return None;
    }
    let image = if mobile {
        banner
            .image_mobile
            .clone()
            .unwrap_or_else(|| banner.image.clone())
    } else {
        banner.image.clone()
    };
    let button_label = if banner.button_text_en.is_empty() {
        DEFAULT_BUTTON_LABEL.to_string()
    } else {
        banner.button_text_en.clone()
    };
    Some(BannerSlideModel {
        image,
        button_label,
    })
}
