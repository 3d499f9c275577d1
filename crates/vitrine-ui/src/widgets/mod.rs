//! Widget catalog.

mod banner;
mod carousel;
mod product_card;
mod reveal_section;
mod review;
mod skeleton;

pub use banner::{active_banners, banner_slide, BannerSlideModel};
pub use carousel::{summary_pair, CarouselState, CarouselSummary};
pub use product_card::{product_card, ProductCardModel, ProductCardSpec};
pub use reveal_section::{RevealSection, RevealedContent};
pub use review::{review_row, ReviewModel, MAX_STARS};
pub use skeleton::{SkeletonBlock, SkeletonClock, SkeletonModel, SkeletonSpec};
