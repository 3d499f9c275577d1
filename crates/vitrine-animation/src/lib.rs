//! Animation support for Vitrine
//!
//! The centerpiece is the reveal engine: a pure mapping from scroll offset
//! and measured section position to an entrance-transform recipe, driven
//! through a derived state over the shared scroll cell.

mod easing;
mod reveal;

pub use easing::{Easing, Lerp};
pub use reveal::{
    reveal_progress, RevealController, RevealKind, RevealTransform, SectionLayout,
};
