//! Pure math/data for drawing & theming in Vitrine
//!
//! Color definitions, unit types, and the light/dark theme palettes used
//! by the widget layer. No dependencies, no I/O.

mod color;
mod theme;
mod unit;

pub use color::*;
pub use theme::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::theme::{ColorScheme, Theme, ThemeMode};
    pub use crate::unit::{Dp, Px, Sp};
}
