//! Storefront widgets for Vitrine
//!
//! Widgets here are projection functions: they take externally supplied
//! records plus a spec (theme, currency, flags) and produce render models
//! with formatted strings and resolved colors. State lives in
//! `vitrine-foundation`; reveal math lives in `vitrine-animation`.

pub mod widgets;

pub use widgets::*;

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod widget_tests;

#[cfg(test)]
#[path = "tests/home_screen_tests.rs"]
mod home_screen_tests;
