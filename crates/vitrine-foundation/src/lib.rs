//! State containers for storefront screens
//!
//! A screen subtree owns its transient state through a [`ScreenScope`]:
//! filter selections, drawer visibility, and the scroll surface cell that
//! reveal controllers subscribe to. Nothing here is persisted; scope state
//! dies with the screen.

mod drawer;
mod filter;
mod scope;
mod scroll;

pub use drawer::DrawerState;
pub use filter::{FilterState, FilterStore, FilterUpdate, DEFAULT_PRICE_RANGE, DEFAULT_SORT};
pub use scope::{DrawerHandle, FilterHandle, ScreenScope};
pub use scroll::ScrollState;
