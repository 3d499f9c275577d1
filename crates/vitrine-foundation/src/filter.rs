//! Product browsing filter state.
//!
//! The container is deliberately permissive: `update` replaces exactly one
//! field and validates nothing (a reversed price range is the caller's
//! problem, matching the upstream contract). Only `clear` restores the
//! documented defaults.

use vitrine_core::{MutableState, State};

pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 1000.0);
pub const DEFAULT_SORT: &str = "newest";

/// Transient, screen-scoped selection criteria for product browsing.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub category_ids: Vec<u64>,
    pub brand_ids: Vec<u64>,
    pub price_range: (f64, f64),
    pub sort_info: String,
    pub search_query: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category_ids: Vec::new(),
            brand_ids: Vec::new(),
            price_range: DEFAULT_PRICE_RANGE,
            sort_info: DEFAULT_SORT.to_string(),
            search_query: String::new(),
            color: None,
            size: None,
        }
    }
}

/// Single-field replacement, one variant per filter field.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterUpdate {
    CategoryIds(Vec<u64>),
    BrandIds(Vec<u64>),
    PriceRange(f64, f64),
    SortInfo(String),
    SearchQuery(String),
    Color(Option<String>),
    Size(Option<String>),
}

/// Reactive holder for one screen's [`FilterState`].
#[derive(Clone)]
pub struct FilterStore {
    state: MutableState<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            state: MutableState::new(FilterState::default()),
        }
    }

    /// Replace the named field, preserving all others. No validation.
    pub fn update(&self, update: FilterUpdate) {
        self.state.update(|filters| match update {
            FilterUpdate::CategoryIds(ids) => filters.category_ids = ids,
            FilterUpdate::BrandIds(ids) => filters.brand_ids = ids,
            FilterUpdate::PriceRange(min, max) => filters.price_range = (min, max),
            FilterUpdate::SortInfo(sort) => filters.sort_info = sort,
            FilterUpdate::SearchQuery(query) => filters.search_query = query,
            FilterUpdate::Color(color) => filters.color = color,
            FilterUpdate::Size(size) => filters.size = size,
        });
    }

    /// Reset every field to the documented defaults.
    pub fn clear(&self) {
        self.state.set_value(FilterState::default());
    }

    pub fn snapshot(&self) -> FilterState {
        self.state.get()
    }

    pub fn state(&self) -> State<FilterState> {
        self.state.as_state()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
