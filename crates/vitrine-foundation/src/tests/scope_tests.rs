use super::*;

use crate::filter::FilterUpdate;

#[test]
fn handles_reach_the_scope_stores_while_mounted() {
    let scope = ScreenScope::mount();
    let filters = scope.filters();
    let drawer = scope.drawer();

    filters
        .store()
        .update(FilterUpdate::SearchQuery("jacket".into()));
    assert_eq!(filters.store().snapshot().search_query, "jacket");

    drawer.state().toggle();
    assert!(drawer.state().is_open());
}

#[test]
fn sibling_handles_share_one_store() {
    let scope = ScreenScope::mount();
    let a = scope.filters();
    let b = scope.filters();
    a.store().update(FilterUpdate::Color(Some("navy".into())));
    assert_eq!(b.store().snapshot().color.as_deref(), Some("navy"));
}

#[test]
#[should_panic(expected = "filter state used outside its screen scope")]
fn filter_handle_panics_after_unmount() {
    let scope = ScreenScope::mount();
    let filters = scope.filters();
    drop(scope);
    let _ = filters.store();
}

#[test]
#[should_panic(expected = "drawer state used outside its screen scope")]
fn drawer_handle_panics_after_unmount() {
    let scope = ScreenScope::mount();
    let drawer = scope.drawer();
    drop(scope);
    let _ = drawer.state();
}
