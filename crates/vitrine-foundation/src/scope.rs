//! Screen-subtree ownership of filter and drawer state.
//!
//! A [`ScreenScope`] is created when a screen mounts and dropped when it
//! unmounts. Consumers hold lightweight handles; using a handle after the
//! scope is gone is a programming error and panics immediately, the same
//! treatment a missing provider gets in composition-local systems.

use std::rc::{Rc, Weak};

use crate::drawer::DrawerState;
use crate::filter::FilterStore;

struct ScopeInner {
    filters: FilterStore,
    drawer: DrawerState,
}

/// Owns one screen's transient state containers.
pub struct ScreenScope {
    inner: Rc<ScopeInner>,
}

impl ScreenScope {
    pub fn mount() -> Self {
        log::debug!("screen scope mounted");
        Self {
            inner: Rc::new(ScopeInner {
                filters: FilterStore::new(),
                drawer: DrawerState::new(),
            }),
        }
    }

    pub fn filters(&self) -> FilterHandle {
        FilterHandle {
            scope: Rc::downgrade(&self.inner),
        }
    }

    pub fn drawer(&self) -> DrawerHandle {
        DrawerHandle {
            scope: Rc::downgrade(&self.inner),
        }
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        log::debug!("screen scope unmounted");
    }
}

fn expect_scope(scope: &Weak<ScopeInner>, what: &str) -> Rc<ScopeInner> {
    scope
        .upgrade()
        .unwrap_or_else(|| panic!("{what} used outside its screen scope"))
}

/// Access to the scope's [`FilterStore`], valid while the scope is mounted.
#[derive(Clone)]
pub struct FilterHandle {
    scope: Weak<ScopeInner>,
}

impl FilterHandle {
    pub fn store(&self) -> FilterStore {
        expect_scope(&self.scope, "filter state").filters.clone()
    }
}

/// Access to the scope's [`DrawerState`], valid while the scope is mounted.
#[derive(Clone)]
pub struct DrawerHandle {
    scope: Weak<ScopeInner>,
}

impl DrawerHandle {
    pub fn state(&self) -> DrawerState {
        expect_scope(&self.scope, "drawer state").drawer.clone()
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
