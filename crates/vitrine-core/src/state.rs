//! Observable state cells.
//!
//! A `MutableState` is a single-threaded cell with a watcher list. Reads
//! made while a derived computation is active subscribe that computation to
//! the cell, so one shared cell (the scroll offset) can fan out into many
//! independently derived values without the subscribers ever writing back.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

thread_local! {
    // Stack of (observer id, invalidation callback) for in-flight derived
    // computations. Reads register the top entry as a watcher.
    static ACTIVE_OBSERVERS: RefCell<Vec<(u64, Rc<dyn Fn()>)>> = const { RefCell::new(Vec::new()) };
    static NEXT_OBSERVER_ID: Cell<u64> = const { Cell::new(1) };
}

fn next_observer_id() -> u64 {
    NEXT_OBSERVER_ID.with(|cell| {
        let id = cell.get();
        cell.set(id + 1);
        id
    })
}

struct WatcherEntry {
    id: u64,
    callback: Weak<dyn Fn()>,
}

struct StateInner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    watchers: RefCell<SmallVec<[WatcherEntry; 4]>>,
}

impl<T: Clone + 'static> StateInner<T> {
    fn new(value: T) -> Rc<Self> {
        Rc::new(Self {
            value: RefCell::new(value),
            version: Cell::new(0),
            watchers: RefCell::new(SmallVec::new()),
        })
    }

    fn subscribe(&self, id: u64, callback: &Rc<dyn Fn()>) {
        let mut watchers = self.watchers.borrow_mut();
        watchers.retain(|entry| entry.callback.strong_count() > 0);
        if watchers.iter().any(|entry| entry.id == id) {
            return;
        }
        watchers.push(WatcherEntry {
            id,
            callback: Rc::downgrade(callback),
        });
    }

    fn subscribe_active_observer(&self) {
        let observer = ACTIVE_OBSERVERS.with(|stack| stack.borrow().last().cloned());
        if let Some((id, callback)) = observer {
            self.subscribe(id, &callback);
        }
    }

    fn notify(&self) {
        self.version.set(self.version.get() + 1);
        // Collect strong callbacks first so watcher bodies may freely
        // subscribe or unsubscribe while they run.
        let live: Vec<Rc<dyn Fn()>> = {
            let mut watchers = self.watchers.borrow_mut();
            watchers.retain(|entry| entry.callback.strong_count() > 0);
            watchers
                .iter()
                .filter_map(|entry| entry.callback.upgrade())
                .collect()
        };
        for callback in live {
            callback();
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T: Clone + 'static> {
    inner: Rc<StateInner<T>>,
}

impl<T: Clone + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.subscribe_active_observer();
        f(&self.inner.value.borrow())
    }

    pub fn value(&self) -> T {
        self.with(|value| value.clone())
    }

    pub fn get(&self) -> T {
        self.value()
    }

    /// Monotone write counter, bumped on every notification.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Register a change callback. The subscription lives as long as the
    /// returned registration; dropping it unsubscribes.
    pub fn watch(&self, callback: impl Fn() + 'static) -> WatchRegistration {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        self.inner.subscribe(next_observer_id(), &callback);
        WatchRegistration {
            _callback: callback,
        }
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.inner.value.borrow()).finish()
    }
}

/// Keeps a [`State::watch`] subscription alive.
pub struct WatchRegistration {
    _callback: Rc<dyn Fn()>,
}

/// Writable observable cell. Clones share the same underlying value.
pub struct MutableState<T: Clone + 'static> {
    inner: Rc<StateInner<T>>,
}

impl<T: Clone + 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: StateInner::new(value),
        }
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.as_state().with(f)
    }

    pub fn value(&self) -> T {
        self.as_state().value()
    }

    pub fn get(&self) -> T {
        self.value()
    }

    pub fn replace(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.inner.notify();
    }

    pub fn set_value(&self, value: T) {
        self.replace(value);
    }

    pub fn set(&self, value: T) {
        self.replace(value);
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.value.borrow_mut());
        self.inner.notify();
        result
    }

    #[cfg(test)]
    pub(crate) fn watcher_count(&self) -> usize {
        let mut watchers = self.inner.watchers.borrow_mut();
        watchers.retain(|entry| entry.callback.strong_count() > 0);
        watchers.len()
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableState")
            .field(&*self.inner.value.borrow())
            .finish()
    }
}

struct DerivedInner<T: Clone + 'static> {
    state: MutableState<T>,
    compute: RefCell<Rc<dyn Fn() -> T>>,
    observer_id: u64,
    invalidator: RefCell<Option<Rc<dyn Fn()>>>,
}

/// Value recomputed from other state cells.
///
/// Every cell read during the compute closure subscribes this derived value
/// to that cell; any later write to a source recomputes eagerly and then
/// notifies this value's own watchers.
pub struct DerivedState<T: Clone + 'static> {
    inner: Rc<DerivedInner<T>>,
}

impl<T: Clone + 'static> Clone for DerivedState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> DerivedState<T> {
    pub fn new(compute: impl Fn() -> T + 'static) -> Self {
        let compute: Rc<dyn Fn() -> T> = Rc::new(compute);
        let initial = compute();
        let inner = Rc::new(DerivedInner {
            state: MutableState::new(initial),
            compute: RefCell::new(compute),
            observer_id: next_observer_id(),
            invalidator: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let invalidator: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::recompute_inner(&inner);
            }
        });
        *inner.invalidator.borrow_mut() = Some(invalidator);

        let derived = Self { inner };
        derived.recompute();
        derived
    }

    pub fn set_compute(&self, compute: impl Fn() -> T + 'static) {
        *self.inner.compute.borrow_mut() = Rc::new(compute);
        self.recompute();
    }

    pub fn recompute(&self) {
        Self::recompute_inner(&self.inner);
    }

    fn recompute_inner(inner: &Rc<DerivedInner<T>>) {
        let invalidator = inner
            .invalidator
            .borrow()
            .clone()
            .expect("derived invalidator installed at construction");
        let compute = inner.compute.borrow().clone();
        ACTIVE_OBSERVERS.with(|stack| {
            stack.borrow_mut().push((inner.observer_id, invalidator));
        });
        let value = compute();
        ACTIVE_OBSERVERS.with(|stack| {
            stack.borrow_mut().pop();
        });
        inner.state.set_value(value);
    }

    pub fn as_state(&self) -> State<T> {
        self.inner.state.as_state()
    }

    pub fn value(&self) -> T {
        self.inner.state.value()
    }

    pub fn get(&self) -> T {
        self.value()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
