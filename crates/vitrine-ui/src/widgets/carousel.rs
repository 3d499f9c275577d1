//! Hero carousel with a two-card summary strip.

use vitrine_core::{MutableState, State};

/// The "current + upcoming" pair shown under the hero carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselSummary<T> {
    pub current: T,
    pub next: T,
}

/// Project the summary pair for an active slide.
///
/// Wraps around at the last index so the strip always shows a successor.
/// `slides` must be non-empty and `active_index` in range; both are caller
/// preconditions, violated ones panic.
pub fn summary_pair<T>(slides: &[T], active_index: usize) -> (&T, &T) {
    let current = &slides[active_index];
    let next = &slides[(active_index + 1) % slides.len()];
    (current, next)
}

/// Active-slide state for one carousel instance.
pub struct CarouselState {
    active: MutableState<usize>,
    len: usize,
}

impl CarouselState {
    /// Panics on an empty slide list: a carousel without slides is a
    /// programming error, surfaced at construction rather than first index.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "carousel requires at least one slide");
        Self {
            active: MutableState::new(0),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> State<usize> {
        self.active.as_state()
    }

    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    /// Step to the next slide, wrapping at the end.
    pub fn advance(&self) {
        let len = self.len;
        self.active.update(|index| *index = (*index + 1) % len);
    }

    pub fn set_active(&self, index: usize) {
        assert!(index < self.len, "slide index {index} out of range");
        self.active.set_value(index);
    }

    /// Summary pair for the current active index.
    pub fn summary<T: Clone>(&self, slides: &[T]) -> CarouselSummary<T> {
        assert_eq!(
            slides.len(),
            self.len,
            "slide list changed length under the carousel"
        );
        let (current, next) = summary_pair(slides, self.active_index());
        CarouselSummary {
            current: current.clone(),
            next: next.clone(),
        }
    }
}
