//! The shared scroll surface cell.
//!
//! One scroll state per scrollable screen. The scroll surface is the only
//! writer; reveal controllers and other readers take the read-only
//! [`State`] handle from [`ScrollState::offset`].

use vitrine_core::{MutableState, State};

pub struct ScrollState {
    offset: MutableState<f32>,
    viewport_height: MutableState<f32>,
}

impl ScrollState {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            offset: MutableState::new(0.0),
            viewport_height: MutableState::new(viewport_height),
        }
    }

    /// Read-only handle for derived subscribers.
    pub fn offset(&self) -> State<f32> {
        self.offset.as_state()
    }

    pub fn offset_value(&self) -> f32 {
        self.offset.get()
    }

    /// Absolute scroll position, written by the scroll surface.
    pub fn set_offset(&self, offset: f32) {
        self.offset.set_value(offset.max(0.0));
    }

    pub fn scroll_by(&self, delta: f32) {
        self.offset.update(|offset| *offset = (*offset + delta).max(0.0));
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height.get()
    }

    pub fn set_viewport_height(&self, height: f32) {
        self.viewport_height.set_value(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_never_goes_negative() {
        let scroll = ScrollState::new(800.0);
        scroll.scroll_by(-50.0);
        assert_eq!(scroll.offset_value(), 0.0);
        scroll.set_offset(120.0);
        scroll.scroll_by(-200.0);
        assert_eq!(scroll.offset_value(), 0.0);
    }

    #[test]
    fn readers_observe_surface_writes() {
        let scroll = ScrollState::new(800.0);
        let reader = scroll.offset();
        scroll.set_offset(42.0);
        assert_eq!(reader.get(), 42.0);
    }
}
