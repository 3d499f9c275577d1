//! Scroll-revealed section wrapper.

use vitrine_animation::{RevealController, RevealKind, RevealTransform, SectionLayout};
use vitrine_core::State;
use vitrine_foundation::ScrollState;

/// A widget subtree that animates in as the user scrolls it toward the
/// viewport. Thin glue: the controller owns the math, this wrapper binds it
/// to a scroll surface and pairs the transform with content.
pub struct RevealSection {
    controller: RevealController,
}

impl RevealSection {
    pub fn new(scroll: &ScrollState, kind: RevealKind) -> Self {
        Self {
            controller: RevealController::new(scroll.offset(), scroll.viewport_height(), kind),
        }
    }

    /// Layout callback from the host surface.
    pub fn on_layout(&self, y: f32, height: f32) {
        self.controller.on_layout(y, height);
    }

    pub fn on_screen_resize(&self, screen_height: f32) {
        self.controller.on_screen_resize(screen_height);
    }

    pub fn layout(&self) -> SectionLayout {
        self.controller.layout()
    }

    pub fn kind(&self) -> RevealKind {
        self.controller.kind()
    }

    pub fn progress(&self) -> State<f32> {
        self.controller.progress()
    }

    pub fn transform(&self) -> RevealTransform {
        self.controller.transform()
    }

    /// Pair the current transform with a content model.
    pub fn render<T>(&self, content: T) -> RevealedContent<T> {
        RevealedContent {
            transform: self.transform(),
            content,
        }
    }
}

/// Rendering instruction: draw `content` under `transform`.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealedContent<T> {
    pub transform: RevealTransform,
    pub content: T,
}
