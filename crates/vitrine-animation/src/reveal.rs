//! Scroll-driven entrance reveals.
//!
//! Each scrollable section owns a [`RevealController`]: it reads the shared
//! scroll-offset cell (never writes it), derives a [0, 1] progress from the
//! section's measured position, and maps the progress to a transform recipe.

use vitrine_core::{DerivedState, MutableState, State};

use crate::easing::Lerp;

/// Measured screen position of a section, captured on mount and on every
/// layout pass. Zeroed until the first measurement arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionLayout {
    pub y: f32,
    pub height: f32,
}

impl SectionLayout {
    pub fn new(y: f32, height: f32) -> Self {
        Self { y, height }
    }

    pub fn is_measured(&self) -> bool {
        *self != Self::default()
    }
}

/// Entrance animation progress for a section.
///
/// The entrance starts when the section top sits one full screen height
/// below the viewport and completes at 0.7 screen heights, so content
/// animates in while approaching from below. Values outside the window
/// clamp to 0 or 1; an unmeasured (zeroed) layout stays clamped rather
/// than producing garbage.
pub fn reveal_progress(scroll_offset: f32, layout: SectionLayout, screen_height: f32) -> f32 {
    let start_point = layout.y - screen_height;
    let end_point = layout.y - screen_height * 0.7;
    let span = end_point - start_point;
    if span <= f32::EPSILON {
        return if scroll_offset >= end_point { 1.0 } else { 0.0 };
    }
    ((scroll_offset - start_point) / span).clamp(0.0, 1.0)
}

/// Which entrance recipe a section uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealKind {
    #[default]
    FadeUp,
    ZoomIn,
    SlideLeft,
    SlideRight,
    Reveal,
    None,
}

/// Rendering instructions for one section at one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotate_x_degrees: f32,
    pub opacity: f32,
}

impl RevealTransform {
    pub const IDENTITY: RevealTransform = RevealTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_x_degrees: 0.0,
        opacity: 1.0,
    };
}

impl Default for RevealTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RevealKind {
    /// Map a clamped progress scalar to the transform recipe.
    pub fn transform(&self, progress: f32) -> RevealTransform {
        let p = progress.clamp(0.0, 1.0);
        let mut out = RevealTransform {
            opacity: 0.0_f32.lerp(&1.0, p),
            ..RevealTransform::IDENTITY
        };
        match self {
            RevealKind::FadeUp => {
                out.translate_y = 100.0_f32.lerp(&0.0, p);
            }
            RevealKind::ZoomIn => {
                out.scale = 0.85_f32.lerp(&1.0, p);
                out.translate_y = 50.0_f32.lerp(&0.0, p);
            }
            RevealKind::SlideLeft => {
                out.translate_x = (-150.0_f32).lerp(&0.0, p);
            }
            RevealKind::SlideRight => {
                out.translate_x = 150.0_f32.lerp(&0.0, p);
            }
            RevealKind::Reveal => {
                out.rotate_x_degrees = 30.0_f32.lerp(&0.0, p);
                out.translate_y = 80.0_f32.lerp(&0.0, p);
            }
            RevealKind::None => {}
        }
        out
    }
}

/// Per-section reveal state: measured layout plus a derived progress over
/// the shared scroll cell. Recomputation is pure and idempotent; the
/// controller never writes the scroll offset.
pub struct RevealController {
    kind: RevealKind,
    layout: MutableState<SectionLayout>,
    screen_height: MutableState<f32>,
    progress: DerivedState<f32>,
}

impl RevealController {
    pub fn new(scroll_offset: State<f32>, screen_height: f32, kind: RevealKind) -> Self {
        let layout = MutableState::new(SectionLayout::default());
        let screen_height = MutableState::new(screen_height);
        let progress = {
            let layout = layout.as_state();
            let screen_height = screen_height.as_state();
            DerivedState::new(move || {
                reveal_progress(scroll_offset.get(), layout.get(), screen_height.get())
            })
        };
        Self {
            kind,
            layout,
            screen_height,
            progress,
        }
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Layout callback: record where the section landed on screen.
    pub fn on_layout(&self, y: f32, height: f32) {
        self.layout.set_value(SectionLayout::new(y, height));
    }

    /// Viewport resize (rotation, split screen).
    pub fn on_screen_resize(&self, screen_height: f32) {
        self.screen_height.set_value(screen_height);
    }

    pub fn layout(&self) -> SectionLayout {
        self.layout.get()
    }

    pub fn progress(&self) -> State<f32> {
        self.progress.as_state()
    }

    pub fn transform(&self) -> RevealTransform {
        self.kind.transform(self.progress.get())
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
