//! Assertion helpers for screen-robot tests.

use vitrine_animation::{RevealController, RevealTransform};

/// Fuzzy scalar comparison for derived values.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_progress_near(controller: &RevealController, expected: f32, msg: &str) {
    assert_approx_eq(controller.progress().get(), expected, 1e-4, msg);
}

pub fn assert_opacity_near(transform: &RevealTransform, expected: f32, msg: &str) {
    assert_approx_eq(transform.opacity, expected, 1e-4, msg);
}

/// The section has not started its entrance.
pub fn assert_hidden(controller: &RevealController, msg: &str) {
    assert_progress_near(controller, 0.0, msg);
    assert_opacity_near(&controller.transform(), 0.0, msg);
}

/// The section finished its entrance and renders untransformed.
pub fn assert_fully_revealed(controller: &RevealController, msg: &str) {
    assert_progress_near(controller, 1.0, msg);
    assert_eq!(
        controller.transform(),
        RevealTransform::IDENTITY,
        "{msg}: expected identity transform"
    );
}
