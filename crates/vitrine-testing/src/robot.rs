//! Headless screen driver.
//!
//! The robot stands in for the host scroll surface and frame loop: it owns
//! a runtime and a scroll state, writes scroll offsets, advances frame
//! time, and drains the UI queue, so tests can observe reveal transforms
//! and loaded state without any rendering backend.

use std::cell::Cell;

use vitrine_animation::{RevealController, RevealKind};
use vitrine_core::{Runtime, RuntimeHandle};
use vitrine_foundation::{ScreenScope, ScrollState};

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

pub struct ScreenRobot {
    runtime: Runtime,
    scroll: ScrollState,
    scope: ScreenScope,
    frame_time_nanos: Cell<u64>,
}

impl ScreenRobot {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            runtime: Runtime::default(),
            scroll: ScrollState::new(viewport_height),
            scope: ScreenScope::mount(),
            frame_time_nanos: Cell::new(0),
        }
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// Create a reveal controller bound to this robot's scroll surface,
    /// already measured at the given position.
    pub fn mount_section(&self, kind: RevealKind, y: f32, height: f32) -> RevealController {
        let controller = RevealController::new(
            self.scroll.offset(),
            self.scroll.viewport_height(),
            kind,
        );
        controller.on_layout(y, height);
        controller
    }

    pub fn scroll_to(&self, offset: f32) {
        self.scroll.set_offset(offset);
    }

    pub fn scroll_by(&self, delta: f32) {
        self.scroll.scroll_by(delta);
    }

    /// Advance one ~60 FPS frame: fire frame callbacks, then drain tasks.
    pub fn advance_frame(&self) {
        self.advance_frame_by(FRAME_NANOS);
    }

    pub fn advance_frame_by(&self, delta_nanos: u64) {
        let time = self.frame_time_nanos.get() + delta_nanos;
        self.frame_time_nanos.set(time);
        let handle = self.runtime.handle();
        handle.drain_frame_callbacks(time);
        handle.drain_ui();
    }

    /// Drive frames until the UI queue is quiet (bounded, for tests).
    pub fn settle(&self) {
        for _ in 0..64 {
            let handle = self.runtime.handle();
            if !handle.has_pending_ui() && !handle.has_frame_callbacks() {
                return;
            }
            self.advance_frame();
        }
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos.get()
    }
}
