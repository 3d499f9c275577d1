//! Core runtime for the Vitrine storefront presentation layer.
//!
//! Everything in this crate is single-threaded by design: state cells,
//! frame callbacks, and local tasks all live on the UI thread. The only
//! cross-thread object is the scheduler used to request a new frame.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock, NextFrame};
pub use runtime::{
    DefaultScheduler, Runtime, RuntimeHandle, RuntimeScheduler, TaskHandle, TestRuntime,
    TestScheduler,
};
pub use state::{DerivedState, MutableState, State, WatchRegistration};
