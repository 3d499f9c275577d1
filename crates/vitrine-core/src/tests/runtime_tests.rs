use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::state::MutableState;

#[test]
fn frame_callbacks_fire_once_with_the_frame_time() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let seen = Rc::clone(&seen);
        handle
            .frame_clock()
            .with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };

    handle.drain_frame_callbacks(16_000_000);
    handle.drain_frame_callbacks(32_000_000);
    assert_eq!(*seen.borrow(), vec![16_000_000]);
    drop(registration);
}

#[test]
fn dropping_a_registration_cancels_the_callback() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        handle
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true))
    };
    drop(registration);

    handle.drain_frame_callbacks(1);
    assert!(!fired.get());
}

#[test]
fn cancelling_before_the_drain_removes_the_queued_entry() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();

    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(handle.has_frame_callbacks());
    drop(registration);

    assert!(!handle.has_frame_callbacks());
    assert!(runtime
        .runtime
        .inner
        .cancelled_frame_callbacks
        .borrow()
        .is_empty());
}

#[test]
fn fired_registrations_leave_no_cancellation_residue() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(0_u32));

    for frame in 0..100_u64 {
        let registration = {
            let fired = Rc::clone(&fired);
            handle
                .frame_clock()
                .with_frame_nanos(move |_| fired.set(fired.get() + 1))
        };
        handle.drain_frame_callbacks(frame);
        drop(registration);
    }

    assert_eq!(fired.get(), 100);
    assert!(runtime
        .runtime
        .inner
        .cancelled_frame_callbacks
        .borrow()
        .is_empty());
}

#[test]
fn awaited_frames_leave_no_cancellation_residue() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let result = MutableState::new(0_u64);

    // NextFrame drops its registration from inside the fired callback.
    for frame in 1..=10_u64 {
        let task_result = result.clone();
        let clock = handle.frame_clock();
        handle.spawn_local(async move {
            task_result.set_value(clock.next_frame().await);
        });
        handle.drain_ui();
        handle.drain_frame_callbacks(frame);
        handle.drain_ui();
        assert_eq!(result.get(), frame);
    }

    assert!(runtime
        .runtime
        .inner
        .cancelled_frame_callbacks
        .borrow()
        .is_empty());
}

#[test]
fn cancelling_a_pending_entry_mid_drain_skips_it() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let second_fired = Rc::new(Cell::new(false));

    let second_slot = Rc::new(RefCell::new(None));
    let first = {
        let second_slot = Rc::clone(&second_slot);
        // First callback cancels the second while both are in flight.
        handle
            .frame_clock()
            .with_frame_nanos(move |_| drop(second_slot.borrow_mut().take()))
    };
    let second = {
        let second_fired = Rc::clone(&second_fired);
        handle
            .frame_clock()
            .with_frame_nanos(move |_| second_fired.set(true))
    };
    *second_slot.borrow_mut() = Some(second);

    handle.drain_frame_callbacks(1);
    assert!(!second_fired.get());
    assert!(runtime
        .runtime
        .inner
        .cancelled_frame_callbacks
        .borrow()
        .is_empty());
    drop(first);
}

#[test]
fn callbacks_registered_while_draining_run_next_frame() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let frames = Rc::clone(&frames);
        let clock = handle.frame_clock();
        handle.frame_clock().with_frame_nanos(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            // Re-arm from within the callback; must not fire this frame.
            std::mem::forget(
                clock.with_frame_nanos(move |time| frames.borrow_mut().push(time)),
            );
        })
    };

    handle.drain_frame_callbacks(1);
    assert_eq!(*frames.borrow(), vec![1]);
    handle.drain_frame_callbacks(2);
    assert_eq!(*frames.borrow(), vec![1, 2]);
    drop(registration);
}

#[test]
fn spawn_local_runs_a_future_to_completion() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let result = MutableState::new(0_u32);

    {
        let result = result.clone();
        handle.spawn_local(async move {
            result.set_value(42);
        });
    }

    handle.drain_ui();
    assert_eq!(result.get(), 42);
}

#[test]
fn spawn_local_can_await_the_next_frame() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let result = MutableState::new(0_u64);

    {
        let result = result.clone();
        let clock = handle.frame_clock();
        handle.spawn_local(async move {
            let time = clock.next_frame().await;
            result.set_value(time);
        });
    }

    // First drain parks the future on the frame clock.
    handle.drain_ui();
    assert_eq!(result.get(), 0);

    handle.drain_frame_callbacks(77);
    handle.drain_ui();
    assert_eq!(result.get(), 77);
}

#[test]
fn cancelled_tasks_never_run() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let ran = Rc::new(Cell::new(false));

    let task = {
        let ran = Rc::clone(&ran);
        let clock = handle.frame_clock();
        handle
            .spawn_local(async move {
                clock.next_frame().await;
                ran.set(true);
            })
            .expect("runtime alive")
    };
    task.cancel();

    handle.drain_frame_callbacks(1);
    handle.drain_ui();
    assert!(!ran.get());
}

#[test]
fn enqueue_ui_task_runs_on_drain() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let ran = Rc::new(Cell::new(false));

    {
        let ran = Rc::clone(&ran);
        handle.enqueue_ui_task(Box::new(move || ran.set(true)));
    }
    assert!(handle.has_pending_ui());

    handle.drain_ui();
    assert!(ran.get());
    assert!(!handle.has_pending_ui());
}
