//! Page-wide lock singleton
//!
//! Every exported entry point and every DOM listener goes through this
//! module. JS callbacks are never invoked while the lock is borrowed; gap
//! notifications are queued and delivered after the borrow ends, so a
//! callback may itself call back into the library.
//!
//! JS code that runs *during* a lock operation (an `allowTouchMove`
//! predicate) can still re-enter. Lock and unlock requests made from there
//! are queued and run as soon as the outer operation finishes.

use std::cell::RefCell;
use std::collections::VecDeque;

use js_sys::Function;
use scroll_lock::{GapCallback, ScrollLock};
use wasm_bindgen::JsValue;

use crate::console;
use crate::host::WebHost;
use crate::probe::probe;

type DeferredCall = Box<dyn FnOnce(&mut ScrollLock<WebHost>)>;

thread_local! {
    static SCROLL_LOCK: RefCell<Option<ScrollLock<WebHost>>> = const { RefCell::new(None) };
    static DEFERRED_CALLS: RefCell<VecDeque<DeferredCall>> =
        const { RefCell::new(VecDeque::new()) };
    static GAP_NOTIFICATIONS: RefCell<VecDeque<(Function, f64)>> =
        const { RefCell::new(VecDeque::new()) };
}

/// Run `f` against the page-wide lock, creating it on first use.
///
/// Returns `None` when there is no document to lock or when called
/// re-entrantly from inside another lock operation.
pub fn with_scroll_lock<R>(f: impl FnOnce(&mut ScrollLock<WebHost>) -> R) -> Option<R> {
    let result = SCROLL_LOCK.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            console::warn("scroll lock re-entered, ignoring call");
            return None;
        };
        if slot.is_none() {
            let host = WebHost::new()?;
            *slot = Some(ScrollLock::new(host, probe()));
        }
        let lock = slot.as_mut()?;
        let result = f(lock);
        run_deferred_calls(lock);
        Some(result)
    });
    deliver_gap_notifications();
    result
}

/// Run `f` now, or right after the operation in progress if the lock is
/// busy. Never drops the call.
pub fn run_or_defer(f: impl FnOnce(&mut ScrollLock<WebHost>) + 'static) {
    let busy = SCROLL_LOCK.with(|cell| cell.try_borrow_mut().is_err());
    if busy {
        DEFERRED_CALLS.with(|queue| queue.borrow_mut().push_back(Box::new(f)));
        return;
    }
    with_scroll_lock(f);
}

fn run_deferred_calls(lock: &mut ScrollLock<WebHost>) {
    loop {
        let next = DEFERRED_CALLS.with(|queue| queue.borrow_mut().pop_front());
        let Some(call) = next else {
            break;
        };
        call(lock);
    }
}

/// Wrap a JS callback so it receives the reserved gap after the lock is
/// released.
pub fn gap_callback(callback: Option<Function>) -> Option<GapCallback> {
    let callback = callback?;
    Some(Box::new(move |gap: f64| {
        GAP_NOTIFICATIONS.with(|queue| queue.borrow_mut().push_back((callback.clone(), gap)));
    }))
}

fn deliver_gap_notifications() {
    loop {
        let next = GAP_NOTIFICATIONS.with(|queue| queue.borrow_mut().pop_front());
        let Some((callback, gap)) = next else {
            break;
        };
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_f64(gap)) {
            console::warn_js("scroll bar gap callback threw", &err);
        }
    }
}

/// Drop the page-wide lock, unregistering every DOM listener it holds.
///
/// Body styles are left as they are; call `clearAllBodyScrollLocks` first to
/// restore them.
pub fn reset() {
    SCROLL_LOCK.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => *slot = None,
        Err(_) => console::warn("scroll lock reset while in use, ignoring"),
    });
    DEFERRED_CALLS.with(|queue| queue.borrow_mut().clear());
    GAP_NOTIFICATIONS.with(|queue| queue.borrow_mut().clear());
}
