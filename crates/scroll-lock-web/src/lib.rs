//! Browser bindings for scroll-lock
//!
//! Exposes the page-wide lock to JavaScript:
//!
//! ```js
//! import { disableBodyScroll, enableBodyScroll, clearAllBodyScrollLocks } from 'scroll-lock-web';
//!
//! disableBodyScroll(modal, { reserveScrollBarGap: true }, (gap) => header.style.paddingRight = `${gap}px`);
//! enableBodyScroll(modal);
//! clearAllBodyScrollLocks();
//! ```
//!
//! The capability probe runs on the first call. All calls on one page share
//! a single registry.

pub mod console;
pub mod host;
pub mod options;
pub mod probe;
pub mod runtime;

pub use host::{touch_sample, WebHost};
pub use options::parse_lock_options;
pub use probe::probe;

use js_sys::Function;
use scroll_lock::{ScrollLockError, ScrollLockResult};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use runtime::{gap_callback, run_or_defer, with_scroll_lock};

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Lock body scrolling while keeping `target` scrollable.
///
/// `options` is `{ reserveScrollBarGap?, allowTouchMove? }`. `callback`
/// receives the reserved scrollbar gap once body styles are applied.
///
/// Called from inside an `allowTouchMove` predicate, the lock is applied as
/// soon as the current touch event has been handled.
#[wasm_bindgen(js_name = disableBodyScroll)]
pub fn disable_body_scroll(target: Option<Element>, options: JsValue, callback: Option<Function>) {
    let options = parse_lock_options(&options);
    let on_gap = gap_callback(callback);
    run_or_defer(move |lock| report("disableBodyScroll", lock.lock(target, options, on_gap)));
}

/// Release the lock on `target`. `callback` receives 0 once styles are restored.
#[wasm_bindgen(js_name = enableBodyScroll)]
pub fn enable_body_scroll(target: Option<Element>, callback: Option<Function>) {
    let on_gap = gap_callback(callback);
    run_or_defer(move |lock| report("enableBodyScroll", lock.unlock(target.as_ref(), on_gap)));
}

/// Release every lock on the page.
#[wasm_bindgen(js_name = clearAllBodyScrollLocks)]
pub fn clear_all_body_scroll_locks(callback: Option<Function>) {
    let on_gap = gap_callback(callback);
    run_or_defer(move |lock| lock.unlock_all(on_gap));
}

/// Current lock state as a JSON string.
#[wasm_bindgen(js_name = scrollLockStatus)]
pub fn scroll_lock_status() -> String {
    with_scroll_lock(|lock| lock.status())
        .and_then(|status| serde_json::to_string(&status).ok())
        .unwrap_or_else(|| String::from("null"))
}

/// Capabilities detected for this browser as a JSON string.
#[wasm_bindgen(js_name = scrollLockCapabilities)]
pub fn scroll_lock_capabilities() -> String {
    with_scroll_lock(|lock| lock.capabilities())
        .and_then(|capabilities| serde_json::to_string(&capabilities).ok())
        .unwrap_or_else(|| String::from("null"))
}

/// Forget the page-wide lock and re-probe on next use.
#[wasm_bindgen(js_name = resetScrollLock)]
pub fn reset_scroll_lock() {
    console::log("[scroll-lock] reset");
    runtime::reset();
}

fn report(export: &str, result: ScrollLockResult<()>) {
    if let Err(err) = result {
        console::error(&console_message(export, &err));
    }
}

/// Console text for a rejected call, in the wording the JS library uses.
pub fn console_message(export: &str, err: &ScrollLockError) -> String {
    match err {
        ScrollLockError::InvalidArgument { .. } => format!(
            "{export} unsuccessful - targetElement must be provided when calling {export} on IOS devices."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_message_names_the_export() {
        let err = ScrollLockError::InvalidArgument {
            op: "lock",
            reason: "targetElement must be provided on touch-primary devices",
        };
        assert_eq!(
            console_message("disableBodyScroll", &err),
            "disableBodyScroll unsuccessful - targetElement must be provided when calling disableBodyScroll on IOS devices."
        );
    }
}
