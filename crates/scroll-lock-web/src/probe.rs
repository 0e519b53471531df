//! Capability probe for the hosting browser
//!
//! Runs once when the page-wide lock is first used; the result is injected
//! into the [`ScrollLock`](scroll_lock::ScrollLock) and never re-evaluated.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use scroll_lock::{is_touch_primary_platform, Capabilities};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventListenerOptions, Window};

/// Detect the capabilities of the current browser.
///
/// Outside a window context (workers, server-side) nothing is supported.
pub fn probe() -> Capabilities {
    let Some(window) = web_sys::window() else {
        return Capabilities::default();
    };
    Capabilities {
        passive_listeners: supports_passive_listeners(&window),
        touch_primary: is_touch_primary(&window),
    }
}

fn is_touch_primary(window: &Window) -> bool {
    let navigator = window.navigator();
    let platform = navigator.platform().unwrap_or_default();
    let max_touch_points = u32::try_from(navigator.max_touch_points()).unwrap_or(0);
    is_touch_primary_platform(&platform, max_touch_points)
}

/// Browsers that understand listener options read the `passive` key while
/// registering; older ones treat the whole object as the capture flag and
/// never touch it.
fn supports_passive_listeners(window: &Window) -> bool {
    let detected = Rc::new(Cell::new(false));
    let flag = detected.clone();
    let getter = Closure::<dyn Fn() -> JsValue>::new(move || {
        flag.set(true);
        JsValue::UNDEFINED
    });

    let descriptor = Object::new();
    if Reflect::set(&descriptor, &"get".into(), getter.as_ref()).is_err() {
        return false;
    }
    let options = Object::new();
    Object::define_property(&options, &"passive".into(), &descriptor);
    let options: AddEventListenerOptions = options.unchecked_into();

    let noop = Closure::<dyn Fn()>::new(|| {});
    let callback = noop.as_ref().unchecked_ref();
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "testPassive",
        callback,
        &options,
    );
    let _ = window.remove_event_listener_with_callback_and_event_listener_options(
        "testPassive",
        callback,
        options.unchecked_ref::<EventListenerOptions>(),
    );

    detected.get()
}
