//! Lock options read from a plain JS object
//!
//! ```js
//! disableBodyScroll(modal, {
//!   reserveScrollBarGap: true,
//!   allowTouchMove: (el) => el.closest('.map') !== null,
//! });
//! ```

use js_sys::{Function, Reflect};
use scroll_lock::LockOptions;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::console;

const RESERVE_SCROLL_BAR_GAP: &str = "reserveScrollBarGap";
const ALLOW_TOUCH_MOVE: &str = "allowTouchMove";

/// Build [`LockOptions`] from `value`.
///
/// `undefined`, `null` and non-objects give the defaults. Only a literal
/// `true` enables gap reservation; `allowTouchMove` must be a function.
pub fn parse_lock_options(value: &JsValue) -> LockOptions<Element> {
    let mut options = LockOptions::default();
    if !value.is_object() {
        return options;
    }

    if let Ok(reserve) = Reflect::get(value, &JsValue::from_str(RESERVE_SCROLL_BAR_GAP)) {
        options = options.reserve_scroll_bar_gap(reserve.as_bool() == Some(true));
    }

    match Reflect::get(value, &JsValue::from_str(ALLOW_TOUCH_MOVE)) {
        Ok(predicate) if predicate.is_function() => {
            let predicate: Function = predicate.unchecked_into();
            options = options.allow_touch_move(move |el: &Element| {
                match predicate.call1(&JsValue::NULL, el.as_ref()) {
                    Ok(result) => result.is_truthy(),
                    Err(err) => {
                        console::warn_js("allowTouchMove threw, treating as false", &err);
                        false
                    }
                }
            });
        }
        Ok(predicate) if !predicate.is_undefined() && !predicate.is_null() => {
            console::warn("allowTouchMove is not a function, ignoring");
        }
        _ => {}
    }

    options
}
