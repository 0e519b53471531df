//! Browser console output
//!
//! The wasm build has no log subscriber, so everything the adapter wants a
//! developer to see goes straight to the console.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

const PREFIX: &str = "[scroll-lock]";

pub fn warn(msg: &str) {
    console_warn(&format!("{PREFIX} {msg}"));
}

/// Report a JS exception raised by a browser call.
pub fn warn_js(msg: &str, err: &JsValue) {
    console_warn(&format!("{PREFIX} {msg}: {err:?}"));
}

/// Unprefixed, so messages keep the wording of the JS library.
pub fn error(msg: &str) {
    console_error(msg);
}
