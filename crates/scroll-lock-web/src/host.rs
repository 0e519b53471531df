//! DOM-backed scroll host
//!
//! Touch listeners registered here route into the page-wide lock held by
//! [`runtime`](crate::runtime), so a `WebHost` is only meaningful as the host
//! of that lock.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use scroll_lock::{ListenerOptions, ScrollHost, ScrollMetrics, TouchSample, TouchVerdict};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, TouchEvent, Window};

use crate::console;
use crate::runtime::with_scroll_lock;

/// Registered shared `touchmove` listener on the document
///
/// Unregisters on drop, before the closure it hands to the browser is freed.
struct DocumentListener {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        // Only the capture flag matters for removal, and it is never set
        if let Err(err) = self.document.remove_event_listener_with_callback(
            "touchmove",
            self.callback.as_ref().unchecked_ref(),
        ) {
            console::warn_js("document touchmove listener removal rejected", &err);
        }
    }
}

/// Scroll host over the live browser document
pub struct WebHost {
    window: Window,
    document: Document,
    /// Locked elements and their touchstart/touchmove listeners
    ///
    /// Like `document_listener`, these unregister when the host is dropped.
    targets: Vec<(Element, [EventListener; 2])>,
    document_listener: Option<DocumentListener>,
}

impl WebHost {
    /// Host for the current window, if there is one.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            targets: Vec::new(),
            document_listener: None,
        })
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn body_style(&self, property: &str) -> String {
        self.body()
            .and_then(|body| body.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_body_style(&self, property: &str, value: &str) {
        let Some(body) = self.body() else {
            console::warn(&format!("no document body to set {property} on"));
            return;
        };
        if let Err(err) = body.style().set_property(property, value) {
            console::warn_js(&format!("body style {property}: {value} rejected"), &err);
        }
    }
}

/// Read the fields the lock policy needs from a native touch event.
pub fn touch_sample(event: &TouchEvent) -> TouchSample<Element> {
    let target_touches = event.target_touches();
    let client_y = target_touches
        .get(0)
        .map_or(0.0, |touch| f64::from(touch.client_y()));
    TouchSample {
        origin: event.target().and_then(|t| t.dyn_into::<Element>().ok()),
        touches: event.touches().length(),
        target_touches: target_touches.length(),
        client_y,
    }
}

fn apply_verdict(event: &Event, verdict: TouchVerdict) {
    if verdict.prevents_default() {
        event.prevent_default();
    }
    if verdict.stops_propagation() {
        event.stop_propagation();
    }
}

impl ScrollHost for WebHost {
    type Node = Element;

    fn scroll_metrics(&self, node: &Element) -> ScrollMetrics {
        ScrollMetrics::new(
            f64::from(node.scroll_top()),
            f64::from(node.scroll_height()),
            f64::from(node.client_height()),
        )
    }

    fn attach_touch_handlers(&mut self, node: &Element) {
        if self.targets.iter().any(|(target, _)| target == node) {
            return;
        }

        let target = node.clone();
        let start = EventListener::new(node, "touchstart", move |event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let sample = touch_sample(touch);
            with_scroll_lock(|lock| lock.touch_start(&target, &sample));
        });

        let target = node.clone();
        let movement = EventListener::new_with_options(
            node,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let sample = touch_sample(touch);
                if let Some(verdict) = with_scroll_lock(|lock| lock.touch_move(&target, &sample)) {
                    apply_verdict(event, verdict);
                }
            },
        );

        self.targets.push((node.clone(), [start, movement]));
    }

    fn detach_touch_handlers(&mut self, node: &Element) {
        // Dropping the gloo listeners unregisters them
        self.targets.retain(|(target, _)| target != node);
    }

    fn add_document_touch_listener(&mut self, options: Option<ListenerOptions>) {
        if self.document_listener.is_some() {
            return;
        }

        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let sample = touch_sample(touch);
            if let Some(verdict) = with_scroll_lock(|lock| lock.document_touch_move(&sample)) {
                apply_verdict(&event, verdict);
            }
        });

        let function = callback.as_ref().unchecked_ref();
        let registered = match options {
            Some(options) => {
                let init = web_sys::AddEventListenerOptions::new();
                init.set_passive(options.passive);
                self.document
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "touchmove",
                        function,
                        &init,
                    )
            }
            None => self
                .document
                .add_event_listener_with_callback("touchmove", function),
        };

        match registered {
            Ok(()) => {
                self.document_listener = Some(DocumentListener {
                    document: self.document.clone(),
                    callback,
                })
            }
            Err(err) => console::warn_js("document touchmove listener rejected", &err),
        }
    }

    fn remove_document_touch_listener(&mut self, _options: Option<ListenerOptions>) {
        // Dropping the listener unregisters it
        self.document_listener = None;
    }

    fn body_overflow(&self) -> String {
        self.body_style("overflow")
    }

    fn set_body_overflow(&mut self, value: &str) {
        self.set_body_style("overflow", value);
    }

    fn body_padding_right(&self) -> String {
        self.body_style("padding-right")
    }

    fn set_body_padding_right(&mut self, value: &str) {
        self.set_body_style("padding-right", value);
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn document_client_width(&self) -> f64 {
        self.document
            .document_element()
            .map_or(0.0, |root| f64::from(root.client_width()))
    }

    fn schedule_flush(&mut self) {
        Timeout::new(0, || {
            with_scroll_lock(|lock| lock.run_deferred());
        })
        .forget();
    }
}
