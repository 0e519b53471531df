//! Host abstraction
//!
//! [`ScrollHost`] is everything the lock core needs from the page: node
//! identity, scroll metrics, the body style surface, listener plumbing and a
//! way to run work on the next macrotask. The browser implementation lives in
//! `scroll-lock-web`; [`MemoryHost`](crate::MemoryHost) backs the tests.

use core::fmt::Debug;

use crate::capability::ListenerOptions;

/// Scroll geometry of a single element, in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset
    pub scroll_top: f64,
    /// Total scrollable content height
    pub scroll_height: f64,
    /// Visible height
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Create metrics from raw values
    pub const fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Scrolled to the very top.
    pub fn at_top(&self) -> bool {
        self.scroll_top == 0.0
    }

    /// Scrolled all the way down (also true for content that doesn't overflow).
    pub fn at_bottom(&self) -> bool {
        self.scroll_height - self.scroll_top <= self.client_height
    }
}

/// Page environment driven by [`ScrollLock`](crate::ScrollLock)
pub trait ScrollHost {
    /// Handle to a DOM node. Equality is node identity.
    type Node: Clone + PartialEq + Debug;

    /// Scroll geometry of `node`.
    fn scroll_metrics(&self, node: &Self::Node) -> ScrollMetrics;

    /// Route touch-start/touch-move on `node` to
    /// [`ScrollLock::touch_start`](crate::ScrollLock::touch_start) and
    /// [`ScrollLock::touch_move`](crate::ScrollLock::touch_move).
    fn attach_touch_handlers(&mut self, node: &Self::Node);

    /// Undo [`attach_touch_handlers`](Self::attach_touch_handlers).
    fn detach_touch_handlers(&mut self, node: &Self::Node);

    /// Register the shared document touch-move listener, routed to
    /// [`ScrollLock::document_touch_move`](crate::ScrollLock::document_touch_move).
    fn add_document_touch_listener(&mut self, options: Option<ListenerOptions>);

    /// Remove the shared document touch-move listener.
    fn remove_document_touch_listener(&mut self, options: Option<ListenerOptions>);

    /// Inline `overflow` of the page body.
    fn body_overflow(&self) -> String;

    /// Write the inline `overflow` of the page body.
    fn set_body_overflow(&mut self, value: &str);

    /// Inline `padding-right` of the page body.
    fn body_padding_right(&self) -> String;

    /// Write the inline `padding-right` of the page body.
    fn set_body_padding_right(&mut self, value: &str);

    /// Window inner width, scrollbar included.
    fn viewport_width(&self) -> f64;

    /// Document element client width, scrollbar excluded.
    fn document_client_width(&self) -> f64;

    /// Arrange for [`ScrollLock::run_deferred`](crate::ScrollLock::run_deferred)
    /// to be called on the next macrotask.
    fn schedule_flush(&mut self);
}
