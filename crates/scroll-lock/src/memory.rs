//! In-memory host implementation for testing.
//!
//! Keeps a fake body style, per-node scroll metrics and a record of every
//! side effect the lock core asked for, without touching a browser.

use std::collections::BTreeMap;

use crate::capability::ListenerOptions;
use crate::host::{ScrollHost, ScrollMetrics};

/// Node handle used by [`MemoryHost`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Body style property written by the core
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProperty {
    Overflow,
    PaddingRight,
}

/// In-memory page for testing.
pub struct MemoryHost {
    /// Scroll metrics per node (missing nodes don't scroll)
    metrics: BTreeMap<NodeId, ScrollMetrics>,
    /// Nodes with touch handlers attached, in attach order
    attached: Vec<NodeId>,
    /// Currently registered document listeners
    document_listeners: usize,
    /// Options used by the most recent document listener registration
    last_listener_options: Option<Option<ListenerOptions>>,
    body_overflow: String,
    body_padding_right: String,
    viewport_width: f64,
    document_client_width: f64,
    /// Every body style write, in order
    style_writes: Vec<(StyleProperty, String)>,
    /// Number of flushes requested
    scheduled_flushes: usize,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Create a page with no inline body styles and no scrollbar.
    pub fn new() -> Self {
        Self {
            metrics: BTreeMap::new(),
            attached: Vec::new(),
            document_listeners: 0,
            last_listener_options: None,
            body_overflow: String::new(),
            body_padding_right: String::new(),
            viewport_width: 1280.0,
            document_client_width: 1280.0,
            style_writes: Vec::new(),
            scheduled_flushes: 0,
        }
    }

    /// Set window inner width and document client width.
    pub fn with_viewport(mut self, viewport_width: f64, document_client_width: f64) -> Self {
        self.viewport_width = viewport_width;
        self.document_client_width = document_client_width;
        self
    }

    /// Set the initial inline body overflow and padding-right.
    pub fn with_body_style(mut self, overflow: &str, padding_right: &str) -> Self {
        self.body_overflow = overflow.to_string();
        self.body_padding_right = padding_right.to_string();
        self
    }

    /// Give `node` scroll geometry.
    pub fn set_scroll_metrics(&mut self, node: NodeId, metrics: ScrollMetrics) {
        self.metrics.insert(node, metrics);
    }

    pub fn has_touch_handlers(&self, node: NodeId) -> bool {
        self.attached.contains(&node)
    }

    pub fn attached_nodes(&self) -> &[NodeId] {
        &self.attached
    }

    pub fn document_listeners(&self) -> usize {
        self.document_listeners
    }

    /// Options of the most recent document listener registration.
    pub fn last_listener_options(&self) -> Option<Option<ListenerOptions>> {
        self.last_listener_options
    }

    pub fn style_writes(&self) -> &[(StyleProperty, String)] {
        &self.style_writes
    }

    pub fn scheduled_flushes(&self) -> usize {
        self.scheduled_flushes
    }
}

impl ScrollHost for MemoryHost {
    type Node = NodeId;

    fn scroll_metrics(&self, node: &NodeId) -> ScrollMetrics {
        self.metrics.get(node).copied().unwrap_or_default()
    }

    fn attach_touch_handlers(&mut self, node: &NodeId) {
        if !self.attached.contains(node) {
            self.attached.push(*node);
        }
    }

    fn detach_touch_handlers(&mut self, node: &NodeId) {
        self.attached.retain(|n| n != node);
    }

    fn add_document_touch_listener(&mut self, options: Option<ListenerOptions>) {
        self.document_listeners += 1;
        self.last_listener_options = Some(options);
    }

    fn remove_document_touch_listener(&mut self, _options: Option<ListenerOptions>) {
        self.document_listeners = self.document_listeners.saturating_sub(1);
    }

    fn body_overflow(&self) -> String {
        self.body_overflow.clone()
    }

    fn set_body_overflow(&mut self, value: &str) {
        self.body_overflow = value.to_string();
        self.style_writes
            .push((StyleProperty::Overflow, value.to_string()));
    }

    fn body_padding_right(&self) -> String {
        self.body_padding_right.clone()
    }

    fn set_body_padding_right(&mut self, value: &str) {
        self.body_padding_right = value.to_string();
        self.style_writes
            .push((StyleProperty::PaddingRight, value.to_string()));
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn document_client_width(&self) -> f64 {
        self.document_client_width
    }

    fn schedule_flush(&mut self) {
        self.scheduled_flushes += 1;
    }
}
