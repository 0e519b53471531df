//! Platform capabilities
//!
//! Two facts decide how locking behaves: whether listener registration
//! accepts an options object (so the document listener can be explicitly
//! non-passive), and whether the device is touch-primary (gesture veto path
//! instead of overflow suppression). Both are computed once by the host
//! environment and injected into [`ScrollLock`](crate::ScrollLock).

use serde::{Deserialize, Serialize};

/// Capabilities of the hosting environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Listener registration accepts `{ passive }` options
    pub passive_listeners: bool,
    /// Device uses touch as primary input (iOS-family)
    pub touch_primary: bool,
}

impl Capabilities {
    /// Desktop browser with modern listener options.
    pub const fn desktop() -> Self {
        Self {
            passive_listeners: true,
            touch_primary: false,
        }
    }

    /// Touch-primary mobile browser with modern listener options.
    pub const fn touch() -> Self {
        Self {
            passive_listeners: true,
            touch_primary: true,
        }
    }

    /// Options to register the shared document touch-move listener with.
    ///
    /// Returns `None` when the environment only understands the legacy
    /// boolean capture argument.
    pub fn document_listener_options(&self) -> Option<ListenerOptions> {
        self.passive_listeners
            .then_some(ListenerOptions { passive: false })
    }
}

/// Structured listener registration options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Whether the listener promises never to cancel the event
    pub passive: bool,
}

/// Classify a `navigator.platform` string as touch-primary.
///
/// iPhone, iPad and iPod report their own platform names. iPadOS in desktop
/// mode reports `MacIntel`, which is only distinguishable from a Mac by
/// having more than one touch point.
pub fn is_touch_primary_platform(platform: &str, max_touch_points: u32) -> bool {
    let ios = ["iPad", "iPhone", "iPod"]
        .iter()
        .any(|name| platform.contains(name));
    ios || (platform == "MacIntel" && max_touch_points > 1)
}
