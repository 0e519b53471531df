//! Read-only snapshot of lock state

use serde::{Deserialize, Serialize};

/// Snapshot of a [`ScrollLock`](crate::ScrollLock), JSON-serializable for
/// diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatus {
    /// Active locks
    pub locks: usize,
    /// Gesture veto path in use
    pub touch_primary: bool,
    /// Shared document touch-move listener registered
    pub document_listener: bool,
    /// Body overflow currently hidden
    pub overflow_hidden: bool,
    /// Scrollbar gap currently reserved
    pub gap_reserved: bool,
    /// Style writes waiting for the next flush
    pub pending_style_tasks: usize,
}

impl LockStatus {
    /// Page scrolling is suppressed by some mechanism right now.
    pub fn is_suppressing(&self) -> bool {
        self.document_listener || self.overflow_hidden
    }
}
