//! Gesture tracking state shared by all locked targets

use tracing::debug;

use crate::capability::ListenerOptions;
use crate::host::ScrollHost;

/// Drag origin assumed before any touch-start is recorded
///
/// Sits just above the viewport, so any move reads as a downward drag and a
/// target resting at its top vetoes it.
pub const UNSET_TOUCH_Y: f64 = -1.0;

/// Initial touch Y plus ownership of the shared document listener
///
/// The initial Y is one scalar for every target: whichever locked target saw
/// the latest single-finger touch-start defines the drag origin.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    initial_y: Option<f64>,
    document_listener: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the Y of a single-finger touch-start.
    pub fn record_start(&mut self, client_y: f64) {
        self.initial_y = Some(client_y);
    }

    /// Vertical drag distance since the last recorded touch-start.
    ///
    /// Measured from [`UNSET_TOUCH_Y`] when no touch-start has been seen.
    pub fn delta(&self, client_y: f64) -> f64 {
        client_y - self.initial_y.unwrap_or(UNSET_TOUCH_Y)
    }

    pub fn initial_y(&self) -> Option<f64> {
        self.initial_y
    }

    /// Forget the recorded touch-start.
    pub fn reset(&mut self) {
        self.initial_y = None;
    }

    /// Register the document listener unless it already is.
    ///
    /// Returns `true` if it was registered by this call.
    pub fn acquire_document_listener<H: ScrollHost>(
        &mut self,
        host: &mut H,
        options: Option<ListenerOptions>,
    ) -> bool {
        if self.document_listener {
            return false;
        }
        host.add_document_touch_listener(options);
        self.document_listener = true;
        debug!(?options, "document touchmove listener added");
        true
    }

    /// Remove the document listener if registered.
    ///
    /// Returns `true` if it was removed by this call.
    pub fn release_document_listener<H: ScrollHost>(
        &mut self,
        host: &mut H,
        options: Option<ListenerOptions>,
    ) -> bool {
        if !self.document_listener {
            return false;
        }
        host.remove_document_touch_listener(options);
        self.document_listener = false;
        debug!("document touchmove listener removed");
        true
    }

    pub fn has_document_listener(&self) -> bool {
        self.document_listener
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    #[test]
    fn test_delta() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.delta(50.0), 51.0);
        assert_eq!(tracker.delta(0.0), 1.0);

        tracker.record_start(100.0);
        assert_eq!(tracker.delta(130.0), 30.0);
        assert_eq!(tracker.delta(70.0), -30.0);

        tracker.reset();
        assert_eq!(tracker.initial_y(), None);
        assert_eq!(tracker.delta(130.0), 131.0);
    }

    #[test]
    fn test_listener_acquired_once() {
        let mut host = MemoryHost::new();
        let mut tracker = GestureTracker::new();
        let options = Some(ListenerOptions { passive: false });

        assert!(tracker.acquire_document_listener(&mut host, options));
        assert!(!tracker.acquire_document_listener(&mut host, options));
        assert_eq!(host.document_listeners(), 1);

        assert!(tracker.release_document_listener(&mut host, options));
        assert!(!tracker.release_document_listener(&mut host, options));
        assert_eq!(host.document_listeners(), 0);
    }
}
