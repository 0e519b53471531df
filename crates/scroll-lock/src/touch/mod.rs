//! Touch gesture interception
//!
//! On touch-primary devices `overflow: hidden` on the body does not stop the
//! page from scrolling, so locking works on the gesture stream instead:
//!
//! - every locked target tracks single-finger touch-start/touch-move and lets
//!   its own content scroll until it hits a boundary in the drag direction
//! - one shared document listener vetoes every other single-finger move
//!
//! Events the target lets through stop propagating, so the document listener
//! only sees moves that no locked target claimed.

mod gesture;
mod policy;

pub use gesture::{GestureTracker, UNSET_TOUCH_Y};
pub use policy::{evaluate_document_move, evaluate_target_move};

/// The parts of a native touch event the policy looks at
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample<N> {
    /// Node the event was dispatched to
    pub origin: Option<N>,
    /// Active touch points on the whole surface
    pub touches: u32,
    /// Active touch points that started on the listening element
    pub target_touches: u32,
    /// Vertical client coordinate of the first target touch
    pub client_y: f64,
}

impl<N> TouchSample<N> {
    /// One finger on `origin` at `client_y`.
    pub fn single(origin: Option<N>, client_y: f64) -> Self {
        Self {
            origin,
            touches: 1,
            target_touches: 1,
            client_y,
        }
    }

    /// `fingers` fingers, all started on the listening element.
    pub fn multi(origin: Option<N>, fingers: u32, client_y: f64) -> Self {
        Self {
            origin,
            touches: fingers,
            target_touches: fingers,
            client_y,
        }
    }

    pub fn is_single_target_touch(&self) -> bool {
        self.target_touches == 1
    }

    pub fn is_multi_touch(&self) -> bool {
        self.touches > 1
    }
}

/// What the host should do with a touch-move event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchVerdict {
    /// Let the browser handle it; keep propagating
    Allow,
    /// Let the browser scroll the target but stop propagation so the document
    /// listener leaves it alone
    AllowContained,
    /// Cancel the native scroll (`preventDefault`)
    Veto,
}

impl TouchVerdict {
    pub fn prevents_default(&self) -> bool {
        matches!(self, TouchVerdict::Veto)
    }

    pub fn stops_propagation(&self) -> bool {
        matches!(self, TouchVerdict::AllowContained)
    }
}
