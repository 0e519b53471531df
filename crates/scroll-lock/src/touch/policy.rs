//! Veto policy for touch-move events

use tracing::trace;

use super::{TouchSample, TouchVerdict};
use crate::host::ScrollMetrics;
use crate::registry::LockRegistry;

/// Opt-out by any lock's `allow_touch_move` predicate.
fn allowed_by_lock<N>(registry: &LockRegistry<N>, sample: &TouchSample<N>) -> bool {
    sample
        .origin
        .as_ref()
        .is_some_and(|origin| registry.allows_touch_move(origin))
}

/// Decide a single-finger touch-move on a locked target.
///
/// `delta` is the current touch Y minus the Y recorded at touch-start:
/// positive when dragging down (pulling content from above), negative when
/// dragging up. The target may scroll internally, but once its scroll is
/// exhausted in the drag direction the move is vetoed so the rubber-band
/// doesn't bleed into the page.
pub fn evaluate_target_move<N>(
    registry: &LockRegistry<N>,
    sample: &TouchSample<N>,
    target: Option<&ScrollMetrics>,
    delta: f64,
) -> TouchVerdict {
    if allowed_by_lock(registry, sample) {
        return TouchVerdict::Allow;
    }

    if sample.is_multi_touch() {
        return TouchVerdict::Allow;
    }

    if let Some(metrics) = target {
        if metrics.at_top() && delta > 0.0 {
            trace!(delta, "veto: target at top, dragging down");
            return TouchVerdict::Veto;
        }
        if metrics.at_bottom() && delta < 0.0 {
            trace!(delta, "veto: target at bottom, dragging up");
            return TouchVerdict::Veto;
        }
    }

    TouchVerdict::AllowContained
}

/// Decide a touch-move that reached the shared document listener.
///
/// Anything still propagating here was not claimed by a locked target, so
/// only opt-outs and multi-finger gestures (pinch zoom) get through.
pub fn evaluate_document_move<N>(
    registry: &LockRegistry<N>,
    sample: &TouchSample<N>,
) -> TouchVerdict {
    if allowed_by_lock(registry, sample) || sample.is_multi_touch() {
        return TouchVerdict::Allow;
    }
    TouchVerdict::Veto
}
