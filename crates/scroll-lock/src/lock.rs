//! Scroll lock context
//!
//! [`ScrollLock`] owns the registry and all global suppression state for one
//! page. It starts with no locks and no saved styles; [`ScrollLock::unlock_all`]
//! returns it to that state.

use tracing::{debug, error};

use crate::capability::Capabilities;
use crate::error::{ScrollLockError, ScrollLockResult};
use crate::host::ScrollHost;
use crate::options::{GapCallback, LockOptions};
use crate::overflow::OverflowController;
use crate::registry::{Lock, LockRegistry};
use crate::status::LockStatus;
use crate::touch::{
    evaluate_document_move, evaluate_target_move, GestureTracker, TouchSample, TouchVerdict,
};

/// Body scroll lock for one page
///
/// Touch-primary devices get the gesture veto path, everything else gets
/// overflow suppression. The choice is fixed by the [`Capabilities`] passed
/// at construction.
///
/// ```rust
/// use scroll_lock::{Capabilities, LockOptions, MemoryHost, NodeId, ScrollHost, ScrollLock};
///
/// let mut scroll = ScrollLock::new(MemoryHost::new(), Capabilities::desktop());
/// scroll.lock(Some(NodeId(1)), LockOptions::default(), None).unwrap();
/// scroll.run_deferred();
/// assert_eq!(scroll.host().body_overflow(), "hidden");
///
/// scroll.unlock(Some(&NodeId(1)), None).unwrap();
/// scroll.run_deferred();
/// assert_eq!(scroll.host().body_overflow(), "");
/// ```
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    capabilities: Capabilities,
    registry: LockRegistry<H::Node>,
    overflow: OverflowController,
    gesture: GestureTracker,
}

impl<H: ScrollHost> ScrollLock<H> {
    /// Create an idle lock context over `host`.
    pub fn new(host: H, capabilities: Capabilities) -> Self {
        Self {
            host,
            capabilities,
            registry: LockRegistry::new(),
            overflow: OverflowController::new(),
            gesture: GestureTracker::new(),
        }
    }

    /// Prevent the page from scrolling while `target` stays scrollable.
    ///
    /// On touch-primary devices `target` is required; without it the call
    /// logs and returns [`ScrollLockError::InvalidArgument`] and nothing
    /// changes. Elsewhere `target` is only an identity for the matching
    /// [`unlock`](Self::unlock). Locking an already locked target is a no-op.
    ///
    /// `on_gap` is told the reserved scrollbar gap once body styles are
    /// applied (non-touch path with `reserve_scroll_bar_gap` only).
    pub fn lock(
        &mut self,
        target: Option<H::Node>,
        options: LockOptions<H::Node>,
        on_gap: Option<GapCallback>,
    ) -> ScrollLockResult<()> {
        if self.capabilities.touch_primary {
            let Some(target) = target else {
                return Err(Self::report(ScrollLockError::missing_target("lock")));
            };
            if self.registry.contains(Some(&target)) {
                return Ok(());
            }

            self.host.attach_touch_handlers(&target);
            self.registry.add(Lock::new(Some(target), options));
            self.gesture.acquire_document_listener(
                &mut self.host,
                self.capabilities.document_listener_options(),
            );
        } else {
            let reserve_gap = options.reserves_scroll_bar_gap();
            if self.registry.add(Lock::new(target, options)) {
                self.overflow.suppress(&mut self.host, reserve_gap, on_gap);
            }
        }

        debug!(locks = self.registry.len(), "scroll locked");
        Ok(())
    }

    /// Release the lock on `target`.
    ///
    /// Unknown targets are ignored. Global suppression is released once the
    /// last lock goes away. Same `target` requirement as [`lock`](Self::lock).
    pub fn unlock(
        &mut self,
        target: Option<&H::Node>,
        on_gap: Option<GapCallback>,
    ) -> ScrollLockResult<()> {
        if self.capabilities.touch_primary {
            let Some(target) = target else {
                return Err(Self::report(ScrollLockError::missing_target("unlock")));
            };
            if self.registry.remove(Some(target)).is_some() {
                self.host.detach_touch_handlers(target);
            }
            if self.registry.is_empty() {
                self.gesture.release_document_listener(
                    &mut self.host,
                    self.capabilities.document_listener_options(),
                );
            }
        } else if self.registry.remove(target).is_some() && self.registry.is_empty() {
            self.overflow.restore(&mut self.host, on_gap);
        }

        debug!(locks = self.registry.len(), "scroll unlocked");
        Ok(())
    }

    /// Release every lock and all global suppression.
    pub fn unlock_all(&mut self, on_gap: Option<GapCallback>) {
        if self.capabilities.touch_primary {
            for lock in self.registry.clear() {
                if let Some(target) = lock.target.as_ref() {
                    self.host.detach_touch_handlers(target);
                }
            }
            self.gesture.release_document_listener(
                &mut self.host,
                self.capabilities.document_listener_options(),
            );
            self.gesture.reset();
        } else {
            self.overflow.restore(&mut self.host, on_gap);
            self.registry.clear();
        }

        debug!("all scroll locks cleared");
    }

    /// Touch-start routed from a locked target.
    pub fn touch_start(&mut self, target: &H::Node, sample: &TouchSample<H::Node>) {
        if !self.registry.contains(Some(target)) {
            return;
        }
        if sample.is_single_target_touch() {
            self.gesture.record_start(sample.client_y);
        }
    }

    /// Touch-move routed from a locked target.
    pub fn touch_move(&mut self, target: &H::Node, sample: &TouchSample<H::Node>) -> TouchVerdict {
        if !self.registry.contains(Some(target)) || !sample.is_single_target_touch() {
            return TouchVerdict::Allow;
        }
        let metrics = self.host.scroll_metrics(target);
        let delta = self.gesture.delta(sample.client_y);
        evaluate_target_move(&self.registry, sample, Some(&metrics), delta)
    }

    /// Touch-move that reached the shared document listener.
    pub fn document_touch_move(&self, sample: &TouchSample<H::Node>) -> TouchVerdict {
        if !self.gesture.has_document_listener() {
            return TouchVerdict::Allow;
        }
        evaluate_document_move(&self.registry, sample)
    }

    /// Run deferred body style writes. Hosts call this from the flush they
    /// scheduled; returns how many writes ran.
    pub fn run_deferred(&mut self) -> usize {
        self.overflow.flush(&mut self.host)
    }

    fn report(err: ScrollLockError) -> ScrollLockError {
        error!(%err, "scroll lock request rejected");
        err
    }

    pub fn is_locked(&self, target: Option<&H::Node>) -> bool {
        self.registry.contains(target)
    }

    pub fn lock_count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &LockRegistry<H::Node> {
        &self.registry
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Initial touch Y shared by all targets, if a touch-start was recorded.
    pub fn initial_touch_y(&self) -> Option<f64> {
        self.gesture.initial_y()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Snapshot current state.
    pub fn status(&self) -> LockStatus {
        LockStatus {
            locks: self.registry.len(),
            touch_primary: self.capabilities.touch_primary,
            document_listener: self.gesture.has_document_listener(),
            overflow_hidden: self.overflow.overflow_hidden(),
            gap_reserved: self.overflow.gap_reserved(),
            pending_style_tasks: self.overflow.pending(),
        }
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod lock_tests;
