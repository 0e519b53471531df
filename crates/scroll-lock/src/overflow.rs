//! Overflow suppression for non-touch devices
//!
//! Hides body overflow (and optionally reserves the scrollbar gap with
//! right padding) while at least one lock is held. Style writes are queued
//! and run on the next macrotask: writing body styles synchronously inside
//! the triggering event makes desktop Safari noticeably less responsive.
//!
//! Saved values double as the "applied" flags, so queuing several
//! suppressions (one per stacked lock) applies styles exactly once, and a
//! restore with nothing saved touches nothing.

use std::collections::VecDeque;

use tracing::debug;

use crate::host::ScrollHost;
use crate::options::GapCallback;

/// Deferred body style operation
pub(crate) enum StyleTask {
    Suppress {
        reserve_gap: bool,
        on_gap: Option<GapCallback>,
    },
    Restore {
        on_gap: Option<GapCallback>,
    },
}

/// Saved body styles and the queue of pending style writes
#[derive(Default)]
pub struct OverflowController {
    /// Body overflow before suppression, `Some` while hidden
    previous_overflow: Option<String>,
    /// Body padding-right before gap reservation, `Some` while reserved
    previous_padding_right: Option<String>,
    pending: VecDeque<StyleTask>,
}

impl OverflowController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue body scroll suppression.
    pub fn suppress<H: ScrollHost>(
        &mut self,
        host: &mut H,
        reserve_gap: bool,
        on_gap: Option<GapCallback>,
    ) {
        self.enqueue(
            host,
            StyleTask::Suppress {
                reserve_gap,
                on_gap,
            },
        );
    }

    /// Queue restoration of the saved body styles.
    pub fn restore<H: ScrollHost>(&mut self, host: &mut H, on_gap: Option<GapCallback>) {
        self.enqueue(host, StyleTask::Restore { on_gap });
    }

    fn enqueue<H: ScrollHost>(&mut self, host: &mut H, task: StyleTask) {
        let was_idle = self.pending.is_empty();
        self.pending.push_back(task);
        if was_idle {
            host.schedule_flush();
        }
    }

    /// Run queued style writes in order. Returns how many ran.
    pub fn flush<H: ScrollHost>(&mut self, host: &mut H) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pending.pop_front() {
            match task {
                StyleTask::Suppress {
                    reserve_gap,
                    on_gap,
                } => self.apply_suppress(host, reserve_gap, on_gap),
                StyleTask::Restore { on_gap } => self.apply_restore(host, on_gap),
            }
            ran += 1;
        }
        ran
    }

    fn apply_suppress<H: ScrollHost>(
        &mut self,
        host: &mut H,
        reserve_gap: bool,
        mut on_gap: Option<GapCallback>,
    ) {
        if self.previous_padding_right.is_none() {
            let gap = host.viewport_width() - host.document_client_width();
            if reserve_gap && gap > 0.0 {
                self.previous_padding_right = Some(host.body_padding_right());
                host.set_body_padding_right(&format!("{}px", gap));
                debug!(gap, "reserved scrollbar gap");
                if let Some(callback) = on_gap.as_mut() {
                    callback(gap);
                }
            }
        }

        if self.previous_overflow.is_none() {
            self.previous_overflow = Some(host.body_overflow());
            host.set_body_overflow("hidden");
            debug!("body overflow hidden");
        }
    }

    fn apply_restore<H: ScrollHost>(&mut self, host: &mut H, mut on_gap: Option<GapCallback>) {
        if let Some(padding) = self.previous_padding_right.take() {
            host.set_body_padding_right(&padding);
            if let Some(callback) = on_gap.as_mut() {
                callback(0.0);
            }
            debug!("released scrollbar gap");
        }

        if let Some(overflow) = self.previous_overflow.take() {
            host.set_body_overflow(&overflow);
            debug!("body overflow restored");
        }
    }

    /// Body overflow is currently hidden by us.
    pub fn overflow_hidden(&self) -> bool {
        self.previous_overflow.is_some()
    }

    /// Scrollbar gap is currently reserved by us.
    pub fn gap_reserved(&self) -> bool {
        self.previous_padding_right.is_some()
    }

    /// Number of style writes waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, GapCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |gap: f64| sink.borrow_mut().push(gap)))
    }

    #[test]
    fn test_suppress_is_deferred() {
        let mut host = MemoryHost::new();
        let mut overflow = OverflowController::new();

        overflow.suppress(&mut host, false, None);
        assert_eq!(host.body_overflow(), "");
        assert_eq!(host.scheduled_flushes(), 1);
        assert_eq!(overflow.pending(), 1);

        assert_eq!(overflow.flush(&mut host), 1);
        assert_eq!(host.body_overflow(), "hidden");
        assert!(overflow.overflow_hidden());
    }

    #[test]
    fn test_one_flush_scheduled_per_batch() {
        let mut host = MemoryHost::new();
        let mut overflow = OverflowController::new();

        overflow.suppress(&mut host, false, None);
        overflow.suppress(&mut host, false, None);
        overflow.restore(&mut host, None);
        assert_eq!(host.scheduled_flushes(), 1);

        overflow.flush(&mut host);
        overflow.suppress(&mut host, false, None);
        assert_eq!(host.scheduled_flushes(), 2);
    }

    #[test]
    fn test_repeated_suppress_saves_original_once() {
        let mut host = MemoryHost::new().with_body_style("scroll", "4px");
        let mut overflow = OverflowController::new();

        overflow.suppress(&mut host, false, None);
        overflow.suppress(&mut host, false, None);
        overflow.flush(&mut host);

        overflow.restore(&mut host, None);
        overflow.flush(&mut host);
        assert_eq!(host.body_overflow(), "scroll");
        assert_eq!(host.body_padding_right(), "4px");
        assert!(!overflow.overflow_hidden());
    }

    #[test]
    fn test_gap_reservation() {
        let mut host = MemoryHost::new()
            .with_viewport(1024.0, 1009.0)
            .with_body_style("", "2px");
        let mut overflow = OverflowController::new();
        let (seen, callback) = recorder();

        overflow.suppress(&mut host, true, Some(callback));
        overflow.flush(&mut host);
        assert_eq!(host.body_padding_right(), "15px");
        assert!(overflow.gap_reserved());
        assert_eq!(*seen.borrow(), vec![15.0]);

        let (seen, callback) = recorder();
        overflow.restore(&mut host, Some(callback));
        overflow.flush(&mut host);
        assert_eq!(host.body_padding_right(), "2px");
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn test_no_gap_without_scrollbar() {
        let mut host = MemoryHost::new().with_viewport(1024.0, 1024.0);
        let mut overflow = OverflowController::new();
        let (seen, callback) = recorder();

        overflow.suppress(&mut host, true, Some(callback));
        overflow.flush(&mut host);
        assert!(!overflow.gap_reserved());
        assert!(seen.borrow().is_empty());
        assert_eq!(host.body_overflow(), "hidden");

        // Nothing saved, so restore must not report a gap either
        let (seen, callback) = recorder();
        overflow.restore(&mut host, Some(callback));
        overflow.flush(&mut host);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_gap_not_reserved_unless_requested() {
        let mut host = MemoryHost::new().with_viewport(1024.0, 1009.0);
        let mut overflow = OverflowController::new();

        overflow.suppress(&mut host, false, None);
        overflow.flush(&mut host);
        assert!(!overflow.gap_reserved());
        assert_eq!(host.body_padding_right(), "");
    }

    #[test]
    fn test_restore_without_suppress_is_noop() {
        let mut host = MemoryHost::new().with_body_style("auto", "");
        let mut overflow = OverflowController::new();

        overflow.restore(&mut host, None);
        overflow.flush(&mut host);
        assert_eq!(host.body_overflow(), "auto");
        assert!(host.style_writes().is_empty());
    }
}
