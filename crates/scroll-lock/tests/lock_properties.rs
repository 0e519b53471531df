//! Property tests for lock/unlock sequences.
//!
//! Arbitrary interleavings of lock, unlock, unlock-all and flush are checked
//! against a plain set of locked targets.

use std::collections::BTreeSet;

use proptest::prelude::*;
use scroll_lock::{Capabilities, LockOptions, MemoryHost, NodeId, ScrollHost, ScrollLock};

#[derive(Clone, Debug)]
enum Op {
    Lock(u32),
    Unlock(u32),
    UnlockAll,
    Flush,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u32..6).prop_map(Op::Lock),
        3 => (0u32..6).prop_map(Op::Unlock),
        1 => Just(Op::UnlockAll),
        2 => Just(Op::Flush),
    ]
}

fn apply(scroll: &mut ScrollLock<MemoryHost>, model: &mut BTreeSet<u32>, op: &Op) {
    match op {
        Op::Lock(id) => {
            scroll
                .lock(Some(NodeId(*id)), LockOptions::default(), None)
                .unwrap();
            model.insert(*id);
        }
        Op::Unlock(id) => {
            scroll.unlock(Some(&NodeId(*id)), None).unwrap();
            model.remove(id);
        }
        Op::UnlockAll => {
            scroll.unlock_all(None);
            model.clear();
        }
        Op::Flush => {
            scroll.run_deferred();
        }
    }
}

proptest! {
    /// Desktop: registry mirrors the model, overflow is hidden iff locked
    #[test]
    fn desktop_suppression_tracks_registry(ops in prop::collection::vec(op(), 0..40)) {
        let host = MemoryHost::new()
            .with_viewport(1280.0, 1263.0)
            .with_body_style("scroll", "3px");
        let mut scroll = ScrollLock::new(host, Capabilities::desktop());
        let mut model = BTreeSet::new();

        for op in &ops {
            apply(&mut scroll, &mut model, op);
            prop_assert_eq!(scroll.lock_count(), model.len());
        }

        scroll.run_deferred();
        prop_assert_eq!(scroll.status().overflow_hidden, !model.is_empty());
        if model.is_empty() {
            prop_assert_eq!(scroll.host().body_overflow(), "scroll");
            prop_assert_eq!(scroll.host().body_padding_right(), "3px");
        } else {
            prop_assert_eq!(scroll.host().body_overflow(), "hidden");
        }

        // Full release always gets back to the original page
        scroll.unlock_all(None);
        scroll.run_deferred();
        prop_assert_eq!(scroll.host().body_overflow(), "scroll");
        prop_assert_eq!(scroll.host().body_padding_right(), "3px");
    }

    /// Touch: handlers and the shared listener follow the registry exactly
    #[test]
    fn touch_listener_tracks_registry(ops in prop::collection::vec(op(), 0..40)) {
        let mut scroll = ScrollLock::new(MemoryHost::new(), Capabilities::touch());
        let mut model = BTreeSet::new();

        for op in &ops {
            apply(&mut scroll, &mut model, op);

            prop_assert_eq!(scroll.lock_count(), model.len());
            prop_assert_eq!(scroll.host().document_listeners(), usize::from(!model.is_empty()));
            prop_assert_eq!(scroll.status().document_listener, !model.is_empty());

            let attached: BTreeSet<u32> =
                scroll.host().attached_nodes().iter().map(|n| n.0).collect();
            prop_assert_eq!(&attached, &model);
        }

        prop_assert!(scroll.host().style_writes().is_empty());
    }

    /// Locking twice is indistinguishable from locking once
    #[test]
    fn double_lock_is_idempotent(id in 0u32..6, touch in any::<bool>()) {
        let capabilities = if touch { Capabilities::touch() } else { Capabilities::desktop() };

        let mut once = ScrollLock::new(MemoryHost::new(), capabilities);
        once.lock(Some(NodeId(id)), LockOptions::default(), None).unwrap();
        once.run_deferred();

        let mut twice = ScrollLock::new(MemoryHost::new(), capabilities);
        twice.lock(Some(NodeId(id)), LockOptions::default(), None).unwrap();
        twice.lock(Some(NodeId(id)), LockOptions::default(), None).unwrap();
        twice.run_deferred();

        prop_assert_eq!(once.status(), twice.status());
        prop_assert_eq!(once.host().style_writes(), twice.host().style_writes());
        prop_assert_eq!(once.host().attached_nodes(), twice.host().attached_nodes());
    }
}
