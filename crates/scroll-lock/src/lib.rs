//! Body Scroll Lock
//!
//! Keeps the page behind a modal overlay (dialog, drawer, lightbox) from
//! scrolling, while the overlay's own scrollable regions keep working:
//!
//! - Lock registry (one lock per target, any number of targets)
//! - Overflow suppression for desktop browsers
//! - Touch gesture veto for touch-primary (iOS-family) browsers
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       ScrollLock                          │
//! │  lock / unlock / unlock_all        touch_* event entry    │
//! │  ┌──────────────┐ ┌───────────────────┐ ┌──────────────┐  │
//! │  │ LockRegistry │ │OverflowController │ │GestureTracker│  │
//! │  │  (targets)   │ │ (desktop styles)  │ │ (touch veto) │  │
//! │  └──────────────┘ └───────────────────┘ └──────────────┘  │
//! └────────────────────────────┬──────────────────────────────┘
//!                              │ ScrollHost
//!               ┌──────────────┴──────────────┐
//!               │  WebHost (scroll-lock-web)  │
//!               │  MemoryHost (tests)         │
//!               └─────────────────────────────┘
//! ```
//!
//! Which path a [`ScrollLock`] takes is decided once by the injected
//! [`Capabilities`]. Global effects (hidden overflow, the shared document
//! listener) are held while the registry is non-empty and released when it
//! empties, however many locks were stacked.
//!
//! ## Example
//!
//! ```rust
//! use scroll_lock::{
//!     Capabilities, LockOptions, MemoryHost, NodeId, ScrollLock, ScrollMetrics, TouchSample,
//!     TouchVerdict,
//! };
//!
//! let modal = NodeId(1);
//! let mut host = MemoryHost::new();
//! host.set_scroll_metrics(modal, ScrollMetrics::new(0.0, 900.0, 300.0));
//!
//! let mut scroll = ScrollLock::new(host, Capabilities::touch());
//! scroll.lock(Some(modal), LockOptions::default(), None).unwrap();
//!
//! // Dragging down while the modal is already at its top would bounce the page
//! scroll.touch_start(&modal, &TouchSample::single(Some(modal), 100.0));
//! let verdict = scroll.touch_move(&modal, &TouchSample::single(Some(modal), 120.0));
//! assert_eq!(verdict, TouchVerdict::Veto);
//! ```

pub mod capability;
pub mod error;
pub mod host;
pub mod memory;
pub mod options;
pub mod registry;
pub mod touch;

mod lock;
mod overflow;
mod status;

pub use capability::{is_touch_primary_platform, Capabilities, ListenerOptions};
pub use error::{ScrollLockError, ScrollLockResult};
pub use host::{ScrollHost, ScrollMetrics};
pub use lock::ScrollLock;
pub use memory::{MemoryHost, NodeId, StyleProperty};
pub use options::{GapCallback, LockOptions, TouchMovePredicate};
pub use overflow::OverflowController;
pub use registry::{Lock, LockRegistry};
pub use status::LockStatus;
pub use touch::{GestureTracker, TouchSample, TouchVerdict};
