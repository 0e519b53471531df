//! Lock registry
//!
//! Ordered set of active locks keyed by target identity. Global effects are
//! reference counted by presence here: the first insertion acquires them,
//! the removal that empties the registry releases them.

use crate::options::LockOptions;

/// One active scroll-suppression request
#[derive(Clone, Debug)]
pub struct Lock<N> {
    /// Element the lock protects. Only the non-touch path accepts `None`.
    pub target: Option<N>,
    /// Per-lock configuration
    pub options: LockOptions<N>,
}

impl<N> Lock<N> {
    pub fn new(target: Option<N>, options: LockOptions<N>) -> Self {
        Self { target, options }
    }
}

/// Insertion-ordered set of locks, at most one per target
#[derive(Debug)]
pub struct LockRegistry<N> {
    locks: Vec<Lock<N>>,
}

impl<N> Default for LockRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> LockRegistry<N> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { locks: Vec::new() }
    }

    /// Drop every lock, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<Lock<N>> {
        std::mem::take(&mut self.locks)
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Iterate locks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Lock<N>> {
        self.locks.iter()
    }

    /// Any lock exempts `node` from gesture suppression.
    pub fn allows_touch_move(&self, node: &N) -> bool {
        self.locks
            .iter()
            .any(|lock| lock.options.allows_touch_move(node))
    }
}

impl<N: PartialEq> LockRegistry<N> {
    /// Append `lock` unless its target is already locked.
    ///
    /// Returns `true` if the lock was inserted.
    pub fn add(&mut self, lock: Lock<N>) -> bool {
        if self.contains(lock.target.as_ref()) {
            return false;
        }
        self.locks.push(lock);
        true
    }

    /// Remove the lock on `target`, if any.
    pub fn remove(&mut self, target: Option<&N>) -> Option<Lock<N>> {
        let index = self
            .locks
            .iter()
            .position(|lock| lock.target.as_ref() == target)?;
        Some(self.locks.remove(index))
    }

    pub fn contains(&self, target: Option<&N>) -> bool {
        self.locks.iter().any(|lock| lock.target.as_ref() == target)
    }
}
