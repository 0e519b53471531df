//! Per-lock configuration

use std::fmt;
use std::rc::Rc;

/// Predicate deciding whether a node may keep receiving touch-move
pub type TouchMovePredicate<N> = Rc<dyn Fn(&N) -> bool>;

/// Callback receiving the reserved scrollbar gap in pixels (0 on release)
pub type GapCallback = Box<dyn FnMut(f64)>;

/// Configuration for a single lock
///
/// ```rust
/// use scroll_lock::LockOptions;
///
/// let options: LockOptions<u32> = LockOptions::default()
///     .reserve_scroll_bar_gap(true)
///     .allow_touch_move(|node: &u32| *node == 7);
/// assert!(options.reserves_scroll_bar_gap());
/// ```
pub struct LockOptions<N> {
    reserve_scroll_bar_gap: bool,
    allow_touch_move: Option<TouchMovePredicate<N>>,
}

impl<N> Default for LockOptions<N> {
    fn default() -> Self {
        Self {
            reserve_scroll_bar_gap: false,
            allow_touch_move: None,
        }
    }
}

impl<N> Clone for LockOptions<N> {
    fn clone(&self) -> Self {
        Self {
            reserve_scroll_bar_gap: self.reserve_scroll_bar_gap,
            allow_touch_move: self.allow_touch_move.clone(),
        }
    }
}

impl<N> fmt::Debug for LockOptions<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockOptions")
            .field("reserve_scroll_bar_gap", &self.reserve_scroll_bar_gap)
            .field("allow_touch_move", &self.allow_touch_move.is_some())
            .finish()
    }
}

impl<N> LockOptions<N> {
    /// Pad the body by the scrollbar width while locked (non-touch only).
    pub fn reserve_scroll_bar_gap(mut self, reserve: bool) -> Self {
        self.reserve_scroll_bar_gap = reserve;
        self
    }

    /// Let nodes accepted by `predicate` scroll freely (touch only).
    pub fn allow_touch_move<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&N) -> bool + 'static,
    {
        self.allow_touch_move = Some(Rc::new(predicate));
        self
    }

    /// Use an already shared predicate.
    pub fn with_touch_move_predicate(mut self, predicate: TouchMovePredicate<N>) -> Self {
        self.allow_touch_move = Some(predicate);
        self
    }

    pub fn reserves_scroll_bar_gap(&self) -> bool {
        self.reserve_scroll_bar_gap
    }

    /// Whether this lock exempts `node` from gesture suppression.
    pub fn allows_touch_move(&self, node: &N) -> bool {
        self.allow_touch_move
            .as_ref()
            .is_some_and(|predicate| predicate(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options: LockOptions<u32> = LockOptions::default();
        assert!(!options.reserves_scroll_bar_gap());
        assert!(!options.allows_touch_move(&1));
    }

    #[test]
    fn test_allow_touch_move_predicate() {
        let options = LockOptions::default().allow_touch_move(|node: &u32| node % 2 == 0);
        assert!(options.allows_touch_move(&4));
        assert!(!options.allows_touch_move(&5));

        let cloned = options.clone();
        assert!(cloned.allows_touch_move(&8));
    }

    #[test]
    fn test_debug_hides_predicate() {
        let options = LockOptions::default()
            .reserve_scroll_bar_gap(true)
            .allow_touch_move(|_: &u32| true);
        assert_eq!(
            format!("{:?}", options),
            "LockOptions { reserve_scroll_bar_gap: true, allow_touch_move: true }"
        );
    }
}
