//! Hover state machine shared by both chart types.
//!
//! Each chart instance owns one [`HoverState`] slot; the bar chart and pie
//! chart never share one. The machine is deliberately sticky: moving the
//! pointer into a gap between adjacent segments keeps the current target, and
//! only a pointer-leave on the chart's root container returns to idle. That
//! asymmetry is what prevents tooltip flicker while sweeping across a column.

use serde::{Deserialize, Serialize};

/// Hover state for a chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState<T> {
    /// No hover target
    #[default]
    Idle,
    /// Pointer is over (or was last over) the identified target
    Hovering(T),
}

impl<T: Copy + PartialEq> HoverState<T> {
    /// Feed a hit-test result into the machine.
    ///
    /// `Some(target)` enters or moves the hover; `None` (pointer over a gap
    /// inside the chart) is a no-op.
    pub fn hover(&mut self, target: Option<T>) {
        if let Some(target) = target {
            *self = Self::Hovering(target);
        }
    }

    /// Pointer left the chart's root container.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// The current target, if any.
    #[must_use]
    pub fn target(&self) -> Option<T> {
        match self {
            Self::Hovering(target) => Some(*target),
            Self::Idle => None,
        }
    }

    /// Check if a target is hovered.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state: HoverState<usize> = HoverState::default();
        assert!(!state.is_hovering());
        assert_eq!(state.target(), None);
    }

    #[test]
    fn test_enter_and_move() {
        let mut state = HoverState::default();
        state.hover(Some(2));
        assert_eq!(state.target(), Some(2));

        state.hover(Some(4));
        assert_eq!(state.target(), Some(4));
    }

    #[test]
    fn test_gap_keeps_current_target() {
        let mut state = HoverState::default();
        state.hover(Some(1));
        state.hover(None);
        assert_eq!(state.target(), Some(1), "gaps must not flicker to idle");
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut state = HoverState::default();
        state.hover(Some(1));
        state.clear();
        assert_eq!(state.target(), None);
    }

    #[test]
    fn test_hover_none_while_idle_stays_idle() {
        let mut state: HoverState<usize> = HoverState::default();
        state.hover(None);
        assert!(!state.is_hovering());
    }
}
