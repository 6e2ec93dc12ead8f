// SPDX-License-Identifier: MPL-2.0
//! Star rating state.

/// Number of selectable stars.
pub const STAR_COUNT: u8 = 5;

/// Rating selection, unset until the user taps a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingState {
    rating: Option<u8>,
}

impl RatingState {
    /// Sets the rating to `value`, clamped to `1..=STAR_COUNT`.
    pub fn set(&mut self, value: u8) {
        self.rating = Some(value.clamp(1, STAR_COUNT));
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.rating = None;
    }

    /// Current rating, if any.
    #[must_use]
    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    /// Whether the 1-based star at `index` should render filled.
    #[must_use]
    pub fn is_filled(&self, index: u8) -> bool {
        self.rating.is_some_and(|rating| index <= rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset_with_empty_stars() {
        let state = RatingState::default();
        assert_eq!(state.rating(), None);
        for index in 1..=STAR_COUNT {
            assert!(!state.is_filled(index));
        }
    }

    #[test]
    fn fills_stars_up_to_the_rating() {
        let mut state = RatingState::default();
        state.set(3);
        assert!(state.is_filled(1));
        assert!(state.is_filled(3));
        assert!(!state.is_filled(4));
    }

    #[test]
    fn set_clamps_to_valid_range() {
        let mut state = RatingState::default();
        state.set(0);
        assert_eq!(state.rating(), Some(1));
        state.set(9);
        assert_eq!(state.rating(), Some(STAR_COUNT));
    }

    #[test]
    fn clear_resets_selection() {
        let mut state = RatingState::default();
        state.set(4);
        state.clear();
        assert_eq!(state.rating(), None);
    }
}
