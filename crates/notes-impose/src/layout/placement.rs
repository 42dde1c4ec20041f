//! Page-number placement
//!
//! Decides whether a page number is printed next to the binding edge or next
//! to the cut edge. Two rules are in circulation:
//!
//! - **Parity** (authoritative): for a left-bound notebook even pages sit near
//!   the binding and odd pages far from it; right-bound inverts this.
//! - **Slot position**: `(page - 1) mod 4 >= 2` sits far, the rest near. It
//!   does not look at the binding direction and only approximates parity.
//!
//! For a left-bound notebook the two disagree on the first and last page of
//! every group of four, so the rule is a configuration choice. Final export
//! must use [`PlacementStrategy::Parity`].

use crate::types::{BindingDirection, HorizontalSide, PlacementSide, PlacementStrategy};

/// Side of the page number for `page` under the parity rule
pub fn page_number_side(page: u32, binding: BindingDirection) -> PlacementSide {
    let even = page % 2 == 0;
    match (binding, even) {
        (BindingDirection::Left, true) | (BindingDirection::Right, false) => PlacementSide::Near,
        (BindingDirection::Left, false) | (BindingDirection::Right, true) => PlacementSide::Far,
    }
}

/// Side of the page number for `page` under the slot-position rule
pub fn slot_position_side(page: u32) -> PlacementSide {
    if page.saturating_sub(1) % 4 >= 2 {
        PlacementSide::Far
    } else {
        PlacementSide::Near
    }
}

impl PlacementStrategy {
    /// Classify `page` using this strategy
    pub fn side(self, page: u32, binding: BindingDirection) -> PlacementSide {
        match self {
            PlacementStrategy::Parity => page_number_side(page, binding),
            PlacementStrategy::SlotPosition => slot_position_side(page),
        }
    }

    /// Classify `page` and resolve it to a side of the printed page
    pub fn horizontal_side(self, page: u32, binding: BindingDirection) -> HorizontalSide {
        self.side(page, binding).horizontal(binding)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_left() {
        let left = BindingDirection::Left;
        assert_eq!(page_number_side(1, left), PlacementSide::Far);
        assert_eq!(page_number_side(2, left), PlacementSide::Near);
        assert_eq!(page_number_side(7, left), PlacementSide::Far);
        assert_eq!(page_number_side(8, left), PlacementSide::Near);
    }

    #[test]
    fn test_parity_right() {
        let right = BindingDirection::Right;
        assert_eq!(page_number_side(1, right), PlacementSide::Near);
        assert_eq!(page_number_side(2, right), PlacementSide::Far);
    }

    #[test]
    fn test_slot_position_rule() {
        let sides: Vec<_> = (1..=8).map(slot_position_side).collect();
        assert_eq!(
            sides,
            vec![
                PlacementSide::Near,
                PlacementSide::Near,
                PlacementSide::Far,
                PlacementSide::Far,
                PlacementSide::Near,
                PlacementSide::Near,
                PlacementSide::Far,
                PlacementSide::Far,
            ]
        );
    }

    #[test]
    fn test_near_resolves_to_binding_edge() {
        let strategy = PlacementStrategy::Parity;
        // Left-bound: even pages near = left
        assert_eq!(
            strategy.horizontal_side(2, BindingDirection::Left),
            HorizontalSide::Left
        );
        assert_eq!(
            strategy.horizontal_side(3, BindingDirection::Left),
            HorizontalSide::Right
        );
        // Right-bound: odd pages near = right
        assert_eq!(
            strategy.horizontal_side(3, BindingDirection::Right),
            HorizontalSide::Right
        );
        assert_eq!(
            strategy.horizontal_side(4, BindingDirection::Right),
            HorizontalSide::Left
        );
    }

    #[test]
    fn test_strategies_disagree() {
        let left = BindingDirection::Left;
        assert_ne!(
            PlacementStrategy::Parity.side(1, left),
            PlacementStrategy::SlotPosition.side(1, left)
        );
        assert_eq!(
            PlacementStrategy::Parity.side(2, left),
            PlacementStrategy::SlotPosition.side(2, left)
        );
    }
}
