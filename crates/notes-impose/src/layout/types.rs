//! Layout data types for imposition
//!
//! These types sit between slot planning and whatever renders the sheet.

use std::ops::Index;

use crate::types::{PageSlot, SlotPosition};

/// The four slots of one sheet, in `SlotPosition` order
/// (top-left, top-right, bottom-left, bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSlots([PageSlot; 4]);

impl SheetSlots {
    pub fn new(slots: [PageSlot; 4]) -> Self {
        Self(slots)
    }

    pub fn get(&self, pos: SlotPosition) -> PageSlot {
        self.0[pos.index()]
    }

    pub fn as_array(&self) -> &[PageSlot; 4] {
        &self.0
    }

    /// Slots paired with their position, in reading order
    pub fn iter(&self) -> impl Iterator<Item = (SlotPosition, PageSlot)> + '_ {
        SlotPosition::ALL
            .into_iter()
            .map(move |pos| (pos, self.get(pos)))
    }

    /// Page numbers on this sheet, in slot order, skipping empty slots
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().filter_map(|slot| slot.page())
    }

    pub fn empty_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_empty()).count()
    }

    /// Swap left and right columns
    pub fn mirrored(&self) -> Self {
        let [tl, tr, bl, br] = self.0;
        Self([tr, tl, br, bl])
    }
}

impl Index<SlotPosition> for SheetSlots {
    type Output = PageSlot;

    fn index(&self, pos: SlotPosition) -> &PageSlot {
        &self.0[pos.index()]
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}
