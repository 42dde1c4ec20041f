//! Imposition plan: planner output joined with placement and geometry

use crate::layout::{
    Rect, SheetGeometry, SheetSlots, cell_bounds, page_number_anchor, plan_sheet,
};
use crate::options::PageStyle;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw and export a notebook
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImpositionPlan {
    pub page_count: u32,
    pub binding_direction: BindingDirection,
    pub placement_strategy: PlacementStrategy,
    pub geometry: SheetGeometry,
    pub style: PageStyle,
    /// One entry per physical sheet, in print order
    pub sheets: Vec<PlannedSheet>,
}

impl ImpositionPlan {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Look up a sheet by its 1-based index
    pub fn sheet(&self, index: u32) -> Option<&PlannedSheet> {
        let idx = usize::try_from(index).ok()?.checked_sub(1)?;
        self.sheets.get(idx)
    }
}

/// One physical sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannedSheet {
    /// 1-based sheet index
    pub index: u32,
    pub slots: SheetSlots,
    /// Placements in slot order (top-left to bottom-right)
    pub placements: Vec<SlotPlacement>,
}

/// One cell on a sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotPlacement {
    pub position: SlotPosition,
    pub page: PageSlot,
    /// Cell bounds on the sheet in points
    pub cell: Rect,
    /// Page-number placement; `None` for empty slots
    pub number: Option<PageNumberPlacement>,
}

/// Where and on which side a page number is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageNumberPlacement {
    pub side: PlacementSide,
    pub horizontal: HorizontalSide,
    /// Text baseline start in points
    pub anchor: (f32, f32),
}

/// Plan one sheet and attach placement and geometry to every slot
pub(crate) fn build_sheet(
    index: u32,
    page_count: u32,
    binding: BindingDirection,
    strategy: PlacementStrategy,
    geometry: &SheetGeometry,
    style: &PageStyle,
) -> Result<PlannedSheet> {
    let slots = plan_sheet(index, page_count, binding)?;

    let placements = slots
        .iter()
        .map(|(position, page)| {
            let cell = cell_bounds(geometry, position);
            let number = page.page().map(|page_number| {
                let side = strategy.side(page_number, binding);
                let horizontal = side.horizontal(binding);
                PageNumberPlacement {
                    side,
                    horizontal,
                    anchor: page_number_anchor(
                        &cell,
                        horizontal,
                        page_number,
                        style.page_number_font_size,
                    ),
                }
            });
            SlotPlacement {
                position,
                page,
                cell,
                number,
            }
        })
        .collect();

    Ok(PlannedSheet {
        index,
        slots,
        placements,
    })
}
