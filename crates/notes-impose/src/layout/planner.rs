//! Sheet slot planning
//!
//! Every physical sheet holds four logical pages in a 2x2 grid. After
//! printing, each sheet is cut down the middle and the halves are stacked,
//! so sheet 1 carries the first and last pages side by side and every later
//! sheet steps inward from both ends.
//!
//! **Left-bound, 8 pages:**
//! ```text
//! Sheet 1          Sheet 2
//! +---+---+        +---+---+
//! | 8 | 1 |        | 6 | 3 |
//! +---+---+        +---+---+
//! | 2 | 7 |        | 4 | 5 |
//! +---+---+        +---+---+
//! ```
//!
//! Right-bound sheets are the same layout with the columns swapped.
//!
//! When the page count is not a multiple of four, the last sheet has fewer
//! than four unused pages left. The front run (`lo`, `lo + 1`) is claimed
//! first and back-run values are only valid above it, so the leftover slots
//! become [`PageSlot::Empty`] instead of repeating a page.

use thiserror::Error;

use super::SheetSlots;
use crate::constants::SLOTS_PER_SHEET;
use crate::types::{BindingDirection, NotebookError, PageSlot, Result};

/// A computed slot value that names no page on its sheet.
///
/// Never reaches callers: the planner turns it into an empty slot.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("slot value {value} outside {min}..={max}")]
pub(crate) struct OutOfRangeSlot {
    value: i64,
    min: i64,
    max: i64,
}

/// Number of sheets needed for `total_pages` logical pages
pub fn sheet_count(total_pages: u32) -> u32 {
    total_pages.div_ceil(SLOTS_PER_SHEET)
}

/// Reject page counts the planner cannot lay out
pub fn validate_page_count(total_pages: u32) -> Result<()> {
    if total_pages == 0 {
        return Err(NotebookError::InvalidInput(
            "page count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Calculate the slot assignment for one sheet.
///
/// # Arguments
/// * `sheet` - 1-based sheet index in `1..=sheet_count(total_pages)`
/// * `total_pages` - Number of logical pages, at least 1
/// * `binding` - Which edge the finished notebook is bound on
pub fn plan_sheet(sheet: u32, total_pages: u32, binding: BindingDirection) -> Result<SheetSlots> {
    validate_page_count(total_pages)?;

    let sheets = sheet_count(total_pages);
    if sheet == 0 || sheet > sheets {
        return Err(NotebookError::InvalidInput(format!(
            "sheet {} is outside 1..={} for {} pages",
            sheet, sheets, total_pages
        )));
    }

    // Pages not yet used by earlier sheets form the range lo..=hi
    let step = 2 * (i64::from(sheet) - 1);
    let lo = 1 + step;
    let hi = i64::from(total_pages) - step;

    let right_top = resolve(lo, lo, hi);
    let left_bottom = resolve(lo + 1, lo, hi);
    let left_top = resolve(hi, lo + 2, hi);
    let right_bottom = resolve(hi - 1, lo + 2, hi);

    let left_bound = SheetSlots::new([left_top, right_top, left_bottom, right_bottom]);

    Ok(match binding {
        BindingDirection::Left => left_bound,
        BindingDirection::Right => left_bound.mirrored(),
    })
}

/// Calculate slot assignments for every sheet, in sheet order
pub fn plan_all(total_pages: u32, binding: BindingDirection) -> Result<Vec<SheetSlots>> {
    validate_page_count(total_pages)?;
    (1..=sheet_count(total_pages))
        .map(|sheet| plan_sheet(sheet, total_pages, binding))
        .collect()
}

fn checked_slot(value: i64, min: i64, max: i64) -> std::result::Result<u32, OutOfRangeSlot> {
    let out_of_range = OutOfRangeSlot { value, min, max };
    if !(min..=max).contains(&value) {
        return Err(out_of_range);
    }
    u32::try_from(value).map_err(|_| out_of_range)
}

fn resolve(value: i64, min: i64, max: i64) -> PageSlot {
    checked_slot(value, min, max)
        .map(PageSlot::Page)
        .unwrap_or(PageSlot::Empty)
}

// =============================================================================
// Tests
// =============================================================================
