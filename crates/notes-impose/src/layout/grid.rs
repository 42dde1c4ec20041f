//! Sheet geometry
//!
//! Places the 2x2 grid of page cells on the output sheet and finds where each
//! page number is drawn. Coordinates are points with the origin at the
//! bottom-left corner of the sheet, as in PDF.

use crate::constants::{
    GRID_COLS, GRID_ROWS, HELVETICA_CHAR_WIDTH_RATIO, PAGE_NUMBER_OFFSET, mm_to_pt,
};
use crate::types::{HorizontalSide, NotebookError, PaperSize, Result, SlotPosition};

use super::Rect;

/// Tolerance when checking that the page cells fit on the sheet (points)
const FIT_TOLERANCE_PT: f32 = 0.5;

/// Geometry of one output sheet
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetGeometry {
    /// Full sheet width in points
    pub sheet_width_pt: f32,
    /// Full sheet height in points
    pub sheet_height_pt: f32,
    /// Width of each page cell in points
    pub cell_width_pt: f32,
    /// Height of each page cell in points
    pub cell_height_pt: f32,
    /// Bottom-left corner of the grid, after print adjustment
    pub origin: (f32, f32),
}

/// Create the geometry for `page` sized cells on an `output` sheet.
///
/// The grid is centred on the sheet and then shifted by the print
/// adjustment: positive `horizontal_offset_mm` moves right, positive
/// `vertical_offset_mm` moves down.
pub fn create_sheet_geometry(
    output: PaperSize,
    page: PaperSize,
    horizontal_offset_mm: f32,
    vertical_offset_mm: f32,
) -> Result<SheetGeometry> {
    let (sheet_w_mm, sheet_h_mm) = output.dimensions_mm();
    let (cell_w_mm, cell_h_mm) = page.dimensions_mm();

    let sheet_width_pt = mm_to_pt(sheet_w_mm);
    let sheet_height_pt = mm_to_pt(sheet_h_mm);
    let cell_width_pt = mm_to_pt(cell_w_mm);
    let cell_height_pt = mm_to_pt(cell_h_mm);

    if cell_width_pt <= 0.0 || cell_height_pt <= 0.0 {
        return Err(NotebookError::Config(
            "Page size must have positive dimensions".to_string(),
        ));
    }

    let grid_width = cell_width_pt * GRID_COLS as f32;
    let grid_height = cell_height_pt * GRID_ROWS as f32;

    if grid_width > sheet_width_pt + FIT_TOLERANCE_PT
        || grid_height > sheet_height_pt + FIT_TOLERANCE_PT
    {
        return Err(NotebookError::Config(format!(
            "{}x{} page cells ({:.1} x {:.1} mm) do not fit on a {:.1} x {:.1} mm sheet",
            GRID_COLS,
            GRID_ROWS,
            cell_w_mm,
            cell_h_mm,
            sheet_w_mm,
            sheet_h_mm
        )));
    }

    // The shifted grid must still cover the centre cut lines
    check_offset("Horizontal", horizontal_offset_mm, cell_w_mm)?;
    check_offset("Vertical", vertical_offset_mm, cell_h_mm)?;

    let origin_x = (sheet_width_pt - grid_width) / 2.0 + mm_to_pt(horizontal_offset_mm);
    let origin_y = (sheet_height_pt - grid_height) / 2.0 - mm_to_pt(vertical_offset_mm);

    Ok(SheetGeometry {
        sheet_width_pt,
        sheet_height_pt,
        cell_width_pt,
        cell_height_pt,
        origin: (origin_x, origin_y),
    })
}

fn check_offset(axis: &str, offset_mm: f32, cell_mm: f32) -> Result<()> {
    if !offset_mm.is_finite() {
        return Err(NotebookError::Config(format!(
            "{} print offset must be a finite number, got {}",
            axis, offset_mm
        )));
    }
    if offset_mm.abs() > cell_mm {
        return Err(NotebookError::Config(format!(
            "{} print offset {:.1} mm moves the grid off the sheet (limit {:.1} mm)",
            axis, offset_mm, cell_mm
        )));
    }
    Ok(())
}

/// Calculate the bounds of the cell at the given slot position.
pub fn cell_bounds(geometry: &SheetGeometry, pos: SlotPosition) -> Rect {
    let (origin_x, origin_y) = geometry.origin;

    // Row 0 is at the top, so we need to invert the y calculation
    let cell_x = origin_x + pos.col() as f32 * geometry.cell_width_pt;
    let cell_y = origin_y + (GRID_ROWS - pos.row() - 1) as f32 * geometry.cell_height_pt;

    Rect::new(
        cell_x,
        cell_y,
        geometry.cell_width_pt,
        geometry.cell_height_pt,
    )
}

/// Baseline start of the page number text inside `cell`.
///
/// The number sits `PAGE_NUMBER_OFFSET` above the bottom edge and the same
/// distance in from the chosen side edge.
pub fn page_number_anchor(
    cell: &Rect,
    side: HorizontalSide,
    page: u32,
    font_size: f32,
) -> (f32, f32) {
    let text_width = page.to_string().len() as f32 * font_size * HELVETICA_CHAR_WIDTH_RATIO;
    let x = match side {
        HorizontalSide::Left => cell.x + PAGE_NUMBER_OFFSET,
        HorizontalSide::Right => cell.right() - PAGE_NUMBER_OFFSET - text_width,
    };
    (x, cell.y + PAGE_NUMBER_OFFSET)
}

// =============================================================================
// Tests
// =============================================================================
