//! Shared constants for notebook imposition
//!
//! This module centralizes magic numbers used by the planner, the sheet
//! geometry and the default configuration.

// =============================================================================
// Sheet Capacity
// =============================================================================

/// Logical pages per physical sheet (2 x 2 grid)
pub const SLOTS_PER_SHEET: u32 = 4;

/// Columns in the sheet grid
pub const GRID_COLS: usize = 2;

/// Rows in the sheet grid
pub const GRID_ROWS: usize = 2;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Page Numbers
// =============================================================================

/// Default font size for page numbers (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 8.0;

/// Inset of the page number from the cell's bottom and side edges (points)
pub const PAGE_NUMBER_OFFSET: f32 = 10.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Page count offered by the settings form on first load
pub const DEFAULT_PAGE_COUNT: u32 = 50;

/// Smallest page count the settings form accepts
pub const UI_MIN_PAGE_COUNT: u32 = 10;

/// Largest page count the settings form accepts
pub const UI_MAX_PAGE_COUNT: u32 = 200;

/// Default grid and rule colour
pub const DEFAULT_LINE_COLOR: &str = "#cccccc";

/// Default grid cell size (mm)
pub const DEFAULT_GRID_SIZE_MM: f32 = 5.0;

/// Default spacing between ruled lines (mm)
pub const DEFAULT_LINE_SPACING_MM: f32 = 7.0;
