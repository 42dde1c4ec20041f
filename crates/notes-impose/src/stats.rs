use crate::constants::SLOTS_PER_SHEET;
use crate::layout::{sheet_count, validate_page_count};
use crate::options::NotebookOptions;
use crate::types::*;

/// Calculate statistics for the imposition
pub fn calculate_statistics(options: &NotebookOptions) -> Result<ImpositionStatistics> {
    let logical_pages = options.page_count;
    validate_page_count(logical_pages)?;

    let output_sheets = sheet_count(logical_pages);
    // Four slots per sheet can exceed u32 near u32::MAX pages
    let slots = u64::from(output_sheets) * u64::from(SLOTS_PER_SHEET);
    let empty_slots = (SLOTS_PER_SHEET - logical_pages % SLOTS_PER_SHEET) % SLOTS_PER_SHEET;

    Ok(ImpositionStatistics {
        logical_pages,
        output_sheets,
        slots,
        empty_slots,
        // One rasterized image per sheet in the concatenated document
        output_pages: output_sheets,
    })
}
