mod constants;
pub mod impose;
pub mod layout;
mod options;
mod preview;
mod stats;
mod types;

pub use constants::{UI_MAX_PAGE_COUNT, UI_MIN_PAGE_COUNT};
#[cfg(feature = "serde")]
pub use impose::{load_manifest, save_manifest};
pub use impose::{
    ExportAbort, ImpositionPlan, PageNumberPlacement, PlannedSheet, SheetRasterizer,
    SlotPlacement, export_sheets, export_sheets_async, impose,
};
pub use layout::{
    SheetSlots, page_number_side, plan_all, plan_sheet, sheet_count, slot_position_side,
};
pub use options::*;
pub use preview::{SheetPreview, generate_preview, render_ascii};
pub use stats::calculate_statistics;
pub use types::*;
