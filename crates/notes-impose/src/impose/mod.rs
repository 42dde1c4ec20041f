//! Notebook imposition - arranging pages for cut-and-stack binding
//!
//! This module orchestrates the imposition process:
//! 1. Validate the notebook options
//! 2. Plan the slots of every sheet
//! 3. Attach page-number placement and cell geometry
//! 4. Hand the plan to an exporter or persist it as a manifest

mod export;
#[cfg(feature = "serde")]
mod io;
mod plan;

pub use export::{ExportAbort, SheetRasterizer, export_sheets, export_sheets_async};
#[cfg(feature = "serde")]
pub use io::{load_manifest, save_manifest};
pub use plan::{ImpositionPlan, PageNumberPlacement, PlannedSheet, SlotPlacement};

use crate::layout::{create_sheet_geometry, sheet_count};
use crate::options::NotebookOptions;
use crate::types::*;
use plan::build_sheet;

/// Main imposition function
pub fn impose(options: &NotebookOptions) -> Result<ImpositionPlan> {
    options.validate()?;

    let geometry = create_sheet_geometry(
        options.output_paper_size,
        options.page_paper_size,
        options.print_adjustment.horizontal_offset_mm,
        options.print_adjustment.vertical_offset_mm,
    )?;
    let style = options.page_style();

    let total_sheets = sheet_count(options.page_count);
    log::debug!(
        "Imposing {} pages onto {} sheets ({:?} binding, {:?} placement)",
        options.page_count,
        total_sheets,
        options.binding_direction,
        options.placement_strategy
    );

    let sheets = (1..=total_sheets)
        .map(|index| {
            build_sheet(
                index,
                options.page_count,
                options.binding_direction,
                options.placement_strategy,
                &geometry,
                &style,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ImpositionPlan {
        page_count: options.page_count,
        binding_direction: options.binding_direction,
        placement_strategy: options.placement_strategy,
        geometry,
        style,
        sheets,
    })
}
