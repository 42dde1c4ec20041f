//! Sheet-by-sheet export driver
//!
//! Rasterizing a sheet is the renderer's job; this module only decides the
//! order and owns the abort semantics. Sheets are handed to the rasterizer
//! one at a time because a renderer may reuse a single render target. If the
//! export is aborted between sheets, everything produced so far is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::plan::{ImpositionPlan, PlannedSheet};
use crate::options::PageStyle;
use crate::types::*;

/// Renders one planned sheet into an image (or any other per-sheet output)
pub trait SheetRasterizer {
    type Image;

    fn rasterize(&mut self, sheet: &PlannedSheet, style: &PageStyle) -> Result<Self::Image>;
}

/// Cloneable handle for aborting a running export between sheets
#[derive(Debug, Clone, Default)]
pub struct ExportAbort(Arc<AtomicBool>);

impl ExportAbort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Rasterize every sheet of `plan` in order.
///
/// Returns one image per sheet. The abort handle is checked before every
/// sheet and once more after the last one. On abort or on a rasterizer
/// error, the images produced so far are discarded and the error is returned.
pub fn export_sheets<R: SheetRasterizer>(
    plan: &ImpositionPlan,
    rasterizer: &mut R,
    abort: &ExportAbort,
) -> Result<Vec<R::Image>> {
    if plan.placement_strategy != PlacementStrategy::Parity {
        return Err(NotebookError::Config(format!(
            "Export requires parity page-number placement, plan uses {:?}",
            plan.placement_strategy
        )));
    }

    let total = plan.sheets.len();
    let mut images = Vec::with_capacity(total);

    for sheet in &plan.sheets {
        if abort.is_aborted() {
            log::info!(
                "Export aborted after {} of {} sheets; discarding output",
                images.len(),
                total
            );
            return Err(NotebookError::Aborted);
        }

        log::debug!("Rasterizing sheet {}/{}", sheet.index, total);
        images.push(rasterizer.rasterize(sheet, &plan.style)?);
    }

    // An abort raised during the last sheet still wins
    if abort.is_aborted() {
        log::info!("Export aborted after the last sheet; discarding output");
        return Err(NotebookError::Aborted);
    }

    log::info!("Exported {} sheets", total);
    Ok(images)
}

/// Run [`export_sheets`] on the blocking thread pool
pub async fn export_sheets_async<R>(
    plan: ImpositionPlan,
    mut rasterizer: R,
    abort: ExportAbort,
) -> Result<Vec<R::Image>>
where
    R: SheetRasterizer + Send + 'static,
    R::Image: Send + 'static,
{
    tokio::task::spawn_blocking(move || export_sheets(&plan, &mut rasterizer, &abort)).await?
}
