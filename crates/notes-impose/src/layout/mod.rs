//! Layout calculation modules for imposition
//!
//! This module handles all the calculations that turn a page count into
//! sheets:
//! - Slot planning (which logical page goes where on each sheet)
//! - Page-number placement (near or far from the binding)
//! - Sheet geometry (cell rectangles and page-number anchors)

mod grid;
mod placement;
mod planner;
mod types;

pub use grid::*;
pub use placement::*;
pub use planner::*;
pub use types::*;
