use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Export aborted")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, NotebookError>;

/// Which edge of the assembled booklet is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BindingDirection {
    /// Bound on the left edge (left-to-right reading)
    #[default]
    Left,
    /// Bound on the right edge (right-to-left reading)
    Right,
}

impl BindingDirection {
    /// Horizontal side of the printed sheet that faces the binding
    pub fn binding_side(self) -> HorizontalSide {
        match self {
            BindingDirection::Left => HorizontalSide::Left,
            BindingDirection::Right => HorizontalSide::Right,
        }
    }
}

/// Contents of one slot on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageSlot {
    /// A logical page, 1-based
    Page(u32),
    /// Nothing printed in this slot
    Empty,
}

impl PageSlot {
    pub fn page(self) -> Option<u32> {
        match self {
            PageSlot::Page(n) => Some(n),
            PageSlot::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, PageSlot::Empty)
    }
}

/// The four positions of the 2x2 grid, in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SlotPosition {
    pub const ALL: [SlotPosition; 4] = [
        SlotPosition::TopLeft,
        SlotPosition::TopRight,
        SlotPosition::BottomLeft,
        SlotPosition::BottomRight,
    ];

    /// Index into a slot tuple (0 = top-left, 3 = bottom-right)
    pub fn index(self) -> usize {
        match self {
            SlotPosition::TopLeft => 0,
            SlotPosition::TopRight => 1,
            SlotPosition::BottomLeft => 2,
            SlotPosition::BottomRight => 3,
        }
    }

    /// Grid row, 0 = top
    pub fn row(self) -> usize {
        self.index() / 2
    }

    /// Grid column, 0 = left
    pub fn col(self) -> usize {
        self.index() % 2
    }

    /// The position across the vertical cut line
    pub fn mirrored(self) -> SlotPosition {
        match self {
            SlotPosition::TopLeft => SlotPosition::TopRight,
            SlotPosition::TopRight => SlotPosition::TopLeft,
            SlotPosition::BottomLeft => SlotPosition::BottomRight,
            SlotPosition::BottomRight => SlotPosition::BottomLeft,
        }
    }
}

/// Where a page number sits relative to the binding edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlacementSide {
    /// Adjacent to the binding edge
    Near,
    /// Adjacent to the open (cut) edge
    Far,
}

impl PlacementSide {
    /// Resolve to a concrete side of the printed page
    pub fn horizontal(self, binding: BindingDirection) -> HorizontalSide {
        let binding_side = binding.binding_side();
        match self {
            PlacementSide::Near => binding_side,
            PlacementSide::Far => binding_side.opposite(),
        }
    }
}

/// Concrete left/right side on the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalSide {
    Left,
    Right,
}

impl HorizontalSide {
    pub fn opposite(self) -> HorizontalSide {
        match self {
            HorizontalSide::Left => HorizontalSide::Right,
            HorizontalSide::Right => HorizontalSide::Left,
        }
    }
}

/// Rule used to choose the page-number side.
///
/// Two rules exist in different revisions of the notebook layout and they
/// disagree for half of all pages. `Parity` is authoritative whenever the
/// binding direction is known; `SlotPosition` ignores the binding and keys
/// off the page's position within its group of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlacementStrategy {
    /// Even pages near the binding for left-bound books, odd for right-bound
    #[default]
    Parity,
    /// `(page - 1) mod 4 >= 2` goes far, everything else near
    SlotPosition,
}

/// Ruling printed on every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageType {
    #[default]
    Blank,
    Grid,
    Ruled,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A4,
    A5,
    A6,
    Letter,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Portrait dimensions (width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Human-readable name, as shown in print instructions
    pub fn label(self) -> String {
        match self {
            PaperSize::A4 => "A4".to_string(),
            PaperSize::A5 => "A5".to_string(),
            PaperSize::A6 => "A6".to_string(),
            PaperSize::Letter => "Letter".to_string(),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => format!("{} x {} mm", width_mm, height_mm),
        }
    }
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionStatistics {
    /// Number of logical notebook pages
    pub logical_pages: u32,
    /// Number of physical sheets
    pub output_sheets: u32,
    /// Total slots across all sheets
    pub slots: u64,
    /// Slots left blank on the final sheet
    pub empty_slots: u32,
    /// Pages in the concatenated output document (one per sheet)
    pub output_pages: u32,
}
