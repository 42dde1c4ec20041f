use crate::constants::*;
use crate::layout::{create_sheet_geometry, validate_page_count};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid ruling style
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridStyle {
    /// Line colour as `#rrggbb`
    pub color: String,
    /// Cell size in millimeters
    pub size_mm: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_LINE_COLOR.to_string(),
            size_mm: DEFAULT_GRID_SIZE_MM,
        }
    }
}

/// Horizontal rule style
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleStyle {
    /// Line colour as `#rrggbb`
    pub color: String,
    /// Distance between rules in millimeters
    pub spacing_mm: f32,
}

impl Default for RuleStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_LINE_COLOR.to_string(),
            spacing_mm: DEFAULT_LINE_SPACING_MM,
        }
    }
}

/// Calendar pages. Stored and round-tripped, not laid out.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarOptions {
    /// `None` means the current year
    pub year: Option<i32>,
    pub show_yearly: bool,
    pub show_monthly: bool,
    pub show_weekly: bool,
}

/// Kanji practice pages. Stored and round-tripped, not laid out.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KanjiPracticeOptions {
    pub enabled: bool,
    pub characters: Vec<String>,
}

/// Printer calibration: shifts the whole grid on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintAdjustment {
    /// Positive moves the grid right
    pub horizontal_offset_mm: f32,
    /// Positive moves the grid down
    pub vertical_offset_mm: f32,
}

/// Style parameters handed to the renderer with every sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageStyle {
    pub page_type: PageType,
    pub show_page_numbers: bool,
    pub page_number_font_size: f32,
    pub grid: GridStyle,
    pub ruled: RuleStyle,
}

/// Notebook configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotebookOptions {
    // Imposition
    pub page_count: u32,
    pub binding_direction: BindingDirection,
    pub placement_strategy: PlacementStrategy,

    // Paper
    pub output_paper_size: PaperSize,
    pub page_paper_size: PaperSize,
    pub print_adjustment: PrintAdjustment,

    // Page style
    pub page_type: PageType,
    pub show_page_numbers: bool,
    pub show_index: bool,
    pub show_cover: bool,
    pub grid: GridStyle,
    pub ruled: RuleStyle,

    // Extra pages
    pub calendar: CalendarOptions,
    pub kanji_practice: KanjiPracticeOptions,
}

impl Default for NotebookOptions {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
            binding_direction: BindingDirection::Left,
            placement_strategy: PlacementStrategy::Parity,
            output_paper_size: PaperSize::A4,
            page_paper_size: PaperSize::A6,
            print_adjustment: PrintAdjustment::default(),
            page_type: PageType::Blank,
            show_page_numbers: true,
            show_index: true,
            show_cover: true,
            grid: GridStyle::default(),
            ruled: RuleStyle::default(),
            calendar: CalendarOptions::default(),
            kanji_practice: KanjiPracticeOptions::default(),
        }
    }
}

impl NotebookOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| NotebookError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NotebookError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        validate_page_count(self.page_count)?;

        validate_color("grid colour", &self.grid.color)?;
        validate_color("rule colour", &self.ruled.color)?;

        if self.grid.size_mm.is_nan() || self.grid.size_mm <= 0.0 {
            return Err(NotebookError::Config(
                "Grid size must be greater than zero".to_string(),
            ));
        }
        if self.ruled.spacing_mm.is_nan() || self.ruled.spacing_mm <= 0.0 {
            return Err(NotebookError::Config(
                "Rule spacing must be greater than zero".to_string(),
            ));
        }

        create_sheet_geometry(
            self.output_paper_size,
            self.page_paper_size,
            self.print_adjustment.horizontal_offset_mm,
            self.print_adjustment.vertical_offset_mm,
        )?;

        Ok(())
    }

    /// Clamp the page count to the range the settings form offers.
    ///
    /// Returns the previous value when it had to change. The planner itself
    /// accepts any count of at least 1; this is for front ends only.
    pub fn clamp_page_count_to_ui_range(&mut self) -> Option<u32> {
        let clamped = self.page_count.clamp(UI_MIN_PAGE_COUNT, UI_MAX_PAGE_COUNT);
        if clamped == self.page_count {
            return None;
        }
        let previous = self.page_count;
        self.page_count = clamped;
        Some(previous)
    }

    /// Style parameters for the renderer
    pub fn page_style(&self) -> PageStyle {
        PageStyle {
            page_type: self.page_type,
            show_page_numbers: self.show_page_numbers,
            page_number_font_size: PAGE_NUMBER_FONT_SIZE,
            grid: self.grid.clone(),
            ruled: self.ruled.clone(),
        }
    }
}

fn validate_color(what: &str, color: &str) -> Result<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(NotebookError::Config(format!(
            "Invalid {} '{}': expected #rrggbb",
            what, color
        )))
    }
}
