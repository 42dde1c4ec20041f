use crate::layout::{SheetSlots, plan_sheet, sheet_count};
use crate::options::NotebookOptions;
use crate::types::*;

/// Text preview of a single sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPreview {
    /// 1-based sheet index
    pub sheet: u32,
    pub total_sheets: u32,
    pub total_pages: u32,
    /// Pages on this sheet in slot order (top-left to bottom-right)
    pub pages: Vec<u32>,
    /// Lowest page number on the sheet
    pub first_page: u32,
    /// Highest page number on the sheet
    pub last_page: u32,
    /// Step-by-step printing instructions
    pub instructions: Vec<String>,
    /// Box drawing of the sheet's slots
    pub diagram: String,
}

/// Generate a preview of one sheet of the imposition
pub fn generate_preview(options: &NotebookOptions, sheet: u32) -> Result<SheetPreview> {
    options.validate()?;

    let slots = plan_sheet(sheet, options.page_count, options.binding_direction)?;
    let pages: Vec<u32> = slots.pages().collect();

    // Every sheet holds at least one page
    let first_page = pages.iter().copied().min().unwrap_or_default();
    let last_page = pages.iter().copied().max().unwrap_or_default();

    let page_list = pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let instructions = vec![
        format!(
            "Print on {} paper at actual size (100%)",
            options.output_paper_size.label()
        ),
        format!(
            "Sheet {}: pages {} (top-left to bottom-right)",
            sheet, page_list
        ),
        "When printing the back, flip the paper on its short edge".to_string(),
        "Cut through the centre and stack the halves in sheet order to bind".to_string(),
    ];

    Ok(SheetPreview {
        sheet,
        total_sheets: sheet_count(options.page_count),
        total_pages: options.page_count,
        pages,
        first_page,
        last_page,
        instructions,
        diagram: render_ascii(&slots),
    })
}

/// Draw the 2x2 slots of a sheet as a box diagram.
///
/// ```text
/// +----+----+
/// | 12 | 1  |
/// +----+----+
/// | 2  | 11 |
/// +----+----+
/// ```
///
/// Empty slots are drawn as `·`.
pub fn render_ascii(slots: &SheetSlots) -> String {
    let labels: Vec<String> = slots
        .as_array()
        .iter()
        .map(|slot| match slot {
            PageSlot::Page(n) => n.to_string(),
            PageSlot::Empty => "·".to_string(),
        })
        .collect();

    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(1)
        + 2;
    let border = format!("+{0}+{0}+\n", "-".repeat(width));

    let mut out = border.clone();
    for row in labels.chunks(2) {
        out.push_str(&format!(
            "|{:^w$}|{:^w$}|\n",
            row[0],
            row[1],
            w = width
        ));
        out.push_str(&border);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ascii_full_sheet() {
        let slots = plan_sheet(1, 8, BindingDirection::Left).unwrap();
        let expected = "\
+---+---+
| 8 | 1 |
+---+---+
| 2 | 7 |
+---+---+
";
        assert_eq!(render_ascii(&slots), expected);
    }

    #[test]
    fn test_render_ascii_empty_slots() {
        let slots = plan_sheet(3, 10, BindingDirection::Left).unwrap();
        let expected = "\
+---+---+
| · | 5 |
+---+---+
| 6 | · |
+---+---+
";
        assert_eq!(render_ascii(&slots), expected);
    }
}
