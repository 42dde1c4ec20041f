use notes_impose::*;
use std::collections::HashSet;

fn options(page_count: u32, binding_direction: BindingDirection) -> NotebookOptions {
    NotebookOptions {
        page_count,
        binding_direction,
        ..Default::default()
    }
}

fn sheet_pages(plan: &ImpositionPlan, index: u32) -> Vec<PageSlot> {
    plan.sheet(index)
        .unwrap()
        .placements
        .iter()
        .map(|p| p.page)
        .collect()
}

#[test]
fn test_impose_eight_pages_left() {
    let plan = impose(&options(8, BindingDirection::Left)).unwrap();
    assert_eq!(plan.sheet_count(), 2);
    assert_eq!(
        sheet_pages(&plan, 1),
        vec![
            PageSlot::Page(8),
            PageSlot::Page(1),
            PageSlot::Page(2),
            PageSlot::Page(7)
        ]
    );
    assert_eq!(
        sheet_pages(&plan, 2),
        vec![
            PageSlot::Page(6),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5)
        ]
    );
}

#[test]
fn test_impose_eight_pages_right() {
    let plan = impose(&options(8, BindingDirection::Right)).unwrap();
    assert_eq!(
        sheet_pages(&plan, 1),
        vec![
            PageSlot::Page(1),
            PageSlot::Page(8),
            PageSlot::Page(7),
            PageSlot::Page(2)
        ]
    );
    assert_eq!(
        sheet_pages(&plan, 2),
        vec![
            PageSlot::Page(3),
            PageSlot::Page(6),
            PageSlot::Page(5),
            PageSlot::Page(4)
        ]
    );
}

#[test]
fn test_impose_ten_pages_covers_every_page_once() {
    let plan = impose(&options(10, BindingDirection::Left)).unwrap();
    assert_eq!(plan.sheet_count(), 3);

    let mut seen = HashSet::new();
    for sheet in &plan.sheets {
        for page in sheet.slots.pages() {
            assert!(seen.insert(page), "page {} placed twice", page);
        }
    }
    assert_eq!(seen, (1..=10).collect::<HashSet<_>>());

    // Only the last sheet has blanks
    assert_eq!(plan.sheets[0].slots.empty_count(), 0);
    assert_eq!(plan.sheets[1].slots.empty_count(), 0);
    assert_eq!(plan.sheets[2].slots.empty_count(), 2);
}

#[test]
fn test_impose_single_page() {
    let plan = impose(&options(1, BindingDirection::Left)).unwrap();
    assert_eq!(plan.sheet_count(), 1);
    assert_eq!(
        sheet_pages(&plan, 1),
        vec![
            PageSlot::Empty,
            PageSlot::Page(1),
            PageSlot::Empty,
            PageSlot::Empty
        ]
    );
}

#[test]
fn test_impose_rejects_zero_pages() {
    let result = impose(&options(0, BindingDirection::Left));
    match result {
        Err(NotebookError::InvalidInput(msg)) => assert!(msg.contains("at least 1")),
        other => panic!("Expected InvalidInput error, got {:?}", other),
    }
}

#[test]
fn test_plan_sheet_lookup() {
    let plan = impose(&options(8, BindingDirection::Left)).unwrap();
    assert!(plan.sheet(0).is_none());
    assert_eq!(plan.sheet(2).unwrap().index, 2);
    assert!(plan.sheet(3).is_none());
}

#[test]
fn test_page_numbers_follow_parity() {
    let plan = impose(&options(8, BindingDirection::Left)).unwrap();
    for sheet in &plan.sheets {
        for placement in &sheet.placements {
            let page = placement.page.page().unwrap();
            let number = placement.number.unwrap();
            if page % 2 == 0 {
                assert_eq!(number.side, PlacementSide::Near);
                assert_eq!(number.horizontal, HorizontalSide::Left);
            } else {
                assert_eq!(number.side, PlacementSide::Far);
                assert_eq!(number.horizontal, HorizontalSide::Right);
            }
        }
    }
}

#[test]
fn test_slot_position_strategy_is_selectable() {
    let mut opts = options(8, BindingDirection::Right);
    opts.placement_strategy = PlacementStrategy::SlotPosition;
    let plan = impose(&opts).unwrap();

    // Page 3: (3 - 1) mod 4 = 2, so far from the binding = left for right-bound
    let page_three = plan
        .sheets
        .iter()
        .flat_map(|s| s.placements.iter())
        .find(|p| p.page == PageSlot::Page(3))
        .unwrap();
    let number = page_three.number.unwrap();
    assert_eq!(number.side, PlacementSide::Far);
    assert_eq!(number.horizontal, HorizontalSide::Left);
}

#[test]
fn test_empty_slots_have_no_page_number() {
    let plan = impose(&options(9, BindingDirection::Left)).unwrap();
    let last = plan.sheets.last().unwrap();
    for placement in &last.placements {
        assert_eq!(placement.page.is_empty(), placement.number.is_none());
    }
}

#[test]
fn test_cells_tile_the_sheet() {
    let plan = impose(&options(4, BindingDirection::Left)).unwrap();
    let sheet = plan.sheet(1).unwrap();
    let geometry = plan.geometry;

    let top_left = &sheet.placements[0].cell;
    let top_right = &sheet.placements[1].cell;
    let bottom_left = &sheet.placements[2].cell;

    assert!((top_right.x - top_left.right()).abs() < 0.01);
    assert!((top_left.y - bottom_left.top()).abs() < 0.01);
    assert!((top_left.width - geometry.cell_width_pt).abs() < 0.01);

    // Page numbers sit inside their cells
    for placement in &sheet.placements {
        let (x, y) = placement.number.unwrap().anchor;
        assert!(x > placement.cell.x && x < placement.cell.right());
        assert!(y > placement.cell.y && y < placement.cell.top());
    }
}

#[test]
fn test_plan_carries_style() {
    let mut opts = options(12, BindingDirection::Left);
    opts.page_type = PageType::Grid;
    opts.grid.color = "#336699".to_string();

    let plan = impose(&opts).unwrap();
    assert_eq!(plan.style.page_type, PageType::Grid);
    assert_eq!(plan.style.grid.color, "#336699");
    assert_eq!(plan.page_count, 12);
    assert_eq!(plan.binding_direction, BindingDirection::Left);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_manifest() {
    use tempfile::tempdir;

    let plan = impose(&options(10, BindingDirection::Right)).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");

    save_manifest(&plan, &path).await.unwrap();
    assert!(path.exists());
    assert!(!dir.path().join("plan.json.partial").exists());

    let loaded = load_manifest(&path).await.unwrap();
    assert_eq!(loaded, plan);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_manifest_failure_leaves_nothing() {
    use tempfile::tempdir;

    let plan = impose(&options(8, BindingDirection::Left)).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("plan.json");

    assert!(save_manifest(&plan, &path).await.is_err());
    assert!(!path.exists());
    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_impose_rejects_nan_offset() {
    let mut options = options(8, BindingDirection::Left);
    options.print_adjustment.horizontal_offset_mm = f32::NAN;
    assert!(matches!(impose(&options), Err(NotebookError::Config(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_manifest_with_print_offsets_loads_back() {
    use tempfile::tempdir;

    let mut options = options(12, BindingDirection::Left);
    options.print_adjustment.horizontal_offset_mm = -2.0;
    options.print_adjustment.vertical_offset_mm = 1.5;
    let plan = impose(&options).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");
    save_manifest(&plan, &path).await.unwrap();

    let loaded = load_manifest(&path).await.unwrap();
    assert_eq!(loaded.geometry, plan.geometry);
    assert!(loaded.geometry.origin.0.is_finite());
}
