use notes_impose::*;

#[test]
fn test_preview_first_sheet() {
    let options = NotebookOptions {
        page_count: 8,
        ..Default::default()
    };

    let preview = generate_preview(&options, 1).unwrap();
    assert_eq!(preview.sheet, 1);
    assert_eq!(preview.total_sheets, 2);
    assert_eq!(preview.total_pages, 8);
    assert_eq!(preview.pages, vec![8, 1, 2, 7]);
    assert_eq!(preview.first_page, 1);
    assert_eq!(preview.last_page, 8);
    assert_eq!(preview.instructions.len(), 4);
    assert!(preview.instructions[0].contains("A4"));
    assert!(preview.instructions[1].contains("8, 1, 2, 7"));
    assert!(preview.diagram.contains("| 8 | 1 |"));
}

#[test]
fn test_preview_last_partial_sheet() {
    let options = NotebookOptions {
        page_count: 10,
        binding_direction: BindingDirection::Right,
        ..Default::default()
    };

    let preview = generate_preview(&options, 3).unwrap();
    assert_eq!(preview.pages, vec![5, 6]);
    assert_eq!(preview.first_page, 5);
    assert_eq!(preview.last_page, 6);
    assert!(preview.diagram.contains("| 5 | · |"));
    assert!(preview.diagram.contains("| · | 6 |"));
}

#[test]
fn test_preview_sheet_out_of_range() {
    let options = NotebookOptions {
        page_count: 10,
        ..Default::default()
    };

    assert!(matches!(
        generate_preview(&options, 0),
        Err(NotebookError::InvalidInput(_))
    ));
    assert!(matches!(
        generate_preview(&options, 4),
        Err(NotebookError::InvalidInput(_))
    ));
}
