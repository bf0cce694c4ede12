//! Exporting the loaded board

use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;
use workboard::{export_file_name, Board, Column, DateRange, EditPolicy, LoadOutcome};

use crate::{date, store_with_jobs, JOBS};

fn part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

fn loaded_board() -> Board {
    let store = store_with_jobs(&[
        ["2024/06/04", "OPT-2", "Washer", "100", "", "Ready", "", "", ""],
        ["2024/06/02", "OPT-1", "Hex bolt", "40", "40", "Done", "", "", ""],
        ["2024/06/09", "OPT-3", "Bracket & brace", "5", "", "", "", "", ""],
    ]);
    let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 1));
    match Board::load(&store, JOBS, range, EditPolicy::default()).unwrap() {
        LoadOutcome::Loaded(board) => board,
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn test_sheet_uses_snapshot_and_tints() {
    let mut board = loaded_board();
    board.set_cell(1, Column::WorkerComment, "unsaved").unwrap();

    let sheet = board.to_sheet().unwrap();
    assert_eq!(sheet.name(), "Job Board");
    assert_eq!(sheet.header().len(), 9);
    assert_eq!(sheet.header()[4], "Completed Qty");

    let items: Vec<&str> = sheet.rows().iter().map(|r| r[2].as_str()).collect();
    assert_eq!(items, vec!["Hex bolt", "Washer", "Bracket & brace"]);
    assert!(sheet.rows().iter().all(|r| r[8].is_empty()));

    let fills: Vec<String> = (0..3).map(|i| sheet.fill(i).unwrap().to_hex()).collect();
    assert_eq!(fills, vec!["CCFFCC", "F2F6FC", "FFFFFF"]);
}

#[test]
fn test_export_to_dir() {
    let board = loaded_board();
    let dir = tempfile::tempdir().unwrap();

    let path = board.export_to_dir(dir.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        export_file_name(&board.range())
    );
    assert_eq!(
        export_file_name(&board.range()),
        "job-board_20240601_20240610.xlsx"
    );

    let bytes = std::fs::read(&path).unwrap();
    let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(">Hex bolt<"));
    assert!(sheet.contains(">Bracket &amp; brace<"));
    assert!(sheet.contains("<pane ySplit=\"1\""));

    let styles = part(&bytes, "xl/styles.xml");
    assert!(styles.contains("FFCCFFCC"));
    assert!(styles.contains("FFF2F6FC"));
}

#[test]
fn test_export_bytes_name_the_sheet() {
    let board = loaded_board();
    let bytes = board.export_bytes().unwrap();
    let workbook = part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains("name=\"Job Board\""));
}
