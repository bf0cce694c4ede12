//! Loading, filtering, editing and writing back the job board

use pretty_assertions::assert_eq;
use workboard::{
    Board, BoardError, CellRange, Column, DateRange, EditPolicy, LoadOutcome, MemoryStore,
    RowTint, SheetStore, StoreCall, StoreOp, ValueInput,
};

use crate::{date, job_board_preamble, row, store_with_jobs, JOBS};

fn june() -> DateRange {
    DateRange::new(date(2024, 6, 1), date(2024, 6, 10))
}

fn roster() -> EditPolicy {
    EditPolicy::new(vec!["Alex".into(), "Sam".into()])
}

fn load(store: &MemoryStore, range: DateRange) -> Board {
    match Board::load(store, JOBS, range, roster()).unwrap() {
        LoadOutcome::Loaded(board) => board,
        other => panic!("expected a loaded board, got {other:?}"),
    }
}

/// Five data rows, out of date order, one unparsable and one out of range
fn sample_store() -> MemoryStore {
    store_with_jobs(&[
        ["2024/06/05", "OPT-2", "Washer", "100", "", "Ready", "", "Restock bin 3", ""],
        ["2024/06/02", "OPT-1", "Hex bolt", "40", "12", " Done ", "Alex", "", "nan"],
        ["June 3rd", "OPT-9", "Mystery", "1", "", "Ready", "", "", ""],
        ["2024/07/01", "OPT-3", "Bracket", "5", "", "", "", "", ""],
        ["2024/06/02", "OPT-4", "Hinge", "8", "", "", "", "None", ""],
    ])
}

#[test]
fn test_header_only_table_has_no_orders() {
    let store = store_with_jobs(&[]);
    let outcome = Board::load(&store, JOBS, june(), roster()).unwrap();
    assert!(matches!(outcome, LoadOutcome::NoOrders));
    assert_eq!(store.call_count(StoreOp::ReadAll), 1);
    assert_eq!(store.calls().len(), 1);
}

#[test]
fn test_title_only_table_has_no_orders() {
    let outcome = Board::from_rows(JOBS, &[row(&[JOBS])], june(), roster()).unwrap();
    assert!(matches!(outcome, LoadOutcome::NoOrders));
}

#[test]
fn test_no_orders_even_without_date_column() {
    let rows = vec![row(&[JOBS]), row(&["Item Name"])];
    let outcome = Board::from_rows(JOBS, &rows, june(), roster()).unwrap();
    assert!(matches!(outcome, LoadOutcome::NoOrders));
}

#[test]
fn test_filter_and_stable_sort() {
    let board = load(&sample_store(), june());

    let items: Vec<&str> = board.view().iter().map(|r| r.get(Column::ItemName)).collect();
    assert_eq!(items, vec!["Hex bolt", "Hinge", "Washer"]);

    let sheet_rows: Vec<u32> = board.addresses().iter().map(|a| a.sheet_row()).collect();
    assert_eq!(sheet_rows, vec![4, 7, 3]);
}

#[test]
fn test_reversed_range_matches_same_rows() {
    let store = sample_store();
    let forward = load(&store, june());
    let reversed = load(&store, DateRange::new(date(2024, 6, 10), date(2024, 6, 1)));
    assert_eq!(reversed.range(), forward.range());
    assert_eq!(reversed.view(), forward.view());
}

#[test]
fn test_single_day_range() {
    let board = load(&sample_store(), DateRange::single(date(2024, 6, 5)));
    assert_eq!(board.len(), 1);
    assert_eq!(board.addresses()[0].sheet_row(), 3);
}

#[test]
fn test_unparsable_date_never_matches() {
    let store = store_with_jobs(&[
        ["June 3rd", "OPT-9", "Mystery", "1", "", "", "", "", ""],
        ["2024-06-03", "OPT-8", "Dashed", "1", "", "", "", "", ""],
    ]);
    let everything = DateRange::new(date(1900, 1, 1), date(2999, 12, 31));
    let outcome = Board::load(&store, JOBS, everything, roster()).unwrap();
    assert!(matches!(outcome, LoadOutcome::NoMatches));
}

#[test]
fn test_no_matches() {
    let outcome = Board::load(&sample_store(), JOBS, DateRange::single(date(2023, 1, 1)), roster())
        .unwrap();
    assert!(matches!(outcome, LoadOutcome::NoMatches));
}

#[test]
fn test_normalization() {
    let board = load(&sample_store(), june());
    let rows = board.view().rows();

    assert_eq!(rows[0].get(Column::Status), "Done");
    assert_eq!(rows[0].get(Column::WorkerComment), "");
    assert_eq!(rows[1].get(Column::Status), "Waiting");
    assert_eq!(rows[1].get(Column::Instructions), "");
    assert_eq!(rows[2].get(Column::Instructions), "Restock bin 3");
    assert_eq!(board.snapshot(), board.view());
}

#[test]
fn test_placeholder_status_stays_blank() {
    let mut store = store_with_jobs(&[
        ["2024/06/03", "OPT-1", "Hex bolt", "40", "", "None", "", "", ""],
        ["2024/06/03", "OPT-2", "Washer", "10", "", "nan", "", "", ""],
        ["2024/06/04", "OPT-3", "Hinge", "8", "", "", "", "", ""],
    ]);
    let mut board = load(&store, june());
    let statuses: Vec<&str> = board.view().iter().map(|r| r.get(Column::Status)).collect();
    assert_eq!(statuses, ["", "", "Waiting"]);

    let written = board.write_back(&mut store).unwrap();
    assert!(written.is_empty());
}

#[test]
fn test_missing_date_column() {
    let mut rows = vec![row(&[JOBS]), row(&["Day", "Item Name"])];
    rows.push(row(&["2024/06/02", "Hex bolt"]));
    let err = Board::from_rows(JOBS, &rows, june(), roster()).unwrap_err();
    match err {
        BoardError::MissingColumns(missing) => assert_eq!(missing, vec!["Date"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_display_columns_listed() {
    let rows = vec![
        row(&[JOBS]),
        row(&["Date", "Option ID", "Item Name", "Target Qty", "Status"]),
        row(&["2024/06/02", "OPT-1", "Hex bolt", "40", "Ready"]),
    ];
    let err = Board::from_rows(JOBS, &rows, june(), roster()).unwrap_err();
    match err {
        BoardError::MissingColumns(missing) => assert_eq!(
            missing,
            vec!["Completed Qty", "Worker", "Instructions", "Worker Comment"]
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_misplaced_columns_rejected() {
    let mut header = job_board_preamble()[1].clone();
    header.swap(4, 5);
    let rows = vec![
        row(&[JOBS]),
        header,
        row(&["2024/06/02", "OPT-1", "Hex bolt", "40", "Ready", "", "", "", ""]),
    ];
    let err = Board::from_rows(JOBS, &rows, june(), roster()).unwrap_err();
    match err {
        BoardError::ColumnLayout { column, expected, found } => {
            assert_eq!(column, "Completed Qty");
            assert_eq!(expected, "E");
            assert_eq!(found, "F");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_status_edit_writes_one_full_row() {
    let mut store = sample_store();
    let mut board = load(&store, june());
    store.clear_calls();

    // "Hinge" sits at sheet row 7 and displays second
    board.set_cell(1, Column::Status, "Blocked (low stock)").unwrap();
    assert_eq!(board.dirty_rows(), vec![1]);
    assert_eq!(board.dirty_addresses()[0].sheet_row(), 7);

    let written = board.write_back(&mut store).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(
        store.calls(),
        vec![StoreCall::UpdateRange {
            table: JOBS.to_string(),
            range: "A7:I7".to_string(),
            values: vec![row(&[
                "2024/06/02",
                "OPT-4",
                "Hinge",
                "8",
                "",
                "Blocked (low stock)",
                "",
                "",
                "",
            ])],
            input: ValueInput::UserEntered,
        }]
    );
    assert_eq!(store.rows(JOBS).unwrap()[6][5], "Blocked (low stock)");
    assert!(board.dirty_rows().is_empty());
}

#[test]
fn test_unchanged_board_writes_nothing() {
    let mut store = sample_store();
    let mut board = load(&store, june());
    store.clear_calls();

    // setting a cell to its current value is not an edit
    board.set_cell(2, Column::Status, "Ready").unwrap();
    let written = board.write_back(&mut store).unwrap();
    assert!(written.is_empty());
    assert_eq!(store.call_count(StoreOp::UpdateRange), 0);
}

#[test]
fn test_one_update_per_dirty_row() {
    let mut store = sample_store();
    let mut board = load(&store, june());
    store.clear_calls();

    board.set_cell(0, Column::WorkerComment, "bin empty").unwrap();
    board.set_cell(2, Column::Worker, "Sam").unwrap();
    board.set_cell(2, Column::CompletedQty, "100").unwrap();
    board.write_back(&mut store).unwrap();

    let ranges: Vec<String> = store
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            StoreCall::UpdateRange { range, .. } => Some(range),
            _ => None,
        })
        .collect();
    assert_eq!(ranges, vec!["A4:I4", "A3:I3"]);
}

#[test]
fn test_write_back_overwrites_concurrent_change() {
    let mut store = sample_store();
    let mut board = load(&store, june());

    // another session edits the same row after our load
    store
        .update_range(
            JOBS,
            &CellRange::parse("I3").unwrap(),
            &[row(&["theirs"])],
            ValueInput::Raw,
        )
        .unwrap();

    board.set_cell(2, Column::WorkerComment, "ours").unwrap();
    board.write_back(&mut store).unwrap();
    assert_eq!(store.rows(JOBS).unwrap()[2][8], "ours");
}

#[test]
fn test_partial_failure_keeps_written_rows() {
    let mut store = sample_store();
    let mut board = load(&store, june());

    board.set_cell(0, Column::Status, "Deferred").unwrap();
    board.set_cell(1, Column::Status, "Done").unwrap();
    board.set_cell(2, Column::Status, "Done").unwrap();
    store.fail_after(StoreOp::UpdateRange, 1, "network unreachable");

    let err = board.write_back(&mut store).unwrap_err();
    match &err {
        BoardError::WriteBack { row, written, .. } => {
            assert_eq!(*row, 7);
            assert_eq!(*written, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("network unreachable"));
    assert_eq!(board.dirty_rows(), vec![1, 2]);

    store.clear_calls();
    let written = board.write_back(&mut store).unwrap();
    let rows: Vec<u32> = written.rows.iter().map(|a| a.sheet_row()).collect();
    assert_eq!(rows, vec![7, 3]);
}

#[test]
fn test_edit_rules() {
    let mut board = load(&sample_store(), june());

    assert!(matches!(
        board.set_cell(0, Column::ItemName, "Lag bolt"),
        Err(BoardError::ReadOnly(_))
    ));
    assert!(matches!(
        board.set_cell(0, Column::Status, "Shipped"),
        Err(BoardError::InvalidOption { .. })
    ));
    assert!(board.set_cell(0, Column::Status, "").is_err());
    assert!(matches!(
        board.set_cell(0, Column::Worker, "Jordan"),
        Err(BoardError::InvalidOption { .. })
    ));
    assert!(matches!(
        board.set_cell(9, Column::Worker, "Sam"),
        Err(BoardError::RowOutOfRange { row: 9, len: 3 })
    ));
    assert!(board.dirty_rows().is_empty());

    board.set_cell(0, Column::Worker, "Other").unwrap();
    board.set_cell(0, Column::Instructions, "see admin").unwrap();
    assert_eq!(board.dirty_rows(), vec![0]);

    board.discard_edits();
    assert!(board.dirty_rows().is_empty());
}

#[test]
fn test_tints_follow_dates() {
    let store = store_with_jobs(&[
        ["2024/06/02", "OPT-1", "Hex bolt", "40", "", "Ready", "", "", ""],
        ["2024/06/02", "OPT-2", "Washer", "10", "", "Waiting", "", "", ""],
        ["2024/06/02", "OPT-3", "Hinge", "5", "5", "Done", "", "", ""],
        ["2024/06/04", "OPT-4", "Bracket", "2", "", "Ready", "", "", ""],
        ["2024/06/07", "OPT-5", "Nut", "2", "", "Ready", "", "", ""],
    ]);
    let mut board = load(&store, june());

    let tints = board.tints();
    assert_eq!(tints[0], tints[1]);
    assert_eq!(
        tints,
        vec![RowTint::Even, RowTint::Even, RowTint::Done, RowTint::Odd, RowTint::Even]
    );

    board.set_cell(3, Column::Status, "Done").unwrap();
    assert_eq!(board.tints()[3], RowTint::Done);
}
