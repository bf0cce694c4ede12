//! Session lifecycle: grid resets, notices, loading and refresh

use pretty_assertions::assert_eq;
use workboard::order::OrderField;
use workboard::{
    BoardConfig, BoardError, Column, Connection, DateRange, Mode, Notice, Session, StoreOp,
    SubmitOutcome,
};

use crate::{date, store_with_jobs, ORDERS};

fn admin() -> Session {
    Session::new(&BoardConfig::default(), Mode::Admin)
}

#[test]
fn test_successful_submit_resets_grid() {
    let mut store = store_with_jobs(&[]);
    let mut session = admin();
    session.grid_mut().set(0, OrderField::ItemName, "Hex bolt").unwrap();
    session.grid_mut().set(3, OrderField::TargetQty, "12").unwrap();

    let outcome = session.submit(&mut store, date(2024, 6, 3)).unwrap();
    assert_eq!(outcome, SubmitOutcome::Saved { rows: 2 });
    assert_eq!(session.grid_key(), "order-grid-1");
    assert_eq!(session.grid().valid_rows().count(), 0);

    // the success notice is shown once
    assert_eq!(session.take_notice(), Some(Notice::Saved { rows: 2 }));
    assert_eq!(session.take_notice(), None);
}

#[test]
fn test_failed_submit_keeps_grid() {
    let mut store = store_with_jobs(&[]);
    store.fail_next(StoreOp::AppendRows, "permission denied");
    let mut session = admin();
    session.grid_mut().set(0, OrderField::OptionId, "OPT-1").unwrap();
    let before = session.grid().clone();

    let err = session.submit(&mut store, date(2024, 6, 3)).unwrap_err();
    assert!(err.to_string().contains("permission denied"));
    assert_eq!(session.grid(), &before);
    assert_eq!(session.grid_key(), "order-grid-0");
    assert_eq!(session.notice(), None);

    // retrying the same grid succeeds
    session.submit(&mut store, date(2024, 6, 3)).unwrap();
    assert_eq!(store.rows(ORDERS).unwrap().len(), 3);
}

#[test]
fn test_blank_submit_warns() {
    let mut store = store_with_jobs(&[]);
    let mut session = admin();

    let outcome = session.submit(&mut store, date(2024, 6, 3)).unwrap();
    assert_eq!(outcome, SubmitOutcome::NothingToSave);
    assert_eq!(session.grid_key(), "order-grid-0");
    assert_eq!(session.take_notice(), Some(Notice::NothingToSave));
    assert!(store.calls().is_empty());
}

#[test]
fn test_refresh_discards_edits() {
    let mut store = store_with_jobs(&[[
        "2024/06/02", "OPT-1", "Hex bolt", "40", "", "Ready", "", "", "",
    ]]);
    let mut session = Session::new(&BoardConfig::default(), Mode::Worker);

    assert!(matches!(session.refresh(&store), Err(BoardError::NotLoaded)));

    let range = DateRange::single(date(2024, 6, 2));
    let board = session.load_board(&store, range).unwrap().unwrap();
    board.set_cell(0, Column::Status, "Done").unwrap();
    assert_eq!(session.board().unwrap().dirty_rows(), vec![0]);

    let board = session.refresh(&store).unwrap().unwrap();
    assert!(board.dirty_rows().is_empty());
    assert_eq!(board.view().rows()[0].get(Column::Status), "Ready");
    assert_eq!(store.call_count(StoreOp::ReadAll), 2);

    session.board_mut().unwrap().set_cell(0, Column::Status, "Done").unwrap();
    let written = session.write_back(&mut store).unwrap();
    assert_eq!(written.len(), 1);
}

#[test]
fn test_empty_loads_set_notices() {
    let store = store_with_jobs(&[]);
    let mut session = Session::new(&BoardConfig::default(), Mode::Worker);
    let range = DateRange::single(date(2024, 6, 2));

    assert!(session.load_board(&store, range).unwrap().is_none());
    assert_eq!(session.take_notice(), Some(Notice::NoOrders));

    let mut store = store_with_jobs(&[[
        "2024/05/02", "OPT-1", "Hex bolt", "40", "", "", "", "", "",
    ]]);
    assert!(session.load_board(&store, range).unwrap().is_none());
    assert_eq!(session.take_notice(), Some(Notice::NoMatches));
    assert!(matches!(session.write_back(&mut store), Err(BoardError::NotLoaded)));
}

#[test]
fn test_worker_cannot_submit() {
    let mut store = store_with_jobs(&[]);
    let mut session = Session::new(&BoardConfig::default(), Mode::Worker);
    session.grid_mut().set(0, OrderField::ItemName, "Hex bolt").unwrap();

    let err = session.submit(&mut store, date(2024, 6, 3)).unwrap_err();
    assert!(matches!(
        err,
        BoardError::WrongMode {
            mode: Mode::Worker,
            ..
        }
    ));
    assert!(store.calls().is_empty());
    assert_eq!(session.grid_key(), "order-grid-0");
    assert_eq!(session.notice(), None);

    session.set_mode(Mode::Admin);
    let outcome = session.submit(&mut store, date(2024, 6, 3)).unwrap();
    assert_eq!(outcome, SubmitOutcome::Saved { rows: 1 });
}

#[test]
fn test_admin_cannot_touch_board() {
    let mut store = store_with_jobs(&[[
        "2024/06/02", "OPT-1", "Hex bolt", "40", "", "Ready", "", "", "",
    ]]);
    let mut session = admin();
    let range = DateRange::single(date(2024, 6, 2));

    assert!(matches!(
        session.load_board(&store, range),
        Err(BoardError::WrongMode { mode: Mode::Admin, .. })
    ));
    assert!(matches!(
        session.refresh(&store),
        Err(BoardError::WrongMode { .. })
    ));
    assert!(matches!(
        session.write_back(&mut store),
        Err(BoardError::WrongMode { .. })
    ));
    assert!(store.calls().is_empty());
    assert!(session.board().is_none());

    session.set_mode(Mode::Worker);
    assert!(session.load_board(&store, range).unwrap().is_some());
}

#[test]
fn test_offline_connection_blocks_actions() {
    let mut connection = Connection::Offline {
        reason: "credentials rejected".into(),
    };
    let mut session = admin();

    let err = connection
        .store_mut()
        .and_then(|store| session.submit(store, date(2024, 6, 3)))
        .unwrap_err();
    assert!(matches!(&err, BoardError::Offline(reason) if reason == "credentials rejected"));
    assert_eq!(session.grid_key(), "order-grid-0");

    let connection = Connection::from_store(store_with_jobs(&[]));
    assert!(connection.store().is_ok());
}
