//! Common fixtures for E2E tests.

use chrono::NaiveDate;
use workboard::schema::{preamble, ORDER_FORM_HEADER};
use workboard::{Column, MemoryStore, Row, SheetStore, ValueInput};

pub const ORDERS: &str = "Order Form";
pub const JOBS: &str = "Job Board";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Job board preamble: title row, then the display headers
pub fn job_board_preamble() -> Vec<Row> {
    preamble(JOBS, &Column::display_headers())
}

/// A store holding an empty order form and a job board with `data` rows
pub fn store_with_jobs(data: &[[&str; 9]]) -> MemoryStore {
    let mut store = MemoryStore::new("Growth Checklist");
    store.insert_table(ORDERS, preamble(ORDERS, &ORDER_FORM_HEADER));
    let mut rows = job_board_preamble();
    rows.extend(data.iter().map(|cells| row(cells)));
    store.insert_table(JOBS, rows);
    store
}

/// Project order form data rows onto an empty job board, matching by header
///
/// Stands in for the sheet formula that mirrors the order form onto the
/// job board: "Order Date" feeds "Date" and "Admin Comment" feeds
/// "Instructions"; every other column shares its name.
pub fn mirror_orders(store: &mut dyn SheetStore) {
    let orders = store.read_all(ORDERS).unwrap();
    let header = &orders[1];
    let source = |name: &str| header.iter().position(|h| h == name).unwrap();

    let projected: Vec<Row> = orders[2..]
        .iter()
        .map(|order| {
            Column::DISPLAY
                .iter()
                .map(|column| {
                    let name = match column {
                        Column::Date => "Order Date",
                        Column::Instructions => "Admin Comment",
                        other => other.header(),
                    };
                    order.get(source(name)).cloned().unwrap_or_default()
                })
                .collect()
        })
        .collect();
    store.append_rows(JOBS, &projected, ValueInput::Raw).unwrap();
}
