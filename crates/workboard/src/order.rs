//! Order submission: admin-authored work orders appended to the order form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use workboard_core::{Row, SheetStore, ValueInput};

use crate::error::{BoardError, Result};
use crate::schema::Status;

/// Rows shown in a fresh order grid
pub const INITIAL_GRID_ROWS: usize = 5;

/// Format of the order date stamped on every submitted row
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a grid cell counts as empty (missing or whitespace only)
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// One row of the admin's order grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDraft {
    pub option_id: Option<String>,
    pub item_name: Option<String>,
    pub target_qty: Option<String>,
    pub comment: Option<String>,
}

/// Editable order grid fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    OptionId,
    ItemName,
    TargetQty,
    Comment,
}

impl OrderDraft {
    pub fn new(option_id: &str, item_name: &str, target_qty: &str, comment: &str) -> Self {
        Self {
            option_id: Some(option_id.to_string()),
            item_name: Some(item_name.to_string()),
            target_qty: Some(target_qty.to_string()),
            comment: Some(comment.to_string()),
        }
    }

    fn fields(&self) -> [Option<&str>; 4] {
        [
            self.option_id.as_deref(),
            self.item_name.as_deref(),
            self.target_qty.as_deref(),
            self.comment.as_deref(),
        ]
    }

    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let slot = match field {
            OrderField::OptionId => &mut self.option_id,
            OrderField::ItemName => &mut self.item_name,
            OrderField::TargetQty => &mut self.target_qty,
            OrderField::Comment => &mut self.comment,
        };
        *slot = Some(value.into());
    }

    /// A draft is kept if any of its four fields has content
    pub fn is_valid(&self) -> bool {
        self.fields().into_iter().any(|v| !is_blank(v))
    }

    /// The order form row for this draft
    ///
    /// Layout: order date, option id, item name, target qty, admin comment,
    /// status, completed qty, worker, worker comment. The last three are
    /// filled in later by workers.
    pub fn to_row(&self, order_date: &str) -> Row {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            order_date.to_string(),
            text(&self.option_id),
            text(&self.item_name),
            text(&self.target_qty),
            text(&self.comment),
            Status::Ready.label().to_string(),
            String::new(),
            String::new(),
            String::new(),
        ]
    }
}

/// The admin's free-form grid of draft orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderGrid {
    rows: Vec<OrderDraft>,
}

impl Default for OrderGrid {
    fn default() -> Self {
        Self {
            rows: vec![OrderDraft::default(); INITIAL_GRID_ROWS],
        }
    }
}

impl OrderGrid {
    /// A grid of [`INITIAL_GRID_ROWS`] blank rows
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid holding exactly `rows`
    pub fn from_rows(rows: Vec<OrderDraft>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[OrderDraft] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row and return its index
    pub fn add_row(&mut self, draft: OrderDraft) -> usize {
        self.rows.push(draft);
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> Option<OrderDraft> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn set(&mut self, index: usize, field: OrderField, value: impl Into<String>) -> Result<()> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(BoardError::RowOutOfRange { row: index, len })?;
        row.set(field, value);
        Ok(())
    }

    /// Rows that would be submitted
    pub fn valid_rows(&self) -> impl Iterator<Item = &OrderDraft> {
        self.rows.iter().filter(|d| d.is_valid())
    }
}

/// Result of a submit that reached a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every row was blank; the store was not contacted
    NothingToSave,
    /// All valid rows were appended in one call
    Saved { rows: usize },
}

/// Append the valid drafts to the order form table
///
/// Blank drafts are dropped. If none remain the store is never called.
/// Otherwise every valid draft is stamped with `order_date` and the initial
/// status and the rows are appended in a single call. A store failure is
/// returned as-is; the caller's grid is not touched either way.
pub fn submit_orders(
    store: &mut dyn SheetStore,
    table: &str,
    order_date: NaiveDate,
    drafts: &[OrderDraft],
) -> Result<SubmitOutcome> {
    let date = order_date.format(ORDER_DATE_FORMAT).to_string();
    let rows: Vec<Row> = drafts
        .iter()
        .filter(|d| d.is_valid())
        .map(|d| d.to_row(&date))
        .collect();

    if rows.is_empty() {
        info!("no order rows to save");
        return Ok(SubmitOutcome::NothingToSave);
    }

    store.append_rows(table, &rows, ValueInput::UserEntered)?;
    info!(table, rows = rows.len(), order_date = %date, "appended work orders");
    Ok(SubmitOutcome::Saved { rows: rows.len() })
}
