//! In-process store that records every call
//!
//! Used by tests and dry runs. Every trait method is logged as a
//! [`StoreCall`] before it runs, so callers can assert exactly which remote
//! calls an operation would have made. Failures can be injected per
//! operation to exercise error paths.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use crate::address::CellRange;
use crate::error::{Error, Result};
use crate::input::ValueInput;
use crate::store::{patch_rows, Row, SheetStore};

/// Store operations, for call logs and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    TableNames,
    ReadAll,
    AppendRows,
    UpdateRange,
    CreateTable,
}

/// One recorded store call
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    TableNames,
    ReadAll {
        table: String,
    },
    AppendRows {
        table: String,
        rows: Vec<Row>,
        input: ValueInput,
    },
    UpdateRange {
        table: String,
        range: String,
        values: Vec<Row>,
        input: ValueInput,
    },
    CreateTable {
        table: String,
    },
}

impl StoreCall {
    /// The operation this call performed
    pub fn op(&self) -> StoreOp {
        match self {
            StoreCall::TableNames => StoreOp::TableNames,
            StoreCall::ReadAll { .. } => StoreOp::ReadAll,
            StoreCall::AppendRows { .. } => StoreOp::AppendRows,
            StoreCall::UpdateRange { .. } => StoreOp::UpdateRange,
            StoreCall::CreateTable { .. } => StoreOp::CreateTable,
        }
    }
}

#[derive(Debug, Clone)]
struct InjectedFailure {
    /// Calls to let through before failing
    skip: usize,
    message: String,
}

/// An in-memory [`SheetStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    name: String,
    tables: Vec<(String, Vec<Row>)>,
    calls: RefCell<Vec<StoreCall>>,
    failures: RefCell<HashMap<StoreOp, InjectedFailure>>,
}

impl MemoryStore {
    /// Create an empty store bound to a spreadsheet name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Insert or replace a table without recording a call
    pub fn insert_table(&mut self, table: impl Into<String>, rows: Vec<Row>) {
        let table = table.into();
        match self.tables.iter_mut().find(|(name, _)| *name == table) {
            Some((_, existing)) => *existing = rows,
            None => self.tables.push((table, rows)),
        }
    }

    /// Current rows of a table without recording a call
    pub fn rows(&self, table: &str) -> Option<&[Row]> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, rows)| rows.as_slice())
    }

    /// All calls made so far, oldest first
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls made for one operation
    pub fn call_count(&self, op: StoreOp) -> usize {
        self.calls.borrow().iter().filter(|c| c.op() == op).count()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Fail the next call of `op` with `message`
    pub fn fail_next(&self, op: StoreOp, message: impl Into<String>) {
        self.fail_after(op, 0, message);
    }

    /// Let `skip` calls of `op` succeed, then fail the following one
    ///
    /// The injection is one-shot: after it fires, `op` succeeds again.
    pub fn fail_after(&self, op: StoreOp, skip: usize, message: impl Into<String>) {
        self.failures.borrow_mut().insert(
            op,
            InjectedFailure {
                skip,
                message: message.into(),
            },
        );
    }

    fn record(&self, call: StoreCall) -> Result<()> {
        let op = call.op();
        debug!(?op, "memory store call");
        self.calls.borrow_mut().push(call);

        let mut failures = self.failures.borrow_mut();
        let fire = match failures.get_mut(&op) {
            Some(failure) if failure.skip > 0 => {
                failure.skip -= 1;
                false
            }
            Some(_) => true,
            None => false,
        };
        if fire {
            if let Some(failure) = failures.remove(&op) {
                return Err(Error::other(failure.message));
            }
        }
        Ok(())
    }

    fn table_mut(&mut self, table: &str) -> Result<&mut Vec<Row>> {
        self.tables
            .iter_mut()
            .find(|(name, _)| name == table)
            .map(|(_, rows)| rows)
            .ok_or_else(|| Error::TableNotFound(table.to_string()))
    }
}

impl SheetStore for MemoryStore {
    fn spreadsheet(&self) -> &str {
        &self.name
    }

    fn table_names(&self) -> Result<Vec<String>> {
        self.record(StoreCall::TableNames)?;
        Ok(self.tables.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        self.record(StoreCall::ReadAll {
            table: table.to_string(),
        })?;
        self.rows(table)
            .map(<[Row]>::to_vec)
            .ok_or_else(|| Error::TableNotFound(table.to_string()))
    }

    fn append_rows(&mut self, table: &str, rows: &[Row], input: ValueInput) -> Result<()> {
        self.record(StoreCall::AppendRows {
            table: table.to_string(),
            rows: rows.to_vec(),
            input,
        })?;
        let target = self.table_mut(table)?;
        target.extend(
            rows.iter()
                .map(|row| row.iter().map(|v| input.apply(v)).collect::<Row>()),
        );
        Ok(())
    }

    fn update_range(
        &mut self,
        table: &str,
        range: &CellRange,
        values: &[Row],
        input: ValueInput,
    ) -> Result<()> {
        self.record(StoreCall::UpdateRange {
            table: table.to_string(),
            range: range.to_string(),
            values: values.to_vec(),
            input,
        })?;
        let target = self.table_mut(table)?;
        patch_rows(target, range, values, input)
    }

    fn create_table(&mut self, table: &str, preamble: &[Row]) -> Result<()> {
        self.record(StoreCall::CreateTable {
            table: table.to_string(),
        })?;
        if self.rows(table).is_some() {
            return Err(Error::DuplicateTable(table.to_string()));
        }
        self.tables.push((table.to_string(), preamble.to_vec()));
        Ok(())
    }
}
