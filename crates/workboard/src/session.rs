//! Per-user session state
//!
//! A [`Session`] is created when a user opens the board and dropped when
//! they leave. It holds nothing that outlives the session: the selected
//! mode, the admin's order grid and its generation counter, a one-shot
//! notice, and the currently loaded job board.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::debug;
use workboard_core::SheetStore;

use crate::board::{Board, EditPolicy, LoadOutcome, WriteBack};
use crate::config::{BoardConfig, TablesConfig};
use crate::error::{BoardError, Result};
use crate::order::{submit_orders, OrderGrid, SubmitOutcome};
use crate::range::DateRange;

/// Which surface the user is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    Admin,
    #[default]
    Worker,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Admin => "admin",
            Mode::Worker => "worker",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Mode::Admin),
            "worker" => Ok(Mode::Worker),
            other => Err(format!("unknown mode {other:?} (expected admin or worker)")),
        }
    }
}

/// A message shown once, then cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved { rows: usize },
    NothingToSave,
    NoOrders,
    NoMatches,
}

impl Notice {
    /// Whether this is a warning rather than a confirmation
    pub fn is_warning(self) -> bool {
        !matches!(self, Notice::Saved { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Saved { rows } => write!(f, "Saved {rows} work order(s)"),
            Notice::NothingToSave => f.write_str("Nothing to save: every order row is blank"),
            Notice::NoOrders => f.write_str("No orders yet"),
            Notice::NoMatches => f.write_str("No orders match the selected dates"),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    mode: Mode,
    tables: TablesConfig,
    policy: EditPolicy,
    grid: OrderGrid,
    grid_generation: u64,
    notice: Option<Notice>,
    board: Option<Board>,
    range: Option<DateRange>,
}

impl Session {
    pub fn new(config: &BoardConfig, mode: Mode) -> Self {
        Self {
            mode,
            tables: config.tables.clone(),
            policy: EditPolicy::new(config.board.roster.clone()),
            grid: OrderGrid::new(),
            grid_generation: 0,
            notice: None,
            board: None,
            range: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn require(&self, mode: Mode, action: &'static str) -> Result<()> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(BoardError::WrongMode {
                action,
                mode: self.mode,
            })
        }
    }

    pub fn grid(&self) -> &OrderGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut OrderGrid {
        &mut self.grid
    }

    /// Bumped every time a submit succeeds and the grid is replaced
    pub fn grid_generation(&self) -> u64 {
        self.grid_generation
    }

    /// Identity of the current grid; changes when a fresh grid must be shown
    pub fn grid_key(&self) -> String {
        format!("order-grid-{}", self.grid_generation)
    }

    /// Submit the order grid (admin only)
    ///
    /// On success the grid is replaced by a fresh blank one and a success
    /// notice is armed. A blank grid arms a warning instead. On error the
    /// grid, its generation and the notice are left exactly as they were.
    pub fn submit(&mut self, store: &mut dyn SheetStore, order_date: NaiveDate) -> Result<SubmitOutcome> {
        self.require(Mode::Admin, "submit orders")?;
        let outcome = submit_orders(store, &self.tables.order_form, order_date, self.grid.rows())?;
        match outcome {
            SubmitOutcome::Saved { rows } => {
                self.grid = OrderGrid::new();
                self.grid_generation += 1;
                self.notice = Some(Notice::Saved { rows });
            }
            SubmitOutcome::NothingToSave => self.notice = Some(Notice::NothingToSave),
        }
        Ok(outcome)
    }

    /// The pending notice, if any, clearing it
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// The pending notice without clearing it
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Load the job board for `range`, replacing any loaded board (worker only)
    ///
    /// Returns the board, or `None` when the table has no orders or none in
    /// range (a notice says which).
    pub fn load_board(&mut self, store: &dyn SheetStore, range: DateRange) -> Result<Option<&mut Board>> {
        self.require(Mode::Worker, "load the job board")?;
        self.board = None;
        self.range = Some(range);
        match Board::load(store, &self.tables.job_board, range, self.policy.clone())? {
            LoadOutcome::Loaded(board) => self.board = Some(board),
            LoadOutcome::NoOrders => self.notice = Some(Notice::NoOrders),
            LoadOutcome::NoMatches => self.notice = Some(Notice::NoMatches),
        }
        Ok(self.board.as_mut())
    }

    /// Discard the loaded board, edits included, and load it again
    pub fn refresh(&mut self, store: &dyn SheetStore) -> Result<Option<&mut Board>> {
        self.require(Mode::Worker, "refresh the job board")?;
        let range = self.range.ok_or(BoardError::NotLoaded)?;
        debug!(%range, "refreshing job board");
        self.load_board(store, range)
    }

    /// Write back edits to the loaded board
    pub fn write_back(&mut self, store: &mut dyn SheetStore) -> Result<WriteBack> {
        self.require(Mode::Worker, "write back the job board")?;
        self.board
            .as_mut()
            .ok_or(BoardError::NotLoaded)?
            .write_back(store)
    }

    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }
}
