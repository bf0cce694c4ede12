//! The store connection, opened once per process

use std::fmt;

use tracing::{info, warn};
use workboard_core::{Error as StoreError, SheetStore};
use workboard_csv::CsvStore;

use crate::config::{StoreConfig, TablesConfig};
use crate::error::{BoardError, Result};
use crate::schema::{preamble, Column, ORDER_FORM_HEADER};

/// Either an open store or the reason it could not be opened
///
/// Opening failures are not fatal: the connection stays offline and every
/// store-dependent action returns [`BoardError::Offline`] with the raw
/// diagnostic text.
pub enum Connection {
    Connected(Box<dyn SheetStore>),
    Offline { reason: String },
}

impl Connection {
    /// Open the spreadsheet named in `config`
    pub fn establish(config: &StoreConfig) -> Self {
        match CsvStore::open(&config.root, &config.spreadsheet) {
            Ok(store) => {
                info!(spreadsheet = %config.spreadsheet, "connected to store");
                Connection::Connected(Box::new(store))
            }
            Err(err) => {
                warn!(spreadsheet = %config.spreadsheet, error = %err, "store unavailable");
                Connection::Offline {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Wrap an already open store
    pub fn from_store(store: impl SheetStore + 'static) -> Self {
        Connection::Connected(Box::new(store))
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Connection::Connected(_))
    }

    pub fn offline_reason(&self) -> Option<&str> {
        match self {
            Connection::Connected(_) => None,
            Connection::Offline { reason } => Some(reason),
        }
    }

    pub fn store(&self) -> Result<&dyn SheetStore> {
        match self {
            Connection::Connected(store) => Ok(&**store),
            Connection::Offline { reason } => Err(BoardError::Offline(reason.clone())),
        }
    }

    pub fn store_mut(&mut self) -> Result<&mut dyn SheetStore> {
        match self {
            Connection::Connected(store) => Ok(&mut **store),
            Connection::Offline { reason } => Err(BoardError::Offline(reason.clone())),
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connection::Connected(store) => f
                .debug_tuple("Connected")
                .field(&store.spreadsheet())
                .finish(),
            Connection::Offline { reason } => {
                f.debug_struct("Offline").field("reason", reason).finish()
            }
        }
    }
}

/// Create the spreadsheet directory and open it
pub fn create_store(config: &StoreConfig) -> Result<CsvStore> {
    CsvStore::create(&config.root, &config.spreadsheet).map_err(|e| BoardError::Store(e.into()))
}

/// Create the order form and job board tables, skipping any that exist
///
/// Returns the names of the tables created.
pub fn init_tables(store: &mut dyn SheetStore, tables: &TablesConfig) -> Result<Vec<String>> {
    let job_board_header = Column::display_headers();
    let layouts: [(&str, &[&str]); 2] = [
        (tables.order_form.as_str(), &ORDER_FORM_HEADER),
        (tables.job_board.as_str(), job_board_header.as_slice()),
    ];

    let existing = store.table_names()?;
    let mut created = Vec::new();
    for (name, header) in layouts {
        if existing.iter().any(|t| t == name) {
            info!(table = name, "table already exists");
            continue;
        }
        match store.create_table(name, &preamble(name, header)) {
            Ok(()) => created.push(name.to_string()),
            Err(StoreError::DuplicateTable(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(created)
}
