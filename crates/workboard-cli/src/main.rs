//! Workboard CLI - warehouse work orders on a spreadsheet store

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use workboard::prelude::*;
use workboard::{create_store, RowAddress};

#[derive(Parser)]
#[command(name = "workboard")]
#[command(author, version, about = "Warehouse work-order board backed by a spreadsheet")]
struct Cli {
    /// Config file (TOML). Falls back to the WORKBOARD_SECRET variable, then defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the spreadsheet and its two tables
    Init,

    /// List the tables in the spreadsheet
    Tables,

    /// Append work orders to the order form (admin)
    Submit {
        /// Order date (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// CSV file with option_id,item_name,target_qty,comment columns
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// One order as "option id,item name,target qty,comment"
        #[arg(short, long = "row")]
        rows: Vec<String>,
    },

    /// Show the job board for a date range (worker)
    Board {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Edit one board row and write it back (worker)
    Edit {
        #[command(flatten)]
        range: RangeArgs,

        /// Row number as shown by `board` (1-based)
        #[arg(short, long)]
        row: usize,

        /// Cell assignment such as status=Done or worker_comment="bin 4"
        #[arg(short, long = "set", value_parser = parse_assignment, required = true)]
        sets: Vec<(Column, String)>,
    },

    /// Export the job board for a date range to XLSX
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Output directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(clap::Args)]
struct RangeArgs {
    /// First date of the range
    #[arg(short, long)]
    from: NaiveDate,

    /// Last date of the range (default: same as --from)
    #[arg(short, long)]
    to: Option<NaiveDate>,
}

impl RangeArgs {
    fn range(&self) -> DateRange {
        match self.to {
            Some(to) => DateRange::new(self.from, to),
            None => DateRange::single(self.from),
        }
    }
}

fn parse_assignment(s: &str) -> std::result::Result<(Column, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected column=value, got {s:?}"))?;
    let column = key.parse::<Column>().map_err(|e| e.to_string())?;
    Ok((column, value.to_string()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;

    if let Commands::Init = cli.command {
        return init(&config);
    }

    let mut connection = Connection::establish(&config.store);
    if let Some(reason) = connection.offline_reason() {
        warn!("store actions are disabled");
        eprintln!("Store unavailable: {reason}");
    }

    match cli.command {
        Commands::Init => Ok(()),
        Commands::Tables => list_tables(&connection),
        Commands::Submit { date, input, rows } => {
            submit(&config, &mut connection, date, input.as_deref(), &rows)
        }
        Commands::Board { range } => show_board(&config, &connection, range.range()),
        Commands::Edit { range, row, sets } => {
            edit(&config, &mut connection, range.range(), row, &sets)
        }
        Commands::Export { range, out } => export(&config, &connection, range.range(), &out),
    }
}

fn init(config: &BoardConfig) -> Result<()> {
    let mut store = create_store(&config.store).with_context(|| {
        format!(
            "Failed to create spreadsheet '{}' in '{}'",
            config.store.spreadsheet,
            config.store.root.display()
        )
    })?;
    let created = init_tables(&mut store, &config.tables).context("Failed to create tables")?;

    if created.is_empty() {
        println!("Spreadsheet '{}' is already set up", config.store.spreadsheet);
    }
    for table in created {
        println!("Created table '{}'", table);
    }
    Ok(())
}

fn list_tables(connection: &Connection) -> Result<()> {
    let store = connection.store()?;
    let names = store.table_names().context("Failed to list tables")?;

    println!("Spreadsheet: {}", store.spreadsheet());
    println!("Tables: {}", names.len());
    for (i, name) in names.iter().enumerate() {
        println!("  [{}] {}", i, name);
    }
    Ok(())
}

fn submit(
    config: &BoardConfig,
    connection: &mut Connection,
    date: Option<NaiveDate>,
    input: Option<&Path>,
    rows: &[String],
) -> Result<()> {
    let mut drafts = match input {
        Some(path) => read_drafts(path)?,
        None => Vec::new(),
    };
    drafts.extend(rows.iter().map(|row| parse_draft(row)));
    if drafts.is_empty() {
        bail!("Nothing to submit: pass --input or at least one --row");
    }

    let mut session = Session::new(config, Mode::Admin);
    *session.grid_mut() = OrderGrid::from_rows(drafts);

    let order_date = date.unwrap_or_else(|| Local::now().date_naive());
    session
        .submit(connection.store_mut()?, order_date)
        .context("Failed to submit orders")?;

    if let Some(notice) = session.take_notice() {
        print_notice(notice);
    }
    Ok(())
}

fn read_drafts(path: &Path) -> Result<Vec<OrderDraft>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<OrderDraft>, _>>()
        .with_context(|| format!("Failed to read orders from '{}'", path.display()))
}

fn parse_draft(row: &str) -> OrderDraft {
    let mut fields = row.splitn(4, ',').map(|f| Some(f.to_string()));
    OrderDraft {
        option_id: fields.next().flatten(),
        item_name: fields.next().flatten(),
        target_qty: fields.next().flatten(),
        comment: fields.next().flatten(),
    }
}

/// Open a worker session with the board for `range` loaded
///
/// Returns `None` after printing the notice when there is nothing to show.
fn load_board(config: &BoardConfig, connection: &Connection, range: DateRange) -> Result<Option<Session>> {
    let mut session = Session::new(config, Mode::Worker);
    let loaded = session
        .load_board(connection.store()?, range)
        .with_context(|| format!("Failed to load '{}'", config.tables.job_board))?
        .is_some();

    if !loaded {
        if let Some(notice) = session.take_notice() {
            print_notice(notice);
        }
        return Ok(None);
    }
    Ok(Some(session))
}

fn show_board(config: &BoardConfig, connection: &Connection, range: DateRange) -> Result<()> {
    let Some(session) = load_board(config, connection, range)? else {
        return Ok(());
    };
    let board = session.board().context("No job board is loaded")?;

    println!("{} ({})", board.table(), range);
    print_view(board.view(), &board.tints(), board.addresses());
    Ok(())
}

fn edit(
    config: &BoardConfig,
    connection: &mut Connection,
    range: DateRange,
    row: usize,
    sets: &[(Column, String)],
) -> Result<()> {
    let Some(mut session) = load_board(config, connection, range)? else {
        return Ok(());
    };
    let board = session.board_mut().context("No job board is loaded")?;
    if row == 0 || row > board.len() {
        bail!("Row {} is out of range (board has {} rows)", row, board.len());
    }

    for (column, value) in sets {
        board
            .set_cell(row - 1, *column, value)
            .with_context(|| format!("Cannot set {} on row {}", column, row))?;
    }

    let written = session
        .write_back(connection.store_mut()?)
        .context("Failed to write back changes")?;
    if written.is_empty() {
        println!("No changes to write");
    }
    for address in &written.rows {
        println!("Updated sheet row {}", address.sheet_row());
    }
    Ok(())
}

fn export(config: &BoardConfig, connection: &Connection, range: DateRange, out: &Path) -> Result<()> {
    let Some(session) = load_board(config, connection, range)? else {
        return Ok(());
    };
    let board = session.board().context("No job board is loaded")?;

    let path = board
        .export_to_dir(out)
        .with_context(|| format!("Failed to export to '{}'", out.display()))?;
    eprintln!("Wrote {} rows to '{}'", board.len(), path.display());
    Ok(())
}

fn print_notice(notice: Notice) {
    if notice.is_warning() {
        eprintln!("Warning: {}", notice);
    } else {
        println!("{}", notice);
    }
}

/// Print the board as an aligned table with a row number and tint tag
fn print_view(view: &BoardView, tints: &[RowTint], addresses: &[RowAddress]) {
    let headers = Column::display_headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in view {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("{:>4}  {:<5}  {:<4}  {}", "#", "sheet", "tint", line(headers.clone()));
    for (i, row) in view.iter().enumerate() {
        let tint = match tints.get(i) {
            Some(RowTint::Done) => "done",
            Some(RowTint::Odd) => "odd",
            _ => "even",
        };
        let sheet_row = addresses.get(i).map(|a| a.sheet_row()).unwrap_or_default();
        let cells = row.cells().iter().map(String::as_str).collect();
        println!("{:>4}  {:<5}  {:<4}  {}", i + 1, sheet_row, tint, line(cells));
    }
}
