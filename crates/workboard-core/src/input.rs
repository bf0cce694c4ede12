//! Value input semantics for store writes

use chrono::NaiveDate;

/// Date format the store displays dates in
pub const STORE_DATE_FORMAT: &str = "%Y/%m/%d";

/// How written values are interpreted by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueInput {
    /// Values are stored exactly as given
    Raw,
    /// Values are parsed as if typed into the sheet by a user
    #[default]
    UserEntered,
}

impl ValueInput {
    /// Apply this input mode to a single cell value
    pub fn apply(self, value: &str) -> String {
        match self {
            ValueInput::Raw => value.to_string(),
            ValueInput::UserEntered => coerce_user_entered(value),
        }
    }
}

/// Coerce a value the way the store treats typed input
///
/// Only dates are recognized: `2024-06-01` and `2024/6/1` both become
/// `2024/06/01`. Everything else is kept verbatim.
pub fn coerce_user_entered(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 8 && trimmed.as_bytes()[0].is_ascii_digit() {
        for format in ["%Y-%m-%d", STORE_DATE_FORMAT] {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return date.format(STORE_DATE_FORMAT).to_string();
            }
        }
    }
    value.to_string()
}
