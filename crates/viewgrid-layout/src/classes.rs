#![forbid(unsafe_code)]

//! CSS utility-class rendering and parsing for grid templates and spans.
//!
//! Embedders that style with utility classes exchange templates as strings
//! like `"grid grid-cols-2 grid-rows-1"` and `"col-span-2 row-span-1"`.
//! Rendering always writes both axes explicitly. Parsing is lenient the way
//! the class syntax is: unknown tokens are ignored and a missing axis
//! defaults to 1; only a malformed or zero count on a recognized token is
//! an error.

use crate::catalog::{CellSpan, GridTemplate};

/// Class-string parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassParseError {
    /// A recognized token carried a non-numeric count, e.g. `grid-cols-x`.
    MalformedCount { token: String },
    /// A recognized token carried a zero count; grids and spans are >= 1.
    ZeroCount { token: String },
    /// A parsed count does not fit the template's `u8` representation.
    CountTooLarge { token: String },
}

impl std::fmt::Display for ClassParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedCount { token } => write!(f, "malformed count in {token:?}"),
            Self::ZeroCount { token } => write!(f, "zero count in {token:?}"),
            Self::CountTooLarge { token } => write!(f, "count too large in {token:?}"),
        }
    }
}

impl std::error::Error for ClassParseError {}

/// Scan whitespace-separated tokens for `<prefix><N>`, returning the last
/// match or 1 when absent.
fn scan_count(class: &str, prefix: &str) -> Result<u8, ClassParseError> {
    let mut found: Option<u8> = None;
    for token in class.split_whitespace() {
        let Some(suffix) = token.strip_prefix(prefix) else {
            continue;
        };
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClassParseError::MalformedCount {
                token: token.to_string(),
            });
        }
        let value: u8 = suffix.parse().map_err(|_| ClassParseError::CountTooLarge {
            token: token.to_string(),
        })?;
        if value == 0 {
            return Err(ClassParseError::ZeroCount {
                token: token.to_string(),
            });
        }
        found = Some(value);
    }
    Ok(found.unwrap_or(1))
}

impl GridTemplate {
    /// Render as container classes, e.g. `"grid grid-cols-2 grid-rows-1"`.
    #[must_use]
    pub fn class_string(&self) -> String {
        format!("grid grid-cols-{} grid-rows-{}", self.cols, self.rows)
    }

    /// Parse container classes. A missing axis defaults to 1.
    pub fn parse_class(class: &str) -> Result<GridTemplate, ClassParseError> {
        Ok(GridTemplate {
            cols: scan_count(class, "grid-cols-")?,
            rows: scan_count(class, "grid-rows-")?,
        })
    }
}

impl CellSpan {
    /// Render as item classes, e.g. `"col-span-2 row-span-1"`.
    #[must_use]
    pub fn class_string(&self) -> String {
        format!("col-span-{} row-span-{}", self.col, self.row)
    }

    /// Parse item classes. A missing axis defaults to 1.
    pub fn parse_class(class: &str) -> Result<CellSpan, ClassParseError> {
        Ok(CellSpan {
            col: scan_count(class, "col-span-")?,
            row: scan_count(class, "row-span-")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
