/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Plain-text formats for matrices and vectors.
//!
//! Matrix files hold one row per line.  Entries are separated by whitespace
//! and/or commas, and may be integers, floats, or fractions like `1/2`.
//! Blank lines and anything after a `#` are ignored.
//!
//! ```text
//! # an augmented system
//! 1, 2, -5,   3
//! 0, 1, 1/2, -1
//! ```

use crate::config::DisplayStyle;
use crate::FailResult;

use failure::ResultExt;
use itertools::Itertools;
use matkit_kernel::{Matrix, Number, Vector};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ParseError {
    #[fail(display = "line {}: {}", line, message)]
    BadEntry { line: usize, message: String },

    #[fail(display = "line {}: row has {} entries, but earlier rows have {}", line, len, expected)]
    Ragged { line: usize, len: usize, expected: usize },

    #[fail(display = "no rows found")]
    NoRows,

    #[fail(display = "vector has no entries")]
    EmptyVector,

    #[fail(display = "{}", _0)]
    Matrix(matkit_kernel::Error),
}

fn split_entries(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

fn parse_entries(line: &str, line_number: usize) -> Result<Vector, ParseError> {
    split_entries(line)
        .map(|s| s.parse::<Number>().map_err(|e| ParseError::BadEntry {
            line: line_number,
            message: e.to_string(),
        }))
        .collect()
}

pub fn parse_matrix(text: &str) -> Result<Matrix, ParseError> {
    let mut rows = vec![];
    let mut width = None;
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = match line.find('#') {
            Some(start) => &line[..start],
            None => line,
        };

        let row = parse_entries(content, line_number)?;
        if row.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(ParseError::Ragged { line: line_number, len: row.len(), expected });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::NoRows);
    }
    Matrix::from_rows(rows).map_err(ParseError::Matrix)
}

pub fn read_matrix(path: &Path) -> FailResult<Matrix> {
    let text = ::std::fs::read_to_string(path)
        .with_context(|e| format!("while reading '{}': {}", path.display(), e))?;
    let matrix = parse_matrix(&text)
        .with_context(|e| format!("in '{}': {}", path.display(), e))?;
    debug!("read {} matrix from '{}'", matrix.dims(), path.display());
    Ok(matrix)
}

/// Parse a comma-separated vector argument such as `"1,2,-3"` or `"0.5, 1/3"`.
pub fn parse_vector(s: &str) -> Result<Vector, ParseError> {
    let v = parse_entries(s, 1)?;
    match v.is_empty() {
        true => Err(ParseError::EmptyVector),
        false => Ok(v),
    }
}

/// `(v1,v2,v3)`
pub fn format_vector(v: &[Number]) -> String {
    format!("({})", v.iter().join(","))
}

/// `[v1, v2, v3]`
pub fn format_list(v: &[Number]) -> String {
    format!("[{}]", v.iter().join(", "))
}

pub fn format_matrix(m: &Matrix, style: DisplayStyle) -> String {
    match style {
        DisplayStyle::Tabs => m.to_string(),
        DisplayStyle::List => format!("[{}]\n", m.rows().map(format_list).join(", ")),
    }
}
