//! Row transforms for multi-series charts.
//!
//! Both transforms keep one entry per input row and, for readable rows, one
//! value per requested field. A row with any unreadable cell becomes an
//! `Err` as a whole so callers can skip it without shifting the others.

use crate::error::{DataError, Result};
use indexmap::IndexMap;
use vellum_core::Value;

/// One data record, field name to value.
pub type Row = IndexMap<String, Value>;

/// Build a [`Row`] from `(field, value)` pairs.
pub fn row<I, K, V>(cells: I) -> Row
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    cells
        .into_iter()
        .map(|(field, value)| (field.into(), value.into()))
        .collect()
}

/// The numeric value of `field` in row `index`.
pub fn cell(row: &Row, index: usize, field: &str) -> Result<f64> {
    let value = row.get(field).ok_or_else(|| DataError::MissingField {
        row: index,
        field: field.to_string(),
    })?;
    value.as_number().ok_or_else(|| DataError::NonNumeric {
        row: index,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// A stacked segment, from the running total before it to the one after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn extent(&self) -> f64 {
        self.end - self.start
    }
}

/// Raw series values per row.
pub fn group_series<S: AsRef<str>>(rows: &[Row], fields: &[S]) -> Vec<Result<Vec<f64>>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            fields
                .iter()
                .map(|field| cell(row, index, field.as_ref()))
                .collect()
        })
        .collect()
}

/// Cumulative spans per row, in field order.
pub fn stack_series<S: AsRef<str>>(rows: &[Row], fields: &[S]) -> Vec<Result<Vec<Span>>> {
    group_series(rows, fields)
        .into_iter()
        .map(|values| {
            values.map(|values| {
                let mut total = 0.0;
                values
                    .into_iter()
                    .map(|value| {
                        let start = total;
                        total += value;
                        Span { start, end: total }
                    })
                    .collect()
            })
        })
        .collect()
}

/// Upper bound of the value axis.
///
/// An explicit `y_max` is returned as given. Otherwise the bound is the
/// largest stacked total (or the largest single value when not stacked)
/// over readable rows, never below zero.
pub fn value_domain_max<S: AsRef<str>>(
    rows: &[Row],
    fields: &[S],
    is_stacked: bool,
    y_max: Option<f64>,
) -> f64 {
    if let Some(y_max) = y_max {
        return y_max;
    }

    let max = if is_stacked {
        stack_series(rows, fields)
            .into_iter()
            .flatten()
            .flatten()
            .map(|span| span.end)
            .fold(f64::NEG_INFINITY, f64::max)
    } else {
        group_series(rows, fields)
            .into_iter()
            .flatten()
            .flatten()
            .fold(f64::NEG_INFINITY, f64::max)
    };

    max.max(0.0)
}
