use std::fmt;

use chrono::{DateTime, Local};
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::catalog;
use crate::quote_client::FetchError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no data points selected")]
    NoFields,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// One fetched snapshot of a symbol's selected fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    symbol: String,
    codes: Vec<String>,
    values: Vec<String>,
    fetched_at: DateTime<Local>,
}

impl Report {
    /// Build a report from a raw response line, one value per code in `codes`.
    pub fn from_line(symbol: &str, codes: &[String], line: &str) -> Result<Self, FetchError> {
        let values = split_line(line)?;

        if values.len() != codes.len() {
            return Err(FetchError::Malformed {
                expected: codes.len(),
                actual: values.len(),
            });
        }

        Ok(Self {
            symbol: symbol.to_string(),
            codes: codes.to_vec(),
            values,
            fetched_at: Local::now(),
        })
    }

    /// Reported values, one per requested code, in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn headers(&self) -> Vec<&str> {
        self.codes.iter().map(|c| catalog::label(c)).collect()
    }
}

/// Read the first CSV record of a response body. A blank body yields no values.
fn split_line(line: &str) -> Result<Vec<String>, FetchError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(Vec::new());
    }

    Ok(record.iter().map(str::to_string).collect())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.headers();
        let widths: Vec<usize> = headers
            .iter()
            .zip(&self.values)
            .map(|(h, v)| h.chars().count().max(v.chars().count()))
            .collect();

        let rule: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        writeln!(f, "{rule}")?;
        for (h, w) in headers.iter().zip(widths.iter().copied()) {
            write!(f, "| {h:<w$} ")?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{rule}")?;
        for (v, w) in self.values.iter().zip(widths.iter().copied()) {
            write!(f, "| {v:<w$} ")?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{rule}")?;
        write!(
            f,
            "{} as of {}",
            self.symbol,
            self.fetched_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
