//! In-memory table of scraped records.

use crate::utils::error::TableError;
use log::debug;
use std::cmp::Ordering;
use std::fmt;

/// One table value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    /// Numeric value, if the cell has been coerced successfully
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Coerce to a number; anything unparseable or non-finite becomes `Missing`
    fn coerced(&self) -> Cell {
        match self {
            Cell::Number(n) => Cell::Number(*n),
            Cell::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Cell::Number(n),
                _ => Cell::Missing,
            },
            Cell::Missing => Cell::Missing,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Missing => Ok(()),
        }
    }
}

static MISSING: Cell = Cell::Missing;

/// One scraped row
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub cells: Vec<Cell>,
}

impl Record {
    pub fn from_strings(values: Vec<String>) -> Self {
        Self {
            cells: values.into_iter().map(Cell::Text).collect(),
        }
    }

    /// Cell at `index`; reading past the end of a short row yields `Missing`
    pub fn get(&self, index: usize) -> &Cell {
        self.cells.get(index).unwrap_or(&MISSING)
    }
}

/// Ordered records sharing one header sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Record>) -> Self {
        Self { headers, rows }
    }

    /// Build a table of text cells
    pub fn from_strings(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::new(headers, rows.into_iter().map(Record::from_strings).collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header
    pub fn column_index(&self, column: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| TableError::MissingColumn(column.to_string()))
    }

    /// Coerce the named columns to numbers in place
    ///
    /// Invalid values become `Cell::Missing` rather than raising.
    pub fn coerce_numeric(&mut self, columns: &[&str]) -> Result<(), TableError> {
        for column in columns {
            let index = self.column_index(column)?;
            let mut missing = 0usize;

            for row in &mut self.rows {
                let coerced = row.get(index).coerced();
                if coerced.is_missing() {
                    missing += 1;
                }
                if index < row.cells.len() {
                    row.cells[index] = coerced;
                }
            }

            debug!("Coerced column '{}' ({} missing values)", column, missing);
        }
        Ok(())
    }

    /// Stable sort, descending by a numeric column
    ///
    /// Missing values go last; equal keys keep their relative order.
    pub fn sort_desc_by(&mut self, column: &str) -> Result<(), TableError> {
        let index = self.column_index(column)?;

        self.rows.sort_by(|a, b| {
            match (a.get(index).as_number(), b.get(index).as_number()) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        Ok(())
    }

    /// All cells of one column, in row order
    pub fn column(&self, column: &str) -> Result<Vec<&Cell>, TableError> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|r| r.get(index)).collect())
    }
}
