//! Full backtraceable cost tableau.

use std::ops::Index;

use serde::{Serialize, Serializer};
use tracing::trace;

use super::{Recurrence, is_trivial};
use crate::error::{EditError, EditResult};

/// `(|s|+1) × (|t|+1)` grid of alignment costs, stored row-major.
///
/// Row `i` corresponds to the prefix `s[..i]`, column `j` to `t[..j]`.
/// `m[i][j]` and `m[(i, j)]` both address a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl Tableau {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// Number of rows (`|s| + 1`).
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`|t| + 1`).
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Rows top to bottom, each `cols()` long.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Bottom-right cell: the cost of aligning the full inputs.
    pub fn final_cost(&self) -> usize {
        self.cells.last().copied().unwrap_or_default()
    }
}

impl Index<usize> for Tableau {
    type Output = [usize];

    fn index(&self, i: usize) -> &[usize] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &usize {
        &self[i][j]
    }
}

impl Serialize for Tableau {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

/// Build the full cost tableau of `s` against `t` under `recurrence`.
///
/// Borders are written as `0..=|s|` down the first column and `0..=|t|`
/// along the first row for every recurrence, Smith–Waterman included.
pub fn build(
    s: impl AsRef<[u8]>,
    t: impl AsRef<[u8]>,
    recurrence: Recurrence,
) -> EditResult<Tableau> {
    let (s, t) = (s.as_ref(), t.as_ref());
    if is_trivial(s, t) {
        return Err(EditError::TrivialMatrix);
    }

    let mut m = Tableau::zeroed(s.len() + 1, t.len() + 1);
    for i in 1..m.rows {
        m.set(i, 0, i);
    }
    for j in 1..m.cols {
        m.set(0, j, j);
    }

    for (i, &a) in s.iter().enumerate() {
        for (j, &b) in t.iter().enumerate() {
            let cost = usize::from(a != b);
            let value = recurrence.cell(&m, i + 1, j + 1, cost);
            m.set(i + 1, j + 1, value);
        }
    }

    trace!(rows = m.rows, cols = m.cols, ?recurrence, "tableau built");
    Ok(m)
}

/// Levenshtein distance read off a fully built tableau.
pub fn matrix_distance(s: impl AsRef<[u8]>, t: impl AsRef<[u8]>) -> EditResult<usize> {
    let (s, t) = (s.as_ref(), t.as_ref());
    let m = build(s, t, Recurrence::Levenshtein)?;
    Ok(m[s.len()][t.len()])
}
