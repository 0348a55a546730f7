//! Edit-distance engine.
//!
//! Two equivalent ways to get a Levenshtein cost between byte sequences:
//!
//! - [`build`] fills the whole `(|s|+1) × (|t|+1)` [`Tableau`] under a chosen
//!   [`Recurrence`] and hands it back for inspection.
//! - [`distance`] keeps only two rows and returns the bottom-right cell.
//!
//! Both refuse equal or empty inputs with [`EditError::TrivialMatrix`]
//! (see [`is_trivial`]); callers compute those answers themselves.
//!
//! # Recurrences
//!
//! 1. `Levenshtein`: global alignment
//! 2. `SmithWaterman`: local alignment, clamped at zero
//!
//! Comparison is byte-by-byte; no Unicode awareness.
//!
//! [`EditError::TrivialMatrix`]: crate::error::EditError::TrivialMatrix

pub mod levenshtein;
pub mod matrix;
pub mod recurrence;

pub use levenshtein::{distance, similarity};
pub use matrix::{Tableau, build, matrix_distance};
pub use recurrence::Recurrence;

/// Whether `s` and `t` are byte-equal or either is empty.
pub fn is_trivial(s: impl AsRef<[u8]>, t: impl AsRef<[u8]>) -> bool {
    let (s, t) = (s.as_ref(), t.as_ref());
    s == t || s.is_empty() || t.is_empty()
}
