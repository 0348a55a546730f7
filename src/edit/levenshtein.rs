//! Levenshtein edit distance on a two-row rolling buffer.
//!
//! Computes the same value as the bottom-right cell of a full Levenshtein
//! [`Tableau`](super::Tableau) while holding only `2 * (|t| + 1)` cells.

use tracing::trace;

use super::is_trivial;
use crate::error::{EditError, EditResult};

/// Compute the Levenshtein edit distance between two byte sequences.
///
/// Returns the minimum number of single-byte edits (insertions, deletions,
/// substitutions) required to transform `s` into `t`.
///
/// Equal inputs and inputs where either side is empty are rejected with
/// [`EditError::TrivialMatrix`].
pub fn distance(s: impl AsRef<[u8]>, t: impl AsRef<[u8]>) -> EditResult<usize> {
    let (s, t) = (s.as_ref(), t.as_ref());
    if is_trivial(s, t) {
        return Err(EditError::TrivialMatrix);
    }

    let mut v0: Vec<usize> = (0..=t.len()).collect();
    let mut v1 = vec![0usize; t.len() + 1];

    for (i, &a) in s.iter().enumerate() {
        v1[0] = i + 1;
        for (j, &b) in t.iter().enumerate() {
            let cost = usize::from(a != b);
            v1[j + 1] = (v1[j] + 1) // insertion
                .min(v0[j + 1] + 1) // deletion
                .min(v0[j] + cost); // substitution
        }
        v0.copy_from_slice(&v1);
    }

    trace!(s_len = s.len(), t_len = t.len(), distance = v1[t.len()], "rolling distance");
    Ok(v1[t.len()])
}

/// Compute similarity ratio between two byte sequences (0.0 = completely
/// different, 1.0 = identical).
pub fn similarity(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> f64 {
    let (a, b) = (a.as_ref(), b.as_ref());
    match distance(a, b) {
        Ok(dist) => 1.0 - (dist as f64 / a.len().max(b.len()) as f64),
        // Equal (including both empty) is a perfect match; one empty side
        // means every byte of the other must be inserted.
        Err(EditError::TrivialMatrix) => {
            if a == b {
                1.0
            } else {
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(distance("hello", "hello"), Err(EditError::TrivialMatrix));
        assert!((similarity("hello", "hello") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty() {
        assert_eq!(distance("", "abc"), Err(EditError::TrivialMatrix));
        assert_eq!(distance("abc", ""), Err(EditError::TrivialMatrix));
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("abc", "").abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_edit() {
        assert_eq!(distance("kitten", "sitten"), Ok(1)); // substitution
        assert_eq!(distance("cat", "cats"), Ok(1)); // insertion
        assert_eq!(distance("cats", "cat"), Ok(1)); // deletion
    }

    #[test]
    fn test_classic() {
        assert_eq!(distance("kitten", "sitting"), Ok(3));
        assert_eq!(distance("saturday", "sunday"), Ok(3));
    }

    #[test]
    fn test_bytes_not_chars() {
        // "é" is two bytes in UTF-8, "e" is one.
        assert_eq!(distance("é", "e"), Ok(2));
    }

    #[test]
    fn test_similarity_range() {
        let s = similarity("hello", "world");
        assert!((0.0..=1.0).contains(&s));
        assert!((similarity("ab", "cd")).abs() < f64::EPSILON);
    }
}
