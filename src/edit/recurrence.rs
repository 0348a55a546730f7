//! Cell recurrences for the cost tableau.

use serde::{Deserialize, Serialize};

use super::matrix::Tableau;
use crate::math::min_int;

/// Rule computing `M[i][j]` from its three upper/left neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recurrence {
    /// Best global alignment.
    #[default]
    Levenshtein,
    /// Best local alignment: a fresh alignment may start at any cell.
    SmithWaterman,
}

impl Recurrence {
    /// Value of `m[i][j]` given the substitution cost of `s[i-1]` vs `t[j-1]`
    /// (0 on a match, 1 otherwise).
    ///
    /// Requires `i >= 1`, `j >= 1` and the three neighbours already written.
    pub fn cell(self, m: &Tableau, i: usize, j: usize, subst_cost: usize) -> usize {
        let deletion = m[i - 1][j] + 1;
        let insertion = m[i][j - 1] + 1;
        let substitution = m[i - 1][j - 1] + subst_cost;

        match self {
            Self::Levenshtein => min_int(&[deletion, insertion, substitution]),
            Self::SmithWaterman => min_int(&[0, deletion, insertion, substitution]),
        }
        .unwrap_or_default()
    }
}
