//! Pure-strategy Nash equilibrium enumeration.
//!
//! A cell (i, j) is a pure equilibrium when neither player can profit by
//! deviating unilaterally: player 1's payoff at (i, j) is maximal over all
//! rows in column j, and player 2's payoff at (i, j) is maximal over all
//! columns in row i. Every cell is checked, so ties are all reported — if
//! two rows tie for player 1's best response, each tied row that also
//! satisfies player 2's condition is its own equilibrium.
//!
//! Complexity is O(m·n·(m+n)); for the strategy sets this engine sees
//! (≤ ~10×10) the scan is effectively instantaneous.

use serde::{Deserialize, Serialize};

use crate::game::matrix::PayoffMatrix;

/// Strictness epsilon for best-response comparisons. A deviation must beat
/// the candidate by more than this to disqualify it, so exact ties survive.
pub(crate) const TIE_EPSILON: f64 = 1e-9;

/// A single pure-strategy Nash equilibrium cell.
///
/// `(row, col)` uniquely identifies the cell, giving the result set its
/// set semantics: no two entries can share coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PureEquilibrium {
    /// Player 1's equilibrium strategy (row index).
    pub row: usize,
    /// Player 2's equilibrium strategy (column index).
    pub col: usize,
    /// Player 1's payoff at the equilibrium.
    pub p1_payoff: f64,
    /// Player 2's payoff at the equilibrium.
    pub p2_payoff: f64,
}

/// Enumerate all pure-strategy Nash equilibria of the game.
///
/// Returns an empty vector when no pure equilibrium exists; that is a
/// valid outcome (e.g. Matching Pennies), not an error.
pub fn find_pure_equilibria(matrix: &PayoffMatrix) -> Vec<PureEquilibrium> {
    let (m, n) = matrix.shape();
    let mut equilibria = Vec::new();

    for i in 0..m {
        for j in 0..n {
            let p1_payoff = matrix.p1(i, j);
            let p2_payoff = matrix.p2(i, j);

            // No row deviation for player 1 against column j.
            let p1_best = (0..m).all(|k| matrix.p1(k, j) <= p1_payoff + TIE_EPSILON);
            if !p1_best {
                continue;
            }

            // No column deviation for player 2 against row i.
            let p2_best = (0..n).all(|l| matrix.p2(i, l) <= p2_payoff + TIE_EPSILON);
            if p2_best {
                equilibria.push(PureEquilibrium {
                    row: i,
                    col: j,
                    p1_payoff,
                    p2_payoff,
                });
            }
        }
    }

    equilibria
}
