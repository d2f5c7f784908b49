//! Mixed-strategy Nash equilibrium solving.
//!
//! Two paths:
//!
//! - **2×2 closed form**: each player mixes to make the opponent
//!   indifferent between their two strategies. Solving the indifference
//!   equations gives player 2's column-0 probability
//!   `q = (d-b)/((a-b)-(c-d))` from player 1's payoffs and, symmetrically,
//!   player 1's row-0 probability `p = (h-f)/((e-f)-(g-h))` from
//!   player 2's. A near-zero denominator or a probability outside [0, 1]
//!   means no interior mixed equilibrium exists via this method.
//! - **Support enumeration** for general m×n games: candidate equal-size
//!   support pairs are enumerated lexicographically by increasing size.
//!   For each pair the indifference conditions form a square linear
//!   system; a solution with non-negative probabilities that admits no
//!   profitable deviation outside the support is a Nash equilibrium. The
//!   first verified candidate is returned, making the search
//!   deterministic. Equal support sizes suffice for nondegenerate games,
//!   the standard restriction for this algorithm.
//!
//! Singleton supports are not enumerated: a size-1 support pair is a pure
//! profile, and those are the pure finder's job.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::game::config::SolverConfig;
use crate::game::matrix::PayoffMatrix;

/// Denominator guard for the 2×2 closed form. Below this magnitude the
/// indifference system is singular and no proper mixed equilibrium exists
/// via this method.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Pivot guard for Gaussian elimination on support systems.
const PIVOT_EPSILON: f64 = 1e-10;

/// A mixed-strategy Nash equilibrium.
///
/// Both probability vectors are full-length (one entry per row/column),
/// with zeros outside the equilibrium support. Each vector sums to 1
/// within the configured tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedEquilibrium {
    /// Player 1's probability over rows.
    pub p1_row_probabilities: Vec<f64>,
    /// Player 2's probability over columns.
    pub p2_col_probabilities: Vec<f64>,
    /// Expected payoffs `(player 1, player 2)` under the equilibrium.
    pub expected_payoffs: (f64, f64),
}

/// Compute a mixed-strategy Nash equilibrium, if one exists.
///
/// 2×2 games use the exact closed form; larger games use support
/// enumeration when `config.support_enumeration` is set. Returns `None`
/// when no (strictly) mixed equilibrium is found — callers should consult
/// the pure finder for degenerate cases.
pub fn find_mixed_equilibrium(
    matrix: &PayoffMatrix,
    config: &SolverConfig,
) -> Option<MixedEquilibrium> {
    let (m, n) = matrix.shape();
    if (m, n) == (2, 2) {
        solve_2x2(matrix)
    } else if config.support_enumeration {
        solve_by_support_enumeration(matrix, config)
    } else {
        None
    }
}

/// Exact 2×2 indifference solve.
fn solve_2x2(matrix: &PayoffMatrix) -> Option<MixedEquilibrium> {
    let (a, b) = (matrix.p1(0, 0), matrix.p1(0, 1));
    let (c, d) = (matrix.p1(1, 0), matrix.p1(1, 1));
    let (e, f) = (matrix.p2(0, 0), matrix.p2(0, 1));
    let (g, h) = (matrix.p2(1, 0), matrix.p2(1, 1));

    // q makes player 1 indifferent between rows; p makes player 2
    // indifferent between columns.
    let denom_q = (a - b) - (c - d);
    let denom_p = (e - f) - (g - h);
    if denom_q.abs() < SINGULAR_EPSILON || denom_p.abs() < SINGULAR_EPSILON {
        return None;
    }

    let q = (d - b) / denom_q;
    let p = (h - f) / denom_p;
    if !(0.0..=1.0).contains(&p) || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let p1_expected = p * (q * a + (1.0 - q) * b) + (1.0 - p) * (q * c + (1.0 - q) * d);
    let p2_expected = p * (q * e + (1.0 - q) * f) + (1.0 - p) * (q * g + (1.0 - q) * h);

    Some(MixedEquilibrium {
        p1_row_probabilities: vec![p, 1.0 - p],
        p2_col_probabilities: vec![q, 1.0 - q],
        expected_payoffs: (p1_expected, p2_expected),
    })
}

/// Support enumeration over equal-size supports.
fn solve_by_support_enumeration(
    matrix: &PayoffMatrix,
    config: &SolverConfig,
) -> Option<MixedEquilibrium> {
    let (m, n) = matrix.shape();
    let mut cap = m.min(n);
    if let Some(max) = config.max_support_size {
        cap = cap.min(max);
    }

    for k in 2..=cap {
        for rows in combinations(m, k) {
            for cols in combinations(n, k) {
                if let Some(eq) = try_support(matrix, &rows, &cols, config) {
                    debug!(
                        "support enumeration found equilibrium on rows {:?}, cols {:?}",
                        rows, cols
                    );
                    return Some(eq);
                }
            }
        }
    }

    None
}

/// Solve and verify one candidate support pair.
fn try_support(
    matrix: &PayoffMatrix,
    rows: &[usize],
    cols: &[usize],
    config: &SolverConfig,
) -> Option<MixedEquilibrium> {
    let k = rows.len();
    let (m, n) = matrix.shape();

    // Player 2's mix y over `cols` must make player 1 indifferent across
    // `rows`, all support rows earning the common payoff u. Unknowns are
    // [y_0 .. y_{k-1}, u].
    let mut system = Vec::with_capacity(k + 1);
    let mut rhs = Vec::with_capacity(k + 1);
    for &i in rows {
        let mut eq = Vec::with_capacity(k + 1);
        for &j in cols {
            eq.push(matrix.p1(i, j));
        }
        eq.push(-1.0);
        system.push(eq);
        rhs.push(0.0);
    }
    let mut normalize = vec![1.0; k];
    normalize.push(0.0);
    system.push(normalize);
    rhs.push(1.0);

    let y_solution = solve_linear(system, rhs)?;
    let (y, u) = (&y_solution[..k], y_solution[k]);

    // Symmetric system for player 1's mix x over `rows` and player 2's
    // common payoff v.
    let mut system = Vec::with_capacity(k + 1);
    let mut rhs = Vec::with_capacity(k + 1);
    for &j in cols {
        let mut eq = Vec::with_capacity(k + 1);
        for &i in rows {
            eq.push(matrix.p2(i, j));
        }
        eq.push(-1.0);
        system.push(eq);
        rhs.push(0.0);
    }
    let mut normalize = vec![1.0; k];
    normalize.push(0.0);
    system.push(normalize);
    rhs.push(1.0);

    let x_solution = solve_linear(system, rhs)?;
    let (x, v) = (&x_solution[..k], x_solution[k]);

    let tol = config.probability_tolerance;
    if y.iter().chain(x.iter()).any(|&p| p < -tol || p > 1.0 + tol) {
        return None;
    }

    // No profitable deviation outside the support for either player.
    let dev = config.deviation_tolerance;
    for i in 0..m {
        if rows.contains(&i) {
            continue;
        }
        let payoff: f64 = cols.iter().zip(y).map(|(&j, &yj)| matrix.p1(i, j) * yj).sum();
        if payoff > u + dev {
            return None;
        }
    }
    for j in 0..n {
        if cols.contains(&j) {
            continue;
        }
        let payoff: f64 = rows.iter().zip(x).map(|(&i, &xi)| matrix.p2(i, j) * xi).sum();
        if payoff > v + dev {
            return None;
        }
    }

    // Embed the support probabilities into full-length vectors, flushing
    // tolerance-level negatives to zero.
    let mut p1_row_probabilities = vec![0.0; m];
    for (&i, &xi) in rows.iter().zip(x) {
        p1_row_probabilities[i] = xi.max(0.0);
    }
    let mut p2_col_probabilities = vec![0.0; n];
    for (&j, &yj) in cols.iter().zip(y) {
        p2_col_probabilities[j] = yj.max(0.0);
    }

    let mut p1_expected = 0.0;
    let mut p2_expected = 0.0;
    for i in 0..m {
        for j in 0..n {
            let weight = p1_row_probabilities[i] * p2_col_probabilities[j];
            p1_expected += weight * matrix.p1(i, j);
            p2_expected += weight * matrix.p2(i, j);
        }
    }

    Some(MixedEquilibrium {
        p1_row_probabilities,
        p2_col_probabilities,
        expected_payoffs: (p1_expected, p2_expected),
    })
}

/// Solve a square linear system by Gaussian elimination with partial
/// pivoting. Returns `None` when the system is singular, which here just
/// means the candidate support admits no indifference solution.
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let size = b.len();

    for col in 0..size {
        let pivot_row = (col..size)
            .max_by(|&r1, &r2| {
                a[r1][col]
                    .abs()
                    .partial_cmp(&a[r2][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        if a[pivot_row][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..size {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for c in col..size {
                a[row][c] -= factor * a[col][c];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = vec![0.0; size];
    for row in (0..size).rev() {
        let mut acc = b[row];
        for c in (row + 1)..size {
            acc -= a[row][c] * solution[c];
        }
        solution[row] = acc / a[row][row];
    }

    Some(solution)
}

/// All k-subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn recurse(n: usize, k: usize, start: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            recurse(n, k, i + 1, current, out);
            current.pop();
        }
    }
    recurse(n, k, 0, &mut current, &mut result);
    result
}
