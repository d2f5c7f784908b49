//! Payoff matrix representation for two-player normal-form games.
//!
//! A [`PayoffMatrix`] holds both players' payoffs over the same m×n grid of
//! pure-strategy profiles: player 1 picks a row, player 2 picks a column.
//! The matrix is validated once at construction and immutable afterwards,
//! so every solver downstream can assume finite values and consistent
//! dimensions. The validating constructors are the only way to obtain a
//! matrix; the type deliberately has no serde surface, keeping the wire
//! encodings at the request boundary.

/// An immutable m×n payoff matrix pair for a two-player normal-form game.
///
/// Row indices belong to player 1's strategies, column indices to
/// player 2's. Both players' sub-matrices always have identical
/// dimensions.
///
/// # Example
/// ```
/// use litigation_solver::game::PayoffMatrix;
///
/// // Prisoner's Dilemma
/// let matrix = PayoffMatrix::build(
///     vec![vec![3.0, 0.0], vec![5.0, 1.0]],
///     vec![vec![3.0, 5.0], vec![0.0, 1.0]],
/// ).unwrap();
/// assert_eq!(matrix.shape(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    /// Player 1 payoffs, indexed `[row][col]`.
    p1: Vec<Vec<f64>>,
    /// Player 2 payoffs, indexed `[row][col]`.
    p2: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    /// Build a matrix from both players' payoff grids.
    ///
    /// # Errors
    /// - [`MatrixError::EmptyMatrix`] if either dimension is zero
    /// - [`MatrixError::DimensionMismatch`] if the grids are ragged or the
    ///   players' shapes differ
    /// - [`MatrixError::NonFiniteValue`] if any cell is NaN or infinite
    pub fn build(p1: Vec<Vec<f64>>, p2: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let (m, n) = Self::validate_grid(&p1)?;
        let (m2, n2) = Self::validate_grid(&p2)?;
        if (m, n) != (m2, n2) {
            return Err(MatrixError::DimensionMismatch {
                p1_shape: (m, n),
                p2_shape: (m2, n2),
            });
        }
        Ok(Self { p1, p2 })
    }

    /// Build a matrix from a single grid of `(p1_payoff, p2_payoff)` cells.
    ///
    /// This is the alternate wire encoding: one m×n grid where each cell
    /// carries both players' payoffs. Validation is identical to
    /// [`PayoffMatrix::build`] after unzipping.
    pub fn build_from_cells(cells: Vec<Vec<(f64, f64)>>) -> Result<Self, MatrixError> {
        let mut p1 = Vec::with_capacity(cells.len());
        let mut p2 = Vec::with_capacity(cells.len());
        for row in &cells {
            p1.push(row.iter().map(|c| c.0).collect());
            p2.push(row.iter().map(|c| c.1).collect());
        }
        Self::build(p1, p2)
    }

    /// Matrix shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.p1.len(), self.p1[0].len())
    }

    /// Number of rows (player 1 strategies).
    pub fn rows(&self) -> usize {
        self.p1.len()
    }

    /// Number of columns (player 2 strategies).
    pub fn cols(&self) -> usize {
        self.p1[0].len()
    }

    /// Player 1's payoff at cell `(row, col)`.
    pub fn p1(&self, row: usize, col: usize) -> f64 {
        self.p1[row][col]
    }

    /// Player 2's payoff at cell `(row, col)`.
    pub fn p2(&self, row: usize, col: usize) -> f64 {
        self.p2[row][col]
    }

    /// Validate one player's grid and return its shape.
    fn validate_grid(grid: &[Vec<f64>]) -> Result<(usize, usize), MatrixError> {
        let m = grid.len();
        if m == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let n = grid[0].len();
        if n == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        for (i, row) in grid.iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::DimensionMismatch {
                    p1_shape: (m, n),
                    p2_shape: (m, row.len()),
                });
            }
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFiniteValue {
                        row: i,
                        col: j,
                        value: *value,
                    });
                }
            }
        }
        Ok((m, n))
    }
}

/// Errors raised when constructing a [`PayoffMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// The two players' payoff grids have different shapes, or a grid is ragged.
    DimensionMismatch {
        /// Shape of player 1's grid.
        p1_shape: (usize, usize),
        /// Shape of player 2's grid (or of the offending row).
        p2_shape: (usize, usize),
    },
    /// Either dimension of the matrix is zero.
    EmptyMatrix,
    /// A payoff cell holds NaN or an infinity.
    NonFiniteValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The non-finite value found.
        value: f64,
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { p1_shape, p2_shape } => write!(
                f,
                "payoff matrix shapes differ: player 1 is {}x{}, player 2 is {}x{}",
                p1_shape.0, p1_shape.1, p2_shape.0, p2_shape.1
            ),
            MatrixError::EmptyMatrix => write!(f, "payoff matrix must be at least 1x1"),
            MatrixError::NonFiniteValue { row, col, value } => write!(
                f,
                "payoff at ({}, {}) is not finite: {}",
                row, col, value
            ),
        }
    }
}

impl std::error::Error for MatrixError {}
