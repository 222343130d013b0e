//! Row/column-minimum reduction.
//!
//! # Algorithm
//!
//! Subtract each finite row minimum from the row's finite entries, then do
//! the same per column, accumulating every subtracted minimum. Any
//! completion consistent with the matrix's remaining finite entries must
//! exit each remaining row once and enter each remaining column once,
//! paying at least the subtracted minimum each time, so the accumulated
//! total is a valid lower bound on the completion cost. That soundness is
//! what makes the bound safe for pruning.
//!
//! A row or column that is entirely infinite contributes nothing to the
//! bound. Whether such a row or column makes the branch infeasible is the
//! solver's call: an unvisited stop whose column is all infinite means a
//! dead branch, not a zero-cost one.

use crate::distance::DistanceMatrix;

/// Reduces `matrix` in place and returns the accumulated lower bound.
///
/// # Examples
///
/// ```
/// use pickpath::distance::DistanceMatrix;
/// use pickpath::reduction::reduce;
///
/// let mut m = DistanceMatrix::from_data(
///     3,
///     vec![
///         0.0, 4.0, 6.0, //
///         3.0, 0.0, 5.0, //
///         7.0, 2.0, 0.0,
///     ],
/// )
/// .unwrap();
///
/// // Row minima 4 + 3 + 2, then column minimum 2 on the last column.
/// assert_eq!(reduce(&mut m), 11.0);
/// assert_eq!(m.get(0, 1), 0.0);
/// ```
pub fn reduce(matrix: &mut DistanceMatrix) -> f64 {
    let n = matrix.size();
    let mut bound = 0.0;

    for row in 0..n {
        let mut min = f64::INFINITY;
        for col in 0..n {
            min = min.min(matrix.get(row, col));
        }
        if min.is_finite() && min > 0.0 {
            for col in 0..n {
                let v = matrix.get(row, col);
                if v.is_finite() {
                    matrix.set(row, col, v - min);
                }
            }
            bound += min;
        }
    }

    for col in 0..n {
        let mut min = f64::INFINITY;
        for row in 0..n {
            min = min.min(matrix.get(row, col));
        }
        if min.is_finite() && min > 0.0 {
            for row in 0..n {
                let v = matrix.get(row, col);
                if v.is_finite() {
                    matrix.set(row, col, v - min);
                }
            }
            bound += min;
        }
    }

    bound
}

/// Commits the edge `from → to`: the entire row of `from` and column of
/// `to` become infinite, so no later move can leave `from` or enter `to`
/// again.
pub fn strike(matrix: &mut DistanceMatrix, from: usize, to: usize) {
    let n = matrix.size();
    for col in 0..n {
        matrix.set(from, col, f64::INFINITY);
    }
    for row in 0..n {
        matrix.set(row, to, f64::INFINITY);
    }
}
