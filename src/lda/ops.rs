use crate::data::model::Matrix;
use crate::error::{LdaError, Result};

/// Divide every component by the sum of all components.
///
/// A zero sum gives non-finite components; that is left to the caller.
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let sum: f64 = v.iter().sum();
    v.iter().map(|x| x / sum).collect()
}

/// Center `v` against the first column of `means`: `v[i] - means[i][0]`.
///
/// `means` needs at least `v.len()` rows, each with at least one value.
pub fn delta(v: &[f64], means: &Matrix) -> Result<Vec<f64>> {
    if means.len() < v.len() {
        return Err(LdaError::mismatch("xbar row count", v.len(), means.len()));
    }

    v.iter()
        .zip(means.iter())
        .enumerate()
        .map(|(i, (x, row))| {
            row.first()
                .map(|m| x - m)
                .ok_or_else(|| LdaError::mismatch(format!("xbar row {i} length"), 1, 0))
        })
        .collect()
}

/// Dot product of `v` with every row of `weights`, one output per row.
pub fn project(v: &[f64], weights: &Matrix) -> Result<Vec<f64>> {
    weights
        .iter()
        .enumerate()
        .map(|(k, row)| {
            if row.len() != v.len() {
                return Err(LdaError::mismatch(
                    format!("scaling row {k} length"),
                    v.len(),
                    row.len(),
                ));
            }
            Ok(dot(v, row))
        })
        .collect()
}

/// Sum of elementwise products over equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
