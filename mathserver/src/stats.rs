//! Statistics over f64 slices
//!
//! Standard definitions: arithmetic mean, median (average of the two middle
//! elements for even length), and mode with ties broken by the smallest
//! value among the most frequent.

use crate::error::{MathServerError, MathServerResult};
use crate::types::Operation;

/// Dispatch a parsed operation to its computation
pub fn compute(operation: Operation, values: &[f64]) -> MathServerResult<f64> {
    match operation {
        Operation::Mean => mean(values),
        Operation::Median => median(values),
        Operation::Mode => mode(values),
    }
}

pub fn mean(values: &[f64]) -> MathServerResult<f64> {
    validate(values, "mean")?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> MathServerResult<f64> {
    validate(values, "median")?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Smallest value among the most frequent ones. Counting runs over the
/// sorted slice avoids hashing floats; ascending order makes the first
/// maximal run the smallest candidate.
pub fn mode(values: &[f64]) -> MathServerResult<f64> {
    validate(values, "mode")?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut run_start = 0usize;

    for i in 0..=sorted.len() {
        let run_ended = i == sorted.len() || sorted[i].total_cmp(&sorted[run_start]).is_ne();
        if run_ended {
            let run_len = i - run_start;
            if run_len > best_count {
                best_count = run_len;
                best = sorted[run_start];
            }
            run_start = i;
        }
    }

    Ok(best)
}

fn validate(values: &[f64], operation: &str) -> MathServerResult<()> {
    if values.is_empty() {
        return Err(MathServerError::computation(format!(
            "cannot compute {operation} of an empty list"
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(MathServerError::computation(format!(
            "cannot compute {operation} of non-finite values"
        )));
    }
    Ok(())
}
