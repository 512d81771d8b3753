//! NaN-ignoring reductions over a group of cell values.
//!
//! NaN marks a missing cell. Missing cells are dropped before reducing; a
//! group where every cell is missing reduces to NaN, except for the sum which
//! reduces to 0.0.

/// Drop missing values in place and return the remaining slice
fn present(values: &mut Vec<f64>) -> &mut [f64] {
    values.retain(|v| !v.is_nan());
    values.as_mut_slice()
}

pub fn nan_sum(values: &mut Vec<f64>) -> f64 {
    present(values).iter().sum()
}

pub fn nan_mean(values: &mut Vec<f64>) -> f64 {
    let values = present(values);
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn nan_max(values: &mut Vec<f64>) -> f64 {
    present(values)
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

pub fn nan_min(values: &mut Vec<f64>) -> f64 {
    present(values)
        .iter()
        .copied()
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

pub fn nan_median(values: &mut Vec<f64>) -> f64 {
    let values = present(values);
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Population variance (divides by n)
pub fn nan_var(values: &mut Vec<f64>) -> f64 {
    let values = present(values);
    if values.is_empty() {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

pub fn nan_std(values: &mut Vec<f64>) -> f64 {
    nan_var(values).sqrt()
}
