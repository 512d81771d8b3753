//! Sample values spanning the range of an aggregate, for legends and
//! colorbars.

use ndarray::{Array1, ArrayView, Dimension};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{RasterError, Result};

/// Spacing of the sample values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Linear,
    Log,
}

impl FromStr for Spacing {
    type Err = RasterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Spacing::Linear),
            "log" => Ok(Spacing::Log),
            _ => Err(RasterError::invalid(
                "how",
                format!("Unknown spacing: {}. Options: linear, log", s),
            )),
        }
    }
}

/// Sample values together with the range they were drawn from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueSummary {
    pub values: Array1<f64>,
    pub min: f64,
    pub max: f64,
}

/// Return `num` values running from the aggregate's minimum to its maximum.
///
/// Missing (NaN) cells are ignored. A minimum of exactly zero is replaced by
/// the smallest positive value so that log spacing stays finite. Log spacing
/// produces `exp(linspace(0, ln(1 + max - min), num)) + min`.
pub fn summarize_aggregate_values<D: Dimension>(
    aggregate: ArrayView<'_, f64, D>,
    spacing: Spacing,
    num: usize,
) -> Result<ValueSummary> {
    let present = || aggregate.iter().copied().filter(|v| !v.is_nan());

    let max = present().reduce(f64::max).ok_or_else(|| {
        RasterError::degenerate("Cannot summarize an aggregate with no values")
    })?;
    let mut min = present().reduce(f64::min).unwrap_or(max);

    if min == 0.0 {
        min = present()
            .filter(|&v| v > 0.0)
            .reduce(f64::min)
            .ok_or_else(|| {
                RasterError::degenerate("Aggregate has a zero minimum and no positive values")
            })?;
    }

    let values = match spacing {
        Spacing::Linear => Array1::linspace(min, max, num),
        Spacing::Log => Array1::linspace(0.0, (max - min).ln_1p(), num).mapv(|v| v.exp() + min),
    };

    Ok(ValueSummary { values, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_linear_skips_zero_minimum() {
        let agg = array![[0.0, 1.0], [2.0, 4.0]];
        let summary = summarize_aggregate_values(agg.view(), Spacing::Linear, 4).unwrap();

        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.values, array![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_log_spacing() {
        let agg = array![[1.0, f64::NAN], [2.0, 4.0]];
        let summary = summarize_aggregate_values(agg.view(), Spacing::Log, 3).unwrap();

        let expected = [2.0, 3.0, 5.0];
        for (a, e) in summary.values.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_negative_minimum_kept() {
        let agg = array![[-3.0, 0.0, 3.0]];
        let summary = summarize_aggregate_values(agg.view(), Spacing::Linear, 3).unwrap();
        assert_eq!(summary.values, array![-3.0, 0.0, 3.0]);
    }

    #[test]
    fn test_degenerate_aggregates() {
        let empty = array![[f64::NAN, f64::NAN]];
        assert!(summarize_aggregate_values(empty.view(), Spacing::Linear, 3).is_err());

        let zeros = array![[0.0, 0.0]];
        assert!(summarize_aggregate_values(zeros.view(), Spacing::Linear, 3).is_err());
    }

    #[test]
    fn test_spacing_from_str() {
        assert_eq!("log".parse::<Spacing>().unwrap(), Spacing::Log);
        assert!("cubic".parse::<Spacing>().is_err());
    }
}
