//! Descriptive statistics over number slices.

use crate::error::{CalcError, CalcResult};

pub fn mean(values: &[f64]) -> CalcResult<f64> {
    check_non_empty(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; the mean of the two middle values for even-length input.
pub fn median(values: &[f64]) -> CalcResult<f64> {
    check_non_empty(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Sample variance (n - 1 denominator). Needs at least two values.
pub fn variance(values: &[f64]) -> CalcResult<f64> {
    if values.len() < 2 {
        return Err(CalcError::InvalidDomain("variance"));
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> CalcResult<f64> {
    Ok(variance(values)?.sqrt())
}

pub fn min(values: &[f64]) -> CalcResult<f64> {
    check_non_empty(values)?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> CalcResult<f64> {
    check_non_empty(values)?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

fn check_non_empty(values: &[f64]) -> CalcResult<()> {
    if values.is_empty() {
        return Err(CalcError::InvalidDomain("statistics"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_median() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values).unwrap(), 5.0);
        assert_eq!(median(&values).unwrap(), 4.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_std_dev_sample() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Sample std dev of the classic example set
        assert!((std_dev(&values).unwrap() - 2.13809).abs() < 1e-5);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(&[3.0, -1.0, 2.0]).unwrap(), -1.0);
        assert_eq!(max(&[3.0, -1.0, 2.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(mean(&[]).is_err());
        assert!(median(&[]).is_err());
        assert!(variance(&[1.0]).is_err());
    }
}
