//! Simple financial helpers.
//!
//! Pure functions over plain numbers; rates are fractions (5% = 0.05),
//! time is in years unless a function says otherwise.

use crate::error::{CalcError, CalcResult};

/// Interest earned on `principal` at `rate` over `years`, not compounded.
pub fn simple_interest(principal: f64, rate: f64, years: f64) -> CalcResult<f64> {
    check_non_negative(principal, rate, years)?;
    Ok(principal * rate * years)
}

/// Final balance for `principal` at `rate`, compounded `periods_per_year`
/// times a year over `years`.
pub fn compound_interest(
    principal: f64,
    rate: f64,
    periods_per_year: u32,
    years: f64,
) -> CalcResult<f64> {
    check_non_negative(principal, rate, years)?;
    if periods_per_year == 0 {
        return Err(CalcError::InvalidDomain("compound interest"));
    }
    let n = f64::from(periods_per_year);
    Ok(principal * (1.0 + rate / n).powf(n * years))
}

/// Fixed monthly payment amortizing `principal` at annual `rate` over
/// `months`.
pub fn loan_payment(principal: f64, rate: f64, months: u32) -> CalcResult<f64> {
    check_non_negative(principal, rate, 0.0)?;
    if months == 0 {
        return Err(CalcError::InvalidDomain("loan payment"));
    }
    if rate == 0.0 {
        return Ok(principal / f64::from(months));
    }
    let monthly = rate / 12.0;
    let factor = (1.0 + monthly).powi(months as i32);
    Ok(principal * monthly * factor / (factor - 1.0))
}

fn check_non_negative(principal: f64, rate: f64, time: f64) -> CalcResult<()> {
    if principal < 0.0 || rate < 0.0 || time < 0.0 {
        return Err(CalcError::InvalidDomain("financial calculation"));
    }
    Ok(())
}
