use super::sanitize_amount;

/// Fixed-rate amortized monthly payment.
///
/// Standard annuity formula with the APR treated as a nominal annual rate
/// compounded monthly. A zero rate degrades to straight-line principal over
/// the term. Terms below one month are floored at one, and non-finite or
/// negative inputs count as zero, so the result is always finite and
/// non-negative.
pub fn monthly_payment(principal: f64, apr_pct: f64, term_months: u32) -> f64 {
    let principal = sanitize_amount(principal);
    let monthly_rate = sanitize_amount(apr_pct) / 100.0 / 12.0;
    let months = term_months.max(1);
    if monthly_rate == 0.0 {
        return principal / f64::from(months);
    }
    // powf, not powi: the term is a u32 and may exceed i32::MAX.
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-f64::from(months)))
}
