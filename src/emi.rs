use log::{debug, trace};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::{ProjectionResult, checked};
use crate::nominal_monthly_rate;
use crate::result::{CalculationResult, EmiYearRow};

/// Computes the fixed monthly installment of a fixed-rate loan and its yearly
/// amortization schedule.
///
/// The installment follows the standard amortizing-loan formula:
/// EMI = P * [r(1 + r)^n] / [(1 + r)^n – 1]
///
/// evaluated in its discounted form EMI = P * r / [1 – (1 + r)^-n], so long
/// tenures drive the discount term towards zero instead of overflowing.
///
/// A zero rate is handled on its own branch: the installment is `P / n` and no
/// interest accrues.
///
/// # Arguments
///
/// * `principal` - The amount borrowed. Must be positive.
/// * `annual_rate` - The nominal annual interest rate as a percentage (e.g. 8.5).
///   Must not be negative.
/// * `years` - The loan tenure in whole years. Must be positive.
///
/// Inputs outside those bounds are not checked here; see [`crate::InputLimits`].
///
/// # Errors
///
/// Returns [`crate::ProjectionError::Overflow`] if the total payable does not
/// fit in a `Decimal` (around 7.9e28).
pub fn compute_emi(
    principal: Decimal,
    annual_rate: Decimal,
    years: u32,
) -> ProjectionResult<CalculationResult<EmiYearRow>> {
    let monthly_rate = nominal_monthly_rate(annual_rate);
    let total_months = years * 12;
    debug!(
        "EMI: principal={principal} annual_rate={annual_rate}% years={years} \
         monthly_rate={monthly_rate}"
    );

    if monthly_rate.is_zero() {
        return Ok(zero_rate_schedule(principal, years, total_months));
    }

    let discount = dec!(1) / (dec!(1) + monthly_rate);
    // discount < 1, so the power can only shrink towards zero
    let discount_pow_n = discount
        .checked_powu(total_months.into())
        .unwrap_or(Decimal::ZERO);
    let interest_only = checked(principal.checked_mul(monthly_rate), "installment")?;
    let emi = checked(interest_only.checked_div(dec!(1) - discount_pow_n), "installment")?;
    let total_payable = checked(emi.checked_mul(Decimal::from(total_months)), "total payable")?;
    let total_interest = total_payable - principal;

    let mut current_balance = principal;
    let mut breakdown = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let mut yearly_interest = dec!(0);
        let mut yearly_principal = dec!(0);

        for _ in 0..12 {
            let interest_payment = current_balance * monthly_rate;
            let amortization = emi - interest_payment;
            yearly_interest += interest_payment;
            yearly_principal += amortization;
            current_balance -= amortization;
        }

        let row = EmiYearRow {
            year,
            principal_paid: yearly_principal,
            interest_paid: yearly_interest,
            balance: current_balance.max(dec!(0)),
        };
        trace!("EMI year {year}: {row:?}");
        breakdown.push(row);
    }

    Ok(CalculationResult::new(principal, total_interest, emi, breakdown))
}

fn zero_rate_schedule(
    principal: Decimal,
    years: u32,
    total_months: u32,
) -> CalculationResult<EmiYearRow> {
    let emi = principal / Decimal::from(total_months);
    let yearly_principal = principal / Decimal::from(years);

    let breakdown = (1..=years)
        .map(|year| EmiYearRow {
            year,
            principal_paid: yearly_principal,
            interest_paid: dec!(0),
            balance: (principal - yearly_principal * Decimal::from(year)).max(dec!(0)),
        })
        .collect();

    CalculationResult::new(principal, dec!(0), emi, breakdown)
}
