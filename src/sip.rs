use log::{debug, trace};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionResult, checked};
use crate::nominal_monthly_rate;
use crate::result::{CalculationResult, SipYearRow};

/// When a monthly contribution lands relative to that month's growth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionTiming {
    /// Contribute first, then grow the whole balance for the month.
    #[default]
    StartOfMonth,
    /// Grow the existing balance, then add the contribution.
    EndOfMonth,
}

/// Computes the maturity value of a fixed monthly contribution compounded
/// monthly, contributing at the start of each month.
///
/// # Arguments
///
/// * `monthly_contribution` - The amount invested every month. Must be positive.
/// * `annual_return` - The expected nominal annual return as a percentage (e.g. 12).
///   Must not be negative.
/// * `years` - The investment period in whole years. Must be positive.
///
/// # Errors
///
/// Returns [`crate::ProjectionError::Overflow`] if the balance grows past the
/// range of `Decimal` (around 7.9e28).
pub fn compute_sip(
    monthly_contribution: Decimal,
    annual_return: Decimal,
    years: u32,
) -> ProjectionResult<CalculationResult<SipYearRow>> {
    compute_sip_with_timing(
        monthly_contribution,
        annual_return,
        years,
        ContributionTiming::StartOfMonth,
    )
}

/// Same as [`compute_sip`] with an explicit contribution timing.
pub fn compute_sip_with_timing(
    monthly_contribution: Decimal,
    annual_return: Decimal,
    years: u32,
    timing: ContributionTiming,
) -> ProjectionResult<CalculationResult<SipYearRow>> {
    let monthly_rate = nominal_monthly_rate(annual_return);
    let growth = dec!(1) + monthly_rate;
    debug!(
        "SIP: contribution={monthly_contribution} annual_return={annual_return}% years={years} \
         timing={timing:?} monthly_rate={monthly_rate}"
    );

    let mut total_invested = dec!(0);
    let mut current_balance = dec!(0);
    let mut breakdown = Vec::with_capacity(years as usize);

    for year in 1..=years {
        for _ in 0..12 {
            total_invested = checked(
                total_invested.checked_add(monthly_contribution),
                "invested amount",
            )?;
            let next_balance = match timing {
                ContributionTiming::StartOfMonth => current_balance
                    .checked_add(monthly_contribution)
                    .and_then(|balance| balance.checked_mul(growth)),
                ContributionTiming::EndOfMonth => current_balance
                    .checked_mul(growth)
                    .and_then(|balance| balance.checked_add(monthly_contribution)),
            };
            current_balance = checked(next_balance, "balance")?;
        }

        let row = SipYearRow {
            year,
            invested: total_invested,
            returns: current_balance - total_invested,
            total: current_balance,
        };
        trace!("SIP year {year}: {row:?}");
        breakdown.push(row);
    }

    let estimated_returns = current_balance - total_invested;
    Ok(CalculationResult::new(
        total_invested,
        estimated_returns,
        current_balance,
        breakdown,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use rstest::rstest;

    #[test]
    fn test_compute_sip_single_year() {
        let result = compute_sip(dec!(1000), dec!(12), 1).unwrap();

        assert_eq!(result.principal, dec!(12000));
        assert_eq!(result.monthly_value.round_dp(2), dec!(12809.33));
        assert_eq!(result.secondary.round_dp(2), dec!(809.33));
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].invested, dec!(12000));
        assert_eq!(result.breakdown[0].total, result.monthly_value);
    }

    #[test]
    fn test_zero_return_keeps_contributions_flat() {
        let result = compute_sip(dec!(5000), dec!(0), 5).unwrap();

        assert_eq!(result.principal, dec!(300000));
        assert_eq!(result.total, dec!(300000));
        assert_eq!(result.secondary, dec!(0));
        assert!(result.breakdown.iter().all(|row| row.returns.is_zero()));
    }

    #[rstest]
    #[case(dec!(500), dec!(1), 1)]
    #[case(dec!(10000), dec!(12), 10)]
    #[case(dec!(25000), dec!(7.5), 25)]
    #[case(dec!(1_000_000), dec!(30), 40)]
    fn test_invested_grows_by_a_year_of_contributions(
        #[case] contribution: Decimal,
        #[case] rate: Decimal,
        #[case] years: u32,
    ) {
        let result = compute_sip(contribution, rate, years).unwrap();
        let yearly = contribution * dec!(12);

        assert_eq!(result.breakdown.len(), years as usize);
        assert_eq!(result.principal, yearly * Decimal::from(years));

        for (i, row) in result.breakdown.iter().enumerate() {
            assert_eq!(row.year, i as u32 + 1);
            assert_eq!(row.invested, yearly * Decimal::from(row.year));
            assert!(row.total >= row.invested);
        }
        assert!(result.breakdown.windows(2).all(|pair| pair[1].total >= pair[0].total));
        assert!(result.total > result.principal);
    }

    #[test]
    fn test_start_of_month_beats_end_of_month() {
        let start = compute_sip(dec!(10000), dec!(12), 10).unwrap();
        let end =
            compute_sip_with_timing(dec!(10000), dec!(12), 10, ContributionTiming::EndOfMonth)
                .unwrap();

        assert_eq!(start.principal, end.principal);
        assert_eq!(end.monthly_value.round_dp(2), dec!(2300386.89));
        // Start-of-month contributions earn exactly one extra month of growth.
        assert!((start.monthly_value - end.monthly_value * dec!(1.01)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_default_timing_is_start_of_month() {
        assert_eq!(ContributionTiming::default(), ContributionTiming::StartOfMonth);
        assert_eq!(
            compute_sip(dec!(2000), dec!(9), 3),
            compute_sip_with_timing(dec!(2000), dec!(9), 3, ContributionTiming::default())
        );
    }

    #[test]
    fn test_large_but_representable_balance() {
        let result = compute_sip(dec!(10_000), dec!(50), 100).unwrap();
        assert_eq!(result.principal, dec!(12_000_000));
        assert!(result.total > dec!(100_000_000_000_000_000_000_000_000));
    }

    #[rstest]
    #[case(ContributionTiming::StartOfMonth)]
    #[case(ContributionTiming::EndOfMonth)]
    fn test_balance_beyond_decimal_range_is_an_error(#[case] timing: ContributionTiming) {
        let result = compute_sip_with_timing(dec!(10_000), dec!(100), 100, timing);
        assert_eq!(
            result,
            Err(ProjectionError::Overflow {
                quantity: "balance"
            })
        );
    }
}
