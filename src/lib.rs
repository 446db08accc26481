//! `fin_projection` computes personal-finance projections.
//!
//! It provides two calculators that share one result shape:
//! - **EMI (Equated Monthly Installment)**: the fixed monthly payment that fully
//!   amortizes a fixed-rate loan, with a year-by-year amortization schedule.
//! - **SIP (Systematic Investment Plan)**: the maturity value of a fixed monthly
//!   contribution compounded monthly, with a year-by-year growth schedule.
//!
//! Either result can be split into two chart segments (principal vs. interest or
//! returns) with [`to_chart_segments`].
//!
//! ## Usage
//!
//! ```rust
//! use fin_projection::{compute_emi, to_chart_segments, SegmentStyle};
//! use rust_decimal_macros::dec;
//!
//! let result = match compute_emi(dec!(1_000_000), dec!(8.5), 20) {
//!     Ok(result) => result,
//!     Err(e) => {
//!         eprintln!("Error computing EMI: {}", e);
//!         return;
//!     }
//! };
//! println!("EMI:            {:.2}", result.monthly_value);
//! println!("Total interest: {:.2}", result.secondary);
//! println!("Total payable:  {:.2}", result.total);
//!
//! let styles = [
//!     SegmentStyle::new("Principal", "#3B82F6"),
//!     SegmentStyle::new("Interest", "#10B981"),
//! ];
//! match to_chart_segments(&result, styles) {
//!     Ok([principal, interest]) => {
//!         println!("{}: {:.1}%", principal.label, principal.percent);
//!         println!("{}: {:.1}%", interest.label, interest.percent);
//!     }
//!     Err(e) => eprintln!("Nothing to chart: {}", e),
//! }
//! ```
//!
//! Every call is a pure function of its inputs: nothing is cached and no state
//! is shared between calls.

pub mod chart;
pub mod emi;
pub mod error;
pub mod input;
pub mod result;
pub mod sip;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub use chart::{ChartSegment, SegmentStyle, Summary, SummaryView, to_chart_segments};
pub use emi::compute_emi;
pub use error::{ProjectionError, ProjectionResult};
pub use input::{CalculationInput, CalculatorMode, EmiInput, InputLimits, Range, SipInput};
pub use result::{CalculationResult, EmiYearRow, Projection, SipYearRow};
pub use sip::{ContributionTiming, compute_sip, compute_sip_with_timing};

/// Converts a nominal annual rate percentage to the periodic monthly rate.
///
/// 12% per year becomes 0.01 per month (simple division, no compounding).
pub fn nominal_monthly_rate(annual_percent: Decimal) -> Decimal {
    annual_percent / dec!(12) / dec!(100)
}

/// Runs the calculator matching the input's mode.
///
/// # Errors
///
/// Returns [`ProjectionError::Overflow`] if an amount outgrows `Decimal`.
pub fn compute(input: &CalculationInput) -> ProjectionResult<Projection> {
    let projection = match input {
        CalculationInput::Emi(emi) => Projection::Emi(compute_emi(
            emi.principal,
            emi.annual_rate,
            emi.tenure_years,
        )?),
        CalculationInput::Sip(sip) => Projection::Sip(compute_sip_with_timing(
            sip.monthly_contribution,
            sip.expected_return,
            sip.period_years,
            sip.timing,
        )?),
    };
    Ok(projection)
}
