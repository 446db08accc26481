//! Calculation inputs and the caller-side ranges they are usually kept within.
//!
//! The calculators accept any values and assume they are valid. [`InputLimits`]
//! is the tool callers use to reject or clamp values before calling them.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};
use crate::sip::ContributionTiming;

/// Which calculator a set of inputs is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalculatorMode {
    /// Loan installment and amortization.
    Emi,
    /// Recurring investment growth.
    Sip,
}

/// Parameters of a fixed-rate loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    /// The amount borrowed.
    pub principal: Decimal,
    /// The nominal annual interest rate as a percentage (e.g. 8.5 for 8.5%).
    pub annual_rate: Decimal,
    /// The loan tenure in whole years.
    pub tenure_years: u32,
}

/// Parameters of a systematic investment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// The amount invested every month.
    pub monthly_contribution: Decimal,
    /// The expected nominal annual return as a percentage.
    pub expected_return: Decimal,
    /// The investment period in whole years.
    pub period_years: u32,
    /// When each contribution lands relative to that month's growth.
    #[serde(default)]
    pub timing: ContributionTiming,
}

/// Inputs for one calculator run, tagged with their mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "UPPERCASE")]
pub enum CalculationInput {
    /// Loan parameters.
    Emi(EmiInput),
    /// Investment plan parameters.
    Sip(SipInput),
}

impl CalculationInput {
    /// The calculator these inputs belong to.
    pub fn mode(&self) -> CalculatorMode {
        match self {
            CalculationInput::Emi(_) => CalculatorMode::Emi,
            CalculationInput::Sip(_) => CalculatorMode::Sip,
        }
    }
}

/// An inclusive `min..=max` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    /// Smallest allowed value.
    pub min: T,
    /// Largest allowed value.
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Allowed input ranges for both calculators.
///
/// Defaults mirror the slider ranges of the calculator front end. Any field
/// left out of a deserialized config keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Loan principal.
    pub loan_amount: Range<Decimal>,
    /// Annual loan interest rate, in percent.
    pub loan_rate: Range<Decimal>,
    /// Loan tenure, in years.
    pub loan_tenure: Range<u32>,
    /// Monthly SIP contribution.
    pub monthly_investment: Range<Decimal>,
    /// Expected annual return, in percent.
    pub expected_return: Range<Decimal>,
    /// Investment period, in years.
    pub investment_period: Range<u32>,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            loan_amount: Range::new(dec!(100_000), dec!(10_000_000)),
            loan_rate: Range::new(dec!(1), dec!(30)),
            loan_tenure: Range::new(1, 30),
            monthly_investment: Range::new(dec!(500), dec!(1_000_000)),
            expected_return: Range::new(dec!(1), dec!(30)),
            investment_period: Range::new(1, 40),
        }
    }
}

fn check(field: &'static str, value: Decimal, range: Range<Decimal>) -> ProjectionResult<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(ProjectionError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

fn clamp_logged<T>(field: &str, value: T, range: Range<T>) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    let clamped = range.clamp(value);
    if clamped != value {
        warn!("{field} {value} clamped to {clamped}");
    }
    clamped
}

impl InputLimits {
    /// Checks that every range has `min <= max`.
    pub fn check_consistent(&self) -> ProjectionResult<()> {
        let decimal_ranges = [
            ("loan_amount", self.loan_amount),
            ("loan_rate", self.loan_rate),
            ("monthly_investment", self.monthly_investment),
            ("expected_return", self.expected_return),
        ];
        for (field, range) in decimal_ranges {
            if range.min > range.max {
                return Err(ProjectionError::InvalidLimits {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        let year_ranges = [
            ("loan_tenure", self.loan_tenure),
            ("investment_period", self.investment_period),
        ];
        for (field, range) in year_ranges {
            if range.min > range.max {
                return Err(ProjectionError::InvalidLimits {
                    field,
                    min: range.min.into(),
                    max: range.max.into(),
                });
            }
        }
        Ok(())
    }

    /// Reports the first parameter that falls outside its range.
    pub fn validate(&self, input: &CalculationInput) -> ProjectionResult<()> {
        let years =
            |range: Range<u32>| Range::new(Decimal::from(range.min), Decimal::from(range.max));

        match input {
            CalculationInput::Emi(emi) => {
                check("principal", emi.principal, self.loan_amount)?;
                check("annual_rate", emi.annual_rate, self.loan_rate)?;
                check("tenure_years", emi.tenure_years.into(), years(self.loan_tenure))
            }
            CalculationInput::Sip(sip) => {
                check(
                    "monthly_contribution",
                    sip.monthly_contribution,
                    self.monthly_investment,
                )?;
                check("expected_return", sip.expected_return, self.expected_return)?;
                check("period_years", sip.period_years.into(), years(self.investment_period))
            }
        }
    }

    /// Pulls every parameter into its range, the way a slider would.
    pub fn clamp(&self, input: CalculationInput) -> CalculationInput {
        match input {
            CalculationInput::Emi(emi) => CalculationInput::Emi(EmiInput {
                principal: clamp_logged("principal", emi.principal, self.loan_amount),
                annual_rate: clamp_logged("annual_rate", emi.annual_rate, self.loan_rate),
                tenure_years: clamp_logged("tenure_years", emi.tenure_years, self.loan_tenure),
            }),
            CalculationInput::Sip(sip) => CalculationInput::Sip(SipInput {
                monthly_contribution: clamp_logged(
                    "monthly_contribution",
                    sip.monthly_contribution,
                    self.monthly_investment,
                ),
                expected_return: clamp_logged(
                    "expected_return",
                    sip.expected_return,
                    self.expected_return,
                ),
                period_years: clamp_logged(
                    "period_years",
                    sip.period_years,
                    self.investment_period,
                ),
                timing: sip.timing,
            }),
        }
    }
}
