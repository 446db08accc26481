use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One year of a loan amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiYearRow {
    /// Year number, starting at 1.
    pub year: u32,
    /// Principal repaid during the year.
    pub principal_paid: Decimal,
    /// Interest paid during the year.
    pub interest_paid: Decimal,
    /// Outstanding balance at year end, never below zero.
    pub balance: Decimal,
}

/// One year of a recurring-investment growth schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipYearRow {
    /// Year number, starting at 1.
    pub year: u32,
    /// Cumulative amount contributed so far.
    pub invested: Decimal,
    /// Current value minus cumulative contributions.
    pub returns: Decimal,
    /// Current value of the investment.
    pub total: Decimal,
}

/// Summary plus yearly schedule produced by either calculator.
///
/// `principal` is the capital borrowed or contributed, `secondary` the interest
/// paid or the gains earned, and `monthly_value` the headline number: the fixed
/// installment for a loan, the maturity value for an investment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult<R> {
    /// Total capital borrowed or contributed.
    pub principal: Decimal,
    /// Total interest paid, or total investment gains.
    pub secondary: Decimal,
    /// Gross cash flow, always `principal + secondary`.
    pub total: Decimal,
    /// The fixed installment (EMI) or the maturity value (SIP).
    pub monthly_value: Decimal,
    /// One row per elapsed year, in chronological order.
    pub breakdown: Vec<R>,
}

impl<R> CalculationResult<R> {
    /// Builds a result whose `total` is `principal + secondary`.
    pub fn new(
        principal: Decimal,
        secondary: Decimal,
        monthly_value: Decimal,
        breakdown: Vec<R>,
    ) -> Self {
        Self {
            principal,
            secondary,
            total: principal + secondary,
            monthly_value,
            breakdown,
        }
    }

    /// Number of whole years covered by the schedule.
    pub fn years(&self) -> usize {
        self.breakdown.len()
    }
}

/// Output of whichever calculator ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "UPPERCASE")]
pub enum Projection {
    /// Loan amortization result.
    Emi(CalculationResult<EmiYearRow>),
    /// Investment growth result.
    Sip(CalculationResult<SipYearRow>),
}

impl Projection {
    /// Total capital borrowed or contributed.
    pub fn principal(&self) -> Decimal {
        match self {
            Projection::Emi(r) => r.principal,
            Projection::Sip(r) => r.principal,
        }
    }

    /// Total interest paid, or total investment gains.
    pub fn secondary(&self) -> Decimal {
        match self {
            Projection::Emi(r) => r.secondary,
            Projection::Sip(r) => r.secondary,
        }
    }

    /// Principal plus secondary.
    pub fn total(&self) -> Decimal {
        match self {
            Projection::Emi(r) => r.total,
            Projection::Sip(r) => r.total,
        }
    }

    /// The headline number: installment or maturity value.
    pub fn monthly_value(&self) -> Decimal {
        match self {
            Projection::Emi(r) => r.monthly_value,
            Projection::Sip(r) => r.monthly_value,
        }
    }

    /// Number of yearly rows in the schedule.
    pub fn years(&self) -> usize {
        match self {
            Projection::Emi(r) => r.years(),
            Projection::Sip(r) => r.years(),
        }
    }
}
