use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the projection layer.
///
/// The calculators assume pre-validated input and only fail when an amount
/// outgrows `Decimal`. The other variants cover the aggregator's undefined
/// case and the optional caller-side limits check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The result total is zero, so percentage shares have no meaning.
    #[error("cannot split a zero total into percentage shares")]
    UndefinedShare,

    /// An input parameter falls outside the configured range.
    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// An intermediate or final amount exceeds the range of `Decimal`.
    #[error("{quantity} exceeds the representable decimal range")]
    Overflow { quantity: &'static str },

    /// A configured range has its lower bound above its upper bound.
    #[error("invalid limits for {field}: min {min} is greater than max {max}")]
    InvalidLimits {
        field: &'static str,
        min: Decimal,
        max: Decimal,
    },
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Turns a failed checked operation into [`ProjectionError::Overflow`].
pub(crate) fn checked(value: Option<Decimal>, quantity: &'static str) -> ProjectionResult<Decimal> {
    value.ok_or(ProjectionError::Overflow { quantity })
}
