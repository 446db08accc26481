//! Two-segment composition split of a projection (principal vs. interest or returns).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};
use crate::result::{CalculationResult, Projection};

/// Normalized summary fields shared by every calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Capital borrowed or contributed.
    pub principal: Decimal,
    /// Interest paid or investment gains.
    pub secondary: Decimal,
    /// Principal plus secondary.
    pub total: Decimal,
    /// The installment or the maturity value.
    pub headline: Decimal,
}

/// Anything that can be split into principal and secondary shares.
pub trait Summary {
    /// The principal, secondary, total and headline figures.
    fn summary(&self) -> SummaryView;
}

impl<R> Summary for CalculationResult<R> {
    fn summary(&self) -> SummaryView {
        SummaryView {
            principal: self.principal,
            secondary: self.secondary,
            total: self.total,
            headline: self.monthly_value,
        }
    }
}

impl Summary for Projection {
    fn summary(&self) -> SummaryView {
        match self {
            Projection::Emi(r) => r.summary(),
            Projection::Sip(r) => r.summary(),
        }
    }
}

/// Caller-chosen presentation of one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStyle {
    /// Display label, e.g. "Principal".
    pub label: String,
    /// Color token handed through to the renderer.
    pub color: String,
}

impl SegmentStyle {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A labelled slice of the total with its percent share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSegment {
    /// Display label taken from the caller's style.
    pub label: String,
    /// Absolute amount of this segment.
    pub value: Decimal,
    /// Color token taken from the caller's style.
    pub color: String,
    /// Share of the total, from 0 to 100.
    pub percent: Decimal,
}

/// Splits a result into its principal and secondary segments.
///
/// The first style applies to the principal share, the second to the
/// secondary share. Percentages sum to 100 whenever the total is positive.
///
/// # Errors
///
/// Returns [`ProjectionError::UndefinedShare`] if the total is zero.
pub fn to_chart_segments<S: Summary + ?Sized>(
    result: &S,
    styles: [SegmentStyle; 2],
) -> ProjectionResult<[ChartSegment; 2]> {
    let summary = result.summary();
    if summary.total.is_zero() {
        return Err(ProjectionError::UndefinedShare);
    }

    let [principal_style, secondary_style] = styles;
    let segment = |style: SegmentStyle, value: Decimal| ChartSegment {
        label: style.label,
        value,
        color: style.color,
        percent: value / summary.total * dec!(100),
    };

    Ok([
        segment(principal_style, summary.principal),
        segment(secondary_style, summary.secondary),
    ])
}
