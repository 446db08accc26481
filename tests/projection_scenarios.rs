use fin_projection::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn emi_styles() -> [SegmentStyle; 2] {
    [
        SegmentStyle::new("Principal", "#3B82F6"),
        SegmentStyle::new("Interest", "#10B981"),
    ]
}

fn sip_styles() -> [SegmentStyle; 2] {
    [
        SegmentStyle::new("Invested", "#3B82F6"),
        SegmentStyle::new("Returns", "#10B981"),
    ]
}

#[test]
fn test_home_loan_scenario() {
    let result = compute_emi(dec!(1_000_000), dec!(8.5), 20).unwrap();

    assert_eq!(result.monthly_value.round_dp(2), dec!(8678.23));
    assert_eq!(result.secondary.round_dp(2), dec!(1082775.76));
    assert_eq!(result.total.round_dp(2), dec!(2082775.76));
    assert_eq!(result.total, result.principal + result.secondary);
    assert_eq!(result.breakdown.len(), 20);
    assert!(result.breakdown[19].balance < dec!(0.000001));
}

#[test]
fn test_interest_free_loan_scenario() {
    let result = compute_emi(dec!(1_200_000), dec!(0), 10).unwrap();

    assert_eq!(result.monthly_value, dec!(10000));
    assert_eq!(result.secondary, dec!(0));
    assert_eq!(result.breakdown[9].balance, dec!(0));
}

#[test]
fn test_equity_sip_scenario() {
    let result = compute_sip(dec!(10_000), dec!(12), 10).unwrap();

    assert_eq!(result.principal, dec!(1_200_000));
    assert_eq!(result.total.round_dp(2), dec!(2323390.76));
    assert_eq!(result.secondary.round_dp(2), dec!(1123390.76));
    assert_eq!(result.monthly_value, result.breakdown[9].total);
}

#[test]
fn test_flat_sip_scenario() {
    let result = compute_sip(dec!(5_000), dec!(0), 5).unwrap();

    assert_eq!(result.principal, dec!(300_000));
    assert_eq!(result.total, dec!(300_000));
    assert_eq!(result.secondary, dec!(0));
}

#[rstest]
#[case(dec!(100_000), dec!(1), 1)]
#[case(dec!(750_000), dec!(6.9), 7)]
#[case(dec!(3_000_000), dec!(13.2), 30)]
fn test_emi_segments_cover_whole_total(
    #[case] principal: Decimal,
    #[case] rate: Decimal,
    #[case] years: u32,
) {
    let result = compute_emi(principal, rate, years).unwrap();
    let [principal_share, interest_share] = to_chart_segments(&result, emi_styles()).unwrap();

    assert!((principal_share.percent + interest_share.percent - dec!(100)).abs() < dec!(0.000001));
    assert!(interest_share.percent > dec!(0));
    assert_eq!(principal_share.value, principal);
}

#[rstest]
#[case(dec!(500), dec!(1), 1)]
#[case(dec!(10_000), dec!(12), 10)]
#[case(dec!(40_000), dec!(0), 40)]
fn test_sip_segments_cover_whole_total(
    #[case] contribution: Decimal,
    #[case] rate: Decimal,
    #[case] years: u32,
) {
    let projection = compute(&CalculationInput::Sip(SipInput {
        monthly_contribution: contribution,
        expected_return: rate,
        period_years: years,
        timing: ContributionTiming::StartOfMonth,
    }))
    .unwrap();
    let [invested, returns] = to_chart_segments(&projection, sip_styles()).unwrap();

    assert!((invested.percent + returns.percent - dec!(100)).abs() < dec!(0.000001));
    assert_eq!(returns.label, "Returns");
    assert_eq!(invested.value, projection.principal());
}

#[test]
fn test_clamped_input_runs_cleanly() {
    let limits = InputLimits::default();
    let input = limits.clamp(CalculationInput::Emi(EmiInput {
        principal: dec!(20_000_000),
        annual_rate: dec!(8.5),
        tenure_years: 45,
    }));

    let projection = compute(&input).unwrap();
    assert_eq!(projection.principal(), dec!(10_000_000));
    assert_eq!(projection.years(), 30);
    assert!(to_chart_segments(&projection, emi_styles()).is_ok());
}

#[test]
fn test_repeated_calls_are_independent() {
    let first = compute_emi(dec!(1_000_000), dec!(8.5), 20).unwrap();
    let _other = compute_sip(dec!(10_000), dec!(12), 10).unwrap();
    let second = compute_emi(dec!(1_000_000), dec!(8.5), 20).unwrap();
    assert_eq!(first, second);
}
