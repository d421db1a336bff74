use matchq::domain::error::{ErrorKind, MatchError, PercentError};
use matchq::domain::operand::Operand;
use matchq::domain::percent::Percent;
use matchq::domain::validation::{MatchType, Validation};
use matchq::engine::diff::bytes_different;

const EXPECTED: &str = r#"{"value":5,"input":"hello"}"#;
const LARGER: &str = r#"{"value":10,"input":"hello","offset":5}"#;

fn deviation(tolerance: &str) -> Validation {
    Validation::new(MatchType::PercentageDeviation)
        .with_match_value(tolerance)
        .with_expected(EXPECTED)
}

#[test]
fn identical_values_have_zero_deviation() {
    let matched = deviation("10%")
        .matches(&Operand::from(EXPECTED))
        .expect("verdict");
    assert!(matched);

    let exact = deviation("0%")
        .matches(&Operand::from(EXPECTED))
        .expect("verdict");
    assert!(exact);
}

#[test]
fn deviation_is_the_tail_ratio_of_the_encoded_values() {
    let observed = Operand::from(LARGER).canonical_bytes().expect("encode");
    let expected = Operand::from(EXPECTED).canonical_bytes().expect("encode");
    let reports = bytes_different(&observed, &expected).expect("diff");
    assert_eq!(reports.len(), observed.len() - expected.len());

    let ratio = Percent::from_counts(expected.len(), reports.len()).expect("ratio");
    assert!(ratio.get() > 10.0 && ratio.get() <= 40.0, "ratio = {ratio}");

    assert!(deviation("40%").matches(&Operand::from(LARGER)).expect("verdict"));
    assert!(!deviation("10%").matches(&Operand::from(LARGER)).expect("verdict"));
}

#[test]
fn zero_counts_are_degenerate() {
    let err = Percent::from_counts(0, 0).expect_err("degenerate");
    assert_eq!(err, PercentError::BothZero);
    assert_eq!(MatchError::from(err).kind(), ErrorKind::DegenerateInput);
}

#[test]
fn malformed_tolerance_is_reported() {
    let err = deviation("ten percent")
        .matches(&Operand::from(EXPECTED))
        .expect_err("invalid tolerance");
    assert!(matches!(
        err,
        MatchError::Percent(PercentError::InvalidFormat { .. })
    ));
}
