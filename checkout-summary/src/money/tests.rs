use super::*;

fn d(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_float_artifacts_avoided() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    assert_ne!(a + b, 0.3);

    assert_eq!(sum_money([d("0.1"), d("0.2")]), d("0.3"));
}

#[test]
fn test_accumulation_precision() {
    // Sum 0.01 one thousand times
    let amounts = std::iter::repeat_n(d("0.01"), 1000);
    assert_eq!(sum_money(amounts), d("10"));
}

#[test]
fn test_to_minor_units_rounds_half_up() {
    assert_eq!(to_minor_units(d("10.00")), d("1000"));
    assert_eq!(to_minor_units(d("12.345")), d("1235"));
    assert_eq!(to_minor_units(d("12.344")), d("1234"));
    assert_eq!(to_minor_units(d("-1.005")), d("-101"));
}

#[test]
fn test_from_minor_units() {
    assert_eq!(from_minor_units(d("999")), d("9.99"));
    assert_eq!(from_minor_units(d("0")), Decimal::ZERO);
    assert_eq!(from_minor_units(d("-150")), d("-1.50"));
}

#[test]
fn test_money_scale_is_fixed() {
    assert_eq!(from_minor_units(d("3000")).to_string(), "30.00");
    assert_eq!(sum_money(Vec::new()).to_string(), "0.00");
    assert_eq!(ZERO.to_string(), "0.00");
}

#[test]
fn test_sum_money_rounds_each_item_to_cents() {
    // Each item is rounded to cents before summing: 1.005 -> 1.01, twice
    assert_eq!(sum_money([d("1.005"), d("1.005")]), d("2.02"));
    assert_eq!(sum_money(Vec::new()), Decimal::ZERO);
}

#[test]
fn test_percent_of() {
    assert_eq!(percent_of(d("10.00"), d("8")), d("0.80"));
    assert_eq!(percent_of(d("30.00"), d("10")), d("3.00"));
    // 33.33% of $100 = $33.33
    assert_eq!(percent_of(d("100"), d("33.33")), d("33.33"));
    // 7.25% of $19.99 = 144.9275 cents -> 145
    assert_eq!(percent_of(d("19.99"), d("7.25")), d("1.45"));
    assert_eq!(percent_of(d("19.99"), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_round_money() {
    assert_eq!(round_money(d("2.675")), d("2.68"));
    assert_eq!(round_money(d("2.674")), d("2.67"));
    assert_eq!(round_money(d("-2.675")), d("-2.68"));
}

#[test]
fn test_checked_percent_of() {
    assert_eq!(checked_percent_of(d("30.00"), d("10")), Some(d("3.00")));
    assert_eq!(checked_percent_of(d("50.00"), d("-10")), Some(d("-5.00")));
    assert_eq!(
        checked_percent_of(d("1000000"), d("100000000000000000000000")),
        None
    );
    assert_eq!(checked_percent_of(Decimal::MAX, Decimal::ONE), None);
}

#[test]
fn test_overflow_saturates() {
    assert_eq!(to_minor_units(Decimal::MAX), Decimal::MAX);
    assert_eq!(to_minor_units(Decimal::MIN), Decimal::MIN);
    assert_eq!(
        sum_money([Decimal::MAX, Decimal::MAX]),
        from_minor_units(Decimal::MAX)
    );

    let huge = percent_of(d("1000000"), d("100000000000000000000000"));
    assert_eq!(huge, from_minor_units(d("792281625142643375935439503")));
    let negative = percent_of(d("1000000"), d("-100000000000000000000000"));
    assert_eq!(negative, -huge);
}
