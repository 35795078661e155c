mod common;

use common::ScalarValue;
use valeq::assert_equals_value;
use valeq::testing::EqualityComparator;

#[test]
fn accepts_pairs_with_custom_equality_on_either_side() {
    let comparator = EqualityComparator;

    assert!(comparator.accepts(&ScalarValue(1), &String::from("bar")));
    assert!(comparator.accepts(&String::from("bar"), &ScalarValue(1)));
    assert!(!comparator.accepts(&String::from("bar"), &String::from("foo")));
}

#[test]
fn asserts_equality_through_custom_equality() {
    let comparator = EqualityComparator;

    assert!(
        comparator
            .assert_equals(&ScalarValue(5), &ScalarValue(5))
            .is_ok()
    );

    let failure = comparator
        .assert_equals(&ScalarValue(5), &ScalarValue(6))
        .unwrap_err();
    assert_eq!(failure.expected, "ScalarValue(5)");
    assert_eq!(failure.actual, "ScalarValue(6)");
    assert!(
        failure
            .to_string()
            .contains("failed asserting that two values are equal")
    );
}

#[test]
fn assertion_macro_passes_for_equal_values() {
    valeq::logger::init_logger();

    assert_equals_value!(ScalarValue(5), ScalarValue(5));
    assert_equals_value!(String::from("foo"), String::from("foo"));
}

#[test]
#[should_panic(expected = "failed asserting that two values are equal")]
fn assertion_macro_panics_for_unequal_values() {
    assert_equals_value!(ScalarValue(5), ScalarValue(6));
}
