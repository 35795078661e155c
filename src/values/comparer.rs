use chrono::{DateTime, NaiveDateTime, Utc};

use super::value::ComparableValue;

/// Determines if two values should be considered equal.
///
/// The first matching rule wins:
///
/// - If `value` carries custom equality, `value.equals(other_value)` decides.
/// - If `other_value` carries custom equality, `other_value.equals(value)`
///   decides.
/// - When both values are [`DateTime<Utc>`], or both are [`NaiveDateTime`],
///   they compare structurally by represented instant. The two variants are
///   never mixed; an aware and a naive date-time are unequal even for the
///   same instant.
/// - Otherwise strict comparison is used: same concrete type and value for
///   value-semantic types, reference identity for everything else, never any
///   coercion.
///
/// When both sides carry custom equality the first operand decides. Symmetry
/// is an expectation on [`CustomEq`](super::traits::custom_eq::CustomEq)
/// implementations, not enforced here.
///
/// ```
/// use valeq::values;
///
/// assert!(values::equals(&String::from("foo"), &String::from("foo")));
/// assert!(!values::equals(&1i64, &1.0f64));
/// ```
pub fn equals(value: &dyn ComparableValue, other_value: &dyn ComparableValue) -> bool {
    if let Some(custom) = value.equality() {
        return custom.equals(other_value);
    }
    if let Some(custom) = other_value.equality() {
        return custom.equals(value);
    }
    if let (Some(value), Some(other_value)) = (
        value.downcast_ref::<DateTime<Utc>>(),
        other_value.downcast_ref::<DateTime<Utc>>(),
    ) {
        return value == other_value;
    }
    if let (Some(value), Some(other_value)) = (
        value.downcast_ref::<NaiveDateTime>(),
        other_value.downcast_ref::<NaiveDateTime>(),
    ) {
        return value == other_value;
    }
    value.strict_eq(other_value)
}

/// Single scan shared by [`equals_one_in`] and [`equals_none_in`]. Consumes
/// `other_values` in order and stops at the first match.
fn contains_value<'a>(
    value: &dyn ComparableValue,
    other_values: impl IntoIterator<Item = &'a dyn ComparableValue>,
    on_match: bool,
) -> bool {
    for other_value in other_values {
        if equals(value, other_value) {
            return on_match;
        }
    }
    !on_match
}

/// Determines if a value should be considered equal to one of the items in
/// the list of other values. An empty list never matches.
pub fn equals_one_in<'a>(
    value: &dyn ComparableValue,
    other_values: impl IntoIterator<Item = &'a dyn ComparableValue>,
) -> bool {
    contains_value(value, other_values, true)
}

/// Determines if a value should be considered equal to none of the items in
/// the list of other values. True for an empty list.
pub fn equals_none_in<'a>(
    value: &dyn ComparableValue,
    other_values: impl IntoIterator<Item = &'a dyn ComparableValue>,
) -> bool {
    contains_value(value, other_values, false)
}

/// Variadic form of [`equals_one_in`], collecting the comparison set from
/// individual arguments.
#[macro_export]
macro_rules! equals_one_of {
    ($value:expr $(, $other_value:expr)* $(,)?) => {{
        let other_values: &[&dyn $crate::values::value::ComparableValue] =
            &[$(&$other_value),*];
        $crate::values::equals_one_in(&$value, other_values.iter().copied())
    }};
}

/// Variadic form of [`equals_none_in`], collecting the comparison set from
/// individual arguments.
#[macro_export]
macro_rules! equals_none_of {
    ($value:expr $(, $other_value:expr)* $(,)?) => {{
        let other_values: &[&dyn $crate::values::value::ComparableValue] =
            &[$(&$other_value),*];
        $crate::values::equals_none_in(&$value, other_values.iter().copied())
    }};
}
