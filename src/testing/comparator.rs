use log::trace;
use thiserror::Error;

use crate::values;
use crate::values::value::ComparableValue;

/// Produced when two values that should be equal are not. Carries the
/// rendered form of both operands for the failure report.
#[derive(Debug, Error)]
#[error("failed asserting that two values are equal\n expected: {expected}\n   actual: {actual}")]
pub struct ComparisonFailure {
    pub expected: String,
    pub actual: String,
}

/// Comparator that hooks custom equality into test assertions, see
/// [`assert_equals_value`](crate::assert_equals_value).
#[derive(Debug, Default)]
pub struct EqualityComparator;

impl EqualityComparator {
    /// Whether this comparator is responsible for the given pair of values,
    /// i.e. whether either side carries custom equality.
    pub fn accepts(
        &self,
        expected: &dyn ComparableValue,
        actual: &dyn ComparableValue,
    ) -> bool {
        expected.equality().is_some() || actual.equality().is_some()
    }

    /// Asserts that both values are equal, with the custom equality of
    /// either side taking authority over the comparison.
    pub fn assert_equals(
        &self,
        expected: &dyn ComparableValue,
        actual: &dyn ComparableValue,
    ) -> Result<(), ComparisonFailure> {
        if values::equals(expected, actual) {
            return Ok(());
        }
        trace!("equality assertion failed: expected {expected:?}, actual {actual:?}");
        Err(ComparisonFailure {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

/// Asserts that two values are equal according to
/// [`values::equals`](crate::values::equals), panicking with a rendered
/// comparison failure otherwise.
#[macro_export]
macro_rules! assert_equals_value {
    ($expected:expr, $actual:expr $(,)?) => {
        if let Err(failure) = $crate::testing::comparator::EqualityComparator
            .assert_equals(&$expected, &$actual)
        {
            core::panic!("{failure}");
        }
    };
}
