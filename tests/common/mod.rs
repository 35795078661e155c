use valeq::values::traits::custom_eq::CustomEq;
use valeq::values::value::ComparableValue;

/// Immutable value object wrapping a single scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue(pub i64);

impl CustomEq for ScalarValue {
    fn equals(&self, other_value: &dyn ComparableValue) -> bool {
        other_value
            .downcast_ref::<Self>()
            .is_some_and(|other_value| other_value.0 == self.0)
    }
}

valeq::comparable_by_custom_eq!(ScalarValue);
