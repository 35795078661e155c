use crate::values::value::ComparableValue;

/// A type implementing this trait can determine if it equals any other value.
///
/// Strict comparison does not work between distinct instances that represent
/// the same value. Implementing this trait gives the type full control over
/// its own equality semantics, usually by downcasting the other value to its
/// own type and comparing internal state:
///
/// ```
/// use valeq::values::traits::custom_eq::CustomEq;
/// use valeq::values::value::ComparableValue;
///
/// #[derive(Debug, PartialEq)]
/// struct ScalarValue(i64);
///
/// impl CustomEq for ScalarValue {
///     fn equals(&self, other_value: &dyn ComparableValue) -> bool {
///         other_value
///             .downcast_ref::<Self>()
///             .is_some_and(|other_value| other_value.0 == self.0)
///     }
/// }
/// valeq::comparable_by_custom_eq!(ScalarValue);
///
/// assert!(valeq::values::equals(&ScalarValue(5), &ScalarValue(5)));
/// assert!(!valeq::values::equals(&ScalarValue(5), &5i64));
/// ```
pub trait CustomEq {
    /// Determines if this value should be considered equal to the other value.
    ///
    /// Must be pure, must not mutate either side, and must return `false`
    /// instead of panicking when the other value is of an incomparable type
    /// or [`Null`](crate::values::null::Null).
    fn equals(&self, other_value: &dyn ComparableValue) -> bool;
}
