use core::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::traits::custom_eq::CustomEq;

/// A value that can be handed to the comparer functions in
/// [`crate::values::comparer`].
///
/// The two hooks mirror the two tail ends of the comparer's dispatch chain:
/// [`ComparableValue::equality`] exposes a custom equality implementation if
/// the type carries one, and [`ComparableValue::strict_eq`] is the final
/// fallback. The default fallback is reference identity, so a value without
/// value semantics is only strictly equal to itself.
pub trait ComparableValue: mopa::Any + fmt::Debug {
    /// Custom equality hook. Types with their own equality semantics return
    /// themselves, see [`comparable_by_custom_eq`](crate::comparable_by_custom_eq).
    fn equality(&self) -> Option<&dyn CustomEq> {
        None
    }

    /// Strict comparison with another value. No coercion is ever performed:
    /// a value of a different concrete type is never strictly equal, even
    /// when both values share an address (a struct and its first field do).
    fn strict_eq(&self, other_value: &dyn ComparableValue) -> bool {
        self.get_type_id() == other_value.get_type_id()
            && core::ptr::addr_eq(
                self as *const Self,
                other_value as *const dyn ComparableValue,
            )
    }
}

mopafy!(ComparableValue);

/// Implements [`ComparableValue`] with value semantics: strict comparison
/// succeeds when the other value has the same concrete type and `==` holds.
#[macro_export]
macro_rules! comparable_by_value {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::values::value::ComparableValue for $t {
                fn strict_eq(
                    &self,
                    other_value: &dyn $crate::values::value::ComparableValue,
                ) -> bool {
                    other_value
                        .downcast_ref::<$t>()
                        .is_some_and(|other_value| self == other_value)
                }
            }
        )+
    };
}

/// Implements [`ComparableValue`] for a [`CustomEq`] type, routing all
/// comparisons through its custom equality implementation.
#[macro_export]
macro_rules! comparable_by_custom_eq {
    ($t:ty) => {
        impl $crate::values::value::ComparableValue for $t {
            fn equality(
                &self,
            ) -> ::core::option::Option<&dyn $crate::values::traits::custom_eq::CustomEq>
        {
                ::core::option::Option::Some(self)
            }
        }
    };
}

comparable_by_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64, String,
    &'static str,
    (),
);

// Lists compare element-wise by value, like the scalar primitives.
impl<T: PartialEq + fmt::Debug + 'static> ComparableValue for Vec<T> {
    fn strict_eq(&self, other_value: &dyn ComparableValue) -> bool {
        other_value
            .downcast_ref::<Vec<T>>()
            .is_some_and(|other_value| self == other_value)
    }
}

// The two recognized temporal variants. They keep the identity fallback here;
// the comparer gives two values of the same variant a structural comparison
// before strict comparison is reached.
impl ComparableValue for DateTime<Utc> {}
impl ComparableValue for NaiveDateTime {}
