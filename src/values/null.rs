use core::fmt::Display;

/// Unit value standing in for the absence of a value in comparisons.
///
/// `Null` compares equal only to itself; every other comparison against it
/// evaluates to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl Display for Null {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "null")
    }
}

crate::comparable_by_value!(Null);
