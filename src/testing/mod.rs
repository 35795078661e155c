pub mod comparator;

pub use comparator::{ComparisonFailure, EqualityComparator};
