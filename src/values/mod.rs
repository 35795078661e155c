pub mod comparer;
pub mod null;
pub mod traits;
pub mod value;

pub use comparer::{equals, equals_none_in, equals_one_in};
