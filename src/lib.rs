#[macro_use]
extern crate mopa;

pub mod logger;
pub mod testing;
pub mod values;
