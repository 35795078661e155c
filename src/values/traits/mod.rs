pub mod custom_eq;
