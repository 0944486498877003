#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod random;

pub use random::RandomSource;
