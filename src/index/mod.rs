pub mod primary;
pub mod posting;
pub mod inverted;
pub mod builder;
