pub mod harness;
pub mod scaling;
pub mod report;
