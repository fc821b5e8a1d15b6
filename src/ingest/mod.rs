pub mod store;
pub mod csv_loader;
pub mod sample;
