pub mod errors;
pub mod filters;
pub mod loader;
pub mod output;
pub mod reports;
pub mod trips;
