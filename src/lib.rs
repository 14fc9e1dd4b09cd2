pub mod errors;
pub mod models;
pub mod sources;
pub mod utils;
