pub mod correlation;
pub mod distribution;
pub mod export;
pub mod loader;
pub mod overview;
pub mod statistics;
pub mod types;
pub mod utils;

pub use loader::load_table;
pub use types::*;
