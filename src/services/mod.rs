pub mod analyzer;
pub mod features;
pub mod table;
