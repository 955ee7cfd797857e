pub mod collation;
pub mod config;
pub mod format;
