//! Command implementations

pub mod serve;

pub use serve::run_serve;
