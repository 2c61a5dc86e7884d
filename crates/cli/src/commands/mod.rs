//! Command implementations.
//!
//! Each command receives the already-loaded configuration; none of them
//! reads the environment again.

pub mod check;
pub mod export;
pub mod show;
