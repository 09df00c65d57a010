//! Unit tests.

pub mod addressing;
pub mod config;
