//! Command implementations for the football standings CLI

pub mod common;
pub mod leagues;
pub mod render;
pub mod seasons;
pub mod standings;
