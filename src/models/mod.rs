//! Presentation-side data shapes.

pub mod output;
