//! Core types for Vellum.

pub mod turn;
pub mod version;

pub use turn::*;
pub use version::*;
