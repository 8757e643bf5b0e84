//! # Desirability Module
//!
//! Asymmetric double-sigmoid (ADS) desirability curves that map a raw molecular property
//! onto a value in (0, 1).
//!
//! - [`params`] - The per-property curve constants and the compiled-in QED table
//! - [`curve`] - The ADS function itself

pub mod curve;
pub mod params;
