//! Reading and writing tables of precomputed molecular properties.
//!
//! Tables are plain CSV: one header row, an optional `id` column, and one column per
//! [`Property`](crate::core::models::properties::Property) label or alias.

pub mod table;
