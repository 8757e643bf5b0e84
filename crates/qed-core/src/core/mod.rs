//! # Core Module
//!
//! Stateless building blocks for QED scoring.
//!
//! ## Overview
//!
//! Everything in this module is either an immutable value type or a pure function. The
//! desirability parameter table and the SMARTS catalogs are compiled into the binary as
//! `const`/`static` data and are never mutated at runtime.
//!
//! - **Molecular Properties** ([`models`]) - The eight-slot property and weight vectors
//! - **Desirability Curves** ([`desirability`]) - ADS parameters and the curve itself
//! - **Pattern Catalogs** ([`catalog`]) - Acceptor and structural-alert SMARTS used by extraction
//! - **Tabular I/O** ([`io`]) - Reading precomputed property tables and writing score tables

pub mod catalog;
pub mod desirability;
pub mod io;
pub mod models;
