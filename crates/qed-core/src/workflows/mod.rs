//! # Workflows Module
//!
//! The public entry points of QED++.
//!
//! ## Overview
//!
//! - **Single-molecule scoring** ([`score`]) - The generic [`score::qed`] function and the
//!   three named weighting schemes, each taking a molecule through a property extractor
//!   or a precomputed property vector.
//! - **Batch scoring** ([`batch`]) - Scores a table of precomputed property records under
//!   one scoring profile, in parallel when the `parallel` feature is enabled.
//!
//! Every workflow is a pure function of its arguments; concurrent calls never interact.

pub mod batch;
pub mod score;
