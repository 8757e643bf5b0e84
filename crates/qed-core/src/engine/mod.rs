//! # Engine Module
//!
//! The scoring engine: turns raw molecular properties into QED scores and defines how a
//! cheminformatics toolkit plugs in to supply those properties.
//!
//! ## Overview
//!
//! - **Aggregation** ([`aggregate`]) - Desirability mapping and the weighted geometric mean
//! - **Property Extraction** ([`extract`]) - The toolkit interface and the catalog-driven extractor
//! - **Scoring Profiles** ([`profile`]) - Weights plus desirability table, assembled by a builder
//! - **Progress Monitoring** ([`progress`]) - Callbacks for batch scoring front ends
//! - **Error Handling** ([`error`]) - The engine error type
//!
//! Nothing here holds cross-call state; every call is a pure function of its inputs and can
//! run concurrently with any other.

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod profile;
pub mod progress;
