//! # QED++ Core Library
//!
//! Computes the Quantitative Estimate of Drug-likeness (QED) of small molecules: a single
//! score in (0, 1) obtained by mapping eight molecular properties through asymmetric
//! double-sigmoid desirability curves and combining them with a weighted geometric mean.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless value types (`PropertyVector`, `WeightVector`),
//!   the compiled-in desirability parameter table, the pure desirability curve, the static
//!   SMARTS catalogs consumed by property extraction, and CSV I/O for property tables.
//!
//! - **[`engine`]: The Logic Core.** The weighted geometric-mean aggregation, the
//!   collaborator interfaces through which a cheminformatics toolkit supplies raw
//!   properties, scoring profiles, progress reporting, and error types.
//!
//! - **[`workflows`]: The Public API.** Named scoring entry points (`weights_max`,
//!   `weights_mean`, `weights_none`, `default`), the generic [`workflows::score::qed`]
//!   function, and batch scoring over many precomputed property vectors.
//!
//! Substructure matching, ring perception, and the empirical logP/TPSA models are owned by
//! the toolkit behind [`engine::extract::ChemToolkit`]; this crate never reimplements them.
//!
//! ## Example
//!
//! ```
//! use qedpp::core::models::properties::PropertyVector;
//! use qedpp::core::models::weights::WeightPreset;
//! use qedpp::engine::aggregate::aggregate;
//!
//! // Famotidine: MW, ALOGP, HBA, HBD, PSA, ROTB, AROM, ALERTS
//! let props = PropertyVector::new([337.453, -0.5598, 6.0, 5.0, 173.33, 8.0, 1.0, 3.0]);
//! let score = aggregate(&props, &WeightPreset::Mean.weights()).unwrap();
//! assert!((score - 0.241).abs() < 1e-3);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
