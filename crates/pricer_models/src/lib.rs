//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts, stochastic model parameters, and closed-form pricing.
//!
//! This crate provides:
//! - Vanilla option parameters with validation (`instruments`)
//! - Parameter sets for GBM, Heston and Merton jump-diffusion (`models`)
//! - Black-Scholes prices and Greeks (`analytical`)
//!
//! ## Design Principles
//!
//! - **Closed model set**: models are dispatched through an enum, not trait objects
//! - **Validate at construction**: every parameter set checks its invariants
//!   before any simulation starts
//! - **Generic closed forms**: Black-Scholes is generic over `T: Float`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod error;
pub mod instruments;
pub mod models;

pub use error::ModelError;
