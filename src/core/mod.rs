//! Core types shared across the graph, ring detector, and aromaticity classifier.
//!
//! This module centralizes the chemical enumerations, the error hierarchy, and the
//! dense bit-set used for ring/bond-set algebra, so the feature modules above it stay
//! focused on algorithm rather than data representation.

pub mod bitset;
pub mod error;
pub mod properties;

pub use bitset::DenseBitSet;
pub use error::MoleculeError;
pub use properties::{
    BondOrder, ChiralityTag, Element, ParseBondOrderError, ParseElementError, RadicalTag,
    StereoTag, UnsaturationTag,
};
