//! Error types describing the contract violations a `Molecule` can report.
//!
//! Mirrors the teacher's `TyperError` / `GraphValidationError` split: a root error
//! enum groups failures by the error-kind categories the molecule container's
//! contract names, and every variant's message embeds enough identifying detail
//! (molecule id, atom id(s), observed-vs-expected counts) to diagnose without a
//! debugger attached.

use thiserror::Error;

/// Root error returned by every fallible `Molecule` operation.
#[derive(Debug, Error)]
pub enum MoleculeError {
    /// A caller-supplied argument violated a structural precondition (out-of-range
    /// atom id, malformed attribute name, bond order not legal at creation time).
    #[error("invalid argument for molecule {molecule_id}: {message}")]
    InvalidArgument { molecule_id: u64, message: String },

    /// A bond or atom addition would push an atom's bonded valence past its natural
    /// valence.
    #[error(
        "valence violation on atom {atom_id} in molecule {molecule_id}: expected at most {expected}, observed {observed}"
    )]
    ValenceViolation {
        molecule_id: u64,
        atom_id: u64,
        expected: u8,
        observed: u8,
    },

    /// An attribute with the same name was already present on this molecule.
    #[error("attribute '{name}' already present on molecule {molecule_id}")]
    DuplicateAttribute { molecule_id: u64, name: String },

    /// An operation attempted to mutate a molecule after it was normalised, or to
    /// mutate a ring/ring-system record directly.
    #[error("cannot mutate molecule {molecule_id}: {message}")]
    Immutability { molecule_id: u64, message: String },

    /// An internal invariant the detector or aromaticity classifier relies on did not
    /// hold; this indicates a bug in this crate rather than a bad caller input.
    #[error("internal state inconsistency in molecule {molecule_id}: {message}")]
    StateInconsistency { molecule_id: u64, message: String },
}

impl MoleculeError {
    pub fn invalid_argument(molecule_id: u64, message: impl Into<String>) -> Self {
        MoleculeError::InvalidArgument {
            molecule_id,
            message: message.into(),
        }
    }

    pub fn state_inconsistency(molecule_id: u64, message: impl Into<String>) -> Self {
        MoleculeError::StateInconsistency {
            molecule_id,
            message: message.into(),
        }
    }

    pub fn valence_violation(molecule_id: u64, atom_id: u64, expected: u8, observed: u8) -> Self {
        MoleculeError::ValenceViolation {
            molecule_id,
            atom_id,
            expected,
            observed,
        }
    }

    pub fn duplicate_attribute(molecule_id: u64, name: impl Into<String>) -> Self {
        MoleculeError::DuplicateAttribute {
            molecule_id,
            name: name.into(),
        }
    }

    pub fn immutability(molecule_id: u64, message: impl Into<String>) -> Self {
        MoleculeError::Immutability {
            molecule_id,
            message: message.into(),
        }
    }
}
