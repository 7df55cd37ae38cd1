//! Chemical enumerations shared across the graph, detector, and aromaticity modules.
//!
//! These types intentionally stop short of a full periodic table: natural valence and
//! atomic weight are tabulated only for the elements that appear in the crate's worked
//! examples (organic and simple heteroaromatic chemistry). A real periodic table is an
//! external collaborator, not part of this core.

use std::fmt;
use std::str::FromStr;

/// A chemical element, identified by atomic number.
///
/// Only the elements exercised by this crate's ring/aromaticity fixtures carry a
/// natural valence and atomic weight; [`Element::natural_valence`] and
/// [`Element::atomic_weight`] cover organic and simple heteroaromatic chemistry, not
/// the full periodic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    Hydrogen = 1,
    Boron = 5,
    Carbon = 6,
    Nitrogen = 7,
    Oxygen = 8,
    Fluorine = 9,
    Silicon = 14,
    Phosphorus = 15,
    Sulfur = 16,
    Chlorine = 17,
    Selenium = 34,
    Bromine = 35,
    Iodine = 53,
}

impl Element {
    /// Atomic number of this element.
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    /// Standard one- or two-letter symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Boron => "B",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Fluorine => "F",
            Element::Silicon => "Si",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Chlorine => "Cl",
            Element::Selenium => "Se",
            Element::Bromine => "Br",
            Element::Iodine => "I",
        }
    }

    /// Typical bonding valence used by the unsaturation and hybridization heuristics.
    pub fn natural_valence(&self) -> u8 {
        match self {
            Element::Hydrogen | Element::Fluorine | Element::Chlorine | Element::Bromine
            | Element::Iodine => 1,
            Element::Oxygen | Element::Sulfur | Element::Selenium => 2,
            Element::Nitrogen | Element::Boron | Element::Phosphorus => 3,
            Element::Carbon | Element::Silicon => 4,
        }
    }

    /// Standard atomic weight in daltons, rounded to two decimals.
    pub fn atomic_weight(&self) -> f64 {
        match self {
            Element::Hydrogen => 1.01,
            Element::Boron => 10.81,
            Element::Carbon => 12.01,
            Element::Nitrogen => 14.01,
            Element::Oxygen => 16.00,
            Element::Fluorine => 19.00,
            Element::Silicon => 28.09,
            Element::Phosphorus => 30.97,
            Element::Sulfur => 32.07,
            Element::Chlorine => 35.45,
            Element::Selenium => 78.97,
            Element::Bromine => 79.90,
            Element::Iodine => 126.90,
        }
    }
}

/// Error returned when a symbol does not match a recognised [`Element`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognised element symbol '{0}'")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "H" => Ok(Element::Hydrogen),
            "B" => Ok(Element::Boron),
            "C" => Ok(Element::Carbon),
            "N" => Ok(Element::Nitrogen),
            "O" => Ok(Element::Oxygen),
            "F" => Ok(Element::Fluorine),
            "Si" => Ok(Element::Silicon),
            "P" => Ok(Element::Phosphorus),
            "S" => Ok(Element::Sulfur),
            "Cl" => Ok(Element::Chlorine),
            "Se" => Ok(Element::Selenium),
            "Br" => Ok(Element::Bromine),
            "I" => Ok(Element::Iodine),
            other => Err(ParseElementError(other.to_string())),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Bond multiplicity as it may be asserted when an edge is created.
///
/// Only these four concrete orders are accepted by `Molecule::add_bond`; ambiguous
/// "single-or-double"-style tags are an input-tolerance concern of an upstream reader
/// (e.g. an SDF parser) and never reach this core, so no such variant exists here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Formal bond multiplicity used by electron-counting arithmetic. Aromatic bonds are
    /// treated as contributing a single formal bond for this purpose; their extra electron
    /// is accounted for separately by the aromaticity classifier's per-atom case table.
    pub fn multiplicity(&self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Aromatic => 1,
        }
    }
}

/// Error returned when a bond-order token does not match a recognised [`BondOrder`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognised bond order '{0}'")]
pub struct ParseBondOrderError(pub String);

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" | "1" => Ok(BondOrder::Single),
            "double" | "2" => Ok(BondOrder::Double),
            "triple" | "3" => Ok(BondOrder::Triple),
            "aromatic" | "4" => Ok(BondOrder::Aromatic),
            other => Err(ParseBondOrderError(other.to_string())),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BondOrder::Single => "single",
            BondOrder::Double => "double",
            BondOrder::Triple => "triple",
            BondOrder::Aromatic => "aromatic",
        };
        f.write_str(text)
    }
}

/// Opaque stereo descriptor carried by an atom, passed through unexamined by ring
/// perception and aromaticity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StereoTag {
    #[default]
    None,
    R,
    S,
    Unspecified,
}

/// Opaque chirality descriptor, likewise passed through unexamined by this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChiralityTag {
    #[default]
    None,
    Clockwise,
    CounterClockwise,
    Unspecified,
}

/// Radical multiplicity carried on an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RadicalTag {
    #[default]
    None,
    Doublet,
    Triplet,
}

/// Per-atom unsaturation classification computed during `Molecule::normalise`,
/// describing the multiset of non-single bonds and heteroatom participation at an
/// atom. `_C`/`_X` suffixes distinguish a carbon-only partner set from one touching
/// at least one heteroatom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnsaturationTag {
    /// All incident bonds are single; charge is zero.
    #[default]
    None,
    /// Member of an aromatic ring; overrides any other tag.
    Aromatic,
    /// Exactly one double bond, to a carbon partner.
    DoubleBondCarbon,
    /// Exactly one double bond, to a heteroatom partner.
    DoubleBondHetero,
    /// Exactly two double bonds, both to carbon partners.
    DoubleBondCarbonCarbon,
    /// Exactly two double bonds, one to carbon, one to a heteroatom.
    DoubleBondCarbonHetero,
    /// Exactly two double bonds, both to heteroatom partners.
    DoubleBondHeteroHetero,
    /// Exactly one triple bond, to a carbon partner.
    TripleBondCarbon,
    /// Exactly one triple bond, to a heteroatom partner.
    TripleBondHetero,
    /// Non-zero formal charge; takes priority over bond-multiplicity tags.
    Charged,
}

impl UnsaturationTag {
    /// Numeric code used by the compact atom hash (`1000·Z + 10·code + implicit_H`).
    pub fn code(&self) -> u32 {
        match self {
            UnsaturationTag::None => 0,
            UnsaturationTag::Aromatic => 1,
            UnsaturationTag::DoubleBondCarbon => 2,
            UnsaturationTag::DoubleBondHetero => 3,
            UnsaturationTag::DoubleBondCarbonCarbon => 4,
            UnsaturationTag::DoubleBondCarbonHetero => 5,
            UnsaturationTag::DoubleBondHeteroHetero => 6,
            UnsaturationTag::TripleBondCarbon => 7,
            UnsaturationTag::TripleBondHetero => 8,
            UnsaturationTag::Charged => 9,
        }
    }
}
