//! Per-atom unsaturation classification and compact hash (§4.3).
//!
//! Molecules are expected to arrive in Kekulized form — aromatic rings expressed as
//! alternating concrete single/double bonds, the way MDL V2000 ground-truth files are
//! conventionally written — rather than tagged with the `Aromatic` bond order at
//! input time. That order exists on [`BondOrder`](crate::core::BondOrder) for input
//! tolerance, but the valence/unsaturation equality check below is defined in terms
//! of concrete bond multiplicities and assumes Kekulized input; see DESIGN.md.

use crate::core::{BondOrder, Element, MoleculeError, UnsaturationTag};
use crate::graph::{Atom, Bond};

/// Computes the unsaturation tag for one atom from its incident bonds.
///
/// For an atom with zero formal charge, `|expanded-neighbours| + implicit_H` must
/// equal `valence_ceiling`; a mismatch means missing bonds or an un-recorded charge
/// and is reported as [`MoleculeError::StateInconsistency`].
pub(crate) fn compute_unsaturation(
    atom: &Atom,
    bonds: &[Bond],
    element_of: impl Fn(u64) -> Option<Element>,
    molecule_id: u64,
) -> Result<UnsaturationTag, MoleculeError> {
    if atom.charge != 0 {
        return Ok(UnsaturationTag::Charged);
    }

    let incident: Vec<&Bond> = atom
        .bonds
        .iter()
        .filter_map(|bond_id| bonds.iter().find(|b| b.id == *bond_id))
        .collect();

    let expanded: u32 = incident.iter().map(|b| b.order.multiplicity() as u32).sum();
    if expanded + atom.implicit_hydrogen_count as u32 != atom.valence_ceiling as u32 {
        return Err(MoleculeError::state_inconsistency(
            molecule_id,
            format!(
                "atom {} has {} expanded neighbours + {} implicit H, expected valence {}",
                atom.input_id, expanded, atom.implicit_hydrogen_count, atom.valence_ceiling
            ),
        ));
    }

    let is_hetero_partner = |bond: &&Bond| -> bool {
        match bond.other(atom.input_id).and_then(&element_of) {
            Some(Element::Carbon) => false,
            Some(_) => true,
            None => false,
        }
    };

    let triples: Vec<&&Bond> = incident
        .iter()
        .filter(|b| b.order == BondOrder::Triple)
        .collect();
    let doubles: Vec<&&Bond> = incident
        .iter()
        .filter(|b| b.order == BondOrder::Double)
        .collect();

    let tag = if triples.len() == 1 {
        if is_hetero_partner(triples[0]) {
            UnsaturationTag::TripleBondHetero
        } else {
            UnsaturationTag::TripleBondCarbon
        }
    } else if doubles.len() == 1 {
        if is_hetero_partner(doubles[0]) {
            UnsaturationTag::DoubleBondHetero
        } else {
            UnsaturationTag::DoubleBondCarbon
        }
    } else if doubles.len() == 2 {
        let hetero_count = doubles.iter().filter(|b| is_hetero_partner(b)).count();
        match hetero_count {
            0 => UnsaturationTag::DoubleBondCarbonCarbon,
            1 => UnsaturationTag::DoubleBondCarbonHetero,
            _ => UnsaturationTag::DoubleBondHeteroHetero,
        }
    } else {
        UnsaturationTag::None
    };

    Ok(tag)
}

/// Compact ring-pattern-matching hash: `1000·Z + 10·unsaturation_code + implicit_H`.
pub(crate) fn compute_hash(atom: &Atom) -> u32 {
    1000 * atom.element.atomic_number() as u32
        + 10 * atom.unsaturation.code()
        + atom.implicit_hydrogen_count as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StereoTag;

    fn bond(id: u64, a1: u64, a2: u64, order: BondOrder) -> Bond {
        Bond {
            id,
            atom_ids: (a1, a2),
            order,
            stereo_tag: StereoTag::default(),
            aromatic: false,
            rings: Vec::new(),
            pair_hash: crate::graph::pair_hash(a1, a2),
        }
    }

    fn methyl_carbon() -> (Atom, Vec<Bond>) {
        let mut atom = Atom::new(1, Element::Carbon);
        atom.implicit_hydrogen_count = 3;
        atom.bonds = vec![1];
        let bonds = vec![bond(1, 1, 2, BondOrder::Single)];
        (atom, bonds)
    }

    #[test]
    fn saturated_carbon_has_none_tag() {
        let (atom, bonds) = methyl_carbon();
        let tag =
            compute_unsaturation(&atom, &bonds, |_| Some(Element::Carbon), 1).unwrap();
        assert_eq!(tag, UnsaturationTag::None);
    }

    #[test]
    fn charged_atom_is_charged_regardless_of_bonds() {
        let (mut atom, bonds) = methyl_carbon();
        atom.charge = 1;
        let tag =
            compute_unsaturation(&atom, &bonds, |_| Some(Element::Carbon), 1).unwrap();
        assert_eq!(tag, UnsaturationTag::Charged);
    }

    #[test]
    fn mismatched_valence_is_state_inconsistency() {
        let (mut atom, bonds) = methyl_carbon();
        atom.implicit_hydrogen_count = 0; // now 1 + 0 != 4
        let err = compute_unsaturation(&atom, &bonds, |_| Some(Element::Carbon), 1);
        assert!(matches!(err, Err(MoleculeError::StateInconsistency { .. })));
    }

    #[test]
    fn single_double_bond_to_oxygen_is_dbond_hetero() {
        let mut atom = Atom::new(1, Element::Carbon);
        atom.implicit_hydrogen_count = 0;
        atom.bonds = vec![1, 2, 3];
        let bonds = vec![
            bond(1, 1, 2, BondOrder::Double),
            bond(2, 1, 3, BondOrder::Single),
            bond(3, 1, 4, BondOrder::Single),
        ];
        let element_of = |id: u64| if id == 2 { Some(Element::Oxygen) } else { Some(Element::Carbon) };
        let tag = compute_unsaturation(&atom, &bonds, element_of, 1).unwrap();
        assert_eq!(tag, UnsaturationTag::DoubleBondHetero);
    }

    #[test]
    fn hash_formula_matches_spec() {
        let mut atom = Atom::new(1, Element::Carbon);
        atom.unsaturation = UnsaturationTag::Aromatic;
        atom.implicit_hydrogen_count = 1;
        assert_eq!(compute_hash(&atom), 1000 * 6 + 10 * 1 + 1);
    }
}
