//! Ring and ring-system records.
//!
//! A [`Ring`] is built by the detector one atom at a time and frozen once closed;
//! after that its cycle composition is immutable (invariant iv of the data model).
//! A [`RingSystem`] is the maximal grouping of rings connected by a shared bond
//! (fusion/bridge) or shared atom (spiro).

use crate::core::{DenseBitSet, MoleculeError};

/// A simple cycle of atoms and bonds, size ≥ 3.
///
/// Stored rotated so the atom with the lowest normalised id is first (rotate-left to
/// that atom's index — never reversed; see DESIGN.md for why this direction, not the
/// other, satisfies the data model's invariant v).
#[derive(Debug, Clone)]
pub struct Ring {
    pub id: u64,
    pub atoms: Vec<u64>,
    pub bonds: Vec<u64>,
    pub atom_bitset: DenseBitSet,
    pub bond_bitset: DenseBitSet,
    pub aromatic: bool,
    pub hetero_aromatic: bool,
    pub completed: bool,
    pub ring_system_id: Option<u64>,
}

impl Ring {
    /// Freezes a candidate cycle into a completed ring record.
    ///
    /// `bonds[i]` must be the edge between `atoms[i]` and `atoms[(i + 1) % n]`; the
    /// caller (the detector) is responsible for building both lists in matching cyclic
    /// order so the rotation below keeps them aligned.
    pub(crate) fn complete(
        id: u64,
        mut atoms: Vec<u64>,
        mut bonds: Vec<u64>,
        atom_capacity: usize,
        bond_capacity: usize,
        molecule_id: u64,
    ) -> Result<Ring, MoleculeError> {
        if atoms.len() < 3 || atoms.len() != bonds.len() {
            return Err(MoleculeError::state_inconsistency(
                molecule_id,
                format!(
                    "ring has {} atoms and {} bonds; a completed ring needs matching counts >= 3",
                    atoms.len(),
                    bonds.len()
                ),
            ));
        }

        let min_pos = atoms
            .iter()
            .enumerate()
            .min_by_key(|&(_, &atom_id)| atom_id)
            .map(|(index, _)| index)
            .unwrap_or(0);
        atoms.rotate_left(min_pos);
        bonds.rotate_left(min_pos);

        let atom_bitset =
            DenseBitSet::from_ids(atoms.iter().map(|&id| id as usize), atom_capacity);
        let bond_bitset =
            DenseBitSet::from_ids(bonds.iter().map(|&id| id as usize), bond_capacity);

        Ok(Ring {
            id,
            atoms,
            bonds,
            atom_bitset,
            bond_bitset,
            aromatic: false,
            hetero_aromatic: false,
            completed: true,
            ring_system_id: None,
        })
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    /// Two completed rings in the same molecule are equal iff their bond bit-sets
    /// are equal (invariant vi).
    pub fn bonds_equal(&self, other: &Ring) -> bool {
        self.bond_bitset == other.bond_bitset
    }

    /// The shorter of the two arc lengths (in edges) between two atoms that both lie
    /// on this ring's cycle. Used by the spurious-ring pruning test, which compares
    /// this against the molecule's graph distance between the same two atoms.
    pub fn shorter_arc_length(&self, atom_a: u64, atom_b: u64) -> Option<usize> {
        let n = self.atoms.len();
        let pos_a = self.atoms.iter().position(|&a| a == atom_a)?;
        let pos_b = self.atoms.iter().position(|&a| a == atom_b)?;
        if pos_a == pos_b {
            return Some(0);
        }
        let forward = pos_b.abs_diff(pos_a);
        let backward = n - forward;
        Some(forward.min(backward))
    }
}

/// A maximal connected grouping of rings, joined by shared bonds or shared atoms.
#[derive(Debug, Clone)]
pub struct RingSystem {
    pub id: u64,
    pub rings: Vec<u64>,
    pub atom_bitset: DenseBitSet,
    pub bond_bitset: DenseBitSet,
    pub aromatic: bool,
}

impl RingSystem {
    pub(crate) fn new(id: u64, atom_capacity: usize, bond_capacity: usize) -> Self {
        RingSystem {
            id,
            rings: Vec::new(),
            atom_bitset: DenseBitSet::new(atom_capacity),
            bond_bitset: DenseBitSet::new(bond_capacity),
            aromatic: false,
        }
    }

    /// `true` if `ring` shares at least one bond with this system's aggregate — a
    /// fusion/bridge join, checked before the weaker spiro (atom-only) test.
    pub fn shares_bond_with(&self, ring: &Ring) -> bool {
        self.overlaps_bonds(&ring.bond_bitset)
    }

    /// `true` if `ring` shares at least one atom with this system's aggregate.
    pub fn shares_atom_with(&self, ring: &Ring) -> bool {
        self.overlaps_atoms(&ring.atom_bitset)
    }

    /// Bitset-level form of [`RingSystem::shares_bond_with`], usable while grouping
    /// candidate cycles that haven't been frozen into a [`Ring`] yet (the detector's
    /// grouping pass works with a candidate's bitsets directly, before ring ids exist).
    pub(crate) fn overlaps_bonds(&self, bond_bitset: &DenseBitSet) -> bool {
        !self.bond_bitset.is_disjoint(bond_bitset)
    }

    /// Bitset-level form of [`RingSystem::shares_atom_with`].
    pub(crate) fn overlaps_atoms(&self, atom_bitset: &DenseBitSet) -> bool {
        !self.atom_bitset.is_disjoint(atom_bitset)
    }

    pub(crate) fn admit(&mut self, ring: &Ring) {
        self.rings.push(ring.id);
        self.atom_bitset.union_assign(&ring.atom_bitset);
        self.bond_bitset.union_assign(&ring.bond_bitset);
    }

    /// Bitset-level form of [`RingSystem::admit`], merging a candidate's bitsets into
    /// the aggregate before it has a ring id.
    pub(crate) fn union_bitsets(&mut self, atom_bitset: &DenseBitSet, bond_bitset: &DenseBitSet) {
        self.atom_bitset.union_assign(atom_bitset);
        self.bond_bitset.union_assign(bond_bitset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_triangle(id: u64) -> Ring {
        Ring::complete(id, vec![3, 1, 2], vec![30, 10, 20], 8, 40, 1).unwrap()
    }

    #[test]
    fn completed_ring_rotates_to_lowest_atom_id() {
        let ring = build_triangle(1);
        assert_eq!(ring.atoms[0], 1);
    }

    #[test]
    fn bonds_rotate_in_step_with_atoms() {
        // atoms [3,1,2] with bonds [30,10,20] means bond 30 is (3,1), 10 is (1,2), 20 is (2,3).
        // After rotating atoms to [1,2,3], bonds must become [10,20,30].
        let ring = build_triangle(1);
        assert_eq!(ring.atoms, vec![1, 2, 3]);
        assert_eq!(ring.bonds, vec![10, 20, 30]);
    }

    #[test]
    fn equal_bond_bitsets_mean_equal_rings() {
        let a = Ring::complete(1, vec![1, 2, 3], vec![10, 20, 30], 8, 40, 1).unwrap();
        let b = Ring::complete(2, vec![2, 3, 1], vec![20, 30, 10], 8, 40, 1).unwrap();
        assert!(a.bonds_equal(&b));
    }

    #[test]
    fn rejects_undersized_ring() {
        let err = Ring::complete(1, vec![1, 2], vec![10, 20], 8, 40, 1);
        assert!(err.is_err());
    }

    #[test]
    fn shorter_arc_picks_the_smaller_side() {
        let ring = Ring::complete(1, vec![1, 2, 3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6], 8, 8, 1)
            .unwrap();
        assert_eq!(ring.shorter_arc_length(1, 4), Some(3));
        assert_eq!(ring.shorter_arc_length(1, 2), Some(1));
    }

    #[test]
    fn ring_system_prefers_bond_sharing_over_atom_sharing() {
        let mut system = RingSystem::new(1, 8, 40);
        let a = Ring::complete(1, vec![1, 2, 3], vec![10, 20, 30], 8, 40, 1).unwrap();
        system.admit(&a);
        let fused = Ring::complete(2, vec![2, 3, 4], vec![20, 40, 50], 8, 40, 1).unwrap();
        assert!(system.shares_bond_with(&fused));
        let spiro = Ring::complete(3, vec![3, 5, 6], vec![60, 70, 80], 8, 40, 1).unwrap();
        assert!(!system.shares_bond_with(&spiro));
        assert!(system.shares_atom_with(&spiro));
    }
}
