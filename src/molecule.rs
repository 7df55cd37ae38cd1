//! `Molecule`: the arena that owns every atom, bond, ring and ring-system and
//! orchestrates normalisation (§4.1, §4.2).
//!
//! Atoms and bonds are appended to dense vectors and looked up through id-keyed
//! index maps rather than by raw `id - 1` arithmetic, so `removeAtom`/`breakBond`
//! can shrink the arena (via `swap_remove`) without leaving dangling indices; see
//! DESIGN.md for why this departs from a pure positional arena.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::aromaticity;
use crate::core::{BondOrder, Element, MoleculeError};
use crate::detector;
use crate::distance::DistanceMatrix;
use crate::graph::{pair_hash, Atom, Bond};
use crate::ring::{Ring, RingSystem};
use crate::unsaturation;

static NEXT_MOLECULE_ID: AtomicU64 = AtomicU64::new(1);

/// Owns every atom, bond, ring and ring-system of one molecule, plus the
/// distance matrix and free-form attribute list. See §3 of the data model for
/// the full invariant list this type upholds.
#[derive(Debug)]
pub struct Molecule {
    id: u64,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    rings: Vec<Ring>,
    ring_systems: Vec<RingSystem>,
    atom_index: HashMap<u64, usize>,
    bond_index: HashMap<u64, usize>,
    bond_pair_index: HashMap<u64, u64>,
    peak_atom_id: u64,
    peak_bond_id: u64,
    next_ring_id: u64,
    next_ring_system_id: u64,
    distance_matrix: Option<DistanceMatrix>,
    attributes: Vec<(String, String)>,
    vendor_id: Option<String>,
    normalised: bool,
}

impl Default for Molecule {
    fn default() -> Self {
        Self::new()
    }
}

impl Molecule {
    /// Creates an empty molecule with a fresh, process-wide unique id.
    pub fn new() -> Self {
        let id = NEXT_MOLECULE_ID.fetch_add(1, Ordering::Relaxed);
        Molecule {
            id,
            atoms: Vec::new(),
            bonds: Vec::new(),
            rings: Vec::new(),
            ring_systems: Vec::new(),
            atom_index: HashMap::new(),
            bond_index: HashMap::new(),
            bond_pair_index: HashMap::new(),
            peak_atom_id: 0,
            peak_bond_id: 0,
            next_ring_id: 1,
            next_ring_system_id: 1,
            distance_matrix: None,
            attributes: Vec::new(),
            vendor_id: None,
            normalised: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Adds a fresh atom of `element`, returning its input-order id.
    pub fn add_atom(&mut self, element: Element) -> u64 {
        self.peak_atom_id += 1;
        let id = self.peak_atom_id;
        self.atom_index.insert(id, self.atoms.len());
        self.atoms.push(Atom::new(id, element));
        self.invalidate_ring_state();
        id
    }

    /// Adds a bond between two atoms of this molecule. If a bond already connects
    /// `a1` and `a2`, returns its existing id rather than creating a duplicate.
    pub fn add_bond(&mut self, a1: u64, a2: u64, order: BondOrder) -> Result<u64, MoleculeError> {
        if a1 == a2 {
            return Err(MoleculeError::invalid_argument(
                self.id,
                format!("cannot bond atom {a1} to itself"),
            ));
        }
        let idx1 = self.require_atom_index(a1)?;
        let idx2 = self.require_atom_index(a2)?;

        let hash = pair_hash(a1, a2);
        if let Some(&existing_id) = self.bond_pair_index.get(&hash) {
            return Ok(existing_id);
        }

        let multiplicity = order.multiplicity() as u32;
        for (idx, atom_id) in [(idx1, a1), (idx2, a2)] {
            let atom = &self.atoms[idx];
            let projected = atom.expanded_neighbour_count(&self.bonds)
                + multiplicity
                + atom.implicit_hydrogen_count as u32;
            if projected > atom.valence_ceiling as u32 {
                return Err(MoleculeError::valence_violation(
                    self.id,
                    atom_id,
                    atom.valence_ceiling,
                    projected as u8,
                ));
            }
        }

        self.peak_bond_id += 1;
        let bond_id = self.peak_bond_id;
        self.bond_index.insert(bond_id, self.bonds.len());
        self.bond_pair_index.insert(hash, bond_id);
        self.bonds.push(Bond::new(bond_id, a1, a2, order));
        self.atoms[idx1].bonds.push(bond_id);
        self.atoms[idx2].bonds.push(bond_id);
        self.invalidate_ring_state();
        Ok(bond_id)
    }

    /// Breaks a bond, cascading destruction of every ring that contained it.
    pub fn break_bond(&mut self, bond_id: u64) -> Result<(), MoleculeError> {
        let idx = self.require_bond_index(bond_id)?;
        let bond = self.bonds[idx].clone();

        for atom_id in [bond.atom_ids.0, bond.atom_ids.1] {
            if let Some(&aidx) = self.atom_index.get(&atom_id) {
                self.atoms[aidx].bonds.retain(|&b| b != bond_id);
            }
        }

        self.swap_remove_bond(idx);
        self.bond_pair_index.remove(&bond.pair_hash);
        self.invalidate_ring_state();
        Ok(())
    }

    /// Removes an atom, first breaking every bond it participates in.
    pub fn remove_atom(&mut self, atom_id: u64) -> Result<(), MoleculeError> {
        let idx = self.require_atom_index(atom_id)?;
        let incident_bonds = self.atoms[idx].bonds.clone();
        for bond_id in incident_bonds {
            self.break_bond(bond_id)?;
        }
        let idx = self.require_atom_index(atom_id)?;
        self.swap_remove_atom(idx);
        self.invalidate_ring_state();
        Ok(())
    }

    /// Adds a named string attribute; fails if the name is already present.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), MoleculeError> {
        let name = name.into();
        let value = value.into();
        if name.is_empty() || value.is_empty() {
            return Err(MoleculeError::invalid_argument(
                self.id,
                "attribute name and value must both be non-empty",
            ));
        }
        if self.attributes.iter().any(|(n, _)| *n == name) {
            return Err(MoleculeError::duplicate_attribute(self.id, name));
        }
        self.attributes.push((name, value));
        Ok(())
    }

    pub fn attribute(&self, name: &str) -> Result<&str, MoleculeError> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| MoleculeError::invalid_argument(self.id, format!("unknown attribute '{name}'")))
    }

    pub fn update_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<(), MoleculeError> {
        let value = value.into();
        if value.is_empty() {
            return Err(MoleculeError::invalid_argument(self.id, "attribute value must be non-empty"));
        }
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => {
                entry.1 = value;
                Ok(())
            }
            None => Err(MoleculeError::invalid_argument(self.id, format!("unknown attribute '{name}'"))),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Result<(), MoleculeError> {
        let before = self.attributes.len();
        self.attributes.retain(|(n, _)| n != name);
        if self.attributes.len() == before {
            return Err(MoleculeError::invalid_argument(self.id, format!("unknown attribute '{name}'")));
        }
        Ok(())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    pub fn set_vendor_id(&mut self, vendor_id: impl Into<String>) {
        self.vendor_id = Some(vendor_id.into());
    }

    /// Seam used by an external reader (e.g. an SDF parser) to populate fields
    /// `add_atom` does not take as parameters: coordinates, charge, implicit
    /// hydrogen count, stereo/chirality/radical tags.
    pub fn atom_mut(&mut self, atom_id: u64) -> Option<&mut Atom> {
        self.atom_index.get(&atom_id).map(|&idx| &mut self.atoms[idx])
    }

    pub fn atom(&self, atom_id: u64) -> Option<&Atom> {
        self.atom_index.get(&atom_id).map(|&idx| &self.atoms[idx])
    }

    /// Lookup by normalised id; collapses to the same id-indexed map as
    /// [`Molecule::atom`] because normalised id is assigned identically to
    /// input-order id in this implementation (see DESIGN.md).
    pub fn atom_by_normalised_id(&self, normalised_id: u64) -> Option<&Atom> {
        self.atom(normalised_id)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bond(&self, bond_id: u64) -> Option<&Bond> {
        self.bond_index.get(&bond_id).map(|&idx| &self.bonds[idx])
    }

    pub fn bond_between(&self, a1: u64, a2: u64) -> Option<&Bond> {
        let hash = pair_hash(a1, a2);
        self.bond_pair_index.get(&hash).and_then(|&id| self.bond(id))
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ring(&self, ring_id: u64) -> Option<&Ring> {
        self.rings.iter().find(|r| r.id == ring_id)
    }

    pub fn ring_systems(&self) -> &[RingSystem] {
        &self.ring_systems
    }

    pub fn aromatic_ring_count(&self) -> usize {
        self.rings.iter().filter(|r| r.aromatic).count()
    }

    pub fn is_normalised(&self) -> bool {
        self.normalised
    }

    pub fn distance_between(&self, a: u64, b: u64) -> Option<u32> {
        self.distance_matrix.as_ref()?.distance_between(a, b)
    }

    pub fn shortest_path_between(&self, a: u64, b: u64) -> Option<Vec<u64>> {
        self.distance_matrix.as_ref()?.shortest_path_between(a, b)
    }

    /// π-electron contribution of `atom_id` within `ring_id`, `None` if either id
    /// is unknown or the atom is not a member of that ring.
    pub fn pi_electron_count(&self, ring_id: u64, atom_id: u64) -> Option<i32> {
        let ring = self.ring(ring_id)?;
        if !ring.atoms.contains(&atom_id) {
            return None;
        }
        Some(aromaticity::pi_electron_count(ring, atom_id, &self.atoms, &self.bonds))
    }

    /// Runs the full normalisation pipeline (§4.2). Idempotent: calling it twice
    /// in a row on an unmodified molecule yields equal ring and ring-system lists.
    pub fn normalise(&mut self) -> Result<(), MoleculeError> {
        for atom in &mut self.atoms {
            atom.normalised_id = Some(atom.input_id);
            atom.reset_ring_state();
        }
        for bond in &mut self.bonds {
            bond.reset_ring_state();
        }
        self.rings.clear();
        self.ring_systems.clear();

        let atom_ids: Vec<u64> = self.atoms.iter().map(|a| a.input_id).collect();
        let bond_pairs: Vec<(u64, u64)> = self.bonds.iter().map(|b| b.atom_ids).collect();
        let distance_matrix = DistanceMatrix::build(&atom_ids, &bond_pairs, self.peak_atom_id);

        let output = detector::detect(
            self.id,
            &self.atoms,
            &self.bonds,
            &distance_matrix,
            self.peak_atom_id,
            self.peak_bond_id,
            self.next_ring_id,
            self.next_ring_system_id,
        )?;
        self.distance_matrix = Some(distance_matrix);

        self.next_ring_id += output.rings.len() as u64;
        self.next_ring_system_id += output.ring_systems.len() as u64;
        self.rings = output.rings;
        self.ring_systems = output.ring_systems;

        for ring in &self.rings {
            for &atom_id in &ring.atoms {
                if let Some(&idx) = self.atom_index.get(&atom_id) {
                    self.atoms[idx].rings.push(ring.id);
                }
            }
            for &bond_id in &ring.bonds {
                if let Some(&idx) = self.bond_index.get(&bond_id) {
                    self.bonds[idx].rings.push(ring.id);
                }
            }
        }

        for ring in &mut self.rings {
            aromaticity::classify_ring(ring, &mut self.atoms, &mut self.bonds);
        }
        for system in &mut self.ring_systems {
            aromaticity::classify_ring_system(system, &self.rings);
        }

        let element_lookup: HashMap<u64, Element> =
            self.atoms.iter().map(|a| (a.input_id, a.element)).collect();
        for i in 0..self.atoms.len() {
            if self.atoms[i].in_aromatic_ring {
                self.atoms[i].hash = unsaturation::compute_hash(&self.atoms[i]);
                continue;
            }
            let tag = {
                let atom = &self.atoms[i];
                unsaturation::compute_unsaturation(
                    atom,
                    &self.bonds,
                    |id| element_lookup.get(&id).copied(),
                    self.id,
                )?
            };
            self.atoms[i].unsaturation = tag;
            self.atoms[i].hash = unsaturation::compute_hash(&self.atoms[i]);
        }

        aromaticity::mark_benzylic(&mut self.atoms, &self.bonds);
        aromaticity::mark_spiro(&mut self.atoms, &self.rings);
        aromaticity::mark_bridgeheads(&mut self.atoms, &self.rings);

        self.normalised = true;
        Ok(())
    }

    fn require_atom_index(&self, atom_id: u64) -> Result<usize, MoleculeError> {
        self.atom_index
            .get(&atom_id)
            .copied()
            .ok_or_else(|| MoleculeError::invalid_argument(self.id, format!("atom {atom_id} is not a member of this molecule")))
    }

    fn require_bond_index(&self, bond_id: u64) -> Result<usize, MoleculeError> {
        self.bond_index
            .get(&bond_id)
            .copied()
            .ok_or_else(|| MoleculeError::invalid_argument(self.id, format!("bond {bond_id} is not a member of this molecule")))
    }

    fn swap_remove_atom(&mut self, idx: usize) {
        let removed_id = self.atoms[idx].input_id;
        self.atoms.swap_remove(idx);
        self.atom_index.remove(&removed_id);
        if idx < self.atoms.len() {
            self.atom_index.insert(self.atoms[idx].input_id, idx);
        }
    }

    fn swap_remove_bond(&mut self, idx: usize) {
        let removed_id = self.bonds[idx].id;
        self.bonds.swap_remove(idx);
        self.bond_index.remove(&removed_id);
        if idx < self.bonds.len() {
            self.bond_index.insert(self.bonds[idx].id, idx);
        }
    }

    fn invalidate_ring_state(&mut self) {
        for atom in &mut self.atoms {
            atom.reset_ring_state();
        }
        for bond in &mut self.bonds {
            bond.reset_ring_state();
        }
        self.rings.clear();
        self.ring_systems.clear();
        self.normalised = false;
    }
}
