//! Ring detector: the algorithmic heart of ring perception.
//!
//! Runs the eight stages described for molecule normalisation: terminal-chain
//! pruning, candidate path enumeration, deduplication, validity checking, size
//! sorting, ring-system grouping, basis selection, and spurious-ring pruning. The
//! detector never panics on degenerate input (disconnected graph, Frèrejacque over
//! the cap) — it logs and returns an empty result, matching the "skip, don't fail"
//! policy for detector-internal anomalies on non-fatal malformed input.

use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::core::{DenseBitSet, MoleculeError};
use crate::distance::DistanceMatrix;
use crate::graph::{Atom, Bond};
use crate::ring::{Ring, RingSystem};

/// Upper bound on the Frèrejacque number (`|E| - |V| + 1`) above which the ring
/// phase is skipped as pathological input, per the normalisation pipeline's design.
pub struct RingDetector;

impl RingDetector {
    pub const DEFAULT_MAX_FREREJACQUE: i64 = 15;
}

/// The rings and ring-systems produced by one detection run.
pub(crate) struct DetectionOutput {
    pub rings: Vec<Ring>,
    pub ring_systems: Vec<RingSystem>,
}

/// One simple-cycle candidate before it has been frozen into a [`Ring`].
struct RingCandidate {
    atoms: Vec<u64>,
    bonds: Vec<u64>,
    atom_bitset: DenseBitSet,
    bond_bitset: DenseBitSet,
}

impl RingCandidate {
    fn new(atoms: Vec<u64>, bonds: Vec<u64>, atom_capacity: usize, bond_capacity: usize) -> Self {
        let atom_bitset = DenseBitSet::from_ids(atoms.iter().map(|&a| a as usize), atom_capacity);
        let bond_bitset = DenseBitSet::from_ids(bonds.iter().map(|&b| b as usize), bond_capacity);
        RingCandidate {
            atoms,
            bonds,
            atom_bitset,
            bond_bitset,
        }
    }

    fn size(&self) -> usize {
        self.atoms.len()
    }
}

/// A system of candidates under construction during grouping/basis/pruning. Wraps a
/// `RingSystem` so the grouping test and bitset aggregation reuse the same
/// shared-bond/shared-atom logic the final, ring-backed `RingSystem` uses (see
/// `RingSystem::overlaps_bonds`/`overlaps_atoms`/`union_bitsets`).
struct SystemBuilder {
    members: Vec<usize>,
    system: RingSystem,
    basis_len: usize,
}

/// Runs ring detection over a normalised molecule's current atoms and bonds.
#[allow(clippy::too_many_arguments)]
pub(crate) fn detect(
    molecule_id: u64,
    atoms: &[Atom],
    bonds: &[Bond],
    distance_matrix: &DistanceMatrix,
    peak_atom_id: u64,
    peak_bond_id: u64,
    mut next_ring_id: u64,
    mut next_ring_system_id: u64,
) -> Result<DetectionOutput, MoleculeError> {
    let atom_count = atoms.len() as i64;
    let bond_count = bonds.len() as i64;
    let frerejacque = bond_count - atom_count + 1;

    if frerejacque <= 0 {
        log::debug!(
            "molecule {molecule_id}: Frèrejacque number {frerejacque} <= 0, skipping ring phase (tree/forest)"
        );
        return Ok(DetectionOutput {
            rings: Vec::new(),
            ring_systems: Vec::new(),
        });
    }
    if frerejacque > RingDetector::DEFAULT_MAX_FREREJACQUE {
        log::warn!(
            "molecule {molecule_id}: Frèrejacque number {frerejacque} exceeds cap {}, skipping ring phase",
            RingDetector::DEFAULT_MAX_FREREJACQUE
        );
        return Ok(DetectionOutput {
            rings: Vec::new(),
            ring_systems: Vec::new(),
        });
    }

    let atom_capacity = (peak_atom_id + 1) as usize;
    let bond_capacity = (peak_bond_id + 1) as usize;

    let bond_pairs: Vec<(u64, u64)> = bonds.iter().map(|b| b.atom_ids).collect();
    let mut bond_id_by_pair: BTreeMap<u64, u64> = BTreeMap::new();
    for bond in bonds {
        bond_id_by_pair.insert(bond.pair_hash, bond.id);
    }
    let bond_id_for = |a: u64, b: u64| -> Option<u64> {
        bond_id_by_pair.get(&crate::graph::pair_hash(a, b)).copied()
    };

    let atom_ids: Vec<u64> = atoms.iter().map(|a| a.input_id).collect();
    let adjacency = prune_terminal_chains(&atom_ids, &bond_pairs);

    if adjacency.is_empty() {
        log::debug!("molecule {molecule_id}: no surviving core after terminal-chain pruning");
        return Ok(DetectionOutput {
            rings: Vec::new(),
            ring_systems: Vec::new(),
        });
    }

    let mut candidates: Vec<RingCandidate> = Vec::new();

    if adjacency.values().all(|neighbours| neighbours.len() == 2) {
        let cycle_atoms = walk_single_cycle(&adjacency);
        let cycle_bonds = close_bond_cycle(&cycle_atoms, &bond_id_for, molecule_id)?;
        candidates.push(RingCandidate::new(
            cycle_atoms,
            cycle_bonds,
            atom_capacity,
            bond_capacity,
        ));
    } else {
        let seed = adjacency
            .iter()
            .find(|(_, neighbours)| neighbours.len() == 2)
            .map(|(&id, _)| id)
            .unwrap_or_else(|| *adjacency.keys().next().unwrap());

        let raw_cycles = enumerate_cycle_candidates(seed, &adjacency);
        let mut seen_bond_sets: HashSet<Vec<u64>> = HashSet::new();

        for cycle_atoms in raw_cycles {
            if cycle_atoms.len() > 3 && !is_valid_candidate(&cycle_atoms, &adjacency) {
                continue;
            }
            let cycle_bonds = close_bond_cycle(&cycle_atoms, &bond_id_for, molecule_id)?;
            let mut sorted_bonds = cycle_bonds.clone();
            sorted_bonds.sort_unstable();
            if !seen_bond_sets.insert(sorted_bonds) {
                continue;
            }
            candidates.push(RingCandidate::new(
                cycle_atoms,
                cycle_bonds,
                atom_capacity,
                bond_capacity,
            ));
        }
    }

    candidates.sort_by_key(|c| c.size());

    let mut systems: Vec<SystemBuilder> = Vec::new();
    for (idx, candidate) in candidates.iter().enumerate() {
        let joined = systems.iter().position(|system| {
            system.system.overlaps_bonds(&candidate.bond_bitset)
                || system.system.overlaps_atoms(&candidate.atom_bitset)
        });
        match joined {
            Some(si) => {
                systems[si].members.push(idx);
                systems[si]
                    .system
                    .union_bitsets(&candidate.atom_bitset, &candidate.bond_bitset);
            }
            None => {
                let mut system = RingSystem::new(0, atom_capacity, bond_capacity);
                system.union_bitsets(&candidate.atom_bitset, &candidate.bond_bitset);
                systems.push(SystemBuilder {
                    members: vec![idx],
                    system,
                    basis_len: 0,
                });
            }
        }
    }

    for system in &mut systems {
        let mut running = DenseBitSet::new(bond_capacity);
        let mut basis_len = system.members.len();
        let mut prev_size: Option<usize> = None;
        for (i, &idx) in system.members.iter().enumerate() {
            let candidate = &candidates[idx];
            if let Some(prev) = prev_size {
                if candidate.size() > prev && running == system.system.bond_bitset {
                    basis_len = i;
                    break;
                }
            }
            running.union_assign(&candidate.bond_bitset);
            prev_size = Some(candidate.size());
        }
        system.basis_len = basis_len;
    }

    let mut pruned: HashSet<usize> = HashSet::new();
    let mut final_members: Vec<Vec<usize>> = Vec::with_capacity(systems.len());

    for system in &systems {
        let mut basis: Vec<usize> = system.members[..system.basis_len].to_vec();
        let beyond = &system.members[system.basis_len..];

        for &r_idx in beyond {
            let r = &candidates[r_idx];
            let mut decided = false;

            'pairs: for i in 0..basis.len() {
                for j in (i + 1)..basis.len() {
                    let ri = &candidates[basis[i]];
                    let rj = &candidates[basis[j]];
                    // r qualifies only if it equals the true GF(2) symmetric difference of
                    // Ri and Rj, not their union — when Ri and Rj share a bond (e.g. a
                    // one-atom bridge in a bridged bicyclic graph), union and symmetric
                    // difference disagree and only the latter matches spec.md:83.
                    let mut diff = ri.bond_bitset.clone();
                    diff.xor_assign(&rj.bond_bitset);
                    diff.xor_assign(&r.bond_bitset);
                    if !diff.is_empty() {
                        continue;
                    }

                    let shared_atoms = ri.atom_bitset.intersection(&rj.atom_bitset).intersection(&r.atom_bitset);
                    if shared_atoms.count_ones() > 2 {
                        continue;
                    }

                    let junctions: Vec<u64> = r
                        .atoms
                        .iter()
                        .copied()
                        .filter(|&atom_id| {
                            !shared_atoms.test(atom_id as usize)
                                && adjacency
                                    .get(&atom_id)
                                    .map(|n| n.len())
                                    .unwrap_or(0)
                                    >= 3
                        })
                        .collect();

                    let retain = match junctions.len() {
                        0 | 1 => true,
                        2 => {
                            let in_ring = shorter_arc(&r.atoms, junctions[0], junctions[1])
                                .unwrap_or(usize::MAX);
                            match distance_matrix.distance_between(junctions[0], junctions[1]) {
                                Some(graph_distance) => (graph_distance as usize) >= in_ring,
                                None => true,
                            }
                        }
                        _ => {
                            let mut any_shorter = false;
                            for a in 0..junctions.len() {
                                for b in (a + 1)..junctions.len() {
                                    let in_ring =
                                        shorter_arc(&r.atoms, junctions[a], junctions[b])
                                            .unwrap_or(usize::MAX);
                                    if let Some(graph_distance) =
                                        distance_matrix.distance_between(junctions[a], junctions[b])
                                    {
                                        if (graph_distance as usize) < in_ring {
                                            any_shorter = true;
                                        }
                                    }
                                }
                            }
                            !any_shorter
                        }
                    };

                    if retain {
                        basis.push(r_idx);
                    } else {
                        pruned.insert(r_idx);
                    }
                    decided = true;
                    break 'pairs;
                }
            }

            if !decided {
                let mut shared_union = DenseBitSet::new(bond_capacity);
                for &b_idx in &basis {
                    shared_union.union_assign(&candidates[b_idx].bond_bitset);
                }
                if r.bond_bitset.is_subset_of(&shared_union) {
                    pruned.insert(r_idx);
                } else {
                    basis.push(r_idx);
                }
            }
        }

        final_members.push(basis);
    }

    let mut rings = Vec::new();
    let mut ring_systems = Vec::new();

    for members in final_members {
        if members.is_empty() {
            continue;
        }
        let system_id = next_ring_system_id;
        next_ring_system_id += 1;
        let mut ring_system = RingSystem::new(system_id, atom_capacity, bond_capacity);

        for idx in members {
            if pruned.contains(&idx) {
                continue;
            }
            let candidate = &candidates[idx];
            let ring_id = next_ring_id;
            next_ring_id += 1;
            let mut ring = Ring::complete(
                ring_id,
                candidate.atoms.clone(),
                candidate.bonds.clone(),
                atom_capacity,
                bond_capacity,
                molecule_id,
            )?;
            ring.ring_system_id = Some(system_id);
            ring_system.admit(&ring);
            rings.push(ring);
        }

        ring_systems.push(ring_system);
    }

    Ok(DetectionOutput {
        rings,
        ring_systems,
    })
}

/// Repeatedly removes degree-1 atoms until every surviving atom has degree >= 2.
fn prune_terminal_chains(
    atom_ids: &[u64],
    bonds: &[(u64, u64)],
) -> BTreeMap<u64, Vec<u64>> {
    let mut adjacency: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for &id in atom_ids {
        adjacency.insert(id, Vec::new());
    }
    for &(a, b) in bonds {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut queue: VecDeque<u64> = adjacency
        .iter()
        .filter(|(_, n)| n.len() == 1)
        .map(|(&id, _)| id)
        .collect();
    let mut removed: HashSet<u64> = HashSet::new();

    while let Some(id) = queue.pop_front() {
        if removed.contains(&id) {
            continue;
        }
        let neighbours = adjacency.remove(&id).unwrap_or_default();
        removed.insert(id);
        for neighbour in neighbours {
            if let Some(list) = adjacency.get_mut(&neighbour) {
                list.retain(|&x| x != id);
                if list.len() == 1 {
                    queue.push_back(neighbour);
                }
            }
        }
    }

    adjacency.retain(|_, n| !n.is_empty());
    adjacency
}

/// Walks the unique cycle of a graph where every surviving atom has degree exactly 2.
fn walk_single_cycle(adjacency: &BTreeMap<u64, Vec<u64>>) -> Vec<u64> {
    let start = *adjacency.keys().next().unwrap();
    let mut cycle = vec![start];
    let mut previous = start;
    let mut current = adjacency[&start][0];
    while current != start {
        cycle.push(current);
        let neighbours = &adjacency[&current];
        let next = if neighbours[0] == previous {
            neighbours[1]
        } else {
            neighbours[0]
        };
        previous = current;
        current = next;
    }
    cycle
}

/// Enumerates raw (unvalidated, undeduplicated) cycle candidates by extending
/// partial paths from `seed`, closing whenever a neighbour revisits a path atom.
fn enumerate_cycle_candidates(
    seed: u64,
    adjacency: &BTreeMap<u64, Vec<u64>>,
) -> Vec<Vec<u64>> {
    let mut queue: VecDeque<Vec<u64>> = VecDeque::new();
    queue.push_back(vec![seed]);
    let mut closures = Vec::new();
    let max_len = adjacency.len();

    while let Some(path) = queue.pop_front() {
        let tail = *path.last().unwrap();
        let predecessor = if path.len() >= 2 {
            Some(path[path.len() - 2])
        } else {
            None
        };

        for &neighbour in &adjacency[&tail] {
            if Some(neighbour) == predecessor {
                continue;
            }
            if path.len() >= 3 && neighbour == path[0] {
                closures.push(path.clone());
                continue;
            }
            if let Some(pos) = path.iter().position(|&a| a == neighbour) {
                if pos > 0 {
                    closures.push(path[pos..].to_vec());
                }
                continue;
            }
            if path.len() < max_len {
                let mut extended = path.clone();
                extended.push(neighbour);
                queue.push_back(extended);
            }
        }
    }

    closures
}

/// Validity test (d): no junction atom on the path may have more than two
/// pruned-graph neighbours that also lie on the path.
fn is_valid_candidate(path: &[u64], adjacency: &BTreeMap<u64, Vec<u64>>) -> bool {
    let on_path: HashSet<u64> = path.iter().copied().collect();
    for &atom_id in path {
        let neighbours = &adjacency[&atom_id];
        if neighbours.len() >= 3 {
            let in_path = neighbours.iter().filter(|n| on_path.contains(n)).count();
            if in_path > 2 {
                return false;
            }
        }
    }
    true
}

/// Resolves the bond id for every consecutive pair of a cyclic atom sequence,
/// including the wrap-around edge.
fn close_bond_cycle(
    atoms: &[u64],
    bond_id_for: &impl Fn(u64, u64) -> Option<u64>,
    molecule_id: u64,
) -> Result<Vec<u64>, MoleculeError> {
    let n = atoms.len();
    let mut bonds = Vec::with_capacity(n);
    for i in 0..n {
        let a = atoms[i];
        let b = atoms[(i + 1) % n];
        match bond_id_for(a, b) {
            Some(bond_id) => bonds.push(bond_id),
            None => {
                return Err(MoleculeError::state_inconsistency(
                    molecule_id,
                    format!("candidate ring contains atom pair ({a}, {b}) with no bond between them"),
                ));
            }
        }
    }
    Ok(bonds)
}

/// The shorter of the two arc lengths, in edges, between two atoms on a cyclic
/// atom sequence.
fn shorter_arc(atoms: &[u64], a: u64, b: u64) -> Option<usize> {
    let n = atoms.len();
    let pos_a = atoms.iter().position(|&x| x == a)?;
    let pos_b = atoms.iter().position(|&x| x == b)?;
    if pos_a == pos_b {
        return Some(0);
    }
    let forward = pos_a.abs_diff(pos_b);
    Some(forward.min(n - forward))
}
