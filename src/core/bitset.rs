//! A dense, fixed-size bit-set over small integer ids, packed into `u64` words.
//!
//! Ring and bond-set membership tests run often enough during perception (basis
//! selection, ring-system grouping, spurious-ring pruning) that a `HashSet<usize>`
//! is the wrong tool: sets are small, dense, and compared for equality constantly.
//! This type mirrors the teacher's `perception::rings::BitVec`, generalized with the
//! set-algebra operations (`union`, `intersect`, `is_subset`) the ring detector and
//! ring-system grouping both need beyond plain `xor`/`test`.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense bit-set sized at construction to the number of atoms or bonds in a molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBitSet {
    words: Vec<u64>,
    size: usize,
}

impl DenseBitSet {
    /// Creates an empty set capable of holding ids in `0..size`.
    pub fn new(size: usize) -> Self {
        let word_count = size.div_ceil(WORD_BITS).max(1);
        DenseBitSet {
            words: vec![0u64; word_count],
            size,
        }
    }

    /// Creates a set containing exactly the given ids.
    pub fn from_ids(ids: impl IntoIterator<Item = usize>, size: usize) -> Self {
        let mut set = DenseBitSet::new(size);
        for id in ids {
            set.set(id);
        }
        set
    }

    /// Number of ids this set can address.
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Inserts `id` into the set.
    pub fn set(&mut self, id: usize) {
        debug_assert!(id < self.size, "id {id} out of range for set of size {}", self.size);
        self.words[id / WORD_BITS] |= 1u64 << (id % WORD_BITS);
    }

    /// Tests whether `id` is a member.
    pub fn test(&self, id: usize) -> bool {
        if id >= self.size {
            return false;
        }
        (self.words[id / WORD_BITS] >> (id % WORD_BITS)) & 1 == 1
    }

    /// Symmetric difference in place, `self ^= other`.
    pub fn xor_assign(&mut self, other: &DenseBitSet) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a ^= b;
        }
    }

    /// Union in place, `self |= other`.
    pub fn union_assign(&mut self, other: &DenseBitSet) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= b;
        }
    }

    /// Intersection cardinality, `|self ∩ other|`, without mutating either operand.
    pub fn intersection_count(&self, other: &DenseBitSet) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// `true` if `self` and `other` share no members.
    pub fn is_disjoint(&self, other: &DenseBitSet) -> bool {
        self.intersection_count(other) == 0
    }

    /// Returns a new set containing `self ∩ other`.
    pub fn intersection(&self, other: &DenseBitSet) -> DenseBitSet {
        let mut result = self.clone();
        for (a, b) in result.words.iter_mut().zip(other.words.iter()) {
            *a &= b;
        }
        result
    }

    /// `true` if every member of `self` is also a member of `other`.
    pub fn is_subset_of(&self, other: &DenseBitSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| (a & !b) == 0)
    }

    /// Number of members currently set.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// `true` if no id is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterates over the set's members in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&id| self.test(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_test_round_trip() {
        let mut set = DenseBitSet::new(10);
        set.set(3);
        set.set(9);
        assert!(set.test(3));
        assert!(set.test(9));
        assert!(!set.test(4));
    }

    #[test]
    fn xor_cancels_shared_members() {
        let a = DenseBitSet::from_ids([1, 2, 3], 8);
        let b = DenseBitSet::from_ids([2, 3, 4], 8);
        let mut result = a.clone();
        result.xor_assign(&b);
        assert_eq!(result.iter_ones().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn intersection_count_matches_shared_members() {
        let a = DenseBitSet::from_ids([0, 1, 2], 16);
        let b = DenseBitSet::from_ids([1, 2, 3], 16);
        assert_eq!(a.intersection_count(&b), 2);
        assert!(!a.is_disjoint(&b));
    }

    #[test]
    fn intersection_and_subset_checks() {
        let a = DenseBitSet::from_ids([0, 1, 2], 16);
        let b = DenseBitSet::from_ids([1, 2, 3], 16);
        let inter = a.intersection(&b);
        assert_eq!(inter.iter_ones().collect::<Vec<_>>(), vec![1, 2]);
        assert!(inter.is_subset_of(&a));
        assert!(inter.is_subset_of(&b));
        assert!(!a.is_subset_of(&b));
    }

    #[test]
    fn spans_multiple_words() {
        let mut set = DenseBitSet::new(200);
        set.set(130);
        set.set(199);
        assert!(set.test(130));
        assert!(set.test(199));
        assert_eq!(set.count_ones(), 2);
    }
}
