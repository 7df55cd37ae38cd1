//! Named-molecule fixtures for the five- and six-membered aromatic/non-aromatic
//! heterocycles called out by the worked examples: a single ring each, Kekulized
//! as alternating single/double bonds around the cycle.

use ring_perceiver::{BondOrder, Element};

use crate::harness::{AtomBlueprint, BondBlueprint, MoleculeTestCase};

const SINGLE: BondOrder = BondOrder::Single;
const DOUBLE: BondOrder = BondOrder::Double;

pub static BENZENE: MoleculeTestCase = MoleculeTestCase {
    name: "benzene",
    atoms: &[
        AtomBlueprint { label: "c1", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c2", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c3", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c6", element: Element::Carbon, implicit_h: 1, charge: 0 },
    ],
    bonds: &[
        BondBlueprint { atom1_label: "c1", atom2_label: "c2", order: DOUBLE },
        BondBlueprint { atom1_label: "c2", atom2_label: "c3", order: SINGLE },
        BondBlueprint { atom1_label: "c3", atom2_label: "c4", order: DOUBLE },
        BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: SINGLE },
        BondBlueprint { atom1_label: "c5", atom2_label: "c6", order: DOUBLE },
        BondBlueprint { atom1_label: "c6", atom2_label: "c1", order: SINGLE },
    ],
    expected_ring_count: 1,
    expected_ring_system_count: 1,
    expected_aromatic_ring_count: 1,
};

pub static PYRIDINE: MoleculeTestCase = MoleculeTestCase {
    name: "pyridine",
    atoms: &[
        AtomBlueprint { label: "n1", element: Element::Nitrogen, implicit_h: 0, charge: 0 },
        AtomBlueprint { label: "c2", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c3", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c6", element: Element::Carbon, implicit_h: 1, charge: 0 },
    ],
    bonds: &[
        BondBlueprint { atom1_label: "n1", atom2_label: "c2", order: DOUBLE },
        BondBlueprint { atom1_label: "c2", atom2_label: "c3", order: SINGLE },
        BondBlueprint { atom1_label: "c3", atom2_label: "c4", order: DOUBLE },
        BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: SINGLE },
        BondBlueprint { atom1_label: "c5", atom2_label: "c6", order: DOUBLE },
        BondBlueprint { atom1_label: "c6", atom2_label: "n1", order: SINGLE },
    ],
    expected_ring_count: 1,
    expected_ring_system_count: 1,
    expected_aromatic_ring_count: 1,
};

/// Builds a 5-membered X1-C2=C3-C4=C5 ring (the pyrrole/furan/thiophene shape): a
/// lone-pair-donor heteroatom flanked by two alternating C=C units.
macro_rules! lone_pair_donor_five_ring {
    ($name:ident, $case_name:literal, $element:expr) => {
        pub static $name: MoleculeTestCase = MoleculeTestCase {
            name: $case_name,
            atoms: &[
                AtomBlueprint { label: "x1", element: $element, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c2", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c3", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
            ],
            bonds: &[
                BondBlueprint { atom1_label: "x1", atom2_label: "c2", order: SINGLE },
                BondBlueprint { atom1_label: "c2", atom2_label: "c3", order: DOUBLE },
                BondBlueprint { atom1_label: "c3", atom2_label: "c4", order: SINGLE },
                BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: DOUBLE },
                BondBlueprint { atom1_label: "c5", atom2_label: "x1", order: SINGLE },
            ],
            expected_ring_count: 1,
            expected_ring_system_count: 1,
            expected_aromatic_ring_count: 1,
        };
    };
}

lone_pair_donor_five_ring!(PYRROLE, "pyrrole", Element::Nitrogen);
lone_pair_donor_five_ring!(FURAN, "furan", Element::Oxygen);
lone_pair_donor_five_ring!(THIOPHENE, "thiophene", Element::Sulfur);

pub static CYCLOPENTADIENE: MoleculeTestCase = MoleculeTestCase {
    name: "cyclopentadiene",
    atoms: &[
        AtomBlueprint { label: "c1", element: Element::Carbon, implicit_h: 2, charge: 0 },
        AtomBlueprint { label: "c2", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c3", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
    ],
    bonds: &[
        BondBlueprint { atom1_label: "c1", atom2_label: "c2", order: SINGLE },
        BondBlueprint { atom1_label: "c2", atom2_label: "c3", order: DOUBLE },
        BondBlueprint { atom1_label: "c3", atom2_label: "c4", order: SINGLE },
        BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: DOUBLE },
        BondBlueprint { atom1_label: "c5", atom2_label: "c1", order: SINGLE },
    ],
    expected_ring_count: 1,
    expected_ring_system_count: 1,
    expected_aromatic_ring_count: 0,
};

pub static CYCLOPENTADIENYL_ANION: MoleculeTestCase = MoleculeTestCase {
    name: "cyclopentadienyl_anion",
    atoms: &[
        AtomBlueprint { label: "c1", element: Element::Carbon, implicit_h: 1, charge: -1 },
        AtomBlueprint { label: "c2", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c3", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
        AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
    ],
    bonds: &[
        BondBlueprint { atom1_label: "c1", atom2_label: "c2", order: SINGLE },
        BondBlueprint { atom1_label: "c2", atom2_label: "c3", order: DOUBLE },
        BondBlueprint { atom1_label: "c3", atom2_label: "c4", order: SINGLE },
        BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: DOUBLE },
        BondBlueprint { atom1_label: "c5", atom2_label: "c1", order: SINGLE },
    ],
    expected_ring_count: 1,
    expected_ring_system_count: 1,
    expected_aromatic_ring_count: 1,
};

/// Builds a 5-membered X1-Y2=C3-C4=C5 ring where `x1` is a lone-pair donor and
/// `y2` is a pyridine-type heteroatom (the oxazole/thiazole shape: 1,3-relationship).
macro_rules! one_three_diheteroatom_five_ring {
    ($name:ident, $case_name:literal, $x_element:expr, $x_implicit_h:expr) => {
        pub static $name: MoleculeTestCase = MoleculeTestCase {
            name: $case_name,
            atoms: &[
                AtomBlueprint { label: "x1", element: $x_element, implicit_h: $x_implicit_h, charge: 0 },
                AtomBlueprint { label: "c2", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "n3", element: Element::Nitrogen, implicit_h: 0, charge: 0 },
                AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
            ],
            bonds: &[
                BondBlueprint { atom1_label: "x1", atom2_label: "c2", order: SINGLE },
                BondBlueprint { atom1_label: "c2", atom2_label: "n3", order: DOUBLE },
                BondBlueprint { atom1_label: "n3", atom2_label: "c4", order: SINGLE },
                BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: DOUBLE },
                BondBlueprint { atom1_label: "c5", atom2_label: "x1", order: SINGLE },
            ],
            expected_ring_count: 1,
            expected_ring_system_count: 1,
            expected_aromatic_ring_count: 1,
        };
    };
}

one_three_diheteroatom_five_ring!(OXAZOLE, "oxazole", Element::Oxygen, 0);
one_three_diheteroatom_five_ring!(THIAZOLE, "thiazole", Element::Sulfur, 0);
one_three_diheteroatom_five_ring!(IMIDAZOLE, "imidazole", Element::Nitrogen, 1);

/// Builds a 5-membered X1-Y2=C3-C4=C5 ring where `x1` and `y2` are adjacent
/// heteroatoms (the pyrazole/isoxazole/isothiazole shape: 1,2-relationship).
macro_rules! one_two_diheteroatom_five_ring {
    ($name:ident, $case_name:literal, $x_element:expr, $x_implicit_h:expr, $y_element:expr) => {
        pub static $name: MoleculeTestCase = MoleculeTestCase {
            name: $case_name,
            atoms: &[
                AtomBlueprint { label: "x1", element: $x_element, implicit_h: $x_implicit_h, charge: 0 },
                AtomBlueprint { label: "y2", element: $y_element, implicit_h: 0, charge: 0 },
                AtomBlueprint { label: "c3", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c4", element: Element::Carbon, implicit_h: 1, charge: 0 },
                AtomBlueprint { label: "c5", element: Element::Carbon, implicit_h: 1, charge: 0 },
            ],
            bonds: &[
                BondBlueprint { atom1_label: "x1", atom2_label: "y2", order: SINGLE },
                BondBlueprint { atom1_label: "y2", atom2_label: "c3", order: DOUBLE },
                BondBlueprint { atom1_label: "c3", atom2_label: "c4", order: SINGLE },
                BondBlueprint { atom1_label: "c4", atom2_label: "c5", order: DOUBLE },
                BondBlueprint { atom1_label: "c5", atom2_label: "x1", order: SINGLE },
            ],
            expected_ring_count: 1,
            expected_ring_system_count: 1,
            expected_aromatic_ring_count: 1,
        };
    };
}

one_two_diheteroatom_five_ring!(PYRAZOLE, "pyrazole", Element::Nitrogen, 1, Element::Nitrogen);
one_two_diheteroatom_five_ring!(ISOXAZOLE, "isoxazole", Element::Oxygen, 0, Element::Nitrogen);
one_two_diheteroatom_five_ring!(ISOTHIAZOLE, "isothiazole", Element::Sulfur, 0, Element::Nitrogen);
