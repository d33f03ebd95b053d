use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::element::Element;
use crate::mol::Molecule;
use crate::rings::RingInfo;

/// Simplified Hückel flag per ring, in [`RingInfo`] order.
///
/// A ring is aromatic when every atom contributes to a planar π system and
/// the contributions sum to 4n+2. Both notations are handled: lowercase
/// aromatic-typed atoms and Kekulé rings with alternating double bonds.
pub fn aromatic_ring_flags(mol: &Molecule, rings: &RingInfo) -> Vec<bool> {
    rings
        .rings()
        .iter()
        .map(|ring| is_aromatic_ring(mol, ring))
        .collect()
}

pub fn aromatic_ring_count(mol: &Molecule, rings: &RingInfo) -> usize {
    aromatic_ring_flags(mol, rings)
        .into_iter()
        .filter(|&f| f)
        .count()
}

fn is_aromatic_ring(mol: &Molecule, ring: &[NodeIndex]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        if let Some(edge) = mol.bond_between(a, b) {
            if mol.bond(edge).order == BondOrder::Triple {
                return false;
            }
        }
    }

    let mut pi_total: u8 = 0;
    for (i, &atom_idx) in ring.iter().enumerate() {
        match pi_electrons(mol, atom_idx, ring, i) {
            Some(e) => pi_total = pi_total.saturating_add(e),
            None => return false,
        }
    }

    is_huckel(pi_total)
}

/// π-electron contribution of one ring atom, `None` when the atom cannot
/// take part in an aromatic system (sp3 carbon, quaternary nitrogen, …).
fn pi_electrons(
    mol: &Molecule,
    atom_idx: NodeIndex,
    ring: &[NodeIndex],
    pos_in_ring: usize,
) -> Option<u8> {
    let atom = mol.atom(atom_idx);
    let charge = atom.formal_charge;

    let in_ring_double = has_double_to_ring_neighbor(mol, atom_idx, ring, pos_in_ring);
    let exo_double = !in_ring_double && has_any_double_bond(mol, atom_idx);

    let total_degree = mol.degree(atom_idx) as u8 + atom.hydrogen_count;

    match atom.element {
        Element::C => match charge {
            0 => {
                if in_ring_double {
                    Some(1)
                } else if exo_double {
                    // Carbonyl carbon in the ring: sp2, but both π electrons
                    // live on the exocyclic double bond.
                    Some(0)
                } else if atom.is_aromatic {
                    Some(1)
                } else {
                    None
                }
            }
            -1 => Some(2),
            1 => {
                if in_ring_double {
                    Some(1)
                } else {
                    Some(0)
                }
            }
            _ => None,
        },
        Element::N | Element::P | Element::As => match charge {
            0 => {
                if in_ring_double || exo_double {
                    Some(1)
                } else if total_degree >= 3 {
                    // Pyrrole-type: lone pair in the π system.
                    Some(2)
                } else if atom.is_aromatic {
                    // Pyridine-type written lowercase.
                    Some(1)
                } else {
                    None
                }
            }
            1 => {
                if in_ring_double {
                    Some(1)
                } else {
                    None
                }
            }
            _ => None,
        },
        Element::O | Element::S | Element::Se | Element::Te => {
            if in_ring_double {
                Some(1)
            } else {
                Some(2)
            }
        }
        Element::B => {
            if in_ring_double {
                Some(1)
            } else {
                Some(0)
            }
        }
        _ => None,
    }
}

fn has_any_double_bond(mol: &Molecule, atom_idx: NodeIndex) -> bool {
    mol.bonds_of(atom_idx)
        .any(|e| mol.bond(e).order == BondOrder::Double)
}

fn has_double_to_ring_neighbor(
    mol: &Molecule,
    atom_idx: NodeIndex,
    ring: &[NodeIndex],
    pos_in_ring: usize,
) -> bool {
    let len = ring.len();
    let prev = ring[(pos_in_ring + len - 1) % len];
    let next = ring[(pos_in_ring + 1) % len];

    for neighbor in [prev, next] {
        if let Some(edge) = mol.bond_between(atom_idx, neighbor) {
            if mol.bond(edge).order == BondOrder::Double {
                return true;
            }
        }
    }
    false
}

fn is_huckel(pi_electrons: u8) -> bool {
    if pi_electrons < 2 {
        return false;
    }
    (pi_electrons - 2) % 4 == 0
}
