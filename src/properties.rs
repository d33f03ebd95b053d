//! Atom- and bond-level descriptors: heteroatoms, hydrogen-bond donors and
//! acceptors, rotatable bonds.

use crate::bond::BondOrder;
use crate::element::Element;
use crate::mol::Molecule;
use crate::rings::RingInfo;

/// Atoms that are neither carbon nor hydrogen.
pub fn heteroatom_count(mol: &Molecule) -> usize {
    mol.atoms().filter(|&i| mol.atom(i).is_heteroatom()).count()
}

/// Hydrogen-bond donors: N or O atoms carrying at least one hydrogen.
pub fn hbd_count(mol: &Molecule) -> usize {
    mol.atoms()
        .filter(|&i| {
            let a = mol.atom(i);
            matches!(a.element, Element::N | Element::O) && a.hydrogen_count > 0
        })
        .count()
}

/// Hydrogen-bond acceptors: all N and O atoms.
pub fn hba_count(mol: &Molecule) -> usize {
    mol.atoms()
        .filter(|&i| matches!(mol.atom(i).element, Element::N | Element::O))
        .count()
}

/// Rotatable bonds: non-ring single bonds whose endpoints both have
/// heavy-atom degree ≥ 2. Aromatic bonds never count.
pub fn rotatable_bond_count(mol: &Molecule, rings: &RingInfo) -> usize {
    mol.bonds()
        .filter(|&e| {
            if mol.bond(e).order != BondOrder::Single {
                return false;
            }
            let (a, b) = match mol.bond_endpoints(e) {
                Some(pair) => pair,
                None => return false,
            };
            if rings.is_ring_bond(a, b) {
                return false;
            }
            mol.degree(a) >= 2 && mol.degree(b) >= 2
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn counts(s: &str) -> (usize, usize, usize, usize) {
        let mol = parse_smiles(s).unwrap();
        let rings = RingInfo::find(&mol);
        (
            heteroatom_count(&mol),
            hbd_count(&mol),
            hba_count(&mol),
            rotatable_bond_count(&mol, &rings),
        )
    }

    #[test]
    fn ethanol() {
        let (hetero, hbd, hba, rot) = counts("CCO");
        assert_eq!(hetero, 1);
        assert_eq!(hbd, 1);
        assert_eq!(hba, 1);
        assert_eq!(rot, 0);
    }

    #[test]
    fn butane_one_rotatable() {
        let (_, _, _, rot) = counts("CCCC");
        assert_eq!(rot, 1);
    }

    #[test]
    fn palmitic_acid() {
        let (hetero, hbd, hba, rot) = counts("O=C(O)CCCCCCCCCCCCCCC");
        assert_eq!(hetero, 2);
        assert_eq!(hbd, 1);
        assert_eq!(hba, 2);
        assert_eq!(rot, 14);
    }

    #[test]
    fn aspirin() {
        let (hetero, hbd, hba, rot) = counts("CC(=O)OC1=CC=CC=C1C(=O)O");
        assert_eq!(hetero, 4);
        assert_eq!(hbd, 1);
        assert_eq!(hba, 4);
        assert_eq!(rot, 3);
    }

    #[test]
    fn caffeine_no_rotatable() {
        // All substituents are terminal methyls.
        let (hetero, hbd, hba, rot) = counts("Cn1cnc2c1c(=O)n(C)c(=O)n2C");
        assert_eq!(hetero, 6);
        assert_eq!(hbd, 0);
        assert_eq!(hba, 6);
        assert_eq!(rot, 0);
    }

    #[test]
    fn ring_bonds_never_rotatable() {
        let (_, _, _, rot) = counts("C1CCCCC1");
        assert_eq!(rot, 0);
    }

    #[test]
    fn biphenyl_pivot_rotatable() {
        let (_, _, _, rot) = counts("c1ccccc1-c1ccccc1");
        assert_eq!(rot, 1);
    }

    #[test]
    fn double_bonds_not_rotatable() {
        let (_, _, _, rot) = counts("CC=CC");
        assert_eq!(rot, 0);
    }

    #[test]
    fn halogens_are_heteroatoms_not_acceptors() {
        let (hetero, hbd, hba, _) = counts("ClCCl");
        assert_eq!(hetero, 2);
        assert_eq!(hbd, 0);
        assert_eq!(hba, 0);
    }
}
