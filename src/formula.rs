//! Molecular formula and molecular weight.
//!
//! [`molecular_formula`] produces a Hill system string and
//! [`molecular_weight`] the average molecular weight in daltons.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::element::Element;
use crate::mol::Molecule;

/// Average molecular weight in daltons (Da), using standard atomic weights
/// over natural isotopic abundance. Implicit hydrogens are included.
pub fn molecular_weight(mol: &Molecule) -> f64 {
    let h_weight = Element::H.atomic_weight();
    mol.atoms().fold(0.0, |acc, idx| {
        let a = mol.atom(idx);
        acc + a.element.atomic_weight() + f64::from(a.hydrogen_count) * h_weight
    })
}

/// Molecular formula as a Hill system string.
///
/// C first, then H, then remaining elements alphabetically; molecules
/// without carbon list all elements alphabetically. A count of exactly 1
/// never gets a suffix. Net charge is appended as `+`, `2+`, `-`, `2-`.
pub fn molecular_formula(mol: &Molecule) -> String {
    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut net_charge: i32 = 0;

    for idx in mol.atoms() {
        let a = mol.atom(idx);
        *counts.entry(a.element.symbol()).or_default() += 1;
        let hc = u32::from(a.hydrogen_count);
        if hc > 0 {
            *counts.entry("H").or_default() += hc;
        }
        net_charge += i32::from(a.formal_charge);
    }

    let mut result = String::new();

    if let Some(c) = counts.remove("C") {
        append_element(&mut result, "C", c);
        if let Some(h) = counts.remove("H") {
            append_element(&mut result, "H", h);
        }
    }

    for (sym, count) in &counts {
        append_element(&mut result, sym, *count);
    }

    match net_charge.cmp(&0) {
        std::cmp::Ordering::Greater => {
            if net_charge > 1 {
                let _ = write!(result, "{net_charge}+");
            } else {
                result.push('+');
            }
        }
        std::cmp::Ordering::Less => {
            if net_charge < -1 {
                let _ = write!(result, "{}-", net_charge.unsigned_abs());
            } else {
                result.push('-');
            }
        }
        std::cmp::Ordering::Equal => {}
    }

    result
}

fn append_element(buf: &mut String, symbol: &str, count: u32) {
    buf.push_str(symbol);
    if count > 1 {
        let _ = write!(buf, "{count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    #[test]
    fn methane() {
        let mol = parse_smiles("C").unwrap();
        assert_eq!(molecular_formula(&mol), "CH4");
        assert_approx(molecular_weight(&mol), 16.043, 0.01);
    }

    #[test]
    fn water() {
        let mol = parse_smiles("O").unwrap();
        assert_eq!(molecular_formula(&mol), "H2O");
        assert_approx(molecular_weight(&mol), 18.015, 0.01);
    }

    #[test]
    fn benzene() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(molecular_formula(&mol), "C6H6");
        assert_approx(molecular_weight(&mol), 78.112, 0.01);
    }

    #[test]
    fn ethanol() {
        let mol = parse_smiles("CCO").unwrap();
        assert_eq!(molecular_formula(&mol), "C2H6O");
        assert_approx(molecular_weight(&mol), 46.069, 0.01);
    }

    #[test]
    fn aspirin() {
        let mol = parse_smiles("CC(=O)OC1=CC=CC=C1C(=O)O").unwrap();
        assert_eq!(molecular_formula(&mol), "C9H8O4");
        assert_approx(molecular_weight(&mol), 180.159, 0.01);
    }

    #[test]
    fn no_count_suffix_of_one() {
        // Single O and single N must appear without a "1".
        let mol = parse_smiles("CN").unwrap();
        assert_eq!(molecular_formula(&mol), "CH5N");
        let mol = parse_smiles("CO").unwrap();
        assert_eq!(molecular_formula(&mol), "CH4O");
    }

    #[test]
    fn no_carbon_alphabetical() {
        let mol = parse_smiles("[Na+].[Cl-]").unwrap();
        assert_eq!(molecular_formula(&mol), "ClNa");
    }

    #[test]
    fn charge_suffixes() {
        let mol = parse_smiles("[NH4+]").unwrap();
        assert_eq!(molecular_formula(&mol), "H4N+");
        let mol = parse_smiles("[O-2]").unwrap();
        assert_eq!(molecular_formula(&mol), "O2-");
    }

    #[test]
    fn bare_metal() {
        let mol = parse_smiles("[Fe]").unwrap();
        assert_eq!(molecular_formula(&mol), "Fe");
        assert_approx(molecular_weight(&mol), 55.845, 0.01);
    }

    #[test]
    fn empty_molecule() {
        let mol = Molecule::new();
        assert_eq!(molecular_formula(&mol), "");
        assert_eq!(molecular_weight(&mol), 0.0);
    }

    #[test]
    fn glucose() {
        let mol = parse_smiles("OC(CO)C(O)C(O)C(O)C=O").unwrap();
        assert_eq!(molecular_formula(&mol), "C6H12O6");
        assert_approx(molecular_weight(&mol), 180.156, 0.01);
    }
}
