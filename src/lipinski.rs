//! Lipinski's Rule of Five.

use serde::Serialize;

use crate::formula::molecular_weight;
use crate::mol::Molecule;
use crate::properties::{hba_count, hbd_count};

pub const MW_LIMIT: f64 = 500.0;
pub const LOGP_LIMIT: f64 = 5.0;
pub const HBD_LIMIT: usize = 5;
pub const HBA_LIMIT: usize = 10;

/// Rule-of-Five evaluation.
///
/// LogP is not estimated here; the caller supplies one when it has it.
/// An absent logP makes that rule unknown (`logp_ok = None`) and it never
/// counts as a violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lipinski {
    pub molecular_weight: f64,
    pub logp: Option<f64>,
    pub hbd: usize,
    pub hba: usize,
    pub mw_ok: bool,
    pub logp_ok: Option<bool>,
    pub hbd_ok: bool,
    pub hba_ok: bool,
    pub violations: u8,
    /// At most one violated rule.
    pub drug_like: bool,
}

pub fn evaluate(mol: &Molecule, logp: Option<f64>) -> Lipinski {
    let mw = molecular_weight(mol);
    let hbd = hbd_count(mol);
    let hba = hba_count(mol);

    let mw_ok = mw <= MW_LIMIT;
    let logp_ok = logp.map(|v| v <= LOGP_LIMIT);
    let hbd_ok = hbd <= HBD_LIMIT;
    let hba_ok = hba <= HBA_LIMIT;

    let mut violations = 0u8;
    if !mw_ok {
        violations += 1;
    }
    if logp_ok == Some(false) {
        violations += 1;
    }
    if !hbd_ok {
        violations += 1;
    }
    if !hba_ok {
        violations += 1;
    }

    Lipinski {
        molecular_weight: mw,
        logp,
        hbd,
        hba,
        mw_ok,
        logp_ok,
        hbd_ok,
        hba_ok,
        violations,
        drug_like: violations <= 1,
    }
}
