//! The single-molecule analysis pipeline: parse → rings → descriptors →
//! Lipinski, collapsed into one flat serializable record.

use std::fmt;

use serde::Serialize;

use crate::aromaticity::aromatic_ring_count;
use crate::error::{AnalysisError, Reason};
use crate::formula::{molecular_formula, molecular_weight};
use crate::lipinski::{self, Lipinski};
use crate::properties::{heteroatom_count, rotatable_bond_count};
use crate::rings::RingInfo;
use crate::smiles::parse_smiles;

/// Everything the analyzer derives from one SMILES string.
///
/// On failure `is_valid` is false, `reason`/`error` say why, and every
/// quantitative field is `None` — a failed analysis never fabricates
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub input: String,
    pub is_valid: bool,
    pub reason: Option<Reason>,
    pub error: Option<String>,
    pub atom_count: Option<usize>,
    pub bond_count: Option<usize>,
    pub ring_count: Option<usize>,
    pub aromatic_ring_count: Option<usize>,
    pub heteroatom_count: Option<usize>,
    pub rotatable_bond_count: Option<usize>,
    pub formula: Option<String>,
    pub molecular_weight: Option<f64>,
    pub lipinski: Option<Lipinski>,
}

impl AnalysisResult {
    pub fn invalid(input: &str, err: &AnalysisError) -> Self {
        Self::failed(input, err.reason(), err.to_string())
    }

    pub fn cancelled(input: &str) -> Self {
        Self::failed(input, Reason::Cancelled, "analysis cancelled".to_owned())
    }

    fn failed(input: &str, reason: Reason, message: String) -> Self {
        Self {
            input: input.to_owned(),
            is_valid: false,
            reason: Some(reason),
            error: Some(message),
            atom_count: None,
            bond_count: None,
            ring_count: None,
            aromatic_ring_count: None,
            heteroatom_count: None,
            rotatable_bond_count: None,
            formula: None,
            molecular_weight: None,
            lipinski: None,
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(
                f,
                "{} {} ({:.1} Da): {} atoms, {} rings ({} aromatic), {} violation(s)",
                self.input,
                self.formula.as_deref().unwrap_or("?"),
                self.molecular_weight.unwrap_or(0.0),
                self.atom_count.unwrap_or(0),
                self.ring_count.unwrap_or(0),
                self.aromatic_ring_count.unwrap_or(0),
                self.lipinski.as_ref().map_or(0, |l| l.violations),
            )
        } else {
            write!(
                f,
                "{} invalid: {}",
                self.input,
                self.error.as_deref().unwrap_or("unknown error"),
            )
        }
    }
}

/// Analyzes one SMILES string. Pure and deterministic: same input, same
/// result, no shared state.
pub fn analyze(smiles: &str) -> AnalysisResult {
    analyze_with_logp(smiles, None)
}

/// [`analyze`] with a caller-supplied logP for the Lipinski block.
pub fn analyze_with_logp(smiles: &str, logp: Option<f64>) -> AnalysisResult {
    let mol = match parse_smiles(smiles) {
        Ok(mol) => mol,
        Err(err) => return AnalysisResult::invalid(smiles, &err),
    };

    let rings = RingInfo::find(&mol);

    AnalysisResult {
        input: smiles.to_owned(),
        is_valid: true,
        reason: None,
        error: None,
        atom_count: Some(mol.atom_count()),
        bond_count: Some(mol.bond_count()),
        ring_count: Some(rings.num_rings()),
        aromatic_ring_count: Some(aromatic_ring_count(&mol, &rings)),
        heteroatom_count: Some(heteroatom_count(&mol)),
        rotatable_bond_count: Some(rotatable_bond_count(&mol, &rings)),
        formula: Some(molecular_formula(&mol)),
        molecular_weight: Some(molecular_weight(&mol)),
        lipinski: Some(lipinski::evaluate(&mol, logp)),
    }
}
