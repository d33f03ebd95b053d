//! Deterministic SMILES structural analyzer.
//!
//! Parses a SMILES string into a molecular graph, detects its smallest set
//! of smallest rings, and derives descriptors: Hill formula, molecular
//! weight, heteroatom/rotatable-bond counts, aromatic ring count, and a
//! Lipinski Rule-of-Five evaluation. [`analyze`] runs the whole pipeline
//! for one molecule; [`analyze_batch`] runs it in parallel over many,
//! preserving input order.
//!
//! ```
//! use molprobe::analyze;
//!
//! let result = analyze("CC(=O)OC1=CC=CC=C1C(=O)O");
//! assert!(result.is_valid);
//! assert_eq!(result.formula.as_deref(), Some("C9H8O4"));
//! assert_eq!(result.ring_count, Some(1));
//! ```

pub mod analysis;
pub mod aromaticity;
pub mod atom;
pub mod batch;
pub mod bond;
pub mod element;
pub mod error;
pub mod formula;
pub mod lipinski;
pub mod mol;
pub mod properties;
pub mod rings;
pub mod smiles;

pub use analysis::{analyze, analyze_with_logp, AnalysisResult};
pub use atom::Atom;
pub use batch::{analyze_batch, analyze_batch_with, BatchOptions};
pub use bond::{Bond, BondOrder};
pub use element::Element;
pub use error::{AnalysisError, Reason, StructureError, SyntaxError, UnsupportedError};
pub use lipinski::Lipinski;
pub use mol::Molecule;
pub use rings::{RingInfo, DEFAULT_RING_SIZE_CAP};
pub use smiles::parse_smiles;
