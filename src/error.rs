use serde::Serialize;
use thiserror::Error;

/// Lexical errors: the input text is not well-formed SMILES.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("empty SMILES string")]
    EmptyInput,
    /// Whitespace is rejected, never skipped: a SMILES string is a single
    /// token and embedded spaces almost always mean truncated input.
    #[error("whitespace at position {pos}")]
    Whitespace { pos: usize },
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { pos: usize, ch: char },
    #[error("unknown element '{text}' at position {pos}")]
    UnknownElement { pos: usize, text: String },
    #[error("unclosed bracket atom starting at position {pos}")]
    UnclosedBracket { pos: usize },
    #[error("invalid charge at position {pos}")]
    InvalidCharge { pos: usize },
    #[error("'%' ring closure at position {pos} requires two digits")]
    TruncatedRingClosure { pos: usize },
}

/// Well-formed text that does not describe a valid molecular graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("branch opened at position {pos} with no preceding atom")]
    BranchWithoutAtom { pos: usize },
    #[error("')' at position {pos} without a matching '('")]
    UnmatchedBranchClose { pos: usize },
    #[error("{count} branch(es) left unclosed at end of input")]
    UnclosedBranch { count: usize },
    #[error("bond symbol at position {pos} with no preceding atom")]
    BondWithoutAtom { pos: usize },
    #[error("bond symbol at position {pos} with no following atom")]
    DanglingBond { pos: usize },
    #[error("ring-closure digit {digit} before any atom")]
    RingBondWithoutAtom { digit: u16 },
    #[error("ring bond {digit} opened but never closed")]
    DanglingRingBond { digit: u16 },
    #[error("ring bond {digit} at position {pos} closes onto its own atom")]
    SelfRingBond { digit: u16, pos: usize },
    #[error("conflicting bond orders on the two ends of ring closure {digit}")]
    RingBondConflict { digit: u16 },
    #[error("valence {valence} exceeds maximum {max} for {element} at atom {atom}")]
    ValenceExceeded {
        atom: usize,
        element: &'static str,
        valence: u8,
        max: u8,
    },
}

/// Syntax this analyzer recognizes but deliberately does not model.
/// Rejected with a precise message rather than silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedError {
    #[error("stereochemistry marker '{ch}' at position {pos} is not supported")]
    Stereochemistry { pos: usize, ch: char },
    #[error("isotope label at position {pos} is not supported")]
    Isotope { pos: usize },
    #[error("atom class annotation at position {pos} is not supported")]
    AtomClass { pos: usize },
}

/// Any failure an analysis can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),
}

impl AnalysisError {
    pub fn reason(&self) -> Reason {
        match self {
            AnalysisError::Syntax(_) => Reason::Syntax,
            AnalysisError::Structure(_) => Reason::Structure,
            AnalysisError::Unsupported(_) => Reason::Unsupported,
        }
    }
}

/// Stable machine-readable failure code, carried on invalid results next to
/// the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Syntax,
    Structure,
    Unsupported,
    Cancelled,
}
