mod builder;
mod tokenizer;

use crate::error::{AnalysisError, SyntaxError};
use crate::mol::Molecule;

pub use tokenizer::{AtomToken, BondToken, Token};

/// Parses a SMILES string into a [`Molecule`].
///
/// The input is taken verbatim: whitespace anywhere (including leading or
/// trailing) is a syntax error, so callers batching over line-oriented text
/// must strip line endings themselves.
pub fn parse_smiles(s: &str) -> Result<Molecule, AnalysisError> {
    if s.is_empty() {
        return Err(SyntaxError::EmptyInput.into());
    }
    let tokens = tokenizer::tokenize(s).map_err(|e| match e {
        tokenizer::TokenizeError::Syntax(e) => AnalysisError::Syntax(e),
        tokenizer::TokenizeError::Unsupported(e) => AnalysisError::Unsupported(e),
    })?;
    Ok(builder::build(&tokens)?)
}
