use crate::element::Element;

/// A heavy atom in the molecular graph.
///
/// `Atom` stores intrinsic properties only — the things you would read off a
/// structural formula. Hydrogens are never graph nodes; `hydrogen_count` is
/// the single source of truth for how many Hs the atom carries, resolved
/// during parsing (or taken verbatim from bracket notation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub element: Element,
    /// Formal charge in elementary charge units (e.g. −1 for a carboxylate oxygen).
    pub formal_charge: i8,
    /// Implicit (suppressed) hydrogens on this atom.
    pub hydrogen_count: u8,
    /// Whether the atom was written aromatic-typed (lowercase) in the input.
    pub is_aromatic: bool,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            formal_charge: 0,
            hydrogen_count: 0,
            is_aromatic: false,
        }
    }

    /// Heavy atom that is neither carbon nor hydrogen.
    pub fn is_heteroatom(&self) -> bool {
        !matches!(self.element, Element::C | Element::H)
    }
}
