use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::error::StructureError;
use crate::mol::Molecule;
use crate::smiles::tokenizer::{AtomToken, BondToken, Token};

/// Builds a [`Molecule`] from a token stream in a single pass.
///
/// The walk keeps a current-atom cursor, an explicit branch stack (`(`
/// pushes, `)` pops) and an open-ring table keyed by closure digit. After
/// all bonds are in place, implicit hydrogens are resolved and the valence
/// check runs.
pub fn build(tokens: &[Token]) -> Result<Molecule, StructureError> {
    let mut mol = Molecule::new();
    // Tracks which atoms came from bracket notation; their written H count
    // is authoritative and skips implicit resolution.
    let mut is_bracket: Vec<bool> = Vec::new();

    let mut current: Option<NodeIndex> = None;
    let mut stack: Vec<NodeIndex> = Vec::new();
    let mut pending_bond: Option<(BondToken, usize)> = None;
    let mut ring_opens: Vec<Option<(NodeIndex, Option<BondToken>)>> = vec![None; 100];

    for token in tokens {
        match token {
            Token::Atom(atom_tok) => {
                let idx = mol.add_atom(atom_from_token(atom_tok));
                is_bracket.push(atom_tok.is_bracket);

                if let Some(cur) = current {
                    let bond_tok = pending_bond.take().map(|(b, _)| b);
                    let order = resolve_bond_order(
                        bond_tok,
                        mol.atom(cur).is_aromatic,
                        mol.atom(idx).is_aromatic,
                    );
                    mol.add_bond(cur, idx, Bond::new(order));
                } else if let Some((_, pos)) = pending_bond.take() {
                    return Err(StructureError::BondWithoutAtom { pos });
                }

                current = Some(idx);
            }
            Token::Bond { order, pos } => {
                if current.is_none() {
                    return Err(StructureError::BondWithoutAtom { pos: *pos });
                }
                pending_bond = Some((*order, *pos));
            }
            Token::RingClosure { digit, pos } => {
                let cur = current.ok_or(StructureError::RingBondWithoutAtom { digit: *digit })?;
                let d = *digit as usize;

                if let Some((open_idx, open_bond)) = ring_opens[d].take() {
                    if open_idx == cur {
                        return Err(StructureError::SelfRingBond {
                            digit: *digit,
                            pos: *pos,
                        });
                    }
                    let close_bond = pending_bond.take().map(|(b, _)| b);
                    let bond_tok = match (open_bond, close_bond) {
                        (None, None) => None,
                        (Some(b), None) | (None, Some(b)) => Some(b),
                        (Some(b1), Some(b2)) => {
                            if b1 == b2 {
                                Some(b1)
                            } else {
                                return Err(StructureError::RingBondConflict { digit: *digit });
                            }
                        }
                    };
                    let order = resolve_bond_order(
                        bond_tok,
                        mol.atom(open_idx).is_aromatic,
                        mol.atom(cur).is_aromatic,
                    );
                    mol.add_bond(open_idx, cur, Bond::new(order));
                } else {
                    ring_opens[d] = Some((cur, pending_bond.take().map(|(b, _)| b)));
                }
            }
            Token::OpenBranch(pos) => {
                let cur = current.ok_or(StructureError::BranchWithoutAtom { pos: *pos })?;
                stack.push(cur);
            }
            Token::CloseBranch(pos) => {
                if let Some((_, bond_pos)) = pending_bond.take() {
                    return Err(StructureError::DanglingBond { pos: bond_pos });
                }
                current =
                    Some(stack.pop().ok_or(StructureError::UnmatchedBranchClose { pos: *pos })?);
            }
            Token::Dot(_) => {
                if let Some((_, bond_pos)) = pending_bond.take() {
                    return Err(StructureError::DanglingBond { pos: bond_pos });
                }
                current = None;
            }
        }
    }

    if let Some((_, pos)) = pending_bond {
        return Err(StructureError::DanglingBond { pos });
    }
    if !stack.is_empty() {
        return Err(StructureError::UnclosedBranch { count: stack.len() });
    }
    for (digit, entry) in ring_opens.iter().enumerate() {
        if entry.is_some() {
            return Err(StructureError::DanglingRingBond {
                digit: digit as u16,
            });
        }
    }

    resolve_hydrogen_counts(&mut mol, &is_bracket);
    check_valences(&mol)?;

    Ok(mol)
}

fn atom_from_token(tok: &AtomToken) -> Atom {
    Atom {
        element: tok.element,
        formal_charge: tok.charge,
        hydrogen_count: tok.hcount.unwrap_or(0),
        is_aromatic: tok.is_aromatic,
    }
}

fn resolve_bond_order(
    bond_tok: Option<BondToken>,
    from_aromatic: bool,
    to_aromatic: bool,
) -> BondOrder {
    match bond_tok {
        Some(BondToken::Single) => BondOrder::Single,
        Some(BondToken::Double) => BondOrder::Double,
        Some(BondToken::Triple) => BondOrder::Triple,
        Some(BondToken::Aromatic) => BondOrder::Aromatic,
        None => {
            if from_aromatic && to_aromatic {
                BondOrder::Aromatic
            } else {
                BondOrder::Single
            }
        }
    }
}

fn resolve_hydrogen_counts(mol: &mut Molecule, is_bracket: &[bool]) {
    let indices: Vec<NodeIndex> = mol.atoms().collect();
    for idx in indices {
        if is_bracket[idx.index()] {
            continue; // bracket H count is authoritative
        }
        let h = compute_implicit_h(mol, idx);
        mol.atom_mut(idx).hydrogen_count = h;
    }
}

/// Smallest allowed default valence that accommodates the bond-order sum;
/// aromatic atoms donate one bonding slot to the π system.
fn compute_implicit_h(mol: &Molecule, node: NodeIndex) -> u8 {
    let atom = mol.atom(node);
    let valences = atom.element.default_valences();
    if valences.is_empty() {
        return 0;
    }

    let bond_order_sum = mol.bond_order_sum(node);

    let target = valences
        .iter()
        .find(|&&v| v >= bond_order_sum)
        .copied()
        .unwrap_or(0);

    if target < bond_order_sum {
        return 0;
    }

    let mut h = target - bond_order_sum;

    if atom.is_aromatic && h > 0 {
        h -= 1;
    }

    h
}

/// Bond-order sum plus implicit H must not exceed the element's maximum
/// default valence. Charged atoms are exempt.
fn check_valences(mol: &Molecule) -> Result<(), StructureError> {
    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        if atom.formal_charge != 0 {
            continue;
        }
        if let Some(max) = atom.element.max_valence() {
            let valence = mol.bond_order_sum(idx).saturating_add(atom.hydrogen_count);
            if valence > max {
                return Err(StructureError::ValenceExceeded {
                    atom: idx.index(),
                    element: atom.element.symbol(),
                    valence,
                    max,
                });
            }
        }
    }
    Ok(())
}
