use crate::element::Element;
use crate::error::{SyntaxError, UnsupportedError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Atom(AtomToken),
    Bond { order: BondToken, pos: usize },
    RingClosure { digit: u16, pos: usize },
    OpenBranch(usize),
    CloseBranch(usize),
    Dot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub element: Element,
    pub is_aromatic: bool,
    /// `Some` only for bracket atoms, where the written H count is
    /// authoritative and implicit-H resolution is skipped.
    pub hcount: Option<u8>,
    pub charge: i8,
    pub is_bracket: bool,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondToken {
    Single,
    Double,
    Triple,
    Aromatic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    Syntax(SyntaxError),
    Unsupported(UnsupportedError),
}

impl From<SyntaxError> for TokenizeError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<UnsupportedError> for TokenizeError {
    fn from(e: UnsupportedError) -> Self {
        Self::Unsupported(e)
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            c if c.is_whitespace() => {
                return Err(SyntaxError::Whitespace { pos: i }.into());
            }
            '[' => {
                let (tok, next) = parse_bracket_atom(&chars, i)?;
                tokens.push(Token::Atom(tok));
                i = next;
            }
            'B' => {
                if i + 1 < chars.len() && chars[i + 1] == 'r' {
                    tokens.push(Token::Atom(bare_atom(Element::Br, false, i)));
                    i += 2;
                } else {
                    tokens.push(Token::Atom(bare_atom(Element::B, false, i)));
                    i += 1;
                }
            }
            'C' => {
                if i + 1 < chars.len() && chars[i + 1] == 'l' {
                    tokens.push(Token::Atom(bare_atom(Element::Cl, false, i)));
                    i += 2;
                } else {
                    tokens.push(Token::Atom(bare_atom(Element::C, false, i)));
                    i += 1;
                }
            }
            'N' => {
                tokens.push(Token::Atom(bare_atom(Element::N, false, i)));
                i += 1;
            }
            'O' => {
                tokens.push(Token::Atom(bare_atom(Element::O, false, i)));
                i += 1;
            }
            'P' => {
                tokens.push(Token::Atom(bare_atom(Element::P, false, i)));
                i += 1;
            }
            'S' => {
                tokens.push(Token::Atom(bare_atom(Element::S, false, i)));
                i += 1;
            }
            'F' => {
                tokens.push(Token::Atom(bare_atom(Element::F, false, i)));
                i += 1;
            }
            'I' => {
                tokens.push(Token::Atom(bare_atom(Element::I, false, i)));
                i += 1;
            }
            'b' => {
                tokens.push(Token::Atom(bare_atom(Element::B, true, i)));
                i += 1;
            }
            'c' => {
                tokens.push(Token::Atom(bare_atom(Element::C, true, i)));
                i += 1;
            }
            'n' => {
                tokens.push(Token::Atom(bare_atom(Element::N, true, i)));
                i += 1;
            }
            'o' => {
                tokens.push(Token::Atom(bare_atom(Element::O, true, i)));
                i += 1;
            }
            'p' => {
                tokens.push(Token::Atom(bare_atom(Element::P, true, i)));
                i += 1;
            }
            's' => {
                tokens.push(Token::Atom(bare_atom(Element::S, true, i)));
                i += 1;
            }
            '-' => {
                tokens.push(Token::Bond {
                    order: BondToken::Single,
                    pos: i,
                });
                i += 1;
            }
            '=' => {
                tokens.push(Token::Bond {
                    order: BondToken::Double,
                    pos: i,
                });
                i += 1;
            }
            '#' => {
                tokens.push(Token::Bond {
                    order: BondToken::Triple,
                    pos: i,
                });
                i += 1;
            }
            ':' => {
                tokens.push(Token::Bond {
                    order: BondToken::Aromatic,
                    pos: i,
                });
                i += 1;
            }
            ch @ ('/' | '\\') => {
                return Err(UnsupportedError::Stereochemistry { pos: i, ch }.into());
            }
            '(' => {
                tokens.push(Token::OpenBranch(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseBranch(i));
                i += 1;
            }
            '.' => {
                tokens.push(Token::Dot(i));
                i += 1;
            }
            '%' => {
                let (digit, next) = parse_percent_ring(&chars, i)?;
                tokens.push(Token::RingClosure { digit, pos: i });
                i = next;
            }
            d @ '0'..='9' => {
                tokens.push(Token::RingClosure {
                    digit: (d as u16) - b'0' as u16,
                    pos: i,
                });
                i += 1;
            }
            ch => return Err(SyntaxError::UnexpectedChar { pos: i, ch }.into()),
        }
    }

    Ok(tokens)
}

fn bare_atom(element: Element, aromatic: bool, pos: usize) -> AtomToken {
    AtomToken {
        element,
        is_aromatic: aromatic,
        hcount: None,
        charge: 0,
        is_bracket: false,
        pos,
    }
}

fn parse_percent_ring(chars: &[char], start: usize) -> Result<(u16, usize), SyntaxError> {
    let i = start + 1;
    if i + 1 >= chars.len() || !chars[i].is_ascii_digit() || !chars[i + 1].is_ascii_digit() {
        return Err(SyntaxError::TruncatedRingClosure { pos: start });
    }
    let d1 = (chars[i] as u16) - b'0' as u16;
    let d2 = (chars[i + 1] as u16) - b'0' as u16;
    Ok((d1 * 10 + d2, i + 2))
}

fn parse_bracket_atom(chars: &[char], start: usize) -> Result<(AtomToken, usize), TokenizeError> {
    let mut i = start + 1; // skip '['

    if i < chars.len() && chars[i].is_ascii_digit() {
        return Err(UnsupportedError::Isotope { pos: i }.into());
    }

    let (element, is_aromatic) = parse_bracket_element(chars, &mut i, start)?;

    if i < chars.len() && chars[i] == '@' {
        return Err(UnsupportedError::Stereochemistry { pos: i, ch: '@' }.into());
    }

    let hcount = parse_hcount(chars, &mut i);

    let charge = parse_charge(chars, &mut i, start)?;

    if i < chars.len() && chars[i] == ':' {
        return Err(UnsupportedError::AtomClass { pos: i }.into());
    }

    if i >= chars.len() || chars[i] != ']' {
        return Err(SyntaxError::UnclosedBracket { pos: start }.into());
    }
    i += 1; // skip ']'

    Ok((
        AtomToken {
            element,
            is_aromatic,
            hcount: Some(hcount.unwrap_or(0)),
            charge,
            is_bracket: true,
            pos: start,
        },
        i,
    ))
}

fn parse_bracket_element(
    chars: &[char],
    i: &mut usize,
    bracket_start: usize,
) -> Result<(Element, bool), SyntaxError> {
    if *i >= chars.len() {
        return Err(SyntaxError::UnclosedBracket { pos: bracket_start });
    }

    let aromatic_map: &[(&str, Element)] = &[
        ("se", Element::Se),
        ("te", Element::Te),
        ("b", Element::B),
        ("c", Element::C),
        ("n", Element::N),
        ("o", Element::O),
        ("p", Element::P),
        ("s", Element::S),
    ];

    for &(pat, elem) in aromatic_map {
        if *i + pat.len() <= chars.len() {
            let slice: String = chars[*i..*i + pat.len()].iter().collect();
            if slice == pat {
                let after = *i + pat.len();
                let next_is_lower = after < chars.len() && chars[after].is_ascii_lowercase();
                if !next_is_lower || pat.len() == 2 {
                    *i += pat.len();
                    return Ok((elem, true));
                }
            }
        }
    }

    // Two-char uppercase-lowercase symbol first, then one-char.
    if *i + 1 < chars.len() && chars[*i].is_ascii_uppercase() && chars[*i + 1].is_ascii_lowercase()
    {
        let sym: String = chars[*i..=*i + 1].iter().collect();
        if let Some(e) = Element::from_symbol(&sym) {
            *i += 2;
            return Ok((e, false));
        }
    }

    if chars[*i].is_ascii_uppercase() {
        let sym: String = chars[*i..=*i].iter().collect();
        if let Some(e) = Element::from_symbol(&sym) {
            *i += 1;
            return Ok((e, false));
        }
    }

    Err(SyntaxError::UnknownElement {
        pos: *i,
        text: chars.get(*i).map(|c| c.to_string()).unwrap_or_default(),
    })
}

fn parse_hcount(chars: &[char], i: &mut usize) -> Option<u8> {
    if *i < chars.len() && chars[*i] == 'H' {
        *i += 1;
        let mut count: u8 = 1;
        if *i < chars.len() && chars[*i].is_ascii_digit() {
            count = chars[*i] as u8 - b'0';
            *i += 1;
        }
        Some(count)
    } else {
        None
    }
}

fn parse_charge(chars: &[char], i: &mut usize, bracket_start: usize) -> Result<i8, SyntaxError> {
    if *i >= chars.len() {
        return Ok(0);
    }

    match chars[*i] {
        '+' => {
            *i += 1;
            if *i < chars.len() && chars[*i] == '+' {
                let mut count: i8 = 1;
                while *i < chars.len() && chars[*i] == '+' {
                    count = count
                        .checked_add(1)
                        .ok_or(SyntaxError::InvalidCharge { pos: bracket_start })?;
                    *i += 1;
                }
                Ok(count)
            } else if *i < chars.len() && chars[*i].is_ascii_digit() {
                let mut val: i8 = 0;
                while *i < chars.len() && chars[*i].is_ascii_digit() {
                    val = val
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((chars[*i] as i8) - b'0' as i8))
                        .ok_or(SyntaxError::InvalidCharge { pos: bracket_start })?;
                    *i += 1;
                }
                Ok(val)
            } else {
                Ok(1)
            }
        }
        '-' => {
            *i += 1;
            if *i < chars.len() && chars[*i] == '-' {
                let mut count: i8 = -1;
                while *i < chars.len() && chars[*i] == '-' {
                    count = count
                        .checked_sub(1)
                        .ok_or(SyntaxError::InvalidCharge { pos: bracket_start })?;
                    *i += 1;
                }
                Ok(count)
            } else if *i < chars.len() && chars[*i].is_ascii_digit() {
                let mut val: i8 = 0;
                while *i < chars.len() && chars[*i].is_ascii_digit() {
                    val = val
                        .checked_mul(10)
                        .and_then(|v| v.checked_add((chars[*i] as i8) - b'0' as i8))
                        .ok_or(SyntaxError::InvalidCharge { pos: bracket_start })?;
                    *i += 1;
                }
                Ok(-val)
            } else {
                Ok(-1)
            }
        }
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_methane() {
        let tokens = tokenize("C").unwrap();
        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            Token::Atom(a) => {
                assert_eq!(a.element, Element::C);
                assert!(!a.is_bracket);
                assert!(!a.is_aromatic);
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn tokenize_ethene() {
        let tokens = tokenize("C=C").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(
            &tokens[1],
            Token::Bond {
                order: BondToken::Double,
                ..
            }
        ));
    }

    #[test]
    fn tokenize_two_char_elements() {
        let tokens = tokenize("ClBr").unwrap();
        assert_eq!(tokens.len(), 2);
        match (&tokens[0], &tokens[1]) {
            (Token::Atom(a), Token::Atom(b)) => {
                assert_eq!(a.element, Element::Cl);
                assert_eq!(b.element, Element::Br);
            }
            _ => panic!("expected two atoms"),
        }
    }

    #[test]
    fn tokenize_bracket_atom() {
        let tokens = tokenize("[NH4+]").unwrap();
        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            Token::Atom(a) => {
                assert_eq!(a.element, Element::N);
                assert!(a.is_bracket);
                assert_eq!(a.hcount, Some(4));
                assert_eq!(a.charge, 1);
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn bracket_atom_without_hcount_is_zero() {
        let tokens = tokenize("[Na+]").unwrap();
        match &tokens[0] {
            Token::Atom(a) => {
                assert_eq!(a.element, Element::Na);
                assert_eq!(a.hcount, Some(0));
                assert_eq!(a.charge, 1);
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn tokenize_ring_closure() {
        let tokens = tokenize("C1CC1").unwrap();
        assert_eq!(tokens.len(), 5);
        assert!(matches!(&tokens[1], Token::RingClosure { digit: 1, .. }));
    }

    #[test]
    fn tokenize_percent_ring() {
        let tokens = tokenize("C%10CC%10").unwrap();
        assert!(matches!(&tokens[1], Token::RingClosure { digit: 10, .. }));
    }

    #[test]
    fn truncated_percent_ring() {
        assert_eq!(
            tokenize("C%1"),
            Err(SyntaxError::TruncatedRingClosure { pos: 1 }.into())
        );
    }

    #[test]
    fn tokenize_aromatic() {
        let tokens = tokenize("c1ccccc1").unwrap();
        assert_eq!(tokens.len(), 8);
        match &tokens[0] {
            Token::Atom(a) => {
                assert!(a.is_aromatic);
                assert_eq!(a.element, Element::C);
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn bracket_aromatic_se() {
        let tokens = tokenize("[se]").unwrap();
        match &tokens[0] {
            Token::Atom(a) => {
                assert!(a.is_aromatic);
                assert_eq!(a.element, Element::Se);
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn negative_charge_variants() {
        for (input, expected) in [("[O-]", -1i8), ("[O-2]", -2), ("[O--]", -2)] {
            let tokens = tokenize(input).unwrap();
            match &tokens[0] {
                Token::Atom(a) => assert_eq!(a.charge, expected, "{}", input),
                _ => panic!("expected atom"),
            }
        }
    }

    #[test]
    fn whitespace_rejected() {
        assert_eq!(
            tokenize("C C"),
            Err(SyntaxError::Whitespace { pos: 1 }.into())
        );
        assert_eq!(
            tokenize("CCO\n"),
            Err(SyntaxError::Whitespace { pos: 3 }.into())
        );
    }

    #[test]
    fn stereochemistry_rejected() {
        assert_eq!(
            tokenize("[C@@H](F)(Cl)Br"),
            Err(UnsupportedError::Stereochemistry { pos: 2, ch: '@' }.into())
        );
        assert_eq!(
            tokenize("F/C=C/F"),
            Err(UnsupportedError::Stereochemistry { pos: 1, ch: '/' }.into())
        );
        assert_eq!(
            tokenize("F\\C=C\\F"),
            Err(UnsupportedError::Stereochemistry { pos: 1, ch: '\\' }.into())
        );
    }

    #[test]
    fn isotope_rejected() {
        assert_eq!(
            tokenize("[13C]"),
            Err(UnsupportedError::Isotope { pos: 1 }.into())
        );
    }

    #[test]
    fn atom_class_rejected() {
        assert_eq!(
            tokenize("[CH4:1]"),
            Err(UnsupportedError::AtomClass { pos: 4 }.into())
        );
    }

    #[test]
    fn unknown_element_in_bracket() {
        assert!(matches!(
            tokenize("[Xx]"),
            Err(TokenizeError::Syntax(SyntaxError::UnknownElement { .. }))
        ));
    }

    #[test]
    fn unclosed_bracket() {
        assert_eq!(
            tokenize("[NH4"),
            Err(SyntaxError::UnclosedBracket { pos: 0 }.into())
        );
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            tokenize("C?C"),
            Err(SyntaxError::UnexpectedChar { pos: 1, ch: '?' }.into())
        );
    }
}
