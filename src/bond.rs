#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribution to an atom's bond-order sum. Aromatic bonds count as
    /// single; the π system is accounted for separately during
    /// implicit-hydrogen resolution.
    pub fn valence_units(self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self { order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valence_units() {
        assert_eq!(BondOrder::Single.valence_units(), 1);
        assert_eq!(BondOrder::Double.valence_units(), 2);
        assert_eq!(BondOrder::Triple.valence_units(), 3);
        assert_eq!(BondOrder::Aromatic.valence_units(), 1);
    }

    #[test]
    fn default_is_single() {
        assert_eq!(Bond::default().order, BondOrder::Single);
    }
}
