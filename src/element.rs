/// Periodic table data for elements 1–118.
///
/// Only the data the analyzer consumes is carried: symbols, standard atomic
/// weights, and the default valence lists used for implicit-hydrogen
/// resolution and the valence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Sc = 21,
    Ti = 22,
    V = 23,
    Cr = 24,
    Mn = 25,
    Fe = 26,
    Co = 27,
    Ni = 28,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Rb = 37,
    Sr = 38,
    Y = 39,
    Zr = 40,
    Nb = 41,
    Mo = 42,
    Tc = 43,
    Ru = 44,
    Rh = 45,
    Pd = 46,
    Ag = 47,
    Cd = 48,
    In = 49,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    La = 57,
    Ce = 58,
    Pr = 59,
    Nd = 60,
    Pm = 61,
    Sm = 62,
    Eu = 63,
    Gd = 64,
    Tb = 65,
    Dy = 66,
    Ho = 67,
    Er = 68,
    Tm = 69,
    Yb = 70,
    Lu = 71,
    Hf = 72,
    Ta = 73,
    W = 74,
    Re = 75,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
    Po = 84,
    At = 85,
    Rn = 86,
    Fr = 87,
    Ra = 88,
    Ac = 89,
    Th = 90,
    Pa = 91,
    U = 92,
    Np = 93,
    Pu = 94,
    Am = 95,
    Cm = 96,
    Bk = 97,
    Cf = 98,
    Es = 99,
    Fm = 100,
    Md = 101,
    No = 102,
    Lr = 103,
    Rf = 104,
    Db = 105,
    Sg = 106,
    Bh = 107,
    Hs = 108,
    Mt = 109,
    Ds = 110,
    Rg = 111,
    Cn = 112,
    Nh = 113,
    Fl = 114,
    Mc = 115,
    Lv = 116,
    Ts = 117,
    Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        if (1..=118).contains(&n) {
            // SAFETY: repr(u8) with contiguous variants 1..=118, bounds checked above.
            Some(unsafe { std::mem::transmute::<u8, Element>(n) })
        } else {
            None
        }
    }

    /// Case-sensitive symbol lookup (`"Cl"` matches, `"CL"` does not).
    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOLS
            .iter()
            .position(|&sym| sym == s)
            .and_then(|i| Element::from_atomic_num(i as u8 + 1))
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize - 1]
    }

    pub fn atomic_weight(self) -> f64 {
        ATOMIC_WEIGHTS[self as usize - 1]
    }

    /// Allowed total valences for implicit-hydrogen resolution, smallest
    /// first. Empty for elements without a default valence model (metals,
    /// noble gases), which are exempt from the valence check.
    pub fn default_valences(self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::B => &[3],
            Element::C => &[4],
            Element::N => &[3, 5],
            Element::O => &[2],
            Element::F | Element::Cl | Element::Br | Element::At => &[1],
            Element::Si | Element::Ge => &[4],
            Element::P | Element::As => &[3, 5],
            Element::S | Element::Se | Element::Te => &[2, 4, 6],
            Element::I => &[1, 3, 5, 7],
            _ => &[],
        }
    }

    /// Largest allowed valence, `None` when the element has no default
    /// valence model.
    pub fn max_valence(self) -> Option<u8> {
        self.default_valences().last().copied()
    }

    /// Elements writable without brackets in SMILES.
    pub fn is_organic_subset(self) -> bool {
        matches!(
            self,
            Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::F
                | Element::Cl
                | Element::Br
                | Element::I
        )
    }
}

static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

// IUPAC CIAAW standard atomic weights; for elements without stable
// isotopes, the mass number of the longest-lived isotope.
static ATOMIC_WEIGHTS: [f64; 118] = [
    1.008,        // H
    4.002602,     // He
    6.941,        // Li
    9.0121831,    // Be
    10.81,        // B
    12.011,       // C
    14.007,       // N
    15.999,       // O
    18.998403163, // F
    20.1797,      // Ne
    22.98976928,  // Na
    24.305,       // Mg
    26.9815384,   // Al
    28.085,       // Si
    30.973761998, // P
    32.06,        // S
    35.45,        // Cl
    39.948,       // Ar
    39.0983,      // K
    40.078,       // Ca
    44.955908,    // Sc
    47.867,       // Ti
    50.9415,      // V
    51.9961,      // Cr
    54.938043,    // Mn
    55.845,       // Fe
    58.933194,    // Co
    58.6934,      // Ni
    63.546,       // Cu
    65.38,        // Zn
    69.723,       // Ga
    72.630,       // Ge
    74.921595,    // As
    78.971,       // Se
    79.904,       // Br
    83.798,       // Kr
    85.4678,      // Rb
    87.62,        // Sr
    88.90584,     // Y
    91.224,       // Zr
    92.90637,     // Nb
    95.95,        // Mo
    97.0,         // Tc
    101.07,       // Ru
    102.90549,    // Rh
    106.42,       // Pd
    107.8682,     // Ag
    112.414,      // Cd
    114.818,      // In
    118.710,      // Sn
    121.760,      // Sb
    127.60,       // Te
    126.90447,    // I
    131.293,      // Xe
    132.90545196, // Cs
    137.327,      // Ba
    138.90547,    // La
    140.116,      // Ce
    140.90766,    // Pr
    144.242,      // Nd
    145.0,        // Pm
    150.36,       // Sm
    151.964,      // Eu
    157.25,       // Gd
    158.925354,   // Tb
    162.500,      // Dy
    164.930328,   // Ho
    167.259,      // Er
    168.934218,   // Tm
    173.045,      // Yb
    174.9668,     // Lu
    178.486,      // Hf
    180.94788,    // Ta
    183.84,       // W
    186.207,      // Re
    190.23,       // Os
    192.217,      // Ir
    195.084,      // Pt
    196.966570,   // Au
    200.592,      // Hg
    204.38,       // Tl
    207.2,        // Pb
    208.98040,    // Bi
    209.0,        // Po
    210.0,        // At
    222.0,        // Rn
    223.0,        // Fr
    226.0,        // Ra
    227.0,        // Ac
    232.0377,     // Th
    231.03588,    // Pa
    238.02891,    // U
    237.0,        // Np
    244.0,        // Pu
    243.0,        // Am
    247.0,        // Cm
    247.0,        // Bk
    251.0,        // Cf
    252.0,        // Es
    257.0,        // Fm
    258.0,        // Md
    259.0,        // No
    266.0,        // Lr
    267.0,        // Rf
    268.0,        // Db
    269.0,        // Sg
    270.0,        // Bh
    277.0,        // Hs
    278.0,        // Mt
    281.0,        // Ds
    282.0,        // Rg
    285.0,        // Cn
    286.0,        // Nh
    289.0,        // Fl
    290.0,        // Mc
    293.0,        // Lv
    294.0,        // Ts
    294.0,        // Og
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_atomic_num_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(e.atomic_num(), n);
        }
    }

    #[test]
    fn from_atomic_num_boundaries() {
        assert!(Element::from_atomic_num(0).is_none());
        assert!(Element::from_atomic_num(119).is_none());
        assert_eq!(Element::from_atomic_num(1), Some(Element::H));
        assert_eq!(Element::from_atomic_num(118), Some(Element::Og));
    }

    #[test]
    fn from_symbol_exact_match() {
        assert_eq!(Element::from_symbol("C"), Some(Element::C));
        assert_eq!(Element::from_symbol("Cl"), Some(Element::Cl));
        assert_eq!(Element::from_symbol("Og"), Some(Element::Og));
    }

    #[test]
    fn from_symbol_case_sensitive() {
        assert!(Element::from_symbol("c").is_none());
        assert!(Element::from_symbol("CL").is_none());
        assert!(Element::from_symbol("").is_none());
        assert!(Element::from_symbol("Xx").is_none());
    }

    #[test]
    fn symbol_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
    }

    #[test]
    fn atomic_weight_spot_check() {
        assert!((Element::H.atomic_weight() - 1.008).abs() < 1e-9);
        assert!((Element::C.atomic_weight() - 12.011).abs() < 1e-9);
        assert!((Element::O.atomic_weight() - 15.999).abs() < 1e-9);
        assert!((Element::Cl.atomic_weight() - 35.45).abs() < 1e-9);
    }

    #[test]
    fn weights_all_positive() {
        for n in 1u8..=118 {
            assert!(Element::from_atomic_num(n).unwrap().atomic_weight() > 0.0);
        }
    }

    #[test]
    fn default_valences_organic() {
        assert_eq!(Element::C.default_valences(), &[4]);
        assert_eq!(Element::N.default_valences(), &[3, 5]);
        assert_eq!(Element::O.default_valences(), &[2]);
        assert_eq!(Element::S.default_valences(), &[2, 4, 6]);
        assert_eq!(Element::I.default_valences(), &[1, 3, 5, 7]);
    }

    #[test]
    fn max_valence() {
        assert_eq!(Element::C.max_valence(), Some(4));
        assert_eq!(Element::S.max_valence(), Some(6));
        assert_eq!(Element::Fe.max_valence(), None);
    }

    #[test]
    fn organic_subset() {
        assert!(Element::C.is_organic_subset());
        assert!(Element::Br.is_organic_subset());
        assert!(!Element::Fe.is_organic_subset());
        assert!(!Element::H.is_organic_subset());
    }
}
