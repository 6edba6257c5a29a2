use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Nominal free energy of a G–C (or C–G) pair in kcal/mol.
pub const GC_PAIR_ENERGY: f64 = -3.0;
/// Nominal free energy of an A–U (or U–A) pair in kcal/mol.
pub const AU_PAIR_ENERGY: f64 = -2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nucleotide {
    A, // Adenine
    C, // Cytosine
    G, // Guanine
    U, // Uracil
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::U];

    /// Watson–Crick partner under the RNA alphabet (A↔U, G↔C).
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::U,
            Nucleotide::U => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::U => 'U',
        }
    }

    pub fn pairs_with(self, other: Nucleotide) -> bool {
        self.complement() == other
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Invalid RNA base '{symbol}': expected one of A, C, G, U")]
pub struct ParseNucleotideError {
    pub symbol: char,
}

impl TryFrom<char> for Nucleotide {
    type Error = ParseNucleotideError;
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'U' => Ok(Nucleotide::U),
            _ => Err(ParseNucleotideError { symbol }),
        }
    }
}

impl FromStr for Nucleotide {
    type Err = ParseNucleotideError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Nucleotide::try_from(c),
            (Some(c), Some(_)) => Err(ParseNucleotideError { symbol: c }),
            (None, _) => Err(ParseNucleotideError { symbol: '\0' }),
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PairFamily {
    GC, // G–C or C–G
    AU, // A–U or U–A
}

impl PairFamily {
    pub fn energy(self) -> f64 {
        match self {
            PairFamily::GC => GC_PAIR_ENERGY,
            PairFamily::AU => AU_PAIR_ENERGY,
        }
    }

    /// The two orientations of the family, 5' base first.
    pub fn orientations(self) -> [BasePair; 2] {
        match self {
            PairFamily::GC => [
                BasePair::new(Nucleotide::G, Nucleotide::C),
                BasePair::new(Nucleotide::C, Nucleotide::G),
            ],
            PairFamily::AU => [
                BasePair::new(Nucleotide::A, Nucleotide::U),
                BasePair::new(Nucleotide::U, Nucleotide::A),
            ],
        }
    }
}

impl fmt::Display for PairFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PairFamily::GC => "GC",
                PairFamily::AU => "AU",
            }
        )
    }
}

/// An oriented base pair: `five_prime` sits at the opening bracket, `three_prime` at the closing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BasePair {
    pub five_prime: Nucleotide,
    pub three_prime: Nucleotide,
}

impl BasePair {
    pub fn new(five_prime: Nucleotide, three_prime: Nucleotide) -> Self {
        Self {
            five_prime,
            three_prime,
        }
    }

    /// Returns `None` for anything other than A–U or G–C in either orientation.
    pub fn family(&self) -> Option<PairFamily> {
        if !self.five_prime.pairs_with(self.three_prime) {
            return None;
        }
        if self.five_prime.is_gc() {
            Some(PairFamily::GC)
        } else {
            Some(PairFamily::AU)
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.family().is_some()
    }

    pub fn energy(&self) -> Option<f64> {
        self.family().map(PairFamily::energy)
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.five_prime, self.three_prime)
    }
}
