use std::{fmt, str::FromStr};

/// Variable index as used by both AIGER and DIMACS. Variable 0 is the AIGER constant.
pub type VariableId = usize;

/// Signed DIMACS literal: `v` for a variable, `-v` for its negation. Never 0.
pub type DimacsLit = i64;

/// An AIGER literal, i.e. a variable together with an inversion bit.
///
/// Even numbers are positive literals (`2v`), odd numbers are inverted (`2v + 1`).
/// Literals 0 and 1 are the constants false and true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Lit(pub u64);

impl Lit {
    pub const FALSE: Lit = Lit(0);
    pub const TRUE: Lit = Lit(1);

    #[inline(always)]
    pub fn new(var: VariableId, inverted: bool) -> Self {
        Lit((var as u64) << 1 | inverted as u64)
    }

    /// Splits the literal into `(variable_id, inverted)`.
    #[inline(always)]
    pub fn decode(self) -> (VariableId, bool) {
        (self.var(), self.is_inverted())
    }

    #[inline(always)]
    pub fn var(self) -> VariableId {
        (self.0 >> 1) as VariableId
    }

    #[inline(always)]
    pub fn is_inverted(self) -> bool {
        (self.0 & 1) == 1
    }

    /// True for the constants false and true.
    #[inline(always)]
    pub fn is_const(self) -> bool {
        self.var() == 0
    }

    /// Returns the inverse (negation) of the literal.
    #[inline(always)]
    pub fn inverted(self) -> Self {
        Lit(self.0 ^ 1)
    }

    /// The signed DIMACS form of this literal. Meaningless for constants.
    #[inline(always)]
    pub fn to_dimacs(self) -> DimacsLit {
        let var = self.var() as DimacsLit;
        if self.is_inverted() { -var } else { var }
    }

    /// Evaluates the literal given a boolean value for its variable.
    pub fn eval_with(self, value: bool) -> bool {
        self.is_inverted() ^ value
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Lit {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Lit)
    }
}
