use std::fmt;

/// How loosely a token groups, counted in preceding separators.
///
/// Lower binds tighter. `Unbounded` only ever belongs to the bottom scope of a
/// parse, which makes it the root no operator can reach past. The derived
/// ordering puts every `Finite` value below `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Looseness {
    Finite(u32),
    Unbounded,
}

impl Looseness {
    pub const ZERO: Looseness = Looseness::Finite(0);

    /// One more separator seen. `Unbounded` absorbs increments.
    pub fn increment(self) -> Self {
        match self {
            Looseness::Finite(n) => Looseness::Finite(n.saturating_add(1)),
            Looseness::Unbounded => Looseness::Unbounded,
        }
    }
}

impl Default for Looseness {
    fn default() -> Self {
        Looseness::ZERO
    }
}

impl fmt::Display for Looseness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Looseness::Finite(n) => write!(f, "{n}"),
            Looseness::Unbounded => f.write_str("unbounded"),
        }
    }
}
