/// Variant notions of equality between formulas, used when matching a node to a premise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Equality {
    /// The formulas have the same display.
    Textual = 0,

    /// The formulas are the same value.
    Structural,

    /// The formulas are equivalent.
    Semantic,
}

impl std::fmt::Display for Equality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Textual => write!(f, "textual"),
            Self::Structural => write!(f, "structural"),
            Self::Semantic => write!(f, "semantic"),
        }
    }
}

/// A notion of equality for each part of a norm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormEquality {
    /// Equality of inputs.
    pub input: Equality,

    /// Equality of outputs.
    pub output: Equality,
}

impl NormEquality {
    /// The same notion of equality for both parts of a norm.
    pub fn uniform(equality: Equality) -> Self {
        NormEquality {
            input: equality,
            output: equality,
        }
    }
}

impl std::fmt::Display for NormEquality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.input, self.output)
    }
}
