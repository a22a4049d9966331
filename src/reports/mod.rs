/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The conclusion is derivable from the premises.
    Proved,

    /// No derivation of the conclusion was found, and some premises are missing.
    Unproved,

    /// Derivability of the conclusion is unknown, e.g. as no search has been made.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Searching => {
                Self::Unknown
            }
            ContextState::Proved => Self::Proved,
            ContextState::Unproved => Self::Unproved,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proved => write!(f, "Proved"),
            Self::Unproved => write!(f, "Unproved"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
