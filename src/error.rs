use thiserror::Error;

/// Errors reported by the selection engines.
///
/// `InvalidArgument` is a caller mistake and is always reported before the input is
/// touched. `InternalInvariant` means the bin or pivot bookkeeping went wrong; the
/// input is left permuted but with its original length and multiset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::InternalInvariant(msg.into())
    }

    /// True for precondition violations.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// True for bookkeeping defects inside an engine.
    pub fn is_internal_invariant(&self) -> bool {
        matches!(self, Error::InternalInvariant(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
