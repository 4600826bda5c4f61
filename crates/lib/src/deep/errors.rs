//! Error types for the deep operations.
//!
//! Only merging has a precondition that can fail; every other traversal is
//! total. Conversion out of the node model (to JSON) is the other failure
//! source.

use thiserror::Error;

use crate::node::Kind;

/// Structured error types for deep operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DeepError {
    /// A top-level argument had the wrong shape for the operation
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// A float with no JSON representation (NaN or infinite)
    #[error("Cannot represent non-finite float {value} in JSON")]
    NonFiniteFloat { value: f64 },
}

impl DeepError {
    /// Builds the error `deep_merge` reports for non-mapping arguments
    pub(crate) fn merge_requires_mappings(base: Kind, overlay: Kind) -> Self {
        DeepError::InvalidArgument {
            operation: "deep_merge",
            reason: format!("both arguments must be mappings (got {base} and {overlay})"),
        }
    }

    /// Check if this error is an argument validation failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DeepError::InvalidArgument { .. })
    }

    /// Check if this error came from converting out of the node model
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, DeepError::NonFiniteFloat { .. })
    }

    /// Get the operation name if this is an argument error
    pub fn operation(&self) -> Option<&str> {
        match self {
            DeepError::InvalidArgument { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

// Conversion from DeepError to the main Error type
impl From<DeepError> for crate::Error {
    fn from(err: DeepError) -> Self {
        crate::Error::Deep(err)
    }
}
