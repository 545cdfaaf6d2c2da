//! Error types for flow-offload operations.
//!
//! Every fallible operation in this crate returns a [`FlowResult`]. There is
//! no shared "last error" slot: the error value itself carries the offending
//! field or capability so the caller can produce a precise diagnostic.

use std::fmt;
use thiserror::Error;

use crate::types::MatchCriteria;

/// Flow-rule attribute fields that can be rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrField {
    Group,
    Priority,
    Transfer,
    Ingress,
}

impl fmt::Display for AttrField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "group"),
            Self::Priority => write!(f, "priority"),
            Self::Transfer => write!(f, "transfer"),
            Self::Ingress => write!(f, "ingress"),
        }
    }
}

/// Hardware capabilities that may be absent at a given platform tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Steering actions (e.g. redirect to a receive target).
    FlowAction,
    /// Flow rule commitment to hardware.
    FlowRule,
    /// Placement in a non-root flow table.
    NonRootTable,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlowAction => write!(f, "flow action"),
            Self::FlowRule => write!(f, "flow rule"),
            Self::NonRootTable => write!(f, "non-root table"),
        }
    }
}

/// Error type for flow-offload operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A requested flow attribute is outside the supported subset.
    #[error("unsupported attribute {field}: {message}")]
    AttributeUnsupported {
        field: AttrField,
        message: &'static str,
    },

    /// The matcher criteria kind is not the one supported kind.
    #[error("unsupported matcher criteria: {criteria}")]
    UnsupportedCriteria { criteria: MatchCriteria },

    /// The requested object kind is not implemented at this platform tier.
    ///
    /// This is an intentional capability gate, not a runtime fault.
    #[error("capability not supported on this platform: {capability}")]
    UnsupportedCapability { capability: Capability },

    /// Allocation failed while constructing the named object.
    #[error("out of memory while creating {object}")]
    OutOfMemory { object: &'static str },

    /// A match-parameter block has the wrong size.
    #[error("match parameter size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

impl FlowError {
    /// Creates an attribute rejection for the given field.
    pub fn attribute_unsupported(field: AttrField, message: &'static str) -> Self {
        FlowError::AttributeUnsupported { field, message }
    }

    /// Creates a capability-gate rejection.
    pub fn unsupported(capability: Capability) -> Self {
        FlowError::UnsupportedCapability { capability }
    }

    /// Returns the rejected attribute field, if this is an attribute error.
    pub fn attr_field(&self) -> Option<AttrField> {
        match self {
            FlowError::AttributeUnsupported { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns true if retrying after freeing resources may succeed.
    ///
    /// Only allocation failures are retryable; everything else requires the
    /// caller to change the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FlowError::OutOfMemory { .. })
    }
}

/// Result type for flow-offload operations.
pub type FlowResult<T> = Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(FlowError::OutOfMemory { object: "matcher" }.is_retryable());
        assert!(!FlowError::unsupported(Capability::FlowRule).is_retryable());
        assert!(!FlowError::SizeMismatch {
            expected: 512,
            actual: 16
        }
        .is_retryable());
    }

    #[test]
    fn test_attr_field() {
        let err = FlowError::attribute_unsupported(AttrField::Group, "groups are not supported");
        assert_eq!(err.attr_field(), Some(AttrField::Group));
        assert_eq!(
            FlowError::unsupported(Capability::FlowAction).attr_field(),
            None
        );
    }

    #[test]
    fn test_display_carries_field() {
        let err = FlowError::attribute_unsupported(AttrField::Transfer, "transfer not supported");
        let msg = err.to_string();
        assert!(msg.contains("transfer"));
        assert!(msg.contains("transfer not supported"));
    }
}
