//! Flow action objects.
//!
//! An action describes what happens to a packet that matches a flow. Actions
//! are created and destroyed independently of any flow; flows hold only
//! non-owning references, so one action may serve many flows.
//!
//! Whether any action kind can actually be created is a backend capability;
//! see [`crate::backend::FlowBackend`].

use std::fmt;

use crate::types::ReceiveTargetHandle;

/// Descriptor for the action to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionDescriptor {
    /// Redirect matching packets to a hardware receive target.
    RedirectToReceiveTarget { target: ReceiveTargetHandle },
}

/// Hardware flow action.
///
/// Opaque to callers; the raw handle is minted by the backend that created
/// the action and is meaningful only to that backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    raw: u64,
}

impl Action {
    /// Wraps a backend-minted raw handle.
    ///
    /// Intended for [`FlowBackend`](crate::backend::FlowBackend)
    /// implementations; callers obtain actions from
    /// [`FlowApi::create_action`](crate::api::FlowApi::create_action).
    pub fn from_raw(raw: u64) -> Self {
        Action { raw }
    }

    /// Returns the backend's raw handle.
    pub fn as_raw(&self) -> u64 {
        self.raw
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action:0x{:x}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_handle_round_trip() {
        let action = Action::from_raw(0xa1);
        assert_eq!(action.as_raw(), 0xa1);
        assert_eq!(action.to_string(), "action:0xa1");
    }

    #[test]
    fn test_descriptor_carries_target() {
        let desc = ActionDescriptor::RedirectToReceiveTarget {
            target: ReceiveTargetHandle::from_raw(3),
        };
        match desc {
            ActionDescriptor::RedirectToReceiveTarget { target } => {
                assert_eq!(target.as_raw(), 3);
            }
        }
    }
}
