//! Steering backend seam.
//!
//! Action and flow commitment vary by platform tier. Callers compile
//! against [`FlowBackend`]; bringing up real hardware support means adding
//! a new implementation of this trait, not changing any call site.
//!
//! [`Unimplemented`] is the tier with no steering engine: every operation
//! is a capability gate returning
//! [`FlowError::UnsupportedCapability`](crate::error::FlowError), which
//! callers can tell apart from a genuine runtime fault.

use crate::api::action::{Action, ActionDescriptor};
use crate::api::flow::Flow;
use crate::api::matcher::Matcher;
use crate::error::{Capability, FlowError, FlowResult};
use crate::types::MatchParamBlock;

/// Hardware commitment interface for actions and flows.
///
/// Implementations must be all-or-nothing: an error from any method means
/// no hardware state was created or destroyed. `create_flow` implementations
/// must confirm before committing that the value block matches the
/// matcher's mask size (guaranteed by [`MatchParamBlock`] for the platform
/// block type) and apply their own policy on empty action lists.
pub trait FlowBackend {
    /// Creates a flow action from a descriptor.
    fn create_action(&self, desc: &ActionDescriptor) -> FlowResult<Action>;

    /// Destroys a flow action. The action must not be referenced by any
    /// live flow; that ordering is the caller's responsibility.
    fn destroy_action(&self, action: Action) -> FlowResult<()>;

    /// Commits a flow rule binding `matcher`, `match_value`, and `actions`
    /// in order.
    fn create_flow<'a>(
        &self,
        matcher: &'a Matcher,
        match_value: MatchParamBlock,
        actions: &[&'a Action],
    ) -> FlowResult<Flow<'a>>;

    /// Removes a committed flow rule from hardware.
    fn destroy_flow(&self, flow: Flow<'_>) -> FlowResult<()>;
}

/// Backend for platform tiers without a steering engine.
///
/// Every operation fails with the matching capability gate and touches
/// nothing. Since no action or flow can ever be created through it, the
/// destroy paths can only be reached with objects minted elsewhere, and
/// they gate identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl FlowBackend for Unimplemented {
    fn create_action(&self, _desc: &ActionDescriptor) -> FlowResult<Action> {
        Err(FlowError::unsupported(Capability::FlowAction))
    }

    fn destroy_action(&self, _action: Action) -> FlowResult<()> {
        Err(FlowError::unsupported(Capability::FlowAction))
    }

    fn create_flow<'a>(
        &self,
        _matcher: &'a Matcher,
        _match_value: MatchParamBlock,
        _actions: &[&'a Action],
    ) -> FlowResult<Flow<'a>> {
        Err(FlowError::unsupported(Capability::FlowRule))
    }

    fn destroy_flow(&self, _flow: Flow<'_>) -> FlowResult<()> {
        Err(FlowError::unsupported(Capability::FlowRule))
    }
}
