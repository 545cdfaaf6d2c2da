//! The flow-offload API surface.
//!
//! One submodule per object kind:
//!
//! - [`attr`]: flow-rule attribute validation
//! - [`matcher`]: matcher creation and destruction
//! - [`action`]: action objects and descriptors
//! - [`flow`]: flow rule objects
//!
//! [`FlowApi`] ties them together for one device context and one backend.

pub mod action;
pub mod attr;
pub mod flow;
pub mod matcher;

use log::trace;

use crate::backend::{FlowBackend, Unimplemented};
use crate::error::FlowResult;
use crate::types::{DevCtxHandle, FlowAttributes, MatchParamBlock, MatcherSpec, TablePlacement};

pub use action::{Action, ActionDescriptor};
pub use attr::validate_attributes;
pub use flow::Flow;
pub use matcher::Matcher;

/// Flow-offload operations for one device context.
///
/// Matcher creation is handled in-layer (it is a pure copy); action and
/// flow commitment are delegated to the backend `B`. The default backend is
/// [`Unimplemented`], the tier with no steering engine.
///
/// All operations are synchronous and take no internal locks; callers
/// serialize concurrent create/destroy against the same object.
pub struct FlowApi<B = Unimplemented> {
    ctx: DevCtxHandle,
    backend: B,
}

impl FlowApi<Unimplemented> {
    /// API for a tier without action/flow hardware support.
    pub fn unimplemented(ctx: DevCtxHandle) -> Self {
        FlowApi {
            ctx,
            backend: Unimplemented,
        }
    }
}

impl<B: FlowBackend> FlowApi<B> {
    /// Creates an API instance over the given backend.
    pub fn with_backend(ctx: DevCtxHandle, backend: B) -> Self {
        FlowApi { ctx, backend }
    }

    /// Returns the device context this API operates on.
    pub fn ctx(&self) -> DevCtxHandle {
        self.ctx
    }

    /// Validates flow-rule attributes. See [`attr::validate_attributes`].
    pub fn validate_attributes(&self, attrs: &FlowAttributes) -> FlowResult<TablePlacement> {
        attr::validate_attributes(attrs)
    }

    /// Creates a matcher from `spec`. See [`Matcher::create`].
    pub fn create_matcher(&self, spec: &MatcherSpec) -> FlowResult<Matcher> {
        Matcher::create(self.ctx, spec)
    }

    /// Destroys a matcher. Infallible; see [`Matcher::destroy`].
    pub fn destroy_matcher(&self, matcher: Matcher) {
        matcher.destroy()
    }

    /// Creates a flow action through the backend.
    pub fn create_action(&self, desc: &ActionDescriptor) -> FlowResult<Action> {
        trace!("create_action on {}: {:?}", self.ctx, desc);
        self.backend.create_action(desc)
    }

    /// Destroys a flow action through the backend.
    ///
    /// The action must not be referenced by any live flow.
    pub fn destroy_action(&self, action: Action) -> FlowResult<()> {
        trace!("destroy_action on {}: {}", self.ctx, action);
        self.backend.destroy_action(action)
    }

    /// Commits a flow rule through the backend.
    ///
    /// The matcher and every action must outlive the returned flow, which
    /// the borrow checker enforces.
    pub fn create_flow<'a>(
        &self,
        matcher: &'a Matcher,
        match_value: MatchParamBlock,
        actions: &[&'a Action],
    ) -> FlowResult<Flow<'a>> {
        trace!(
            "create_flow on {}: {} actions",
            self.ctx,
            actions.len()
        );
        self.backend.create_flow(matcher, match_value, actions)
    }

    /// Removes a flow rule through the backend.
    pub fn destroy_flow(&self, flow: Flow<'_>) -> FlowResult<()> {
        trace!("destroy_flow on {}", self.ctx);
        self.backend.destroy_flow(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Capability, FlowError};
    use crate::types::ReceiveTargetHandle;

    #[test]
    fn test_default_tier_gates_actions_and_flows() {
        let api = FlowApi::unimplemented(DevCtxHandle::from_raw(1));
        let desc = ActionDescriptor::RedirectToReceiveTarget {
            target: ReceiveTargetHandle::from_raw(0x10),
        };
        assert_eq!(
            api.create_action(&desc).unwrap_err(),
            FlowError::unsupported(Capability::FlowAction)
        );

        let matcher = api
            .create_matcher(&MatcherSpec::normal(MatchParamBlock::zeroed()))
            .unwrap();
        assert_eq!(
            api.create_flow(&matcher, MatchParamBlock::zeroed(), &[])
                .unwrap_err(),
            FlowError::unsupported(Capability::FlowRule)
        );
        api.destroy_matcher(matcher);
    }

    #[test]
    fn test_matcher_lifecycle_through_api() {
        let api = FlowApi::unimplemented(DevCtxHandle::from_raw(2));
        let matcher = api
            .create_matcher(&MatcherSpec::normal(MatchParamBlock::zeroed()))
            .unwrap();
        assert_eq!(matcher.ctx(), api.ctx());
        api.destroy_matcher(matcher);
    }
}
