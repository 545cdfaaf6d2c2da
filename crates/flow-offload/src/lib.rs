//! Flow-offload abstraction for a NIC's classification/redirection engine.
//!
//! This crate sits between a generic packet-flow-rule API and the device
//! layer that owns hardware contexts. It does two things:
//!
//! 1. Validates that a requested rule's attributes fit the subset this
//!    platform tier supports.
//! 2. Manages the lifecycle of the opaque steering objects (matcher,
//!    action, flow) that together implement one accepted rule.
//!
//! # Architecture
//!
//! - [`types`]: match-parameter blocks, attributes, specs, and handles
//! - [`error`]: the error taxonomy and [`FlowResult`]
//! - [`api`]: attribute validation and the object managers
//! - [`backend`]: the hardware-commitment seam ([`FlowBackend`])
//!
//! Everything is synchronous and lock-free; one control-plane thread per
//! device context is assumed, and error recovery belongs to the caller.
//!
//! # Example
//!
//! ```
//! use flow_offload::{
//!     DevCtxHandle, FlowApi, FlowAttributes, MatchParamBlock, MatcherSpec,
//!     TablePlacement,
//! };
//!
//! let api = FlowApi::unimplemented(DevCtxHandle::from_raw(0x1));
//!
//! let attrs = FlowAttributes { ingress: true, ..Default::default() };
//! assert_eq!(api.validate_attributes(&attrs), Ok(TablePlacement::Root));
//!
//! let matcher = api
//!     .create_matcher(&MatcherSpec::normal(MatchParamBlock::zeroed()))
//!     .unwrap();
//! api.destroy_matcher(matcher);
//! ```

pub mod api;
pub mod backend;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use api::{
    validate_attributes, Action, ActionDescriptor, Flow, FlowApi, Matcher,
};
pub use backend::{FlowBackend, Unimplemented};
pub use error::{AttrField, Capability, FlowError, FlowResult};
pub use types::{
    DevCtxHandle, FlowAttributes, MatchCriteria, MatchParamBlock, MatcherSpec,
    ReceiveTargetHandle, TablePlacement, MATCH_PARAM_BYTES,
};
