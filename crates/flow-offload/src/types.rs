//! Core types shared across the flow-offload layer.
//!
//! The central type is [`MatchParamBlock`], the fixed-size binary buffer in
//! the NIC's own match-field layout. The same block format serves as a mask
//! (which bits participate in matching) on a matcher and as a value (what
//! the selected bits must equal) on a flow.

use std::fmt;

use crate::error::{FlowError, FlowResult};

/// Size in bytes of the hardware match-parameter block.
///
/// This is a property of the NIC's flow-table-entry layout, fixed for the
/// platform; it is never derived from caller input.
pub const MATCH_PARAM_BYTES: usize = 512;

/// Fixed-size opaque match-parameter buffer.
///
/// The layer never interprets the contents; it only copies them verbatim
/// into hardware objects. Equality is byte equality.
#[derive(Clone, PartialEq, Eq)]
pub struct MatchParamBlock(Box<[u8; MATCH_PARAM_BYTES]>);

impl MatchParamBlock {
    /// Returns an all-zero block (matches nothing as a mask).
    pub fn zeroed() -> Self {
        MatchParamBlock(Box::new([0u8; MATCH_PARAM_BYTES]))
    }

    /// Builds a block from a full-size byte array.
    pub fn from_array(bytes: [u8; MATCH_PARAM_BYTES]) -> Self {
        MatchParamBlock(Box::new(bytes))
    }

    /// Builds a block by copying `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::SizeMismatch`] unless `bytes` is exactly
    /// [`MATCH_PARAM_BYTES`] long. Undersized and oversized buffers are
    /// rejected rather than padded or truncated.
    pub fn from_slice(bytes: &[u8]) -> FlowResult<Self> {
        if bytes.len() != MATCH_PARAM_BYTES {
            return Err(FlowError::SizeMismatch {
                expected: MATCH_PARAM_BYTES,
                actual: bytes.len(),
            });
        }
        let mut block = [0u8; MATCH_PARAM_BYTES];
        block.copy_from_slice(bytes);
        Ok(MatchParamBlock(Box::new(block)))
    }

    /// Returns the block contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    /// Returns the block contents mutably, for callers assembling a mask or
    /// value in place.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0[..]
    }

    /// Returns the block size in bytes (always [`MATCH_PARAM_BYTES`]).
    pub fn len(&self) -> usize {
        MATCH_PARAM_BYTES
    }

    /// Returns true if every byte is zero.
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Default for MatchParamBlock {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for MatchParamBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 512 bytes of hex is useless in logs; show the prefix only.
        write!(f, "MatchParamBlock(")?;
        for b in &self.0[..8] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "..; {} bytes)", MATCH_PARAM_BYTES)
    }
}

/// Non-owning handle to a device context owned by the device layer.
///
/// The flow-offload layer records this on every matcher but never
/// dereferences it; context teardown is the device layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DevCtxHandle(u64);

impl DevCtxHandle {
    pub const fn from_raw(raw: u64) -> Self {
        DevCtxHandle(raw)
    }

    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DevCtxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "devctx:0x{:x}", self.0)
    }
}

/// Non-owning handle to a hardware receive target (redirect destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiveTargetHandle(u64);

impl ReceiveTargetHandle {
    pub const fn from_raw(raw: u64) -> Self {
        ReceiveTargetHandle(raw)
    }

    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Placement/direction request for one flow rule.
///
/// Validated as a unit by [`crate::api::attr::validate_attributes`]; the
/// caller owns it and it is immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowAttributes {
    /// Flow table group. Only group 0 is supported at this tier.
    pub group: u32,
    /// Rule priority within the group. Only priority 0 is supported.
    pub priority: u32,
    /// Apply to received traffic. Required at this tier.
    pub ingress: bool,
    /// Apply to transmitted traffic. Not supported at this tier.
    pub egress: bool,
    /// Transfer (switchdev) rule. Not supported at this tier.
    pub transfer: bool,
}

/// Matcher criteria kind.
///
/// Only [`MatchCriteria::Normal`] is accepted by matcher creation; the
/// remaining kinds exist in the device API but are rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchCriteria {
    /// Normal rule, matching on the fields selected by the mask.
    #[default]
    Normal,
    /// Default catch-all rule.
    AllDefault,
    /// Multicast default rule.
    McDefault,
    /// Sniffer rule.
    Sniffer,
}

impl fmt::Display for MatchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::AllDefault => write!(f, "ALL_DEFAULT"),
            Self::McDefault => write!(f, "MC_DEFAULT"),
            Self::Sniffer => write!(f, "SNIFFER"),
        }
    }
}

/// Input to matcher creation. Not retained after the call; the mask is
/// copied into the matcher.
#[derive(Debug, Clone)]
pub struct MatcherSpec {
    pub criteria: MatchCriteria,
    pub mask: MatchParamBlock,
}

impl MatcherSpec {
    /// Spec for a normal matcher with the given mask.
    pub fn normal(mask: MatchParamBlock) -> Self {
        MatcherSpec {
            criteria: MatchCriteria::Normal,
            mask,
        }
    }
}

/// Table placement decided by attribute validation.
///
/// This tier only ever yields [`TablePlacement::Root`]; the non-root
/// outcome exists so backends that gain non-root table support do not need
/// a contract change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TablePlacement {
    /// Rule goes in the root flow table.
    Root,
    /// Rule goes in a non-root flow table.
    NonRoot,
}

impl fmt::Display for TablePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::NonRoot => write!(f, "non-root"),
        }
    }
}
