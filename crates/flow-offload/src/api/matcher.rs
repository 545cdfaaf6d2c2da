//! Flow matcher objects.
//!
//! A matcher encodes which packet fields participate in matching (the mask)
//! for a class of rules. It owns a private copy of the mask block, so the
//! caller's [`MatcherSpec`] is free to go away after creation.

use log::debug;

use crate::error::{FlowError, FlowResult};
use crate::types::{DevCtxHandle, MatchCriteria, MatchParamBlock, MatcherSpec};

/// Hardware flow matcher.
///
/// Holds a non-owning handle to the device context it was created against
/// and an owned copy of the match mask. The mask size is fixed at
/// construction and never changes.
///
/// A matcher must outlive every [`Flow`](crate::api::flow::Flow) built from
/// it; flows borrow the matcher, so the compiler enforces the ordering.
#[derive(Debug)]
pub struct Matcher {
    ctx: DevCtxHandle,
    mask: MatchParamBlock,
}

impl Matcher {
    /// Creates a matcher against the given device context.
    ///
    /// The spec's mask block is copied verbatim into the matcher. Creation
    /// is all-or-nothing: on error no object exists.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::UnsupportedCriteria`] if `spec.criteria` is
    /// anything other than [`MatchCriteria::Normal`].
    pub fn create(ctx: DevCtxHandle, spec: &MatcherSpec) -> FlowResult<Matcher> {
        if spec.criteria != MatchCriteria::Normal {
            return Err(FlowError::UnsupportedCriteria {
                criteria: spec.criteria,
            });
        }
        let matcher = Matcher {
            ctx,
            mask: spec.mask.clone(),
        };
        debug!("created matcher on {}", ctx);
        Ok(matcher)
    }

    /// Returns the device context this matcher was created against.
    pub fn ctx(&self) -> DevCtxHandle {
        self.ctx
    }

    /// Returns the match mask.
    pub fn mask(&self) -> &MatchParamBlock {
        &self.mask
    }

    /// Destroys the matcher, releasing everything it owns.
    ///
    /// Infallible at this tier: no hardware state survives a matcher, so
    /// destruction after a successful creation cannot fail.
    pub fn destroy(self) {
        debug!("destroyed matcher on {}", self.ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MATCH_PARAM_BYTES;
    use pretty_assertions::assert_eq;

    fn test_mask() -> MatchParamBlock {
        let mut mask = MatchParamBlock::zeroed();
        mask.as_mut_bytes()[0] = 0x00;
        mask.as_mut_bytes()[1] = 0x11;
        mask.as_mut_bytes()[MATCH_PARAM_BYTES - 1] = 0xff;
        mask
    }

    #[test]
    fn test_create_copies_mask_verbatim() {
        let ctx = DevCtxHandle::from_raw(1);
        let spec = MatcherSpec::normal(test_mask());
        let matcher = Matcher::create(ctx, &spec).unwrap();
        assert_eq!(matcher.mask().as_bytes(), spec.mask.as_bytes());
        assert_eq!(matcher.ctx(), ctx);
    }

    #[test]
    fn test_mask_is_an_independent_copy() {
        let ctx = DevCtxHandle::from_raw(1);
        let mut spec = MatcherSpec::normal(test_mask());
        let matcher = Matcher::create(ctx, &spec).unwrap();
        // Mutating the caller's spec after creation must not be visible
        // through the matcher.
        spec.mask.as_mut_bytes()[1] = 0x99;
        assert_eq!(matcher.mask().as_bytes()[1], 0x11);
    }

    #[test]
    fn test_non_normal_criteria_rejected() {
        let ctx = DevCtxHandle::from_raw(1);
        for criteria in [
            MatchCriteria::AllDefault,
            MatchCriteria::McDefault,
            MatchCriteria::Sniffer,
        ] {
            let spec = MatcherSpec {
                criteria,
                mask: MatchParamBlock::zeroed(),
            };
            assert_eq!(
                Matcher::create(ctx, &spec).unwrap_err(),
                FlowError::UnsupportedCriteria { criteria }
            );
        }
    }

    #[test]
    fn test_create_then_destroy() {
        let ctx = DevCtxHandle::from_raw(42);
        let matcher = Matcher::create(ctx, &MatcherSpec::normal(test_mask())).unwrap();
        matcher.destroy();
    }
}
