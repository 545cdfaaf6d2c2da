//! Flow rule objects.

use std::fmt;

use crate::api::action::Action;
use crate::api::matcher::Matcher;
use crate::types::MatchParamBlock;

/// A committed flow rule.
///
/// A flow binds a matcher (which fields to look at), a match value (what
/// those fields must equal), and an ordered action list. It owns only the
/// value block; the matcher and actions are borrowed, so they must outlive
/// the flow and may be shared by other flows.
///
/// The value block has the same fixed size as the matcher's mask by
/// construction of [`MatchParamBlock`].
pub struct Flow<'a> {
    matcher: &'a Matcher,
    match_value: MatchParamBlock,
    actions: Vec<&'a Action>,
}

impl<'a> Flow<'a> {
    /// Binds a flow together.
    ///
    /// Intended for [`FlowBackend`](crate::backend::FlowBackend)
    /// implementations, which call this only after the hardware has
    /// accepted the rule; callers obtain flows from
    /// [`FlowApi::create_flow`](crate::api::FlowApi::create_flow).
    pub fn new(
        matcher: &'a Matcher,
        match_value: MatchParamBlock,
        actions: Vec<&'a Action>,
    ) -> Self {
        Flow {
            matcher,
            match_value,
            actions,
        }
    }

    /// Returns the matcher this flow was built from.
    pub fn matcher(&self) -> &Matcher {
        self.matcher
    }

    /// Returns the match value block.
    pub fn match_value(&self) -> &MatchParamBlock {
        &self.match_value
    }

    /// Returns the actions in application order.
    pub fn actions(&self) -> &[&'a Action] {
        &self.actions
    }
}

impl fmt::Debug for Flow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("matcher", &self.matcher)
            .field("match_value", &self.match_value)
            .field("actions", &self.actions.len())
            .finish()
    }
}
