// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene configuration.

use kurbo::Size;

/// What the update pass does when a node's behaviour fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailurePolicy {
    /// Record the failure in the [`UpdateReport`](crate::node::UpdateReport)
    /// and keep going with the node's children and later siblings.
    #[default]
    Continue,
    /// Stop the whole pass and return the failure as an error.
    ///
    /// Nodes the pass did not reach keep their pending layout work.
    Abort,
}

/// Tree-wide settings, fixed at construction except for the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Size of the output viewport, the reference frame for root nodes.
    pub viewport: Size,
    /// Handling of behaviour failures during the update pass.
    pub failure_policy: FailurePolicy,
    /// Whether the scale part of a node's position is resolved against the
    /// reference frame.
    ///
    /// Off by default: positions use only their pixel offset.
    pub apply_position_scale: bool,
}

impl SceneConfig {
    /// The default viewport size.
    pub const DEFAULT_VIEWPORT: Size = Size::new(1366.0, 768.0);

    /// Returns a copy with the given viewport.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Returns a copy with the given failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Returns a copy that applies (or ignores) position scale.
    #[must_use]
    pub const fn with_position_scale(mut self, apply: bool) -> Self {
        self.apply_position_scale = apply;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Self::DEFAULT_VIEWPORT,
            failure_policy: FailurePolicy::default(),
            apply_position_scale: false,
        }
    }
}
