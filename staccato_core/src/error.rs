// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tree mutation and the per-frame passes.
//!
//! Using a stale [`NodeId`] is a programming error and panics instead of
//! returning one of these.

use alloc::boxed::Box;

use crate::node::NodeId;

/// Error type returned by [`Behavior`](crate::node::Behavior) hooks.
pub type BehaviorError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// A parent assignment that would break the tree structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// A node was asked to become its own parent.
    #[error("{node:?} cannot be its own parent")]
    SelfParent {
        /// The node.
        node: NodeId,
    },
    /// The new parent is a descendant of the child.
    #[error("making {parent:?} the parent of {child:?} would create a cycle")]
    Cycle {
        /// The node being reparented.
        child: NodeId,
        /// The rejected parent, a descendant of `child`.
        parent: NodeId,
    },
}

/// Failure that aborted an update pass.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// A behaviour's update hook failed under
    /// [`FailurePolicy::Abort`](crate::config::FailurePolicy::Abort).
    #[error("update of {node:?} failed")]
    BehaviorFailed {
        /// The node whose behaviour failed.
        node: NodeId,
        /// The behaviour's error.
        #[source]
        source: BehaviorError,
    },
}

/// Failure that aborted a draw pass.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// A behaviour's draw hook failed.
    #[error("draw of {node:?} failed")]
    BehaviorFailed {
        /// The node whose behaviour failed.
        node: NodeId,
        /// The behaviour's error.
        #[source]
        source: BehaviorError,
    },
}
