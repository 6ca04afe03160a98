// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The scene tree uses [`understory_dirty`] to propagate invalidation. Each
//! child carries a dependency edge on its parent in the [`LAYOUT`] channel.
//!
//! - [`LAYOUT`] is marked with [`EagerPolicy`](understory_dirty::EagerPolicy)
//!   by every geometry setter and by topology changes, so a mark on a node
//!   reaches all of its descendants. A node's global rectangle depends on
//!   every ancestor's, so the whole subtree must be recomputed.
//! - [`TOPOLOGY`] is marked on create, attach, detach, and destroy. It does
//!   not propagate; the update pass drains it to report whether the tree
//!   shape changed.
//!
//! Each [`SceneTree::update`](crate::node::SceneTree::update) drains both
//! channels.

use understory_dirty::Channel;

/// Geometry changed; the node and its descendants need a recompute.
pub const LAYOUT: Channel = Channel::new(0);

/// Tree shape changed.
pub const TOPOLOGY: Channel = Channel::new(1);
