// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene tree data model.
//!
//! A *node* is one positionable, sizable, drawable element of a screen. Each
//! node has:
//!
//! - An identity ([`NodeId`]), a generational handle that becomes stale when
//!   the node is destroyed, preventing use-after-free bugs at the API level.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree. Child order is back-to-front draw order.
//! - **Relative geometry** set by the caller:
//!   [`position`](SceneTree::set_position), [`size`](SceneTree::set_size),
//!   and [`alignment`](SceneTree::set_alignment), plus
//!   [visibility](SceneTree::set_visible), [content](SceneTree::set_content),
//!   and an optional [`Behavior`].
//! - **Computed geometry** produced by [`update`](SceneTree::update):
//!   `local_rect` (size and offset resolved against the reference frame) and
//!   `global_rect` (the local rectangle aligned inside the reference frame).
//! - A **draw order** assigned by [`draw`](SceneTree::draw).
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles.
//!
//! # Ownership
//!
//! The tree owns every node. Three operations change membership:
//!
//! - [`set_parent`](SceneTree::set_parent) moves a node (with its subtree)
//!   under a new parent, rejecting cycles.
//! - [`detach`](SceneTree::detach) turns a node back into a root, keeping
//!   its subtree.
//! - [`destroy`](SceneTree::destroy) frees a node and its whole subtree.

mod behavior;
mod draw;
mod id;
mod store;
mod traverse;
mod update;

pub use behavior::{Behavior, DrawCx, UpdateCx};
pub use draw::{DrawContext, DrawItem, DrawList};
pub use id::{ContentId, INVALID, NodeId};
pub use store::SceneTree;
pub use traverse::{Children, Descendants};
pub use update::{UpdateFailure, UpdateReport};
