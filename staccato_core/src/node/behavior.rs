// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node hooks for widget code.
//!
//! Screens attach a [`Behavior`] to the nodes they own. The update pass calls
//! [`Behavior::update`] after the node's geometry is current and before its
//! children are visited; the draw pass calls [`Behavior::draw`] right after
//! the node's own [`DrawItem`] is emitted.

use kurbo::Rect;

use super::draw::{DrawItem, DrawList};
use super::id::{ContentId, NodeId};
use super::store::SceneTree;
use crate::error::BehaviorError;

/// Widget logic attached to a node.
///
/// Both hooks default to doing nothing.
pub trait Behavior {
    /// Called once per update pass.
    ///
    /// The behaviour is detached from its node for the duration of the call,
    /// so `cx.tree_mut()` may freely mutate the tree, including destroying
    /// this node. Geometry changes made here are laid out on the next pass.
    ///
    /// # Errors
    ///
    /// Failures are handled according to the tree's
    /// [`FailurePolicy`](crate::config::FailurePolicy).
    fn update(&mut self, cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
        _ = cx;
        Ok(())
    }

    /// Called once per draw pass while the node is visible.
    ///
    /// # Errors
    ///
    /// A failure aborts the draw pass.
    fn draw(&self, cx: &mut DrawCx<'_>) -> Result<(), BehaviorError> {
        _ = cx;
        Ok(())
    }
}

/// Context handed to [`Behavior::update`].
#[derive(Debug)]
pub struct UpdateCx<'a> {
    pub(crate) tree: &'a mut SceneTree,
    pub(crate) node: NodeId,
    pub(crate) delta: f64,
}

impl UpdateCx<'_> {
    /// The node being updated.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Seconds since the previous frame.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// The node's freshly computed global rectangle.
    #[must_use]
    pub fn global_rect(&self) -> Rect {
        self.tree.global_rect(self.node)
    }

    /// Read access to the tree.
    #[must_use]
    pub fn tree(&self) -> &SceneTree {
        &*self.tree
    }

    /// Write access to the tree.
    pub fn tree_mut(&mut self) -> &mut SceneTree {
        &mut *self.tree
    }
}

/// Context handed to [`Behavior::draw`].
#[derive(Debug)]
pub struct DrawCx<'a> {
    pub(crate) node: NodeId,
    pub(crate) rect: Rect,
    pub(crate) draw_order: u64,
    pub(crate) list: &'a mut DrawList,
}

impl DrawCx<'_> {
    /// The node being drawn.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The node's global rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The draw order assigned to the node in this pass.
    #[must_use]
    pub fn draw_order(&self) -> u64 {
        self.draw_order
    }

    /// Emits an extra item for this node, at the node's draw order.
    pub fn push(&mut self, content: Option<ContentId>, rect: Rect) {
        self.list.items.push(DrawItem {
            node: self.node,
            draw_order: self.draw_order,
            rect,
            content,
        });
    }
}
