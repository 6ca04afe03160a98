// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame draw pass and its output.

use alloc::vec::Vec;

use kurbo::Rect;

use super::behavior::DrawCx;
use super::id::{ContentId, INVALID, NodeId};
use super::store::SceneTree;
use crate::error::DrawError;
use crate::trace::{PassBeginEvent, PassEndEvent, PassKind, Tracer};

/// A single draw command.
///
/// Items are produced in back-to-front order, matching the tree's traversal
/// order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    /// The node this item originates from.
    pub node: NodeId,
    /// The node's draw order in the pass that produced the item.
    pub draw_order: u64,
    /// Where to draw, in screen coordinates.
    pub rect: Rect,
    /// What to draw (`None` for grouping nodes).
    pub content: Option<ContentId>,
}

/// An ordered list of draw commands.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Draw items in back-to-front order.
    pub items: Vec<DrawItem>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the list for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// State threaded through draw passes: the draw-order counter and the list
/// being filled.
///
/// The counter keeps increasing across passes, so draw orders are unique for
/// the lifetime of the context. Call [`reset`](Self::reset) before each
/// frame to number every frame from zero instead.
#[derive(Clone, Debug, Default)]
pub struct DrawContext {
    next_order: u64,
    list: DrawList,
}

impl DrawContext {
    /// Creates a context with the counter at zero and an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the counter to zero and clears the list.
    pub fn reset(&mut self) {
        self.next_order = 0;
        self.list.clear();
    }

    /// Clears the list but keeps the counter running.
    pub fn clear_list(&mut self) {
        self.list.clear();
    }

    /// The value the next drawn node will receive.
    #[must_use]
    pub fn next_order(&self) -> u64 {
        self.next_order
    }

    /// The draw list filled so far.
    #[must_use]
    pub fn list(&self) -> &DrawList {
        &self.list
    }

    /// Takes the draw list, leaving an empty one behind.
    pub fn take_list(&mut self) -> DrawList {
        core::mem::take(&mut self.list)
    }

    fn allocate_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

impl SceneTree {
    /// Runs the draw pass over every root.
    ///
    /// Invisible nodes are skipped together with their subtrees. Every drawn
    /// node takes the next value of the context's counter as its draw order
    /// and appends a [`DrawItem`] for itself before its behaviour draws and
    /// before its children, which follow in child-list order.
    ///
    /// The pass reads the geometry computed by the last
    /// [`update`](Self::update); it does not lay anything out.
    ///
    /// # Errors
    ///
    /// Returns the first behaviour draw failure. Items emitted before the
    /// failure stay in the context.
    pub fn draw(&mut self, cx: &mut DrawContext) -> Result<(), DrawError> {
        self.draw_traced(cx, &mut Tracer::none())
    }

    /// Like [`draw`](Self::draw), reporting pass events to `tracer`.
    ///
    /// # Errors
    ///
    /// See [`draw`](Self::draw).
    pub fn draw_traced(
        &mut self,
        cx: &mut DrawContext,
        tracer: &mut Tracer<'_>,
    ) -> Result<(), DrawError> {
        tracer.pass_begin(&PassBeginEvent {
            frame_index: self.frame_index,
            pass: PassKind::Draw,
        });
        let first = cx.next_order;

        let mut result = Ok(());
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            result = self.draw_node(root, cx);
            if result.is_err() {
                break;
            }
        }

        tracer.pass_end(&PassEndEvent {
            frame_index: self.frame_index,
            pass: PassKind::Draw,
            nodes: u32::try_from(cx.next_order - first).unwrap_or(u32::MAX),
            completed: result.is_ok(),
        });
        result
    }

    fn draw_node(&mut self, idx: u32, cx: &mut DrawContext) -> Result<(), DrawError> {
        let i = idx as usize;
        if !self.visible[i] {
            return Ok(());
        }

        let order = cx.allocate_order();
        self.draw_order[i] = Some(order);
        let node = self.handle(idx);
        let rect = self.global_rect[i];
        cx.list.items.push(DrawItem {
            node,
            draw_order: order,
            rect,
            content: self.content[i],
        });

        if let Some(behavior) = &self.behavior[i] {
            behavior
                .draw(&mut DrawCx {
                    node,
                    rect,
                    draw_order: order,
                    list: &mut cx.list,
                })
                .map_err(|source| DrawError::BehaviorFailed { node, source })?;
        }

        let mut child = self.first_child[i];
        while child != INVALID {
            self.draw_node(child, cx)?;
            child = self.next_sibling[child as usize];
        }
        Ok(())
    }
}
