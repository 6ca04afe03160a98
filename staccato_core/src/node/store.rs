// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, and property
//! management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};
use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::behavior::Behavior;
use super::id::{ContentId, INVALID, NodeId};
use super::traverse::{Children, Descendants};
use crate::config::SceneConfig;
use crate::dirty;
use crate::error::StructuralError;
use crate::geometry::{Alignment, Dim, Dim2};

/// Struct-of-arrays storage for every node of a scene.
///
/// Nodes are addressed by [`NodeId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Destroyed nodes are recycled via a free list,
/// and generation counters prevent stale handle access.
///
/// Parentless nodes are *roots*. They are kept in an ordered list that is
/// also their relative draw order.
pub struct SceneTree {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,
    pub(crate) roots: Vec<u32>,

    // -- Local properties (set by callers) --
    pub(crate) position: Vec<Dim2>,
    pub(crate) size: Vec<Dim2>,
    pub(crate) alignment: Vec<Alignment>,
    pub(crate) visible: Vec<bool>,
    pub(crate) propagate_visibility: Vec<bool>,
    pub(crate) content: Vec<Option<ContentId>>,
    pub(crate) label: Vec<Option<String>>,
    pub(crate) behavior: Vec<Option<Box<dyn Behavior>>>,

    // -- Computed properties (written by update and draw) --
    pub(crate) local_rect: Vec<Rect>,
    pub(crate) global_rect: Vec<Rect>,
    pub(crate) draw_order: Vec<Option<u64>>,
    pub(crate) needs_layout: Vec<bool>,
    /// Update pass number (`frame_index + 1`) that last visited the slot.
    pub(crate) visited: Vec<u64>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,
    pub(crate) live: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
    /// Set when an aborted pass drained a topology change nobody saw.
    pub(crate) topology_carry: bool,

    // -- Scratch --
    pub(crate) root_scratch: Vec<NodeId>,

    pub(crate) config: SceneConfig,
    pub(crate) frame_index: u64,
}

impl fmt::Debug for SceneTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneTree")
            .field("live", &self.live)
            .field("roots", &self.roots)
            .field("config", &self.config)
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree {
    /// Creates an empty tree with the default [`SceneConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Creates an empty tree with the given configuration.
    #[must_use]
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            roots: Vec::new(),
            position: Vec::new(),
            size: Vec::new(),
            alignment: Vec::new(),
            visible: Vec::new(),
            propagate_visibility: Vec::new(),
            content: Vec::new(),
            label: Vec::new(),
            behavior: Vec::new(),
            local_rect: Vec::new(),
            global_rect: Vec::new(),
            draw_order: Vec::new(),
            needs_layout: Vec::new(),
            visited: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            live: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
            topology_carry: false,
            root_scratch: Vec::new(),
            config,
            frame_index: 0,
        }
    }

    /// Returns the tree's configuration.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Changes the viewport size, the reference frame of every root.
    ///
    /// Marks every root (and so every node) for recompute.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.config.viewport = viewport;
        for i in 0..self.roots.len() {
            let root = self.roots[i];
            self.dirty.mark_with(root, dirty::LAYOUT, &EagerPolicy);
        }
    }

    /// Returns the viewport as a rectangle anchored at the origin.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.config.viewport.width, self.config.viewport.height)
    }

    /// Returns the number of completed update passes.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    // -- Allocation API --

    /// Creates a new root node and returns its handle.
    ///
    /// The node starts at position zero with size zero, `TopLeft` alignment,
    /// visible, with no content and no behaviour. It is laid out on the next
    /// update.
    pub fn create_node(&mut self) -> NodeId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            self.position[i] = Dim2::ZERO;
            self.size[i] = Dim2::ZERO;
            self.alignment[i] = Alignment::default();
            self.visible[i] = true;
            self.propagate_visibility[i] = false;
            self.content[i] = None;
            self.label[i] = None;
            self.behavior[i] = None;
            self.local_rect[i] = Rect::ZERO;
            self.global_rect[i] = Rect::ZERO;
            self.draw_order[i] = None;
            self.needs_layout[i] = true;
            self.visited[i] = 0;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.position.push(Dim2::ZERO);
            self.size.push(Dim2::ZERO);
            self.alignment.push(Alignment::default());
            self.visible.push(true);
            self.propagate_visibility.push(false);
            self.content.push(None);
            self.label.push(None);
            self.behavior.push(None);
            self.local_rect.push(Rect::ZERO);
            self.global_rect.push(Rect::ZERO);
            self.draw_order.push(None);
            self.needs_layout.push(true);
            self.visited.push(0);
            self.generation.push(0);
            idx
        };

        self.live += 1;
        self.roots.push(idx);
        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::LAYOUT);
        self.dirty.mark(idx, dirty::TOPOLOGY);

        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a node and its whole subtree, freeing their slots for reuse.
    ///
    /// Descendants are destroyed first (post-order), then the node is
    /// detached from its parent. Every handle into the subtree becomes stale
    /// and any installed behaviours are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy(&mut self, id: NodeId) {
        self.validate(id);
        self.destroy_slot(id.idx);
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        id.idx < self.len && self.generation[id.idx as usize] == id.generation
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live as usize
    }

    /// Returns whether the tree has no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // -- Topology API --

    /// Makes `child` the last child of `parent`.
    ///
    /// If `child` already has a parent (or is a root) it is removed from
    /// there first, so a node is never a member of two child lists.
    /// Reassigning the current parent moves `child` to the end of the list.
    /// The subtree is marked for recompute under its new ancestry.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::SelfParent`] if `child == parent` and
    /// [`StructuralError::Cycle`] if `parent` is a descendant of `child`.
    /// The tree is unchanged in both cases.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) -> Result<(), StructuralError> {
        self.validate(child);
        self.validate(parent);
        if child == parent {
            return Err(StructuralError::SelfParent { node: child });
        }
        if self.is_ancestor(child.idx, parent.idx) {
            return Err(StructuralError::Cycle { child, parent });
        }

        let c = child.idx;
        let p = parent.idx;
        let old_p = self.parent[c as usize];
        if old_p != INVALID {
            self.unlink_from_parent(c);
            self.dirty.remove_dependency(c, old_p, dirty::LAYOUT);
            self.dirty.mark(old_p, dirty::TOPOLOGY);
        } else {
            self.remove_root(c);
        }

        self.link_last(c, p);
        let _ = self.dirty.add_dependency(c, p, dirty::LAYOUT);
        self.dirty.mark_with(c, dirty::LAYOUT, &EagerPolicy);
        self.dirty.mark(p, dirty::TOPOLOGY);
        Ok(())
    }

    /// Removes `child` from its parent and makes it a root again, keeping
    /// its subtree intact.
    ///
    /// This is a temporary unparent: the node stays alive and can be given
    /// a new parent later. Use [`destroy`](Self::destroy) to tear the
    /// subtree down. Detaching a root does nothing.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn detach(&mut self, child: NodeId) {
        self.validate(child);
        let c = child.idx;
        let p = self.parent[c as usize];
        if p == INVALID {
            return;
        }
        self.unlink_from_parent(c);
        self.dirty.remove_dependency(c, p, dirty::LAYOUT);
        self.roots.push(c);
        self.dirty.mark_with(c, dirty::LAYOUT, &EagerPolicy);
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == INVALID {
            None
        } else {
            Some(self.handle(p))
        }
    }

    /// Returns an iterator over the direct children of a node, back to
    /// front.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the number of direct children of a node.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Returns a pre-order iterator over every descendant of a node, not
    /// including the node itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        self.validate(id);
        Descendants::new(self, id.idx)
    }

    /// Returns the root nodes in draw order.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        self.roots.iter().map(|&idx| self.handle(idx)).collect()
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the relative position of a node.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Dim2 {
        self.validate(id);
        self.position[id.idx as usize]
    }

    /// Returns the relative size of a node.
    #[must_use]
    pub fn size(&self, id: NodeId) -> Dim2 {
        self.validate(id);
        self.size[id.idx as usize]
    }

    /// Returns the alignment of a node.
    #[must_use]
    pub fn alignment(&self, id: NodeId) -> Alignment {
        self.validate(id);
        self.alignment[id.idx as usize]
    }

    /// Returns whether a node is visible.
    ///
    /// A visible node under an invisible ancestor is still skipped when
    /// drawing.
    #[must_use]
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.validate(id);
        self.visible[id.idx as usize]
    }

    /// Returns whether [`set_visible`](Self::set_visible) on this node
    /// cascades to its descendants.
    #[must_use]
    pub fn propagates_visibility(&self, id: NodeId) -> bool {
        self.validate(id);
        self.propagate_visibility[id.idx as usize]
    }

    /// Returns the content shown by a node.
    #[must_use]
    pub fn content(&self, id: NodeId) -> Option<ContentId> {
        self.validate(id);
        self.content[id.idx as usize]
    }

    /// Returns the diagnostic label of a node.
    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.validate(id);
        self.label[id.idx as usize].as_deref()
    }

    /// Returns the rectangle of a node before alignment.
    ///
    /// Only valid after [`update`](Self::update) has been called.
    #[must_use]
    pub fn local_rect(&self, id: NodeId) -> Rect {
        self.validate(id);
        self.local_rect[id.idx as usize]
    }

    /// Returns the absolute screen rectangle of a node.
    ///
    /// Only valid after [`update`](Self::update) has been called.
    #[must_use]
    pub fn global_rect(&self, id: NodeId) -> Rect {
        self.validate(id);
        self.global_rect[id.idx as usize]
    }

    /// Returns the absolute screen position (top-left corner) of a node.
    #[must_use]
    pub fn absolute_position(&self, id: NodeId) -> Point {
        self.global_rect(id).origin()
    }

    /// Returns the absolute size of a node.
    #[must_use]
    pub fn absolute_size(&self, id: NodeId) -> Size {
        self.global_rect(id).size()
    }

    /// Returns the draw order assigned to a node by the last draw pass that
    /// reached it, or `None` if it has never been drawn.
    #[must_use]
    pub fn draw_order(&self, id: NodeId) -> Option<u64> {
        self.validate(id);
        self.draw_order[id.idx as usize]
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the relative position of a node.
    pub fn set_position(&mut self, id: NodeId, position: Dim2) {
        self.validate(id);
        self.position[id.idx as usize] = position;
        self.mark_layout(id.idx);
    }

    /// Sets the horizontal relative position of a node.
    pub fn set_position_x(&mut self, id: NodeId, x: Dim) {
        self.validate(id);
        self.position[id.idx as usize].x = x;
        self.mark_layout(id.idx);
    }

    /// Sets the vertical relative position of a node.
    pub fn set_position_y(&mut self, id: NodeId, y: Dim) {
        self.validate(id);
        self.position[id.idx as usize].y = y;
        self.mark_layout(id.idx);
    }

    /// Sets the relative size of a node.
    pub fn set_size(&mut self, id: NodeId, size: Dim2) {
        self.validate(id);
        self.size[id.idx as usize] = size;
        self.mark_layout(id.idx);
    }

    /// Sets the relative width of a node.
    pub fn set_size_x(&mut self, id: NodeId, x: Dim) {
        self.validate(id);
        self.size[id.idx as usize].x = x;
        self.mark_layout(id.idx);
    }

    /// Sets the relative height of a node.
    pub fn set_size_y(&mut self, id: NodeId, y: Dim) {
        self.validate(id);
        self.size[id.idx as usize].y = y;
        self.mark_layout(id.idx);
    }

    /// Sets the fraction of the reference width added to a node's width,
    /// keeping its pixel offset.
    pub fn set_scale_x(&mut self, id: NodeId, scale: f64) {
        self.validate(id);
        self.size[id.idx as usize].x.scale = scale;
        self.mark_layout(id.idx);
    }

    /// Sets the fraction of the reference height added to a node's height,
    /// keeping its pixel offset.
    pub fn set_scale_y(&mut self, id: NodeId, scale: f64) {
        self.validate(id);
        self.size[id.idx as usize].y.scale = scale;
        self.mark_layout(id.idx);
    }

    /// Sets the alignment of a node.
    pub fn set_alignment(&mut self, id: NodeId, alignment: Alignment) {
        self.validate(id);
        self.alignment[id.idx as usize] = alignment;
        self.mark_layout(id.idx);
    }

    /// Shows or hides a node.
    ///
    /// If the node [propagates visibility](Self::set_propagate_visibility),
    /// every descendant gets the same value.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.validate(id);
        self.visible[id.idx as usize] = visible;
        if self.propagate_visibility[id.idx as usize] {
            let subtree: Vec<u32> = self.descendants(id).map(NodeId::index).collect();
            for idx in subtree {
                self.visible[idx as usize] = visible;
            }
        }
    }

    /// Sets whether [`set_visible`](Self::set_visible) on this node cascades
    /// to its descendants.
    pub fn set_propagate_visibility(&mut self, id: NodeId, propagate: bool) {
        self.validate(id);
        self.propagate_visibility[id.idx as usize] = propagate;
    }

    /// Sets the content shown by a node.
    pub fn set_content(&mut self, id: NodeId, content: Option<ContentId>) {
        self.validate(id);
        self.content[id.idx as usize] = content;
    }

    /// Sets the diagnostic label of a node.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        self.validate(id);
        self.label[id.idx as usize] = Some(label.into());
    }

    /// Removes the diagnostic label of a node, returning it.
    pub fn clear_label(&mut self, id: NodeId) -> Option<String> {
        self.validate(id);
        self.label[id.idx as usize].take()
    }

    /// Installs a behaviour on a node, returning the previous one.
    pub fn set_behavior(
        &mut self,
        id: NodeId,
        behavior: Box<dyn Behavior>,
    ) -> Option<Box<dyn Behavior>> {
        self.validate(id);
        self.behavior[id.idx as usize].replace(behavior)
    }

    /// Removes and returns the behaviour of a node.
    pub fn take_behavior(&mut self, id: NodeId) -> Option<Box<dyn Behavior>> {
        self.validate(id);
        self.behavior[id.idx as usize].take()
    }

    /// Returns whether a node has a behaviour installed.
    #[must_use]
    pub fn has_behavior(&self, id: NodeId) -> bool {
        self.validate(id);
        self.behavior[id.idx as usize].is_some()
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: NodeId) {
        assert!(
            self.is_alive(id),
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Builds the current handle for a live slot.
    pub(crate) fn handle(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Marks a node and all its descendants for recompute.
    fn mark_layout(&mut self, idx: u32) {
        self.dirty.mark_with(idx, dirty::LAYOUT, &EagerPolicy);
    }

    /// Returns whether `ancestor` is `idx` or one of its ancestors.
    fn is_ancestor(&self, ancestor: u32, idx: u32) -> bool {
        let mut cur = idx;
        while cur != INVALID {
            if cur == ancestor {
                return true;
            }
            cur = self.parent[cur as usize];
        }
        false
    }

    /// Appends `c` to the child list of `p` without touching dirty state.
    fn link_last(&mut self, c: u32, p: u32) {
        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    fn remove_root(&mut self, idx: u32) {
        if let Some(pos) = self.roots.iter().position(|&r| r == idx) {
            self.roots.remove(pos);
        }
    }

    /// Post-order teardown of the subtree at `idx`.
    fn destroy_slot(&mut self, idx: u32) {
        while self.first_child[idx as usize] != INVALID {
            let child = self.first_child[idx as usize];
            self.destroy_slot(child);
        }

        let p = self.parent[idx as usize];
        if p != INVALID {
            self.unlink_from_parent(idx);
            self.dirty.mark(p, dirty::TOPOLOGY);
        } else {
            self.remove_root(idx);
        }

        // Removes the dependency edge on the parent as well.
        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.behavior[idx as usize] = None;
        self.label[idx as usize] = None;

        self.live -= 1;
        self.free_list.push(idx);
        self.pending_removed.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
    }
}
