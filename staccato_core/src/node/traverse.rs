// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::id::{INVALID, NodeId};
use super::store::SceneTree;

/// An iterator over the direct children of a node.
///
/// Created by [`SceneTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a SceneTree,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a SceneTree, first: u32) -> Self {
        Self {
            tree,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.tree.next_sibling[idx as usize];
        Some(self.tree.handle(idx))
    }
}

/// A depth-first pre-order iterator over the descendants of a node.
///
/// Created by [`SceneTree::descendants`]. The starting node itself is not
/// yielded.
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a SceneTree,
    root: u32,
    current: u32,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a SceneTree, root: u32) -> Self {
        Self {
            tree,
            root,
            current: tree.first_child[root as usize],
        }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        let tree = self.tree;

        let first = tree.first_child[idx as usize];
        self.current = if first != INVALID {
            first
        } else {
            // Climb until a next sibling exists, stopping at the root.
            let mut n = idx;
            loop {
                if n == self.root {
                    break INVALID;
                }
                let next = tree.next_sibling[n as usize];
                if next != INVALID {
                    break next;
                }
                n = tree.parent[n as usize];
            }
        };

        Some(tree.handle(idx))
    }
}
