// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of a scene tree.
//!
//! [`tree_to_json`] captures the relative inputs (position, size, alignment)
//! and the computed outputs (rects, draw order) of every live node, nested
//! the same way as the tree. Useful for golden files and bug reports.

use kurbo::Rect;
use serde_json::{Value, json};

use staccato_core::node::{NodeId, SceneTree};

/// Captures the whole tree as a JSON object.
///
/// The result has the shape
/// `{ "frame_index": u64, "viewport": [w, h], "roots": [node, ...] }`, where
/// each node carries its fields and a nested `"children"` array.
///
/// # Errors
///
/// Returns an error if a geometry value fails to serialize. Non-finite
/// floats are not errors; they become `null`.
pub fn tree_to_json(tree: &SceneTree) -> serde_json::Result<Value> {
    let viewport = tree.config().viewport;
    let roots = tree
        .roots()
        .into_iter()
        .map(|root| node_to_json(tree, root))
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(json!({
        "frame_index": tree.frame_index(),
        "viewport": [viewport.width, viewport.height],
        "roots": roots,
    }))
}

/// Captures one node and its subtree as a JSON object.
///
/// # Errors
///
/// See [`tree_to_json`].
pub fn node_to_json(tree: &SceneTree, id: NodeId) -> serde_json::Result<Value> {
    let children = tree
        .children(id)
        .map(|child| node_to_json(tree, child))
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(json!({
        "id": id.index(),
        "generation": id.generation(),
        "label": tree.label(id),
        "position": serde_json::to_value(tree.position(id))?,
        "size": serde_json::to_value(tree.size(id))?,
        "alignment": serde_json::to_value(tree.alignment(id))?,
        "visible": tree.is_visible(id),
        "content": tree.content(id).map(|c| c.0),
        "local_rect": rect_to_json(tree.local_rect(id)),
        "global_rect": rect_to_json(tree.global_rect(id)),
        "draw_order": tree.draw_order(id),
        "children": children,
    }))
}

fn rect_to_json(r: Rect) -> Value {
    json!([r.x0, r.y0, r.width(), r.height()])
}
