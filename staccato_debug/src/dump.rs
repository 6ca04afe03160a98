// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented text dump of a scene tree.
//!
//! One line per live node, children indented two spaces under their parent,
//! roots in root order:
//!
//! ```text
//! song_select NodeId(0@gen0) [0.0, 0.0 1366.0x768.0] TopLeft order=0
//!   panel NodeId(1@gen0) [483.0, 234.0 400.0x300.0] MidCenter order=1
//!     banner NodeId(2@gen0) [483.0, 234.0 400.0x60.0] TopLeft hidden
//! ```

use std::io::{self, Write};

use staccato_core::node::{NodeId, SceneTree};

/// Writes every tree in `tree` to `writer`.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_tree(tree: &SceneTree, writer: &mut dyn Write) -> io::Result<()> {
    for root in tree.roots() {
        write_node(tree, root, 0, writer)?;
    }
    Ok(())
}

/// Writes the subtree rooted at `id` to `writer`, starting at indent zero.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_subtree(tree: &SceneTree, id: NodeId, writer: &mut dyn Write) -> io::Result<()> {
    write_node(tree, id, 0, writer)
}

fn write_node(
    tree: &SceneTree,
    id: NodeId,
    depth: usize,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let r = tree.global_rect(id);
    write!(
        writer,
        "{:indent$}{} {id:?} [{:.1}, {:.1} {:.1}x{:.1}] {:?}",
        "",
        tree.label(id).unwrap_or("node"),
        r.x0,
        r.y0,
        r.width(),
        r.height(),
        tree.alignment(id),
        indent = depth * 2,
    )?;
    if let Some(content) = tree.content(id) {
        write!(writer, " content={}", content.0)?;
    }
    if !tree.is_visible(id) {
        write!(writer, " hidden")?;
    } else if let Some(order) = tree.draw_order(id) {
        write!(writer, " order={order}")?;
    }
    writeln!(writer)?;

    for child in tree.children(id) {
        write_node(tree, child, depth + 1, writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use staccato_core::geometry::{Alignment, Dim2};
    use staccato_core::node::{ContentId, DrawContext};

    fn dump(tree: &SceneTree) -> String {
        let mut out = Vec::new();
        write_tree(tree, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn nested_nodes_are_indented() {
        let mut tree = SceneTree::new();
        let screen = tree.create_node();
        tree.set_label(screen, "screen");
        let panel = tree.create_node();
        tree.set_label(panel, "panel");
        tree.set_parent(panel, screen).unwrap();
        let banner = tree.create_node();
        tree.set_parent(banner, panel).unwrap();

        let lines: Vec<String> = dump(&tree).lines().map(str::to_owned).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("screen "), "got: {}", lines[0]);
        assert!(lines[1].starts_with("  panel "), "got: {}", lines[1]);
        assert!(lines[2].starts_with("    node "), "got: {}", lines[2]);
    }

    #[test]
    fn line_shows_geometry_and_draw_state() {
        let mut tree = SceneTree::new();
        let cover = tree.create_node();
        tree.set_label(cover, "cover");
        tree.set_position(cover, Dim2::px(10.0, 20.0));
        tree.set_size(cover, Dim2::px(64.0, 32.0));
        tree.set_content(cover, Some(ContentId(7)));
        let hidden = tree.create_node();
        tree.set_alignment(hidden, Alignment::BotRight);
        tree.set_visible(hidden, false);

        let _ = tree.update(0.0).unwrap();
        tree.draw(&mut DrawContext::new()).unwrap();

        let out = dump(&tree);
        let mut lines = out.lines();
        let first = lines.next().unwrap();
        assert!(
            first.ends_with("[10.0, 20.0 64.0x32.0] TopLeft content=7 order=0"),
            "got: {first}"
        );
        let second = lines.next().unwrap();
        assert!(second.ends_with("BotRight hidden"), "got: {second}");
    }

    #[test]
    fn subtree_dump_starts_at_zero_indent() {
        let mut tree = SceneTree::new();
        let root = tree.create_node();
        let child = tree.create_node();
        tree.set_parent(child, root).unwrap();

        let mut out = Vec::new();
        write_subtree(&tree, child, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("node NodeId("), "got: {text}");
        assert_eq!(text.lines().count(), 1);
    }
}
