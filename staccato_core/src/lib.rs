// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained-mode scene graph for game UI screens.
//!
//! `staccato_core` provides the tree every visual element of a screen lives
//! in: relative geometry resolved to screen rectangles, parent/child
//! membership with cascading destruction, and back-to-front draw ordering.
//! It is `no_std` compatible (with `alloc`) and uses array-based
//! struct-of-arrays storage with generational index handles.
//!
//! # Architecture
//!
//! A screen builds its nodes once and then drives two passes per frame:
//!
//! ```text
//!   widget code ──► setters (position, size, alignment, parent, visible)
//!                        │ marks LAYOUT / TOPOLOGY dirty
//!                        ▼
//!   SceneTree::update(dt) ──► UpdateReport
//!        │  recompute dirty rects (parent before child), run behaviours
//!        ▼
//!   SceneTree::draw(&mut DrawContext) ──► DrawList ──► renderer
//! ```
//!
//! **[`node`]**: The tree: [`SceneTree`](node::SceneTree), handles,
//! behaviours, and both passes.
//!
//! **[`geometry`]**: Offset-plus-scale dimensions and the 3×3
//! [`Alignment`](geometry::Alignment) grid.
//!
//! **[`dirty`]**: Dirty channels backed by `understory_dirty`. Geometry
//! marks propagate to descendants.
//!
//! **[`config`]**: Viewport, failure policy, and layout options.
//!
//! **[`error`]**: Structural, update, and draw errors.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! pass instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Example
//!
//! ```
//! use kurbo::Size;
//! use staccato_core::config::SceneConfig;
//! use staccato_core::geometry::{Alignment, Dim, Dim2};
//! use staccato_core::node::{DrawContext, SceneTree};
//!
//! let mut tree = SceneTree::with_config(SceneConfig::default().with_viewport(Size::new(800.0, 600.0)));
//! let panel = tree.create_node();
//! tree.set_size(panel, Dim2::new(Dim::fraction(0.5), Dim::px(200.0)));
//! tree.set_alignment(panel, Alignment::MidCenter);
//!
//! let title = tree.create_node();
//! tree.set_parent(title, panel).unwrap();
//! tree.set_size(title, Dim2::new(Dim::fraction(1.0), Dim::px(40.0)));
//!
//! tree.update(1.0 / 60.0).unwrap();
//! assert_eq!(tree.global_rect(panel).x0, 200.0);
//! assert_eq!(tree.global_rect(title).width(), 400.0);
//!
//! let mut cx = DrawContext::new();
//! tree.draw(&mut cx).unwrap();
//! assert_eq!(cx.list().items.len(), 2);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `serde` (disabled by default): `Serialize`/`Deserialize` for geometry
//!   and configuration types.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-node
//!   layout events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod dirty;
pub mod error;
pub mod geometry;
pub mod node;
pub mod trace;
