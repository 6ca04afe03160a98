// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the update and draw passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! passes call as they run. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates per-node [`LayoutEvent`]s and the
//!   corresponding `TraceSink` method.

use crate::node::NodeId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which per-frame pass is being traced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Layout recompute and behaviour updates.
    Update,
    /// Draw-order assignment and draw list emission.
    Draw,
}

impl PassKind {
    /// Short lowercase name, for log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Draw => "draw",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Marks the beginning of a pass.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Update counter of the tree when the pass started.
    pub frame_index: u64,
    /// Which pass is starting.
    pub pass: PassKind,
}

/// Marks the end of a pass.
#[derive(Clone, Copy, Debug)]
pub struct PassEndEvent {
    /// Update counter of the tree.
    pub frame_index: u64,
    /// Which pass is ending.
    pub pass: PassKind,
    /// Nodes the pass visited (recomputed for update, drawn for draw).
    pub nodes: u32,
    /// Whether the pass ran to completion.
    pub completed: bool,
}

/// Emitted when a behaviour's update hook fails.
#[derive(Clone, Copy, Debug)]
pub struct UpdateFailureEvent<'a> {
    /// Update counter of the tree.
    pub frame_index: u64,
    /// The node whose behaviour failed.
    pub node: NodeId,
    /// The behaviour's error.
    pub error: &'a (dyn core::error::Error + Send + Sync + 'static),
}

/// Emitted once per update pass when nodes were created or destroyed since
/// the previous pass.
#[derive(Clone, Copy, Debug)]
pub struct TopologyEvent<'a> {
    /// Update counter of the tree.
    pub frame_index: u64,
    /// Slot indices of nodes created since the previous pass.
    pub added: &'a [u32],
    /// Slot indices of nodes destroyed since the previous pass.
    pub removed: &'a [u32],
}

/// Emitted for every node the update pass recomputes (requires
/// `trace-rich`).
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct LayoutEvent {
    /// Update counter of the tree.
    pub frame_index: u64,
    /// The recomputed node.
    pub node: NodeId,
    /// Its new global rectangle.
    pub global_rect: kurbo::Rect,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the scene passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the beginning of a pass.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called at the end of a pass.
    fn on_pass_end(&mut self, e: &PassEndEvent) {
        _ = e;
    }

    /// Called when a behaviour's update hook fails.
    fn on_update_failure(&mut self, e: &UpdateFailureEvent<'_>) {
        _ = e;
    }

    /// Called when the tree gained or lost nodes since the previous pass.
    fn on_topology(&mut self, e: &TopologyEvent<'_>) {
        _ = e;
    }

    /// Called for each recomputed node (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassEndEvent`].
    #[inline]
    pub fn pass_end(&mut self, e: &PassEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdateFailureEvent`].
    #[inline]
    pub fn update_failure(&mut self, e: &UpdateFailureEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update_failure(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TopologyEvent`].
    #[inline]
    pub fn topology(&mut self, e: &TopologyEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_topology(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
