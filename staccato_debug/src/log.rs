// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge from scene trace events to the `tracing` crate.
//!
//! Pass boundaries and topology changes are logged at `DEBUG`, behaviour
//! update failures at `WARN`, and per-node layout recomputes at `TRACE`. All
//! events use the `staccato` target.

use staccato_core::trace::{
    LayoutEvent, PassBeginEvent, PassEndEvent, TopologyEvent, TraceSink, UpdateFailureEvent,
};
use tracing::{debug, trace, warn};

/// A [`TraceSink`] that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for TracingSink {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        debug!(target: "staccato", frame = e.frame_index, pass = e.pass.name(), "pass begin");
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        if e.completed {
            debug!(
                target: "staccato",
                frame = e.frame_index,
                pass = e.pass.name(),
                nodes = e.nodes,
                "pass end"
            );
        } else {
            warn!(
                target: "staccato",
                frame = e.frame_index,
                pass = e.pass.name(),
                nodes = e.nodes,
                "pass aborted"
            );
        }
    }

    fn on_update_failure(&mut self, e: &UpdateFailureEvent<'_>) {
        warn!(
            target: "staccato",
            frame = e.frame_index,
            node = ?e.node,
            error = %e.error,
            "behaviour update failed"
        );
    }

    fn on_topology(&mut self, e: &TopologyEvent<'_>) {
        debug!(
            target: "staccato",
            frame = e.frame_index,
            added = e.added.len(),
            removed = e.removed.len(),
            "topology changed"
        );
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        let r = e.global_rect;
        trace!(
            target: "staccato",
            frame = e.frame_index,
            node = ?e.node,
            x = r.x0,
            y = r.y0,
            width = r.width(),
            height = r.height(),
            "layout"
        );
    }
}
