// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use staccato_core::trace::{
    LayoutEvent, PassBeginEvent, PassEndEvent, TopologyEvent, TraceSink, UpdateFailureEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] frame={} {}",
            e.frame_index,
            e.pass.name(),
        );
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        let status = if e.completed { "ok" } else { "ABORTED" };
        let _ = writeln!(
            self.writer,
            "[pass:end] frame={} {} nodes={} {status}",
            e.frame_index,
            e.pass.name(),
            e.nodes,
        );
    }

    fn on_update_failure(&mut self, e: &UpdateFailureEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[failure] frame={} node={:?} error={}",
            e.frame_index, e.node, e.error,
        );
    }

    fn on_topology(&mut self, e: &TopologyEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[topology] frame={} added={} removed={}",
            e.frame_index,
            e.added.len(),
            e.removed.len(),
        );
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        let r = e.global_rect;
        let _ = writeln!(
            self.writer,
            "[layout] frame={} node={:?} rect=({:.1}, {:.1}, {:.1}x{:.1})",
            e.frame_index,
            e.node,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        );
    }
}
