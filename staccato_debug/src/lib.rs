// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for staccato scene trees.
//!
//! This crate provides [`TraceSink`](staccato_core::trace::TraceSink)
//! implementations and tree inspection helpers for development:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`log::TracingSink`]: forwards pass events to the `tracing` crate.
//! - [`dump::write_tree`]: indented text dump of a tree.
//! - [`snapshot::tree_to_json`]: JSON snapshot of a tree for golden files
//!   and bug reports.

pub mod dump;
pub mod log;
pub mod pretty;
pub mod snapshot;
