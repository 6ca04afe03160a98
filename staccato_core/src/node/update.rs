// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame update pass.
//!
//! The pass starts by draining the dirty channels:
//!
//! 1. **LAYOUT**: every marked node (marks already reach descendants) gets
//!    its pending-recompute bit set.
//! 2. **TOPOLOGY**: drained only to report whether the tree shape changed.
//!
//! It then walks every root depth-first. At each node it recomputes the
//! geometry if the node is pending, runs the node's behaviour, and descends
//! into the children. Recomputing a node marks all of its direct children
//! pending, so a subtree is always laid out after its parent and against the
//! parent's fresh global rectangle.

use alloc::vec::Vec;

use kurbo::Rect;

use super::behavior::UpdateCx;
use super::id::{INVALID, NodeId};
use super::store::SceneTree;
use crate::config::FailurePolicy;
use crate::dirty;
use crate::error::{BehaviorError, UpdateError};
use crate::geometry::align_rect;
use crate::trace::{PassBeginEvent, PassEndEvent, PassKind, TopologyEvent, Tracer, UpdateFailureEvent};

/// A behaviour failure recorded under [`FailurePolicy::Continue`].
#[derive(Debug)]
pub struct UpdateFailure {
    /// The node whose behaviour failed.
    pub node: NodeId,
    /// The behaviour's error.
    pub error: BehaviorError,
}

/// Outcome of a successful [`SceneTree::update`] call.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Index of this pass, starting at zero.
    pub frame_index: u64,
    /// Nodes whose geometry was recomputed, in recompute order.
    pub recomputed: Vec<NodeId>,
    /// Behaviour failures, in traversal order.
    pub failures: Vec<UpdateFailure>,
    /// Slot indices of nodes created since the previous pass.
    pub added: Vec<u32>,
    /// Slot indices of nodes destroyed since the previous pass.
    pub removed: Vec<u32>,
    /// Whether the tree shape changed since the previous pass.
    pub topology_changed: bool,
}

impl UpdateReport {
    /// Returns `true` if no behaviour failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl SceneTree {
    /// Runs the update pass over every root.
    ///
    /// `delta` is the time since the previous frame in seconds; it is only
    /// passed through to behaviours.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], the first behaviour failure stops the
    /// pass and is returned. Under [`FailurePolicy::Continue`] failures are
    /// collected in [`UpdateReport::failures`] instead and this never fails.
    pub fn update(&mut self, delta: f64) -> Result<UpdateReport, UpdateError> {
        self.update_traced(delta, &mut Tracer::none())
    }

    /// Like [`update`](Self::update), reporting pass events to `tracer`.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    pub fn update_traced(
        &mut self,
        delta: f64,
        tracer: &mut Tracer<'_>,
    ) -> Result<UpdateReport, UpdateError> {
        let frame_index = self.frame_index;
        self.frame_index += 1;
        tracer.pass_begin(&PassBeginEvent {
            frame_index,
            pass: PassKind::Update,
        });

        let mut report = UpdateReport {
            frame_index,
            ..UpdateReport::default()
        };

        // Drain LAYOUT channel into the per-slot pending bits.
        let dirty_layout: Vec<u32> = self
            .dirty
            .drain(dirty::LAYOUT)
            .affected()
            .deterministic()
            .run()
            .collect();
        for idx in dirty_layout {
            if idx < self.len {
                self.needs_layout[idx as usize] = true;
            }
        }

        // Drain TOPOLOGY channel (only its emptiness matters).
        let topology: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();
        report.topology_changed =
            !topology.is_empty() || core::mem::take(&mut self.topology_carry);

        // Move lifecycle lists.
        core::mem::swap(&mut self.pending_added, &mut report.added);
        core::mem::swap(&mut self.pending_removed, &mut report.removed);
        if !report.added.is_empty() || !report.removed.is_empty() {
            tracer.topology(&TopologyEvent {
                frame_index,
                added: &report.added,
                removed: &report.removed,
            });
        }

        let result = self.update_roots(delta, &mut report, tracer);

        tracer.pass_end(&PassEndEvent {
            frame_index,
            pass: PassKind::Update,
            nodes: u32::try_from(report.recomputed.len()).unwrap_or(u32::MAX),
            completed: result.is_ok(),
        });

        if result.is_err() {
            // The report is dropped, so its lifecycle changes go to the next
            // pass, ahead of anything created during this one.
            report.added.append(&mut self.pending_added);
            report.removed.append(&mut self.pending_removed);
            self.pending_added = core::mem::take(&mut report.added);
            self.pending_removed = core::mem::take(&mut report.removed);
            self.topology_carry |= report.topology_changed;
        }

        result.map(|()| report)
    }

    fn update_roots(
        &mut self,
        delta: f64,
        report: &mut UpdateReport,
        tracer: &mut Tracer<'_>,
    ) -> Result<(), UpdateError> {
        let mut roots = core::mem::take(&mut self.root_scratch);
        roots.clear();
        roots.extend(self.roots.iter().map(|&idx| self.handle(idx)));

        let mut result = Ok(());
        for &root in &roots {
            result = self.update_node(root, delta, report, tracer);
            if result.is_err() {
                break;
            }
        }
        self.root_scratch = roots;
        result
    }

    fn update_node(
        &mut self,
        id: NodeId,
        delta: f64,
        report: &mut UpdateReport,
        tracer: &mut Tracer<'_>,
    ) -> Result<(), UpdateError> {
        // An earlier behaviour in this pass may have destroyed the node.
        if !self.is_alive(id) {
            return Ok(());
        }
        let i = id.idx as usize;
        // A behaviour may move a visited node under a node still to come.
        if self.visited[i] == self.frame_index {
            return Ok(());
        }
        self.visited[i] = self.frame_index;

        if self.needs_layout[i] {
            self.recalculate(id.idx);
            report.recomputed.push(id);
            #[cfg(feature = "trace-rich")]
            tracer.layout(&crate::trace::LayoutEvent {
                frame_index: report.frame_index,
                node: id,
                global_rect: self.global_rect[i],
            });
        }

        if let Some(mut behavior) = self.behavior[i].take() {
            let result = behavior.update(&mut UpdateCx {
                tree: self,
                node: id,
                delta,
            });
            // Put it back unless the node died or got a new behaviour.
            if self.is_alive(id) && self.behavior[i].is_none() {
                self.behavior[i] = Some(behavior);
            }
            if let Err(error) = result {
                tracer.update_failure(&UpdateFailureEvent {
                    frame_index: report.frame_index,
                    node: id,
                    error: &*error,
                });
                match self.config.failure_policy {
                    FailurePolicy::Continue => report.failures.push(UpdateFailure { node: id, error }),
                    FailurePolicy::Abort => {
                        return Err(UpdateError::BehaviorFailed {
                            node: id,
                            source: error,
                        });
                    }
                }
            }
            if !self.is_alive(id) {
                return Ok(());
            }
        }

        let children: Vec<NodeId> = self.children(id).collect();
        for child in children {
            self.update_node(child, delta, report, tracer)?;
        }
        Ok(())
    }

    /// Recomputes the local and global rectangles of `idx` against its
    /// reference frame, and marks its direct children pending.
    fn recalculate(&mut self, idx: u32) {
        let i = idx as usize;
        let p = self.parent[i];
        let reference = if p != INVALID {
            self.global_rect[p as usize]
        } else {
            self.viewport_rect()
        };

        let size = self.size[i].resolve(reference.size());
        let position = self.position[i];
        let (x, y) = if self.config.apply_position_scale {
            (
                position.x.resolve(reference.width()),
                position.y.resolve(reference.height()),
            )
        } else {
            (position.x.offset, position.y.offset)
        };

        let local = Rect::new(x, y, x + size.width, y + size.height);
        self.local_rect[i] = local;
        self.global_rect[i] = align_rect(local, self.alignment[i], reference);
        self.needs_layout[i] = false;

        let mut child = self.first_child[i];
        while child != INVALID {
            self.needs_layout[child as usize] = true;
            child = self.next_sibling[child as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::{Cell, RefCell};

    use kurbo::{Point, Size};

    use super::*;
    use crate::config::SceneConfig;
    use crate::geometry::{Alignment, Dim, Dim2};
    use crate::node::Behavior;

    const EPS: f64 = 1e-9;

    fn assert_rect_eq(a: Rect, b: Rect) {
        assert!(
            (a.x0 - b.x0).abs() < EPS
                && (a.y0 - b.y0).abs() < EPS
                && (a.x1 - b.x1).abs() < EPS
                && (a.y1 - b.y1).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note track {0} failed")]
    struct TrackError(u32);

    /// Records the order in which behaviours run, optionally failing.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }

    impl Probe {
        fn boxed(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>, fail: bool) -> Box<Self> {
            Box::new(Self {
                name,
                log: Rc::clone(log),
                fail,
            })
        }
    }

    impl Behavior for Probe {
        fn update(&mut self, _cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                Err(Box::new(TrackError(7)))
            } else {
                Ok(())
            }
        }
    }

    fn small_viewport() -> SceneConfig {
        SceneConfig::default().with_viewport(Size::new(200.0, 100.0))
    }

    #[test]
    fn root_is_aligned_against_viewport() {
        let mut tree = SceneTree::with_config(small_viewport());
        let root = tree.create_node();
        tree.set_size(root, Dim2::px(50.0, 20.0));
        tree.set_position(root, Dim2::px(-5.0, 4.0));
        tree.set_alignment(root, Alignment::BotRight);

        tree.update(0.016).unwrap();

        let expected = align_rect(tree.local_rect(root), Alignment::BotRight, tree.viewport_rect());
        assert_rect_eq(tree.global_rect(root), expected);
        assert_rect_eq(tree.global_rect(root), Rect::new(145.0, 84.0, 195.0, 104.0));
    }

    #[test]
    fn child_resolves_against_parent() {
        let mut tree = SceneTree::with_config(small_viewport());
        let panel = tree.create_node();
        let button = tree.create_node();
        tree.set_parent(button, panel).unwrap();

        tree.set_position(panel, Dim2::px(10.0, 10.0));
        tree.set_size(panel, Dim2::new(Dim::px(100.0), Dim::px(60.0)));
        tree.set_size(button, Dim2::new(Dim::fraction(0.5), Dim::new(-10.0, 1.0)));
        tree.set_alignment(button, Alignment::MidCenter);

        tree.update(0.0).unwrap();

        assert_rect_eq(tree.global_rect(panel), Rect::new(10.0, 10.0, 110.0, 70.0));
        assert_rect_eq(tree.global_rect(button), Rect::new(35.0, 15.0, 85.0, 65.0));
        assert_eq!(tree.absolute_position(button), Point::new(35.0, 15.0));
        assert_eq!(tree.absolute_size(button), Size::new(50.0, 50.0));
    }

    #[test]
    fn position_scale_is_ignored_by_default() {
        let mut tree = SceneTree::new();
        let parent = tree.create_node();
        let child = tree.create_node();
        tree.set_parent(child, parent).unwrap();
        tree.set_size(parent, Dim2::px(100.0, 100.0));

        tree.set_position(child, Dim2::new(Dim::new(10.0, 0.5), Dim::ZERO));
        tree.set_size(child, Dim2::new(Dim::new(20.0, 0.0), Dim::ZERO));
        tree.update(0.0).unwrap();

        let local = tree.local_rect(child);
        assert!((local.width() - 20.0).abs() < EPS, "got {local:?}");
        assert!((local.x0 - 10.0).abs() < EPS, "got {local:?}");
    }

    #[test]
    fn position_scale_can_be_enabled() {
        let mut tree = SceneTree::with_config(SceneConfig::default().with_position_scale(true));
        let parent = tree.create_node();
        let child = tree.create_node();
        tree.set_parent(child, parent).unwrap();
        tree.set_size(parent, Dim2::px(100.0, 100.0));
        tree.set_position(child, Dim2::new(Dim::new(10.0, 0.5), Dim::ZERO));
        tree.update(0.0).unwrap();

        assert!((tree.local_rect(child).x0 - 60.0).abs() < EPS);
    }

    #[test]
    fn negative_size_is_kept() {
        let mut tree = SceneTree::new();
        let node = tree.create_node();
        tree.set_size(node, Dim2::px(-30.0, 10.0));
        tree.update(0.0).unwrap();
        assert!((tree.local_rect(node).width() + 30.0).abs() < EPS);
    }

    #[test]
    fn scale_setters_keep_offsets() {
        let mut tree = SceneTree::with_config(small_viewport());
        let node = tree.create_node();
        tree.set_size(node, Dim2::px(10.0, 10.0));
        tree.set_scale_x(node, 0.5);
        tree.set_scale_y(node, 1.0);
        assert_eq!(tree.size(node), Dim2::new(Dim::new(10.0, 0.5), Dim::new(10.0, 1.0)));

        tree.update(0.0).unwrap();
        assert_eq!(tree.absolute_size(node), Size::new(110.0, 110.0));
    }

    #[test]
    fn parents_recompute_before_children() {
        let mut tree = SceneTree::new();
        let a = tree.create_node();
        let b = tree.create_node();
        let c = tree.create_node();
        let d = tree.create_node();

        // Created children first so slot order differs from tree order.
        tree.set_parent(d, c).unwrap();
        tree.set_parent(c, b).unwrap();
        tree.set_parent(b, a).unwrap();

        let report = tree.update(0.0).unwrap();
        assert_eq!(report.recomputed, vec![a, b, c, d]);
    }

    #[test]
    fn second_update_recomputes_nothing() {
        let mut tree = SceneTree::new();
        let a = tree.create_node();
        let b = tree.create_node();
        tree.set_parent(b, a).unwrap();

        let first = tree.update(0.0).unwrap();
        assert_eq!(first.recomputed.len(), 2);
        let rect = tree.global_rect(b);

        let second = tree.update(0.0).unwrap();
        assert!(second.recomputed.is_empty(), "got {:?}", second.recomputed);
        assert!(!second.topology_changed);
        assert!(second.added.is_empty());
        assert_eq!(tree.global_rect(b), rect);
    }

    #[test]
    fn setter_dirties_subtree_only() {
        let mut tree = SceneTree::new();
        let root = tree.create_node();
        let left = tree.create_node();
        let right = tree.create_node();
        let leaf = tree.create_node();
        tree.set_parent(left, root).unwrap();
        tree.set_parent(right, root).unwrap();
        tree.set_parent(leaf, left).unwrap();
        let _ = tree.update(0.0).unwrap();

        tree.set_position(left, Dim2::px(3.0, 0.0));
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.recomputed, vec![left, leaf]);
    }

    #[test]
    fn parent_move_shifts_descendants() {
        let mut tree = SceneTree::new();
        let root = tree.create_node();
        let child = tree.create_node();
        let grandchild = tree.create_node();
        tree.set_parent(child, root).unwrap();
        tree.set_parent(grandchild, child).unwrap();
        tree.set_position(child, Dim2::px(5.0, 5.0));
        tree.set_position(grandchild, Dim2::px(1.0, 1.0));
        let _ = tree.update(0.0).unwrap();
        assert_eq!(tree.absolute_position(grandchild), Point::new(6.0, 6.0));

        tree.set_position(root, Dim2::px(100.0, 0.0));
        let _ = tree.update(0.0).unwrap();
        assert_eq!(tree.absolute_position(grandchild), Point::new(106.0, 6.0));
    }

    #[test]
    fn reparent_relayouts_against_new_parent() {
        let mut tree = SceneTree::new();
        let p1 = tree.create_node();
        let p2 = tree.create_node();
        let child = tree.create_node();
        tree.set_position(p1, Dim2::px(10.0, 0.0));
        tree.set_position(p2, Dim2::px(50.0, 0.0));
        tree.set_parent(child, p1).unwrap();
        let _ = tree.update(0.0).unwrap();
        assert_eq!(tree.absolute_position(child), Point::new(10.0, 0.0));

        tree.set_parent(child, p2).unwrap();
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.recomputed, vec![child]);
        assert!(report.topology_changed);
        assert_eq!(tree.absolute_position(child), Point::new(50.0, 0.0));
    }

    #[test]
    fn viewport_change_relayouts_roots() {
        let mut tree = SceneTree::with_config(small_viewport());
        let root = tree.create_node();
        let child = tree.create_node();
        tree.set_parent(child, root).unwrap();
        tree.set_size(root, Dim2::fraction(1.0, 1.0));
        let _ = tree.update(0.0).unwrap();

        tree.set_viewport(Size::new(400.0, 300.0));
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.recomputed, vec![root, child]);
        assert_eq!(tree.absolute_size(root), Size::new(400.0, 300.0));
    }

    #[test]
    fn lifecycle_lists_are_reported_once() {
        let mut tree = SceneTree::new();
        let a = tree.create_node();
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.added, vec![a.index()]);
        assert!(report.topology_changed);

        tree.destroy(a);
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.removed, vec![a.index()]);
        assert!(report.added.is_empty());

        let report = tree.update(0.0).unwrap();
        assert!(report.removed.is_empty());
        assert_eq!(report.frame_index, 2);
    }

    #[test]
    fn behaviors_run_in_pre_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = SceneTree::new();
        let a = tree.create_node();
        let b = tree.create_node();
        let c = tree.create_node();
        let d = tree.create_node();
        tree.set_parent(b, a).unwrap();
        tree.set_parent(c, b).unwrap();
        tree.set_parent(d, a).unwrap();
        for (id, name) in [(a, "a"), (b, "b"), (c, "c"), (d, "d")] {
            tree.set_behavior(id, Probe::boxed(name, &log, false));
        }

        let report = tree.update(0.0).unwrap();
        assert!(report.is_clean());
        assert_eq!(*log.borrow(), vec!["a", "b", "c", "d"]);
        assert!(tree.has_behavior(b), "behaviour is restored after the call");
    }

    #[test]
    fn continue_policy_collects_failures_and_visits_siblings() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = SceneTree::new();
        let root = tree.create_node();
        let first = tree.create_node();
        let nested = tree.create_node();
        let second = tree.create_node();
        tree.set_parent(first, root).unwrap();
        tree.set_parent(nested, first).unwrap();
        tree.set_parent(second, root).unwrap();
        tree.set_behavior(first, Probe::boxed("first", &log, true));
        tree.set_behavior(nested, Probe::boxed("nested", &log, false));
        tree.set_behavior(second, Probe::boxed("second", &log, true));

        let report = tree.update(0.0).unwrap();
        assert_eq!(*log.borrow(), vec!["first", "nested", "second"]);
        let failed: Vec<_> = report.failures.iter().map(|f| f.node).collect();
        assert_eq!(failed, vec![first, second]);
        assert_eq!(report.recomputed.len(), 4);
    }

    #[test]
    fn abort_policy_stops_the_pass() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = SceneConfig::default().with_failure_policy(FailurePolicy::Abort);
        let mut tree = SceneTree::with_config(config);
        let root = tree.create_node();
        let first = tree.create_node();
        let second = tree.create_node();
        tree.set_parent(first, root).unwrap();
        tree.set_parent(second, root).unwrap();
        tree.set_behavior(first, Probe::boxed("first", &log, true));
        tree.set_behavior(second, Probe::boxed("second", &log, false));

        let err = tree.update(0.0).unwrap_err();
        let UpdateError::BehaviorFailed { node, source } = err;
        assert_eq!(node, first);
        assert_eq!(source.to_string(), "note track 7 failed");
        assert_eq!(*log.borrow(), vec!["first"]);

        // The unreached sibling is laid out on the next pass.
        tree.take_behavior(first);
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.recomputed, vec![second]);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn aborted_pass_keeps_lifecycle_changes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let config = SceneConfig::default().with_failure_policy(FailurePolicy::Abort);
        let mut tree = SceneTree::with_config(config);
        let a = tree.create_node();
        let b = tree.create_node();
        tree.set_behavior(a, Probe::boxed("a", &log, true));

        assert!(tree.update(0.0).is_err());

        tree.take_behavior(a);
        let report = tree.update(0.0).unwrap();
        assert_eq!(report.added, vec![a.index(), b.index()]);
        assert!(report.topology_changed, "drained topology change was lost");

        let report = tree.update(0.0).unwrap();
        assert!(report.added.is_empty());
        assert!(!report.topology_changed);
    }

    #[test]
    fn node_moved_under_later_sibling_runs_once_per_pass() {
        struct MoveUnder {
            target: NodeId,
            runs: Rc<Cell<u32>>,
        }
        impl Behavior for MoveUnder {
            fn update(&mut self, cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
                self.runs.set(self.runs.get() + 1);
                let node = cx.node();
                if cx.tree().parent(node) != Some(self.target) {
                    cx.tree_mut().set_parent(node, self.target)?;
                }
                Ok(())
            }
        }

        let runs = Rc::new(Cell::new(0));
        let mut tree = SceneTree::new();
        let root = tree.create_node();
        let x = tree.create_node();
        let y = tree.create_node();
        tree.set_parent(x, root).unwrap();
        tree.set_parent(y, root).unwrap();
        tree.set_position(y, Dim2::px(30.0, 0.0));
        tree.set_size(y, Dim2::px(50.0, 50.0));
        tree.set_behavior(
            x,
            Box::new(MoveUnder {
                target: y,
                runs: Rc::clone(&runs),
            }),
        );

        let report = tree.update(0.0).unwrap();
        assert_eq!(runs.get(), 1, "behaviour ran again after the move");
        assert_eq!(report.recomputed.iter().filter(|&&n| n == x).count(), 1);
        assert_eq!(tree.parent(x), Some(y));
        assert_eq!(tree.absolute_position(x), Point::new(0.0, 0.0));

        let report = tree.update(0.0).unwrap();
        assert_eq!(runs.get(), 2);
        assert_eq!(report.recomputed, vec![x]);
        assert_eq!(tree.absolute_position(x), Point::new(30.0, 0.0));
    }

    #[test]
    fn behavior_may_destroy_its_own_node() {
        struct SelfDestruct;
        impl Behavior for SelfDestruct {
            fn update(&mut self, cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
                let node = cx.node();
                cx.tree_mut().destroy(node);
                Ok(())
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = SceneTree::new();
        let root = tree.create_node();
        let doomed = tree.create_node();
        let doomed_child = tree.create_node();
        let survivor = tree.create_node();
        tree.set_parent(doomed, root).unwrap();
        tree.set_parent(doomed_child, doomed).unwrap();
        tree.set_parent(survivor, root).unwrap();
        tree.set_behavior(doomed, Box::new(SelfDestruct));
        tree.set_behavior(doomed_child, Probe::boxed("doomed_child", &log, false));
        tree.set_behavior(survivor, Probe::boxed("survivor", &log, false));

        let report = tree.update(0.0).unwrap();
        assert!(report.is_clean());
        assert!(!tree.is_alive(doomed));
        assert!(!tree.is_alive(doomed_child));
        assert_eq!(*log.borrow(), vec!["survivor"]);
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![survivor]);
    }

    #[test]
    fn behavior_mutations_apply_next_pass() {
        struct Slide;
        impl Behavior for Slide {
            fn update(&mut self, cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
                let node = cx.node();
                let x = cx.tree().position(node).x.offset + 100.0 * cx.delta();
                cx.tree_mut().set_position_x(node, Dim::px(x));
                Ok(())
            }
        }

        let mut tree = SceneTree::new();
        let node = tree.create_node();
        tree.set_behavior(node, Box::new(Slide));

        let _ = tree.update(0.5).unwrap();
        assert_eq!(tree.absolute_position(node), Point::new(0.0, 0.0));
        let _ = tree.update(0.5).unwrap();
        assert_eq!(tree.absolute_position(node), Point::new(50.0, 0.0));
    }
}
