// Copyright 2026 the Staccato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated song selection screen.
//!
//! Builds a screen tree (background, header, beatmap carousel, cover
//! preview, options overlay), then runs a fixed number of frames through the
//! update and draw passes with a [`TracingSink`] attached. Set `RUST_LOG` to
//! see the pass events, e.g. `RUST_LOG=staccato=debug`.
//!
//! At the end the tree is dumped to stdout, and optionally snapshotted to a
//! JSON file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use kurbo::{Rect, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

use staccato_core::config::SceneConfig;
use staccato_core::error::{BehaviorError, StructuralError};
use staccato_core::geometry::{Alignment, Dim, Dim2};
use staccato_core::node::{Behavior, ContentId, DrawContext, DrawCx, NodeId, SceneTree, UpdateCx};
use staccato_core::trace::Tracer;

use staccato_debug::log::TracingSink;

const BACKGROUND: ContentId = ContentId(1);
const HEADER: ContentId = ContentId(2);
const CARD: ContentId = ContentId(3);
const COVER: ContentId = ContentId(4);
const OPTIONS: ContentId = ContentId(5);
const HIGHLIGHT: ContentId = ContentId(6);

const CARD_HEIGHT: f64 = 64.0;
const CARD_SPACING: f64 = 72.0;

#[derive(Parser)]
#[command(name = "song_select")]
#[command(about = "Drive a simulated song selection screen", long_about = None)]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 180)]
    frames: u64,

    /// Frame rate used to derive the update delta.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1366.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 768.0)]
    height: f64,

    /// Number of beatmap cards in the carousel.
    #[arg(long, default_value_t = 6)]
    cards: usize,

    /// Write a JSON snapshot of the final tree to this path.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

/// Slides a node in from a horizontal offset to its resting position.
struct SlideIn {
    from: f64,
    elapsed: f64,
    duration: f64,
}

impl Behavior for SlideIn {
    fn update(&mut self, cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
        if self.elapsed >= self.duration {
            return Ok(());
        }
        self.elapsed = (self.elapsed + cx.delta()).min(self.duration);
        let t = self.elapsed / self.duration;
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        let node = cx.node();
        cx.tree_mut()
            .set_position_x(node, Dim::px(self.from * (1.0 - eased)));
        Ok(())
    }
}

/// Cycles the selected card among its parent's cards, nudging the
/// selection out of the column.
struct Selector {
    selected: Option<NodeId>,
    elapsed: f64,
    interval: f64,
}

impl Behavior for Selector {
    fn update(&mut self, cx: &mut UpdateCx<'_>) -> Result<(), BehaviorError> {
        let Some(carousel) = cx.tree().parent(cx.node()) else {
            return Ok(());
        };
        let cards = card_nodes(cx.tree(), carousel);
        if cards.is_empty() {
            return Ok(());
        }
        self.elapsed += cx.delta();
        if self.elapsed < self.interval {
            return Ok(());
        }
        self.elapsed -= self.interval;
        let next = match self
            .selected
            .and_then(|current| cards.iter().position(|&card| card == current))
        {
            Some(i) => cards[(i + 1) % cards.len()],
            None => cards[0],
        };
        select(cx.tree_mut(), self.selected, next);
        self.selected = Some(next);
        Ok(())
    }
}

fn select(tree: &mut SceneTree, old: Option<NodeId>, new: NodeId) {
    if let Some(old) = old
        && tree.is_alive(old)
    {
        tree.set_position_x(old, Dim::ZERO);
        drop(tree.take_behavior(old));
    }
    tree.set_position_x(new, Dim::px(-24.0));
    tree.set_behavior(new, Box::new(Highlight));
}

fn card_nodes(tree: &SceneTree, carousel: NodeId) -> Vec<NodeId> {
    tree.children(carousel)
        .filter(|&card| tree.content(card) == Some(CARD))
        .collect()
}

/// Draws a selection outline around the node.
struct Highlight;

impl Behavior for Highlight {
    fn draw(&self, cx: &mut DrawCx<'_>) -> Result<(), BehaviorError> {
        let outline = cx.rect().inflate(4.0, 4.0);
        cx.push(Some(HIGHLIGHT), outline);
        Ok(())
    }
}

struct Screen {
    carousel: NodeId,
    options: NodeId,
}

fn build_screen(tree: &mut SceneTree, card_count: usize) -> Result<Screen, StructuralError> {
    let background = tree.create_node();
    tree.set_label(background, "background");
    tree.set_size(background, Dim2::fraction(1.0, 1.0));
    tree.set_content(background, Some(BACKGROUND));

    let header = tree.create_node();
    tree.set_label(header, "header");
    tree.set_size(header, Dim2::new(Dim::fraction(1.0), Dim::px(80.0)));
    tree.set_alignment(header, Alignment::TopCenter);
    tree.set_content(header, Some(HEADER));
    tree.set_parent(header, background)?;

    let cover = tree.create_node();
    tree.set_label(cover, "cover");
    tree.set_size(cover, Dim2::px(320.0, 320.0));
    tree.set_position(cover, Dim2::px(64.0, 0.0));
    tree.set_alignment(cover, Alignment::MidLeft);
    tree.set_content(cover, Some(COVER));
    tree.set_parent(cover, background)?;

    let carousel = tree.create_node();
    tree.set_label(carousel, "carousel");
    tree.set_size(carousel, Dim2::fraction(0.4, 0.8));
    tree.set_alignment(carousel, Alignment::BotRight);
    tree.set_behavior(
        carousel,
        Box::new(SlideIn {
            from: 400.0,
            elapsed: 0.0,
            duration: 0.5,
        }),
    );
    tree.set_parent(carousel, background)?;

    let mut first_card = None;
    for i in 0..card_count {
        let card = add_card(tree, carousel, i)?;
        first_card.get_or_insert(card);
    }
    if let Some(card) = first_card {
        select(tree, None, card);
    }

    // The carousel runs its slide-in, so selection lives on a grouping
    // child.
    let selector = tree.create_node();
    tree.set_label(selector, "selector");
    tree.set_parent(selector, carousel)?;
    tree.set_behavior(
        selector,
        Box::new(Selector {
            selected: first_card,
            elapsed: 0.0,
            interval: 0.75,
        }),
    );

    let options = tree.create_node();
    tree.set_label(options, "options");
    tree.set_size(options, Dim2::fraction(0.3, 1.0));
    tree.set_alignment(options, Alignment::MidLeft);
    tree.set_content(options, Some(OPTIONS));
    tree.set_propagate_visibility(options, true);
    for row in 0..3 {
        let item = tree.create_node();
        tree.set_size(item, Dim2::new(Dim::fraction(1.0), Dim::px(48.0)));
        tree.set_position_y(item, Dim::px(96.0 + 56.0 * f64::from(row)));
        tree.set_content(item, Some(OPTIONS));
        tree.set_parent(item, options)?;
    }
    tree.set_visible(options, false);

    Ok(Screen { carousel, options })
}

fn add_card(
    tree: &mut SceneTree,
    carousel: NodeId,
    index: usize,
) -> Result<NodeId, StructuralError> {
    let card = tree.create_node();
    tree.set_label(card, format!("card {index}"));
    tree.set_size(card, Dim2::new(Dim::fraction(1.0), Dim::px(CARD_HEIGHT)));
    tree.set_position_y(card, Dim::px(CARD_SPACING * index as f64));
    tree.set_content(card, Some(CARD));
    tree.set_parent(card, carousel)?;
    Ok(card)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");
    let delta = 1.0 / args.fps;

    let config = SceneConfig::default().with_viewport(Size::new(args.width, args.height));
    let mut tree = SceneTree::with_config(config);
    let screen = build_screen(&mut tree, args.cards)?;
    info!(nodes = tree.len(), "built song select screen");

    let mut sink = TracingSink::new();
    let mut tracer = Tracer::new(&mut sink);
    let mut cx = DrawContext::new();

    for frame in 0..args.frames {
        match frame {
            // Open the options overlay.
            60 => tree.set_visible(screen.options, true),
            // Refresh the beatmap list: drop the last card, add a new one.
            90 => {
                let cards = card_nodes(&tree, screen.carousel);
                if let Some(&last) = cards.last() {
                    tree.destroy(last);
                }
                add_card(&mut tree, screen.carousel, cards.len().saturating_sub(1))?;
            }
            // Close the overlay again.
            120 => tree.set_visible(screen.options, false),
            _ => {}
        }

        let report = tree.update_traced(delta, &mut tracer)?;
        cx.reset();
        tree.draw_traced(&mut cx, &mut tracer)?;

        if frame % 30 == 0 || !report.failures.is_empty() {
            info!(
                frame,
                recomputed = report.recomputed.len(),
                failures = report.failures.len(),
                items = cx.list().items.len(),
                highlight = ?highlight_rect(&cx),
                "frame done"
            );
        }
    }

    let stdout = std::io::stdout();
    staccato_debug::dump::write_tree(&tree, &mut stdout.lock())
        .context("failed to dump the scene tree")?;

    if let Some(path) = &args.snapshot {
        let value = staccato_debug::snapshot::tree_to_json(&tree)?;
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &value)?;
        println!("Wrote {} ({} frames)", path.display(), args.frames);
    }
    Ok(())
}

fn highlight_rect(cx: &DrawContext) -> Option<Rect> {
    cx.list()
        .items
        .iter()
        .find(|item| item.content == Some(HIGHLIGHT))
        .map(|item| item.rect)
}
