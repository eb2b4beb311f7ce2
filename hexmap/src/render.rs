use crate::algorithms::boundary::EdgeAccumulator;
use crate::algorithms::group::RegionGroup;
use crate::limits::{CELLS_PER_CHECKPOINT, SEGMENTS_PER_CHECKPOINT, STALE_DRAW_EVICT};
use crate::model::{Color, HexCell, Mode, Vec2};
use crate::registry::ClassRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type DrawableId = u32;

// Fill transparency and outline width shared by every region drawable.
// The outline reuses the fill color at full alpha.
pub const FILL_ALPHA: f32 = 0.15;
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Renderer collaborator. The core emits polygons, outline segments and
/// visibility changes; turning them into pixels is the host's concern.
/// `checkpoint` is the cooperative yield point, fired every
/// `CELLS_PER_CHECKPOINT` filled cells and every `SEGMENTS_PER_CHECKPOINT`
/// outline segments, so a host scheduler can breathe between chunks of a
/// large draw. A pass still runs to completion; nothing pre-empts it.
pub trait DrawSink {
    fn begin(&mut self, key: &str, color: Color, fill_alpha: f32) -> DrawableId;
    fn fill_polygon(&mut self, d: DrawableId, verts: &[Vec2]);
    fn outline(&mut self, d: DrawableId, a: Vec2, b: Vec2, width: f32);
    fn finish(&mut self, d: DrawableId);
    fn set_visible(&mut self, d: DrawableId, visible: bool);
    fn destroy(&mut self, d: DrawableId);
    fn checkpoint(&mut self);
}

/// Serializable draw command, one per `DrawSink` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCmd {
    Begin {
        id: DrawableId,
        key: String,
        color: Color,
        fill_alpha: f32,
    },
    FillPolygon {
        id: DrawableId,
        verts: Vec<Vec2>,
    },
    Outline {
        id: DrawableId,
        a: Vec2,
        b: Vec2,
        width: f32,
    },
    Finish {
        id: DrawableId,
    },
    SetVisible {
        id: DrawableId,
        visible: bool,
    },
    Destroy {
        id: DrawableId,
    },
    Checkpoint,
}

/// `DrawSink` that records the command stream. Backs the wasm boundary
/// (commands ship to the host renderer as one batch) and the tests.
#[derive(Default)]
pub struct CommandSink {
    commands: Vec<DrawCmd>,
    next_id: DrawableId,
}

impl CommandSink {
    pub fn new() -> CommandSink {
        CommandSink::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Drain recorded commands, keeping drawable-id continuity.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSink for CommandSink {
    fn begin(&mut self, key: &str, color: Color, fill_alpha: f32) -> DrawableId {
        let id = self.next_id;
        self.next_id += 1;
        self.commands.push(DrawCmd::Begin {
            id,
            key: key.to_string(),
            color,
            fill_alpha,
        });
        id
    }
    fn fill_polygon(&mut self, d: DrawableId, verts: &[Vec2]) {
        self.commands.push(DrawCmd::FillPolygon {
            id: d,
            verts: verts.to_vec(),
        });
    }
    fn outline(&mut self, d: DrawableId, a: Vec2, b: Vec2, width: f32) {
        self.commands.push(DrawCmd::Outline { id: d, a, b, width });
    }
    fn finish(&mut self, d: DrawableId) {
        self.commands.push(DrawCmd::Finish { id: d });
    }
    fn set_visible(&mut self, d: DrawableId, visible: bool) {
        self.commands.push(DrawCmd::SetVisible { id: d, visible });
    }
    fn destroy(&mut self, d: DrawableId) {
        self.commands.push(DrawCmd::Destroy { id: d });
    }
    fn checkpoint(&mut self) {
        self.commands.push(DrawCmd::Checkpoint);
    }
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub fingerprint: String,
    pub drawable: DrawableId,
    pub visible: bool,
    misses: u32,
}

/// Per-region-key store of `{fingerprint, drawable}` deciding reuse vs.
/// recompute. Entries for keys that vanish from their mode's grouping age
/// out after `STALE_DRAW_EVICT` passes; entries for the inactive modes are
/// merely hidden and kept for instant re-show.
#[derive(Default)]
pub struct RenderCache {
    entries: HashMap<String, CacheEntry>,
    recomputes: u64,
}

impl RenderCache {
    pub fn new() -> RenderCache {
        RenderCache::default()
    }

    /// Total boundary/fill rebuilds since construction. A cache-hit draw
    /// leaves this unchanged.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Order-independent equality proxy for a region's rendered geometry:
    /// identical fingerprints mean identical member sets and color.
    pub fn fingerprint(cells: &[&HexCell], color: Color) -> String {
        let mut ids: Vec<String> = cells.iter().map(|c| c.offset.key()).collect();
        ids.sort_unstable();
        format!("{}:{}", color.to_u32(), ids.join(","))
    }

    /// Layer teardown: destroy every drawable and forget all entries.
    pub fn clear(&mut self, sink: &mut dyn DrawSink) {
        for (_, entry) in self.entries.drain() {
            sink.destroy(entry.drawable);
        }
    }
}

/// One cache-gated draw pass: hide every cached drawable, then per current
/// region reuse (same fingerprint) or rebuild (destroy + re-emit + store),
/// then age out entries whose keys vanished from the active mode.
pub fn draw_pass(
    cache: &mut RenderCache,
    mode: Mode,
    registry: &ClassRegistry,
    groups: &[RegionGroup],
    sink: &mut dyn DrawSink,
) {
    // Exactly one mode's regions end the pass visible.
    for entry in cache.entries.values_mut() {
        if entry.visible {
            sink.set_visible(entry.drawable, false);
            entry.visible = false;
        }
    }

    let mut targeted: HashSet<&str> = HashSet::with_capacity(groups.len());
    for group in groups {
        if group.cells.is_empty() {
            continue;
        }
        targeted.insert(group.key.as_str());
        let color = registry.color(mode, &group.value);
        let fp = RenderCache::fingerprint(&group.cells, color);

        if let Some(entry) = cache.entries.get_mut(&group.key) {
            if entry.fingerprint == fp {
                sink.set_visible(entry.drawable, true);
                entry.visible = true;
                entry.misses = 0;
                continue;
            }
        }
        if let Some(old) = cache.entries.remove(&group.key) {
            sink.destroy(old.drawable);
        }
        let drawable = render_region(&group.key, &group.cells, color, sink);
        cache.recomputes += 1;
        cache.entries.insert(
            group.key.clone(),
            CacheEntry {
                fingerprint: fp,
                drawable,
                visible: true,
                misses: 0,
            },
        );
    }

    // Stale keys: absent from the active mode's grouping this pass. Other
    // modes' entries stay hidden and untouched.
    let prefix = format!("{}-", mode.as_str());
    let mut evict: Vec<String> = Vec::new();
    for (key, entry) in cache.entries.iter_mut() {
        if !key.starts_with(&prefix) || targeted.contains(key.as_str()) {
            continue;
        }
        entry.misses += 1;
        if entry.misses >= STALE_DRAW_EVICT {
            evict.push(key.clone());
        }
    }
    for key in evict {
        if let Some(entry) = cache.entries.remove(&key) {
            sink.destroy(entry.drawable);
            log::debug!("evicted stale region {key}");
        }
    }
}

/// Stream one region's fill polygons and merged outline to the sink.
fn render_region(key: &str, cells: &[&HexCell], color: Color, sink: &mut dyn DrawSink) -> DrawableId {
    let d = sink.begin(key, color, FILL_ALPHA);
    let mut acc = EdgeAccumulator::new();
    for (n, cell) in cells.iter().enumerate() {
        sink.fill_polygon(d, &cell.verts);
        acc.add_polygon(&cell.verts);
        if n > 0 && n % CELLS_PER_CHECKPOINT == 0 {
            sink.checkpoint();
        }
    }
    let mut drawn = 0usize;
    for (a, b) in acc.boundary() {
        sink.outline(d, a, b, OUTLINE_WIDTH);
        drawn += 1;
        if drawn % SEGMENTS_PER_CHECKPOINT == 0 {
            sink.checkpoint();
        }
    }
    sink.finish(d);
    d
}
