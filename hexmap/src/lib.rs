pub mod model;
pub mod grid;
pub mod registry;
pub mod json;
pub mod limits;
pub mod geometry;
pub mod algorithms {
    pub mod boundary;
    pub mod flood;
    pub mod group;
}
pub mod render;
pub mod paint;

use std::collections::BTreeMap;

use grid::{Grid, GridVariant};
use json::SceneData;
use model::{HexCell, Mode, Offset, Patch, Vec2};
use paint::{PaintBatcher, SceneStore, StoreError};
use registry::ClassRegistry;
use render::{DrawSink, RenderCache};

/// One scene's hex-overlay session: grid topology, cells, classification
/// registry, active display mode, render cache and pending paint edits.
/// Everything lives here; nothing is process-global.
pub struct HexMap {
    pub(crate) grid: Grid,
    pub(crate) cells: BTreeMap<Offset, HexCell>,
    pub(crate) registry: ClassRegistry,
    pub(crate) mode: Mode,
    pub(crate) cache: RenderCache,
    pub(crate) batcher: PaintBatcher,
    pub(crate) scene_id: String,
}

impl HexMap {
    /// Build the session from a scene document: one cell per offset in the
    /// row x column extent, classification taken from the document's hex
    /// map. Polygon vertices arrive separately via `set_vertices`.
    pub fn from_scene(scene: &SceneData, variant: GridVariant) -> HexMap {
        let grid = Grid {
            variant,
            num_rows: scene.num_rows,
            num_cols: scene.num_cols,
        };
        let mut cells = BTreeMap::new();
        for i in 0..scene.num_rows as i32 {
            for j in 0..scene.num_cols as i32 {
                let offset = Offset { i, j };
                let data = scene.hexes.get(&offset.key()).cloned().unwrap_or_default();
                cells.insert(
                    offset,
                    HexCell {
                        offset,
                        verts: Vec::new(),
                        data,
                    },
                );
            }
        }
        HexMap {
            grid,
            cells,
            registry: ClassRegistry::new(),
            mode: Mode::Realm,
            cache: RenderCache::new(),
            batcher: PaintBatcher::new(),
            scene_id: scene.scene_id.clone(),
        }
    }

    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Change the active display mode. The next draw re-groups and
    /// re-resolves against the cache; nothing is recomputed eagerly.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ClassRegistry {
        &mut self.registry
    }

    pub fn cell(&self, o: Offset) -> Option<&HexCell> {
        self.cells.get(&o)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Install the host-supplied polygon for one cell; read-only to the
    /// core afterwards. Degenerate, oversized or out-of-bounds polygons and
    /// unknown offsets are rejected.
    pub fn set_vertices(&mut self, o: Offset, verts: Vec<Vec2>) -> bool {
        if verts.len() < 3 || verts.len() > limits::MAX_VERTS_PER_CELL {
            return false;
        }
        if !verts
            .iter()
            .all(|p| limits::in_coord_bounds(p.x) && limits::in_coord_bounds(p.y))
        {
            return false;
        }
        match self.cells.get_mut(&o) {
            Some(cell) => {
                cell.verts = verts;
                true
            }
            None => false,
        }
    }

    /// Cache-gated draw of the active mode's regions.
    pub fn draw(&mut self, sink: &mut dyn DrawSink) {
        let groups = algorithms::group::group_by_mode(self.mode, &self.registry, self.cells.values());
        render::draw_pass(&mut self.cache, self.mode, &self.registry, &groups, sink);
        log::debug!(
            "draw pass: mode={} regions={} recomputes={}",
            self.mode.as_str(),
            groups.len(),
            self.cache.recompute_count()
        );
    }

    /// Teardown: destroy every cached drawable and drop all entries.
    pub fn clear_layer(&mut self, sink: &mut dyn DrawSink) {
        self.cache.clear(sink);
    }

    pub fn recompute_count(&self) -> u64 {
        self.cache.recompute_count()
    }

    pub fn cached_regions(&self) -> usize {
        self.cache.len()
    }

    pub fn cached_entry(&self, key: &str) -> Option<&render::CacheEntry> {
        self.cache.entry(key)
    }

    /// Connected same-class component at `start` under `mode`. The caller
    /// checks the no-op case (intended new class equals the start class)
    /// before invoking; the external confirmation step happens outside.
    pub fn flood_fill(&self, mode: Mode, start: Offset) -> Vec<Offset> {
        algorithms::flood::flood_fill(&self.grid, &self.cells, &self.registry, mode, start)
    }

    /// Patch map for a confirmed bucket fill: every target cell gets the
    /// terrain and its registry travel cost. One write's worth.
    pub fn bucket_patches(&self, targets: &[Offset], terrain: &str) -> BTreeMap<String, Patch> {
        let travel = self.registry.travel_cost(terrain);
        targets
            .iter()
            .map(|o| {
                (
                    o.key(),
                    Patch::Terrain {
                        terrain: terrain.to_string(),
                        travel: travel.clone(),
                    },
                )
            })
            .collect()
    }

    /// Stage a terrain paint for one cell during a drag gesture. Guarded
    /// no-op unless the terrain is registered and differs from the cell's
    /// current one. Returns whether a patch was staged.
    pub fn stage_terrain(&mut self, o: Offset, terrain: &str) -> bool {
        let cell = match self.cells.get(&o) {
            Some(c) => c,
            None => return false,
        };
        if self.registry.get(Mode::Terrain, terrain).is_none() || cell.data.terrain == terrain {
            return false;
        }
        let travel = self.registry.travel_cost(terrain);
        self.batcher.stage(
            o.key(),
            Patch::Terrain {
                terrain: terrain.to_string(),
                travel,
            },
        );
        true
    }

    /// Stage a realm claim for one cell. Same guards as terrain painting.
    pub fn stage_claim(&mut self, o: Offset, realm: &str) -> bool {
        let cell = match self.cells.get(&o) {
            Some(c) => c,
            None => return false,
        };
        if self.registry.get(Mode::Realm, realm).is_none() || cell.data.claimed == realm {
            return false;
        }
        self.batcher.stage(
            o.key(),
            Patch::Claim {
                claimed: realm.to_string(),
            },
        );
        true
    }

    pub fn pending_len(&self) -> usize {
        self.batcher.pending_len()
    }

    /// Commit the gesture's staged patches as one store write. Pending
    /// state clears regardless of the outcome.
    pub fn commit(&mut self, store: &mut dyn SceneStore) -> Result<usize, StoreError> {
        self.batcher.commit(store)
    }

    /// Merge a committed patch map back onto the in-memory cells (the store
    /// echoes writes through the host's scene-update hook, which then
    /// requests a redraw). Unknown keys are ignored. Returns the number of
    /// cells touched.
    pub fn apply_patches(&mut self, patches: &BTreeMap<String, Patch>) -> usize {
        let mut touched = 0usize;
        for (key, patch) in patches {
            let offset = match Offset::parse_key(key) {
                Some(o) => o,
                None => continue,
            };
            let cell = match self.cells.get_mut(&offset) {
                Some(c) => c,
                None => continue,
            };
            match patch {
                Patch::Terrain { terrain, travel } => {
                    cell.data.terrain = terrain.clone();
                    cell.data.travel = travel.clone();
                }
                Patch::Claim { claimed } => {
                    cell.data.claimed = claimed.clone();
                }
            }
            touched += 1;
        }
        touched
    }
}
