use crate::{error, interop, HexMap};
use hexmap::grid::GridVariant;
use hexmap::json::{self, SceneData};
use hexmap::model::{Color, Mode, Offset, Patch};
use hexmap::paint::{SceneStore, StoreError};
use hexmap::registry::ClassInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Patch maps cross the boundary in the store's flag shape:
/// `{hexes: {"i.j": {terrain, travel} | {claimed}}}`.
#[derive(Serialize, Deserialize)]
struct PatchDoc {
    hexes: BTreeMap<String, Patch>,
}

// Persistence adapter for `commit`: the folded write is handed back to the
// host, which merges it into the scene flags (fire-and-forget for the core).
#[derive(Default)]
struct CollectStore {
    patches: Option<BTreeMap<String, Patch>>,
}

impl SceneStore for CollectStore {
    fn write(&mut self, patches: &BTreeMap<String, Patch>) -> Result<(), StoreError> {
        self.patches = Some(patches.clone());
        Ok(())
    }
}

fn parse_scene(v: JsValue) -> Result<SceneData, String> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(v).map_err(|e| e.to_string())?;
    json::scene_from_value(value).map_err(|e| e.to_string())
}

#[wasm_bindgen]
impl HexMap {
    /// Empty session over a bare extent; grid codes: 0 offset-rows,
    /// 1 offset-columns, anything else an unsupported (inert) layout.
    #[wasm_bindgen(constructor)]
    pub fn new(num_rows: u32, num_cols: u32, grid_code: u8) -> HexMap {
        let scene = SceneData {
            scene_id: String::new(),
            num_rows,
            num_cols,
            hexes: BTreeMap::new(),
        };
        HexMap {
            inner: hexmap::HexMap::from_scene(&scene, GridVariant::from_code(grid_code)),
            sink: hexmap::render::CommandSink::new(),
        }
    }

    /// Replace the session with one built from a scene document. The
    /// classification registry starts empty; re-register entries after.
    pub fn load_scene(&mut self, scene: JsValue, grid_code: u8) -> JsValue {
        match parse_scene(scene) {
            Ok(data) => {
                self.inner = hexmap::HexMap::from_scene(&data, GridVariant::from_code(grid_code));
                self.sink = hexmap::render::CommandSink::new();
                error::ok(JsValue::from_f64(self.inner.cell_count() as f64))
            }
            Err(msg) => {
                web_sys::console::warn_1(&JsValue::from_str(&msg));
                error::bad_scene(msg)
            }
        }
    }

    pub fn scene_id(&self) -> String {
        self.inner.scene_id().to_string()
    }

    pub fn cell_count(&self) -> u32 {
        self.inner.cell_count() as u32
    }

    // Vertices

    pub fn set_vertices(&mut self, i: i32, j: i32, verts: JsValue) -> bool {
        match interop::parse_vertices(&verts) {
            Some(pts) => self.inner.set_vertices(Offset { i, j }, pts),
            None => false,
        }
    }

    pub fn set_vertices_res(&mut self, i: i32, j: i32, verts: JsValue) -> JsValue {
        let pts = match interop::parse_vertices(&verts) {
            Some(p) => p,
            None => return error::bad_vertices(i, j),
        };
        if self.inner.cell(Offset { i, j }).is_none() {
            return error::invalid_offset(i, j);
        }
        if !self.inner.set_vertices(Offset { i, j }, pts) {
            return error::bad_vertices(i, j);
        }
        error::ok(JsValue::TRUE)
    }

    // Classification registry

    /// Register one classification entry. Kinds: 0 terrain, 1 realm,
    /// 2 travel. Terrain entries may carry the travel cost id used when a
    /// terrain patch is staged.
    pub fn register_class(
        &mut self,
        kind: u8,
        id: String,
        color: u32,
        label: String,
        travel: Option<String>,
    ) -> bool {
        let kind = match Mode::from_code(kind) {
            Some(k) => k,
            None => return false,
        };
        let mut info = ClassInfo::new(Color::from_u32(color), label);
        if let Some(t) = travel {
            info = info.with_travel(t);
        }
        self.inner.registry_mut().insert(kind, id, info);
        true
    }

    /// Label for a class id, falling back for unknown ids.
    pub fn class_label(&self, kind: u8, id: &str) -> String {
        match Mode::from_code(kind) {
            Some(k) => self.inner.registry().label(k, id).to_string(),
            None => hexmap::registry::FALLBACK_LABEL.to_string(),
        }
    }

    // Mode

    pub fn set_mode(&mut self, mode: u8) -> bool {
        match Mode::from_code(mode) {
            Some(m) => {
                self.inner.set_mode(m);
                true
            }
            None => false,
        }
    }

    pub fn set_mode_res(&mut self, mode: u8) -> JsValue {
        if self.set_mode(mode) {
            error::ok(JsValue::from_f64(mode as f64))
        } else {
            error::invalid_mode(mode)
        }
    }

    pub fn mode(&self) -> u8 {
        self.inner.mode() as u8
    }

    // Drawing

    /// Run one cache-gated draw pass and return the recorded command
    /// stream (fills, outlines, visibility, destroys, checkpoints) for the
    /// host renderer to execute.
    pub fn draw(&mut self) -> JsValue {
        self.inner.draw(&mut self.sink);
        let cmds = self.sink.take();
        serde_wasm_bindgen::to_value(&cmds).unwrap_or(JsValue::NULL)
    }

    /// Tear down the overlay layer: destroy commands for every cached
    /// drawable.
    pub fn clear_layer(&mut self) -> JsValue {
        self.inner.clear_layer(&mut self.sink);
        let cmds = self.sink.take();
        serde_wasm_bindgen::to_value(&cmds).unwrap_or(JsValue::NULL)
    }

    pub fn recompute_count(&self) -> u64 {
        self.inner.recompute_count()
    }

    pub fn cached_regions(&self) -> u32 {
        self.inner.cached_regions() as u32
    }

    // Cell inspection (HUD/dialogs)

    pub fn cell_data(&self, i: i32, j: i32) -> JsValue {
        match self.inner.cell(Offset { i, j }) {
            Some(cell) => serde_wasm_bindgen::to_value(&cell.data).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    // Bucket fill

    /// Connected same-class cells at the start offset, for the host's
    /// confirmation dialog. Returns an array of `{i, j}`.
    pub fn flood_fill(&self, mode: u8, i: i32, j: i32) -> JsValue {
        let mode = match Mode::from_code(mode) {
            Some(m) => m,
            None => return JsValue::NULL,
        };
        let cells = self.inner.flood_fill(mode, Offset { i, j });
        serde_wasm_bindgen::to_value(&cells).unwrap_or(JsValue::NULL)
    }

    /// Patch document for a confirmed bucket fill over `targets`
    /// (array of `{i, j}`).
    pub fn bucket_patches(&self, targets: JsValue, terrain: &str) -> JsValue {
        let targets: Vec<Offset> = match serde_wasm_bindgen::from_value(targets) {
            Ok(t) => t,
            Err(_) => return JsValue::NULL,
        };
        let doc = PatchDoc {
            hexes: self.inner.bucket_patches(&targets, terrain),
        };
        serde_wasm_bindgen::to_value(&doc).unwrap_or(JsValue::NULL)
    }

    // Paint gesture

    pub fn stage_terrain(&mut self, i: i32, j: i32, terrain: &str) -> bool {
        self.inner.stage_terrain(Offset { i, j }, terrain)
    }

    pub fn stage_claim(&mut self, i: i32, j: i32, realm: &str) -> bool {
        self.inner.stage_claim(Offset { i, j }, realm)
    }

    pub fn pending_len(&self) -> u32 {
        self.inner.pending_len() as u32
    }

    /// End-of-gesture commit: folds staged edits last-write-wins and
    /// returns the one-write patch document, or null when nothing was
    /// staged. Pending state clears either way.
    pub fn commit(&mut self) -> JsValue {
        let mut store = CollectStore::default();
        match self.inner.commit(&mut store) {
            Ok(0) => JsValue::NULL,
            Ok(_) => {
                let doc = PatchDoc {
                    hexes: store.patches.unwrap_or_default(),
                };
                serde_wasm_bindgen::to_value(&doc).unwrap_or(JsValue::NULL)
            }
            // CollectStore never fails; staged edits were dropped anyway.
            Err(_) => JsValue::NULL,
        }
    }

    /// Merge a committed patch document back onto the cells (the host's
    /// scene-update hook calls this, then `draw`). Returns cells touched.
    pub fn apply_patches(&mut self, patches: JsValue) -> u32 {
        match serde_wasm_bindgen::from_value::<PatchDoc>(patches) {
            Ok(doc) => self.inner.apply_patches(&doc.hexes) as u32,
            Err(_) => 0,
        }
    }

    pub fn apply_patches_res(&mut self, patches: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<PatchDoc>(patches) {
            Ok(doc) => {
                let n = self.inner.apply_patches(&doc.hexes);
                error::ok(JsValue::from_f64(n as f64))
            }
            Err(_) => error::bad_patches(),
        }
    }
}
