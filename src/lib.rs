use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// Wasm-facing session wrapper. The command sink outlives individual draw
/// passes so drawable ids stay unique for the cache's lifetime.
#[wasm_bindgen]
pub struct HexMap {
    pub(crate) inner: hexmap::HexMap,
    pub(crate) sink: hexmap::render::CommandSink,
}

impl HexMap {
    pub fn rs_inner(&self) -> &hexmap::HexMap { &self.inner }
}
