use hexmap::model::Vec2;
use js_sys::{Array, Float32Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn point_of(v: &JsValue) -> Option<Vec2> {
    // [x, y] pair
    if Array::is_array(v) {
        let arr = Array::from(v);
        if arr.length() < 2 { return None; }
        let x = arr.get(0).as_f64()? as f32;
        let y = arr.get(1).as_f64()? as f32;
        return Some(Vec2 { x, y });
    }
    // {x, y} object
    let x = Reflect::get(v, &JsValue::from_str("x")).ok()?.as_f64()? as f32;
    let y = Reflect::get(v, &JsValue::from_str("y")).ok()?.as_f64()? as f32;
    Some(Vec2 { x, y })
}

/// Host grids hand polygons over either as a flat number array
/// `[x0,y0,x1,y1,...]` (possibly a Float32Array) or as a list of points
/// (`[x,y]` pairs or `{x,y}` objects). Accept all three forms.
pub fn parse_vertices(v: &JsValue) -> Option<Vec<Vec2>> {
    if let Some(f32s) = v.dyn_ref::<Float32Array>() {
        let flat = f32s.to_vec();
        if flat.len() < 2 || flat.len() % 2 != 0 { return None; }
        return Some(flat.chunks_exact(2).map(|c| Vec2 { x: c[0], y: c[1] }).collect());
    }
    if !Array::is_array(v) { return None; }
    let arr = Array::from(v);
    if arr.length() == 0 { return None; }
    if arr.get(0).as_f64().is_some() {
        // flat [x0,y0,x1,y1,...]
        if arr.length() % 2 != 0 { return None; }
        let mut out = Vec::with_capacity(arr.length() as usize / 2);
        let mut k = 0;
        while k < arr.length() {
            let x = arr.get(k).as_f64()? as f32;
            let y = arr.get(k + 1).as_f64()? as f32;
            out.push(Vec2 { x, y });
            k += 2;
        }
        return Some(out);
    }
    let mut out = Vec::with_capacity(arr.length() as usize);
    for k in 0..arr.length() {
        out.push(point_of(&arr.get(k))?);
    }
    Some(out)
}
