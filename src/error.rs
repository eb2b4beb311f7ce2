use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn invalid_offset(i: i32, j: i32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "i", &JsValue::from_f64(i as f64));
    set_kv(&d, "j", &JsValue::from_f64(j as f64));
    err("invalid_offset", format!("no cell at offset {}.{}", i, j), Some(d.into()))
}

#[inline]
pub fn invalid_mode(got: u8) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("invalid_mode", "mode must be 0:Terrain, 1:Realm, 2:Travel", Some(d.into()))
}

#[inline]
pub fn bad_scene(message: impl Into<String>) -> JsValue {
    err("bad_scene", message, None)
}

#[inline]
pub fn bad_vertices(i: i32, j: i32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "i", &JsValue::from_f64(i as f64));
    set_kv(&d, "j", &JsValue::from_f64(j as f64));
    err("bad_vertices", "vertices must be 3..=64 finite points", Some(d.into()))
}

#[inline]
pub fn bad_patches() -> JsValue {
    err("bad_patches", "expected {hexes: {\"i.j\": patch}}", None)
}
