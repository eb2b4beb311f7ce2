#![allow(dead_code)]

use hexmap::grid::GridVariant;
use hexmap::json::SceneData;
use hexmap::model::{Color, Mode, Offset, Vec2};
use hexmap::registry::ClassInfo;
use hexmap::HexMap;
use std::collections::BTreeMap;

pub const HEX_SIZE: f32 = 10.0;

pub fn hex_center(variant: GridVariant, i: i32, j: i32) -> (f32, f32) {
    let w = 3.0f32.sqrt() * HEX_SIZE;
    match variant {
        // pointy-top, odd rows shifted half a cell right
        GridVariant::OffsetRows => {
            let shift = if i % 2 == 0 { 0.0 } else { 0.5 };
            (w * (j as f32 + shift), 1.5 * HEX_SIZE * i as f32)
        }
        // flat-top, even columns shifted half a cell down
        _ => {
            let shift = if j % 2 == 0 { 0.5 } else { 0.0 };
            (1.5 * HEX_SIZE * j as f32, w * (i as f32 + shift))
        }
    }
}

/// Synthesized host polygon for one cell. Shared corners between adjacent
/// cells are computed from different centers, so they differ by float
/// noise, as host grids' do.
pub fn hex_verts(variant: GridVariant, i: i32, j: i32) -> Vec<Vec2> {
    let (cx, cy) = hex_center(variant, i, j);
    let start = match variant {
        GridVariant::OffsetRows => -30.0f32,
        _ => 0.0f32,
    };
    (0..6)
        .map(|k| {
            let ang = (60.0 * k as f32 + start).to_radians();
            Vec2 {
                x: cx + HEX_SIZE * ang.cos(),
                y: cy + HEX_SIZE * ang.sin(),
            }
        })
        .collect()
}

/// Session over an empty scene with vertices installed and a small
/// classification registry: terrains plains/hills/water (with travel
/// costs), realms r1/r2, travel classes open/rough/water.
pub fn build_map(variant: GridVariant, rows: u32, cols: u32) -> HexMap {
    let scene = SceneData {
        scene_id: "test-scene".to_string(),
        num_rows: rows,
        num_cols: cols,
        hexes: BTreeMap::new(),
    };
    let mut map = HexMap::from_scene(&scene, variant);
    for i in 0..rows as i32 {
        for j in 0..cols as i32 {
            assert!(map.set_vertices(Offset { i, j }, hex_verts(variant, i, j)));
        }
    }
    let reg = map.registry_mut();
    reg.insert(
        Mode::Terrain,
        "plains",
        ClassInfo::new(Color::from_u32(0x7A9E3B), "Plains").with_travel("open"),
    );
    reg.insert(
        Mode::Terrain,
        "hills",
        ClassInfo::new(Color::from_u32(0x8B6F47), "Hills").with_travel("rough"),
    );
    reg.insert(
        Mode::Terrain,
        "water",
        ClassInfo::new(Color::from_u32(0x3B6E9E), "Water").with_travel("water"),
    );
    reg.insert(Mode::Realm, "r1", ClassInfo::new(Color::from_u32(0xAA2233), "Crownlands"));
    reg.insert(Mode::Realm, "r2", ClassInfo::new(Color::from_u32(0x2255AA), "Marches"));
    reg.insert(Mode::Travel, "open", ClassInfo::new(Color::from_u32(0x55AA55), "Open"));
    reg.insert(Mode::Travel, "rough", ClassInfo::new(Color::from_u32(0xAA8855), "Rough"));
    reg.insert(Mode::Travel, "water", ClassInfo::new(Color::from_u32(0x5555AA), "Water"));
    map
}

/// Paint cells through the real patch path: bucket patches applied back as
/// if the store echoed the write.
pub fn paint_terrain(map: &mut HexMap, offsets: &[Offset], terrain: &str) {
    let patches = map.bucket_patches(offsets, terrain);
    assert_eq!(map.apply_patches(&patches), offsets.len());
}

pub fn all_offsets(rows: u32, cols: u32) -> Vec<Offset> {
    let mut out = Vec::new();
    for i in 0..rows as i32 {
        for j in 0..cols as i32 {
            out.push(Offset { i, j });
        }
    }
    out
}
