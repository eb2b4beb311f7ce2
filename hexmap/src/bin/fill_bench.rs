#[cfg(not(feature = "bench_fill"))]
fn main() {
    panic!("fill_bench requires --features bench_fill");
}

#[cfg(feature = "bench_fill")]
fn main() {
    use hexmap::grid::GridVariant;
    use hexmap::json::SceneData;
    use hexmap::model::{Color, Mode, Offset, Vec2};
    use hexmap::registry::ClassInfo;
    use hexmap::render::{DrawSink, DrawableId};
    use hexmap::HexMap;
    use std::time::Instant;

    let args: Vec<String> = std::env::args().collect();
    let mut rows = 128usize;
    let mut cols = 128usize;
    let mut repeats = 10usize;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--rows=") {
            if let Ok(v) = val.parse() {
                rows = v;
            }
        } else if let Some(val) = a.strip_prefix("--cols=") {
            if let Ok(v) = val.parse() {
                cols = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        }
    }

    struct NullSink;
    impl DrawSink for NullSink {
        fn begin(&mut self, _key: &str, _color: Color, _fill_alpha: f32) -> DrawableId {
            0
        }
        fn fill_polygon(&mut self, _d: DrawableId, _verts: &[Vec2]) {}
        fn outline(&mut self, _d: DrawableId, _a: Vec2, _b: Vec2, _width: f32) {}
        fn finish(&mut self, _d: DrawableId) {}
        fn set_visible(&mut self, _d: DrawableId, _visible: bool) {}
        fn destroy(&mut self, _d: DrawableId) {}
        fn checkpoint(&mut self) {}
    }

    let scene = SceneData {
        scene_id: "bench".to_string(),
        num_rows: rows as u32,
        num_cols: cols as u32,
        hexes: Default::default(),
    };
    let mut map = HexMap::from_scene(&scene, GridVariant::OffsetRows);
    map.registry_mut().insert(
        Mode::Terrain,
        "plains",
        ClassInfo::new(Color::from_u32(0x7A9E3B), "Plains").with_travel("open"),
    );

    // Pointy-top odd-r vertex synthesis, uniform classification.
    let size = 10.0f32;
    let w = 3.0f32.sqrt() * size;
    for i in 0..rows as i32 {
        for j in 0..cols as i32 {
            let shift = if i % 2 == 0 { 0.0 } else { 0.5 };
            let cx = w * (j as f32 + shift);
            let cy = 1.5 * size * i as f32;
            let verts: Vec<Vec2> = (0..6)
                .map(|k| {
                    let ang = std::f32::consts::PI / 180.0 * (60.0 * k as f32 - 30.0);
                    Vec2 {
                        x: cx + size * ang.cos(),
                        y: cy + size * ang.sin(),
                    }
                })
                .collect();
            map.set_vertices(Offset { i, j }, verts);
        }
    }
    let targets = map.flood_fill(Mode::Terrain, Offset { i: 0, j: 0 });
    let patches = map.bucket_patches(&targets, "plains");
    map.apply_patches(&patches);
    map.set_mode(Mode::Terrain);

    let t0 = Instant::now();
    let mut filled = 0usize;
    for _ in 0..repeats {
        filled = map.flood_fill(Mode::Terrain, Offset { i: 0, j: 0 }).len();
    }
    let fill_ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

    let mut sink = NullSink;
    let t1 = Instant::now();
    map.draw(&mut sink);
    let first_ms = t1.elapsed().as_secs_f64() * 1000.0;
    let t2 = Instant::now();
    for _ in 0..repeats {
        map.draw(&mut sink);
    }
    let cached_ms = t2.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

    println!(
        "{}x{} cells={} fill={} avg_fill_ms={:.3} first_draw_ms={:.3} cached_draw_ms={:.3} recomputes={}",
        rows,
        cols,
        map.cell_count(),
        filled,
        fill_ms,
        first_ms,
        cached_ms,
        map.recompute_count()
    );
}
