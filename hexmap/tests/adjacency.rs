mod support;

use hexmap::grid::{Grid, GridVariant};
use hexmap::model::Offset;
use support::{hex_center, HEX_SIZE};

fn grid(variant: GridVariant) -> Grid {
    Grid {
        variant,
        num_rows: 5,
        num_cols: 5,
    }
}

#[test]
fn corner_returns_fewer_than_six() {
    for variant in [GridVariant::OffsetRows, GridVariant::OffsetColumns] {
        let g = grid(variant);
        let n = g.neighbors(Offset { i: 0, j: 0 });
        assert!(!n.is_empty() && n.len() < 6, "{variant:?}: {}", n.len());
        for o in &n {
            assert!(g.contains(*o), "{variant:?} out of bounds {o:?}");
        }
    }
}

#[test]
fn interior_cell_has_six_neighbors_on_both_parities() {
    for variant in [GridVariant::OffsetRows, GridVariant::OffsetColumns] {
        let g = grid(variant);
        // (2,2) even parity, (1,1) and (2,1)/(1,2) cover odd row and column
        for o in [
            Offset { i: 2, j: 2 },
            Offset { i: 1, j: 1 },
            Offset { i: 1, j: 2 },
            Offset { i: 2, j: 1 },
        ] {
            assert_eq!(g.neighbors(o).len(), 6, "{variant:?} {o:?}");
        }
    }
}

#[test]
fn neighbors_are_metrically_adjacent() {
    // In both layouts adjacent hex centers sit exactly sqrt(3)*size apart.
    let expect = 3.0f32.sqrt() * HEX_SIZE;
    for variant in [GridVariant::OffsetRows, GridVariant::OffsetColumns] {
        let g = grid(variant);
        for i in 0..5 {
            for j in 0..5 {
                let (cx, cy) = hex_center(variant, i, j);
                for n in g.neighbors(Offset { i, j }) {
                    let (nx, ny) = hex_center(variant, n.i, n.j);
                    let d = ((nx - cx).powi(2) + (ny - cy).powi(2)).sqrt();
                    assert!(
                        (d - expect).abs() < 1e-3,
                        "{variant:?} ({i},{j})->{n:?} dist {d}"
                    );
                }
            }
        }
    }
}

#[test]
fn adjacency_is_symmetric() {
    for variant in [GridVariant::OffsetRows, GridVariant::OffsetColumns] {
        let g = grid(variant);
        for i in 0..5 {
            for j in 0..5 {
                let o = Offset { i, j };
                for n in g.neighbors(o) {
                    assert!(
                        g.neighbors(n).contains(&o),
                        "{variant:?} {o:?} -> {n:?} not symmetric"
                    );
                }
            }
        }
    }
}

#[test]
fn unsupported_variant_is_inert() {
    let g = Grid {
        variant: GridVariant::Unsupported,
        num_rows: 5,
        num_cols: 5,
    };
    assert!(g.neighbors(Offset { i: 2, j: 2 }).is_empty());
}

#[test]
fn unknown_host_code_maps_to_unsupported() {
    assert_eq!(GridVariant::from_code(0), GridVariant::OffsetRows);
    assert_eq!(GridVariant::from_code(1), GridVariant::OffsetColumns);
    assert_eq!(GridVariant::from_code(7), GridVariant::Unsupported);
}
