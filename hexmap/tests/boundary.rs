mod support;

use hexmap::algorithms::boundary::EdgeAccumulator;
use hexmap::geometry::EdgeKey;
use hexmap::grid::GridVariant;
use hexmap::model::Vec2;
use std::collections::HashSet;
use support::hex_verts;

fn polygon_edge_keys(verts: &[Vec2]) -> HashSet<EdgeKey> {
    let mut keys = HashSet::new();
    for k in 0..verts.len() {
        keys.insert(EdgeKey::new(verts[k], verts[(k + 1) % verts.len()]));
    }
    keys
}

fn boundary_keys(polys: &[Vec<Vec2>]) -> Vec<EdgeKey> {
    let mut acc = EdgeAccumulator::new();
    for p in polys {
        acc.add_polygon(p);
    }
    acc.boundary()
        .into_iter()
        .map(|(a, b)| EdgeKey::new(a, b))
        .collect()
}

#[test]
fn single_cell_boundary_is_its_own_polygon() {
    for variant in [GridVariant::OffsetRows, GridVariant::OffsetColumns] {
        let poly = hex_verts(variant, 1, 1);
        let boundary = boundary_keys(&[poly.clone()]);
        assert_eq!(boundary.len(), 6, "{variant:?}");
        let expect = polygon_edge_keys(&poly);
        assert_eq!(boundary.iter().copied().collect::<HashSet<_>>(), expect);
    }
}

#[test]
fn adjacent_pair_cancels_only_the_shared_edge() {
    for variant in [GridVariant::OffsetRows, GridVariant::OffsetColumns] {
        let a = hex_verts(variant, 0, 0);
        let b = hex_verts(variant, 0, 1);
        let keys_a = polygon_edge_keys(&a);
        let keys_b = polygon_edge_keys(&b);
        let shared: HashSet<EdgeKey> = keys_a.intersection(&keys_b).copied().collect();
        assert_eq!(shared.len(), 1, "{variant:?}: expected one shared edge");

        let boundary = boundary_keys(&[a, b]);
        assert_eq!(boundary.len(), 10, "{variant:?}");
        let bset: HashSet<EdgeKey> = boundary.iter().copied().collect();
        assert_eq!(bset.len(), boundary.len(), "edges emitted once each");
        for k in &shared {
            assert!(!bset.contains(k), "{variant:?}: interior edge survived");
        }
        for k in keys_a.union(&keys_b) {
            if !shared.contains(k) {
                assert!(bset.contains(k), "{variant:?}: outer edge missing");
            }
        }
    }
}

#[test]
fn row_of_three_has_fourteen_edges() {
    let polys: Vec<Vec<Vec2>> = (0..3)
        .map(|j| hex_verts(GridVariant::OffsetRows, 0, j))
        .collect();
    // 18 polygon edges minus 2 per shared border
    assert_eq!(boundary_keys(&polys).len(), 14);
}

#[test]
fn region_with_hole_keeps_inner_boundary() {
    // Ring of the six neighbors of (1,1), without (1,1) itself: the
    // boundary must contain the missing cell's entire polygon as the hole.
    let ring = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)];
    let polys: Vec<Vec<Vec2>> = ring
        .iter()
        .map(|&(i, j)| hex_verts(GridVariant::OffsetRows, i, j))
        .collect();
    let bset: HashSet<EdgeKey> = boundary_keys(&polys).into_iter().collect();
    let hole = polygon_edge_keys(&hex_verts(GridVariant::OffsetRows, 1, 1));
    for k in &hole {
        assert!(bset.contains(k), "hole edge missing from boundary");
    }
}

#[test]
fn float_noise_between_neighbors_still_cancels() {
    // Perturb one polygon by less than the quantization step; the shared
    // edge must still cancel.
    let a = hex_verts(GridVariant::OffsetRows, 0, 0);
    let b: Vec<Vec2> = hex_verts(GridVariant::OffsetRows, 0, 1)
        .into_iter()
        .map(|p| Vec2 {
            x: p.x + 0.002,
            y: p.y - 0.002,
        })
        .collect();
    assert_eq!(boundary_keys(&[a, b]).len(), 10);
}

#[test]
fn degenerate_polygons_contribute_nothing() {
    let mut acc = EdgeAccumulator::new();
    acc.add_polygon(&[]);
    acc.add_polygon(&[Vec2 { x: 1.0, y: 2.0 }]);
    assert!(acc.boundary().is_empty());
}

#[test]
fn region_boundary_over_session_cells() {
    use hexmap::algorithms::boundary::region_boundary;
    use hexmap::model::Offset;

    let map = support::build_map(GridVariant::OffsetRows, 1, 2);
    let cells = [
        map.cell(Offset::new(0, 0)).unwrap(),
        map.cell(Offset::new(0, 1)).unwrap(),
    ];
    let edges = region_boundary(cells.into_iter());
    assert_eq!(edges.len(), 10);
}

#[test]
fn boundary_output_is_deterministic() {
    let polys: Vec<Vec<Vec2>> = (0..4)
        .map(|j| hex_verts(GridVariant::OffsetRows, 0, j))
        .collect();
    let first = boundary_keys(&polys);
    let second = boundary_keys(&polys);
    assert_eq!(first, second);
}
