use crate::geometry::EdgeKey;
use crate::model::{HexCell, Vec2};
use std::collections::HashMap;

// One undirected polygon edge with its sighting count. Keeps the first
// sighting's unrounded coordinates for drawing.
#[derive(Clone, Copy, Debug)]
struct EdgeEntry {
    a: Vec2,
    b: Vec2,
    count: u8,
}

/// Parity accumulator over a region's polygon edges. In a valid hex
/// tessellation an edge is shared by at most two cells: the second sighting
/// marks it interior, an odd final count marks it boundary. The accumulator
/// does not validate the at-most-two precondition beyond a debug assert.
#[derive(Default)]
pub struct EdgeAccumulator {
    edges: HashMap<EdgeKey, EdgeEntry>,
}

impl EdgeAccumulator {
    pub fn new() -> EdgeAccumulator {
        EdgeAccumulator::default()
    }

    pub fn toggle(&mut self, a: Vec2, b: Vec2) {
        let key = EdgeKey::new(a, b);
        match self.edges.get_mut(&key) {
            Some(entry) => {
                entry.count = entry.count.saturating_add(1);
                debug_assert!(entry.count <= 2, "edge shared by more than two cells");
            }
            None => {
                self.edges.insert(key, EdgeEntry { a, b, count: 1 });
            }
        }
    }

    /// Every polygon edge of a closed vertex ring.
    pub fn add_polygon(&mut self, verts: &[Vec2]) {
        if verts.len() < 2 {
            return;
        }
        for k in 0..verts.len() {
            let a = verts[k];
            let b = verts[(k + 1) % verts.len()];
            self.toggle(a, b);
        }
    }

    /// Edges seen an odd number of times: the region's outer boundary,
    /// including borders against other regions and the grid outside.
    /// Ordered by canonical key so output is deterministic.
    pub fn boundary(self) -> Vec<(Vec2, Vec2)> {
        let mut odd: Vec<(EdgeKey, EdgeEntry)> = self
            .edges
            .into_iter()
            .filter(|(_, e)| e.count % 2 == 1)
            .collect();
        odd.sort_unstable_by(|(ka, _), (kb, _)| ka.cmp(kb));
        odd.into_iter().map(|(_, e)| (e.a, e.b)).collect()
    }
}

/// Outer boundary of a region from its member cells' polygons.
/// O(total vertex count), single pass.
pub fn region_boundary<'a>(cells: impl Iterator<Item = &'a HexCell>) -> Vec<(Vec2, Vec2)> {
    let mut acc = EdgeAccumulator::new();
    for cell in cells {
        acc.add_polygon(&cell.verts);
    }
    acc.boundary()
}
