use crate::model::Offset;
use serde::{Deserialize, Serialize};

/// Supported host grid layouts. Unknown host codes map to `Unsupported`:
/// adjacency yields no neighbors and fill/paint degrade to single-cell
/// operations instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridVariant {
    /// Parity branches on row `i`; odd rows sit half a cell to the right.
    OffsetRows,
    /// Parity branches on column `j`; even columns sit half a cell down.
    OffsetColumns,
    Unsupported,
}

impl GridVariant {
    pub fn from_code(code: u8) -> GridVariant {
        match code {
            0 => GridVariant::OffsetRows,
            1 => GridVariant::OffsetColumns,
            _ => GridVariant::Unsupported,
        }
    }
}

// Neighbor direction tables, 6 relative (di, dj) per parity branch.
const ROWS_EVEN: [(i32, i32); 6] = [
    (-1, -1), (-1, 0), // NW, NE
    (0, -1), (0, 1),   // W, E
    (1, -1), (1, 0),   // SW, SE
];
const ROWS_ODD: [(i32, i32); 6] = [
    (-1, 0), (-1, 1), // NW, NE
    (0, -1), (0, 1),  // W, E
    (1, 0), (1, 1),   // SW, SE
];
const COLS_EVEN: [(i32, i32); 6] = [
    (-1, 0), (0, -1), // N, NW
    (0, 1), (1, -1),  // NE, SW
    (1, 0), (1, 1),   // S, SE
];
const COLS_ODD: [(i32, i32); 6] = [
    (-1, -1), (-1, 0), // NW, N
    (-1, 1), (0, -1),  // NE, W
    (0, 1), (1, 0),    // E, S
];

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Grid {
    pub variant: GridVariant,
    pub num_rows: u32,
    pub num_cols: u32,
}

impl Grid {
    pub fn contains(&self, o: Offset) -> bool {
        o.i >= 0 && o.j >= 0 && (o.i as u32) < self.num_rows && (o.j as u32) < self.num_cols
    }

    /// In-bounds neighbors of `o`. Border cells return fewer than 6;
    /// out-of-range candidates are dropped, never an error.
    pub fn neighbors(&self, o: Offset) -> Vec<Offset> {
        let dirs: &[(i32, i32); 6] = match self.variant {
            GridVariant::OffsetRows => {
                if o.i % 2 == 0 {
                    &ROWS_EVEN
                } else {
                    &ROWS_ODD
                }
            }
            GridVariant::OffsetColumns => {
                if o.j % 2 == 0 {
                    &COLS_EVEN
                } else {
                    &COLS_ODD
                }
            }
            GridVariant::Unsupported => return Vec::new(),
        };
        let mut out = Vec::with_capacity(6);
        for &(di, dj) in dirs {
            let n = Offset {
                i: o.i + di,
                j: o.j + dj,
            };
            if self.contains(n) {
                out.push(n);
            }
        }
        out
    }
}
