// Edge canonicalization for boundary parity accumulation

use crate::model::Vec2;

// Quantization grid for edge matching (0.01 px). Neighboring cells compute
// their shared corners from different centers; two decimals absorb the noise.
pub const QUANT_SCALE: f32 = 100.0;

#[inline]
pub fn quant(x: f32) -> i64 {
    (x * QUANT_SCALE).round() as i64
}

/// Canonical key for an undirected polygon edge: endpoints quantized and
/// ordered lexicographically, so both cells incident to a shared edge
/// produce the same key regardless of winding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    pub a: (i64, i64),
    pub b: (i64, i64),
}

impl EdgeKey {
    pub fn new(p: Vec2, q: Vec2) -> EdgeKey {
        let a = (quant(p.x), quant(p.y));
        let b = (quant(q.x), quant(q.y));
        if a <= b {
            EdgeKey { a, b }
        } else {
            EdgeKey { a: b, b: a }
        }
    }
}
