use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_u32(rgb: u32) -> Color {
        Color {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Offset coordinates of one grid cell: row `i`, column `j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Offset {
    pub i: i32,
    pub j: i32,
}

impl Offset {
    pub fn new(i: i32, j: i32) -> Offset {
        Offset { i, j }
    }

    /// Stable cell identity used for persistence keys and fingerprints.
    pub fn key(&self) -> String {
        format!("{}.{}", self.i, self.j)
    }

    pub fn parse_key(s: &str) -> Option<Offset> {
        let (i, j) = s.split_once('.')?;
        Some(Offset {
            i: i.parse().ok()?,
            j: j.parse().ok()?,
        })
    }
}

/// Active display mode; doubles as the classification kind a region key is
/// namespaced under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Terrain = 0,
    Realm = 1,
    Travel = 2,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Terrain => "terrain",
            Mode::Realm => "realm",
            Mode::Travel => "travel",
        }
    }

    pub fn from_code(code: u8) -> Option<Mode> {
        match code {
            0 => Some(Mode::Terrain),
            1 => Some(Mode::Realm),
            2 => Some(Mode::Travel),
            _ => None,
        }
    }
}

/// Classification state of one cell. Empty strings mean "no value yet";
/// such cells still group and render, under the fallback color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellData {
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub claimed: String,
    #[serde(default)]
    pub travel: String,
}

/// One grid cell: offset identity, host-supplied polygon (read-only to the
/// core once set), and classification state mutated only through patches.
#[derive(Clone, Debug)]
pub struct HexCell {
    pub offset: Offset,
    pub verts: Vec<Vec2>,
    pub data: CellData,
}

/// A staged classification edit for one cell. Serializes to exactly the
/// field set the scene store merges: `{terrain, travel}` or `{claimed}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patch {
    Terrain { terrain: String, travel: String },
    Claim { claimed: String },
}
