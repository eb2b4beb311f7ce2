use crate::model::{CellData, Color, Mode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FALLBACK_COLOR: Color = Color {
    r: 0x88,
    g: 0x88,
    b: 0x88,
};
pub const FALLBACK_LABEL: &str = "Unknown";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassInfo {
    pub color: Color,
    pub label: String,
    /// Travel cost id carried by terrain entries; the travel field of a
    /// terrain patch is derived from it. None for realm/travel kinds.
    #[serde(default)]
    pub travel: Option<String>,
}

impl ClassInfo {
    pub fn new(color: Color, label: impl Into<String>) -> ClassInfo {
        ClassInfo {
            color,
            label: label.into(),
            travel: None,
        }
    }

    pub fn with_travel(mut self, travel: impl Into<String>) -> ClassInfo {
        self.travel = Some(travel.into());
        self
    }
}

/// Host-supplied classification tables, one per kind. An explicit service
/// object: lookups never consult ambient state, and unknown ids resolve to
/// the fixed fallback rather than erroring.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClassRegistry {
    terrains: HashMap<String, ClassInfo>,
    realms: HashMap<String, ClassInfo>,
    travels: HashMap<String, ClassInfo>,
}

impl ClassRegistry {
    pub fn new() -> ClassRegistry {
        ClassRegistry::default()
    }

    fn table(&self, mode: Mode) -> &HashMap<String, ClassInfo> {
        match mode {
            Mode::Terrain => &self.terrains,
            Mode::Realm => &self.realms,
            Mode::Travel => &self.travels,
        }
    }

    pub fn insert(&mut self, mode: Mode, id: impl Into<String>, info: ClassInfo) {
        let table = match mode {
            Mode::Terrain => &mut self.terrains,
            Mode::Realm => &mut self.realms,
            Mode::Travel => &mut self.travels,
        };
        table.insert(id.into(), info);
    }

    pub fn get(&self, mode: Mode, id: &str) -> Option<&ClassInfo> {
        self.table(mode).get(id)
    }

    /// Fill color for a class id; unknown ids get the fallback color.
    pub fn color(&self, mode: Mode, id: &str) -> Color {
        self.get(mode, id).map_or(FALLBACK_COLOR, |info| info.color)
    }

    pub fn label<'a>(&'a self, mode: Mode, id: &str) -> &'a str {
        self.get(mode, id).map_or(FALLBACK_LABEL, |info| info.label.as_str())
    }

    /// Travel cost recorded on a terrain entry; empty when unregistered.
    pub fn travel_cost(&self, terrain: &str) -> String {
        self.terrains
            .get(terrain)
            .and_then(|info| info.travel.clone())
            .unwrap_or_default()
    }

    /// Mode selector: the classification value a cell groups under.
    pub fn class_of<'a>(&self, mode: Mode, data: &'a CellData) -> &'a str {
        match mode {
            Mode::Terrain => &data.terrain,
            Mode::Realm => &data.claimed,
            Mode::Travel => &data.travel,
        }
    }
}
