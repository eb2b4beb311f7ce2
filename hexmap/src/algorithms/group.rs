use crate::model::{HexCell, Mode};
use crate::registry::ClassRegistry;
use std::collections::BTreeMap;

/// One classification region under the active mode: every cell currently
/// sharing `value`, keyed `"{mode}-{value}"`. Ephemeral; rebuilt per draw.
pub struct RegionGroup<'a> {
    pub key: String,
    pub value: String,
    pub cells: Vec<&'a HexCell>,
}

/// Partition cells into regions by the mode's selector. Cells with a
/// missing classification still group, under the empty value; color
/// resolution is deferred to the draw pass.
pub fn group_by_mode<'a>(
    mode: Mode,
    registry: &ClassRegistry,
    cells: impl Iterator<Item = &'a HexCell>,
) -> Vec<RegionGroup<'a>> {
    let mut buckets: BTreeMap<String, Vec<&HexCell>> = BTreeMap::new();
    for cell in cells {
        let value = registry.class_of(mode, &cell.data);
        buckets.entry(value.to_string()).or_default().push(cell);
    }
    buckets
        .into_iter()
        .map(|(value, cells)| RegionGroup {
            key: format!("{}-{}", mode.as_str(), value),
            value,
            cells,
        })
        .collect()
}
