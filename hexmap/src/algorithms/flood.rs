use crate::grid::Grid;
use crate::model::{HexCell, Mode, Offset};
use crate::registry::ClassRegistry;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Maximal connected component of cells sharing `start`'s classification
/// under `mode`, reachable over grid adjacency. Neighbors are enqueued
/// optimistically; the class re-check at pop stops traversal at region
/// borders. Visited is bounded by the cell count, so this terminates.
/// Runs synchronously, no yielding.
pub fn flood_fill(
    grid: &Grid,
    cells: &BTreeMap<Offset, HexCell>,
    registry: &ClassRegistry,
    mode: Mode,
    start: Offset,
) -> Vec<Offset> {
    let target = match cells.get(&start) {
        Some(cell) => registry.class_of(mode, &cell.data).to_string(),
        None => return Vec::new(),
    };
    let mut visited: HashSet<Offset> = HashSet::new();
    let mut result: Vec<Offset> = Vec::new();
    let mut queue: VecDeque<Offset> = VecDeque::new();
    queue.push_back(start);

    while let Some(at) = queue.pop_front() {
        if visited.contains(&at) {
            continue;
        }
        let cell = match cells.get(&at) {
            Some(c) => c,
            None => continue,
        };
        if registry.class_of(mode, &cell.data) != target {
            continue;
        }
        visited.insert(at);
        result.push(at);
        for n in grid.neighbors(at) {
            if !visited.contains(&n) {
                queue.push_back(n);
            }
        }
    }
    result
}
