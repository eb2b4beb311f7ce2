use crate::limits;
use crate::model::CellData;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Scene document as the host store keeps it: extent plus per-cell
/// classification keyed by `"i.j"`. Cells absent from `hexes` start with
/// default (empty) classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    pub scene_id: String,
    pub num_rows: u32,
    pub num_cols: u32,
    #[serde(default)]
    pub hexes: BTreeMap<String, CellData>,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("malformed scene document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("scene extent {rows}x{cols} exceeds caps")]
    TooLarge { rows: u32, cols: u32 },
}

pub fn scene_from_value(v: Value) -> Result<SceneData, SceneError> {
    let data: SceneData = serde_json::from_value(v)?;
    let rows = data.num_rows as usize;
    let cols = data.num_cols as usize;
    if rows > limits::MAX_ROWS
        || cols > limits::MAX_COLS
        || rows.saturating_mul(cols) > limits::MAX_CELLS
    {
        return Err(SceneError::TooLarge {
            rows: data.num_rows,
            cols: data.num_cols,
        });
    }
    Ok(data)
}

pub fn scene_to_value(s: &SceneData) -> Value {
    serde_json::to_value(s).unwrap_or(Value::Null)
}
