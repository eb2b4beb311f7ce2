use crate::model::Patch;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scene write rejected: {0}")]
    Rejected(String),
    #[error("scene store unavailable")]
    Unavailable,
}

/// Persistence collaborator: one write per commit, a patch map the host
/// merges into scene state. Writes are fire-and-forget from the core's
/// perspective; a failure is reported to the caller but never retried.
pub trait SceneStore {
    fn write(&mut self, patches: &BTreeMap<String, Patch>) -> Result<(), StoreError>;
}

/// Accumulates transient single-cell edits across one pointer gesture and
/// commits them as a single persisted write. Re-staging a key during the
/// gesture is safe; later entries win at commit.
#[derive(Default)]
pub struct PaintBatcher {
    pending: Vec<(String, Patch)>,
}

impl PaintBatcher {
    pub fn new() -> PaintBatcher {
        PaintBatcher::default()
    }

    pub fn stage(&mut self, key: String, patch: Patch) {
        self.pending.push((key, patch));
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fold the ordered pending list last-write-wins and hand it to the
    /// store as one write. Pending state clears whether or not the write
    /// succeeds (at-most-once); the store's result is returned so the
    /// caller can observe a dropped batch. Returns the folded patch count.
    pub fn commit(&mut self, store: &mut dyn SceneStore) -> Result<usize, StoreError> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        let mut folded: BTreeMap<String, Patch> = BTreeMap::new();
        for (key, patch) in self.pending.drain(..) {
            folded.insert(key, patch);
        }
        let n = folded.len();
        match store.write(&folded) {
            Ok(()) => Ok(n),
            Err(e) => {
                log::warn!("commit failed, dropping {n} staged patches: {e}");
                Err(e)
            }
        }
    }
}
