//! Program list controller.

use crate::program::ProgramRecord;
use crate::store::ProgramStore;

/// Tracks which program rows to show.
///
/// The row keys are re-collected whenever the store's generation differs from
/// the one last seen; empty slots produce no row.
#[derive(Debug, Default)]
pub struct ProgramList {
    seen_generation: Option<u64>,
    keys: Vec<String>,
}

impl ProgramList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the row keys if the store changed. Returns true if it did.
    pub fn sync(&mut self, store: &ProgramStore) -> bool {
        let generation = store.generation();
        if self.seen_generation == Some(generation) {
            return false;
        }
        self.keys = store
            .programs()
            .map(|record| record.key().to_string())
            .collect();
        self.seen_generation = Some(generation);
        log::debug!(
            "program list refreshed at generation {generation}: {} rows",
            self.keys.len()
        );
        true
    }

    /// Row keys (material uuids) in display order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Resolves the rows against the store. Keys whose record has gone away
    /// since the last sync are skipped.
    pub fn rows<'a>(&'a self, store: &'a ProgramStore) -> impl Iterator<Item = &'a ProgramRecord> {
        self.keys.iter().filter_map(|key| store.program(key))
    }
}
