//! The ordered entry ledger owned by an invoice draft.
//!
//! Every committed entry gets a stable [`EntryId`] from a monotonically
//! increasing per-ledger counter, and mutations address identity rather
//! than array position. Insertion order is the only ordering guarantee.
//! The ledger performs no validation — all invariants are enforced by
//! [`EntryDraft`](super::EntryDraft) before insertion.

use serde::{Deserialize, Serialize};

use super::types::TaxEntry;

/// Stable identity of a ledger line, unique within its ledger for the
/// lifetime of the owning document draft. Ids are never reused, so a
/// stale id held across another actor's delete fails cleanly instead of
/// landing on the wrong line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

/// One identified line of a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerLine {
    id: EntryId,
    entry: TaxEntry,
}

impl LedgerLine {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn entry(&self) -> &TaxEntry {
        &self.entry
    }
}

/// Ordered sequence of tax adjustment entries, one per ledger per invoice
/// draft. Exclusively owned by that draft; single-writer by ownership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    lines: Vec<LedgerLine>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end, returning its new id.
    pub fn append(&mut self, entry: TaxEntry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.lines.push(LedgerLine { id, entry });
        id
    }

    /// Replace the identified line, keeping its position. Returns `false`
    /// when the id is no longer present.
    pub fn replace(&mut self, id: EntryId, entry: TaxEntry) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.entry = entry;
                true
            }
            None => false,
        }
    }

    /// Remove the identified line, preserving the order of the rest.
    /// Returns `false` when the id is no longer present.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() < before
    }

    pub fn get(&self, id: EntryId) -> Option<&TaxEntry> {
        self.lines
            .iter()
            .find(|line| line.id == id)
            .map(|line| &line.entry)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LedgerLine> {
        self.lines.iter()
    }

    /// Entries in insertion order, without their ids.
    pub fn entries(&self) -> impl Iterator<Item = &TaxEntry> {
        self.lines.iter().map(|line| &line.entry)
    }
}
