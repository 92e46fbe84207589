// crates/vidcat-core/src/catalog.rs - Ordered in-memory record sequence
//
// Pure data structure: no file access happens here. The store wraps these
// operations with persistence; keeping them separate makes range validation
// and re-indexing testable without touching disk.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::position::Position;
use crate::record::Record;

/// The ordered sequence of records for a session
///
/// Insertion order is preserved and significant. Serialized as a plain JSON
/// array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at a 1-based position, if in range
    pub fn get(&self, position: Position) -> Option<&Record> {
        self.records.get(position.index())
    }

    /// Enumerate records with their 1-based positions, in order
    pub fn list(&self) -> impl Iterator<Item = (Position, &Record)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (Position::from_index(index), record))
    }

    /// Append a record to the end
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record at `position`, returning the one it displaced
    ///
    /// Out of range leaves the catalog untouched.
    pub fn replace(&mut self, position: Position, record: Record) -> CatalogResult<Record> {
        let index = self.check(position)?;
        Ok(std::mem::replace(&mut self.records[index], record))
    }

    /// Remove the record at `position`; later records shift down by one
    ///
    /// Out of range leaves the catalog untouched.
    pub fn remove(&mut self, position: Position) -> CatalogResult<Record> {
        let index = self.check(position)?;
        Ok(self.records.remove(index))
    }

    /// Put a removed record back where it was
    pub(crate) fn restore(&mut self, position: Position, record: Record) {
        let index = position.index().min(self.records.len());
        self.records.insert(index, record);
    }

    /// Drop the last record (undo of `push`)
    pub(crate) fn pop(&mut self) -> Option<Record> {
        self.records.pop()
    }

    /// Validate `1 <= position <= len` and return the storage index
    fn check(&self, position: Position) -> CatalogResult<usize> {
        if position.get() <= self.records.len() {
            Ok(position.index())
        } else {
            Err(CatalogError::InvalidPosition {
                position: position.get(),
                len: self.records.len(),
            })
        }
    }
}
