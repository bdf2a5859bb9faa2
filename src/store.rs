//! Ordered bet list with write-through persistence.
//!
//! Every mutation re-persists the whole list and re-derives the suggestion
//! index. Persistence is pluggable through [`BetPersistence`]: the app uses
//! [`LocalStorageBackend`], tests use [`MemoryBackend`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::storage::{errors::StorageError, LocalStorage, Storage};

use crate::bet::BetRecord;
use crate::config::STORAGE_KEY;
use crate::error::StoreResult;
use crate::log;
use crate::suggest::SuggestionIndex;

/// Where the bet list lives between sessions. Both calls are best effort:
/// a failed load reads as no bets, a failed save is dropped.
pub trait BetPersistence {
    fn load(&self) -> Vec<BetRecord>;
    fn save(&self, records: &[BetRecord]);
}

/// Browser `localStorage`, one JSON array under a single key.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn try_load(&self) -> StoreResult<Vec<BetRecord>> {
        match LocalStorage::get::<Vec<BetRecord>>(&self.key) {
            Ok(records) => Ok(records),
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn try_save(&self, records: &[BetRecord]) -> StoreResult<()> {
        LocalStorage::set(&self.key, records)?;
        Ok(())
    }
}

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl BetPersistence for LocalStorageBackend {
    fn load(&self) -> Vec<BetRecord> {
        self.try_load().unwrap_or_else(|e| {
            log::warn(&format!("discarding stored bets under '{}': {}", self.key, e));
            Vec::new()
        })
    }

    fn save(&self, records: &[BetRecord]) {
        if let Err(e) = self.try_save(records) {
            log::warn(&format!("failed to save bets under '{}': {}", self.key, e));
        }
    }
}

/// In-memory raw JSON slot. Clones share the slot, so a test can keep a
/// handle and inspect or corrupt what the store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    raw: Rc<RefCell<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Rc::new(RefCell::new(Some(raw.into()))) }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    fn try_load(&self) -> StoreResult<Vec<BetRecord>> {
        match self.raw.borrow().as_deref() {
            Some(text) => Ok(serde_json::from_str(text)?),
            None => Ok(Vec::new()),
        }
    }

    fn try_save(&self, records: &[BetRecord]) -> StoreResult<()> {
        let text = serde_json::to_string(records)?;
        *self.raw.borrow_mut() = Some(text);
        Ok(())
    }
}

impl BetPersistence for MemoryBackend {
    fn load(&self) -> Vec<BetRecord> {
        self.try_load().unwrap_or_else(|e| {
            log::warn(&format!("discarding stored bets: {}", e));
            Vec::new()
        })
    }

    fn save(&self, records: &[BetRecord]) {
        if let Err(e) = self.try_save(records) {
            log::warn(&format!("failed to save bets: {}", e));
        }
    }
}

#[derive(Clone, Debug)]
pub struct Store<P: BetPersistence> {
    backend: P,
    records: Vec<BetRecord>,
    suggestions: SuggestionIndex,
}

impl<P: BetPersistence> Store<P> {
    /// Rehydrates from `backend`.
    pub fn open(backend: P) -> Self {
        let records = backend.load();
        log::debug(&format!("loaded {} bets", records.len()));
        let suggestions = SuggestionIndex::derive(&records);
        Self { backend, records, suggestions }
    }

    pub fn records(&self) -> &[BetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn suggestions(&self) -> &SuggestionIndex {
        &self.suggestions
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    /// Appends and returns the new record's position.
    pub fn push(&mut self, record: BetRecord) -> usize {
        self.records.push(record);
        self.commit();
        self.records.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<BetRecord> {
        if index >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(index);
        self.commit();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.commit();
    }

    /// Mutates the record at `index` in place. False if there is none.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut BetRecord)) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        f(record);
        self.commit();
        true
    }

    fn commit(&mut self) {
        self.backend.save(&self.records);
        self.suggestions = SuggestionIndex::derive(&self.records);
    }
}
