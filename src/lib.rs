//! Personal bet tracker: a yew form over a `localStorage`-backed bet list.

pub mod app;
pub mod bet;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod log;
pub mod store;
pub mod suggest;

pub use bet::{compute_return, BetField, BetRecord, Numeric};
pub use controller::{Controller, Draft, EditState};
pub use error::{DraftError, StoreError};
pub use store::{BetPersistence, LocalStorageBackend, MemoryBackend, Store};
pub use suggest::SuggestionIndex;
