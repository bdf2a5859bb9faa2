//! Form and list controller: the draft being composed, which row (if any)
//! is being edited inline, and the operations the UI triggers.

use crate::bet::{parse_decimal, BetField, BetRecord};
use crate::error::DraftError;
use crate::log;
use crate::store::{BetPersistence, Store};

/// Raw text of the add form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub name: String,
    pub amount: String,
    pub multiplier: String,
}

impl Draft {
    pub fn get(&self, field: BetField) -> &str {
        match field {
            BetField::Title => &self.title,
            BetField::Name => &self.name,
            BetField::Amount => &self.amount,
            BetField::Multiplier => &self.multiplier,
        }
    }

    pub fn set(&mut self, field: BetField, value: impl Into<String>) {
        let slot = match field {
            BetField::Title => &mut self.title,
            BetField::Name => &mut self.name,
            BetField::Amount => &mut self.amount,
            BetField::Multiplier => &mut self.multiplier,
        };
        *slot = value.into();
    }

    /// All four fields filled and both numbers parse.
    pub fn to_record(&self) -> Result<BetRecord, DraftError> {
        if let Some(&missing) = BetField::all().iter().find(|f| self.get(**f).is_empty()) {
            return Err(DraftError::MissingField(missing));
        }
        let amount = parse_decimal(&self.amount).ok_or(DraftError::NotANumber(BetField::Amount))?;
        let multiplier = parse_decimal(&self.multiplier).ok_or(DraftError::NotANumber(BetField::Multiplier))?;
        Ok(BetRecord::new(self.title.clone(), self.name.clone(), amount, multiplier))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(usize),
}

#[derive(Clone, Debug)]
pub struct Controller<P: BetPersistence> {
    store: Store<P>,
    draft: Draft,
    editing: EditState,
}

impl<P: BetPersistence> Controller<P> {
    pub fn new(store: Store<P>) -> Self {
        Self { store, draft: Draft::default(), editing: EditState::Idle }
    }

    pub fn store(&self) -> &Store<P> {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> EditState {
        self.editing
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.editing == EditState::Editing(index)
    }

    pub fn set_draft_field(&mut self, field: BetField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Appends the draft as a new bet and clears the form. An incomplete or
    /// non-numeric draft leaves everything untouched.
    pub fn add_from_draft(&mut self) -> Result<usize, DraftError> {
        let record = self.draft.to_record().map_err(|e| {
            log::debug(&format!("draft rejected: {}", e));
            e
        })?;
        let index = self.store.push(record);
        self.draft = Draft::default();
        Ok(index)
    }

    /// Removes the bet at `index`. A row being edited keeps its edit mode
    /// across the shift; deleting the edited row itself ends the edit.
    pub fn delete_at(&mut self, index: usize) -> Option<BetRecord> {
        let removed = self.store.remove(index)?;
        if let EditState::Editing(current) = self.editing {
            self.editing = match current.cmp(&index) {
                std::cmp::Ordering::Equal => EditState::Idle,
                std::cmp::Ordering::Greater => EditState::Editing(current - 1),
                std::cmp::Ordering::Less => EditState::Editing(current),
            };
        }
        Some(removed)
    }

    pub fn clear_all(&mut self) {
        self.store.clear();
        self.editing = EditState::Idle;
    }

    /// Puts `index` in edit mode, replacing any other row's edit. Ignored if
    /// there is no such row.
    pub fn begin_edit(&mut self, index: usize) {
        if index < self.store.len() {
            self.editing = EditState::Editing(index);
        }
    }

    pub fn update_field(&mut self, index: usize, field: BetField, value: &str) -> bool {
        self.store.update(index, |record| record.set_field(field, value))
    }

    pub fn end_edit(&mut self) {
        self.editing = EditState::Idle;
    }

    pub fn suggestions_for(&self, partial: &str, field: BetField) -> Vec<String> {
        self.store.suggestions().filter(partial, field)
    }
}
