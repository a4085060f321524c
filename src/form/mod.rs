//! Editing state for a single food/drink entry.
//!
//! [`FoodForm`] is an immutable snapshot: every edit goes through
//! [`FoodForm::apply`] and yields the next snapshot, so the whole form can be
//! exercised without a DOM. The component in
//! `components::edit_food_form` only stores the current snapshot in a signal
//! and renders it.

pub mod ops;

use chrono::{DateTime, Utc};

use crate::datetime;
use crate::routes;
use crate::types::{Food, FoodKind};

/// One ingredient row. `key` stays with the row for its whole life so rows
/// can be removed without the view confusing one input for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSlot {
    pub key: u32,
    pub value: String,
}

/// Which operation a form in [`Phase::Saving`] is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Save,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Controls are locked until the pending operation settles.
    Saving(Pending),
    /// The last save or delete was rejected. The form is editable again.
    Failed(String),
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodEdit {
    Kind(FoodKind),
    Title(String),
    Notes(String),
    Date(String),
    Time(String),
    AddIngredient,
    Ingredient(usize, String),
    RemoveIngredient(usize),
}

/// Follow-up the owner of the form should carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Navigate(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodForm {
    original: Food,
    kind: FoodKind,
    title: String,
    notes: String,
    date: String,
    time: String,
    ingredients: Vec<IngredientSlot>,
    next_key: u32,
    deletable: bool,
    phase: Phase,
}

impl FoodForm {
    /// Start editing a copy of `food`. The caller's record is never touched.
    pub fn new(food: &Food) -> Self {
        let ingredients: Vec<IngredientSlot> = food
            .ingredients
            .iter()
            .zip(0u32..)
            .map(|(value, key)| IngredientSlot {
                key,
                value: value.clone(),
            })
            .collect();
        let next_key = ingredients.len() as u32;

        Self {
            original: food.clone(),
            kind: food.kind,
            title: food.title.clone(),
            notes: food.notes.clone(),
            date: datetime::date_string(food.date),
            time: datetime::time_string(food.date),
            ingredients,
            next_key,
            deletable: false,
            phase: Phase::Editing,
        }
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn ingredients(&self) -> &[IngredientSlot] {
        &self.ingredients
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Offer deleting. Only set when the owner supplied a delete operation.
    pub fn with_delete(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }

    /// Whether the Delete control is shown at all.
    pub fn shows_delete(&self) -> bool {
        self.deletable
    }

    pub fn is_new(&self) -> bool {
        self.original.id.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn controls_disabled(&self) -> bool {
        matches!(self.phase, Phase::Saving(_))
    }

    pub fn can_submit(&self) -> bool {
        !self.controls_disabled() && !self.title.is_empty()
    }

    /// The record as currently edited, before normalization. The timestamp is
    /// still the original one since date and time are only merged on submit.
    pub fn draft(&self) -> Food {
        Food {
            date: self.original.date,
            id: self.original.id.clone(),
            ingredients: self.ingredients.iter().map(|s| s.value.clone()).collect(),
            notes: self.notes.clone(),
            title: self.title.clone(),
            kind: self.kind,
        }
    }

    /// The record as it should be persisted: date and time merged, blank
    /// ingredients dropped.
    pub fn finalize(&self) -> Food {
        let mut food = self.draft();
        food.date = self.timestamp();
        food.ingredients.retain(|i| !i.is_empty());
        food
    }

    fn timestamp(&self) -> DateTime<Utc> {
        datetime::combine(&self.date, &self.time, self.original.date)
    }

    /// Next snapshot after `edit`. Edits arriving while saving, and edits
    /// aimed at an ingredient row that does not exist, leave the form as is.
    /// Any other edit clears a previous failure.
    pub fn apply(&self, edit: FoodEdit) -> Self {
        let mut next = self.clone();
        if self.controls_disabled() {
            return next;
        }

        let accepted = match edit {
            FoodEdit::Ingredient(index, _) | FoodEdit::RemoveIngredient(index) => {
                index < next.ingredients.len()
            }
            _ => true,
        };
        if !accepted {
            return next;
        }
        next.phase = Phase::Editing;

        match edit {
            FoodEdit::Kind(kind) => next.kind = kind,
            FoodEdit::Title(title) => next.title = title,
            FoodEdit::Notes(notes) => next.notes = notes,
            FoodEdit::Date(date) => next.date = date,
            FoodEdit::Time(time) => next.time = time,
            FoodEdit::AddIngredient => {
                next.ingredients.push(IngredientSlot {
                    key: next.next_key,
                    value: String::new(),
                });
                next.next_key += 1;
            }
            FoodEdit::Ingredient(index, value) => {
                if let Some(slot) = next.ingredients.get_mut(index) {
                    slot.value = value;
                }
            }
            FoodEdit::RemoveIngredient(index) => {
                next.ingredients.remove(index);
            }
        }
        next
    }

    /// Lock the form for saving and hand back the finalized record.
    /// Returns `None` when submitting is not allowed right now.
    pub fn begin_submit(&self) -> Option<(Self, Food)> {
        if !self.can_submit() {
            return None;
        }
        let mut next = self.clone();
        next.phase = Phase::Saving(Pending::Save);
        Some((next, self.finalize()))
    }

    /// Lock the form for deleting. Returns `None` while already saving or
    /// when the form was not given a delete operation.
    pub fn begin_delete(&self) -> Option<Self> {
        if !self.deletable || self.controls_disabled() {
            return None;
        }
        let mut next = self.clone();
        next.phase = Phase::Saving(Pending::Delete);
        Some(next)
    }

    /// Settle the pending operation.
    ///
    /// A successful save asks the owner to go back to the list. A successful
    /// delete keeps the form locked and leaves navigation to whoever supplied
    /// the delete operation. A failure unlocks the form with the reason.
    pub fn finish(&self, result: Result<(), String>) -> (Self, Option<FormCommand>) {
        let mut next = self.clone();
        let Phase::Saving(pending) = self.phase else {
            return (next, None);
        };

        match result {
            Ok(()) => {
                let command = match pending {
                    Pending::Save => Some(FormCommand::Navigate(routes::FOOD_LIST)),
                    Pending::Delete => None,
                };
                (next, command)
            }
            Err(reason) => {
                next.phase = Phase::Failed(reason);
                (next, None)
            }
        }
    }
}
