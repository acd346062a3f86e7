//! Transient selection state for an in-progress add, edit, or delete.

use shared::domain::Item;

/// Raw add-form fields; cleared only after a successful add.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub name: String,
    pub price: String,
}

impl AddForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
    }
}

/// Draft for the item currently being edited. Lives only while the edit
/// dialog is open; discarded on cancel or successful save.
#[derive(Debug, Clone)]
pub struct EditSession {
    item: Item,
    pub name: String,
    pub price: String,
}

impl EditSession {
    pub fn new(item: Item) -> Self {
        let name = item.name.clone();
        let price = item.price.to_string();
        Self { item, name, price }
    }

    /// The item as it was selected, untouched by draft edits.
    pub fn item(&self) -> &Item {
        &self.item
    }
}

/// The item awaiting delete confirmation.
#[derive(Debug, Clone)]
pub struct DeleteSession {
    item: Item,
}

impl DeleteSession {
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }
}
