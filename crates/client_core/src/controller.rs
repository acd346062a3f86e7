//! Orchestration from user intent to remote calls and state updates.

use shared::{domain::Item, error::ValidationError};
use tracing::{debug, warn};

use crate::{
    remote::ItemStore,
    session::{AddForm, DeleteSession, EditSession},
    state::ItemListState,
};

const MSG_ADDED: &str = "Item added!";
const MSG_UPDATED: &str = "Item updated!";
const MSG_DELETED: &str = "Item deleted!";

/// Trims the name and parses the price, rejecting input before any network
/// call. The price must parse to a finite, non-negative number.
fn parse_item_input(raw_name: &str, raw_price: &str) -> Result<(String, f64), ValidationError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let price: f64 = raw_price
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok((name.to_string(), price))
}

/// Owns the list state, the add form, and the edit/delete sessions; the
/// presentation layer reads through the accessors and forwards intents into
/// the async operations.
///
/// Every successful mutation is followed by a full [`reload`](Self::reload)
/// rather than a local patch of `items`, so the displayed list always matches
/// a server-confirmed snapshot. Operations take `&mut self`, which is the
/// only sequencing in place: nothing cancels an in-flight reload when a newer
/// one starts, and the last reload to resolve wins.
pub struct SyncController<S> {
    store: S,
    state: ItemListState,
    add_form: AddForm,
    edit: Option<EditSession>,
    delete: Option<DeleteSession>,
}

impl<S: ItemStore> SyncController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: ItemListState::default(),
            add_form: AddForm::default(),
            edit: None,
            delete: None,
        }
    }

    pub fn state(&self) -> &ItemListState {
        &self.state
    }

    pub fn add_form(&self) -> &AddForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut AddForm {
        &mut self.add_form
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    pub fn delete_session(&self) -> Option<&DeleteSession> {
        self.delete.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.state.clear_error();
    }

    pub fn dismiss_success(&mut self) {
        self.state.clear_success();
    }

    /// One-time startup hook, called exactly once by the owning process
    /// lifecycle. Just the initial reload.
    pub async fn initialize(&mut self) {
        self.reload().await;
    }

    /// Full re-fetch of the item list. On success the whole `items` sequence
    /// is replaced atomically; on failure the previous items stay visible and
    /// only `error` is set.
    pub async fn reload(&mut self) {
        self.state.loading = true;
        self.state.clear_error();
        match self.store.list_items().await {
            Ok(items) => {
                debug!(count = items.len(), "reload: items replaced");
                self.state.items = items;
            }
            Err(err) => {
                warn!(error = %err, "reload failed");
                self.state.error = Some(err.to_string());
            }
        }
        self.state.loading = false;
    }

    /// Validates the add form and creates the item. On success the form is
    /// cleared and the list reloaded; on remote failure the form keeps its
    /// fields so the user can retry.
    pub async fn submit_add(&mut self) {
        self.state.clear_messages();
        let (name, price) = match parse_item_input(&self.add_form.name, &self.add_form.price) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.state.error = Some(err.to_string());
                return;
            }
        };
        match self.store.create_item(&name, price).await {
            Ok(item) => {
                debug!(name = %item.name, price = item.price, "add: item created");
                self.add_form.clear();
                self.state.success = Some(MSG_ADDED.to_string());
                self.reload().await;
            }
            Err(err) => {
                warn!(error = %err, "add failed");
                self.state.error = Some(err.to_string());
            }
        }
    }

    pub fn open_edit(&mut self, item: Item) {
        self.edit = Some(EditSession::new(item));
    }

    /// Safe to call with no open session.
    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Saves the edit draft. A no-op without an open session or when the
    /// selected item was never persisted. On remote failure the session stays
    /// open for a retry.
    pub async fn submit_edit(&mut self) {
        let Some(session) = &self.edit else {
            return;
        };
        let Some(id) = session.item().id else {
            return;
        };
        self.state.clear_messages();
        let (name, price) = match parse_item_input(&session.name, &session.price) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.state.error = Some(err.to_string());
                return;
            }
        };
        match self.store.update_item(id, &name, price).await {
            Ok(()) => {
                debug!(item_id = id.0, "edit: item updated");
                self.state.success = Some(MSG_UPDATED.to_string());
                self.edit = None;
                self.reload().await;
            }
            Err(err) => {
                warn!(item_id = id.0, error = %err, "edit failed");
                self.state.error = Some(err.to_string());
            }
        }
    }

    pub fn open_delete(&mut self, item: Item) {
        self.delete = Some(DeleteSession::new(item));
    }

    /// Safe to call with no open session.
    pub fn close_delete(&mut self) {
        self.delete = None;
    }

    /// Deletes the selected item. A no-op without an open session or an id.
    /// On remote failure the confirmation stays open.
    pub async fn confirm_delete(&mut self) {
        let Some(session) = &self.delete else {
            return;
        };
        let Some(id) = session.item().id else {
            return;
        };
        self.state.clear_messages();
        match self.store.delete_item(id).await {
            Ok(()) => {
                debug!(item_id = id.0, "delete: item removed");
                self.state.success = Some(MSG_DELETED.to_string());
                self.delete = None;
                self.reload().await;
            }
            Err(err) => {
                warn!(item_id = id.0, error = %err, "delete failed");
                self.state.error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
