//! Client-side synchronization core for the shopping list.
//!
//! The pieces fit together as: the presentation layer raises an intent
//! (load, add, save-edit, confirm-delete), the [`SyncController`] validates
//! it, calls the [`ItemStore`], and updates the owned [`ItemListState`] and
//! sessions; the presentation layer re-renders from that state and never
//! mutates it directly.

pub mod controller;
pub mod remote;
pub mod session;
pub mod state;

pub use controller::SyncController;
pub use remote::{HttpItemStore, ItemStore, ItemStoreError};
pub use session::{AddForm, DeleteSession, EditSession};
pub use state::ItemListState;
