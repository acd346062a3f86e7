use shared::domain::Item;

/// List state rendered by the presentation layer.
///
/// Mutated only by the [`SyncController`](crate::SyncController); `loading`
/// never exposes a partial list, `items` is either the last successful load
/// or the atomic replacement from a newer one.
#[derive(Debug, Clone, Default)]
pub struct ItemListState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ItemListState {
    /// Sum of all item prices; a read-model, never persisted.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }

    /// Drops both messages; every new mutation attempt starts from here.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_zero_for_empty_list() {
        assert_eq!(ItemListState::default().total(), 0.0);
    }

    #[test]
    fn total_sums_prices() {
        let state = ItemListState {
            items: vec![Item::new("Milk", 2.5), Item::new("Bread", 1.25)],
            ..Default::default()
        };
        assert_eq!(state.total(), 3.75);
    }

    #[test]
    fn message_clearing_is_idempotent() {
        let mut state = ItemListState {
            error: Some("boom".to_string()),
            success: Some("Item added!".to_string()),
            ..Default::default()
        };
        state.clear_error();
        state.clear_error();
        state.clear_success();
        state.clear_success();
        assert_eq!(state.error, None);
        assert_eq!(state.success, None);
    }
}
