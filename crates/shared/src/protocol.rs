use serde::{Deserialize, Serialize};

/// JSON body for `POST /items` and `PUT /items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveItemRequest {
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemId};

    #[test]
    fn save_request_serializes_name_and_price_only() {
        let body = SaveItemRequest {
            name: "Milk".to_string(),
            price: 2.5,
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "Milk", "price": 2.5}));
    }

    #[test]
    fn item_deserializes_from_server_shape() {
        let item: Item =
            serde_json::from_str(r#"{"id": 3, "name": "Bread", "price": 1.2}"#).expect("parse");
        assert_eq!(item.id, Some(ItemId(3)));
        assert_eq!(item.name, "Bread");
        assert_eq!(item.price, 1.2);
    }

    #[test]
    fn unsaved_item_omits_id_when_serialized() {
        let json = serde_json::to_value(Item::new("Eggs", 4.0)).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "Eggs", "price": 4.0}));
    }
}
