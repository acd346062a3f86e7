use super::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

async fn spawn_items_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/api")
}

#[derive(Clone)]
struct Capture<T> {
    tx: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

fn capture<T>() -> (Capture<T>, oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Capture {
            tx: Arc::new(Mutex::new(Some(tx))),
        },
        rx,
    )
}

impl<T> Capture<T> {
    async fn send(&self, value: T) {
        if let Some(tx) = self.tx.lock().await.take() {
            let _ = tx.send(value);
        }
    }
}

#[test]
fn base_url_trailing_slash_is_normalized() {
    let store = HttpItemStore::new("http://localhost:8080/api/");
    assert_eq!(store.base_url(), "http://localhost:8080/api");
}

#[tokio::test]
async fn list_items_preserves_server_order() {
    let app = Router::new().route(
        "/api/items",
        get(|| async {
            Json(serde_json::json!([
                {"id": 2, "name": "Bread", "price": 1.25},
                {"id": 1, "name": "Milk", "price": 2.5},
            ]))
        }),
    );
    let store = HttpItemStore::new(spawn_items_server(app).await);

    let items = store.list_items().await.expect("list");
    assert_eq!(
        items.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![Some(ItemId(2)), Some(ItemId(1))]
    );
}

#[tokio::test]
async fn list_items_surfaces_error_body_verbatim() {
    let app = Router::new().route(
        "/api/items",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
    );
    let store = HttpItemStore::new(spawn_items_server(app).await);

    let err = store.list_items().await.expect_err("must fail");
    match &err {
        ItemStoreError::Remote { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "db down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "db down");
}

#[tokio::test]
async fn malformed_list_body_is_a_remote_error() {
    let app = Router::new().route("/api/items", get(|| async { "not json" }));
    let store = HttpItemStore::new(spawn_items_server(app).await);

    let err = store.list_items().await.expect_err("must fail");
    match err {
        ItemStoreError::Remote { status, body } => {
            assert_eq!(status, 200);
            assert!(body.starts_with("unexpected response shape:"), "{body}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn create_item_posts_json_body_and_decodes_created_item() {
    let (posted, posted_rx) = capture::<SaveItemRequest>();
    let app = Router::new().route(
        "/api/items",
        post(
            move |State(posted): State<Capture<SaveItemRequest>>,
                  Json(body): Json<SaveItemRequest>| async move {
                let created = Item {
                    id: Some(ItemId(7)),
                    name: body.name.clone(),
                    price: body.price,
                };
                posted.send(body).await;
                (StatusCode::CREATED, Json(created))
            },
        )
        .with_state(posted),
    );
    let store = HttpItemStore::new(spawn_items_server(app).await);

    let created = store.create_item("Milk", 2.5).await.expect("create");
    assert_eq!(created.id, Some(ItemId(7)));

    let body = posted_rx.await.expect("request body");
    assert_eq!(body.name, "Milk");
    assert_eq!(body.price, 2.5);
}

#[tokio::test]
async fn update_item_puts_to_the_item_path() {
    let (seen, seen_rx) = capture::<(i64, SaveItemRequest)>();
    let app = Router::new().route(
        "/api/items/:id",
        put(
            move |State(seen): State<Capture<(i64, SaveItemRequest)>>,
                  Path(id): Path<i64>,
                  Json(body): Json<SaveItemRequest>| async move {
                seen.send((id, body)).await;
                StatusCode::OK
            },
        )
        .with_state(seen),
    );
    let store = HttpItemStore::new(spawn_items_server(app).await);

    store
        .update_item(ItemId(3), "Milk", 3.0)
        .await
        .expect("update");

    let (id, body) = seen_rx.await.expect("request");
    assert_eq!(id, 3);
    assert_eq!(body.name, "Milk");
    assert_eq!(body.price, 3.0);
}

#[tokio::test]
async fn delete_item_treats_204_as_success() {
    let app = Router::new().route(
        "/api/items/:id",
        delete(|Path(_id): Path<i64>| async { StatusCode::NO_CONTENT }),
    );
    let store = HttpItemStore::new(spawn_items_server(app).await);

    store.delete_item(ItemId(3)).await.expect("delete");
}

#[tokio::test]
async fn delete_item_surfaces_not_found_body() {
    let app = Router::new().route(
        "/api/items/:id",
        delete(|Path(_id): Path<i64>| async { (StatusCode::NOT_FOUND, "item not found") }),
    );
    let store = HttpItemStore::new(spawn_items_server(app).await);

    let err = store.delete_item(ItemId(9)).await.expect_err("must fail");
    assert_eq!(err.to_string(), "item not found");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on this port; bind-then-drop reserves a dead address.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let store = HttpItemStore::new(format!("http://{addr}/api"));

    let err = store.list_items().await.expect_err("must fail");
    assert!(matches!(err, ItemStoreError::Transport(_)), "{err:?}");
}
