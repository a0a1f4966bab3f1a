//! Database-backed item tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p itemsvc-server -- --ignored
//!
//! Each test creates its own schema and points the pool's `search_path`
//! at it, so tests can run in parallel against one database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tower::ServiceExt;
use uuid::Uuid;

use itemsvc_server::db::ItemRepo;
use itemsvc_server::models::NewItem;
use itemsvc_server::{build_router, AppState, ServerConfig};

const ITEMS_DDL: &str = include_str!("../sql/items.sql");

struct TestDb {
    admin: PgPool,
    pool: PgPool,
    schema: String,
}

impl TestDb {
    async fn new() -> Self {
        Self::with_table(ITEMS_DDL).await
    }

    async fn with_table(ddl: &str) -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("itemsvc_test_{}", Uuid::new_v4().simple());

        let admin = PgPool::connect(&url).await.expect("admin connect failed");
        admin
            .execute(format!("CREATE SCHEMA {schema}").as_str())
            .await
            .expect("create schema failed");

        let search_path = format!("SET search_path TO {schema}");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .after_connect(move |conn, _meta| {
                let stmt = search_path.clone();
                Box::pin(async move {
                    conn.execute(stmt.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("pool creation failed");

        sqlx::raw_sql(ddl)
            .execute(&pool)
            .await
            .expect("items table creation failed");

        Self { admin, pool, schema }
    }

    fn app(&self) -> Router {
        build_router(AppState::new(Some(self.pool.clone())), &ServerConfig::default())
    }

    async fn drop_schema(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop schema failed");
    }
}

fn post_item(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/items/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder().uri("/items/").body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn empty_table_lists_no_items() {
    let db = TestDb::new().await;

    let response = db.app().oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"items": []}));

    db.drop_schema().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn widget_round_trip() {
    let db = TestDb::new().await;
    let app = db.app();

    let widget = json!({
        "name": "Widget",
        "description": "A small widget",
        "price": 9.99,
        "quantity": 5
    });

    let response = app.clone().oneshot(post_item(widget.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Item created successfully"})
    );

    let response = app.oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);

    let mut expected = widget.as_object().unwrap().clone();
    expected.insert("id".into(), json!(1));
    assert_eq!(items[0], Value::Object(expected));

    db.drop_schema().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn null_description_round_trips() {
    let db = TestDb::new().await;
    let repo = ItemRepo::new(&db.pool);

    repo.insert(&NewItem {
        name: "Bolt".into(),
        description: None,
        price: 0.25,
        quantity: 100,
    })
    .await
    .unwrap();

    let items = repo.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], Value::Null);
    assert_eq!(items[0]["quantity"], json!(100));

    db.drop_schema().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn concurrent_creates_are_all_persisted() {
    let db = TestDb::new().await;
    let app = db.app();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = json!({"name": format!("item-{i}"), "price": i as f64, "quantity": i});
                app.oneshot(post_item(body)).await.unwrap().status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.expect("task panicked"), StatusCode::OK);
    }

    let body = json_body(app.oneshot(list_request()).await.unwrap()).await;
    let mut names: Vec<String> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_owned())
        .collect();
    names.sort();

    let mut expected: Vec<String> = (0..10).map(|i| format!("item-{i}")).collect();
    expected.sort();
    assert_eq!(names, expected);

    db.drop_schema().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_table_is_500_with_driver_text() {
    let db = TestDb::new().await;
    db.pool.execute("DROP TABLE items").await.unwrap();

    let response = db.app().oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = json_body(response).await["detail"].as_str().unwrap().to_owned();
    assert!(detail.starts_with("Error retrieving items: "));
    assert!(detail.contains("items"));

    db.drop_schema().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn real_price_and_extra_columns_are_returned() {
    let db = TestDb::with_table(
        r#"
        CREATE TABLE items (
            id          BIGSERIAL PRIMARY KEY,
            name        VARCHAR(64) NOT NULL,
            description TEXT,
            price       REAL NOT NULL,
            quantity    SMALLINT NOT NULL,
            in_stock    BOOLEAN NOT NULL DEFAULT TRUE,
            cost        NUMERIC(10, 2) NOT NULL DEFAULT 1.25
        );
        "#,
    )
    .await;
    let app = db.app();

    let response = app
        .clone()
        .oneshot(post_item(json!({
            "name": "Widget",
            "description": "A small widget",
            "price": 9.99,
            "quantity": 5
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(list_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let item = &body["items"][0];

    assert_eq!(item["id"], json!(1));
    assert_eq!(item["name"], "Widget");
    assert_eq!(item["description"], "A small widget");
    assert!((item["price"].as_f64().unwrap() - 9.99).abs() < 1e-6);
    assert_eq!(item["quantity"], json!(5));
    assert_eq!(item["in_stock"], json!(true));
    assert_eq!(item["cost"], json!(1.25));

    db.drop_schema().await;
}
