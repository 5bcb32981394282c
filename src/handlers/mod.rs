pub mod orders;
pub mod products;
pub mod session;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "storefront-service" })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::{auth::AccessGuard, build_router, engine::InventoryEngine, AppState};

    const CLIENT: &str = "client-secret";
    const ADMIN: &str = "admin-secret";

    fn app() -> Router {
        app_with_pages("does-not-exist")
    }

    fn app_with_pages(static_dir: &str) -> Router {
        let state = AppState {
            engine: Arc::new(InventoryEngine::default()),
            access: Arc::new(AccessGuard::new(CLIENT, ADMIN)),
        };
        build_router(state, static_dir)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        admin_token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(token) = admin_token {
            req = req.header("X-Admin-Token", token);
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create_widget(app: &Router, stock: i64) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/admin/products",
            Some(ADMIN),
            Some(json!({ "name": "Widget", "price": 10, "stock": stock })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"].clone()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(&app(), Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn login_returns_role_or_401() {
        let app = app();
        let (status, body) =
            send(&app, Method::POST, "/api/login", None, Some(json!({ "password": ADMIN }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "admin");

        let (status, body) =
            send(&app, Method::POST, "/api/login", None, Some(json!({ "password": CLIENT }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "user");

        let guess = json!({ "password": "guess" });
        let (status, _) = send(&app, Method::POST, "/api/login", None, Some(guess)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_routes_require_admin_token() {
        let app = app();
        let product = json!({ "name": "Widget", "price": 10, "stock": 1 });

        let (status, _) =
            send(&app, Method::POST, "/api/admin/products", None, Some(product.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) =
            send(&app, Method::POST, "/api/admin/products", Some(CLIENT), Some(product)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, Method::GET, "/api/admin/orders", Some("wrong"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, body) = send(&app, Method::GET, "/api/products", None, None).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn invalid_product_payloads_are_400() {
        let app = app();
        for bad in [
            json!({ "name": "", "price": 10, "stock": 1 }),
            json!({ "name": "Widget", "price": 0, "stock": 1 }),
            json!({ "name": "Widget", "price": 10, "stock": -1 }),
            json!({ "name": "Widget", "price": 10, "stock": 1, "extra": true }),
            json!({ "name": "Widget" }),
        ] {
            let (status, body) =
                send(&app, Method::POST, "/api/admin/products", Some(ADMIN), Some(bad)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "invalid_input");
        }
    }

    #[tokio::test]
    async fn product_crud_round() {
        let app = app();
        let created = create_widget(&app, 3).await;
        assert_eq!(created["id"], 1);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/admin/products/1",
            Some(ADMIN),
            Some(json!({
                "name": "Gadget",
                "description": "new",
                "price": 12.5,
                "images": ["g.png"],
                "stock": 7
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["stock"], 7);

        let (_, body) = send(&app, Method::GET, "/api/products/1", None, None).await;
        assert_eq!(body["data"]["name"], "Gadget");
        assert_eq!(body["data"]["images"][0], "g.png");

        let (status, _) =
            send(&app, Method::DELETE, "/api/admin/products/1", Some(ADMIN), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) =
            send(&app, Method::DELETE, "/api/admin/products/1", Some(ADMIN), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "product_not_found");
    }

    #[tokio::test]
    async fn order_flow_over_http() {
        let app = app();
        create_widget(&app, 1).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/orders",
            None,
            Some(json!({ "password": "guess", "product_id": 1, "user_id": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/orders",
            None,
            Some(json!({ "password": CLIENT, "product_id": 1, "user_id": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["product_name"], "Widget");

        let (_, body) = send(&app, Method::GET, "/api/admin/orders", Some(ADMIN), None).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["product_stock"], 1);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/admin/orders/1",
            Some(ADMIN),
            Some(json!({ "status": "approved" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "approved");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/admin/orders/1",
            Some(ADMIN),
            Some(json!({ "status": "rejected" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "already_processed");

        let (_, body) = send(&app, Method::GET, "/api/orders/u1", None, None).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["order_id"], 1);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/orders",
            None,
            Some(json!({ "password": ADMIN, "product_id": 1, "user_id": "u2" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "out_of_stock");
    }

    #[tokio::test]
    async fn unknown_decision_is_400() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/admin/orders/1",
            Some(ADMIN),
            Some(json!({ "status": "maybe" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn order_for_missing_product_is_404() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/orders",
            None,
            Some(json!({ "password": CLIENT, "product_id": 99, "user_id": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "product_not_found");
    }

    #[tokio::test]
    async fn non_numeric_ids_are_invalid_input() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/products/abc", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");

        let (status, body) =
            send(&app, Method::DELETE, "/api/admin/products/abc", Some(ADMIN), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/admin/orders/xyz",
            Some(ADMIN),
            Some(json!({ "status": "approved" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn admin_can_fetch_single_order() {
        let app = app();
        create_widget(&app, 2).await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/orders",
            None,
            Some(json!({ "password": CLIENT, "product_id": 1, "user_id": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            send(&app, Method::GET, "/api/admin/orders/1", Some(ADMIN), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["order_id"], 1);
        assert_eq!(body["data"]["user_id"], "u1");
        assert_eq!(body["data"]["status"], "pending");

        let (status, body) =
            send(&app, Method::GET, "/api/admin/orders/9", Some(ADMIN), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "order_not_found");

        let (status, _) = send(&app, Method::GET, "/api/admin/orders/1", None, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unmatched_paths_fall_back_to_static_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Storefront</h1>").unwrap();
        let app = app_with_pages(dir.path().to_str().unwrap());

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Storefront</h1>");

        let req = Request::builder().uri("/missing.html").body(Body::empty()).unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        // API routes still win over the fallback.
        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
