//! Router Assembly

use crate::middleware;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use figures::{FigureRepository, figures_router};
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Build the application router around any figure repository.
pub fn build_app<R>(repo: R) -> Router
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/figures", figures_router(repo))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::cors))
}

/// Unmatched routes get a JSON 404; the CORS layer wraps this too.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, Response, header};
    use figures::InMemoryFigureRepository;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_app(InMemoryFigureRepository::new())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Response<Body> {
        let request = match body {
            Some(value) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors_headers(response: &Response<Body>) {
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "POST, GET, OPTIONS, PUT, DELETE"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Origin, Content-Type, Accept, Authorization"
        );
    }

    fn ada() -> Value {
        json!({
            "name": "Ada Lovelace",
            "birthdate": "1815-12-10",
            "fields": ["mathematics"],
            "bio": "Wrote the first published algorithm.",
            "image_url": "",
            "source_url": ""
        })
    }

    #[tokio::test]
    async fn test_create_get_delete_flow() {
        let app = test_app();

        // POST -> 201 with an assigned id
        let response = send(&app, Method::POST, "/figures", Some(ada())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_cors_headers(&response);
        let created = body_json(response).await;
        let id = created["id"].as_str().expect("id must be assigned").to_string();
        assert_eq!(created["name"], "Ada Lovelace");

        // GET -> the same record
        let response = send(&app, Method::GET, &format!("/figures/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(&response);
        assert_eq!(body_json(response).await, created);

        // DELETE -> 200 with confirmation
        let response = send(&app, Method::DELETE, &format!("/figures/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors_headers(&response);
        assert_eq!(body_json(response).await, json!({ "message": "Figure deleted" }));

        // GET after delete -> 404
        let response = send(&app, Method::GET, &format!("/figures/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors_headers(&response);
        assert_eq!(body_json(response).await, json!({ "error": "Figure not found" }));

        // DELETE again -> still 200
        let response = send(&app, Method::DELETE, &format!("/figures/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_reflects_inserts_and_deletes() {
        let app = test_app();

        let response = send(&app, Method::GET, "/figures", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        let mut ids = Vec::new();
        for _ in 0..3 {
            let response = send(&app, Method::POST, "/figures", Some(ada())).await;
            ids.push(body_json(response).await["id"].as_str().unwrap().to_string());
        }

        let response = send(&app, Method::GET, "/figures", None).await;
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 3);

        send(&app, Method::DELETE, &format!("/figures/{}", ids[0]), None).await;

        let response = send(&app, Method::GET, "/figures", None).await;
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_identifiers_are_rejected() {
        let app = test_app();

        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let body = (method == Method::PUT).then(ada);
            let response = send(&app, method, "/figures/not-a-valid-id", body).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_cors_headers(&response);
            assert_eq!(body_json(response).await, json!({ "error": "Invalid ID" }));
        }

        // None of the rejected requests touched the store
        let response = send(&app, Method::GET, "/figures", None).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_unparsable_bodies_are_rejected() {
        let app = test_app();

        let garbage = Request::builder()
            .method(Method::POST)
            .uri("/figures")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(garbage).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid JSON" }));

        // Same for update, once the identifier passes validation
        let id = uuid::Uuid::new_v4();
        let garbage = Request::builder()
            .method(Method::PUT)
            .uri(format!("/figures/{id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"fields":"not-an-array"}"#))
            .unwrap();
        let response = app.clone().oneshot(garbage).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid JSON" }));
    }

    #[tokio::test]
    async fn test_create_ignores_body_identifier() {
        let app = test_app();

        let mut body = ada();
        body["id"] = json!("00000000-0000-0000-0000-000000000000");

        let response = send(&app, Method::POST, "/figures", Some(body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        assert_ne!(created["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let app = test_app();

        let response = send(&app, Method::POST, "/figures", Some(ada())).await;
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        // Replacement omits bio and source_url
        let replacement = json!({
            "name": "Ada King",
            "birthdate": "1815-12-10",
            "fields": ["mathematics", "computing"],
            "image_url": ""
        });
        let response = send(
            &app,
            Method::PUT,
            &format!("/figures/{id}"),
            Some(replacement),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["id"].as_str().unwrap(), id);
        assert_eq!(updated["name"], "Ada King");
        assert_eq!(updated["bio"], "");

        let response = send(&app, Method::GET, &format!("/figures/{id}"), None).await;
        let fetched = body_json(response).await;
        assert_eq!(fetched["bio"], "");
        assert_eq!(fetched["fields"], json!(["mathematics", "computing"]));
    }

    #[tokio::test]
    async fn test_update_missing_record_reports_success() {
        let app = test_app();
        let id = uuid::Uuid::new_v4();

        let response = send(&app, Method::PUT, &format!("/figures/{id}"), Some(ada())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let echoed = body_json(response).await;
        assert_eq!(echoed["id"].as_str().unwrap(), id.to_string());
        assert_eq!(echoed["name"], "Ada Lovelace");

        // No upsert happened
        let response = send(&app, Method::GET, "/figures", None).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_unmatched_route_is_json_404_with_cors() {
        let app = test_app();

        let response = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors_headers(&response);
        assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_options_short_circuits_to_empty_204() {
        let app = test_app();

        for uri in ["/figures", "/figures/123", "/anywhere"] {
            let response = send(&app, Method::OPTIONS, uri, None).await;

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert_cors_headers(&response);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(bytes.is_empty());
        }
    }
}
