use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::users::{
        create_user, delete_user, get_user, method_not_allowed, unknown_route, update_user,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user).fallback(method_not_allowed))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(method_not_allowed),
        )
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use usersvc_core::storage::{RepositoryError, Result, UserRepository};
    use usersvc_core::user::User;

    const VALID_BODY: &str =
        r#"{"Name": "John Doe", "Email": "john.doe@example.com", "DOB": "1990-01-01"}"#;

    /// Repository whose every call fails as an unreachable backend would.
    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn create_user(&self, _user: &User) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("no route to host".to_string()))
        }

        async fn get_user(&self, _user_id: &str) -> Result<User> {
            Err(RepositoryError::ConnectionFailed("no route to host".to_string()))
        }

        async fn update_user(&self, _user_id: &str, _user: &User) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("no route to host".to_string()))
        }

        async fn delete_user(&self, _user_id: &str) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("no route to host".to_string()))
        }
    }

    fn request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn assert_json_content_type(response: &Response) {
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    async fn create(app: &Router, body: &str) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(request("POST", "/users", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let app = create_app(AppState::default());

        let created = create(&app, VALID_BODY).await;
        let user_id = created["UserID"].as_str().unwrap();
        assert!(!user_id.is_empty());

        let response = app
            .oneshot(request("GET", &format!("/users/{user_id}"), ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_json_content_type(&response);
        let fetched = body_json(response).await;
        assert_eq!(fetched["UserID"], user_id);
        assert_eq!(fetched["Name"], "John Doe");
        assert_eq!(fetched["Email"], "john.doe@example.com");
        assert_eq!(fetched["DOB"], "1990-01-01");
    }

    #[tokio::test]
    async fn test_create_ignores_caller_user_id() {
        let app = create_app(AppState::default());

        let created = create(
            &app,
            r#"{"UserID": "chosen", "Name": "John Doe", "Email": "john@example.com", "DOB": "1990-01-01"}"#,
        )
        .await;

        assert_ne!(created["UserID"], "chosen");

        let response = app
            .oneshot(request("GET", "/users/chosen", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_without_content_type_header() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .body(Body::from(VALID_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("POST", "/users", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_json_content_type(&response);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid request payload"})
        );
    }

    #[tokio::test]
    async fn test_create_rejects_array_body() {
        let app = create_app(AppState::default());

        for body in ["[]", r#"["x", "John Doe", "john@example.com", "1990-01-01"]"#] {
            let response = app
                .clone()
                .oneshot(request("POST", "/users", body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Invalid request payload"})
            );
        }
    }

    #[tokio::test]
    async fn test_create_accepts_lowercase_field_names() {
        let app = create_app(AppState::default());

        let created = create(
            &app,
            r#"{"name": "John Doe", "email": "john.doe@example.com", "dob": "1990-01-01"}"#,
        )
        .await;

        assert_eq!(created["Name"], "John Doe");
        assert_eq!(created["Email"], "john.doe@example.com");
        assert_eq!(created["DOB"], "1990-01-01");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request(
                "POST",
                "/users",
                r#"{"Name": "Jo", "Email": "jo@example.com", "DOB": "1990-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Required fields are missing"})
        );
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_dob() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request(
                "POST",
                "/users",
                r#"{"Name": "John Doe", "Email": "john@example.com", "DOB": "2022-13-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid date of birth format (YYYY-MM-DD)"})
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_user() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request(
                "GET",
                "/users/00000000-0000-0000-0000-000000000000",
                "",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_json_content_type(&response);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"error":"User not found"}"#);
    }

    #[tokio::test]
    async fn test_update_user() {
        let app = create_app(AppState::default());
        let created = create(&app, VALID_BODY).await;
        let user_id = created["UserID"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/users/{user_id}"),
                r#"{"Name": "Updated Name", "Email": "updated.email@example.com", "DOB": "1991-02-02"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["UserID"], user_id);
        assert_eq!(updated["Name"], "Updated Name");

        let response = app
            .oneshot(request("GET", &format!("/users/{user_id}"), ""))
            .await
            .unwrap();
        let fetched = body_json(response).await;
        assert_eq!(fetched["UserID"], user_id);
        assert_eq!(fetched["Name"], "Updated Name");
        assert_eq!(fetched["Email"], "updated.email@example.com");
        assert_eq!(fetched["DOB"], "1991-02-02");
    }

    #[tokio::test]
    async fn test_update_validates_body() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request(
                "PUT",
                "/users/123",
                r#"{"Name": "John Doe", "Email": "john@example.com", "DOB": "1899-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_user_creates_it() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(request("PUT", "/users/fresh-id", VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/users/fresh-id", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["UserID"], "fresh-id");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let app = create_app(AppState::default());
        let created = create(&app, VALID_BODY).await;
        let user_id = created["UserID"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(request("DELETE", &format!("/users/{user_id}"), ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_json_content_type(&response);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        // Verify the user is gone
        let response = app
            .oneshot(request("GET", &format!("/users/{user_id}"), ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_user_succeeds() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("DELETE", "/users/never-existed", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_unsupported_methods_return_405() {
        let app = create_app(AppState::default());

        for (method, uri) in [
            ("PATCH", "/users/123"),
            ("PATCH", "/users"),
            ("GET", "/users"),
            ("POST", "/users/123"),
        ] {
            let response = app
                .clone()
                .oneshot(request(method, uri, VALID_BODY))
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {uri}"
            );
            assert_json_content_type(&response);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Method not allowed"})
            );
        }
    }

    #[tokio::test]
    async fn test_patch_returns_405_whatever_the_body() {
        let app = create_app(AppState::default());

        for body in ["{not json", "", "[]"] {
            let response = app
                .clone()
                .oneshot(request("PATCH", "/users/123", body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{body}");
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Method not allowed"})
            );
        }
    }

    #[tokio::test]
    async fn test_non_utf8_user_id_returns_json_400() {
        let app = create_app(AppState::default());

        for (method, body) in [("GET", ""), ("PUT", VALID_BODY), ("DELETE", "")] {
            let response = app
                .clone()
                .oneshot(request(method, "/users/%FF", body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
            assert_json_content_type(&response);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Invalid user ID"})
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(request("GET", "/accounts", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Not found"})
        );
    }

    #[tokio::test]
    async fn test_storage_failures_return_generic_500() {
        let app = create_app(AppState::new(Arc::new(FailingRepository)));

        for (method, uri, body) in [
            ("POST", "/users", VALID_BODY),
            ("GET", "/users/123", ""),
            ("PUT", "/users/123", VALID_BODY),
            ("DELETE", "/users/123", ""),
        ] {
            let response = app
                .clone()
                .oneshot(request(method, uri, body))
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {uri}"
            );
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Internal Server Error"})
            );
        }
    }
}
