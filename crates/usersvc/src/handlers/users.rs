//! User CRUD handlers.
//!
//! Each handler is one pass of: parse, validate, one repository call,
//! serialize. Request bodies are read as raw bytes and parsed as JSON
//! whatever their `Content-Type`.

use axum::{
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use usersvc_core::user::{validate_dob, validate_email, validate_user, User};

use crate::{handlers::ApiError, state::AppState};

const INVALID_PAYLOAD: &str = "Invalid request payload";
const MISSING_FIELDS: &str = "Required fields are missing";
const INVALID_EMAIL: &str = "Invalid email format";
const INVALID_DOB: &str = "Invalid date of birth format (YYYY-MM-DD)";

/// Serialize `body` as a JSON response with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Wire names of the user fields.
const USER_FIELDS: [&str; 4] = ["UserID", "Name", "Email", "DOB"];

/// The `{id}` path segment.
///
/// Rejections go through [`ApiError`] so they are JSON like every other error.
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(user_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(ApiError::InvalidPath)?;

        Ok(UserId(user_id))
    }
}

/// Rename keys that match a user field ignoring ASCII case to the field's wire
/// name. An exact key wins over a differently-cased one.
fn fold_field_names(object: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(object.len());
    let mut inexact = Vec::new();

    for (key, value) in object {
        match USER_FIELDS.iter().find(|f| f.eq_ignore_ascii_case(&key)) {
            Some(field) if *field != key => inexact.push((*field, value)),
            _ => {
                folded.insert(key, value);
            }
        }
    }

    for (field, value) in inexact {
        folded.entry(field).or_insert(value);
    }

    folded
}

/// Parse a request body as a user and run every field check on it.
///
/// Only a JSON object is a user; arrays and scalars are invalid payloads.
fn parse_user(body: &[u8]) -> Result<User, ApiError> {
    let invalid_payload = |_| ApiError::bad_request(INVALID_PAYLOAD);

    let Value::Object(object) = serde_json::from_slice::<Value>(body).map_err(invalid_payload)?
    else {
        return Err(ApiError::bad_request(INVALID_PAYLOAD));
    };
    let user: User =
        serde_json::from_value(Value::Object(fold_field_names(object))).map_err(invalid_payload)?;

    validate_user(&user).map_err(|details| ApiError::Validation {
        message: MISSING_FIELDS,
        details: Some(details),
    })?;

    if !validate_email(&user.email) {
        return Err(ApiError::bad_request(INVALID_EMAIL));
    }

    if !validate_dob(&user.dob) {
        return Err(ApiError::bad_request(INVALID_DOB));
    }

    Ok(user)
}

/// Create a user (POST /users).
///
/// Any `UserID` in the body is replaced with a generated one.
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let user = parse_user(&body)?.with_generated_id();

    state.users.create_user(&user).await?;

    tracing::info!(user_id = %user.user_id, "Created new user");

    json_response(StatusCode::CREATED, &user)
}

/// Get a single user by ID (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Response, ApiError> {
    let user = state.users.get_user(&user_id).await?;

    json_response(StatusCode::OK, &user)
}

/// Overwrite a user's name, email and date of birth (PUT /users/{id}).
///
/// There is no existence check: updating an unknown ID creates it.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    body: Bytes,
) -> Result<Response, ApiError> {
    let user = parse_user(&body)?.with_id(user_id);

    state.users.update_user(&user.user_id, &user).await?;

    tracing::info!(user_id = %user.user_id, "Updated user");

    json_response(StatusCode::OK, &user)
}

/// Delete a user by ID (DELETE /users/{id}).
///
/// Deleting an unknown ID still returns 204.
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Response, ApiError> {
    state.users.delete_user(&user_id).await?;

    tracing::info!(user_id = %user_id, "Deleted user");

    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, "application/json")],
    )
        .into_response())
}

/// Any verb the user routes do not handle.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Any path outside the user routes.
pub async fn unknown_route() -> ApiError {
    ApiError::UnknownRoute
}
