//! Contact form submission endpoint.

use super::AppState;
use crate::error::{ApiError, FieldError};
use crate::store::NewContact;
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

/// POST /api/contacts
pub async fn submit(
    State(store): State<AppState>,
    Json(input): Json<NewContact>,
) -> Result<Json<Value>, ApiError> {
    validate(&input)?;

    let contact = store
        .create_contact(input)
        .await
        .map_err(|e| ApiError::storage("Failed to submit contact form", e))?;

    tracing::info!(id = %contact.id, "Contact form submitted");
    Ok(Json(json!({ "success": true, "contact": contact })))
}

/// All three fields are required, non-empty strings.
fn validate(input: &NewContact) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    if input.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if input.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if input.message.trim().is_empty() {
        errors.push(FieldError::new("message", "Message is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}
