// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::dnc_request::{
    AddDncRequestDto, BulkAddDncRequestDto, SetDncStatusRequestDto,
};
use crate::domain::compliance::checker::CheckerError;
use crate::domain::models::phone;
use crate::domain::repositories::dnc_repository::DncRepository;
use crate::infrastructure::checkers::internal_dnc::InternalDncChecker;
use crate::presentation::errors::AppError;

/// Add one phone number to the internal DNC list.
pub async fn add_to_dnc(
    Extension(internal_dnc): Extension<Arc<InternalDncChecker>>,
    Json(payload): Json<AddDncRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = internal_dnc.add_to_dnc(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Import a batch of opt-outs.
///
/// Per-entry failures never abort the import; the response carries the
/// added/invalid/failed tallies.
pub async fn bulk_add_to_dnc(
    Extension(internal_dnc): Extension<Arc<InternalDncChecker>>,
    Json(payload): Json<BulkAddDncRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entries = payload.entries.into_iter().map(Into::into).collect();
    let outcome = internal_dnc.bulk_add_to_dnc(entries).await;

    Ok(Json(json!({
        "added": outcome.added,
        "invalid": outcome.invalid,
        "failed": outcome.failed,
    })))
}

/// Change the status of an existing DNC entry.
///
/// Status is the only field mutable after creation; deactivated entries
/// stay on file for audit but are no longer enforced. 404 when the
/// number has no entry.
pub async fn set_dnc_status(
    Extension(dnc_repo): Extension<Arc<dyn DncRepository>>,
    Json(payload): Json<SetDncStatusRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let normalized = phone::normalize(&payload.phone_number);
    if !phone::is_canonical(&normalized) {
        return Err(CheckerError::Validation(format!(
            "'{}' does not normalize to a valid 10-digit US number",
            payload.phone_number
        ))
        .into());
    }

    let entry = dnc_repo.set_status(&normalized, payload.status).await?;
    Ok(Json(entry))
}
