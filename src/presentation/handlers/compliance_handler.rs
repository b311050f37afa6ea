// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::compliance_request::ComplianceCheckRequestDto;
use crate::domain::compliance::checker::LeadContext;
use crate::domain::services::aggregator::ComplianceAggregator;
use crate::presentation::errors::AppError;

/// Check one phone number against every configured blocklist source.
///
/// Always responds 200 with the full aggregate report; per-source
/// failures surface inside the report as fail-closed results, never as
/// an HTTP error.
pub async fn check_compliance(
    Extension(aggregator): Extension<Arc<ComplianceAggregator>>,
    Json(payload): Json<ComplianceCheckRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let context = payload.state.map(|state| LeadContext {
        state: Some(state.to_uppercase()),
    });

    let report = aggregator
        .check_phone_compliance(&payload.phone, context.as_ref())
        .await;

    Ok(Json(report))
}
