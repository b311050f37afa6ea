// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::scrub_request::{ScrubFormat, ScrubRequestDto};
use crate::domain::services::reporter::ScrubReporter;
use crate::domain::services::scrub_service::{BulkDncScrubber, ScrubParams};
use crate::presentation::errors::AppError;

/// Run a bulk DNC scrub over one lead list.
///
/// Returns the full JSON report by default; `format: "csv"` downloads
/// the DNC-only export instead.
pub async fn scrub_list(
    Extension(scrubber): Extension<Arc<BulkDncScrubber>>,
    Json(payload): Json<ScrubRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let params = ScrubParams {
        list_id: payload.list_id,
        start_date: payload.start_date,
        end_date: payload.end_date,
    };

    let report = scrubber.scrub(&params).await?;

    match payload.format {
        ScrubFormat::Json => Ok(Json(ScrubReporter::to_json(&report)?).into_response()),
        ScrubFormat::Csv => {
            let csv = ScrubReporter::to_csv(&report)?;
            let filename = format!(
                "dnc-scrub-{}-{}-{}.csv",
                report.list_id, params.start_date, params.end_date
            );
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                csv,
            )
                .into_response())
        }
    }
}
