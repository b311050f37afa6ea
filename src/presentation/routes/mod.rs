// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{compliance_handler, dnc_handler, scrub_handler};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application routes.
///
/// The shared services are injected by the caller as extensions.
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route(
            "/v1/compliance/check",
            post(compliance_handler::check_compliance),
        )
        .route(
            "/v1/dnc",
            post(dnc_handler::add_to_dnc).patch(dnc_handler::set_dnc_status),
        )
        .route("/v1/dnc/bulk", post(dnc_handler::bulk_add_to_dnc))
        .route("/v1/scrub", post(scrub_handler::scrub_list));

    Router::new().merge(public_routes).merge(api_routes)
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint.
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
