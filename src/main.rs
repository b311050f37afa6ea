// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use scrubrs::config::settings::Settings;
use scrubrs::domain::repositories::dnc_repository::DncRepository;
use scrubrs::domain::repositories::lead_repository::LeadRepository;
use scrubrs::domain::services::aggregator::ComplianceAggregator;
use scrubrs::domain::services::scrub_service::BulkDncScrubber;
use scrubrs::infrastructure::checkers::internal_dnc::InternalDncChecker;
use scrubrs::infrastructure::checkers::build_default_checkers;
use scrubrs::infrastructure::database::connection;
use scrubrs::infrastructure::repositories::dnc_repo_impl::DncRepositoryImpl;
use scrubrs::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
use scrubrs::presentation::routes;
use scrubrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting scrubrs...");

    // Initialize Prometheus Metrics
    scrubrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // 4. Initialize repositories
    let dnc_repo: Arc<dyn DncRepository> = Arc::new(DncRepositoryImpl::new(db.clone()));
    let lead_repo: Arc<dyn LeadRepository> = Arc::new(LeadRepositoryImpl::new(db.clone()));

    // 5. Build the checker chain and the aggregator
    let internal_dnc = Arc::new(InternalDncChecker::new(dnc_repo.clone()));
    let checkers = build_default_checkers(&settings.compliance, internal_dnc.clone())?;
    info!("Configured {} compliance checkers", checkers.len());

    let aggregator = Arc::new(ComplianceAggregator::new(
        checkers,
        settings.compliance.checker_timeout_ms,
    ));

    // 6. Build the bulk scrubber
    let scrubber = Arc::new(BulkDncScrubber::new(
        lead_repo,
        internal_dnc.clone(),
        settings.scrub.batch_size,
        settings.scrub.max_batches,
    ));

    // 7. Start HTTP server
    let app = routes::routes()
        .layer(Extension(aggregator))
        .layer(Extension(internal_dnc))
        .layer(Extension(dnc_repo))
        .layer(Extension(scrubber))
        .layer(Extension(settings.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
