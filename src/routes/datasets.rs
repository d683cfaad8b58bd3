use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, DefaultBodyLimit, Query, State},
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    error::AppError,
    models::{AnalysisReport, AnalyzeOptions},
    services::{
        analyzer::DatasetAnalyzer,
        table::{export, load_table},
    },
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/datasets/analyze", post(analyze_dataset))
        .route("/datasets/export", post(export_dataset))
        .layer(cors)
}

/// Body limit for uploads, taken from configuration.
pub fn upload_limit(state: &AppState) -> DefaultBodyLimit {
    DefaultBodyLimit::max(state.config.max_file_size)
}

async fn analyze_dataset(
    State(state): State<Arc<AppState>>,
    options: Result<Query<AnalyzeOptions>, QueryRejection>,
    body: Bytes,
) -> Result<Json<AnalysisReport>, AppError> {
    let Query(options) = options?;
    let start = std::time::Instant::now();
    tracing::info!(
        "Analyze request: {}KB, overview={}, stats={}, viz={}",
        body.len() / 1024,
        options.show_overview,
        options.show_stats,
        options.show_viz
    );

    let analyzer = DatasetAnalyzer::new(&state.config);
    let report = tokio::task::spawn_blocking(move || {
        let df = load_table(body)?;
        analyzer.analyze(&df, &options)
    })
    .await
    .map_err(|e| AppError::Internal(format!("analysis task failed: {}", e)))??;

    tracing::info!("Analyze request completed in {:?}", start.elapsed());
    Ok(Json(report))
}

async fn export_dataset(body: Bytes) -> Result<Response, AppError> {
    tracing::info!("Export request: {}KB", body.len() / 1024);

    let csv = tokio::task::spawn_blocking(move || {
        let df = load_table(body)?;
        export::to_csv(&df)
    })
    .await
    .map_err(|e| AppError::Internal(format!("export task failed: {}", e)))??;

    let headers = [
        (header::CONTENT_TYPE, export::EXPORT_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export::EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, csv).into_response())
}
