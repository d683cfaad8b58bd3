use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::{models::FeatureGlossary, services::features, AppState};

pub mod datasets;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/features", get(feature_glossary))
        .merge(datasets::routes())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn feature_glossary() -> Json<FeatureGlossary> {
    Json(features::glossary())
}
