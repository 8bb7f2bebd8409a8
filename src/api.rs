use axum::{
    extract::{multipart::Multipart, rejection::JsonRejection, DefaultBodyLimit, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::batch;
use crate::error::{Result, ServiceError};
use crate::models::{AnalyticsSnapshot, BatchSummary, PredictionRecord, Sentiment};
use crate::service::PredictionService;

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub marks: f64,
    pub attendance: f64,
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub risk: String,
    pub sentiment: Sentiment,
    pub reasons: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn build_router(
    service: PredictionService,
    allowed_origins: Vec<HeaderValue>,
    max_upload_bytes: usize,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .route("/history", get(history))
        .route("/analytics", get(analytics))
        .route(
            "/csv-upload",
            post(csv_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
        message: "AI Student Risk Prediction API".to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn predict(
    State(service): State<PredictionService>,
    payload: std::result::Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>> {
    let Json(request) =
        payload.map_err(|rejection| ServiceError::InvalidInput(rejection.body_text()))?;

    let evaluation = service.evaluate(request.marks, request.attendance, &request.feedback)?;

    Ok(Json(PredictResponse {
        risk: evaluation.record.risk,
        sentiment: evaluation.record.sentiment,
        reasons: evaluation.reasons,
    }))
}

async fn history(State(service): State<PredictionService>) -> Json<Vec<PredictionRecord>> {
    Json(service.history())
}

async fn analytics(State(service): State<PredictionService>) -> Json<AnalyticsSnapshot> {
    Json(service.analytics())
}

async fn csv_upload(
    State(service): State<PredictionService>,
    mut multipart: Multipart,
) -> Result<Json<BatchSummary>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ServiceError::InvalidUpload(err.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let is_csv = field
            .file_name()
            .map(|name| name.ends_with(".csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(ServiceError::InvalidUpload("Upload a CSV file".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|err| ServiceError::InvalidUpload(err.body_text()))?;
        let content = String::from_utf8(bytes.to_vec())
            .map_err(|_| ServiceError::InvalidUpload("CSV file must be UTF-8 text".to_string()))?;

        let summary = tokio::task::spawn_blocking(move || batch::ingest(&service, &content))
            .await
            .map_err(|err| ServiceError::Internal(err.to_string()))??;
        return Ok(Json(summary));
    }

    Err(ServiceError::InvalidUpload(
        "multipart field 'file' is required".to_string(),
    ))
}
