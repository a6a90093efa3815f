//! Routes and handlers for the analysis service.
//!
//! Two endpoints: `POST /api/analyze-manual` scores a patient record
//! through the chat backend, `GET /api/health` reports liveness and
//! backend configuration. The chat call is blocking, so handlers move
//! it off the runtime with `spawn_blocking`.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use super::error::ApiError;
use super::types::ApiContext;
use crate::config;
use crate::models::{PatientRecord, RiskReport};
use crate::scoring::{build_analysis_prompt, parse_report, SYSTEM_PROMPT};

/// Builds the full router. CORS stays permissive so any local UI can
/// call the service directly.
pub fn analysis_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/analyze-manual", post(analyze))
        .route("/health", get(health))
        .with_state(ctx)
        .layer(CorsLayer::permissive());

    Router::new().nest("/api", api)
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    patient: Option<PatientRecord>,
}

/// Success half of the response envelope, echoing the scored patient.
#[derive(Serialize)]
struct AnalyzeResponse {
    success: bool,
    analysis: RiskReport,
    patient: PatientRecord,
    timestamp: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    backend_configured: bool,
    version: &'static str,
}

async fn analyze(
    State(ctx): State<ApiContext>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Some(backend) = ctx.backend else {
        return Err(ApiError::NotConfigured);
    };
    let Some(patient) = request.patient else {
        return Err(ApiError::BadRequest("Patient data required".into()));
    };

    tracing::info!("Analyzing patient {}", patient.name);
    let prompt = build_analysis_prompt(&patient);
    let raw = tokio::task::spawn_blocking(move || backend.complete(SYSTEM_PROMPT, &prompt))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let analysis = parse_report(&raw)?;
    tracing::info!("Analysis complete for {}", patient.name);

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        patient,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        backend_configured: ctx.backend.is_some(),
        version: config::APP_VERSION,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::scoring::MockChat;

    const REPORT_JSON: &str = r#"{
        "overallRiskScore": 72,
        "riskCategory": "High Risk",
        "clinicalSummary": "High cardiovascular risk.",
        "domains": {
            "cardiac": {"score": 78, "status": "red", "concerns": ["Stage 2 hypertension"], "recommendations": ["Cardiology referral"]}
        },
        "priorityActions": [
            {"action": "Start therapy", "urgency": "high", "impact": "Lower stroke risk", "timeframe": "48 hours"}
        ],
        "hospitalAdmissionProb": 35,
        "readmissionRisk30Day": 28,
        "treatmentResponseLikelihood": 70,
        "keyFindings": ["BP 152/94 mmHg"],
        "milestones": [
            {"task": "BP recheck", "date": "Week 1", "priority": "high"}
        ]
    }"#;

    const PATIENT_JSON: &str = r#"{
        "name": "Maria Gonzalez",
        "age": 67,
        "gender": "Female",
        "conditions": ["Hypertension"],
        "vitals": {"systolic_bp": 152, "diastolic_bp": 94, "heart_rate": 88},
        "labs": {},
        "medications": [],
        "allergies": [],
        "smoking": true,
        "alcohol": "Occasional"
    }"#;

    fn ctx_with(backend: MockChat) -> ApiContext {
        ApiContext::new(Some(Arc::new(backend)))
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn analyze_body() -> String {
        format!(r#"{{"patient": {PATIENT_JSON}}}"#)
    }

    #[tokio::test]
    async fn health_reports_backend_state() {
        let app = analysis_router(ApiContext::new(None));
        let response = app.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend_configured"], false);
        assert_eq!(body["version"], config::APP_VERSION);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn analyze_succeeds_end_to_end() {
        let fenced = format!("```json\n{REPORT_JSON}\n```");
        let app = analysis_router(ctx_with(MockChat::new(&fenced)));
        let response = app
            .oneshot(post_json("/api/analyze-manual", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["analysis"]["overallRiskScore"], 72);
        assert_eq!(body["analysis"]["domains"]["cardiac"]["score"], 78);
        assert_eq!(body["patient"]["name"], "Maria Gonzalez");
        assert!(body["patient"]["vitals"]["temperature"].is_null());
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn analyze_without_backend_is_rejected() {
        let app = analysis_router(ApiContext::new(None));
        let response = app
            .oneshot(post_json("/api/analyze-manual", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("GROQ_API_KEY"));
    }

    #[tokio::test]
    async fn analyze_requires_patient_data() {
        let app = analysis_router(ctx_with(MockChat::new(REPORT_JSON)));
        let response = app
            .oneshot(post_json("/api/analyze-manual", "{}".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Patient data required");
    }

    #[tokio::test]
    async fn analyze_surfaces_unparseable_model_output() {
        let app = analysis_router(ctx_with(MockChat::new("I cannot provide an assessment.")));
        let response = app
            .oneshot(post_json("/api/analyze-manual", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON response from AI:"));
    }

    #[tokio::test]
    async fn analyze_surfaces_backend_failure() {
        let app = analysis_router(ctx_with(MockChat::failing("model unavailable")));
        let response = app
            .oneshot(post_json("/api/analyze-manual", analyze_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("model unavailable"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = analysis_router(ApiContext::new(None));
        let response = app.oneshot(get_request("/api/unknown")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
