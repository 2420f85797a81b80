//! HTTP endpoints
//!
//! REST API over the risk analysis engine. Handlers validate input,
//! delegate to the analyst/engine crates, and map errors; they carry
//! no analysis logic of their own.

use std::time::Instant;

use axum::{
    extract::{Json, Path, State},
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use cupidsecure_core::{AnalysisReport, FinancialRequest, FinancialRiskResult, MessageRecord};
use cupidsecure_engine::assess_financial_request;
use cupidsecure_llm::{Message, Prompts, ScriptKind};

use crate::metrics::{metrics_handler, record_analyze_duration, record_request};
use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        // Analysis endpoints
        .route("/api/analyze", post(analyze))
        .route("/api/calculate-financial-risk", post(calculate_financial_risk))
        .route("/api/analyze-image", post(analyze_image))

        // Assistant endpoints
        .route("/api/generate-response", post(generate_response))
        .route("/api/chat", post(chat))

        // Demo data
        .route("/api/demo-conversation/:id", get(demo_conversation))

        // Health and observability
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))

        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (dev only)
/// - If cors_origins is empty, defaults to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);
    }

    // Credentialed CORS forbids wildcard headers; list what the JSON API
    // actually needs.
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Conversation analysis request
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    messages: Vec<MessageRecord>,
}

/// Analyze a conversation
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ServerError> {
    record_request("analyze");
    let start = Instant::now();

    let report = state.analyzer.analyze(&request.messages).await?;

    record_analyze_duration(start.elapsed().as_secs_f64());
    Ok(Json(report))
}

/// Evaluate a single financial request
async fn calculate_financial_risk(
    Json(request): Json<FinancialRequest>,
) -> Result<Json<FinancialRiskResult>, ServerError> {
    record_request("calculate_financial_risk");
    let result = assess_financial_request(&request)?;
    Ok(Json(result))
}

/// Screenshot analysis request
#[derive(Debug, Deserialize)]
struct AnalyzeImageRequest {
    /// Full data URI (data:image/png;base64,...)
    #[serde(default)]
    image: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeImageResponse {
    analysis: String,
    timestamp: String,
}

/// Analyze a conversation screenshot via the vision-capable backend.
/// This path has no deterministic fallback; backend failure surfaces
/// as 502.
async fn analyze_image(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeImageRequest>,
) -> Result<Json<AnalyzeImageResponse>, ServerError> {
    record_request("analyze_image");

    if request.image.is_empty() {
        return Err(ServerError::InvalidRequest("No image provided".to_string()));
    }

    let messages = vec![Message::user_with_image(
        Prompts::image_analysis(),
        request.image,
    )];

    let analysis = state
        .backend
        .generate(&messages)
        .await
        .map_err(|e| ServerError::Upstream(e.to_string()))?;

    Ok(Json(AnalyzeImageResponse {
        analysis,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Script generation request
#[derive(Debug, Deserialize)]
struct ScriptRequest {
    #[serde(rename = "type")]
    kind: ScriptKind,
    #[serde(default)]
    context: String,
}

#[derive(Debug, Serialize)]
struct ScriptResponse {
    scripts: Vec<String>,
}

/// Generate safe response scripts
async fn generate_response(
    State(state): State<AppState>,
    Json(request): Json<ScriptRequest>,
) -> Json<ScriptResponse> {
    record_request("generate_response");
    let scripts = state.scripts.generate(request.kind, &request.context).await;
    Json(ScriptResponse { scripts })
}

/// Advisor chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    timestamp: String,
}

/// Advisor chat; a plain passthrough to the backend with the advisor
/// system prompt
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    record_request("chat");

    if request.message.is_empty() {
        return Err(ServerError::InvalidRequest("No message provided".to_string()));
    }

    let messages = vec![
        Message::system(Prompts::advisor_system()),
        Message::user(request.message),
    ];

    let response = state
        .backend
        .generate(&messages)
        .await
        .map_err(|e| ServerError::Upstream(e.to_string()))?;

    Ok(Json(ChatResponse {
        response,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Serialize)]
struct DemoConversation {
    messages: Vec<MessageRecord>,
}

/// Canned demo conversations for the front-end
async fn demo_conversation(Path(id): Path<String>) -> Json<DemoConversation> {
    record_request("demo_conversation");

    let messages = match id.as_str() {
        "1" => vec![
            MessageRecord::new(
                "Stranger",
                "Hello beautiful, I feel like I have known you forever.",
            ),
            MessageRecord::new("Me", "Hi, we just met."),
            MessageRecord::new(
                "Stranger",
                "I am currently overseas on a peacekeeping mission but I will come see you soon.",
            ),
            MessageRecord::new(
                "Stranger",
                "My daughter is in the hospital and I need $500 for her surgery immediately via gift cards.",
            ),
        ],
        "2" => vec![
            MessageRecord::new(
                "Mentor",
                "Have you heard of the new crypto investment platform using AI?",
            ),
            MessageRecord::new("Me", "No, tell me more."),
            MessageRecord::new(
                "Mentor",
                "I made $10,000 in one week. I can guide you. Just download Trust Wallet.",
            ),
            MessageRecord::new("Mentor", "We need to move to WhatsApp for better security."),
        ],
        _ => Vec::new(),
    };

    Json(DemoConversation { messages })
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "model": state.backend.model_name(),
    }))
}
