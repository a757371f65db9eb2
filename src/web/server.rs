use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::request::MatchRequest;
use crate::matching::{Algorithm, MatchingConfig, MatchingEngine};
use crate::utils::display::{prepare_for_display, SortKey, DEFAULT_DISPLAY_LIMIT};
use crate::utils::validation::validate_request;

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_BODY_SIZE: usize = 16 * 1024; // 16KB
pub const MAX_DISPLAY_LIMIT: usize = 100_000;
pub const MAX_CONCURRENT_REQUESTS: usize = 32;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Most matches one linear search may hold in memory. Every step can yield a
/// match, so this is also its iteration ceiling on the server.
pub const MAX_SERVER_MATCHES: u64 = 1_000_000;

/// Shared application state
pub struct AppState {
    pub engine: MatchingEngine,
}

impl AppState {
    /// Engine for one request; linear searches run under [`MAX_SERVER_MATCHES`]
    #[must_use]
    pub fn engine_for(&self, request: &MatchRequest) -> MatchingEngine {
        let mut config = *self.engine.config();
        if Algorithm::for_request(request) == Algorithm::LinearSearch {
            config.max_iterations = config.max_iterations.min(MAX_SERVER_MATCHES);
        }
        MatchingEngine::with_config(config)
    }
}

/// Enhanced error response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Body of `POST /api/match`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchApiRequest {
    #[serde(flatten)]
    request: MatchRequest,
    #[serde(default)]
    sort_by: SortKey,
    display_limit: Option<usize>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes and state, without middleware
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/match", post(match_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(config: MatchingConfig) -> anyhow::Result<Router> {
    let state = Arc::new(AppState {
        engine: MatchingEngine::with_config(config),
    });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    // Build router with comprehensive security layers
    let app = api_router(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // A search at the default iteration ceiling finishes well inside this
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            // Each request may occupy a blocking thread for the whole search
            .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.engine.matching_config();
    let app = create_router(config)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting ratio-matcher web server at http://{addr}");
    tracing::info!(
        "Iteration ceiling per search: {} ({} for threshold searches)",
        config.max_iterations,
        config.max_iterations.min(MAX_SERVER_MATCHES)
    );

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!("Could not open browser: {e}");
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// API endpoint for running a search
async fn match_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchApiRequest>, JsonRejection>,
) -> Response {
    let start_time = std::time::Instant::now();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(create_safe_error_response(
                    "invalid_request",
                    "Request body is not a valid match request",
                    Some(&rejection.body_text()),
                )),
            )
                .into_response();
        }
    };

    let request = body.request;
    if let Err(e) = validate_request(&request) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                error_type: e.error_type().to_string(),
                details: None,
            }),
        )
            .into_response();
    }

    let engine = state.engine_for(&request);
    let outcome = match tokio::task::spawn_blocking(move || engine.find_matches(&request)).await
    {
        Ok(outcome) => outcome,
        Err(join_error) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(create_safe_error_response(
                    "search_failed",
                    "The search could not be completed",
                    Some(&join_error.to_string()),
                )),
            )
                .into_response();
        }
    };

    let display_limit = body
        .display_limit
        .unwrap_or(DEFAULT_DISPLAY_LIMIT)
        .clamp(1, MAX_DISPLAY_LIMIT);
    let page = prepare_for_display(outcome.results, body.sort_by, display_limit);

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    Json(serde_json::json!({
        "results": page.results,
        "iterationLimitReached": outcome.iteration_limit_reached,
        "processingInfo": {
            "algorithm": Algorithm::for_request(&request),
            "totalMatches": page.total,
            "displayLimit": display_limit,
            "displayLimitReached": page.truncated,
            "sortBy": body.sort_by,
            "processingTimeMs": processing_time,
            "maxIterations": engine.config().max_iterations,
        }
    }))
    .into_response()
}
