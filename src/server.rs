use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::api::{
    ApiCopyRequest, ApiCopyResponse, ApiHashtagRequest, ApiHashtagResponse, ApiOptimizeRequest,
    ApiOptimizeResponse, ApiPackageRequest, ApiPackageResponse, ApiPredictionRequest,
    ApiPredictionResponse, ApiTargetingRequest, ApiTargetingResponse,
};
use crate::provider::ProviderClient;
use adcopy_gen::config::GeneratorConfig;
use adcopy_gen::hashtags::generate_hashtags_with_seed;
use adcopy_gen::insights::{
    generate_global_targeting_with_seed, generate_performance_predictions_with_seed,
    optimize_ad_with_seed, recommend_package,
};
use adcopy_gen::{generate_with_provider, Objective, Platform};

#[derive(Clone)]
struct AppState {
    provider: Option<ProviderClient>,
    config: Arc<GeneratorConfig>,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
}

#[derive(Clone, Serialize)]
struct StreamEvent {
    event: String,
    message: String,
    timestamp_ms: u128,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let config = GeneratorConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default();
    let provider = ProviderClient::from_env(&config.provider, None);
    if provider.is_none() {
        info!("no provider key configured, template engine only");
    }
    let state = AppState {
        provider,
        config: Arc::new(config),
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/ai/generate-copy", post(generate_copy_handler))
        .route("/api/ai/generate-copy/stream", get(stream_handler))
        .route("/api/ai/generate-hashtags", post(hashtags_handler))
        .route("/api/ai/global-targeting", post(targeting_handler))
        .route("/api/ai/performance-prediction", post(prediction_handler))
        .route("/api/ai/package-recommendation", post(package_handler))
        .route("/api/ai/optimize", post(optimize_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "starting ad copy server");
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn generate_copy_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiCopyRequest>,
) -> Result<Json<ApiCopyResponse>, (StatusCode, String)> {
    let use_ai = request.use_ai.unwrap_or(false);
    let request_id = request.request_id.clone().unwrap_or_else(generate_request_id);
    let seed = request.seed.unwrap_or_else(rand::random);
    let input = request
        .into_request()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let channel = if use_ai {
        Some(get_or_create_channel(&state, &request_id).await)
    } else {
        None
    };

    let mut warnings = Vec::new();
    let provider_copy = if use_ai {
        if let Some(sender) = channel.as_ref() {
            send_event(sender, "start", "Preparing provider prompt");
        }
        match &state.provider {
            Some(client) => {
                if let Some(sender) = channel.as_ref() {
                    send_event(sender, "calling", "Calling copy provider");
                }
                match client.draft_copy(&input).await {
                    Ok(copy) => {
                        if let Some(sender) = channel.as_ref() {
                            send_event(sender, "received", "Received provider draft");
                        }
                        Some(copy)
                    }
                    Err(err) => {
                        warn!(error = %err, "provider draft failed, using templates");
                        warnings.push(format!("AI drafting failed: {}", err));
                        if let Some(sender) = channel.as_ref() {
                            send_event(sender, "error", "Provider call failed");
                        }
                        None
                    }
                }
            }
            None => {
                warnings.push("AI drafting not configured: set ADCOPY_API_KEY".to_string());
                if let Some(sender) = channel.as_ref() {
                    send_event(sender, "error", "AI drafting not configured");
                }
                None
            }
        }
    } else {
        None
    };

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "merge", "Merging draft into templates");
    }

    let response = generate_with_provider(&input, provider_copy.as_ref(), seed, &state.config);
    info!(
        request_id = %request_id,
        platform = input.platform.label(),
        objective = input.objective.label(),
        "generated ad copy"
    );

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "done", "Generation complete");
        schedule_cleanup(state.channels.clone(), request_id.clone());
    }

    Ok(Json(ApiCopyResponse::from_response(
        response, warnings, request_id,
    )))
}

async fn hashtags_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiHashtagRequest>,
) -> Result<Json<ApiHashtagResponse>, (StatusCode, String)> {
    let content = request.content.unwrap_or_default().trim().to_string();
    if content.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "content is required".to_string()));
    }
    let platform = Platform::parse_or_default(request.platform.as_deref().unwrap_or(""));
    let seed = request.seed.unwrap_or_else(rand::random);

    let hashtags =
        generate_hashtags_with_seed(&content, platform, state.config.limits.hashtag_cap, seed);
    Ok(Json(ApiHashtagResponse::new(hashtags)))
}

async fn targeting_handler(
    State(_state): State<AppState>,
    Json(request): Json<ApiTargetingRequest>,
) -> Json<ApiTargetingResponse> {
    let objective = Objective::parse_or_default(request.objective.as_deref().unwrap_or(""));
    let platform = Platform::parse_or_default(request.platform.as_deref().unwrap_or(""));
    let seed = request.seed.unwrap_or_else(rand::random);

    Json(ApiTargetingResponse {
        success: true,
        data: generate_global_targeting_with_seed(objective, platform, seed),
    })
}

async fn prediction_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPredictionRequest>,
) -> Result<Json<ApiPredictionResponse>, (StatusCode, String)> {
    let budget = request
        .budget
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "budget is required".to_string()))?;
    let platforms: Vec<Platform> = request
        .platforms
        .unwrap_or_default()
        .iter()
        .filter_map(|value| Platform::from_str(value))
        .collect();
    let seed = request.seed.unwrap_or_else(rand::random);

    Ok(Json(ApiPredictionResponse {
        success: true,
        data: generate_performance_predictions_with_seed(
            budget,
            &platforms,
            &state.config.bands,
            seed,
        ),
    }))
}

async fn package_handler(
    State(_state): State<AppState>,
    Json(request): Json<ApiPackageRequest>,
) -> Result<Json<ApiPackageResponse>, (StatusCode, String)> {
    let monthly_budget = request.monthly_budget.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "monthly_budget is required".to_string(),
        )
    })?;

    Ok(Json(ApiPackageResponse {
        success: true,
        data: recommend_package(monthly_budget),
    }))
}

async fn optimize_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiOptimizeRequest>,
) -> Result<Json<ApiOptimizeResponse>, (StatusCode, String)> {
    let seed = request.seed.unwrap_or_else(rand::random);
    let input = request
        .into_request()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    Ok(Json(ApiOptimizeResponse {
        success: true,
        data: optimize_ad_with_seed(&input, &state.config, seed),
    }))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = get_or_create_channel(&state, &query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    send_event(&sender, "connected", "Streaming provider status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn get_or_create_channel(
    state: &AppState,
    request_id: &str,
) -> broadcast::Sender<StreamEvent> {
    let mut guard = state.channels.lock().await;
    if let Some(sender) = guard.get(request_id) {
        return sender.clone();
    }
    let (sender, _) = broadcast::channel(32);
    guard.insert(request_id.to_string(), sender.clone());
    sender
}

fn send_event(sender: &broadcast::Sender<StreamEvent>, event: &str, message: &str) {
    let _ = sender.send(StreamEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

fn schedule_cleanup(
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
    request_id: String,
) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let mut guard = channels.lock().await;
        guard.remove(&request_id);
    });
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
