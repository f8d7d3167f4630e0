//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the catch-all dispatch handler
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Resolve every request to an `AppInput`
//! - Apply routing settings pushed by the config watcher
//! - Stop accepting on the shutdown signal

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, Query, State},
    http::{HeaderMap, Method, Request, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ApplicationConfig, RouterConfig};
use crate::http::input::{build_payload, AppInput};
use crate::http::request::{propagate_request_id_layer, request_id_layer, RequestIdExt};
use crate::http::response::ApiError;
use crate::observability::metrics;
use crate::routing::{Resolver, RuleSet};

/// Settings the dispatch handler reads on every request.
#[derive(Debug, Clone)]
pub struct RoutingSettings {
    pub api_prefix: String,
    pub resolver: Resolver,
}

impl From<&ApplicationConfig> for RoutingSettings {
    fn from(config: &ApplicationConfig) -> Self {
        Self {
            api_prefix: config.api_prefix.clone(),
            resolver: Resolver::new(RuleSet::from_flag(config.service_action_rule)),
        }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<ArcSwap<RoutingSettings>>,
}

/// HTTP front end for the resolver.
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
    settings: Arc<ArcSwap<RoutingSettings>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        let settings = Arc::new(ArcSwap::from_pointee(RoutingSettings::from(
            &config.application,
        )));
        let state = AppState {
            settings: settings.clone(),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            settings,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request.headers().request_id(),
            )
        });

        Router::new()
            .route("/", any(dispatch_handler))
            .route("/{*path}", any(dispatch_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(trace)
            .layer(request_id_layer())
    }

    /// Serve until `shutdown` fires, applying config reloads as they arrive.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<RouterConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            api_prefix = %self.config.application.api_prefix,
            service_action_rule = self.config.application.service_action_rule,
            "HTTP server starting"
        );

        let settings = self.settings.clone();
        let running = self.config.clone();
        tokio::spawn(async move {
            while let Some(update) = config_updates.recv().await {
                apply_update(&settings, &running, &update);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn apply_update(
    settings: &ArcSwap<RoutingSettings>,
    running: &RouterConfig,
    update: &RouterConfig,
) {
    settings.store(Arc::new(RoutingSettings::from(&update.application)));
    tracing::info!(
        api_prefix = %update.application.api_prefix,
        service_action_rule = update.application.service_action_rule,
        "Routing settings reloaded"
    );

    if update.listener != running.listener
        || update.timeouts != running.timeouts
        || update.limits != running.limits
    {
        tracing::warn!("Listener, timeout and limit changes take effect after restart");
    }
}

/// Resolve the request and answer with the assembled `AppInput`.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers.request_id();
    let settings = state.settings.load();

    let result = settings
        .resolver
        .resolve(method.as_str(), uri.path(), &settings.api_prefix)
        .map_err(ApiError::from)
        .and_then(|route| {
            let payload = build_payload(query, &body)?;
            Ok(AppInput::new(route, payload))
        });

    let response = match result {
        Ok(input) => {
            tracing::debug!(
                request_id = %request_id,
                command = %input.command,
                action = %input.action,
                "Request dispatched"
            );
            Json(input).into_response()
        }
        Err(err) => {
            tracing::warn!(request_id = %request_id, path = %uri.path(), error = %err, "Request rejected");
            err.into_response_with(request_id)
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}
