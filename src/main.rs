//! Open Space Console Backend
//!
//! View-state service for the open space management console: filtered, paginated
//! report and registry views with summary tiles, plus the notification inbox.

mod api;
mod config;
mod errors;
mod inbox;
mod models;
mod source;
mod view;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use inbox::Inbox;
use models::{OpenSpace, Report};
use source::{fixtures, FixtureSource};
use view::ViewHandle;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub reports: ViewHandle<Report>,
    pub open_spaces: ViewHandle<OpenSpace>,
    pub inbox: Arc<RwLock<Inbox>>,
}

impl AppState {
    /// Build both views on top of the fixture sources. Nothing is loaded yet.
    pub fn with_fixtures(config: &Config) -> Self {
        let reports = FixtureSource::new(fixtures::reports(), config.load_delay);
        let open_spaces = FixtureSource::new(fixtures::open_spaces(), config.load_delay);

        Self {
            reports: ViewHandle::new(Arc::new(reports), config.default_page_size),
            open_spaces: ViewHandle::new(Arc::new(open_spaces), config.default_page_size),
            inbox: Arc::new(RwLock::new(Inbox::new(fixtures::notifications()))),
        }
    }
}

impl FromRef<AppState> for ViewHandle<Report> {
    fn from_ref(state: &AppState) -> Self {
        state.reports.clone()
    }
}

impl FromRef<AppState> for ViewHandle<OpenSpace> {
    fn from_ref(state: &AppState) -> Self {
        state.open_spaces.clone()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Open Space Console Backend");
    tracing::info!("Simulated load delay: {:?}", config.load_delay);
    tracing::info!("Default page size: {}", config.default_page_size);
    tracing::info!("Bind address: {}", config.bind_addr);

    let state = AppState::with_fixtures(&config);

    // Initial loads run in the background; the views report `loading` until they land.
    state.reports.spawn_reload().await;
    state.open_spaces.spawn_reload().await;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The console is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Reports
        .route("/reports", get(api::get_view::<Report>))
        .route("/reports/view", put(api::update_view::<Report>))
        .route("/reports/reload", post(api::reload_view::<Report>))
        .route("/reports/{id}", get(api::get_record::<Report>))
        .route("/reports/{id}/resolve", post(api::resolve_report))
        .route("/reports/{id}/unresolve", post(api::unresolve_report))
        // Open space registry
        .route("/open-spaces", get(api::get_view::<OpenSpace>))
        .route("/open-spaces/view", put(api::update_view::<OpenSpace>))
        .route("/open-spaces/reload", post(api::reload_view::<OpenSpace>))
        .route("/open-spaces/{id}", get(api::get_record::<OpenSpace>))
        // Notification inbox
        .route("/notifications", get(api::list_notifications))
        .route("/notifications/read-all", post(api::mark_all_notifications_read))
        .route("/notifications/{id}/read", post(api::mark_notification_read));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
