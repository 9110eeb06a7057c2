//! Family Registry API Server
//!
//! A record-management backend for parents, students, families and family
//! members, persisted in MongoDB and exposed as CRUD endpoints behind HTTP
//! Basic authentication. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use mongodb::Client;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    MongoFamilyMemberRepository, MongoFamilyRepository, MongoParentRepository,
    MongoStudentRepository,
};
use app::{FamilyMemberService, FamilyService, ParentService, StudentService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub parent_service: Arc<ParentService<MongoParentRepository>>,
    pub student_service: Arc<StudentService<MongoStudentRepository>>,
    pub family_service: Arc<FamilyService<MongoFamilyRepository, MongoParentRepository>>,
    pub family_member_service:
        Arc<FamilyMemberService<MongoFamilyMemberRepository, MongoFamilyRepository>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    // Every /api route requires the shared Basic credential
    let api_routes = Router::new()
        .route(
            "/api/parents",
            post(handlers::create_parent).get(handlers::list_parents),
        )
        .route(
            "/api/parents/:parent_id",
            get(handlers::get_parent)
                .put(handlers::update_parent)
                .delete(handlers::delete_parent),
        )
        .route(
            "/api/students",
            post(handlers::create_student).get(handlers::list_students),
        )
        .route(
            "/api/students/:student_id",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .route(
            "/api/families",
            post(handlers::create_family).get(handlers::list_families),
        )
        .route(
            "/api/families/:family_id",
            get(handlers::get_family)
                .put(handlers::update_family)
                .delete(handlers::delete_family),
        )
        .route(
            "/api/familyMembers",
            post(handlers::create_family_member).get(handlers::list_family_members),
        )
        .route(
            "/api/familyMembers/:family_member_id",
            get(handlers::get_family_member)
                .put(handlers::update_family_member)
                .delete(handlers::delete_family_member),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .merge(api_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,family_registry_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting family registry API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to MongoDB (the driver connects lazily on first operation)
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let db = client.database(&config.mongodb_database);
    tracing::info!(database = %config.mongodb_database, "Document store ready");

    // Create adapters
    let parent_repo = Arc::new(MongoParentRepository::new(&db));
    let student_repo = Arc::new(MongoStudentRepository::new(&db));
    let family_repo = Arc::new(MongoFamilyRepository::new(&db));
    let family_member_repo = Arc::new(MongoFamilyMemberRepository::new(&db));

    // Create application services
    let parent_service = Arc::new(ParentService::new(parent_repo.clone()));
    let student_service = Arc::new(StudentService::new(student_repo));
    let family_service = Arc::new(FamilyService::new(family_repo.clone(), parent_repo));
    let family_member_service = Arc::new(FamilyMemberService::new(
        family_member_repo,
        family_repo,
    ));

    // Create app state
    let state = AppState {
        parent_service,
        student_service,
        family_service,
        family_member_service,
        config: config.clone(),
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
