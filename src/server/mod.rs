//! Read-only JSON API over the post store

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::{FeatureFlags, SiteConfig};
use crate::content::{PostStore, DEFAULT_LIMIT};
use crate::site;
use crate::Folio;

/// Server state, shared read-only by every request
pub struct AppState {
    pub store: PostStore,
    pub config: SiteConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

impl LimitQuery {
    fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[derive(Serialize)]
struct SiteInfo<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    features: FeatureFlags,
}

/// Build the API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/*slug", get(get_post))
        .route("/api/latest", get(latest_posts))
        .route("/api/related/*slug", get(related_posts))
        .route("/api/nav", get(nav_links))
        .route("/api/config", get(site_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the site's posts and serve the API
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let store = folio.load_posts()?;
    let state = Arc::new(AppState {
        store,
        config: folio.config.clone(),
    });

    if !folio.blog_enabled() {
        tracing::warn!("Blog is disabled; blog endpoints will return 404");
    }

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

fn blog_disabled() -> Response {
    not_found("blog is disabled")
}

/// GET /api/posts
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Response {
    if !state.config.features.enable_blog {
        return blog_disabled();
    }
    Json(state.store.published()).into_response()
}

/// GET /api/latest?limit=N
pub async fn latest_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Response {
    if !state.config.features.enable_blog {
        return blog_disabled();
    }
    Json(state.store.latest(query.limit())).into_response()
}

/// GET /api/posts/*slug
pub async fn get_post(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    if !state.config.features.enable_blog {
        return blog_disabled();
    }
    match state.store.get(&slug) {
        Some(post) => Json(post).into_response(),
        None => {
            tracing::debug!("No post with slug {:?}", slug);
            not_found("post not found")
        }
    }
}

/// GET /api/related/*slug?limit=N
pub async fn related_posts(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Response {
    if !state.config.features.enable_blog {
        return blog_disabled();
    }
    Json(state.store.related(&slug, query.limit())).into_response()
}

/// GET /api/nav
pub async fn nav_links(State(state): State<Arc<AppState>>) -> Response {
    Json(site::links(&state.config.features)).into_response()
}

/// GET /api/config
pub async fn site_info(State(state): State<Arc<AppState>>) -> Response {
    let config = &state.config;
    Json(SiteInfo {
        title: &config.title,
        description: &config.description,
        url: &config.url,
        features: config.features,
    })
    .into_response()
}
