#![recursion_limit = "256"]

mod config;
mod redirect;
mod security;

use app::{component, shell};
use axum::{Router, http::StatusCode, middleware, response::Json, routing::get};
use config::ServerConfig;
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::security_headers;
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "creators-site",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn router(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(component);

    let mut app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(shell));

    if config.canonical_redirect {
        app = app.layer(middleware::from_fn(redirect_www));
    }

    app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(security_headers)),
    )
    .layer(CompressionLayer::new().compress_when(
        NotForContentType::IMAGES.and(SizeAbove::new(1024)),
    ))
    .with_state(leptos_options)
}

#[tokio::main]
async fn main() {
    let env_result = dotenv();
    let config = ServerConfig::from_env();

    let tracing_level = config
        .as_ref()
        .map_or_else(|_| ServerConfig::default().log_level, |c| c.log_level);
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            logging::error!("Invalid server configuration: {err}");
            return;
        }
    };

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        canonical_redirect = config.canonical_redirect,
        "starting server"
    );
    let app = router(leptos_options, &config);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {err:?}"),
    }
}
