//! Router and listener.

use super::handlers::{handle_index, handle_result};
use crate::config::{self, ServerConfig};
use axum::routing::{get, post};
use axum::Router;
use std::error::Error;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;

const EMBEDDED_LAYOUT: &str = include_str!("../../templates/layout.html");
const LAYOUT_FILE: &str = "layout.html";

/// State owned by the running server and shared with every handler.
#[derive(Debug, Clone)]
pub struct ServerContext {
    page: String,
}

impl ServerContext {
    pub fn new(page: String) -> ServerContext {
        ServerContext { page }
    }

    /// Context serving the page compiled into the binary.
    pub fn embedded() -> ServerContext {
        ServerContext::new(EMBEDDED_LAYOUT.to_string())
    }

    /// Load `layout.html` from `template_dir`, or the embedded page if the
    /// file does not exist.
    pub fn load(template_dir: &str) -> Result<ServerContext, Box<dyn Error>> {
        let path = Path::new(template_dir).join(LAYOUT_FILE);
        match std::fs::read_to_string(&path) {
            Ok(page) => {
                log::info!("Loaded template {}", path.display());
                Ok(ServerContext::new(page))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("Template {} not found, using embedded page", path.display());
                Ok(ServerContext::embedded())
            }
            Err(e) => Err(format!("Error reading template {}: {e}", path.display()).into()),
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }
}

/// Build the router: `GET /` form page, `POST /result` calculation.
pub fn create_app(ctx: ServerContext) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/result", post(handle_result))
        .layer(TimeoutLayer::new(config::REQUEST_TIMEOUT))
        .with_state(Arc::new(ctx))
}

/// Listen on `cfg.addr()` until Ctrl-C, then drain and stop.
pub async fn serve(cfg: &ServerConfig) -> Result<(), Box<dyn Error>> {
    let ctx = ServerContext::load(&cfg.template_dir)?;
    let app = create_app(ctx);

    let listener = tokio::net::TcpListener::bind(cfg.addr())
        .await
        .map_err(|e| format!("Error binding {}: {e}", cfg.addr()))?;
    log::info!("Listening on {}", cfg.addr());
    println!("Visit http://{}", cfg.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Got signal: interrupt"),
        Err(e) => {
            // no signal handler means no way to ask for shutdown; keep serving
            log::error!("Error waiting for interrupt: {e}");
            std::future::pending::<()>().await;
        }
    }
    tokio::time::sleep(config::SHUTDOWN_GRACE).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_page_has_form() {
        let ctx = ServerContext::embedded();
        assert!(ctx.page().contains(r#"name="addr""#));
        assert!(ctx.page().contains(r#"action="/result""#));
    }

    #[test]
    fn test_load_missing_dir_falls_back() {
        let ctx = ServerContext::load("does/not/exist").unwrap();
        assert_eq!(ctx.page(), EMBEDDED_LAYOUT);
    }

    #[test]
    fn test_load_repo_templates() {
        let ctx = ServerContext::load("templates").unwrap();
        assert!(ctx.page().contains("subnetcalc"));
    }
}
