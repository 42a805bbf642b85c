use anyhow::{Context, Result};
use axum::{
    Router,
    body::Body,
    extract::rejection::PathRejection,
    http::{Request, Response, StatusCode},
    response::IntoResponse,
    routing::{connect, delete, get, head, options, patch, post, put, trace},
};
use tokio::net::TcpListener;
use toni_mvc::{AdaptedHandler, HttpAdapter, HttpMethod, RouteAdapter};
use tracing::{debug, error, info, warn};

use crate::{AxumRouteAdapter, ServerConfig};

#[derive(Clone)]
pub struct AxumAdapter {
    instance: Router,
    routes: Vec<(HttpMethod, String)>,
}

impl HttpAdapter for AxumAdapter {
    fn new() -> Self {
        Self {
            instance: Router::new(),
            routes: Vec::new(),
        }
    }

    fn add_route(&mut self, path: &str, method: HttpMethod, handler: AdaptedHandler) {
        if self.has_route(method, path) {
            warn!(%method, path, handler = handler.name(), "Route already registered, ignoring");
            return;
        }

        let handler_name = handler.name();
        let route_handler = move |req: Request<Body>| {
            let handler = handler.clone();
            async move {
                match AxumRouteAdapter::handle_request(req, handler).await {
                    Ok(response) => response,
                    Err(err) => match err.downcast::<PathRejection>() {
                        Ok(rejection) => {
                            debug!(error = %rejection, "Rejected path parameters");
                            rejection.into_response()
                        }
                        Err(err) => {
                            error!(error = %err, "Failed to handle request");
                            internal_error()
                        }
                    },
                }
            }
        };

        let router = std::mem::take(&mut self.instance);
        self.instance = match method {
            HttpMethod::GET => router.route(path, get(route_handler)),
            HttpMethod::POST => router.route(path, post(route_handler)),
            HttpMethod::PUT => router.route(path, put(route_handler)),
            HttpMethod::DELETE => router.route(path, delete(route_handler)),
            HttpMethod::HEAD => router.route(path, head(route_handler)),
            HttpMethod::PATCH => router.route(path, patch(route_handler)),
            HttpMethod::OPTIONS => router.route(path, options(route_handler)),
            HttpMethod::TRACE => router.route(path, trace(route_handler)),
            HttpMethod::CONNECT => router.route(path, connect(route_handler)),
        };
        self.routes.push((method, path.to_string()));

        info!(%method, path, handler = handler_name, "Route mounted");
    }

    async fn listen(self, port: u16, hostname: &str) -> Result<()> {
        let addr = format!("{}:{}", hostname, port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        self.serve(listener).await
    }
}

impl AxumAdapter {
    pub fn has_route(&self, method: HttpMethod, path: &str) -> bool {
        self.routes.iter().any(|(m, p)| *m == method && p == path)
    }

    pub fn routes(&self) -> &[(HttpMethod, String)] {
        &self.routes
    }

    /// The underlying router with every mounted route.
    pub fn router(&self) -> Router {
        self.instance.clone()
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        if let Ok(addr) = listener.local_addr() {
            info!(%addr, routes = self.routes.len(), "Listening");
        }

        axum::serve(listener, self.instance)
            .await
            .context("Axum server encountered an error")?;
        Ok(())
    }

    pub async fn listen_with(self, config: &ServerConfig) -> Result<()> {
        self.listen(config.port, &config.host).await
    }
}

impl Default for AxumAdapter {
    fn default() -> Self {
        <Self as HttpAdapter>::new()
    }
}

fn internal_error() -> Response<Body> {
    let mut response = Response::new(Body::from("Internal Server Error"));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
