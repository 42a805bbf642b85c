//! # toni-mvc-axum
//!
//! Axum adapter for `toni-mvc`.
//!
//! Mounts [`AdaptedHandler`](toni_mvc::AdaptedHandler)s on an axum `Router`
//! and serves them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toni_mvc::{Context, HttpAdapter, HttpMethod, Registry};
//! use toni_mvc::extractors::Dep;
//! use toni_mvc_axum::{AxumAdapter, ServerConfig};
//!
//! async fn consume_param(Dep(param): Dep<String>) -> String {
//!     format!("param is: {param}")
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut registry = Registry::new();
//!     registry.func(|ctx: &Context| ctx.param("param").unwrap_or_default().to_string());
//!
//!     let mut adapter = AxumAdapter::new();
//!     adapter.add_route("/param/{param}", HttpMethod::GET, registry.handler(consume_param)?);
//!
//!     adapter.listen_with(&ServerConfig::from_env()?).await
//! }
//! ```

mod axum_adapter;
mod axum_route_adapter;
mod config;

pub use axum_adapter::AxumAdapter;
pub use axum_route_adapter::AxumRouteAdapter;
pub use config::{ConfigError, ServerConfig};

// Re-export commonly used types from toni-mvc
pub use toni_mvc::{HttpAdapter, RouteAdapter};
