//! # toni-mvc
//!
//! Dependency binding and typed handler adaptation.
//!
//! A [`Registry`] collects [`Binder`]s: static values, shared services and
//! per-request functions. [`Registry::handler`] turns an async function whose
//! parameters are [`extractors`] into an [`AdaptedHandler`] that resolves
//! every parameter before calling it. Adapters such as `toni-mvc-axum` mount
//! adapted handlers on routes.
//!
//! ```
//! use std::sync::Arc;
//! use toni_mvc::{Binder, Context, Registry};
//! use toni_mvc::extractors::{Dep, Service};
//!
//! trait Greeter: Send + Sync {
//!     fn say(&self, what: &str) -> String;
//! }
//!
//! struct Prefixed(&'static str);
//!
//! impl Greeter for Prefixed {
//!     fn say(&self, what: &str) -> String {
//!         format!("{} {}", self.0, what)
//!     }
//! }
//!
//! async fn consume_service(Service(greeter): Service<dyn Greeter>) -> String {
//!     greeter.say("something")
//! }
//!
//! async fn consume_param(Dep(param): Dep<String>) -> String {
//!     format!("param is: {param}")
//! }
//!
//! let mut registry = Registry::new();
//! registry.register([
//!     Binder::service::<dyn Greeter>(Arc::new(Prefixed("say"))),
//!     Binder::func(|ctx: &Context| ctx.param("param").unwrap_or_default().to_string()),
//! ]);
//!
//! let service_handler = registry.handler(consume_service).unwrap();
//! let param_handler = registry.handler(consume_param).unwrap();
//! # let _ = (service_handler, param_handler);
//! ```

pub mod adapter;
mod binder;
mod binding_scope;
mod context;
mod error;
pub mod extractors;
pub mod handler;
pub mod http_helpers;
mod registry;

pub use adapter::{HttpAdapter, RouteAdapter};
pub use binder::{Binder, TypeKey};
pub use binding_scope::BindingScope;
pub use context::{Context, MAX_RESOLVE_DEPTH};
pub use error::BindError;
pub use handler::{AdaptedHandler, BoxFuture, Handler};
pub use http_helpers::{Body, HttpMethod, HttpRequest, HttpResponse, IntoResponse};
pub use registry::{BinderSet, Registry};
