use std::cell::Cell;
use std::str::FromStr;
use std::sync::Arc;

use crate::binder::TypeKey;
use crate::error::BindError;
use crate::http_helpers::{Body, Extensions, HttpRequest};
use crate::registry::BinderSet;

/// Binders resolving other binders may nest this deep before resolution is
/// treated as a cycle.
pub const MAX_RESOLVE_DEPTH: usize = 32;

/// Per-request resolution scope.
///
/// A `Context` is built for every request an [`AdaptedHandler`] serves. It
/// owns the request and the binders captured when the handler was adapted;
/// extractors and dynamic binders read from it, and [`Context::resolve`]
/// produces any bound type.
///
/// [`AdaptedHandler`]: crate::AdaptedHandler
pub struct Context {
    request: Arc<HttpRequest>,
    binders: Arc<BinderSet>,
    handler: &'static str,
    depth: Cell<usize>,
}

impl Context {
    pub fn new(request: HttpRequest, binders: Arc<BinderSet>) -> Self {
        Self {
            request: Arc::new(request),
            binders,
            handler: "<context>",
            depth: Cell::new(0),
        }
    }

    pub(crate) fn for_handler(mut self, handler: &'static str) -> Self {
        self.handler = handler;
        self
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub(crate) fn shared_request(&self) -> Arc<HttpRequest> {
        self.request.clone()
    }

    pub fn method(&self) -> &str {
        &self.request.method
    }

    pub fn uri(&self) -> &str {
        &self.request.uri
    }

    pub fn body(&self) -> &Body {
        &self.request.body
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.request.path_param(name)
    }

    /// Parse a path parameter.
    pub fn param_as<T>(&self, name: &str) -> Result<T, BindError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self
            .param(name)
            .ok_or_else(|| BindError::ParamNotFound(name.to_string()))?;

        value.parse::<T>().map_err(|e| BindError::ParamParse {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.request.query_param(name)
    }

    /// Header lookup, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.request.header_ignore_case(name)
    }

    pub fn extensions(&self) -> &Extensions {
        &self.request.extensions
    }

    pub fn is_bound<T: 'static>(&self) -> bool {
        self.binders.contains(&TypeKey::of::<T>())
    }

    /// Produce a value of a bound type.
    ///
    /// Static binders hand out a clone of their value; dynamic binders run
    /// against this context and may resolve further types themselves.
    pub fn resolve<T: Send + 'static>(&self) -> Result<T, BindError> {
        let key = TypeKey::of::<T>();
        let binder = self
            .binders
            .get(&key)
            .ok_or(BindError::MissingDependency {
                type_name: key.name(),
                handler: self.handler,
            })?;

        let depth = self.depth.get();
        if depth >= MAX_RESOLVE_DEPTH {
            return Err(BindError::ResolutionDepth {
                type_name: key.name(),
            });
        }

        self.depth.set(depth + 1);
        let resolved = binder.produce::<T>(self);
        self.depth.set(depth);
        resolved
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("method", &self.request.method)
            .field("uri", &self.request.uri)
            .field("handler", &self.handler)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::Binder;
    use crate::extractors::Dep;
    use crate::http_helpers::HttpMethod;
    use crate::registry::Registry;

    #[derive(Clone, Debug, PartialEq)]
    struct Tenant(String);

    #[derive(Debug, PartialEq)]
    struct Greeting(String);

    fn request() -> HttpRequest {
        HttpRequest::new(HttpMethod::GET, "/orders/17?expand=items")
            .with_path_param("id", "17")
            .with_path_param("slug", "abc")
            .with_query_param("expand", "items")
            .with_header("X-Tenant", "acme")
    }

    #[test]
    fn test_request_accessors() {
        let ctx = Context::new(request(), Registry::new().snapshot());

        assert_eq!(ctx.method(), "GET");
        assert_eq!(ctx.param("id"), Some("17"));
        assert_eq!(ctx.query("expand"), Some("items"));
        assert_eq!(ctx.header("x-tenant"), Some("acme"));
        assert!(ctx.extensions().is_empty());
    }

    #[test]
    fn test_param_as_errors() {
        let ctx = Context::new(request(), Registry::new().snapshot());

        assert_eq!(ctx.param_as::<u32>("id").unwrap(), 17);
        assert_eq!(
            ctx.param_as::<u32>("missing").unwrap_err(),
            BindError::ParamNotFound("missing".to_string())
        );
        assert!(matches!(
            ctx.param_as::<u32>("slug").unwrap_err(),
            BindError::ParamParse { .. }
        ));
    }

    #[test]
    fn test_dynamic_binder_resolves_other_binders() {
        let mut registry = Registry::new();
        registry
            .func(|ctx: &Context| Tenant(ctx.header("x-tenant").unwrap_or("none").to_string()))
            .func(|ctx: &Context| {
                let tenant = ctx.resolve::<Tenant>().map(|t| t.0).unwrap_or_default();
                Greeting(format!("hello {tenant}"))
            });

        let ctx = Context::new(request(), registry.snapshot());
        assert_eq!(
            ctx.resolve::<Greeting>().unwrap(),
            Greeting("hello acme".to_string())
        );
    }

    #[test]
    fn test_unbound_type_is_missing_dependency() {
        let ctx = Context::new(request(), Registry::new().snapshot());

        assert!(!ctx.is_bound::<Tenant>());
        assert!(matches!(
            ctx.resolve::<Tenant>(),
            Err(BindError::MissingDependency { .. })
        ));
    }

    #[test]
    fn test_binder_cycle_hits_depth_limit() {
        let mut registry = Registry::new();
        registry.bind(Binder::try_func(|ctx: &Context| ctx.resolve::<Tenant>()));

        let ctx = Context::new(request(), registry.snapshot());
        let err = ctx.resolve::<Tenant>().unwrap_err();

        assert_eq!(
            err,
            BindError::ResolutionDepth {
                type_name: std::any::type_name::<Tenant>()
            }
        );
        assert_eq!(err.status(), 500);
        assert!(err.to_string().len() < 200, "{err}");
    }

    #[tokio::test]
    async fn test_binder_cycle_answers_server_error() {
        let mut registry = Registry::new();
        registry.try_func(|ctx: &Context| ctx.resolve::<Tenant>());
        let handler = registry
            .handler(|Dep(tenant): Dep<Tenant>| async move { tenant.0 })
            .unwrap();

        let res = handler.handle(request()).await;
        assert_eq!(res.status, 500);
    }
}
