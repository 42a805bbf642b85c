//! Read-only access to the whole request.
//!
//! `Request` is the escape hatch for handlers that need raw request data
//! next to their bound dependencies.
//!
//! ```rust,ignore
//! async fn whoami(req: Request, Dep(user): Dep<User>) -> String {
//!     format!("{} {} as {}", req.method(), req.uri(), user.username)
//! }
//! ```
//!
//! Typed values put into the request's extensions by the adapter are
//! available as well:
//!
//! ```rust,ignore
//! async fn trace(req: Request) -> String {
//!     match req.extensions().get::<TraceId>() {
//!         Some(id) => format!("trace {}", id.0),
//!         None => "untraced".to_string(),
//!     }
//! }
//! ```

use std::sync::Arc;

use super::FromContext;
use crate::context::Context;
use crate::error::BindError;
use crate::http_helpers::{Body, Extensions, HttpRequest};

/// Shared view of the current request.
///
/// Cloning is cheap: the request lives behind an `Arc` owned by the
/// [`Context`].
#[derive(Clone, Debug)]
pub struct Request {
    inner: Arc<HttpRequest>,
}

impl Request {
    /// Wrap a request outside of a handler, e.g. in tests.
    pub fn from_request(req: HttpRequest) -> Self {
        Self {
            inner: Arc::new(req),
        }
    }

    pub fn method(&self) -> &str {
        &self.inner.method
    }

    pub fn uri(&self) -> &str {
        &self.inner.uri
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.header_ignore_case(name)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.inner.headers
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.inner.path_param(name)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.inner.query_param(name)
    }

    pub fn body(&self) -> &Body {
        &self.inner.body
    }

    pub fn extensions(&self) -> &Extensions {
        &self.inner.extensions
    }

    pub fn inner(&self) -> &HttpRequest {
        &self.inner
    }
}

impl FromContext for Request {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        Ok(Self {
            inner: ctx.shared_request(),
        })
    }
}
