use std::fmt;
use std::sync::Arc;

use super::{BoxFuture, Handler};
use crate::binder::TypeKey;
use crate::context::Context;
use crate::http_helpers::{HttpRequest, HttpResponse};
use crate::registry::BinderSet;

type ErasedCall = dyn Fn(Context) -> BoxFuture<'static, HttpResponse> + Send + Sync;

/// A typed function adapted into a request handler.
///
/// Produced by [`Registry::handler`]. Cloning is cheap; every clone shares
/// the same function and the binders captured at adaptation time.
///
/// [`Registry::handler`]: crate::Registry::handler
#[derive(Clone)]
pub struct AdaptedHandler {
    name: &'static str,
    binders: Arc<BinderSet>,
    dependencies: Arc<[TypeKey]>,
    call: Arc<ErasedCall>,
}

impl AdaptedHandler {
    pub(crate) fn new<F, T>(f: F, binders: Arc<BinderSet>, dependencies: Vec<TypeKey>) -> Self
    where
        F: Handler<T>,
        T: 'static,
    {
        let call = move |ctx: Context| -> BoxFuture<'static, HttpResponse> {
            Box::pin(<F as Handler<T>>::call(f.clone(), ctx))
        };

        Self {
            name: std::any::type_name::<F>(),
            binders,
            dependencies: dependencies.into(),
            call: Arc::new(call),
        }
    }

    /// Type name of the adapted function.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dependencies(&self) -> &[TypeKey] {
        &self.dependencies
    }

    pub fn binders(&self) -> &BinderSet {
        &self.binders
    }

    /// Serve one request.
    pub fn handle(&self, req: HttpRequest) -> BoxFuture<'static, HttpResponse> {
        let ctx = Context::new(req, self.binders.clone()).for_handler(self.name);
        (self.call)(ctx)
    }
}

impl fmt::Debug for AdaptedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptedHandler")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .finish()
    }
}
