//! Registry-backed extractors.

use std::ops::Deref;
use std::sync::Arc;

use super::FromContext;
use crate::binder::TypeKey;
use crate::context::Context;
use crate::error::BindError;

/// A value produced by the binder registered for `T`.
///
/// # Example
///
/// ```rust,ignore
/// registry.func(|ctx: &Context| ctx.param("param").unwrap_or_default().to_string());
///
/// async fn show(Dep(param): Dep<String>) -> String {
///     format!("param is: {param}")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dep<T>(pub T);

impl<T> Dep<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Dep<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Send + 'static> FromContext for Dep<T> {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        ctx.resolve::<T>().map(Dep)
    }

    fn dependency() -> Option<TypeKey> {
        Some(TypeKey::of::<T>())
    }
}

/// A shared service registered with `Binder::service`.
///
/// `S` is usually a trait object, so handlers depend on the interface and
/// not the implementation:
///
/// ```rust,ignore
/// registry.service::<dyn Greeter>(Arc::new(English));
///
/// async fn greet(Service(greeter): Service<dyn Greeter>) -> String {
///     greeter.greet("world")
/// }
/// ```
pub struct Service<S: ?Sized>(pub Arc<S>);

impl<S: ?Sized> Clone for Service<S> {
    fn clone(&self) -> Self {
        Service(self.0.clone())
    }
}

impl<S: ?Sized> Deref for Service<S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: ?Sized + Send + Sync + 'static> FromContext for Service<S> {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        ctx.resolve::<Arc<S>>().map(Service)
    }

    fn dependency() -> Option<TypeKey> {
        Some(TypeKey::of::<Arc<S>>())
    }
}
