//! Typed handlers.
//!
//! [`Handler`] is implemented for async functions and closures whose
//! parameters all implement [`FromContext`] and whose output implements
//! [`IntoResponse`]. [`Registry::handler`] turns such a function into an
//! [`AdaptedHandler`], the type-erased form adapters mount on routes.
//!
//! ```rust,ignore
//! async fn no_params() -> &'static str { "ok" }
//! async fn one_param(Dep(user): Dep<User>) -> Json<User> { Json(user) }
//! async fn two_params(req: Request, Service(repo): Service<dyn Repo>) -> String { .. }
//! ```
//!
//! [`Registry::handler`]: crate::Registry::handler

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::binder::TypeKey;
use crate::context::Context;
use crate::extractors::FromContext;
use crate::http_helpers::{HttpResponse, IntoResponse};

mod adapted;
pub use adapted::AdaptedHandler;

/// A type alias for a boxed, pinned future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait Handler<T>: Clone + Send + Sync + 'static {
    type Future: Future<Output = HttpResponse> + Send + 'static;

    /// Extract every argument from `ctx` and run the function. The first
    /// argument that fails to extract becomes the response.
    fn call(self, ctx: Context) -> Self::Future;

    /// Registry bindings the arguments need, in parameter order.
    fn dependencies() -> Vec<TypeKey>;
}

macro_rules! impl_handler {
    (
        $($ty:ident),*
    ) => {
        #[allow(non_snake_case, unused_mut)]
        impl<F, Fut, R, $($ty,)*> Handler<($($ty,)*)> for F
        where
            F: FnOnce($($ty,)*) -> Fut + Clone + Send + Sync + 'static,
            Fut: Future<Output = R> + Send + 'static,
            R: IntoResponse,
            $( $ty: FromContext + Send + 'static, )*
        {
            type Future = BoxFuture<'static, HttpResponse>;

            fn call(self, ctx: Context) -> Self::Future {
                Box::pin(async move {
                    $(
                        let $ty = match $ty::from_context(&ctx) {
                            Ok(value) => value,
                            Err(err) => {
                                debug!(
                                    handler = std::any::type_name::<F>(),
                                    argument = std::any::type_name::<$ty>(),
                                    error = %err,
                                    "Handler argument rejected"
                                );
                                return err.into_response();
                            }
                        };
                    )*
                    drop(ctx);

                    (self)($($ty,)*).await.into_response()
                })
            }

            fn dependencies() -> Vec<TypeKey> {
                let mut dependencies = Vec::new();
                $( dependencies.extend($ty::dependency()); )*
                dependencies
            }
        }
    };
}

impl_handler!();
impl_handler!(T1);
impl_handler!(T1, T2);
impl_handler!(T1, T2, T3);
impl_handler!(T1, T2, T3, T4);
impl_handler!(T1, T2, T3, T4, T5);
impl_handler!(T1, T2, T3, T4, T5, T6);
impl_handler!(T1, T2, T3, T4, T5, T6, T7);
impl_handler!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_handler!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
