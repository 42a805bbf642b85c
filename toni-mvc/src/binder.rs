//! Binders: typed providers of handler dependencies.
//!
//! A [`Binder`] supplies values of exactly one Rust type. Static binders
//! (`value`, `service`) hold a value created up front and clone it for every
//! consumer; dynamic binders (`func`, `try_func`) compute a fresh value from
//! the per-request [`Context`].
//!
//! ```
//! use std::sync::Arc;
//! use toni_mvc::{Binder, BindingScope};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self, name: &str) -> String {
//!         format!("hello {name}")
//!     }
//! }
//!
//! let binders = [
//!     Binder::value(42u32),
//!     Binder::service::<dyn Greeter>(Arc::new(English)),
//!     Binder::func(|ctx| ctx.param("name").unwrap_or_default().to_string()),
//! ];
//!
//! assert_eq!(binders[1].scope(), BindingScope::Singleton);
//! assert_eq!(binders[2].scope(), BindingScope::Request);
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::binding_scope::BindingScope;
use crate::context::Context;
use crate::error::BindError;

type Produced = Result<Box<dyn Any + Send>, BindError>;
type ProduceFn = dyn Fn(&Context) -> Produced + Send + Sync;

/// Identity of a bindable type.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Clone)]
pub struct Binder {
    key: TypeKey,
    scope: BindingScope,
    produce: Arc<ProduceFn>,
}

impl Binder {
    /// Bind a value that is cloned into every handler that asks for `T`.
    pub fn value<T>(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self {
            key: TypeKey::of::<T>(),
            scope: BindingScope::Singleton,
            produce: Arc::new(move |_ctx: &Context| -> Produced {
                Ok(Box::new(value.clone()))
            }),
        }
    }

    /// Bind a shared service. Handlers receive it as `Arc<S>`, so `S` may be
    /// a trait object.
    pub fn service<S>(service: Arc<S>) -> Self
    where
        S: ?Sized + Send + Sync + 'static,
    {
        Self::value(service)
    }

    /// Bind a function computing `T` from each request.
    pub fn func<T, F>(f: F) -> Self
    where
        T: Send + 'static,
        F: Fn(&Context) -> T + Send + Sync + 'static,
    {
        Self {
            key: TypeKey::of::<T>(),
            scope: BindingScope::Request,
            produce: Arc::new(move |ctx: &Context| -> Produced { Ok(Box::new(f(ctx))) }),
        }
    }

    /// Like [`Binder::func`], but the function may reject the request.
    ///
    /// A [`BindError`] returned by the function, e.g. from a nested
    /// [`Context::resolve`], is passed through unchanged so it keeps its
    /// status. Any other error becomes [`BindError::Binder`].
    pub fn try_func<T, E, F>(f: F) -> Self
    where
        T: Send + 'static,
        E: fmt::Display + 'static,
        F: Fn(&Context) -> Result<T, E> + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        Self {
            key: TypeKey::of::<T>(),
            scope: BindingScope::Request,
            produce: Arc::new(move |ctx: &Context| -> Produced {
                match f(ctx) {
                    Ok(value) => Ok(Box::new(value)),
                    Err(err) => {
                        let any: &dyn Any = &err;
                        match any.downcast_ref::<BindError>() {
                            Some(bind_err) => Err(bind_err.clone()),
                            None => Err(BindError::Binder {
                                type_name,
                                message: err.to_string(),
                            }),
                        }
                    }
                }
            }),
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn type_name(&self) -> &'static str {
        self.key.name
    }

    pub fn scope(&self) -> BindingScope {
        self.scope
    }

    pub(crate) fn produce<T: 'static>(&self, ctx: &Context) -> Result<T, BindError> {
        let value = (self.produce)(ctx)?;
        value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| BindError::Binder {
                type_name: std::any::type_name::<T>(),
                message: format!("binder produced a value of another type than `{}`", self.key.name),
            })
    }
}

impl fmt::Debug for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("type", &self.key)
            .field("scope", &self.scope)
            .finish()
    }
}
