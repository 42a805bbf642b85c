use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::binder::{Binder, TypeKey};
use crate::context::Context;
use crate::error::BindError;
use crate::handler::{AdaptedHandler, Handler};

/// The binders visible to a set of adapted handlers, keyed by bound type.
#[derive(Clone, Default)]
pub struct BinderSet {
    binders: FxHashMap<TypeKey, Binder>,
}

impl BinderSet {
    pub fn get(&self, key: &TypeKey) -> Option<&Binder> {
        self.binders.get(key)
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.binders.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.binders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binder> {
        self.binders.values()
    }

    fn insert(&mut self, binder: Binder) -> Option<Binder> {
        self.binders.insert(binder.key(), binder)
    }
}

impl fmt::Debug for BinderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.binders.keys()).finish()
    }
}

/// A binder registry.
///
/// Binders registered here are matched by type against the parameters of the
/// functions passed to [`Registry::handler`].
///
/// ```
/// use toni_mvc::{Binder, Context, Registry, extractors::Dep};
///
/// #[derive(Clone)]
/// struct Prefix(&'static str);
///
/// async fn greet(Dep(prefix): Dep<Prefix>, Dep(name): Dep<String>) -> String {
///     format!("{} {}", prefix.0, name)
/// }
///
/// let mut registry = Registry::new();
/// registry.register([
///     Binder::value(Prefix("hello")),
///     Binder::func(|ctx: &Context| ctx.param("name").unwrap_or("world").to_string()),
/// ]);
///
/// let handler = registry.handler(greet).unwrap();
/// assert_eq!(handler.dependencies().len(), 2);
/// ```
#[derive(Clone, Default, Debug)]
pub struct Registry {
    binders: BinderSet,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register binders in order. A binder for an already bound type
    /// replaces the earlier one.
    pub fn register<I>(&mut self, binders: I) -> &mut Self
    where
        I: IntoIterator<Item = Binder>,
    {
        for binder in binders {
            self.bind(binder);
        }
        self
    }

    pub fn bind(&mut self, binder: Binder) -> &mut Self {
        let type_name = binder.type_name();
        let scope = binder.scope();
        if let Some(previous) = self.binders.insert(binder) {
            warn!(
                type_name,
                previous_scope = %previous.scope(),
                scope = %scope,
                "Binder replaced an earlier registration"
            );
        } else {
            debug!(type_name, scope = %scope, "Binder registered");
        }
        self
    }

    pub fn value<T>(&mut self, value: T) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.bind(Binder::value(value))
    }

    pub fn service<S>(&mut self, service: Arc<S>) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.bind(Binder::service(service))
    }

    pub fn func<T, F>(&mut self, f: F) -> &mut Self
    where
        T: Send + 'static,
        F: Fn(&Context) -> T + Send + Sync + 'static,
    {
        self.bind(Binder::func(f))
    }

    pub fn try_func<T, E, F>(&mut self, f: F) -> &mut Self
    where
        T: Send + 'static,
        E: fmt::Display + 'static,
        F: Fn(&Context) -> Result<T, E> + Send + Sync + 'static,
    {
        self.bind(Binder::try_func(f))
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.binders.contains(&TypeKey::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.binders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }

    /// Names of the bound types, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.binders.iter().map(Binder::type_name).collect();
        names.sort_unstable();
        names
    }

    /// A registry starting out with this registry's binders. The two are
    /// independent afterwards.
    pub fn child(&self) -> Self {
        self.clone()
    }

    /// Freeze the current binders for use by a handler or a [`Context`].
    pub fn snapshot(&self) -> Arc<BinderSet> {
        Arc::new(self.binders.clone())
    }

    /// Adapt `f` into a request handler.
    ///
    /// Every registry-backed parameter of `f` must have a binder at this
    /// point. The handler keeps the binders registered so far; later
    /// registrations are not visible to it.
    pub fn handler<F, T>(&self, f: F) -> Result<AdaptedHandler, BindError>
    where
        F: Handler<T>,
        T: 'static,
    {
        let handler_name = std::any::type_name::<F>();
        let dependencies = F::dependencies();

        if let Some(missing) = dependencies.iter().find(|key| !self.binders.contains(key)) {
            return Err(BindError::MissingDependency {
                type_name: missing.name(),
                handler: handler_name,
            });
        }

        debug!(
            handler = handler_name,
            dependencies = dependencies.len(),
            "Handler adapted"
        );

        Ok(AdaptedHandler::new(f, self.snapshot(), dependencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{Dep, Service};
    use crate::http_helpers::{Body, HttpMethod, HttpRequest};

    trait Clock: Send + Sync {
        fn now(&self) -> u64;
    }

    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now(&self) -> u64 {
            1_700_000_000
        }
    }

    #[derive(Clone)]
    struct Version(&'static str);

    async fn show_version(Dep(version): Dep<Version>) -> String {
        version.0.to_string()
    }

    async fn show_time(Service(clock): Service<dyn Clock>) -> String {
        clock.now().to_string()
    }

    fn get(uri: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::GET, uri)
    }

    #[test]
    fn test_register_many() {
        let mut registry = Registry::new();
        registry.register([
            Binder::value(Version("1.0")),
            Binder::service::<dyn Clock>(Arc::new(FrozenClock)),
            Binder::func(|ctx: &Context| ctx.uri().len()),
        ]);

        assert_eq!(registry.len(), 3);
        assert!(registry.contains::<Version>());
        assert!(registry.contains::<Arc<dyn Clock>>());
        assert!(registry.contains::<usize>());
        assert!(!registry.contains::<String>());
    }

    #[test]
    fn test_later_binder_replaces_earlier() {
        let mut registry = Registry::new();
        registry.value(Version("1.0")).value(Version("2.0"));

        assert_eq!(registry.len(), 1);
        let ctx = Context::new(get("/"), registry.snapshot());
        assert_eq!(ctx.resolve::<Version>().unwrap().0, "2.0");
    }

    #[test]
    fn test_handler_requires_binders() {
        let registry = Registry::new();

        let err = registry.handler(show_version).unwrap_err();
        match err {
            BindError::MissingDependency { type_name, handler } => {
                assert!(type_name.ends_with("Version"), "{type_name}");
                assert!(handler.contains("show_version"), "{handler}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_handler_keeps_snapshot() {
        let mut registry = Registry::new();
        registry.value(Version("1.0"));
        let handler = registry.handler(show_version).unwrap();

        registry.value(Version("2.0"));
        let later = registry.handler(show_version).unwrap();

        let res = handler.handle(get("/version")).await;
        assert_eq!(res.body, Some(Body::Text("1.0".to_string())));

        let res = later.handle(get("/version")).await;
        assert_eq!(res.body, Some(Body::Text("2.0".to_string())));
    }

    #[tokio::test]
    async fn test_child_is_independent() {
        let mut parent = Registry::new();
        parent.service::<dyn Clock>(Arc::new(FrozenClock));

        let mut child = parent.child();
        child.value(Version("child"));

        assert!(child.contains::<Arc<dyn Clock>>());
        assert!(!parent.contains::<Version>());

        let res = child.handler(show_time).unwrap().handle(get("/time")).await;
        assert_eq!(res.body, Some(Body::Text("1700000000".to_string())));
    }

    #[test]
    fn test_type_names_sorted() {
        let mut registry = Registry::new();
        registry.value(7u8).value(String::from("x"));

        assert_eq!(registry.type_names(), vec!["alloc::string::String", "u8"]);
    }
}
