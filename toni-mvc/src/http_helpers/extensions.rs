//! Request-scoped typed data.
//!
//! Adapters and dynamic binders use `Extensions` to hang typed values off a
//! request. Handlers read them back through [`Context::extensions`] or the
//! [`Request`] extractor.
//!
//! ```
//! use toni_mvc::http_helpers::Extensions;
//!
//! struct TraceId(u64);
//!
//! let mut ext = Extensions::new();
//! ext.insert(TraceId(7));
//! assert_eq!(ext.get::<TraceId>().unwrap().0, 7);
//! ```
//!
//! [`Context::extensions`]: crate::Context::extensions
//! [`Request`]: crate::extractors::Request

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct Extensions {
    map: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

// Values are not `Clone`, so a cloned request starts with no extensions.
impl Clone for Extensions {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
