//! Handler parameter types.
//!
//! Anything implementing [`FromContext`] can appear as a parameter of a
//! function passed to [`Registry::handler`]. Registry-backed parameters
//! ([`Dep`], [`Service`]) declare the binding they need through
//! [`FromContext::dependency`], so a missing binder is reported when the
//! handler is adapted rather than on the first request.
//!
//! ```rust,ignore
//! async fn show(Dep(user): Dep<User>, Query(page): Query<Paging>) -> Json<User> {
//!     Json(user)
//! }
//!
//! async fn create(Service(repo): Service<dyn UserRepo>, Json(dto): Validated<Json<NewUser>>) -> u16 {
//!     repo.insert(dto);
//!     201
//! }
//! ```
//!
//! [`Registry::handler`]: crate::Registry::handler

mod dep;
mod json;
mod path;
mod query;
mod request;
mod validated;

pub use dep::{Dep, Service};
pub use json::Json;
pub use path::Path;
pub use query::Query;
pub use request::Request;
pub use validated::{Validated, ValidatableExtractor};

use crate::binder::TypeKey;
use crate::context::Context;
use crate::error::BindError;

/// Types that can be produced from a request context.
pub trait FromContext: Sized {
    fn from_context(ctx: &Context) -> Result<Self, BindError>;

    /// The registry binding this type resolves from, if any.
    fn dependency() -> Option<TypeKey> {
        None
    }
}

// An optional argument never rejects the request and needs no binding.
impl<T: FromContext> FromContext for Option<T> {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        Ok(T::from_context(ctx).ok())
    }
}

/// Deserialize `T` from string pairs by round-tripping through
/// `application/x-www-form-urlencoded`.
pub(crate) fn from_string_map<'a, T, I>(pairs: I) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let pairs: Vec<_> = pairs.into_iter().collect();
    let encoded = serde_urlencoded::to_string(&pairs).map_err(|e| e.to_string())?;
    serde_urlencoded::from_str(&encoded).map_err(|e| e.to_string())
}
