//! Query parameter extractor

use serde::de::DeserializeOwned;

use super::{FromContext, from_string_map};
use crate::context::Context;
use crate::error::BindError;

/// Extractor for query parameters
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct SearchParams {
///     q: String,
///     limit: Option<i32>,
/// }
///
/// async fn search(Query(params): Query<SearchParams>) -> String {
///     format!("Searching for: {}", params.q)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Query<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Query<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: DeserializeOwned> FromContext for Query<T> {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        from_string_map(&ctx.request().query_params)
            .map(Query)
            .map_err(|e| BindError::extraction("Query", e))
    }
}
