//! Path parameter extractor

use serde::de::DeserializeOwned;

use super::{FromContext, from_string_map};
use crate::context::Context;
use crate::error::BindError;

/// Extractor for path parameters, deserialized into a struct whose field
/// names match the route's parameter names.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UserPath {
///     id: i64,
///     username: String,
/// }
///
/// // GET /{id}/{username}
/// async fn show(Path(path): Path<UserPath>) -> String {
///     format!("{} is {}", path.id, path.username)
/// }
/// ```
///
/// Single parameters are simpler through [`Context::param_as`] inside a
/// binder.
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Path<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Path<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: DeserializeOwned> FromContext for Path<T> {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        from_string_map(&ctx.request().path_params)
            .map(Path)
            .map_err(|e| BindError::extraction("Path", e))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::http_helpers::{HttpMethod, HttpRequest};
    use crate::registry::Registry;

    #[derive(Debug, Deserialize, PartialEq)]
    struct UserPath {
        id: i64,
        username: String,
    }

    fn context(req: HttpRequest) -> Context {
        Context::new(req, Registry::new().snapshot())
    }

    #[test]
    fn test_path_struct() {
        let ctx = context(
            HttpRequest::new(HttpMethod::GET, "/42/kataras")
                .with_path_param("id", "42")
                .with_path_param("username", "kataras"),
        );

        let Path(path) = Path::<UserPath>::from_context(&ctx).unwrap();
        assert_eq!(
            path,
            UserPath {
                id: 42,
                username: "kataras".to_string()
            }
        );
    }

    #[test]
    fn test_path_type_mismatch() {
        let ctx = context(
            HttpRequest::new(HttpMethod::GET, "/x/kataras")
                .with_path_param("id", "x")
                .with_path_param("username", "kataras"),
        );

        let err = Path::<UserPath>::from_context(&ctx).unwrap_err();
        assert_eq!(err.status(), 400);
        assert!(err.to_string().starts_with("Path:"), "{err}");
    }
}
