//! Validated extractor wrapper

use validator::Validate;

use super::FromContext;
use crate::binder::TypeKey;
use crate::context::Context;
use crate::error::BindError;

/// Wrapper that validates the inner extractor
///
/// # Example
///
/// ```rust,ignore
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUserDto {
///     #[validate(length(min = 3))]
///     name: String,
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn create_user(Validated(Json(dto)): Validated<Json<CreateUserDto>>) -> String {
///     format!("Created user: {}", dto.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Trait for extractors that contain validatable data
pub trait ValidatableExtractor {
    type Inner: Validate;

    fn get_inner(&self) -> &Self::Inner;
}

impl<T: Validate> ValidatableExtractor for super::Json<T> {
    type Inner = T;

    fn get_inner(&self) -> &Self::Inner {
        &self.0
    }
}

impl<T: Validate> ValidatableExtractor for super::Path<T> {
    type Inner = T;

    fn get_inner(&self) -> &Self::Inner {
        &self.0
    }
}

impl<T: Validate> ValidatableExtractor for super::Query<T> {
    type Inner = T;

    fn get_inner(&self) -> &Self::Inner {
        &self.0
    }
}

// Bound values can be validated too, e.g. a struct built by a binder.
impl<T: Validate> ValidatableExtractor for super::Dep<T> {
    type Inner = T;

    fn get_inner(&self) -> &Self::Inner {
        &self.0
    }
}

impl<E> FromContext for Validated<E>
where
    E: FromContext + ValidatableExtractor,
{
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        let extracted = E::from_context(ctx)?;

        extracted
            .get_inner()
            .validate()
            .map_err(|errors| BindError::extraction("Validated", errors))?;

        Ok(Validated(extracted))
    }

    fn dependency() -> Option<TypeKey> {
        E::dependency()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::extractors::{Dep, Json};
    use crate::http_helpers::{Body, HttpMethod, HttpRequest};
    use crate::registry::Registry;

    #[derive(Debug, Clone, Deserialize, Validate)]
    struct CreateUserDto {
        #[validate(length(min = 3))]
        name: String,
    }

    fn context(body: Body, registry: &Registry) -> Context {
        Context::new(
            HttpRequest::new(HttpMethod::POST, "/users").with_body(body),
            registry.snapshot(),
        )
    }

    #[test]
    fn test_valid_body_passes() {
        let ctx = context(Body::Json(json!({ "name": "Ada L" })), &Registry::new());
        let Validated(Json(dto)) = Validated::<Json<CreateUserDto>>::from_context(&ctx).unwrap();
        assert_eq!(dto.name, "Ada L");
    }

    #[test]
    fn test_invalid_body_rejected() {
        let ctx = context(Body::Json(json!({ "name": "Al" })), &Registry::new());
        let err = Validated::<Json<CreateUserDto>>::from_context(&ctx).unwrap_err();
        assert_eq!(err.status(), 400);
        assert!(err.to_string().starts_with("Validated:"), "{err}");
    }

    #[test]
    fn test_validated_dep_keeps_dependency() {
        let mut registry = Registry::new();
        registry.value(CreateUserDto {
            name: "x".to_string(),
        });
        let ctx = context(Body::default(), &registry);

        assert!(Validated::<Dep<CreateUserDto>>::dependency().is_some());
        assert!(Validated::<Dep<CreateUserDto>>::from_context(&ctx).is_err());
    }
}
