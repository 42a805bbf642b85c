//! JSON body extractor and response

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::FromContext;
use crate::context::Context;
use crate::error::BindError;
use crate::http_helpers::{Body, HttpResponse, IntoResponse};

/// JSON request body as a parameter, or a JSON response as a return value.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize, Serialize)]
/// struct CreateUserDto {
///     name: String,
///     email: String,
/// }
///
/// async fn create_user(Json(dto): Json<CreateUserDto>) -> (u16, Json<CreateUserDto>) {
///     (201, Json(dto))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Extract the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: DeserializeOwned> FromContext for Json<T> {
    fn from_context(ctx: &Context) -> Result<Self, BindError> {
        let json_value = match ctx.body() {
            Body::Json(value) => value.clone(),
            _ => return Err(BindError::extraction("Json", "request body is not JSON")),
        };

        serde_json::from_value(json_value)
            .map(Json)
            .map_err(|e| BindError::extraction("Json", e))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> HttpResponse {
        match serde_json::to_value(&self.0) {
            Ok(value) => HttpResponse::json(value),
            Err(e) => HttpResponse::text(format!("Failed to serialize JSON: {}", e)).status(500),
        }
    }
}
