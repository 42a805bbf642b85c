use std::fmt::Display;

use serde_json::Value;

use super::{Body, HttpResponse};
use crate::error::BindError;

/// Conversion of a handler's return value into an [`HttpResponse`].
pub trait IntoResponse {
    fn into_response(self) -> HttpResponse;
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> HttpResponse {
        self
    }
}

impl IntoResponse for () {
    fn into_response(self) -> HttpResponse {
        HttpResponse::new()
    }
}

impl IntoResponse for Body {
    fn into_response(self) -> HttpResponse {
        match self {
            Body::Json(value) => HttpResponse::json(value),
            body => HttpResponse {
                body: Some(body),
                ..HttpResponse::new()
            },
        }
    }
}

impl IntoResponse for u16 {
    fn into_response(self) -> HttpResponse {
        HttpResponse::with_status(self)
    }
}

impl IntoResponse for Vec<(String, String)> {
    fn into_response(self) -> HttpResponse {
        HttpResponse {
            headers: self,
            ..HttpResponse::new()
        }
    }
}

impl<T: IntoResponse> IntoResponse for (u16, T) {
    fn into_response(self) -> HttpResponse {
        let mut response = self.1.into_response();
        response.status = self.0;
        response
    }
}

impl IntoResponse for Value {
    fn into_response(self) -> HttpResponse {
        HttpResponse::json(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> HttpResponse {
        HttpResponse::text(self)
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> HttpResponse {
        HttpResponse::text(self)
    }
}

// `None` is a missing resource.
impl<T: IntoResponse> IntoResponse for Option<T> {
    fn into_response(self) -> HttpResponse {
        match self {
            Some(value) => value.into_response(),
            None => HttpResponse::with_status(404),
        }
    }
}

impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: Display + 'static,
{
    fn into_response(self) -> HttpResponse {
        match self {
            Ok(value) => value.into_response(),
            Err(err) => {
                let any: &dyn std::any::Any = &err;
                if let Some(bind_err) = any.downcast_ref::<BindError>() {
                    return bind_err.to_response();
                }
                HttpResponse::text(err.to_string()).status(400)
            }
        }
    }
}
