//! Errors raised while binding dependencies and extracting handler arguments.

use thiserror::Error;

use crate::http_helpers::{HttpResponse, IntoResponse};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A handler parameter asks for a type nothing was registered for.
    #[error("no binder registered for `{type_name}` (required by `{handler}`)")]
    MissingDependency {
        type_name: &'static str,
        handler: &'static str,
    },

    #[error("path parameter '{0}' not found")]
    ParamNotFound(String),

    #[error("failed to parse path parameter '{name}': {message}")]
    ParamParse { name: String, message: String },

    /// A request extractor (`Json`, `Query`, ...) rejected the request.
    #[error("{extractor}: {message}")]
    Extraction {
        extractor: &'static str,
        message: String,
    },

    /// A fallible dynamic binder returned an error.
    #[error("binder for `{type_name}` failed: {message}")]
    Binder {
        type_name: &'static str,
        message: String,
    },

    #[error("resolving `{type_name}` exceeded the maximum binder depth")]
    ResolutionDepth { type_name: &'static str },
}

impl BindError {
    pub fn extraction(extractor: &'static str, message: impl ToString) -> Self {
        Self::Extraction {
            extractor,
            message: message.to_string(),
        }
    }

    /// Status code used when this error becomes a response.
    pub fn status(&self) -> u16 {
        match self {
            BindError::MissingDependency { .. } | BindError::ResolutionDepth { .. } => 500,
            BindError::ParamNotFound(_)
            | BindError::ParamParse { .. }
            | BindError::Extraction { .. }
            | BindError::Binder { .. } => 400,
        }
    }

    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::text(self.to_string()).status(self.status())
    }
}

impl IntoResponse for BindError {
    fn into_response(self) -> HttpResponse {
        self.to_response()
    }
}
