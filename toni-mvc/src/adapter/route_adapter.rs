use std::future::Future;

use anyhow::Result;

use crate::handler::AdaptedHandler;
use crate::http_helpers::{HttpRequest, HttpResponse};

/// Conversion between a server's native request/response types and the
/// framework-neutral ones adapted handlers work with.
pub trait RouteAdapter {
    type Request;
    type Response;

    fn adapt_request(request: Self::Request) -> impl Future<Output = Result<HttpRequest>> + Send;

    fn adapt_response(response: HttpResponse) -> Result<Self::Response>;

    fn handle_request(
        request: Self::Request,
        handler: AdaptedHandler,
    ) -> impl Future<Output = Result<Self::Response>> + Send
    where
        Self::Request: Send,
    {
        async move {
            let http_request = Self::adapt_request(request).await?;
            let http_response = handler.handle(http_request).await;
            Self::adapt_response(http_response)
        }
    }
}
