use std::future::Future;

use anyhow::Result;

use crate::handler::AdaptedHandler;
use crate::http_helpers::HttpMethod;

/// An HTTP server that adapted handlers can be mounted on.
pub trait HttpAdapter: Clone + Send + Sync {
    fn new() -> Self;
    fn add_route(&mut self, path: &str, method: HttpMethod, handler: AdaptedHandler);
    fn listen(self, port: u16, hostname: &str) -> impl Future<Output = Result<()>> + Send;
}
