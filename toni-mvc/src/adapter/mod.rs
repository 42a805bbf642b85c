mod http_adapter;
mod route_adapter;

pub use http_adapter::HttpAdapter;
pub use route_adapter::RouteAdapter;
