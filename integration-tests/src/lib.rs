//! Shared harness for the integration tests: serves adapted handlers on an
//! ephemeral port.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use toni_mvc::{AdaptedHandler, HttpAdapter, HttpMethod};
use toni_mvc_axum::AxumAdapter;
use tracing_subscriber::EnvFilter;

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    server: JoinHandle<()>,
}

impl TestApp {
    /// Mount `routes` on a fresh adapter and start serving.
    pub async fn spawn(routes: Vec<(HttpMethod, &str, AdaptedHandler)>) -> Self {
        init_tracing();

        let mut adapter = AxumAdapter::new();
        for (method, path, handler) in routes {
            adapter.add_route(path, method, handler);
        }

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let server = tokio::spawn(async move {
            if let Err(err) = adapter.serve(listener).await {
                eprintln!("test server stopped: {err:#}");
            }
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
