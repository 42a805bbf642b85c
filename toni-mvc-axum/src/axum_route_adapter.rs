use std::collections::HashMap;

use anyhow::{Result, anyhow};
use axum::{
    RequestPartsExt,
    body::to_bytes,
    extract::{Path, Query, rejection::PathRejection},
    http::{HeaderName, HeaderValue, Request, Response, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use toni_mvc::{Body, HttpRequest, HttpResponse, RouteAdapter, http_helpers::Extensions};
use tracing::debug;

pub struct AxumRouteAdapter;

impl RouteAdapter for AxumRouteAdapter {
    type Request = Request<axum::body::Body>;
    type Response = Response<axum::body::Body>;

    async fn adapt_request(request: Self::Request) -> Result<HttpRequest> {
        let (mut parts, body) = request.into_parts();
        let body_bytes = to_bytes(body, usize::MAX).await?;

        let body = match String::from_utf8(body_bytes.to_vec()) {
            Ok(body_str) => match serde_json::from_str::<Value>(&body_str) {
                Ok(json) => Body::Json(json),
                Err(_) => Body::Text(body_str),
            },
            Err(_) => Body::Text(String::from_utf8_lossy(&body_bytes).to_string()),
        };

        // Routes without parameters have nothing to extract. Any other
        // rejection is returned as is so the caller can answer with it.
        let path_params = match parts.extract::<Path<HashMap<String, String>>>().await {
            Ok(Path(params)) => params,
            Err(PathRejection::MissingPathParams(_)) => HashMap::new(),
            Err(rejection) => return Err(rejection.into()),
        };

        let Query(query_params) = parts
            .extract::<Query<HashMap<String, String>>>()
            .await
            .map_err(|e| anyhow!("Failed to extract query parameters: {}", e))?;

        let headers = parts
            .headers
            .iter()
            .filter_map(|(name, value)| match value.to_str() {
                Ok(value) => Some((name.to_string(), value.to_string())),
                Err(_) => {
                    debug!(header = %name, "Skipping header with non-ASCII value");
                    None
                }
            })
            .collect();

        Ok(HttpRequest {
            body,
            headers,
            method: parts.method.to_string(),
            uri: parts.uri.to_string(),
            query_params,
            path_params,
            extensions: Extensions::new(),
        })
    }

    fn adapt_response(response: HttpResponse) -> Result<Self::Response> {
        let status =
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let (body, content_type) = match response.body {
            Some(Body::Text(text)) => (axum::body::Body::from(text), Some("text/plain; charset=utf-8")),
            Some(Body::Json(json)) => {
                let vec = serde_json::to_vec(&json)
                    .map_err(|e| anyhow!("Failed to serialize JSON: {}", e))?;
                (axum::body::Body::from(vec), Some("application/json"))
            }
            None => (axum::body::Body::empty(), None),
        };

        let mut res = Response::builder()
            .status(status)
            .body(body)
            .map_err(|e| anyhow!("Failed to build response: {}", e))?;

        for (k, v) in &response.headers {
            if let (Ok(name), Ok(value)) =
                (HeaderName::from_bytes(k.as_bytes()), HeaderValue::from_str(v))
            {
                res.headers_mut().append(name, value);
            }
        }

        if let Some(content_type) = content_type {
            res.headers_mut()
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static(content_type));
        }

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_adapt_request_detects_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/users?active=true")
            .header("X-Request-Id", "abc")
            .body(axum::body::Body::from(r#"{"name":"Ada"}"#))
            .unwrap();

        let req = AxumRouteAdapter::adapt_request(request).await.unwrap();

        assert_eq!(req.method, "POST");
        assert_eq!(req.body, Body::Json(serde_json::json!({ "name": "Ada" })));
        assert_eq!(req.query_param("active"), Some("true"));
        assert_eq!(req.header_ignore_case("x-request-id"), Some("abc"));
        assert!(req.path_params.is_empty());
    }

    #[tokio::test]
    async fn test_adapt_request_keeps_text() {
        let request = Request::builder()
            .uri("/echo")
            .body(axum::body::Body::from("name=Ada"))
            .unwrap();

        let req = AxumRouteAdapter::adapt_request(request).await.unwrap();
        assert_eq!(req.body, Body::Text("name=Ada".to_string()));
    }

    #[tokio::test]
    async fn test_adapt_response_sets_content_type() {
        let res = AxumRouteAdapter::adapt_response(
            HttpResponse::json(serde_json::json!({ "id": 42 })).status(201),
        )
        .unwrap();

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"id":42}"#);
    }

    #[test]
    fn test_adapt_response_keeps_explicit_headers() {
        let res = AxumRouteAdapter::adapt_response(
            HttpResponse::text("<b>hi</b>").header("Content-Type", "text/html"),
        )
        .unwrap();

        assert_eq!(res.headers()[CONTENT_TYPE], "text/html");
    }

    #[tokio::test]
    async fn test_adapt_request_skips_non_ascii_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Name", HeaderValue::from_bytes(b"caf\xc3\xa9").unwrap())
            .header("X-Plain", "ok")
            .body(axum::body::Body::empty())
            .unwrap();

        let req = AxumRouteAdapter::adapt_request(request).await.unwrap();
        assert!(!req.has_header("x-name"));
        assert_eq!(req.header_ignore_case("x-plain"), Some("ok"));
    }

    #[test]
    fn test_adapt_response_keeps_repeated_headers() {
        let mut response = HttpResponse::new();
        response.headers.push(("Set-Cookie".to_string(), "a=1".to_string()));
        response.headers.push(("Set-Cookie".to_string(), "b=2".to_string()));

        let res = AxumRouteAdapter::adapt_response(response).unwrap();

        let cookies: Vec<_> = res.headers().get_all("set-cookie").iter().collect();
        assert_eq!(cookies, ["a=1", "b=2"]);
    }

    #[test]
    fn test_adapt_response_invalid_status_is_server_error() {
        let res = AxumRouteAdapter::adapt_response(HttpResponse::with_status(1000)).unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
