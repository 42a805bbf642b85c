use serde_json::Value;

use super::Body;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub body: Option<Body>,
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            body: None,
            status: 200,
            headers: vec![],
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            body: Some(Body::Text(text.into())),
            ..Self::default()
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            body: Some(Body::Json(value)),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            ..Self::default()
        }
    }

    /// Set a header, replacing any existing header with the same
    /// (case-insensitive) name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ok_and_empty() {
        let res = HttpResponse::default();
        assert_eq!(res.status, 200);
        assert!(res.body.is_none());
        assert!(res.headers.is_empty());
    }

    #[test]
    fn test_header_replaces_case_insensitive() {
        let res = HttpResponse::text("hi")
            .header("content-type", "text/plain")
            .header("Content-Type", "text/html");

        assert_eq!(res.headers.len(), 1);
        assert_eq!(res.headers[0].1, "text/html");
    }

    #[test]
    fn test_json_sets_content_type() {
        let res = HttpResponse::json(serde_json::json!({ "ok": true })).status(201);
        assert_eq!(res.status, 201);
        assert_eq!(
            res.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }
}
