use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    PATCH,
    OPTIONS,
    TRACE,
    CONNECT,
}

impl HttpMethod {
    /// Parse an HTTP method from a string (case-insensitive)
    pub fn from_string(method: &str) -> Option<Self> {
        match method.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::GET),
            "post" => Some(HttpMethod::POST),
            "put" => Some(HttpMethod::PUT),
            "delete" => Some(HttpMethod::DELETE),
            "patch" => Some(HttpMethod::PATCH),
            "options" => Some(HttpMethod::OPTIONS),
            "head" => Some(HttpMethod::HEAD),
            "trace" => Some(HttpMethod::TRACE),
            "connect" => Some(HttpMethod::CONNECT),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::CONNECT => "CONNECT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s).ok_or_else(|| format!("Unknown HTTP method: '{}'", s))
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(HttpMethod::from_string("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_string("Post"), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::from_string("CONNECT"), Some(HttpMethod::CONNECT));
        assert_eq!(HttpMethod::from_string("fetch"), None);
    }

    #[test]
    fn test_parse_and_display() {
        let method: HttpMethod = "trace".parse().unwrap();
        assert_eq!(method, HttpMethod::TRACE);
        assert_eq!(method.to_string(), "TRACE");
        assert!("".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_into_string() {
        let method: String = HttpMethod::PATCH.into();
        assert_eq!(method, "PATCH");
    }
}
