//! Transport-neutral request and response values, plus the client seam.

use super::HttpError;

/// One invocation request, independent of any transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Always `POST` for invocations built by the dispatcher
    pub method: http::Method,
    /// Function endpoint
    pub url: url::Url,
    /// Caller headers; a name may carry several values
    pub headers: http::HeaderMap,
    /// Message bytes, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a `POST` to `url` with no headers and no body.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self {
            method: http::Method::POST,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends one header value, keeping any earlier values for `name`.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Appends every value of every header in `headers`.
    #[must_use]
    pub fn with_headers(mut self, headers: &http::HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.append(name, value.clone());
        }
        self
    }
}

/// What the function endpoint sent back.
///
/// The body is already read into memory, so the connection is free once
/// this value exists.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: http::StatusCode,
    pub headers: http::HeaderMap,
    /// Body bytes; may be short if the connection broke off mid-body
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code is in `[200, 300)`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as `&str`, or `None` when it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Body as text with invalid UTF-8 replaced, as reported in failures.
    #[must_use]
    pub fn body_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport seam between [`Dispatcher`](super::Dispatcher) and the network.
///
/// [`ReqwestClient`](super::ReqwestClient) is the production implementation;
/// tests script their own.
pub trait HttpClient: Send + Sync {
    /// Performs one exchange.
    ///
    /// Any status, 4xx and 5xx included, is an `Ok` response.
    ///
    /// # Errors
    ///
    /// [`HttpError::Connection`] or [`HttpError::Timeout`] when no response
    /// arrived. [`HttpError::InvalidUrl`] when the client refuses the request
    /// before sending anything; the dispatcher does not retry that one.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
