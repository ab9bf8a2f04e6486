//! `reqwest`-backed transport for function invocations.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Sends invocation requests over a shared `reqwest::Client`.
///
/// Sets no request timeout of its own; an attempt lasts as long as the
/// connection stays open unless the wrapped client was built with one.
///
/// # Example
///
/// ```no_run
/// use connector_invoke::invoke::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("http://fn.local/invoke")?;
/// let response = client
///     .request(HttpRequest::post(url).with_body(b"hello".to_vec()))
///     .await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Wraps a `reqwest::Client` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a preconfigured client, e.g. one with a timeout or proxy rules.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut outgoing = self.inner.request(req.method, req.url.as_str());
        for (name, value) in &req.headers {
            outgoing = outgoing.header(name, value);
        }
        if let Some(body) = req.body {
            outgoing = outgoing.body(body);
        }

        let mut response = outgoing.send().await.map_err(send_error)?;
        let status = response.status();
        let headers = std::mem::take(response.headers_mut());
        let body = read_body(&mut response).await;

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Drains the response body.
///
/// Once a status line has arrived the exchange counts as answered, so a
/// body that breaks off early is kept as far as it was read.
async fn read_body(response: &mut reqwest::Response) -> Vec<u8> {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    status = response.status().as_u16(),
                    received = body.len(),
                    "reading function response body failed"
                );
                break;
            }
        }
    }
    body
}

/// Maps a failed `send()` to a transport error.
///
/// Everything reqwest reports here, including an unsupported scheme, happens
/// after the request left the dispatcher, so none of it is a construction
/// failure.
fn send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Connection(Box::new(e))
    }
}
