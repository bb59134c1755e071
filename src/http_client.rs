use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use http::{header, Request, StatusCode, Uri};
use http_body_util::{BodyExt, Empty};
use hyper::body::{Bytes, Incoming};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use log::debug;
use mime::Mime;
use url::Url;

use crate::{FetchError, FetchOptions, FetchResponse};

const USER_AGENT: &str =
    concat!("Mozilla/5.0 (Rust; magiclen.org) FetchStyles/", env!("CARGO_PKG_VERSION"));

/// An async HTTP/HTTPS client. Cloning it is cheap and the clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    options: Arc<FetchOptions>,
}

impl HttpClient {
    pub fn new(options: FetchOptions) -> HttpClient {
        let https = HttpsConnector::new();

        HttpClient {
            client: Client::builder(TokioExecutor::new()).build(https),
            options: Arc::new(options),
        }
    }

    /// Send a GET request and buffer the whole response. Redirects are followed.
    ///
    /// A response with an error status is still a successful fetch.
    pub async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let url = Url::parse(url)?;

        match self.options.max_connection_time {
            0 => self.send(url).await,
            max_connection_time => {
                tokio::time::timeout(Duration::from_millis(max_connection_time), self.send(url))
                    .await
                    .map_err(|_| FetchError::TimeOut)?
            }
        }
    }

    /// Send a GET request and keep only the response body.
    #[inline]
    pub async fn get_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.get(url).await.map(|response| response.body)
    }

    async fn send(&self, mut url: Url) -> Result<FetchResponse, FetchError> {
        let mut redirect_count = 0;

        loop {
            match url.scheme() {
                "http" | "https" => (),
                scheme => return Err(FetchError::UnsupportedScheme(scheme.to_string())),
            }

            let uri: Uri = url.as_str().parse()?;

            let request =
                Request::get(uri).header(header::USER_AGENT, USER_AGENT).body(Empty::new())?;

            debug!("GET {}", url);

            let response = self.client.request(request).await?;

            let status = response.status();

            if is_redirect(status) {
                if redirect_count >= self.options.max_redirect_count {
                    return Err(FetchError::RedirectError("too many redirects"));
                }

                let location = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .ok_or(FetchError::RedirectError("missing the location header"))?;

                let next_url = url
                    .join(location)
                    .map_err(|_| FetchError::RedirectError("invalid location header"))?;

                debug!("{} {} -> {}", status.as_u16(), url, next_url);

                url = next_url;
                redirect_count += 1;

                continue;
            }

            let mut headers = HashMap::new();

            for (name, value) in response.headers() {
                headers.insert(
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                );
            }

            let content_type =
                headers.get(header::CONTENT_TYPE.as_str()).and_then(|v| v.parse::<Mime>().ok());

            let body = read_body(response.into_body(), self.options.max_response_body_size).await?;

            debug!("{} {} ({} bytes)", status.as_u16(), url, body.len());

            return Ok(FetchResponse {
                url,
                status_code: status.as_u16(),
                headers,
                content_type,
                body,
            });
        }
    }
}

#[inline]
fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

async fn read_body(mut body: Incoming, max_body_size: usize) -> Result<Vec<u8>, FetchError> {
    let mut buffer = Vec::new();

    while let Some(frame) = body.frame().await {
        if let Ok(chunk) = frame?.into_data() {
            if buffer.len() + chunk.len() > max_body_size {
                return Err(FetchError::TooLarge);
            }

            buffer.extend_from_slice(&chunk);
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_only_redirect_statuses() {
        assert!(is_redirect(StatusCode::FOUND));
        assert!(is_redirect(StatusCode::PERMANENT_REDIRECT));
        assert!(!is_redirect(StatusCode::NOT_MODIFIED));
        assert!(!is_redirect(StatusCode::MULTIPLE_CHOICES));
        assert!(!is_redirect(StatusCode::OK));
    }

    #[tokio::test]
    async fn rejects_unsupported_schemes() {
        let client = HttpClient::new(FetchOptions::default());

        match client.get("ftp://example.com/file").await {
            Err(FetchError::UnsupportedScheme(scheme)) => assert_eq!("ftp", scheme),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_relative_urls() {
        let client = HttpClient::new(FetchOptions::default());

        assert!(matches!(client.get("/index.html").await, Err(FetchError::UrlParseError(_))));
    }
}
