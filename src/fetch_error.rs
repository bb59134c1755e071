use std::io::Error as IOError;

use http::uri::InvalidUri;
use http::Error as HttpError;
use hyper::Error as HyperError;
use hyper_util::client::legacy::Error as ClientError;
use thiserror::Error;
use url::ParseError;

/// Errors for `HttpClient` and `Fetcher`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    UrlParseError(#[from] ParseError),
    #[error("invalid uri: {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error("invalid request: {0}")]
    HttpError(#[from] HttpError),
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("request failed: {0}")]
    ClientError(#[from] ClientError),
    #[error("failed to read the response body: {0}")]
    HyperError(#[from] HyperError),
    #[error("{0}")]
    IOError(#[from] IOError),
    #[error("redirect failed: {0}")]
    RedirectError(&'static str),
    #[error("the response body is too large")]
    TooLarge,
    #[error("timed out")]
    TimeOut,
    #[error("the request task was canceled")]
    Canceled,
}
