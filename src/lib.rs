//! # Fetch Styles
//! Fetch HTTP/HTTPS resources in three styles and compare how long each takes.
//!
//! * **simple** - a blocking request on the calling thread.
//! * **channel** - a request on its own task, the body arrives on a single-slot channel.
//! * **future** - a request on its own task, the returned function blocks until the body or the error is ready.
//!
//! All three return an empty body when the request fails. Only the future style tells you why.
//!
//! ## Example
//!
//! ```no_run
//! let page = fetch_styles::request_channel("http://example.com");
//! let page2 = fetch_styles::request_future("http://example.org");
//!
//! let body = fetch_styles::request_simple("https://magiclen.org");
//!
//! println!("{}", body.len());
//! println!("{}", page.recv().unwrap().len());
//! println!("{}", page2().unwrap().len());
//! ```

pub use futures;
pub use http;
pub use hyper;
pub use mime;
pub use url;

mod fetch_error;
mod fetch_options;
mod fetch_response;
mod fetcher;
mod http_client;

pub mod demo;

use std::sync::mpsc::Receiver;

use lazy_static::lazy_static;

pub use fetch_error::FetchError;
pub use fetch_options::FetchOptions;
pub use fetch_response::FetchResponse;
pub use fetcher::Fetcher;
pub use http_client::HttpClient;

lazy_static! {
    static ref DEFAULT_FETCHER: Fetcher =
        Fetcher::new(FetchOptions::default()).expect("cannot build the runtime of the default fetcher");
}

/// The process-wide fetcher behind `request_simple`, `request_channel` and `request_future`. It is created with `FetchOptions::default()` on first use.
#[inline]
pub fn default_fetcher() -> &'static Fetcher {
    &DEFAULT_FETCHER
}

/// Fetch on the calling thread with the default fetcher. See `Fetcher::request_simple`.
#[inline]
pub fn request_simple(url: &str) -> Vec<u8> {
    default_fetcher().request_simple(url)
}

/// Fetch on a new task with the default fetcher. See `Fetcher::request_channel`.
#[inline]
pub fn request_channel(url: &str) -> Receiver<Vec<u8>> {
    default_fetcher().request_channel(url)
}

/// Fetch on a new task with the default fetcher. See `Fetcher::request_future`.
#[inline]
pub fn request_future(url: &str) -> impl FnOnce() -> Result<Vec<u8>, FetchError> {
    default_fetcher().request_future(url)
}
