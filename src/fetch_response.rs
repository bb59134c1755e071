use std::collections::HashMap;

use mime::Mime;
use url::Url;

/// The fully buffered http response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL that finally answered, after redirects.
    pub url: Url,
    pub status_code: u16,
    /// Header names are lower-case. A header sent more than once keeps only its last value.
    pub headers: HashMap<String, String>,
    pub content_type: Option<Mime>,
    pub body: Vec<u8>,
}

impl FetchResponse {
    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
