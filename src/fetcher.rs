use std::sync::mpsc::{sync_channel, Receiver};

use futures::channel::oneshot;
use futures::executor::block_on;
use log::warn;
use tokio::runtime::{Builder, Runtime};

use crate::{FetchError, FetchOptions, HttpClient};

/// Owns a multi-threaded runtime and dispatches GET requests on it in three styles.
///
/// The blocking entry points (`request_simple`, receiving from a `request_channel` receiver, calling a `request_future` handle) must not be used from inside an async context.
#[derive(Debug)]
pub struct Fetcher {
    runtime: Runtime,
    client: HttpClient,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Result<Fetcher, FetchError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(options.worker_threads.max(1))
            .thread_name("fetch-worker")
            .enable_all()
            .build()?;

        Ok(Fetcher {
            runtime,
            client: HttpClient::new(options),
        })
    }

    /// Fetch on the calling thread. An empty body is returned if the request fails.
    pub fn request_simple(&self, url: &str) -> Vec<u8> {
        self.runtime.block_on(self.client.get_body(url)).unwrap_or_else(|err| discard(url, err))
    }

    /// Fetch on a new task. The body, or an empty one if the request fails, arrives on the returned receiver.
    pub fn request_channel(&self, url: &str) -> Receiver<Vec<u8>> {
        let (sender, receiver) = sync_channel(1);

        let client = self.client.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let body = client.get_body(&url).await.unwrap_or_else(|err| discard(&url, err));

            // the caller may have stopped waiting
            let _ = sender.send(body);
        });

        receiver
    }

    /// Fetch on a new task. The returned function blocks until the task finishes, then yields its body or its error.
    pub fn request_future(&self, url: &str) -> impl FnOnce() -> Result<Vec<u8>, FetchError> {
        let (sender, receiver) = oneshot::channel();

        let client = self.client.clone();
        let url = url.to_string();

        self.runtime.spawn(async move {
            let _ = sender.send(client.get_body(&url).await);
        });

        move || block_on(receiver).unwrap_or_else(|_| Err(FetchError::Canceled))
    }
}

fn discard(url: &str, error: FetchError) -> Vec<u8> {
    warn!("{}: {}", url, error);

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> Fetcher {
        Fetcher::new(FetchOptions::default()).unwrap()
    }

    #[test]
    fn simple_discards_errors() {
        assert!(fetcher().request_simple("not a url").is_empty());
    }

    #[test]
    fn channel_discards_errors() {
        let fetcher = fetcher();
        let page = fetcher.request_channel("gopher://example.com");

        assert_eq!(Vec::<u8>::new(), page.recv().unwrap());
    }

    #[test]
    fn future_surfaces_errors() {
        let fetcher = fetcher();
        let page = fetcher.request_future("not a url");

        assert!(matches!(page(), Err(FetchError::UrlParseError(_))));
    }
}
