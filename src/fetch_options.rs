const DEFAULT_MAX_RESPONSE_BODY_SIZE: usize = 64 * 1024 * 1024;
const DEFAULT_MAX_REDIRECT_COUNT: usize = 10;
const DEFAULT_MAX_CONNECTION_TIME: u64 = 0;
const DEFAULT_WORKER_THREADS: usize = 4;

/// Options for `HttpClient` and `Fetcher`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// The size limit in bytes of the response body. The default value is `64 * 1024 * 1024` (64 MiB).
    pub max_response_body_size: usize,
    /// The count limit of redirection times. The default value is `10`.
    pub max_redirect_count: usize,
    /// The time limit in milliseconds of a whole request, redirects and body included. 0 means the time is unlimited. The default value is `0`.
    pub max_connection_time: u64,
    /// The number of worker threads of the runtime that runs concurrent requests. The default value is `4`, or the number of CPUs if that is smaller.
    pub worker_threads: usize,
}

impl Default for FetchOptions {
    #[inline]
    fn default() -> Self {
        FetchOptions {
            max_response_body_size: DEFAULT_MAX_RESPONSE_BODY_SIZE,
            max_redirect_count: DEFAULT_MAX_REDIRECT_COUNT,
            max_connection_time: DEFAULT_MAX_CONNECTION_TIME,
            worker_threads: DEFAULT_WORKER_THREADS.min(num_cpus::get()).max(1),
        }
    }
}
