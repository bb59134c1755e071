//! The timed demonstrations selected on the command line.

use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

use log::info;
use thiserror::Error;

use crate::{FetchError, Fetcher};

/// The resources fetched by variants 1 to 3.
pub const URLS: [&str; 4] =
    ["http://www.dmv.com", "http://www.wealthprep.ca", "http://www.carros.com.do", "http://www.mbhs.com"];

/// The resources fetched by variants 4 and 5.
pub const MORE_URLS: [&str; 8] = [
    "http://www.dmv.com",
    "http://www.wealthprep.ca",
    "http://www.carros.com.do",
    "http://www.mbhs.com",
    "http://chatter.ru/chat",
    "http://ad.nl",
    "http://www.adweek.com",
    "http://upwork.com",
];

/// How requests of a batch are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// One blocking request after another.
    Sequential,
    /// One task per request, results received from channels.
    Channel,
    /// One task per request, results obtained by calling the returned handles.
    Future,
}

impl Style {
    pub fn get_str(&self) -> &'static str {
        match self {
            Style::Sequential => "sequential",
            Style::Channel => "channel",
            Style::Future => "future",
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.get_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown variant {0}, expected 1 to 5")]
pub struct UnknownVariant(pub u8);

/// A numbered demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Simple,
    Channel,
    Future,
    SimpleMore,
    ChannelMore,
}

impl Variant {
    pub fn number(&self) -> u8 {
        match self {
            Variant::Simple => 1,
            Variant::Channel => 2,
            Variant::Future => 3,
            Variant::SimpleMore => 4,
            Variant::ChannelMore => 5,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Variant::Simple | Variant::SimpleMore => Style::Sequential,
            Variant::Channel | Variant::ChannelMore => Style::Channel,
            Variant::Future => Style::Future,
        }
    }

    pub fn urls(&self) -> &'static [&'static str] {
        match self {
            Variant::Simple | Variant::Channel | Variant::Future => &URLS,
            Variant::SimpleMore | Variant::ChannelMore => &MORE_URLS,
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = UnknownVariant;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Variant::Simple),
            2 => Ok(Variant::Channel),
            3 => Ok(Variant::Future),
            4 => Ok(Variant::SimpleMore),
            5 => Ok(Variant::ChannelMore),
            _ => Err(UnknownVariant(number)),
        }
    }
}

/// The outcome of one demonstration.
#[derive(Debug)]
pub struct DemoReport {
    pub variant: Variant,
    /// Body lengths, in the order the URLs were given.
    pub lengths: Vec<usize>,
    /// The last error of the batch. Only the future style keeps errors.
    pub error: Option<FetchError>,
    pub elapsed: Duration,
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "version #{}", self.variant.number())?;

        if self.variant.style() == Style::Future {
            match &self.error {
                Some(err) => writeln!(f, "error {}", err)?,
                None => writeln!(f, "error <nil>")?,
            }
        }

        for (i, length) in self.lengths.iter().enumerate() {
            match i {
                0 => writeln!(f, "length = {}", length)?,
                _ => writeln!(f, "length{} = {}", i + 1, length)?,
            }
        }

        write!(f, "{:?}", self.elapsed)
    }
}

/// Run a variant over its own URLs.
#[inline]
pub fn run(variant: Variant, fetcher: &Fetcher) -> DemoReport {
    run_with_urls(variant, fetcher, variant.urls())
}

/// Run a variant over the given URLs. Concurrent styles start every request before waiting for any of them.
pub fn run_with_urls<S: AsRef<str>>(variant: Variant, fetcher: &Fetcher, urls: &[S]) -> DemoReport {
    let mut error = None;

    let start = Instant::now();

    let bodies: Vec<Vec<u8>> = match variant.style() {
        Style::Sequential => urls.iter().map(|url| fetcher.request_simple(url.as_ref())).collect(),
        Style::Channel => {
            let pages: Vec<_> = urls.iter().map(|url| fetcher.request_channel(url.as_ref())).collect();

            pages.into_iter().map(|page| page.recv().unwrap_or_default()).collect()
        }
        Style::Future => {
            let pages: Vec<_> = urls.iter().map(|url| fetcher.request_future(url.as_ref())).collect();

            pages
                .into_iter()
                .map(|page| {
                    page().unwrap_or_else(|err| {
                        error = Some(err);

                        Vec::new()
                    })
                })
                .collect()
        }
    };

    let elapsed = start.elapsed();

    info!("{} style fetched {} resources in {:?}", variant.style(), bodies.len(), elapsed);

    DemoReport {
        variant,
        lengths: bodies.iter().map(Vec::len).collect(),
        error,
        elapsed,
    }
}
