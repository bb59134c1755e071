use clap::builder::TypedValueParser;
use clap::{value_parser, Arg, Command};
use log::debug;

use fetch_styles::demo::{self, Variant};
use fetch_styles::{FetchError, FetchOptions, Fetcher};

fn main() -> Result<(), FetchError> {
    env_logger::init();

    let matches = Command::new("fetch-styles")
        .about("Fetch a fixed list of web pages and print how long it took")
        .arg(
            Arg::new("variant")
                .short('v')
                .long("variant")
                .value_name("1-5")
                .help(
                    "1: sequential, 2: channels, 3: futures, 4: sequential over 8 pages, 5: \
                     channels over 8 pages [default: 1]",
                )
                .value_parser(value_parser!(u8).try_map(Variant::try_from)),
        )
        .arg(
            Arg::new("max body size")
                .long("max-body-size")
                .value_name("BYTES")
                .help("Size limit of a response body")
                .value_parser(value_parser!(u64).range(1..).try_map(usize::try_from)),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("MILLISECONDS")
                .help("Time limit of a request, 0 means unlimited")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .value_name("NUM")
                .help("Worker threads of the runtime that runs concurrent requests")
                .value_parser(value_parser!(u64).range(1..=1024).try_map(usize::try_from)),
        )
        .get_matches();

    let mut options = FetchOptions::default();

    if let Some(&max_body_size) = matches.get_one::<usize>("max body size") {
        options.max_response_body_size = max_body_size;
    }

    if let Some(&timeout) = matches.get_one::<u64>("timeout") {
        options.max_connection_time = timeout;
    }

    if let Some(&threads) = matches.get_one::<usize>("threads") {
        options.worker_threads = threads;
    }

    debug!("{:?}", options);

    let variant = matches.get_one::<Variant>("variant").copied().unwrap_or(Variant::Simple);

    let fetcher = Fetcher::new(options)?;

    println!("{}", demo::run(variant, &fetcher));

    Ok(())
}
