//! UseCase u101: probe every eligible catalogue cell and project verdicts
//! into the board sink.

pub mod classifier;
pub mod executor;
pub mod fetch_gateway;
pub mod media_prober;
pub mod sink;
pub mod url_builder;

pub use executor::BoardExecutor;
pub use fetch_gateway::{FetchOutcome, Fetcher, RelayFetcher};
pub use sink::BoardSink;
