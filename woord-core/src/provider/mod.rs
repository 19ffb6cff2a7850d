mod client;
pub mod envelope;
mod fetcher;
mod pipeline;
mod progress;

pub use client::{ApiConfig, Credentials, DEFAULT_BASE_URL, ListSource, Session, WrtsClient};
pub use envelope::ShapedList;
pub use fetcher::{CancellationToken, Fetcher};
pub use pipeline::{FetchFailure, FetchReport, fetch_all, retrieve};
pub use progress::{FetchMessage, FetchProgress};
