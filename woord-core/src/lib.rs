pub mod browse;
pub mod error;
pub mod format;
pub mod list;
pub mod local;
pub mod provider;

pub use browse::{BrowseInput, BrowseMode, BrowseState, Browser, Frame, QUIT_HINT};
pub use error::{Result, WoordError};
pub use format::{format_header, format_words};
pub use list::{Languages, WordList, WordPair, WordPairs};
pub use local::{LocalOptions, load_word_file, load_word_files};
pub use provider::{
    ApiConfig, CancellationToken, Credentials, FetchMessage, FetchProgress, FetchReport, Fetcher,
    ListSource, Session, WrtsClient,
};
