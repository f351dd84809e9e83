pub mod error;
pub mod fetcher;
pub mod matcher;
pub mod result;
pub mod search;

pub use error::SearchError;
pub use fetcher::ArticleFetcher;
pub use matcher::WordMatcher;
pub use result::{Article, SearchOutcome};
pub use search::{DEFAULT_MAX_DEPTH, DistanceSearch};
