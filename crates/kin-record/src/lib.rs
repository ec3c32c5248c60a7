mod fetcher;
pub use fetcher::RecordFetcher;
pub use fetcher::{MAX_READ_LIMIT, MAX_TOTAL_RECORDS};
