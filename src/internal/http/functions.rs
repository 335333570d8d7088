pub mod build_url;
pub mod fetch_envelope;
pub mod read_guarded;
pub mod with_retries;

pub use build_url::{build_url, encode_uri_component};
pub use fetch_envelope::fetch_envelope;
pub use read_guarded::read_guarded;
pub use with_retries::{execute_with_retries, fetch_with_retries};
