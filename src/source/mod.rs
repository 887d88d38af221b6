pub mod client;
pub mod errors;
pub mod mock;

pub use client::{fetch_records, load_records};
pub use errors::SourceError;
