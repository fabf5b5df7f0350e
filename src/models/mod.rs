//! Core data models for papers and API responses.

mod paper;
mod query;
mod response;

pub use paper::{Paper, PaperBuilder};
pub use query::ListQuery;
pub use response::{
    BatchSaveResponse, PapersResponse, SearchResponse, Stats, SubscribeResponse, VersionsResponse,
};
