//! Payload retrieval, normalization and the tabular frame

pub mod alternative_me;
pub mod file;
pub mod frame;
pub mod normalize;
pub mod provider;
pub mod schema;

pub use alternative_me::{AlternativeMeProvider, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use file::FileProvider;
pub use frame::to_frame;
pub use normalize::normalize;
pub use provider::{PayloadSource, RawPayload, SentimentProvider, StaticProvider, DEFAULT_LIMIT};
pub use schema::{ObservationSchema, SchemaError};
