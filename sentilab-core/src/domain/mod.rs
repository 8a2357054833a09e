//! Domain types for the sentiment index.

pub mod classification;
pub mod observation;
pub mod series;

pub use classification::Classification;
pub use observation::{Observation, MAX_INDEX_VALUE};
pub use series::SentimentSeries;
