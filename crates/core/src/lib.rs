#![forbid(unsafe_code)]

pub mod model;
pub mod scorer;

pub use scorer::{ScoreEntry, score};
