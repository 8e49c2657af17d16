#![forbid(unsafe_code)]

mod documents;
pub mod store;

pub use store::{ContentError, ContentStore};
