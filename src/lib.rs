pub mod catalog;
pub mod error;
pub mod report;
pub mod word_stats;

pub use error::{Error, Result};
