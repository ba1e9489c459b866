#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod site;

pub use config::Config;
pub use error::{CacheError, DateError, FetchError};
pub use links::{LinkMetadata, LinkPreview, LinkPreviewer, PreviewConfig, PreviewSource};
