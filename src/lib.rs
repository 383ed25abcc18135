pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod warning;

pub use changelog::{extract_section, SectionExtractor};
pub use error::{GtautoError, Result};
