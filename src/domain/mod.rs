//! Domain logic - pure rules about tags, independent of git operations

pub mod tag;

pub use tag::{Tag, DEFAULT_FALLBACK_MESSAGE};
