//! Core data model definitions shared across findex crates.
#![allow(missing_docs)]

pub mod class;
pub mod metadata;

pub use class::FileClass;
pub use metadata::{
    AncillaryFileMetadata, FileMetadata, Level0FileMetadata, ScienceFileMetadata,
};
