use chrono::{DateTime, NaiveDate, Utc};

use crate::class::FileClass;

/// Index record for a science data product.
///
/// Quicklook renders and metadata sidecars are science-shaped as well: they
/// describe a science product and are persisted through the science upsert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScienceFileMetadata {
    /// Basename the store indexes by.
    pub filename: String,
    pub instrument: String,
    /// Processing level token (`l1a`, `l2`, `ql`, ...) when the name carries one.
    pub level: Option<String>,
    pub observed_on: Option<NaiveDate>,
    pub version: Option<u16>,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

/// Index record for an ancillary product (orbit, attitude, housekeeping...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AncillaryFileMetadata {
    pub filename: String,
    pub product: String,
    pub observed_on: Option<NaiveDate>,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

/// Index record for a raw level-0 instrument telemetry file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level0FileMetadata {
    pub filename: String,
    pub instrument: String,
    pub observed_on: Option<NaiveDate>,
    pub version: Option<u16>,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

/// A metadata record produced by one of the filename extractors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileMetadata {
    Science(ScienceFileMetadata),
    Ancillary(AncillaryFileMetadata),
    Level0(Level0FileMetadata),
}

impl FileMetadata {
    pub fn class(&self) -> FileClass {
        match self {
            FileMetadata::Science(_) => FileClass::Science,
            FileMetadata::Ancillary(_) => FileClass::Ancillary,
            FileMetadata::Level0(_) => FileClass::Level0,
        }
    }

    /// Basename the record will be indexed under.
    pub fn filename(&self) -> &str {
        match self {
            FileMetadata::Science(record) => &record.filename,
            FileMetadata::Ancillary(record) => &record.filename,
            FileMetadata::Level0(record) => &record.filename,
        }
    }
}
