//! Filename-convention extractors for the file classes the index tracks.
//!
//! Each extractor recognizes one naming convention, parses the basename with
//! anchored regexes, and stats the file for size and mtime. The stat is the
//! only filesystem touch, which keeps extraction failures in the recoverable
//! I/O class the update handler knows how to skip.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

mod ancillary;
mod level0;
mod quicklook;
mod science;
mod sidecar;

pub use ancillary::AncillaryFileExtractor;
pub use level0::Level0FileExtractor;
pub use quicklook::QuicklookFileExtractor;
pub use science::ScienceFileExtractor;
pub use sidecar::SidecarFileExtractor;

pub(crate) use ancillary::matches_basename as matches_ancillary_basename;
pub(crate) use level0::matches_basename as matches_level0_basename;
pub(crate) use quicklook::matches_basename as matches_quicklook_basename;
pub(crate) use science::matches_basename as matches_science_basename;
pub(crate) use sidecar::matches_basename as matches_sidecar_basename;

pub(crate) fn basename(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}

/// `YYYYMMDD` observation dates as they appear in product names.
pub(crate) fn parse_compact_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y%m%d").ok()
}

pub(crate) fn stat_file(path: &Path) -> io::Result<(u64, DateTime<Utc>)> {
    let metadata = std::fs::metadata(path)?;
    let modified_at = metadata.modified().map(DateTime::<Utc>::from)?;
    Ok((metadata.len(), modified_at))
}
