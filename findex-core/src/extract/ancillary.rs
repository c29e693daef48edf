use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use findex_model::{AncillaryFileMetadata, FileMetadata};

use crate::error::Result;
use crate::extract::{basename, parse_compact_date, stat_file};
use crate::registry::MetadataExtractor;

/// `anc_<product>[_<YYYYMMDD>].<ext>` — orbit, attitude, and similar
/// housekeeping products.
static ANCILLARY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^anc_(?P<product>[a-z0-9]+(?:[-_][a-z0-9]+)*?)(?:_(?P<date>\d{8}))?\.(?:[a-z0-9]+)$",
    )
    .expect("ancillary filename regex should compile")
});

pub(crate) fn matches_basename(name: &str) -> bool {
    ANCILLARY_PATTERN.is_match(name)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AncillaryFileExtractor;

impl MetadataExtractor for AncillaryFileExtractor {
    fn name(&self) -> &'static str {
        "ancillary"
    }

    fn extract(&self, path: &Path) -> Result<Option<FileMetadata>> {
        let Some(name) = basename(path) else {
            return Ok(None);
        };
        let Some(captures) = ANCILLARY_PATTERN.captures(name) else {
            return Ok(None);
        };

        let (size, modified_at) = stat_file(path)?;
        Ok(Some(FileMetadata::Ancillary(AncillaryFileMetadata {
            filename: name.to_string(),
            product: captures["product"].to_string(),
            observed_on: captures
                .name("date")
                .and_then(|m| parse_compact_date(m.as_str())),
            size,
            modified_at,
        })))
    }
}
