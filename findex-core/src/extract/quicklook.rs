use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use findex_model::{FileMetadata, ScienceFileMetadata};

use crate::error::Result;
use crate::extract::{basename, parse_compact_date, stat_file};
use crate::registry::MetadataExtractor;

/// `ql_<instrument>[_<YYYYMMDD>].<png|jpg|pdf>` — rendered quicklook
/// products. They index as science-shaped records at level `ql`.
static QUICKLOOK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ql_(?P<instrument>[a-z0-9]+)(?:_(?P<date>\d{8}))?\.(?:png|jpe?g|pdf)$")
        .expect("quicklook filename regex should compile")
});

pub(crate) fn matches_basename(name: &str) -> bool {
    QUICKLOOK_PATTERN.is_match(name)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuicklookFileExtractor;

impl MetadataExtractor for QuicklookFileExtractor {
    fn name(&self) -> &'static str {
        "quicklook"
    }

    fn extract(&self, path: &Path) -> Result<Option<FileMetadata>> {
        let Some(name) = basename(path) else {
            return Ok(None);
        };
        let Some(captures) = QUICKLOOK_PATTERN.captures(name) else {
            return Ok(None);
        };

        let (size, modified_at) = stat_file(path)?;
        Ok(Some(FileMetadata::Science(ScienceFileMetadata {
            filename: name.to_string(),
            instrument: captures["instrument"].to_string(),
            level: Some("ql".to_string()),
            observed_on: captures
                .name("date")
                .and_then(|m| parse_compact_date(m.as_str())),
            version: None,
            size,
            modified_at,
        })))
    }
}
