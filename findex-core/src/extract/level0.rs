use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use findex_model::{FileMetadata, Level0FileMetadata};

use crate::error::Result;
use crate::extract::{basename, parse_compact_date, stat_file};
use crate::registry::MetadataExtractor;

/// `<instrument>_l0_<YYYYMMDD>[_v<NN>].dat` — raw telemetry. Note that a
/// `sci_l0_...` name also parses as a science name; the registry's priority
/// order settles who wins.
static LEVEL0_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<instrument>[a-z][a-z0-9]*)_l0_(?P<date>\d{8})(?:_v(?P<version>\d{1,3}))?\.dat$")
        .expect("level-0 filename regex should compile")
});

pub(crate) fn matches_basename(name: &str) -> bool {
    LEVEL0_PATTERN.is_match(name)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Level0FileExtractor;

impl MetadataExtractor for Level0FileExtractor {
    fn name(&self) -> &'static str {
        "level0"
    }

    fn extract(&self, path: &Path) -> Result<Option<FileMetadata>> {
        let Some(name) = basename(path) else {
            return Ok(None);
        };
        let Some(captures) = LEVEL0_PATTERN.captures(name) else {
            return Ok(None);
        };

        let (size, modified_at) = stat_file(path)?;
        Ok(Some(FileMetadata::Level0(Level0FileMetadata {
            filename: name.to_string(),
            instrument: captures["instrument"].to_string(),
            observed_on: captures
                .name("date")
                .and_then(|m| parse_compact_date(m.as_str())),
            version: captures.name("version").and_then(|m| m.as_str().parse().ok()),
            size,
            modified_at,
        })))
    }
}
