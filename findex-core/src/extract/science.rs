use std::path::Path;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use findex_model::{FileMetadata, ScienceFileMetadata};

use crate::error::Result;
use crate::extract::{basename, parse_compact_date, stat_file};
use crate::registry::MetadataExtractor;

/// `sci_<instrument>[_<level>][_<YYYYMMDD>][_v<NN>].<ext>`
///
/// Only the `sci_` prefix and the instrument token are mandatory; early
/// pipeline stages emit names as bare as `sci_001.dat`.
static SCIENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^sci_(?P<instrument>[a-z0-9]+)(?:_(?P<level>l[0-9][a-z]?))?(?:_(?P<date>\d{8}))?(?:_v(?P<version>\d{1,3}))?\.(?:dat|cdf|fits|sts)$",
    )
    .expect("science filename regex should compile")
});

pub(crate) fn matches_basename(name: &str) -> bool {
    SCIENCE_PATTERN.is_match(name)
}

pub(crate) struct ScienceName {
    pub instrument: String,
    pub level: Option<String>,
    pub observed_on: Option<NaiveDate>,
    pub version: Option<u16>,
}

/// Shared with the sidecar extractor, which parses the science basename a
/// sidecar refers to.
pub(crate) fn parse_basename(name: &str) -> Option<ScienceName> {
    let captures = SCIENCE_PATTERN.captures(name)?;
    Some(ScienceName {
        instrument: captures["instrument"].to_string(),
        level: captures.name("level").map(|m| m.as_str().to_string()),
        observed_on: captures
            .name("date")
            .and_then(|m| parse_compact_date(m.as_str())),
        version: captures.name("version").and_then(|m| m.as_str().parse().ok()),
    })
}

/// Extractor for standard science data products.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScienceFileExtractor;

impl MetadataExtractor for ScienceFileExtractor {
    fn name(&self) -> &'static str {
        "science"
    }

    fn extract(&self, path: &Path) -> Result<Option<FileMetadata>> {
        let Some(name) = basename(path) else {
            return Ok(None);
        };
        let Some(parsed) = parse_basename(name) else {
            return Ok(None);
        };

        let (size, modified_at) = stat_file(path)?;
        Ok(Some(FileMetadata::Science(ScienceFileMetadata {
            filename: name.to_string(),
            instrument: parsed.instrument,
            level: parsed.level,
            observed_on: parsed.observed_on,
            version: parsed.version,
            size,
            modified_at,
        })))
    }
}
