use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use findex_model::{FileMetadata, ScienceFileMetadata};

use crate::error::Result;
use crate::extract::science;
use crate::extract::{basename, stat_file};
use crate::registry::MetadataExtractor;

/// `<science basename>.meta` — a metadata sidecar shipped next to a science
/// product. The record is indexed under the sidecar's own basename, with the
/// instrument/level/date fields parsed from the name it refers to.
static SIDECAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<target>sci_[a-z0-9_]+\.(?:dat|cdf|fits|sts))\.meta$")
        .expect("sidecar filename regex should compile")
});

pub(crate) fn matches_basename(name: &str) -> bool {
    SIDECAR_PATTERN
        .captures(name)
        .is_some_and(|captures| science::parse_basename(&captures["target"]).is_some())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarFileExtractor;

impl MetadataExtractor for SidecarFileExtractor {
    fn name(&self) -> &'static str {
        "sidecar"
    }

    fn extract(&self, path: &Path) -> Result<Option<FileMetadata>> {
        let Some(name) = basename(path) else {
            return Ok(None);
        };
        let Some(captures) = SIDECAR_PATTERN.captures(name) else {
            return Ok(None);
        };
        let Some(parsed) = science::parse_basename(&captures["target"]) else {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn recognizes_sidecars_of_science_products() {
        assert!(matches_basename("sci_001.dat.meta"));
        assert!(matches_basename("sci_iuv_l1a_20260801_v03.dat.meta"));
        assert!(!matches_basename("sci_001.dat"));
        assert!(!matches_basename("anc_orbit.drf.meta"));
    }

    #[test]
    fn extract_keeps_sidecar_basename_but_target_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sci_iuv_l1a_20260801_v03.dat.meta");
        fs::write(&path, b"{}").unwrap();

        let metadata = SidecarFileExtractor.extract(&path).unwrap().unwrap();
        let FileMetadata::Science(record) = metadata else {
            panic!("expected science-shaped metadata");
        };
        assert_eq!(record.filename, "sci_iuv_l1a_20260801_v03.dat.meta");
        assert_eq!(record.instrument, "iuv");
        assert_eq!(record.version, Some(3));
    }
}
