//! Pure filename classification used by the removal handler.
//!
//! A removed file no longer exists on disk, so classification has to work
//! from the name alone. Anything persisted through the science or level-0
//! tables counts as science here; those records are all removed through the
//! science delete operation.

use std::path::Path;

use crate::extract::{
    basename, matches_ancillary_basename, matches_level0_basename, matches_quicklook_basename,
    matches_science_basename, matches_sidecar_basename,
};

pub fn is_science_file(path: &Path) -> bool {
    basename(path).is_some_and(|name| {
        matches_science_basename(name)
            || matches_sidecar_basename(name)
            || matches_quicklook_basename(name)
            || matches_level0_basename(name)
    })
}

pub fn is_ancillary_file(path: &Path) -> bool {
    basename(path).is_some_and(matches_ancillary_basename)
}
