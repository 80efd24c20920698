use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use crate::sources::{parse_list, parse_sources, RawSourceEntry, RepositoryEntry};

/// Collects the enabled repository entries from the given files, in order.
///
/// `.list` files go through the legacy line parser, `.sources` files through the
/// deb822 parser when `deb822_supported` is set (and are invisible otherwise),
/// and files with any other suffix are ignored. Entries keep their per-file and
/// within-file encounter order and are never deduplicated. A file that cannot be
/// read is skipped with a warning; the remaining files still contribute.
pub(crate) fn collect(files: &[PathBuf], deb822_supported: bool) -> Vec<RepositoryEntry> {
    let mut entries = Vec::new();

    for file in files {
        let parse: fn(&str) -> Vec<RawSourceEntry> =
            match file.extension().and_then(OsStr::to_str) {
                Some("list") => parse_list,
                Some("sources") if deb822_supported => parse_sources,
                _ => continue,
            };

        match fs::read_to_string(file) {
            Ok(contents) => entries.extend(
                parse(&contents)
                    .into_iter()
                    .filter_map(|record| record.into_entry(file)),
            ),
            Err(error) => {
                log::warn!("skipping unreadable source file {}: {error}", file.display());
            }
        }
    }

    entries
}
