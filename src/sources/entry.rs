use std::path::Path;

use serde::Serialize;

// NOTE: This is the normalized shape shared by both source formats, modeled on the
//       Deb822 Source Format described at
//       https://manpages.ubuntu.com/manpages/jammy/man5/sources.list.5.html#deb822-style%20format.
//
//       Some differences between this and the documented Deb822 Source Format are:
//       - Only one URI is kept even though the source format says URIs is an array
//       - Enabled is omitted because disabled entries are never emitted
//       - A legacy one-line entry always carries exactly one type and one suite
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub(crate) struct RepositoryEntry {
    #[serde(rename = "filename")]
    pub(crate) file: String,
    pub(crate) types: Vec<String>,
    pub(crate) uri: String,
    pub(crate) suites: Vec<String>,
    pub(crate) components: Vec<String>,
    pub(crate) architectures: Vec<String>,
}

// Raw per-format parse result. The `disabled`/`enabled` flags exist only so that
// normalization can filter; they are never serialized.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum RawSourceEntry {
    Legacy {
        source_type: String,
        uri: String,
        dist: String,
        components: Vec<String>,
        architectures: Vec<String>,
        disabled: bool,
    },
    Deb822 {
        types: Vec<String>,
        uris: Vec<String>,
        suites: Vec<String>,
        components: Vec<String>,
        architectures: Vec<String>,
        enabled: bool,
    },
}

impl RawSourceEntry {
    /// Normalizes a raw record into a [`RepositoryEntry`], or `None` when the record
    /// is disabled or incomplete and must not be emitted.
    pub(crate) fn into_entry(self, file: &Path) -> Option<RepositoryEntry> {
        match self {
            RawSourceEntry::Legacy {
                source_type,
                uri,
                dist,
                components,
                architectures,
                disabled,
            } => {
                if disabled || !matches!(source_type.as_str(), "deb" | "deb-src") {
                    return None;
                }
                Some(RepositoryEntry {
                    file: file.to_string_lossy().into_owned(),
                    types: vec![source_type],
                    uri,
                    suites: vec![dist],
                    components,
                    architectures,
                })
            }
            RawSourceEntry::Deb822 {
                types,
                uris,
                suites,
                components,
                architectures,
                enabled,
            } => {
                if !enabled || types.is_empty() || suites.is_empty() {
                    return None;
                }
                let uri = uris.into_iter().next()?;
                Some(RepositoryEntry {
                    file: file.to_string_lossy().into_owned(),
                    types,
                    uri,
                    suites,
                    components,
                    architectures,
                })
            }
        }
    }
}
