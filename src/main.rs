use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
#[cfg(test)]
use assert_cmd as _;
use clap::Parser;
#[cfg(test)]
use predicates as _;
use serde::Serialize;

use crate::sources::{collect, RepositoryEntry};

mod sources;

const SOURCES_LIST_DIRECTORY: &str = "/etc/apt/sources.list.d";

/// Reports the configured apt sources, from both legacy `.list` and deb822
/// `.sources` files, as a JSON document on stdout.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory to scan for .list and .sources files
    #[arg(long, default_value = SOURCES_LIST_DIRECTORY)]
    dir: PathBuf,

    /// Treat the deb822 .sources format as unsupported
    #[arg(long)]
    no_deb822: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct FactsReport {
    apt_sources: Vec<RepositoryEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let report = match list_source_files(&cli.dir) {
        Ok(files) => FactsReport {
            apt_sources: collect(&files, !cli.no_deb822),
            warnings: vec![],
        },
        Err(error) if error.kind() == ErrorKind::NotFound => FactsReport {
            apt_sources: vec![],
            warnings: vec![format!(
                "apt sources directory {} does not exist, apt_sources will be empty",
                cli.dir.display()
            )],
        },
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to list directory {}", cli.dir.display()));
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialize apt sources facts")?;
    println!("{output}");

    Ok(())
}

// The OS gives no ordering guarantee for directory entries; sorting keeps the
// emitted entry order reproducible across runs.
fn list_source_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir)?
        .map(|dir_entry| dir_entry.map(|dir_entry| dir_entry.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    files.sort();
    Ok(files)
}
