use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::errors::{Error, Result};
use crate::core::options::ListOptions;
use crate::models::FileEntry;
use crate::services::fs::{resolve_dir, DirListing, RawEntry};
use crate::ui::format::{long_line, short_line};

/// Lists `input` into `out`.
///
/// A stat failure skips the entry in long format but aborts the listing in
/// short format.
pub fn run(input: &Path, options: &ListOptions, out: &mut impl Write) -> Result<()> {
    let root = resolve_dir(input)?;
    tracing::debug!(?options, "listing {}", root.display());

    for raw in DirListing::open(&root, options.show_hidden)? {
        let raw = raw?;
        if options.long_format {
            match stat(raw) {
                Ok(entry) => {
                    out.write_all(&long_line(&entry, options))?;
                    out.write_all(b"\n")?;
                }
                Err(err) => tracing::warn!("{}", err),
            }
        } else {
            let entry = stat(raw)?;
            out.write_all(&short_line(&entry, options))?;
            out.write_all(b"\n")?;
        }
    }

    if !options.long_format {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn stat(raw: RawEntry) -> Result<FileEntry> {
    match fs::metadata(&raw.path) {
        Ok(md) => Ok(FileEntry::from_metadata(raw.name, &md)),
        Err(source) => Err(Error::Stat {
            path: raw.path,
            source,
        }),
    }
}
