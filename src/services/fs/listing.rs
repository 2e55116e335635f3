use std::ffi::{OsStr, OsString};
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::core::errors::{Error, Result};

/// A name read from the directory stream plus the full path used to stat it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub path: PathBuf,
}

/// Lazy, single-pass view over one directory in native enumeration order.
///
/// `read_dir` never reports `.` and `..`, so both are yielded first and then
/// go through the same hidden-entry filter as everything else.
pub struct DirListing {
    root: PathBuf,
    pseudo: std::array::IntoIter<RawEntry, 2>,
    stream: ReadDir,
    show_hidden: bool,
}

impl DirListing {
    pub fn open(root: &Path, show_hidden: bool) -> Result<Self> {
        let stream = fs::read_dir(root).map_err(|source| Error::OpenDir {
            path: root.to_path_buf(),
            source,
        })?;
        let pseudo = [
            RawEntry {
                name: OsString::from("."),
                path: root.to_path_buf(),
            },
            RawEntry {
                name: OsString::from(".."),
                path: root.join(".."),
            },
        ];

        Ok(Self {
            root: root.to_path_buf(),
            pseudo: pseudo.into_iter(),
            stream,
            show_hidden,
        })
    }

    fn keep(&self, entry: &RawEntry) -> bool {
        self.show_hidden || !is_hidden(&entry.name)
    }
}

impl Iterator for DirListing {
    type Item = Result<RawEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.pseudo.next() {
            if self.keep(&entry) {
                return Some(Ok(entry));
            }
        }

        loop {
            let entry = match self.stream.next()? {
                Ok(entry) => RawEntry {
                    path: self.root.join(entry.file_name()),
                    name: entry.file_name(),
                },
                Err(source) => {
                    return Some(Err(Error::ReadEntry {
                        path: self.root.clone(),
                        source,
                    }))
                }
            };
            if self.keep(&entry) {
                return Some(Ok(entry));
            }
        }
    }
}

/// Only the literal `.` and `..` entries count as hidden; other dot-files
/// are always listed.
pub fn is_hidden(name: impl AsRef<OsStr>) -> bool {
    let name = name.as_ref();
    name == "." || name == ".."
}
