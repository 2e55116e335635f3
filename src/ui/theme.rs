use std::borrow::Cow;

use crate::models::{FileEntry, FileKind};

/// SGR parameters for the listing palette.
pub mod sgr {
    pub const RESET: &str = "0";
    pub const DEFAULT: &str = "39";
    pub const BLUE: &str = "94";
    pub const GREEN: &str = "92";
    pub const CYAN: &str = "96";
    pub const MAGENTA: &str = "95";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Directory,
    Executable,
    Symlink,
    Device,
    Default,
}

impl Color {
    /// First match wins: directory, any execute bit, symlink, device.
    pub fn classify(entry: &FileEntry) -> Color {
        if entry.kind == FileKind::Dir {
            Color::Directory
        } else if entry.is_executable() {
            Color::Executable
        } else if entry.kind == FileKind::Link {
            Color::Symlink
        } else if entry.kind.is_device() {
            Color::Device
        } else {
            Color::Default
        }
    }

    pub fn sgr(&self) -> &'static str {
        match self {
            Color::Directory => sgr::BLUE,
            Color::Executable => sgr::GREEN,
            Color::Symlink => sgr::CYAN,
            Color::Device => sgr::MAGENTA,
            Color::Default => sgr::DEFAULT,
        }
    }
}

/// Wraps `text` in the color's escape and a reset, or returns it untouched.
/// Works on bytes so names that are not UTF-8 pass through unchanged.
pub fn paint(text: &[u8], color: Color, enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let mut out = format!("\x1b[{}m", color.sgr()).into_bytes();
        out.extend_from_slice(text);
        out.extend_from_slice(format!("\x1b[{}m", sgr::RESET).as_bytes());
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}
