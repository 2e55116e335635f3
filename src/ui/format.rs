use std::os::unix::ffi::OsStrExt;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::core::options::ListOptions;
use crate::models::{FileEntry, FileKind};
use crate::services::fs::{group_name, user_name};
use crate::ui::theme::{paint, Color};

const PERMISSION_LETTERS: [char; 3] = ['r', 'w', 'x'];

/// `drwxr-x---` style rendering. Only directories get a type letter.
pub fn permission_string(kind: FileKind, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(if kind == FileKind::Dir { 'd' } else { '-' });
    for bit in (0..9).rev() {
        if mode & (1 << bit) != 0 {
            out.push(PERMISSION_LETTERS[2 - bit % 3]);
        } else {
            out.push('-');
        }
    }
    out
}

pub fn format_timestamp(modified: impl Into<OffsetDateTime>, offset: UtcOffset) -> String {
    let local = modified.into().to_offset(offset);
    local
        .format(format_description!("[month repr:short] [day] [hour]:[minute]"))
        .unwrap_or_else(|err| {
            tracing::warn!("failed to format timestamp: {}", err);
            String::from("??? ?? ??:??")
        })
}

/// One detailed line, without the newline. The name is appended as raw bytes.
pub fn long_line(entry: &FileEntry, options: &ListOptions) -> Vec<u8> {
    let mut line = format!(
        "{} {:>2} {} {} {:>8} {} ",
        permission_string(entry.kind, entry.mode),
        entry.nlink,
        user_name(entry.uid),
        group_name(entry.gid),
        entry.size,
        format_timestamp(entry.modified, options.utc_offset),
    )
    .into_bytes();
    line.extend_from_slice(entry.name.as_bytes());
    paint(&line, Color::classify(entry), options.color).into_owned()
}

pub fn short_line(entry: &FileEntry, options: &ListOptions) -> Vec<u8> {
    paint(entry.name.as_bytes(), Color::classify(entry), options.color).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    use std::time::{Duration, SystemTime};
    use time::macros::datetime;

    fn entry(name: impl Into<OsString>, kind: FileKind, mode: u32) -> FileEntry {
        FileEntry {
            name: name.into(),
            kind,
            mode,
            nlink: 3,
            uid: 3_999_999_999,
            gid: 3_999_999_999,
            size: 4096,
            // 2024-03-05 09:07:00 UTC
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_629_620),
        }
    }

    fn plain() -> ListOptions {
        ListOptions::new(false, true)
            .with_color(false)
            .with_utc_offset(UtcOffset::UTC)
    }

    #[test]
    fn permission_strings() {
        assert_eq!(permission_string(FileKind::Dir, 0o755), "drwxr-xr-x");
        assert_eq!(permission_string(FileKind::File, 0o644), "-rw-r--r--");
        assert_eq!(permission_string(FileKind::File, 0), "----------");
        assert_eq!(permission_string(FileKind::Link, 0o777), "-rwxrwxrwx");
        assert_eq!(permission_string(FileKind::CharDevice, 0o620), "-rw--w----");
        assert_eq!(permission_string(FileKind::File, 0o421), "-r---w---x");
    }

    #[test]
    fn timestamp_is_zero_padded_and_offset_aware() {
        let at = datetime!(2024-03-05 09:07 UTC);
        assert_eq!(format_timestamp(at, UtcOffset::UTC), "Mar 05 09:07");

        let plus_two = UtcOffset::from_hms(2, 0, 0).unwrap();
        assert_eq!(format_timestamp(at, plus_two), "Mar 05 11:07");
    }

    #[test]
    fn long_line_layout() {
        let line = long_line(&entry("notes.txt", FileKind::File, 0o644), &plain());
        assert_eq!(
            line,
            b"-rw-r--r--  3 3999999999 3999999999     4096 Mar 05 09:07 notes.txt"
        );
    }

    #[test]
    fn long_line_is_colored_as_a_whole() {
        let options = plain().with_color(true);
        let line = long_line(&entry("bin", FileKind::Dir, 0o755), &options);
        assert!(line.starts_with(b"\x1b[94mdrwxr-xr-x"));
        assert!(line.ends_with(b"bin\x1b[0m"));
    }

    #[test]
    fn short_line_is_just_the_name() {
        let e = entry("run.sh", FileKind::File, 0o755);
        assert_eq!(short_line(&e, &plain()), b"run.sh");
        assert_eq!(short_line(&e, &plain().with_color(true)), b"\x1b[92mrun.sh\x1b[0m");
    }

    #[test]
    fn non_utf8_names_keep_their_bytes() {
        let name = OsString::from_vec(b"bad\xffname".to_vec());
        let e = entry(name, FileKind::File, 0o644);
        assert_eq!(short_line(&e, &plain()), b"bad\xffname");
        assert!(long_line(&e, &plain()).ends_with(b" bad\xffname"));
    }
}
