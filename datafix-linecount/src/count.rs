use crate::{LineCountError, LineFilter};
use camino::Utf8Path;
use fs_err as fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Number of lines in `bytes` as a text-mode line reader sees them.
///
/// `\n`, `\r\n` and a lone `\r` each end a line; a non-empty tail without a
/// terminator is one more line.
pub fn count_lines(bytes: &[u8]) -> u64 {
    let mut lines = 0u64;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => lines += 1,
            b'\r' => {
                lines += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    if matches!(bytes.last(), Some(b) if *b != b'\n' && *b != b'\r') {
        lines += 1;
    }
    lines
}

/// Walk `root` and return `(files, lines)` for every accepted file.
///
/// Only a failure to read `root` itself is an error.
pub fn count_dir(root: &Utf8Path, filter: &LineFilter) -> Result<(u64, u64), LineCountError> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Always include the root directory itself
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            filter.accepts_dir(&e.file_name().to_string_lossy())
        });

    let mut files = 0u64;
    let mut lines = 0u64;
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(LineCountError::Walk {
                    root: root.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                // Unreadable subtrees are skipped, the rest still counts.
                warn!(
                    path = ?err.path(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !filter.accepts_file(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let bytes = fs::read(entry.path())?;
        let n = count_lines(&bytes);
        debug!(path = %entry.path().display(), lines = n, "counted");
        files += 1;
        lines += n;
    }
    Ok((files, lines))
}

#[cfg(test)]
mod tests {
    use super::count_lines;

    #[test]
    fn counts_like_a_line_reader() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"a"), 1);
        assert_eq!(count_lines(b"a\n"), 1);
        assert_eq!(count_lines(b"a\nb"), 2);
        assert_eq!(count_lines(b"a\r\nb\r\n"), 2);
        assert_eq!(count_lines(b"a\rb\r"), 2);
        assert_eq!(count_lines(b"\n\n\n"), 3);
    }

    #[test]
    fn invalid_utf8_still_counts() {
        assert_eq!(count_lines(&[0xff, 0xfe, b'\n', 0x80]), 2);
    }
}
