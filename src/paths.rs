/*!
 * Path Normalizer
 * Separator bashing and native re-encoding for caller-supplied paths
 */

use std::path::PathBuf;

use super::types::{FileOpsError, FileOpsResult};

/// Maximum path length in native encoding units (bytes on Unix hosts,
/// UTF-16 units on Windows hosts)
pub const MAX_PATH_LEN: usize = 1024;

#[cfg(windows)]
const HOST_SEPARATOR: char = '\\';
#[cfg(not(windows))]
const HOST_SEPARATOR: char = '/';

/// Canonicalize directory separators to the host convention
///
/// Pure transform: both `/` and `\` on input become the host separator.
/// Length checking happens in [`to_native`], not here.
pub fn normalize_separators(path: &str) -> String {
    bash_separators(path, HOST_SEPARATOR)
}

/// Separator bashing against an explicit convention, so both host styles
/// stay testable from any build
fn bash_separators(path: &str, sep: char) -> String {
    path.chars()
        .map(|c| if c == '/' || c == '\\' { sep } else { c })
        .collect()
}

/// Normalize and re-encode a path for the host's native open call
///
/// Bashes separators, then validates the result against the native
/// representation: interior NUL is rejected (native APIs consume C strings),
/// and a path whose native-encoded length would exceed [`MAX_PATH_LEN`] fails
/// with `PathTooLong` rather than being truncated. The input is UTF-8 by
/// construction, so re-encoding itself cannot fail.
pub fn to_native(path: &str) -> FileOpsResult<PathBuf> {
    if path.contains('\0') {
        return Err(FileOpsError::InvalidPath(
            "path contains interior NUL".to_string(),
        ));
    }

    let bashed = normalize_separators(path);
    let length = native_len(&bashed);
    if length >= MAX_PATH_LEN {
        return Err(FileOpsError::PathTooLong {
            length,
            bound: MAX_PATH_LEN,
        });
    }

    Ok(PathBuf::from(bashed))
}

/// Length of the path in the host's native encoding units
#[cfg(windows)]
fn native_len(path: &str) -> usize {
    path.encode_utf16().count()
}

#[cfg(not(windows))]
fn native_len(path: &str) -> usize {
    path.len()
}
