/*!
 * Fileops Traits
 * The file-operations contract every backend implements
 */

use std::fmt;
use std::io::SeekFrom;

use super::types::*;

/// File-operations backend
///
/// A backend is the process-wide substitution unit: every file operation in
/// the application dispatches through whichever backend the registry holds.
/// Implementations must be total; a trait object cannot leave a slot
/// unpopulated, so a partially implemented backend is unrepresentable.
pub trait FileBackend: Send + Sync {
    /// Open a file, yielding an owned handle
    ///
    /// `path` is logical application-level text (UTF-8); backends performing
    /// real I/O normalize it for the host before any native call. Fails
    /// without producing a handle if normalization fails, if the native open
    /// fails, or if `flags` maps to no valid native mode.
    fn open(&self, path: &str, flags: OpenFlags) -> FileOpsResult<Box<dyn FileHandle>>;

    /// Backend name for registry logging
    fn name(&self) -> &str;
}

/// An open file resource
///
/// Handles are move-only: `close` consumes the handle, so use-after-close and
/// double-close do not compile. Dropping a handle without calling `close`
/// still releases the underlying resource, but discards any close error.
///
/// Partial transfers from `read`/`write` are reported exactly as the native
/// layer returns them; this layer never retries.
pub trait FileHandle: Send {
    /// Close the handle, reporting any native close error
    fn close(self: Box<Self>) -> FileOpsResult<()>;

    /// Stat the open resource
    fn stat(&self) -> FileOpsResult<Metadata>;

    /// Reposition, returning the new absolute offset
    fn seek(&mut self, pos: SeekFrom) -> FileOpsResult<u64>;

    /// Read into `buf`, returning bytes transferred
    fn read(&mut self, buf: &mut [u8]) -> FileOpsResult<usize>;

    /// Write from `buf`, returning bytes transferred
    fn write(&mut self, buf: &[u8]) -> FileOpsResult<usize>;

    /// Read one line (up to and including the newline) into `out`,
    /// returning bytes appended
    fn read_line(&mut self, out: &mut String) -> FileOpsResult<usize>;

    /// Read everything from the current position into `out`,
    /// returning bytes appended
    fn read_to_string(&mut self, out: &mut String) -> FileOpsResult<usize>;

    /// Write a string, returning bytes transferred
    fn write_str(&mut self, s: &str) -> FileOpsResult<usize>;

    /// Write pre-built format arguments (`format_args!`), returning bytes
    /// transferred
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> FileOpsResult<usize>;

    /// Flush buffered writes to the native layer
    fn flush(&mut self) -> FileOpsResult<()>;
}
