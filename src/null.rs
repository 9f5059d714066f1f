/*!
 * Null Backend
 * Guaranteed-failing no-op implementation of the fileops contract
 */

use std::fmt;
use std::io::SeekFrom;

use super::traits::{FileBackend, FileHandle};
use super::types::*;

/// Backend for configurations where file I/O is structurally disabled
///
/// Every operation reports "did not happen": `open` always fails, so no
/// handle ever reaches a caller through normal dispatch. [`NullHandle`] is
/// still public so the fixed per-slot results stay directly exercisable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        NullBackend
    }
}

impl FileBackend for NullBackend {
    fn open(&self, _path: &str, _flags: OpenFlags) -> FileOpsResult<Box<dyn FileHandle>> {
        Err(FileOpsError::Disabled)
    }

    fn name(&self) -> &str {
        "null"
    }
}

/// Handle whose every operation returns its fixed failure/zero value
///
/// No argument can change an outcome: `close`, `stat`, and `flush` fail,
/// `seek` reports position 0, transfers report 0 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandle;

impl FileHandle for NullHandle {
    fn close(self: Box<Self>) -> FileOpsResult<()> {
        Err(FileOpsError::Disabled)
    }

    fn stat(&self) -> FileOpsResult<Metadata> {
        Err(FileOpsError::Disabled)
    }

    fn seek(&mut self, _pos: SeekFrom) -> FileOpsResult<u64> {
        Ok(0)
    }

    fn read(&mut self, _buf: &mut [u8]) -> FileOpsResult<usize> {
        Ok(0)
    }

    fn write(&mut self, _buf: &[u8]) -> FileOpsResult<usize> {
        Ok(0)
    }

    fn read_line(&mut self, _out: &mut String) -> FileOpsResult<usize> {
        Ok(0)
    }

    fn read_to_string(&mut self, _out: &mut String) -> FileOpsResult<usize> {
        Ok(0)
    }

    fn write_str(&mut self, _s: &str) -> FileOpsResult<usize> {
        Ok(0)
    }

    fn write_fmt(&mut self, _args: fmt::Arguments<'_>) -> FileOpsResult<usize> {
        Ok(0)
    }

    fn flush(&mut self) -> FileOpsResult<()> {
        Err(FileOpsError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_never_yields_handle() {
        let backend = NullBackend::new();
        assert!(matches!(
            backend.open("anything", OpenFlags::READ),
            Err(FileOpsError::Disabled)
        ));
        assert!(matches!(
            backend.open("", OpenFlags::WRITE | OpenFlags::CREATE),
            Err(FileOpsError::Disabled)
        ));
    }

    #[test]
    fn test_handle_fixed_results() {
        let mut h = NullHandle;
        assert_eq!(h.seek(SeekFrom::End(-42)).unwrap(), 0);
        assert_eq!(h.read(&mut [0u8; 16]).unwrap(), 0);
        assert_eq!(h.write(b"payload").unwrap(), 0);
        assert_eq!(h.write_str("text").unwrap(), 0);
        assert_eq!(h.write_fmt(format_args!("{} {}", 1, 2)).unwrap(), 0);

        let mut s = String::new();
        assert_eq!(h.read_line(&mut s).unwrap(), 0);
        assert_eq!(h.read_to_string(&mut s).unwrap(), 0);
        assert!(s.is_empty());

        assert!(h.stat().is_err());
        assert!(h.flush().is_err());
        assert!(Box::new(h).close().is_err());
    }
}
