/*!
 * Standard Backend
 * Real filesystem I/O through the host's native primitives
 */

use std::fmt;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::time::SystemTime;

use super::paths;
use super::traits::{FileBackend, FileHandle};
use super::types::*;

/// Backend that normalizes paths and delegates to the native filesystem
///
/// A faithful, narrow translation layer: no retries, no interpretation of
/// native error detail beyond kind mapping, no internal buffering of caller
/// data. Partial transfers surface exactly as the host reports them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBackend;

impl StandardBackend {
    pub fn new() -> Self {
        StandardBackend
    }

    /// Derive native open options from the flag bitset
    ///
    /// CREATE is create-if-missing and never truncates; CREATE_NEW is the
    /// exclusive variant. Flags are mapped directly: nonsensical
    /// combinations (CREATE without WRITE) are left for the native layer to
    /// reject. A set with neither READ nor WRITE maps to no valid mode.
    fn open_options(flags: OpenFlags) -> FileOpsResult<fs::OpenOptions> {
        if !flags.read() && !flags.write() {
            return Err(FileOpsError::InvalidArgument(format!(
                "flags {} request neither read nor write access",
                flags
            )));
        }

        let mut options = fs::OpenOptions::new();
        options.read(flags.read());
        options.write(flags.write());
        options.create(flags.create());
        options.create_new(flags.create_new());
        Ok(options)
    }

    fn convert_file_type(ft: fs::FileType) -> FileType {
        if ft.is_dir() {
            FileType::Directory
        } else if ft.is_symlink() {
            FileType::Symlink
        } else if ft.is_file() {
            FileType::File
        } else {
            FileType::Unknown
        }
    }

    fn convert_metadata(md: fs::Metadata) -> Metadata {
        #[cfg(unix)]
        let mode = {
            use std::os::unix::fs::PermissionsExt;
            md.permissions().mode()
        };
        #[cfg(not(unix))]
        let mode = if md.permissions().readonly() {
            0o444
        } else {
            0o644
        };

        Metadata {
            file_type: Self::convert_file_type(md.file_type()),
            size: md.len(),
            permissions: Permissions::new(mode),
            modified: md.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            accessed: md.accessed().unwrap_or(SystemTime::UNIX_EPOCH),
            created: md.created().unwrap_or(SystemTime::UNIX_EPOCH),
        }
    }
}

impl FileBackend for StandardBackend {
    fn open(&self, path: &str, flags: OpenFlags) -> FileOpsResult<Box<dyn FileHandle>> {
        let options = Self::open_options(flags)?;
        let native = paths::to_native(path)?;

        let file = options
            .open(&native)
            .map_err(|e| FileOpsError::from_io(e, format!("open {}", path)))?;

        Ok(Box::new(StandardHandle {
            file,
            writable: flags.write(),
        }))
    }

    fn name(&self) -> &str {
        "standard"
    }
}

/// Handle over a native file descriptor
struct StandardHandle {
    file: fs::File,
    writable: bool,
}

impl FileHandle for StandardHandle {
    fn close(self: Box<Self>) -> FileOpsResult<()> {
        // sync_all surfaces the errors a native close would report on a
        // writable handle; the descriptor is released when `self.file` drops.
        // Read-only handles have nothing to flush and some hosts reject the
        // sync outright.
        if self.writable {
            self.file
                .sync_all()
                .map_err(|e| FileOpsError::from_io(e, "close"))
        } else {
            Ok(())
        }
    }

    fn stat(&self) -> FileOpsResult<Metadata> {
        let md = self
            .file
            .metadata()
            .map_err(|e| FileOpsError::from_io(e, "stat"))?;
        Ok(StandardBackend::convert_metadata(md))
    }

    fn seek(&mut self, pos: SeekFrom) -> FileOpsResult<u64> {
        self.file
            .seek(pos)
            .map_err(|e| FileOpsError::from_io(e, "seek"))
    }

    fn read(&mut self, buf: &mut [u8]) -> FileOpsResult<usize> {
        self.file
            .read(buf)
            .map_err(|e| FileOpsError::from_io(e, "read"))
    }

    fn write(&mut self, buf: &[u8]) -> FileOpsResult<usize> {
        self.file
            .write(buf)
            .map_err(|e| FileOpsError::from_io(e, "write"))
    }

    fn read_line(&mut self, out: &mut String) -> FileOpsResult<usize> {
        // BufReader would swallow readahead on drop; read byte-wise so the
        // native offset stays exactly one-past-the-newline
        let mut appended = 0;
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            let n = self
                .file
                .read(&mut byte)
                .map_err(|e| FileOpsError::from_io(e, "read_line"))?;
            if n == 0 {
                break;
            }
            line.push(byte[0]);
            if byte[0] == b'\n' {
                break;
            }
        }
        if !line.is_empty() {
            let text = String::from_utf8(line)
                .map_err(|_| FileOpsError::IoError("read_line: invalid UTF-8".to_string()))?;
            appended = text.len();
            out.push_str(&text);
        }
        Ok(appended)
    }

    fn read_to_string(&mut self, out: &mut String) -> FileOpsResult<usize> {
        self.file
            .read_to_string(out)
            .map_err(|e| FileOpsError::from_io(e, "read_to_string"))
    }

    fn write_str(&mut self, s: &str) -> FileOpsResult<usize> {
        self.write(s.as_bytes())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> FileOpsResult<usize> {
        match args.as_str() {
            Some(s) => self.write_str(s),
            None => self.write_str(&args.to_string()),
        }
    }

    fn flush(&mut self) -> FileOpsResult<()> {
        self.file
            .flush()
            .map_err(|e| FileOpsError::from_io(e, "flush"))
    }
}
