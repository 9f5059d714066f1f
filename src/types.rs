/*!
 * Fileops Types
 * Shared types for the file-operations contract
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::time::SystemTime;
use thiserror::Error;

/// Fileops operation result
pub type FileOpsResult<T> = Result<T, FileOpsError>;

/// Fileops errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOpsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Path too long: {length} native units exceeds bound of {bound}")]
    PathTooLong { length: usize, bound: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File I/O is disabled")]
    Disabled,

    #[error("I/O error: {0}")]
    IoError(String),
}

impl FileOpsError {
    /// Translate a native I/O error, attaching the failing operation context
    pub(crate) fn from_io(e: std::io::Error, context: impl Into<String>) -> Self {
        use std::io::ErrorKind;
        match e.kind() {
            ErrorKind::NotFound => FileOpsError::NotFound(context.into()),
            ErrorKind::PermissionDenied => FileOpsError::PermissionDenied(context.into()),
            ErrorKind::AlreadyExists => FileOpsError::AlreadyExists(context.into()),
            ErrorKind::InvalidInput => FileOpsError::InvalidArgument(context.into()),
            _ => FileOpsError::IoError(format!("{}: {}", context.into(), e)),
        }
    }
}

/// File open flags (bitset, combinable with `|`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OpenFlags(u32);

impl OpenFlags {
    /// Request read access
    pub const READ: OpenFlags = OpenFlags(0x1);
    /// Request write access
    pub const WRITE: OpenFlags = OpenFlags(0x2);
    /// Create the file if missing; existing contents are kept, never truncated
    pub const CREATE: OpenFlags = OpenFlags(0x4);
    /// Exclusive create: fail if the file already exists
    pub const CREATE_NEW: OpenFlags = OpenFlags(0x8);

    /// Empty flag set
    pub const fn empty() -> Self {
        OpenFlags(0)
    }

    pub const fn contains(self, other: OpenFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn read(self) -> bool {
        self.contains(Self::READ)
    }

    pub const fn write(self) -> bool {
        self.contains(Self::WRITE)
    }

    pub const fn create(self) -> bool {
        self.contains(Self::CREATE)
    }

    pub const fn create_new(self) -> bool {
        self.contains(Self::CREATE_NEW)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for OpenFlags {
    type Output = OpenFlags;

    fn bitor(self, rhs: OpenFlags) -> OpenFlags {
        OpenFlags(self.0 | rhs.0)
    }
}

impl fmt::Display for OpenFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (bit, name) in [
            (Self::READ, "READ"),
            (Self::WRITE, "WRITE"),
            (Self::CREATE, "CREATE"),
            (Self::CREATE_NEW, "CREATE_NEW"),
        ] {
            if self.contains(bit) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        if first {
            write!(f, "(empty)")?;
        }
        Ok(())
    }
}

/// File type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    File,
    Directory,
    Symlink,
    Unknown,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileType::File => write!(f, "file"),
            FileType::Directory => write!(f, "directory"),
            FileType::Symlink => write!(f, "symlink"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}

/// File permissions (Unix-style mode bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub mode: u32,
}

impl Permissions {
    pub fn new(mode: u32) -> Self {
        Self { mode }
    }

    pub fn readonly() -> Self {
        Self { mode: 0o444 }
    }

    /// Creation mode for new files: read/write for the owner, matching the
    /// hard-coded creation permissions of the native layer on hosts without
    /// a mode argument
    pub fn readwrite() -> Self {
        Self { mode: 0o644 }
    }

    pub fn is_readonly(&self) -> bool {
        self.mode & 0o200 == 0
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::readwrite()
    }
}

/// File metadata, produced by a successful `stat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub file_type: FileType,
    pub size: u64,
    pub permissions: Permissions,
    pub modified: SystemTime,
    pub accessed: SystemTime,
    pub created: SystemTime,
}

impl Metadata {
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_combine() {
        let flags = OpenFlags::READ | OpenFlags::WRITE | OpenFlags::CREATE;
        assert!(flags.read());
        assert!(flags.write());
        assert!(flags.create());
        assert!(!flags.create_new());
    }

    #[test]
    fn test_flags_independent_bits() {
        assert!(OpenFlags::READ.read());
        assert!(!OpenFlags::READ.write());
        assert!(OpenFlags::WRITE.write());
        assert!(!OpenFlags::WRITE.read());
    }

    #[test]
    fn test_flags_display() {
        assert_eq!((OpenFlags::READ | OpenFlags::CREATE).to_string(), "READ|CREATE");
        assert_eq!(OpenFlags::empty().to_string(), "(empty)");
    }

    #[test]
    fn test_permissions() {
        assert!(Permissions::readonly().is_readonly());
        assert!(!Permissions::readwrite().is_readonly());
    }

    #[test]
    fn test_io_error_translation() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            FileOpsError::from_io(e, "open x"),
            FileOpsError::NotFound("open x".to_string())
        );
    }
}
