/*!
 * Fileops Library
 * Substitutable file-operations layer with process-wide backend selection
 */

pub mod null;
pub mod paths;
pub mod registry;
pub mod standard;
pub mod traits;
pub mod types;

// Re-exports
pub use null::{NullBackend, NullHandle};
pub use paths::{normalize_separators, to_native, MAX_PATH_LEN};
pub use registry::{BackendKind, FileOpsConfig, Registry};
pub use standard::StandardBackend;
pub use traits::{FileBackend, FileHandle};
pub use types::{FileOpsError, FileOpsResult, FileType, Metadata, OpenFlags, Permissions};
