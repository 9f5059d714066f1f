/*!
 * Fileops Registry
 * Process-wide selection of the active backend
 */

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tracing::info;

use super::null::NullBackend;
use super::standard::StandardBackend;
use super::traits::{FileBackend, FileHandle};
use super::types::{FileOpsResult, OpenFlags};

/// Built-in backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Real filesystem I/O
    #[default]
    Standard,
    /// File I/O structurally disabled
    Null,
}

/// Startup configuration for the registry
///
/// Selected once before the registry initializes; the original's compiled-out
/// default is expressed as `backend: Null` here rather than a build cfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileOpsConfig {
    pub backend: BackendKind,
}

impl FileOpsConfig {
    pub fn standard() -> Self {
        Self {
            backend: BackendKind::Standard,
        }
    }

    pub fn null() -> Self {
        Self {
            backend: BackendKind::Null,
        }
    }
}

// Arc<dyn FileBackend> is a fat pointer, so the swappable slot wraps it in a
// sized cell
struct Slot {
    backend: Arc<dyn FileBackend>,
}

/// Holder of the single active backend
///
/// Reads (dispatch) are lock-free atomic loads; `install` swaps the backend
/// wholesale. Callers obtain the operation set through here rather than
/// naming a backend directly, which is what makes substitution possible
/// without touching call sites. Swapping after operations are in flight is
/// the caller's hazard; handles already issued keep working against the
/// backend that produced them.
pub struct Registry {
    active: ArcSwap<Slot>,
}

impl Registry {
    /// Create a registry holding the configured built-in backend
    pub fn new(config: &FileOpsConfig) -> Self {
        let backend: Arc<dyn FileBackend> = match config.backend {
            BackendKind::Standard => Arc::new(StandardBackend::new()),
            BackendKind::Null => Arc::new(NullBackend::new()),
        };
        Self::with_backend(backend)
    }

    /// Create a registry holding a caller-supplied backend
    pub fn with_backend(backend: Arc<dyn FileBackend>) -> Self {
        info!(backend = backend.name(), "fileops backend selected");
        Self {
            active: ArcSwap::from_pointee(Slot { backend }),
        }
    }

    /// Current active backend
    pub fn active(&self) -> Arc<dyn FileBackend> {
        Arc::clone(&self.active.load().backend)
    }

    /// Replace the active backend wholesale
    pub fn install(&self, backend: Arc<dyn FileBackend>) {
        info!(backend = backend.name(), "fileops backend installed");
        self.active.store(Arc::new(Slot { backend }));
    }

    /// Dispatch `open` through the active backend
    pub fn open(&self, path: &str, flags: OpenFlags) -> FileOpsResult<Box<dyn FileHandle>> {
        self.active().open(path, flags)
    }

    /// Process-wide registry
    ///
    /// Default-initializes with [`FileOpsConfig::default`] on first access
    /// unless [`Registry::init_global`] ran earlier in startup.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(&FileOpsConfig::default()))
    }

    /// Initialize the process-wide registry with an explicit configuration
    ///
    /// A no-op if the global registry was already touched; use `install` on
    /// the returned registry to replace the backend after that point.
    pub fn init_global(config: &FileOpsConfig) -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(config))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&FileOpsConfig::default())
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();
