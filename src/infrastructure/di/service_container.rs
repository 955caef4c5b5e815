//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::SkylineService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, InputReader, RealFileSystem, StdinReader};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Standard input abstraction
    pub input: Arc<dyn InputReader>,

    /// Building input and skyline construction
    pub skyline: SkylineService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(StdinReader))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        input: Arc<dyn InputReader>,
    ) -> Self {
        let settings = Arc::new(settings);
        let skyline = SkylineService::new(Arc::clone(&fs));

        Self {
            settings,
            fs,
            input,
            skyline,
        }
    }
}
